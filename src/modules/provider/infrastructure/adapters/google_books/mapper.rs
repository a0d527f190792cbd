use super::models::{Volume, VolumeList};
use crate::modules::provider::domain::{CatalogPage, ImageLinks, IndustryIdentifier, RawBook};

/// Maps Google Books volumes onto provider-neutral records
pub struct GoogleBooksMapper;

impl GoogleBooksMapper {
    pub fn to_page(list: VolumeList) -> CatalogPage {
        CatalogPage::new(
            list.items.into_iter().map(Self::to_raw_book).collect(),
            list.total_items,
        )
    }

    pub fn to_raw_book(volume: Volume) -> RawBook {
        let info = volume.volume_info;
        let links = info.image_links.unwrap_or_default();

        RawBook {
            id: volume.id,
            title: info.title,
            authors: info.authors,
            image_links: ImageLinks {
                extra_large: links.extra_large,
                large: links.large,
                medium: links.medium,
                thumbnail: links.thumbnail,
                small_thumbnail: links.small_thumbnail,
            },
            description: info.description,
            page_count: info.page_count,
            published_date: info.published_date,
            publishers: info.publisher.into_iter().collect(),
            categories: info.categories,
            languages: info.language.into_iter().collect(),
            industry_identifiers: info
                .industry_identifiers
                .into_iter()
                .map(|id| IndustryIdentifier {
                    kind: id.kind,
                    identifier: id.identifier,
                })
                .collect(),
        }
    }
}
