use super::models::{SearchDoc, SearchResponse};
use crate::modules::provider::domain::{CatalogPage, ImageLinks, IndustryIdentifier, RawBook};

const COVER_BASE_URL: &str = "https://covers.openlibrary.org/b/id";

/// Maps Open Library search documents onto provider-neutral records
pub struct OpenLibraryMapper;

impl OpenLibraryMapper {
    pub fn to_page(response: SearchResponse) -> CatalogPage {
        CatalogPage::new(
            response.docs.into_iter().map(Self::to_raw_book).collect(),
            response.num_found,
        )
    }

    pub fn to_raw_book(doc: SearchDoc) -> RawBook {
        let cover = doc
            .cover_i
            .filter(|id| *id > 0)
            .map(|id| format!("{}/{}-L.jpg", COVER_BASE_URL, id));

        RawBook {
            id: doc.key.as_deref().map(work_id).unwrap_or_default(),
            title: doc.title,
            authors: doc.author_name,
            image_links: ImageLinks {
                large: cover,
                ..ImageLinks::default()
            },
            description: doc.first_sentence.into_iter().next(),
            page_count: doc.number_of_pages_median,
            published_date: doc.first_publish_year.map(|year| year.to_string()),
            publishers: doc.publisher.into_iter().take(3).collect(),
            categories: doc.subject.into_iter().take(5).collect(),
            languages: doc.language,
            industry_identifiers: doc
                .isbn
                .into_iter()
                .find(|isbn| isbn.len() == 13 && isbn.chars().all(|c| c.is_ascii_digit()))
                .map(IndustryIdentifier::isbn13)
                .into_iter()
                .collect(),
        }
    }
}

/// `/works/OL45804W` -> `OL45804W`
fn work_id(key: &str) -> String {
    key.rsplit('/').next().unwrap_or(key).to_string()
}
