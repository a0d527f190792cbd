//! Turns provider-neutral [`RawBook`]s into canonical [`Book`] records.

use std::sync::Arc;

use crate::modules::book::domain::{Book, ReadingStatus, PLACEHOLDER_COVER, UNKNOWN_AUTHOR};
use crate::modules::provider::domain::{ImageLinks, IndustryIdentifier, RawBook};
use crate::modules::provider::traits::Translator;

const ISBN_13: &str = "ISBN_13";

pub struct ResultNormalizer {
    translator: Arc<dyn Translator>,
    target_language: String,
}

impl ResultNormalizer {
    pub fn new(translator: Arc<dyn Translator>, target_language: impl Into<String>) -> Self {
        Self {
            translator,
            target_language: target_language.into(),
        }
    }

    /// Normalize one catalog hit. Returns `None` when the hit has no usable
    /// title or id.
    pub async fn normalize(&self, raw: RawBook) -> Option<Book> {
        let title = raw
            .title
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())?
            .to_string();
        let id = raw.id.trim();
        if id.is_empty() {
            log::debug!("Dropping '{}': catalog item has no id", title);
            return None;
        }

        let description = self.translate_description(raw.description).await;

        Some(Book {
            id: id.to_string(),
            title,
            author: Self::resolve_authors(raw.authors),
            cover: Self::resolve_cover(&raw.image_links),
            description,
            number_of_pages: raw.page_count,
            publish_date: raw.published_date.filter(|d| !d.trim().is_empty()),
            publishers: non_blank(raw.publishers),
            subjects: non_blank(raw.categories),
            language: non_blank(raw.languages)
                .into_iter()
                .map(|code| code.trim().to_lowercase())
                .collect(),
            isbn: Self::resolve_isbn(&raw.industry_identifiers),
            status: ReadingStatus::ToRead,
            completion_date: None,
        })
    }

    /// First non-empty image link by size, upgraded to https, or the
    /// placeholder.
    pub fn resolve_cover(links: &ImageLinks) -> String {
        links
            .by_preference()
            .into_iter()
            .flatten()
            .map(str::trim)
            .find(|url| !url.is_empty())
            .map(upgrade_to_https)
            .unwrap_or_else(|| PLACEHOLDER_COVER.to_string())
    }

    pub fn resolve_authors(authors: Vec<String>) -> Vec<String> {
        let authors = non_blank(authors);
        if authors.is_empty() {
            vec![UNKNOWN_AUTHOR.to_string()]
        } else {
            authors
        }
    }

    pub fn resolve_isbn(identifiers: &[IndustryIdentifier]) -> Option<String> {
        identifiers
            .iter()
            .find(|id| id.kind == ISBN_13)
            .map(|id| id.identifier.clone())
    }

    async fn translate_description(&self, description: Option<String>) -> String {
        let original = match description {
            Some(text) if !text.trim().is_empty() => text,
            _ => return String::new(),
        };

        match self
            .translator
            .translate(&original, &self.target_language)
            .await
        {
            Ok(translated) if !translated.trim().is_empty() => translated,
            Ok(_) => original,
            Err(e) => {
                log::debug!("Translation unavailable, keeping original text: {}", e);
                original
            }
        }
    }
}

fn upgrade_to_https(url: &str) -> String {
    match url.strip_prefix("http:") {
        Some(rest) => format!("https:{}", rest),
        None => url.to_string(),
    }
}

fn non_blank(values: Vec<String>) -> Vec<String> {
    values
        .into_iter()
        .filter(|value| !value.trim().is_empty())
        .collect()
}
