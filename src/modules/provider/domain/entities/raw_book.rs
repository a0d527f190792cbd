use serde::{Deserialize, Serialize};

/// Image links as reported by a catalog, largest first
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImageLinks {
    pub extra_large: Option<String>,
    pub large: Option<String>,
    pub medium: Option<String>,
    pub thumbnail: Option<String>,
    pub small_thumbnail: Option<String>,
}

impl ImageLinks {
    /// Candidates in order of preference
    pub fn by_preference(&self) -> [Option<&str>; 5] {
        [
            self.extra_large.as_deref(),
            self.large.as_deref(),
            self.medium.as_deref(),
            self.thumbnail.as_deref(),
            self.small_thumbnail.as_deref(),
        ]
    }
}

/// Structured identifier (`ISBN_10`, `ISBN_13`, `OTHER`, ...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndustryIdentifier {
    #[serde(rename = "type")]
    pub kind: String,
    pub identifier: String,
}

impl IndustryIdentifier {
    pub fn isbn13(identifier: impl Into<String>) -> Self {
        Self {
            kind: "ISBN_13".to_string(),
            identifier: identifier.into(),
        }
    }
}

/// Provider-neutral shape of one catalog hit, before normalization
///
/// Adapters map their wire models into this; the normalizer turns it into a
/// [`Book`](crate::modules::book::Book) or rejects it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawBook {
    pub id: String,
    pub title: Option<String>,
    pub authors: Vec<String>,
    pub image_links: ImageLinks,
    pub description: Option<String>,
    pub page_count: Option<u32>,
    pub published_date: Option<String>,
    pub publishers: Vec<String>,
    pub categories: Vec<String>,
    pub languages: Vec<String>,
    pub industry_identifiers: Vec<IndustryIdentifier>,
}

impl RawBook {
    pub fn new(id: impl Into<String>, title: Option<&str>) -> Self {
        Self {
            id: id.into(),
            title: title.map(str::to_string),
            ..Self::default()
        }
    }
}
