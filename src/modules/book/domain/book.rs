use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use super::reading_status::ReadingStatus;

pub const UNKNOWN_AUTHOR: &str = "Auteur inconnu";
pub const PLACEHOLDER_COVER: &str = "/placeholder.svg";

/// Canonical, provider-agnostic book record
///
/// Serialized in camelCase so library exports stay compatible with the
/// JSON files produced by earlier versions of the application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: String,
    pub title: String,
    #[serde(default, deserialize_with = "string_or_seq")]
    pub author: Vec<String>,
    #[serde(default = "placeholder_cover")]
    pub cover: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub number_of_pages: Option<u32>,
    #[serde(default)]
    pub publish_date: Option<String>,
    #[serde(default)]
    pub publishers: Vec<String>,
    #[serde(default)]
    pub subjects: Vec<String>,
    #[serde(default, deserialize_with = "string_or_seq")]
    pub language: Vec<String>,
    #[serde(default)]
    pub isbn: Option<String>,
    #[serde(default)]
    pub status: ReadingStatus,
    #[serde(default)]
    pub completion_date: Option<DateTime<Utc>>,
}

impl Book {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            author: vec![UNKNOWN_AUTHOR.to_string()],
            cover: PLACEHOLDER_COVER.to_string(),
            description: String::new(),
            number_of_pages: None,
            publish_date: None,
            publishers: Vec::new(),
            subjects: Vec::new(),
            language: Vec::new(),
            isbn: None,
            status: ReadingStatus::ToRead,
            completion_date: None,
        }
    }

    pub fn with_authors(mut self, authors: Vec<String>) -> Self {
        self.author = authors;
        self
    }

    pub fn with_language(mut self, language: Vec<String>) -> Self {
        self.language = language;
        self
    }

    pub fn with_pages(mut self, pages: u32) -> Self {
        self.number_of_pages = Some(pages);
        self
    }

    pub fn primary_author(&self) -> Option<&str> {
        self.author.first().map(String::as_str)
    }

    /// Lowercased `title_firstauthor` key used to spot the same book
    /// coming back from several sources.
    pub fn identity_key(&self) -> String {
        format!(
            "{}_{}",
            self.title.to_lowercase(),
            self.primary_author().unwrap_or_default().to_lowercase()
        )
    }

    /// Change the reading status. A completion date only survives while the
    /// book is completed.
    pub fn set_status(&mut self, status: ReadingStatus, completion_date: Option<DateTime<Utc>>) {
        self.status = status;
        self.completion_date = match status {
            ReadingStatus::Completed => completion_date,
            ReadingStatus::ToRead | ReadingStatus::Reading => None,
        };
    }

    pub fn mark_completed(&mut self, completion_date: DateTime<Utc>) {
        self.set_status(ReadingStatus::Completed, Some(completion_date));
    }

    pub fn is_completed(&self) -> bool {
        self.status == ReadingStatus::Completed
    }
}

fn placeholder_cover() -> String {
    PLACEHOLDER_COVER.to_string()
}

/// Older exports stored a single author (or language) as a bare string.
fn string_or_seq<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        One(String),
        Many(Vec<Option<String>>),
        Null(()),
    }

    Ok(match OneOrMany::deserialize(deserializer)? {
        OneOrMany::One(value) => vec![value],
        OneOrMany::Many(values) => values.into_iter().flatten().collect(),
        OneOrMany::Null(()) => Vec::new(),
    })
}
