// Open Library search API models
// https://openlibrary.org/dev/docs/api/search

use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SearchResponse {
    #[serde(default, rename = "numFound")]
    pub num_found: Option<u32>,
    #[serde(default)]
    pub docs: Vec<SearchDoc>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SearchDoc {
    /// Work key, e.g. `/works/OL45804W`
    pub key: Option<String>,
    pub title: Option<String>,
    #[serde(default)]
    pub author_name: Vec<String>,
    pub cover_i: Option<i64>,
    pub first_publish_year: Option<i32>,
    pub number_of_pages_median: Option<u32>,
    #[serde(default)]
    pub publisher: Vec<String>,
    #[serde(default)]
    pub subject: Vec<String>,
    #[serde(default)]
    pub language: Vec<String>,
    #[serde(default)]
    pub isbn: Vec<String>,
    /// Only present when the `first_sentence` field is requested
    #[serde(default)]
    pub first_sentence: Vec<String>,
}
