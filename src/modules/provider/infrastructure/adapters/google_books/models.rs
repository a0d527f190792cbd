// Google Books v1 volumes API models
// https://developers.google.com/books/docs/v1/reference/volumes

use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VolumeList {
    #[serde(default)]
    pub total_items: Option<u32>,
    #[serde(default)]
    pub items: Vec<Volume>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Volume {
    pub id: String,
    #[serde(default)]
    pub volume_info: VolumeInfo,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VolumeInfo {
    pub title: Option<String>,
    #[serde(default)]
    pub authors: Vec<String>,
    pub publisher: Option<String>,
    pub published_date: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub industry_identifiers: Vec<VolumeIdentifier>,
    pub page_count: Option<u32>,
    #[serde(default)]
    pub categories: Vec<String>,
    pub image_links: Option<VolumeImageLinks>,
    pub language: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct VolumeIdentifier {
    #[serde(rename = "type")]
    pub kind: String,
    pub identifier: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VolumeImageLinks {
    pub small_thumbnail: Option<String>,
    pub thumbnail: Option<String>,
    pub medium: Option<String>,
    pub large: Option<String>,
    pub extra_large: Option<String>,
}
