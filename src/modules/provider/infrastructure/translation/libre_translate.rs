use crate::modules::provider::infrastructure::http_client::JsonClient;
use crate::modules::provider::traits::Translator;
use crate::shared::config::TranslationConfig;
use crate::shared::errors::AppResult;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Serialize)]
struct TranslateRequest<'a> {
    q: &'a str,
    source: &'a str,
    target: &'a str,
    format: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    api_key: Option<&'a str>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TranslateResponse {
    translated_text: String,
}

/// Client for a LibreTranslate-compatible `/translate` endpoint
pub struct LibreTranslateTranslator {
    http_client: JsonClient,
    endpoint: String,
    api_key: Option<String>,
}

impl LibreTranslateTranslator {
    pub fn new(config: &TranslationConfig, timeout: Duration) -> AppResult<Self> {
        Ok(Self {
            http_client: JsonClient::new("LibreTranslate", timeout)?,
            endpoint: format!("{}/translate", config.url.trim_end_matches('/')),
            api_key: config.api_key.clone(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl Translator for LibreTranslateTranslator {
    async fn translate(&self, text: &str, target_language: &str) -> AppResult<String> {
        let request = TranslateRequest {
            q: text,
            source: "auto",
            target: target_language,
            format: "text",
            api_key: self.api_key.as_deref(),
        };

        let response: TranslateResponse = self.http_client.post(&self.endpoint, &request).await?;
        Ok(response.translated_text)
    }
}
