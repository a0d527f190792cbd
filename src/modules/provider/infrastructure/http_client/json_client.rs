//! Thin JSON-over-HTTP client shared by the catalog and translation adapters
//!
//! Every request is made exactly once. Pacing and retries belong to the
//! request queue, so this layer only classifies failures: HTTP 429 becomes
//! `RateLimitError`, 5xx and transport failures become
//! `ExternalServiceError`, anything else non-2xx becomes `ApiError`.

use crate::shared::errors::{AppError, AppResult};
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;

const USER_AGENT: &str = concat!("bookshelf/", env!("CARGO_PKG_VERSION"));
const BODY_PREVIEW_LEN: usize = 200;

#[derive(Clone)]
pub struct JsonClient {
    client: Client,
    provider_name: String,
}

impl JsonClient {
    pub fn new(provider_name: &str, timeout: Duration) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| {
                AppError::ConfigError(format!(
                    "Failed to build HTTP client for {}: {}",
                    provider_name, e
                ))
            })?;

        Ok(Self {
            client,
            provider_name: provider_name.to_string(),
        })
    }

    pub fn provider_name(&self) -> &str {
        &self.provider_name
    }

    pub async fn get<T: DeserializeOwned>(&self, url: &str) -> AppResult<T> {
        let response = self.send(self.client.get(url)).await?;
        self.parse(response).await
    }

    pub async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        url: &str,
        body: &B,
    ) -> AppResult<T> {
        let response = self.send(self.client.post(url).json(body)).await?;
        self.parse(response).await
    }

    /// Send a prepared request and classify a non-2xx status as an error
    async fn send(&self, request: RequestBuilder) -> AppResult<Response> {
        let response = request
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        Err(classify_status(&self.provider_name, status, &body))
    }

    async fn parse<T: DeserializeOwned>(&self, response: Response) -> AppResult<T> {
        let text = response.text().await.map_err(|e| {
            AppError::SerializationError(format!(
                "Failed to read {} response: {}",
                self.provider_name, e
            ))
        })?;

        serde_json::from_str(&text).map_err(|e| {
            AppError::SerializationError(format!(
                "Failed to parse {} response: {}. Response: {}",
                self.provider_name,
                e,
                preview(&text)
            ))
        })
    }

    fn transport_error(&self, error: reqwest::Error) -> AppError {
        match AppError::from(error) {
            AppError::ExternalServiceError(msg) => {
                AppError::ExternalServiceError(format!("{}: {}", self.provider_name, msg))
            }
            other => other,
        }
    }
}

fn classify_status(provider: &str, status: StatusCode, body: &str) -> AppError {
    let message = format!("{} API returned {}: {}", provider, status, preview(body));

    if status == StatusCode::TOO_MANY_REQUESTS {
        AppError::RateLimitError(message)
    } else if status.is_server_error() {
        AppError::ExternalServiceError(message)
    } else if status == StatusCode::NOT_FOUND {
        AppError::NotFound(message)
    } else {
        AppError::ApiError(message)
    }
}

fn preview(text: &str) -> String {
    if text.chars().count() > BODY_PREVIEW_LEN {
        let cut: String = text.chars().take(BODY_PREVIEW_LEN).collect();
        format!("{}...", cut)
    } else {
        text.to_string()
    }
}
