use crate::modules::provider::traits::Translator;
use crate::shared::errors::AppResult;
use async_trait::async_trait;

/// Returns text unchanged; used when no translation service is configured
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopTranslator;

#[async_trait]
impl Translator for NoopTranslator {
    async fn translate(&self, text: &str, _target_language: &str) -> AppResult<String> {
        Ok(text.to_string())
    }
}
