use async_trait::async_trait;
use serde_json::Value;

use crate::{
    error::{Result, TldwError},
    language::Language,
    types::TranslationResult,
};

pub const GOOGLE_TRANSLATE_URL: &str = "https://translate.googleapis.com/translate_a/single";

#[async_trait]
pub trait Translator: Send + Sync {
    async fn translate(&self, text: &str, target: Language) -> Result<String>;
}

/// Client for the public Google Translate web endpoint. Needs no API key.
pub struct GoogleTranslator {
    http: reqwest::Client,
    api_url: String,
}

impl GoogleTranslator {
    pub fn new() -> Self {
        Self::with_endpoint(GOOGLE_TRANSLATE_URL)
    }

    pub fn with_endpoint(api_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_url: api_url.into(),
        }
    }
}

impl Default for GoogleTranslator {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Translator for GoogleTranslator {
    async fn translate(&self, text: &str, target: Language) -> Result<String> {
        let response = self
            .http
            .post(&self.api_url)
            .query(&[
                ("client", "gtx"),
                ("sl", "auto"),
                ("tl", target.code()),
                ("dt", "t"),
            ])
            .form(&[("q", text)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(TldwError::InvalidApiResponse(format!(
                "HTTP {status}: {}",
                response.text().await.unwrap_or_default()
            )));
        }

        let body = response.json::<Value>().await?;
        parse_translation_response(&body)
    }
}

/// The first array holds one `[translated, original, ...]` entry per
/// sentence; the translation is their concatenation.
pub fn parse_translation_response(body: &Value) -> Result<String> {
    let sentences = body[0]
        .as_array()
        .ok_or_else(|| TldwError::InvalidApiResponse(body.to_string()))?;

    Ok(sentences
        .iter()
        .filter_map(|sentence| sentence[0].as_str())
        .collect())
}

/// Translate `text` into `target`, folding any failure into
/// [`TldwError::TranslationFailed`].
pub async fn translate_summary(
    translator: &dyn Translator,
    text: &str,
    target: Language,
) -> Result<TranslationResult> {
    tracing::debug!(language = target.code(), chars = text.len(), "translating");
    let translated = translator
        .translate(text, target)
        .await
        .map_err(|e| TldwError::TranslationFailed {
            language: target.name().to_string(),
            reason: e.to_string(),
        })?;

    Ok(TranslationResult {
        language: target,
        text: translated,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_sentence_translations() {
        let body = serde_json::json!([
            [
                ["Hallo Welt. ", "Hello world. ", null, null, 10],
                ["Wie geht's?", "How are you?", null, null, 10]
            ],
            null,
            "en"
        ]);
        assert_eq!(
            parse_translation_response(&body).unwrap(),
            "Hallo Welt. Wie geht's?"
        );
    }

    #[test]
    fn unexpected_shape_is_rejected() {
        let body = serde_json::json!({ "error": "nope" });
        assert!(matches!(
            parse_translation_response(&body),
            Err(TldwError::InvalidApiResponse(_))
        ));
    }

    struct Offline;

    #[async_trait]
    impl Translator for Offline {
        async fn translate(&self, _text: &str, _target: Language) -> Result<String> {
            Err(TldwError::InvalidApiResponse("connection refused".into()))
        }
    }

    #[tokio::test]
    async fn failure_is_reported_with_language() {
        let german = Language::from_code("de").unwrap();
        let err = translate_summary(&Offline, "text", german).await.unwrap_err();
        assert_eq!(
            err.to_string(),
            "Translation to german failed: Invalid API response: connection refused"
        );
    }
}
