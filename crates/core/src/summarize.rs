use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use crate::{
    error::{Result, TldwError},
    provider::Provider,
    types::{Summary, SummaryBatch},
};

static CHAT_SUMMARY_PROMPT: &str = r#"You are a summarization model. You receive one fragment of an auto-generated video transcript.

Write a concise, factual summary of the fragment in 2-4 sentences.

Rules:
- The fragment may start or end in the middle of a word or sentence; ignore the cut
- Do not invent information that is not in the fragment
- Output ONLY the summary text, no preamble, no markdown"#;

/// A model that turns one piece of text into a shorter one.
#[async_trait]
pub trait Summarizer: Send + Sync {
    async fn summarize(&self, text: &str) -> Result<String>;
}

/// Hosted inference for a seq2seq summarization model.
pub struct HuggingFaceSummarizer {
    http: reqwest::Client,
    api_url: String,
    api_key: String,
}

impl HuggingFaceSummarizer {
    pub fn new(api_key: String) -> Self {
        Self::with_endpoint(Provider::HuggingFace.config().api_url, api_key)
    }

    pub fn with_endpoint(api_url: impl Into<String>, api_key: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_url: api_url.into(),
            api_key,
        }
    }
}

#[async_trait]
impl Summarizer for HuggingFaceSummarizer {
    async fn summarize(&self, text: &str) -> Result<String> {
        let response = self
            .http
            .post(&self.api_url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&serde_json::json!({ "inputs": text }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(TldwError::InvalidApiResponse(format!("HTTP {status}: {body}")));
        }

        let body = response.json::<Value>().await?;
        parse_inference_response(&body)
    }
}

/// Extract `summary_text` from a `[{"summary_text": ...}]` inference reply.
pub fn parse_inference_response(body: &Value) -> Result<String> {
    if let Some(error) = body["error"].as_str() {
        return Err(TldwError::InvalidApiResponse(error.to_string()));
    }

    body[0]["summary_text"]
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| TldwError::InvalidApiResponse(body.to_string()))
}

/// Summarization through an OpenAI-compatible chat-completions endpoint.
pub struct ChatSummarizer {
    http: reqwest::Client,
    api_url: String,
    api_key: String,
    model: String,
}

impl ChatSummarizer {
    pub fn new(provider: Provider, api_key: String) -> Self {
        let config = provider.config();
        Self::with_endpoint(config.api_url, config.model, api_key)
    }

    pub fn with_endpoint(
        api_url: impl Into<String>,
        model: impl Into<String>,
        api_key: String,
    ) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_url: api_url.into(),
            api_key,
            model: model.into(),
        }
    }
}

#[async_trait]
impl Summarizer for ChatSummarizer {
    async fn summarize(&self, text: &str) -> Result<String> {
        let response = self
            .http
            .post(&self.api_url)
            .header("Content-Type", "application/json")
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&serde_json::json!({
                "model": self.model,
                "messages": [
                    {
                        "role": "system",
                        "content": CHAT_SUMMARY_PROMPT,
                    },
                    {
                        "role": "user",
                        "content": text,
                    },
                ],
                "temperature": 0.3,
            }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(TldwError::InvalidApiResponse(format!("HTTP {status}: {body}")));
        }

        let body = response.json::<Value>().await?;
        parse_chat_response(&body)
    }
}

pub fn parse_chat_response(body: &Value) -> Result<String> {
    body["choices"][0]["message"]["content"]
        .as_str()
        .map(|content| content.trim().to_string())
        .ok_or_else(|| TldwError::InvalidApiResponse(body.to_string()))
}

/// Build the summarizer for `provider`, reading its API key from the
/// environment.
pub fn build_summarizer(provider: Provider) -> Result<Arc<dyn Summarizer>> {
    let api_key = provider.validate_api_key()?;
    let summarizer: Arc<dyn Summarizer> = if provider.is_chat() {
        Arc::new(ChatSummarizer::new(provider, api_key))
    } else {
        Arc::new(HuggingFaceSummarizer::new(api_key))
    };
    Ok(summarizer)
}

/// Summarize every batch in order, one model call at a time, and join the
/// results with a single space.
///
/// `on_batch` runs after each batch is summarized.
pub async fn summarize_batches(
    summarizer: &dyn Summarizer,
    batches: &[SummaryBatch],
    mut on_batch: impl FnMut(&SummaryBatch) + Send,
) -> Result<Summary> {
    let mut summaries = Vec::with_capacity(batches.len());

    for batch in batches {
        if batch.text.is_empty() {
            continue;
        }

        tracing::debug!(batch = batch.index, chars = batch.width(), "summarizing batch");
        let summary = summarizer
            .summarize(&batch.text)
            .await
            .map_err(|e| TldwError::SummaryFailed {
                batch: batch.index,
                reason: e.to_string(),
            })?;
        summaries.push(summary);
        on_batch(batch);
    }

    Ok(Summary {
        batch_count: summaries.len(),
        text: summaries.join(" "),
    })
}
