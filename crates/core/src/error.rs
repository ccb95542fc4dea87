use thiserror::Error;

use crate::provider::ProviderError;

#[derive(Error, Debug)]
pub enum TldwError {
    #[error("Transcript fetch failed for {video_id}: {reason}")]
    TranscriptFailed { video_id: String, reason: String },

    #[error("Summarization failed on batch {batch}: {reason}")]
    SummaryFailed { batch: usize, reason: String },

    #[error("Translation to {language} failed: {reason}")]
    TranslationFailed { language: String, reason: String },

    #[error("Unsupported language: {0}")]
    UnsupportedLanguage(String),

    #[error("Batch width must be greater than zero")]
    InvalidBatchWidth,

    #[error("Invalid API response: {0}")]
    InvalidApiResponse(String),

    #[error(transparent)]
    Provider(#[from] ProviderError),

    #[error("API request failed: {0}")]
    Api(#[from] reqwest::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TldwError>;
