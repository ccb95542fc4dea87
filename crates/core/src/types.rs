use serde::{Deserialize, Serialize};

use crate::language::Language;

/// One timed caption span as returned by the transcript service.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TranscriptFragment {
    pub text: String,
    pub start: f64,
    pub duration: f64,
}

/// A character window over the flat transcript.
///
/// `start` and `end` are character offsets, not byte offsets.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SummaryBatch {
    pub index: usize,
    pub start: usize,
    pub end: usize,
    pub text: String,
}

impl SummaryBatch {
    pub fn width(&self) -> usize {
        self.end - self.start
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub text: String,
    pub batch_count: usize,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TranslationResult {
    pub language: Language,
    pub text: String,
}
