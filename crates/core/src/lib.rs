//! tldw core library
//!
//! Fetches a YouTube video's transcript, summarizes it batch by batch with a
//! hosted summarization model, and translates the summary on request.

pub mod assemble;
pub mod batch;
pub mod error;
pub mod format;
pub mod language;
pub mod pipeline;
pub mod provider;
pub mod source;
pub mod summarize;
pub mod transcript;
pub mod translate;
pub mod types;

pub use assemble::assemble;
pub use batch::{BatchWidth, DEFAULT_BATCH_WIDTH, split_batches};
pub use error::{Result, TldwError};
pub use format::{format_summary_readable, format_timestamp, format_transcript_with_timestamps};
pub use language::Language;
pub use pipeline::{Pipeline, PipelineConfig, SummaryRun};
pub use provider::{Provider, ProviderConfig, ProviderError};
pub use source::VideoReference;
pub use summarize::{ChatSummarizer, HuggingFaceSummarizer, Summarizer, build_summarizer};
pub use transcript::{TranscriptFetcher, YoutubeTranscriptFetcher};
pub use translate::{GoogleTranslator, Translator};
pub use types::{Summary, SummaryBatch, TranscriptFragment, TranslationResult};
