use std::sync::Arc;

use serde::Serialize;

use crate::{
    assemble::assemble,
    batch::{BatchWidth, split_batches},
    error::Result,
    language::Language,
    provider::Provider,
    source::VideoReference,
    summarize::{Summarizer, build_summarizer, summarize_batches},
    transcript::{TranscriptFetcher, YoutubeTranscriptFetcher},
    translate::{GoogleTranslator, Translator, translate_summary},
    types::{Summary, SummaryBatch, TranscriptFragment, TranslationResult},
};

#[derive(Clone, Debug)]
pub struct PipelineConfig {
    pub batch_width: BatchWidth,
    /// Preferred caption languages, most preferred first.
    pub transcript_languages: Vec<String>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            batch_width: BatchWidth::default(),
            transcript_languages: vec!["en".to_string()],
        }
    }
}

/// Everything produced by one fetch-and-summarize run.
#[derive(Debug, Serialize)]
pub struct SummaryRun {
    pub video: VideoReference,
    pub transcript: Vec<TranscriptFragment>,
    pub flat_transcript: String,
    pub batches: Vec<SummaryBatch>,
    pub summary: Summary,
}

/// The fetch → assemble → batch → summarize → translate chain.
///
/// Collaborators are created once and shared by every run.
#[derive(Clone)]
pub struct Pipeline {
    fetcher: Arc<dyn TranscriptFetcher>,
    summarizer: Arc<dyn Summarizer>,
    translator: Arc<dyn Translator>,
    batch_width: BatchWidth,
}

impl Pipeline {
    pub fn new(
        fetcher: Arc<dyn TranscriptFetcher>,
        summarizer: Arc<dyn Summarizer>,
        translator: Arc<dyn Translator>,
        batch_width: BatchWidth,
    ) -> Self {
        Self {
            fetcher,
            summarizer,
            translator,
            batch_width,
        }
    }

    /// Wire the production collaborators for `provider`.
    pub fn from_config(provider: Provider, config: PipelineConfig) -> Result<Self> {
        Ok(Self::new(
            Arc::new(YoutubeTranscriptFetcher::new(config.transcript_languages)),
            build_summarizer(provider)?,
            Arc::new(GoogleTranslator::new()),
            config.batch_width,
        ))
    }

    pub fn batch_width(&self) -> BatchWidth {
        self.batch_width
    }

    pub async fn fetch_transcript(&self, video: &VideoReference) -> Result<Vec<TranscriptFragment>> {
        tracing::debug!(video_id = %video.video_id, "fetching transcript");
        self.fetcher.fetch(&video.video_id).await
    }

    pub fn split(&self, flat_transcript: &str) -> Vec<SummaryBatch> {
        split_batches(flat_transcript, self.batch_width)
    }

    pub async fn summarize_batches(
        &self,
        batches: &[SummaryBatch],
        on_batch: impl FnMut(&SummaryBatch) + Send,
    ) -> Result<Summary> {
        summarize_batches(self.summarizer.as_ref(), batches, on_batch).await
    }

    /// Run every stage up to the summary. Translation is left to an
    /// explicit [`Pipeline::translate`] call.
    pub async fn summarize_video(&self, video: &VideoReference) -> Result<SummaryRun> {
        let transcript = self.fetch_transcript(video).await?;
        let flat_transcript = assemble(&transcript);
        let batches = self.split(&flat_transcript);
        let summary = self.summarize_batches(&batches, |_| {}).await?;

        Ok(SummaryRun {
            video: video.clone(),
            transcript,
            flat_transcript,
            batches,
            summary,
        })
    }

    /// `Ok(None)` for empty input: nothing is fetched.
    pub async fn summarize_url(&self, raw_url: &str) -> Result<Option<SummaryRun>> {
        match VideoReference::parse(raw_url) {
            Some(video) => self.summarize_video(&video).await.map(Some),
            None => Ok(None),
        }
    }

    pub async fn translate(&self, text: &str, target: Language) -> Result<TranslationResult> {
        translate_summary(self.translator.as_ref(), text, target).await
    }
}
