use async_trait::async_trait;
use yt_transcript_rs::api::YouTubeTranscriptApi;

use crate::{
    error::{Result, TldwError},
    types::TranscriptFragment,
};

/// Source of timed caption fragments for a video id.
#[async_trait]
pub trait TranscriptFetcher: Send + Sync {
    async fn fetch(&self, video_id: &str) -> Result<Vec<TranscriptFragment>>;
}

/// Fetches YouTube captions (manual or auto-generated) in the first
/// available preferred language.
pub struct YoutubeTranscriptFetcher {
    languages: Vec<String>,
}

impl YoutubeTranscriptFetcher {
    pub fn new(languages: Vec<String>) -> Self {
        Self { languages }
    }
}

impl Default for YoutubeTranscriptFetcher {
    fn default() -> Self {
        Self::new(vec!["en".to_string()])
    }
}

#[async_trait]
impl TranscriptFetcher for YoutubeTranscriptFetcher {
    async fn fetch(&self, video_id: &str) -> Result<Vec<TranscriptFragment>> {
        let failed = |reason: String| TldwError::TranscriptFailed {
            video_id: video_id.to_string(),
            reason,
        };

        let api = YouTubeTranscriptApi::new(None, None, None).map_err(|e| failed(e.to_string()))?;
        let languages: Vec<&str> = self.languages.iter().map(String::as_str).collect();

        let transcript = api
            .fetch_transcript(video_id, &languages, false)
            .await
            .map_err(|e| failed(e.to_string()))?;

        Ok(transcript
            .snippets
            .into_iter()
            .map(|snippet| TranscriptFragment {
                text: snippet.text,
                start: snippet.start,
                duration: snippet.duration,
            })
            .collect())
    }
}
