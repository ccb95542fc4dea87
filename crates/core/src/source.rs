use serde::Serialize;

/// A user-supplied video URL and the identifier derived from it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct VideoReference {
    pub url: String,
    pub video_id: String,
}

impl VideoReference {
    /// Derive the video identifier as everything after the last `=`.
    ///
    /// Extraction is purely syntactic: nothing checks that the input is a
    /// YouTube link, and an input without `=` becomes its own identifier.
    /// Returns `None` for empty input, which means there is nothing to do.
    pub fn parse(raw: &str) -> Option<Self> {
        if raw.is_empty() {
            return None;
        }

        let video_id = raw.rsplit('=').next().unwrap_or_default();

        Some(Self {
            url: raw.to_string(),
            video_id: video_id.to_string(),
        })
    }

    pub fn embed_url(&self) -> String {
        format!("https://www.youtube.com/embed/{}", self.video_id)
    }
}
