use crate::types::{Summary, TranscriptFragment, TranslationResult};

/// Format seconds as MM:SS timestamp
pub fn format_timestamp(seconds: f64) -> String {
    let mins = (seconds / 60.0) as u32;
    let secs = (seconds % 60.0) as u32;
    format!("{:02}:{:02}", mins, secs)
}

/// Format transcript fragments with timestamps
pub fn format_transcript_with_timestamps(fragments: &[TranscriptFragment]) -> String {
    fragments
        .iter()
        .map(|frag| format!("[{}] {}", format_timestamp(frag.start), frag.text.trim()))
        .collect::<Vec<_>>()
        .join("\n")
}

fn blockquote(text: &str) -> String {
    text.lines()
        .map(|line| format!("> {}", line))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn format_summary_readable(
    summary: &Summary,
    translation: Option<&TranslationResult>,
) -> String {
    let mut output = String::new();

    output.push_str("## Summarized Text\n\n");
    output.push_str(&blockquote(&summary.text));
    output.push_str("\n\n");

    if let Some(translation) = translation {
        output.push_str(&format!("## Translated Text ({})\n\n", translation.language));
        output.push_str(&blockquote(&translation.text));
        output.push_str("\n\n");
    }

    output
}
