use std::fmt::Write;

use tldw_core::{Language, TranslationResult, VideoReference};

const TITLE: &str = "YouTube Video Summarizer and Translator";

const STYLE: &str = r#"
body { margin: 0; font-family: system-ui, sans-serif; display: flex; color: #262730; }
aside { width: 18rem; min-height: 100vh; padding: 1.5rem; background: #f0f2f6; box-sizing: border-box; }
main { flex: 1; padding: 2rem 3rem; max-width: 60rem; }
input[type=text] { width: 100%; padding: .5rem; font-size: 1rem; box-sizing: border-box; }
iframe { width: 100%; aspect-ratio: 16 / 9; border: 0; margin-top: 1rem; }
blockquote { border-left: 4px solid #c0c4cc; margin: 0; padding: .25rem 1rem; white-space: pre-wrap; }
select, button { font-size: 1rem; padding: .4rem; margin-top: .5rem; }
.error { background: #ffe4e4; color: #8b0000; padding: 1rem; border-radius: .5rem; margin-top: 1rem; }
"#;

/// What one interaction produced, from an empty form to a translation.
#[derive(Debug)]
pub enum PageState {
    Idle,
    /// Fetching or summarizing failed; nothing after the video renders.
    RunFailed {
        video: VideoReference,
        heading: &'static str,
        message: String,
    },
    Summarized {
        video: VideoReference,
        summary: String,
    },
    /// `video` is `None` when the form arrived without a URL.
    Translated {
        video: Option<VideoReference>,
        summary: String,
        translation: TranslationResult,
    },
    TranslateFailed {
        video: Option<VideoReference>,
        summary: String,
        selected: Language,
        message: String,
    },
}

impl PageState {
    fn video(&self) -> Option<&VideoReference> {
        match self {
            PageState::Idle => None,
            PageState::RunFailed { video, .. } | PageState::Summarized { video, .. } => Some(video),
            PageState::Translated { video, .. } | PageState::TranslateFailed { video, .. } => {
                video.as_ref()
            }
        }
    }
}

pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

fn error_block(out: &mut String, message: &str) {
    let _ = write!(out, r#"<div class="error">{}</div>"#, escape(message));
}

fn summary_section(out: &mut String, url: &str, summary: &str, selected: Language) {
    let _ = write!(
        out,
        "<h2>Summarized Text</h2>\n<blockquote>{}</blockquote>\n",
        escape(summary)
    );

    let _ = write!(
        out,
        r#"<form method="post" action="/translate">
<input type="hidden" name="url" value="{}">
<input type="hidden" name="summary" value="{}">
<label for="language">Select the language you want to translate to:</label><br>
<select id="language" name="language">
"#,
        escape(url),
        escape(summary)
    );
    for language in Language::all() {
        let _ = writeln!(
            out,
            r#"<option value="{}"{}>{}</option>"#,
            language.code(),
            if *language == selected { " selected" } else { "" },
            escape(language.name())
        );
    }
    out.push_str("</select>\n<button type=\"submit\">Translate</button>\n</form>\n");
}

pub fn render(state: &PageState) -> String {
    let mut out = String::new();
    let url = state.video().map(|v| v.url.as_str()).unwrap_or_default();

    let _ = write!(
        out,
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{TITLE}</title>
<style>{STYLE}</style>
</head>
<body>
<aside>
<h2>Instructions</h2>
<ol>
<li>Enter the YouTube video URL.</li>
<li>Watch the video and read the summarized text.</li>
<li>Translate the summarized text to your preferred language.</li>
</ol>
</aside>
<main>
<h1>{TITLE}</h1>
<form method="get" action="/">
<label for="url">Enter the YouTube video URL:</label>
<input type="text" id="url" name="url" value="{}" autofocus>
</form>
"#,
        escape(url)
    );

    if let Some(video) = state.video() {
        let _ = writeln!(
            out,
            r#"<iframe src="{}" title="YouTube video player" allowfullscreen></iframe>"#,
            escape(&video.embed_url())
        );
    }

    match state {
        PageState::Idle => {}
        PageState::RunFailed {
            heading, message, ..
        } => {
            error_block(&mut out, &format!("{heading}: {message}"));
        }
        PageState::Summarized { summary, .. } => {
            summary_section(&mut out, url, summary, Language::default());
        }
        PageState::Translated {
            summary,
            translation,
            ..
        } => {
            summary_section(&mut out, url, summary, translation.language);
            let _ = write!(
                out,
                "<h2>Translated Text</h2>\n<blockquote>{}</blockquote>\n",
                escape(&translation.text)
            );
        }
        PageState::TranslateFailed {
            summary,
            selected,
            message,
            ..
        } => {
            summary_section(&mut out, url, summary, *selected);
            error_block(&mut out, &format!("Error translating text: {message}"));
        }
    }

    out.push_str("</main>\n</body>\n</html>\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn video() -> VideoReference {
        VideoReference::parse("https://www.youtube.com/watch?v=abc123").unwrap()
    }

    #[test]
    fn escapes_markup() {
        assert_eq!(
            escape(r#"<a href="x">Tom & Jerry's</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#39;s&lt;/a&gt;"
        );
    }

    #[test]
    fn idle_page_has_only_the_input() {
        let html = render(&PageState::Idle);
        assert!(html.contains(r#"name="url" value="""#));
        assert!(!html.contains("<iframe"));
        assert!(!html.contains(r#"class="error""#));
        assert!(!html.contains("<select"));
    }

    #[test]
    fn failure_hides_summary_and_selector() {
        let html = render(&PageState::RunFailed {
            video: video(),
            heading: "Error fetching transcript",
            message: "no captions".into(),
        });
        assert!(html.contains("https://www.youtube.com/embed/abc123"));
        assert!(html.contains("Error fetching transcript: no captions"));
        assert!(!html.contains("Summarized Text"));
        assert!(!html.contains("<select"));
    }

    #[test]
    fn summary_preselects_english() {
        let html = render(&PageState::Summarized {
            video: video(),
            summary: "A <b>bold</b> claim.".into(),
        });
        assert!(html.contains("<blockquote>A &lt;b&gt;bold&lt;/b&gt; claim.</blockquote>"));
        assert!(html.contains(r#"<option value="en" selected>english</option>"#));
        assert_eq!(html.matches("<option ").count(), Language::all().len());
        assert!(!html.contains("Translated Text"));
    }

    #[test]
    fn translation_keeps_summary_and_selection() {
        let german = Language::from_code("de").unwrap();
        let html = render(&PageState::Translated {
            video: Some(video()),
            summary: "Hello.".into(),
            translation: TranslationResult {
                language: german,
                text: "Hallo.".into(),
            },
        });
        assert!(html.contains("<blockquote>Hello.</blockquote>"));
        assert!(html.contains("<h2>Translated Text</h2>\n<blockquote>Hallo.</blockquote>"));
        assert!(html.contains(r#"<option value="de" selected>german</option>"#));
    }

    #[test]
    fn translate_failure_is_shown_below_summary() {
        let html = render(&PageState::TranslateFailed {
            video: Some(video()),
            summary: "Hello.".into(),
            selected: Language::default(),
            message: "service unavailable".into(),
        });
        assert!(html.contains("<blockquote>Hello.</blockquote>"));
        assert!(html.contains("Error translating text: service unavailable"));
    }

    #[test]
    fn translation_without_url_omits_embed() {
        let html = render(&PageState::Translated {
            video: None,
            summary: "Hello.".into(),
            translation: TranslationResult {
                language: Language::from_code("fr").unwrap(),
                text: "Bonjour.".into(),
            },
        });
        assert!(!html.contains("<iframe"));
        assert!(html.contains("<blockquote>Hello.</blockquote>"));
        assert!(html.contains("<blockquote>Bonjour.</blockquote>"));
        assert!(html.contains(r#"<input type="hidden" name="url" value="">"#));
    }
}
