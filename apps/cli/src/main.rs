use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use tldw_core::{
    BatchWidth, DEFAULT_BATCH_WIDTH, Language, Pipeline, PipelineConfig, Provider, Summary,
    TranslationResult, VideoReference, assemble, format_summary_readable,
    format_transcript_with_timestamps,
};

fn format_duration(d: Duration) -> String {
    let secs = d.as_secs_f64();
    if secs < 60.0 {
        format!("{:.1}s", secs)
    } else {
        format!("{:.0}m {:.0}s", (secs / 60.0).floor(), secs % 60.0)
    }
}

/// CLI wrapper for Provider enum (needed for clap ValueEnum)
#[derive(Clone, Default, ValueEnum)]
enum CliProvider {
    #[default]
    Huggingface,
    Grok,
    Openai,
    Gemini,
}

impl From<CliProvider> for Provider {
    fn from(cli: CliProvider) -> Self {
        match cli {
            CliProvider::Huggingface => Provider::HuggingFace,
            CliProvider::Grok => Provider::Grok,
            CliProvider::Openai => Provider::Openai,
            CliProvider::Gemini => Provider::Gemini,
        }
    }
}

#[derive(Parser)]
#[command(name = "tldw", version)]
#[command(about = "Summarize a YouTube video from its transcript and translate the summary")]
struct Cli {
    /// Video URL (the id is taken from after the last `=`)
    url: String,

    /// Translate the summary into this language (name or code, e.g. "german" or "de")
    #[arg(short, long)]
    lang: Option<String>,

    /// Summarization provider
    #[arg(short, long, env = "TLDW_PROVIDER", default_value = "huggingface")]
    provider: CliProvider,

    /// Characters per summarization batch
    #[arg(short, long, env = "TLDW_BATCH_WIDTH", default_value_t = DEFAULT_BATCH_WIDTH)]
    batch_width: usize,

    /// Preferred caption language, most preferred first (repeatable)
    #[arg(long = "transcript-lang", default_value = "en")]
    transcript_langs: Vec<String>,

    /// Also print the timestamped transcript
    #[arg(short, long)]
    transcript: bool,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct CliOutput<'a> {
    video_id: &'a str,
    summary: &'a Summary,
    translation: Option<&'a TranslationResult>,
}

fn create_spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .tick_chars("⠁⠂⠄⡀⢀⠠⠐⠈ ")
            .template("{spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}

fn create_batch_bar(batches: usize) -> ProgressBar {
    let pb = ProgressBar::new(batches as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.cyan} Summarizing [{bar:30.cyan/blue}] {pos}/{len} batches")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=> "),
    );
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}

fn done(msg: impl std::fmt::Display, elapsed: Duration) -> String {
    format!(
        "{} {} {}",
        style("✓").green().bold(),
        msg,
        style(format!("[{}]", format_duration(elapsed))).dim()
    )
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let provider: Provider = cli.provider.into();

    // Validate API key early
    if let Err(e) = provider.validate_api_key() {
        eprintln!("{} {}", style("Error:").red().bold(), e);
        std::process::exit(1);
    }

    let target = cli
        .lang
        .as_deref()
        .map(Language::lookup)
        .transpose()
        .context("Unknown translation language")?;

    let Some(video) = VideoReference::parse(&cli.url) else {
        println!("{}", style("No URL given, nothing to do").dim());
        return Ok(());
    };

    let pipeline = Pipeline::from_config(
        provider,
        PipelineConfig {
            batch_width: BatchWidth::new(cli.batch_width)?,
            transcript_languages: cli.transcript_langs,
        },
    )?;

    if !cli.json {
        println!(
            "\n{}  {}\n",
            style("tldw").cyan().bold(),
            style("Video Summarizer").dim()
        );
        println!("{}", style("─".repeat(60)).dim());
    }

    let total_start = Instant::now();

    // Step 1: Fetch transcript
    let step_start = Instant::now();
    let spinner = create_spinner(&format!("Fetching transcript for {}...", video.video_id));
    let transcript = match pipeline.fetch_transcript(&video).await {
        Ok(transcript) => transcript,
        Err(e) => {
            spinner.finish_and_clear();
            eprintln!("{} {}", style("Error:").red().bold(), e);
            std::process::exit(1);
        }
    };
    let flat_transcript = assemble(&transcript);
    spinner.finish_with_message(done(
        format!(
            "Transcript fetched: {} fragments, {} chars",
            transcript.len(),
            flat_transcript.chars().count()
        ),
        step_start.elapsed(),
    ));

    // Step 2: Summarize batch by batch
    let step_start = Instant::now();
    let batches = pipeline.split(&flat_transcript);
    let bar = create_batch_bar(batches.len());
    let progress = bar.clone();
    let summary = match pipeline
        .summarize_batches(&batches, move |_| progress.inc(1))
        .await
    {
        Ok(summary) => summary,
        Err(e) => {
            bar.finish_and_clear();
            eprintln!("{} {}", style("Error:").red().bold(), e);
            std::process::exit(1);
        }
    };
    bar.finish_and_clear();
    eprintln!(
        "{}",
        done(
            format!(
                "Summarized with {}: {} batches of up to {} chars",
                provider.name(),
                summary.batch_count,
                pipeline.batch_width().get()
            ),
            step_start.elapsed(),
        )
    );

    // Step 3: Translate (only when asked)
    let translation = match target {
        Some(language) => {
            let step_start = Instant::now();
            let spinner = create_spinner(&format!("Translating to {}...", language));
            match pipeline.translate(&summary.text, language).await {
                Ok(translation) => {
                    spinner.finish_with_message(done(
                        format!("Translated to {}", style(language).yellow()),
                        step_start.elapsed(),
                    ));
                    Some(translation)
                }
                Err(e) => {
                    spinner.finish_and_clear();
                    eprintln!("{} {}", style("Error:").red().bold(), e);
                    std::process::exit(1);
                }
            }
        }
        None => None,
    };

    if cli.json {
        let output = CliOutput {
            video_id: &video.video_id,
            summary: &summary,
            translation: translation.as_ref(),
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!(
        "\n{} {}\n",
        style("Total time:").dim(),
        style(format_duration(total_start.elapsed())).cyan().bold()
    );
    println!("{}", style("─".repeat(60)).dim());

    if cli.transcript {
        println!("## Transcript\n");
        println!("{}\n", format_transcript_with_timestamps(&transcript));
    }

    // Human-readable output
    let readable = format_summary_readable(&summary, translation.as_ref());
    println!("{}", readable);

    Ok(())
}
