use std::net::SocketAddr;

use anyhow::Result;
use clap::Parser;
use tldw_core::{BatchWidth, DEFAULT_BATCH_WIDTH, Pipeline, PipelineConfig, Provider};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use crate::routes::{AppState, app};

mod page;
mod routes;

#[derive(Parser)]
#[command(name = "tldw-web", version)]
#[command(about = "Serve the YouTube summarizer and translator web UI")]
struct Args {
    /// Address to listen on
    #[arg(long, env = "TLDW_BIND", default_value = "127.0.0.1:8501")]
    bind: SocketAddr,

    /// Summarization provider (huggingface, grok, openai, gemini)
    #[arg(short, long, env = "TLDW_PROVIDER", default_value = "huggingface")]
    provider: Provider,

    /// Characters per summarization batch
    #[arg(short, long, env = "TLDW_BATCH_WIDTH", default_value_t = DEFAULT_BATCH_WIDTH)]
    batch_width: usize,

    /// Preferred caption language, most preferred first (repeatable)
    #[arg(long = "transcript-lang", default_value = "en")]
    transcript_langs: Vec<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    // Collaborators are built once and shared by every request
    let pipeline = Pipeline::from_config(
        args.provider,
        PipelineConfig {
            batch_width: BatchWidth::new(args.batch_width)?,
            transcript_languages: args.transcript_langs,
        },
    )?;
    tracing::info!(
        provider = args.provider.name(),
        model = args.provider.config().model,
        batch_width = pipeline.batch_width().get(),
        "pipeline ready"
    );

    let listener = TcpListener::bind(args.bind).await?;
    tracing::info!(addr = %listener.local_addr()?, "listening");
    axum::serve(listener, app(AppState { pipeline })).await?;

    Ok(())
}
