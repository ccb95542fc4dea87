use axum::{
    Form, Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use tldw_core::{Language, Pipeline, TldwError, VideoReference};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};

use crate::page::{PageState, render};

#[derive(Clone)]
pub struct AppState {
    pub pipeline: Pipeline,
}

pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/translate", post(translate_form))
        .route("/api/summarize", post(api_summarize))
        .route("/api/translate", post(api_translate))
        .route("/api/languages", get(api_languages))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[derive(Debug, Deserialize)]
pub struct IndexQuery {
    #[serde(default)]
    url: String,
}

#[tracing::instrument(skip_all, fields(request_id = %uuid::Uuid::new_v4()))]
async fn index(State(state): State<AppState>, Query(query): Query<IndexQuery>) -> Html<String> {
    let Some(video) = VideoReference::parse(&query.url) else {
        return Html(render(&PageState::Idle));
    };

    info!(video_id = %video.video_id, "summarizing video");
    let page = match state.pipeline.summarize_video(&video).await {
        Ok(run) => {
            info!(
                batches = run.summary.batch_count,
                chars = run.flat_transcript.chars().count(),
                "summary ready"
            );
            PageState::Summarized {
                video,
                summary: run.summary.text,
            }
        }
        Err(e) => {
            warn!(error = %e, "summarization failed");
            PageState::RunFailed {
                video,
                heading: failure_heading(&e),
                message: e.to_string(),
            }
        }
    };

    Html(render(&page))
}

fn failure_heading(e: &TldwError) -> &'static str {
    match e {
        TldwError::SummaryFailed { .. } => "Error summarizing transcript",
        _ => "Error fetching transcript",
    }
}

#[derive(Debug, Deserialize)]
pub struct TranslateForm {
    url: String,
    summary: String,
    language: String,
}

#[tracing::instrument(skip_all, fields(request_id = %uuid::Uuid::new_v4()))]
async fn translate_form(
    State(state): State<AppState>,
    Form(form): Form<TranslateForm>,
) -> Html<String> {
    let video = VideoReference::parse(&form.url);

    let outcome = match Language::lookup(&form.language) {
        Ok(language) => {
            info!(
                video_id = video.as_ref().map(|v| v.video_id.as_str()),
                language = language.code(),
                "translating summary"
            );
            state
                .pipeline
                .translate(&form.summary, language)
                .await
                .map_err(|e| (language, e))
        }
        Err(e) => Err((Language::default(), e)),
    };

    let page = match outcome {
        Ok(translation) => PageState::Translated {
            video,
            summary: form.summary,
            translation,
        },
        Err((selected, e)) => {
            warn!(error = %e, "translation failed");
            PageState::TranslateFailed {
                video,
                summary: form.summary,
                selected,
                message: e.to_string(),
            }
        }
    };

    Html(render(&page))
}

/// JSON error body with a status derived from the failure kind.
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    fn unprocessable(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::UNPROCESSABLE_ENTITY,
            message: message.into(),
        }
    }
}

impl From<TldwError> for ApiError {
    fn from(e: TldwError) -> Self {
        let status = match e {
            TldwError::UnsupportedLanguage(_) | TldwError::InvalidBatchWidth => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            _ => StatusCode::BAD_GATEWAY,
        };
        Self {
            status,
            message: e.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(serde_json::json!({ "error": self.message })),
        )
            .into_response()
    }
}

#[derive(Debug, Deserialize)]
pub struct SummarizeRequest {
    url: String,
}

#[derive(Debug, Serialize)]
pub struct SummarizeResponse {
    video_id: String,
    embed_url: String,
    summary: String,
    batch_count: usize,
}

#[tracing::instrument(skip_all, fields(request_id = %uuid::Uuid::new_v4()))]
async fn api_summarize(
    State(state): State<AppState>,
    Json(req): Json<SummarizeRequest>,
) -> Result<Json<SummarizeResponse>, ApiError> {
    let video = VideoReference::parse(&req.url)
        .ok_or_else(|| ApiError::unprocessable("url must not be empty"))?;

    info!(video_id = %video.video_id, "summarizing video");
    let run = state.pipeline.summarize_video(&video).await.inspect_err(|e| {
        warn!(error = %e, "summarization failed");
    })?;

    Ok(Json(SummarizeResponse {
        embed_url: video.embed_url(),
        video_id: video.video_id,
        summary: run.summary.text,
        batch_count: run.summary.batch_count,
    }))
}

#[derive(Debug, Deserialize)]
pub struct TranslateRequest {
    text: String,
    language: String,
}

#[derive(Debug, Serialize)]
pub struct TranslateResponse {
    language: Language,
    text: String,
}

#[tracing::instrument(skip_all, fields(request_id = %uuid::Uuid::new_v4()))]
async fn api_translate(
    State(state): State<AppState>,
    Json(req): Json<TranslateRequest>,
) -> Result<Json<TranslateResponse>, ApiError> {
    let language = Language::lookup(&req.language)?;

    info!(language = language.code(), "translating text");
    let translation = state
        .pipeline
        .translate(&req.text, language)
        .await
        .inspect_err(|e| warn!(error = %e, "translation failed"))?;

    Ok(Json(TranslateResponse {
        language: translation.language,
        text: translation.text,
    }))
}

async fn api_languages() -> Json<&'static [Language]> {
    Json(Language::all())
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}
