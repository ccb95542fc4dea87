use std::collections::HashMap;

use axum::{
    Form, Json, Router,
    extract::Query,
    http::{HeaderMap, StatusCode},
    routing::post,
};
use serde_json::{Value, json};
use tldw_core::{
    ChatSummarizer, GoogleTranslator, HuggingFaceSummarizer, Language, Summarizer, TldwError,
    Translator,
};

async fn serve(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

async fn inference(headers: HeaderMap, Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
    if headers.get("authorization").and_then(|v| v.to_str().ok()) != Some("Bearer hf-test") {
        return (StatusCode::UNAUTHORIZED, Json(json!({ "error": "Invalid credentials" })));
    }
    let inputs = body["inputs"].as_str().unwrap_or_default();
    (
        StatusCode::OK,
        Json(json!([{ "summary_text": format!("{} chars", inputs.chars().count()) }])),
    )
}

async fn loading() -> (StatusCode, Json<Value>) {
    (
        StatusCode::SERVICE_UNAVAILABLE,
        Json(json!({ "error": "Model sshleifer/distilbart-cnn-12-6 is currently loading" })),
    )
}

async fn gateway_page() -> (StatusCode, &'static str) {
    (
        StatusCode::SERVICE_UNAVAILABLE,
        "<html>503 Service Temporarily Unavailable</html>",
    )
}

async fn chat(Json(body): Json<Value>) -> Json<Value> {
    let user = body["messages"][1]["content"].as_str().unwrap_or_default();
    Json(json!({
        "choices": [{
            "message": {
                "role": "assistant",
                "content": format!("{} -> {}\n", body["model"].as_str().unwrap_or_default(), user.len())
            }
        }]
    }))
}

async fn google(
    Query(query): Query<HashMap<String, String>>,
    Form(form): Form<HashMap<String, String>>,
) -> Json<Value> {
    let target = query.get("tl").cloned().unwrap_or_default();
    let text = form.get("q").cloned().unwrap_or_default();
    Json(json!([
        [
            [format!("{target}:{text}"), text, null, null, 3]
        ],
        null,
        "en"
    ]))
}

#[tokio::test]
async fn huggingface_summarizer_posts_inputs_with_token() {
    let base = serve(Router::new().route("/models/distilbart", post(inference))).await;

    let summarizer =
        HuggingFaceSummarizer::with_endpoint(format!("{base}/models/distilbart"), "hf-test".into());
    assert_eq!(summarizer.summarize("twelve chars").await.unwrap(), "12 chars");

    let wrong_key =
        HuggingFaceSummarizer::with_endpoint(format!("{base}/models/distilbart"), "nope".into());
    let err = wrong_key.summarize("text").await.unwrap_err();
    assert!(matches!(err, TldwError::InvalidApiResponse(ref msg) if msg.contains("401")));
}

#[tokio::test]
async fn huggingface_loading_model_is_a_failure() {
    let base = serve(Router::new().route("/models/distilbart", post(loading))).await;

    let summarizer =
        HuggingFaceSummarizer::with_endpoint(format!("{base}/models/distilbart"), "hf-test".into());
    let err = summarizer.summarize("text").await.unwrap_err();
    assert!(err.to_string().contains("currently loading"));
}

#[tokio::test]
async fn non_json_error_page_keeps_status_and_body() {
    let base = serve(
        Router::new()
            .route("/models/distilbart", post(gateway_page))
            .route("/v1/chat/completions", post(gateway_page)),
    )
    .await;

    let summarizer =
        HuggingFaceSummarizer::with_endpoint(format!("{base}/models/distilbart"), "hf-test".into());
    let err = summarizer.summarize("text").await.unwrap_err();
    assert!(matches!(err, TldwError::InvalidApiResponse(_)));
    assert!(err.to_string().contains("503"));
    assert!(err.to_string().contains("Service Temporarily Unavailable"));

    let chat = ChatSummarizer::with_endpoint(
        format!("{base}/v1/chat/completions"),
        "grok-4-fast",
        "key".into(),
    );
    let err = chat.summarize("text").await.unwrap_err();
    assert!(err.to_string().contains("503"));
}

#[tokio::test]
async fn chat_summarizer_reads_first_choice() {
    let base = serve(Router::new().route("/v1/chat/completions", post(chat))).await;

    let summarizer = ChatSummarizer::with_endpoint(
        format!("{base}/v1/chat/completions"),
        "grok-4-fast",
        "key".into(),
    );
    assert_eq!(summarizer.summarize("abcd").await.unwrap(), "grok-4-fast -> 4");
}

#[tokio::test]
async fn google_translator_sends_target_code_and_text() {
    let base = serve(Router::new().route("/translate_a/single", post(google))).await;

    let translator = GoogleTranslator::with_endpoint(format!("{base}/translate_a/single"));
    let spanish = Language::from_name("spanish").unwrap();
    let translated = translator
        .translate("hello & goodbye", spanish)
        .await
        .unwrap();
    assert_eq!(translated, "es:hello & goodbye");
}

#[tokio::test]
async fn unreachable_translator_is_an_error() {
    let translator = GoogleTranslator::with_endpoint("http://127.0.0.1:9/translate_a/single");
    let err = translator
        .translate("text", Language::default())
        .await
        .unwrap_err();
    assert!(matches!(err, TldwError::Api(_)));
}
