//! Remote stages against a local stand-in for the inference endpoint.

use std::time::Duration;

use axum::http::{HeaderMap, StatusCode};
use axum::routing::post;
use axum::{Json, Router};
use mindscope_chat::chain::ResponseProvider;
use mindscope_chat::context::ChatMessage;
use mindscope_chat::error::ChatError;
use mindscope_chat::extract::{after_last_marker, generated_text, primary_reply, secondary_reply};
use mindscope_chat::inference::{GenerationParameters, PrimaryInference, SecondaryInference};
use serde_json::{json, Value};

async fn spawn_endpoint(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}/generate")
}

/// Echoes the prompt back followed by a continuation, like a hosted model.
async fn echo_model(headers: HeaderMap, Json(body): Json<Value>) -> Result<Json<Value>, StatusCode> {
    if headers.get("authorization").and_then(|v| v.to_str().ok()) != Some("Bearer hf_good") {
        return Err(StatusCode::UNAUTHORIZED);
    }
    let inputs = body["inputs"].as_str().unwrap_or_default();
    let parameters = &body["parameters"];
    assert_eq!(parameters["max_length"], 150);
    assert_eq!(parameters["do_sample"], true);
    Ok(Json(json!([{ "generated_text": format!("{inputs} I hear you.") }])))
}

async fn small_model(Json(body): Json<Value>) -> Json<Value> {
    let inputs = body["inputs"].as_str().unwrap_or_default().to_string();
    assert!(body["parameters"].get("top_p").is_none());
    let text = if inputs.contains("marker") {
        format!("{inputs} Glad you asked.")
    } else {
        "Sounds like a lot.".to_string()
    };
    Json(json!([{ "generated_text": text }]))
}

async fn slow_model() -> Json<Value> {
    tokio::time::sleep(Duration::from_secs(3)).await;
    Json(json!([{ "generated_text": "too late" }]))
}

async fn loading_model() -> (StatusCode, Json<Value>) {
    (
        StatusCode::OK,
        Json(json!({ "error": "Model microsoft/DialoGPT-large is currently loading" })),
    )
}

#[tokio::test(flavor = "multi_thread")]
async fn primary_returns_text_after_last_marker() {
    let url = spawn_endpoint(Router::new().route("/generate", post(echo_model))).await;
    let provider = PrimaryInference::new(url, Some("hf_good".to_string()), Duration::from_secs(5));

    let history = vec![ChatMessage::user("hi"), ChatMessage::assistant("hello")];
    let reply = tokio::task::spawn_blocking(move || provider.attempt("I feel low", &history))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(reply.as_deref(), Some("I hear you."));
}

#[tokio::test(flavor = "multi_thread")]
async fn primary_rejected_credential_is_an_error() {
    let url = spawn_endpoint(Router::new().route("/generate", post(echo_model))).await;
    let provider = PrimaryInference::new(url, Some("hf_bad".to_string()), Duration::from_secs(5));

    let result = tokio::task::spawn_blocking(move || provider.attempt("hi", &[]))
        .await
        .unwrap();
    assert!(matches!(result, Err(ChatError::Request(_))));
}

#[tokio::test(flavor = "multi_thread")]
async fn primary_without_credential_is_skipped() {
    let url = spawn_endpoint(Router::new().route("/generate", post(echo_model))).await;
    let provider = PrimaryInference::new(url, None, Duration::from_secs(5));

    let result = tokio::task::spawn_blocking(move || provider.attempt("hi", &[]))
        .await
        .unwrap();
    assert!(matches!(result, Ok(None)));
}

#[tokio::test(flavor = "multi_thread")]
async fn primary_error_payload_is_an_error() {
    let url = spawn_endpoint(Router::new().route("/generate", post(loading_model))).await;
    let provider = PrimaryInference::new(url, Some("hf_good".to_string()), Duration::from_secs(5));

    let result = tokio::task::spawn_blocking(move || provider.attempt("hi", &[]))
        .await
        .unwrap();
    assert!(matches!(result, Err(ChatError::Remote(msg)) if msg.contains("loading")));
}

#[tokio::test(flavor = "multi_thread")]
async fn secondary_uses_marker_or_strips_prompt() {
    let url = spawn_endpoint(Router::new().route("/generate", post(small_model))).await;
    let provider = SecondaryInference::new(url, Duration::from_secs(5));

    let (with_marker, without_marker) = tokio::task::spawn_blocking(move || {
        (
            provider.attempt("marker please", &[]),
            provider.attempt("so much to do", &[]),
        )
    })
    .await
    .unwrap();

    assert_eq!(with_marker.unwrap().as_deref(), Some("Glad you asked."));
    assert_eq!(without_marker.unwrap().as_deref(), Some("Sounds like a lot."));
}

#[tokio::test(flavor = "multi_thread")]
async fn secondary_times_out() {
    let url = spawn_endpoint(Router::new().route("/generate", post(slow_model))).await;
    let provider = SecondaryInference::new(url, Duration::from_millis(300));

    let result = tokio::task::spawn_blocking(move || provider.attempt("hello", &[]))
        .await
        .unwrap();
    assert!(result.is_err());
}

#[test]
fn extraction_rules() {
    assert_eq!(primary_reply("user: hi\nassistant: one\nassistant:  two "), "two");
    assert_eq!(primary_reply("  plain text  "), "plain text");
    assert_eq!(
        secondary_reply("User: hi\nAssistant: hey", "User: hi\nAssistant:"),
        "hey"
    );
    assert_eq!(secondary_reply("User: hi\nmore", "User: hi\n"), "more");
    assert_eq!(after_last_marker("no marker", "assistant:"), None);
}

#[test]
fn generated_text_shapes() {
    assert_eq!(
        generated_text(&json!([{ "generated_text": "x" }])).unwrap(),
        "x"
    );
    assert_eq!(generated_text(&json!([{}])).unwrap(), "");
    assert!(generated_text(&json!([])).is_err());
    assert!(generated_text(&json!({ "error": "busy" })).is_err());
    assert!(generated_text(&json!("nope")).is_err());
}

#[test]
fn generation_parameters_serialize() {
    let primary = serde_json::to_value(GenerationParameters::primary()).unwrap();
    assert_eq!(primary["max_length"], 150);
    assert_eq!(primary["do_sample"], true);
    assert!(primary.get("top_p").is_some());

    let secondary = serde_json::to_value(GenerationParameters::secondary()).unwrap();
    assert_eq!(secondary.as_object().unwrap().len(), 2);
}
