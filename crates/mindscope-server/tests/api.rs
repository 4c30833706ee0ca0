//! Router-level tests against a temporary data directory. The chat chain
//! runs keywords only so nothing leaves the process.

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use mindscope_chat::chain::ResponseChain;
use mindscope_chat::keywords;
use mindscope_server::app;
use mindscope_server::state::AppState;
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

fn test_app() -> (TempDir, Router) {
    let dir = tempfile::tempdir().unwrap();
    let state = AppState::new(dir.path(), ResponseChain::keywords_only());
    (dir, app(state))
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

fn get(uri: &str, user: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(Method::GET).uri(uri);
    if let Some(user) = user {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {user}"));
    }
    builder.body(Body::empty()).unwrap()
}

fn post_form(uri: &str, user: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {user}"))
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn health_is_public() {
    let (_dir, app) = test_app();
    let (status, body) = send(&app, get("/health", None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn instruments_are_listed_and_described() {
    let (_dir, app) = test_app();

    let (status, body) = send(&app, get("/instruments", None)).await;
    assert_eq!(status, StatusCode::OK);
    let ids: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|i| i["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["phq9", "gad7", "pss10"]);

    let (status, body) = send(&app, get("/instruments/PSS-10", None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["items"].as_array().unwrap().len(), 10);
    assert_eq!(body["answer_labels"].as_array().unwrap().len(), 5);
    assert_eq!(body["items"][3]["reversed"], true);

    let (status, _) = send(&app, get("/instruments/bdi2", None)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn protected_routes_need_a_bearer_token() {
    let (_dir, app) = test_app();
    for uri in ["/screenings", "/moods", "/chat", "/tips", "/dashboard"] {
        let (status, body) = send(&app, get(uri, None)).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED, "{uri}");
        assert!(body["error"].is_string());
    }

    let request = Request::builder()
        .uri("/moods")
        .header(header::AUTHORIZATION, "Bearer ")
        .body(Body::empty())
        .unwrap();
    let (status, _) = send(&app, request).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn phq9_submission_is_scored_and_stored() {
    let (_dir, app) = test_app();
    let form = "q1=3&q2=3&q3=3&q4=3&q5=3&q6=3&q7=3&q8=3&q9=3";

    let (status, body) = send(&app, post_form("/screenings/phq9", "ann", form)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["result"]["total_score"], 27);
    assert_eq!(body["result"]["severity"], "Severe");
    assert_eq!(body["result"]["instrument"], "PHQ9");
    assert_eq!(body["recommendations"].as_array().unwrap().len(), 3);
    assert!(body["warnings"].as_array().unwrap().is_empty());

    let (status, body) = send(&app, get("/screenings", Some("ann"))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn lenient_form_values_are_read_as_zero() {
    let (_dir, app) = test_app();

    // Every PSS-10 answer missing: the four reversed items count 4 each.
    let (status, body) = send(&app, post_form("/screenings/pss10", "ann", "")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["result"]["total_score"], 16);
    assert_eq!(body["result"]["severity"], "Moderate");

    let (status, body) = send(
        &app,
        post_form("/screenings/gad7", "ann", "q1=abc&q2=&q3=2&q4=9"),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["result"]["raw_answers"][0], 0);
    assert_eq!(body["result"]["total_score"], 11);
    assert_eq!(body["warnings"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn unknown_instrument_submission_is_not_found() {
    let (_dir, app) = test_app();
    let (status, _) = send(&app, post_form("/screenings/bdi2", "ann", "q1=1")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn mood_is_logged_with_derived_score() {
    let (_dir, app) = test_app();
    let form = "mood=happy&influencers=work&influencers=sleep%2C%20family&notes=";

    let (status, body) = send(&app, post_form("/moods", "ann", form)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["mood"], "😊");
    assert_eq!(body["score"], 8);
    assert_eq!(
        body["influencers"],
        serde_json::json!(["family", "sleep", "work"])
    );
    assert!(body["notes"].is_null());

    let (_, body) = send(&app, get("/moods", Some("ann"))).await;
    assert_eq!(body.as_array().unwrap().len(), 1);

    let (_, body) = send(&app, get("/moods", Some("ben"))).await;
    assert!(body.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn mood_must_be_known() {
    let (_dir, app) = test_app();

    let (status, _) = send(&app, post_form("/moods", "ann", "mood=ecstatic")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = send(&app, post_form("/moods", "ann", "notes=hi")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Please select a mood.");
}

#[tokio::test]
async fn empty_chat_message_is_rejected() {
    let (_dir, app) = test_app();
    let (status, body) = send(&app, post_form("/chat", "ann", "message=%20%20")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Please enter a message.");

    let (_, body) = send(&app, get("/chat", Some("ann"))).await;
    assert!(body.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn chat_answers_and_keeps_history() {
    let (_dir, app) = test_app();

    let (status, body) = send(
        &app,
        post_form("/chat", "ann", "message=I+feel+so+anxious+today"),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["user_message"], "I feel so anxious today");
    assert_eq!(
        body["assistant_response"],
        keywords::reply_for("I feel so anxious today")
    );
    assert_eq!(body["response_source"], "keyword");

    send(&app, post_form("/chat", "ann", "message=thanks")).await;

    let (_, body) = send(&app, get("/chat", Some("ann"))).await;
    let messages: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["user_message"].as_str().unwrap())
        .collect();
    assert_eq!(messages, vec!["I feel so anxious today", "thanks"]);
}

#[tokio::test]
async fn dashboard_starts_at_baseline() {
    let (_dir, app) = test_app();
    let (status, body) = send(&app, get("/dashboard", Some("new"))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["wellness"]["value"], 5.0);
    assert_eq!(body["wellness"]["mood_samples"], 0);
    assert!(body["recent_screenings"].as_array().unwrap().is_empty());
    assert_eq!(body["tips"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn dashboard_combines_moods_and_latest_screening() {
    let (_dir, app) = test_app();
    send(&app, post_form("/moods", "ann", "mood=happy")).await;
    send(&app, post_form("/screenings/phq9", "ann", "")).await;

    let (status, body) = send(&app, get("/dashboard", Some("ann"))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["wellness"]["value"], 8.8);
    assert_eq!(body["wellness"]["latest_screening"], "PHQ9");
    assert_eq!(body["recent_moods"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn tips_need_a_bearer_token() {
    let (_dir, app) = test_app();
    let (status, _) = send(&app, get("/tips", None)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, body) = send(&app, get("/tips", Some("ann"))).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.as_array().unwrap().len() >= 3);
    assert_eq!(body[0]["language"], "English");
}

#[tokio::test]
async fn chat_replies_even_when_storage_fails() {
    let (dir, app) = test_app();
    // A plain file where the user's chat directory belongs breaks both the
    // history read and the save.
    std::fs::create_dir_all(dir.path().join("chats")).unwrap();
    std::fs::write(dir.path().join("chats").join("ann"), b"not a directory").unwrap();

    let (status, body) = send(&app, post_form("/chat", "ann", "message=I+feel+lonely")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["assistant_response"], keywords::reply_for("I feel lonely"));
    assert_eq!(body["response_source"], "keyword");
}
