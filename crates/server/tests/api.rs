//! End-to-end API tests driving the router in-process.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use faq::FixedPicker;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use server::config::ServerConfig;
use server::routes::chat::LOGIN_PROMPTS;
use server::{build_router, AppState};
use std::sync::Arc;
use tower::ServiceExt;

struct TestApp {
    router: Router,
    // Keeps the uploads directory alive for the test's duration.
    _uploads: tempfile::TempDir,
}

fn test_app() -> TestApp {
    let uploads = tempfile::tempdir().expect("tempdir");
    let config = ServerConfig {
        users: ServerConfig::demo_users(),
        uploads_dir: uploads.path().to_path_buf(),
        ..ServerConfig::default()
    };
    let state = AppState::with_picker(config, Arc::new(FixedPicker(0))).expect("state");
    TestApp {
        router: build_router(Arc::new(state)),
        _uploads: uploads,
    }
}

async fn send(router: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.clone().oneshot(request).await.expect("response");
    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body")
        .to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, value)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_json(uri: &str, body: Value, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header("x-auth-token", token);
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

async fn login(router: &Router, email: &str, password: &str) -> String {
    let (status, body) = send(
        router,
        post_json(
            "/api/auth/login",
            json!({ "email": email, "password": password }),
            None,
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    body["token"].as_str().expect("token").to_string()
}

#[tokio::test]
async fn lists_the_seeded_faq_collection() {
    let app = test_app();
    let (status, body) = send(&app.router, get("/api/faqs")).await;
    assert_eq!(status, StatusCode::OK);
    let faqs = body["faqs"].as_array().expect("faqs array");
    assert_eq!(faqs.len(), 52);
    assert_eq!(faqs[0]["id"], 1);
    assert!(faqs[0].get("askedCount").is_some());
}

#[tokio::test]
async fn faq_search_filters_by_substring() {
    let app = test_app();
    let (status, body) = send(&app.router, get("/api/faqs/search?q=library")).await;
    assert_eq!(status, StatusCode::OK);
    let results = body["results"].as_array().expect("results");
    assert!(!results.is_empty());
    assert!(results.iter().any(|f| f["id"] == 20));
}

#[tokio::test]
async fn helpful_endpoint_increments_the_counter() {
    let app = test_app();
    let (status, body) = send(
        &app.router,
        post_json("/api/faqs/1/helpful", json!({}), None),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    // Seed value for faq 1 is 38.
    assert_eq!(body["helpfulCount"], 39);

    let (status, _) = send(
        &app.router,
        post_json("/api/faqs/9999/helpful", json!({}), None),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn chat_without_session_gets_the_pinned_login_prompt() {
    let app = test_app();
    let (status, body) = send(
        &app.router,
        post_json("/api/chat", json!({ "message": "hello" }), None),
    )
    .await;
    // A login prompt is an ordinary bot reply, not an auth error.
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["type"], "bot");
    assert_eq!(body["message"], LOGIN_PROMPTS[0]);
}

#[tokio::test]
async fn chat_answers_and_counts_once_logged_in() {
    let app = test_app();
    let token = login(&app.router, "student@college.com", "student123").await;

    let (status, body) = send(
        &app.router,
        post_json(
            "/api/chat",
            json!({ "message": "what is the library timing" }),
            Some(&token),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let message = body["message"].as_str().expect("message");
    assert!(message.starts_with("Library is open"));

    // The matched record's asked-count moved from its seed value of 28.
    let (_, body) = send(&app.router, get("/api/faqs")).await;
    let faq20 = body["faqs"]
        .as_array()
        .unwrap()
        .iter()
        .find(|f| f["id"] == 20)
        .expect("faq 20");
    assert_eq!(faq20["askedCount"], 29);

    // Both turns landed in the transcript.
    let (_, body) = send(&app.router, get("/api/chat/history")).await;
    let messages = body["messages"].as_array().expect("messages");
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0]["type"], "user");
    assert_eq!(messages[1]["type"], "bot");
}

#[tokio::test]
async fn greeting_chat_gets_the_greeting_fallback() {
    let app = test_app();
    let token = login(&app.router, "student@college.com", "student123").await;
    let (status, body) = send(
        &app.router,
        post_json("/api/chat", json!({ "message": "hello" }), Some(&token)),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["message"]
        .as_str()
        .unwrap()
        .starts_with("Hello! I'm your college virtual assistant"));
}

#[tokio::test]
async fn faq_mutation_requires_an_admin_session() {
    let app = test_app();
    let new_faq = json!({
        "question": "Is there a darkroom?",
        "answer": "Yes, in the arts block.",
        "category": "Activities"
    });

    let (status, body) = send(&app.router, post_json("/api/faqs", new_faq.clone(), None)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"]["code"], "AUTH_FAILED");

    let student = login(&app.router, "student@college.com", "student123").await;
    let (status, body) = send(
        &app.router,
        post_json("/api/faqs", new_faq.clone(), Some(&student)),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["error"]["code"], "FORBIDDEN");

    let admin = login(&app.router, "admin@college.com", "admin123").await;
    let (status, body) = send(&app.router, post_json("/api/faqs", new_faq, Some(&admin))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["faq"]["id"], 53);

    // The addition was announced.
    let (_, body) = send(&app.router, get("/api/notifications")).await;
    let notifications = body["notifications"].as_array().expect("notifications");
    assert!(notifications[0]["message"]
        .as_str()
        .unwrap()
        .contains("Is there a darkroom?"));
}

#[tokio::test]
async fn deleting_a_faq_removes_it_and_notifies() {
    let app = test_app();
    let admin = login(&app.router, "admin@college.com", "admin123").await;

    let request = Request::builder()
        .method("DELETE")
        .uri("/api/faqs/51")
        .header("x-auth-token", &admin)
        .body(Body::empty())
        .unwrap();
    let (status, body) = send(&app.router, request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);

    let (_, body) = send(&app.router, get("/api/faqs")).await;
    let faqs = body["faqs"].as_array().unwrap();
    assert_eq!(faqs.len(), 51);
    assert!(faqs.iter().all(|f| f["id"] != 51));
}

#[tokio::test]
async fn file_upload_download_delete_roundtrip() {
    let app = test_app();
    let admin = login(&app.router, "admin@college.com", "admin123").await;

    let boundary = "XBOUNDARYX";
    let body = format!(
        "--{boundary}\r\n\
         Content-Disposition: form-data; name=\"file\"; filename=\"exam-schedule.pdf\"\r\n\
         Content-Type: application/pdf\r\n\r\n\
         dummy schedule bytes\r\n\
         --{boundary}\r\n\
         Content-Disposition: form-data; name=\"category\"\r\n\r\n\
         Exams\r\n\
         --{boundary}--\r\n"
    );
    let request = Request::builder()
        .method("POST")
        .uri("/api/files/upload")
        .header("x-auth-token", &admin)
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={boundary}"),
        )
        .body(Body::from(body))
        .unwrap();
    let (status, body) = send(&app.router, request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["file"]["name"], "exam-schedule.pdf");
    assert_eq!(body["file"]["category"], "Exams");
    let id = body["file"]["id"].as_u64().expect("file id");

    // Download serves the bytes as an attachment and counts it.
    let response = app
        .router
        .clone()
        .oneshot(get(&format!("/api/files/download/{id}")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let disposition = response
        .headers()
        .get(header::CONTENT_DISPOSITION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(disposition.contains("exam-schedule.pdf"));
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&bytes[..], b"dummy schedule bytes");

    let (_, body) = send(&app.router, get("/api/files")).await;
    assert_eq!(body["files"][0]["downloadCount"], 1);

    // Delete removes the registry entry; a later download is a 404.
    let request = Request::builder()
        .method("DELETE")
        .uri(format!("/api/files/{id}"))
        .header("x-auth-token", &admin)
        .body(Body::empty())
        .unwrap();
    let (status, _) = send(&app.router, request).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send(&app.router, get(&format!("/api/files/download/{id}"))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn analytics_reports_totals_and_categories() {
    let app = test_app();
    let (status, body) = send(&app.router, get("/api/analytics")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["totalFaqs"], 52);
    assert_eq!(body["totalFiles"], 0);
    // Seeded asked-counts sum to a known total.
    assert_eq!(body["totalQuestions"], 1444);

    let top = body["topFaqs"].as_array().expect("topFaqs");
    assert_eq!(top.len(), 5);
    // Faq 13 has the highest seeded asked-count (67).
    assert_eq!(top[0]["id"], 13);

    assert_eq!(body["categoryStats"]["Library"], 6);
    assert_eq!(body["categoryStats"]["General"], 8);
}

#[tokio::test]
async fn login_rejects_bad_credentials() {
    let app = test_app();
    let (status, body) = send(
        &app.router,
        post_json(
            "/api/auth/login",
            json!({ "email": "student@college.com", "password": "nope" }),
            None,
        ),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"]["code"], "AUTH_FAILED");
}

#[tokio::test]
async fn unknown_routes_get_the_error_envelope() {
    let app = test_app();
    let (status, body) = send(&app.router, get("/api/nope")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "NOT_FOUND");
}
