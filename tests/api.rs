use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceExt;

use profile_directory::app::{create_app, AppState};
use profile_directory::config::Settings;
use profile_directory::middleware::X_REQUEST_ID;
use profile_directory::store::InMemorySource;

fn app_with(source: Arc<InMemorySource>) -> Router {
    create_app(AppState::new(Settings::default(), source))
}

fn sample_app() -> (Arc<InMemorySource>, Router) {
    let source = Arc::new(InMemorySource::sample());
    (source.clone(), app_with(source))
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut request = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            request = request.header(header::CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(request.body(body).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

fn names(value: &Value) -> Vec<String> {
    value["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["name"].as_str().unwrap().to_string())
        .collect()
}

fn new_profile() -> Value {
    json!({
        "name": "Ada Lovelace",
        "email": "ada@example.com",
        "phone": "+44 20 0000 0000",
        "title": "Analyst",
        "company": "Engines Ltd",
        "description": "Writes programs for the analytical engine",
        "address": {
            "street": "12 St James Square",
            "city": "London",
            "zipCode": "SW1Y 4JH",
            "country": "UK"
        },
        "skills": ["Mathematics"]
    })
}

#[tokio::test]
async fn list_without_filters_returns_everything_with_facet() {
    let (_, app) = sample_app();

    let (status, body) = send(&app, Method::GET, "/profiles", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["meta"]["total"], 6);
    assert_eq!(body["meta"]["matched"], 6);
    assert_eq!(
        body["meta"]["cities"],
        json!(["Atlanta", "Boston", "Chicago", "New York", "San Francisco", "Seattle"])
    );
    assert_eq!(names(&body)[0], "John Smith");
    assert_eq!(body["data"][0]["address"]["zipCode"], "94105");
}

#[tokio::test]
async fn list_filters_by_text_and_location() {
    let (_, app) = sample_app();

    let (_, body) = send(&app, Method::GET, "/profiles?location=Boston", None).await;
    assert_eq!(names(&body), vec!["Michael Chen"]);

    let (_, body) = send(&app, Method::GET, "/profiles?q=design&location=all", None).await;
    assert_eq!(names(&body), vec!["Emily Johnson"]);

    let (_, body) = send(&app, Method::GET, "/profiles?q=design&scope=admin", None).await;
    assert!(names(&body).is_empty());
    assert_eq!(body["meta"]["total"], 6);

    let (_, body) = send(&app, Method::GET, "/profiles?q=kim%40&scope=admin", None).await;
    assert_eq!(names(&body), vec!["David Kim"]);

    let (_, body) = send(&app, Method::GET, "/profiles?q=figma&fields=skills", None).await;
    assert_eq!(names(&body), vec!["Emily Johnson"]);
}

#[tokio::test]
async fn list_rejects_unknown_scope() {
    let (_, app) = sample_app();

    let (status, body) = send(&app, Method::GET, "/profiles?scope=everyone", None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn detail_and_location_for_known_profile() {
    let (_, app) = sample_app();

    let (status, body) = send(&app, Method::GET, "/profiles/p3", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["name"], "Michael Chen");
    assert_eq!(body["data"]["experience"][0]["period"], "2018 - Present");

    let (status, body) = send(&app, Method::GET, "/profiles/p3/location", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["label"], "789 Analytics Drive, Boston, USA");
}

#[tokio::test]
async fn unknown_profile_is_not_found() {
    let (_, app) = sample_app();

    for uri in ["/profiles/p404", "/profiles/p404/location"] {
        let (status, body) = send(&app, Method::GET, uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["code"], "NOT_FOUND");
        assert_eq!(body["message"], "Profile not found");
    }
}

#[tokio::test]
async fn create_assigns_id_and_updates_facet() {
    let (source, app) = sample_app();

    let (status, body) = send(&app, Method::POST, "/profiles", Some(new_profile())).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["id"], "p7");
    assert_eq!(
        body["data"]["avatar"],
        "/placeholder.svg?height=128&width=128"
    );
    assert_eq!(source.snapshot().len(), 7);

    let (_, body) = send(&app, Method::GET, "/profiles/cities", None).await;
    assert!(body["data"]
        .as_array()
        .unwrap()
        .contains(&json!("London")));
}

#[tokio::test]
async fn create_with_missing_fields_lists_each_one() {
    let (source, app) = sample_app();

    let (status, body) = send(
        &app,
        Method::POST,
        "/profiles",
        Some(json!({ "name": "Ada", "email": "not-an-email" })),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], "VALIDATION_FAILED");
    let fields: Vec<&str> = body["errors"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["field"].as_str().unwrap())
        .collect();
    assert!(fields.contains(&"email"));
    assert!(fields.contains(&"address.city"));
    assert!(!fields.contains(&"name"));
    assert_eq!(source.snapshot().len(), 6);
}

#[tokio::test]
async fn replace_swaps_the_whole_record() {
    let (_, app) = sample_app();
    let mut replacement = new_profile();
    replacement["name"] = json!("Michael Chen");

    let (status, body) = send(&app, Method::PUT, "/profiles/p3", Some(replacement)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["id"], "p3");
    assert_eq!(body["data"]["address"]["city"], "London");

    let (_, body) = send(&app, Method::GET, "/profiles/p3", None).await;
    assert_eq!(body["data"]["skills"], json!(["Mathematics"]));
    assert_eq!(body["data"]["experience"], json!([]));

    let (_, body) = send(&app, Method::GET, "/profiles/p4", None).await;
    assert_eq!(body["data"]["name"], "Sarah Rodriguez");
}

#[tokio::test]
async fn replace_of_unknown_id_is_not_found() {
    let (source, app) = sample_app();

    let (status, _) = send(&app, Method::PUT, "/profiles/p99", Some(new_profile())).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(source.snapshot().len(), 6);
}

#[tokio::test]
async fn patch_runs_field_and_skill_edits() {
    let (_, app) = sample_app();

    let (status, body) = send(
        &app,
        Method::PATCH,
        "/profiles/p1",
        Some(json!({
            "set": { "title": "Staff Engineer", "address.city": "Oakland" },
            "remove_skills": [0, 42],
            "add_skills": ["  Rust  ", "   "]
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["title"], "Staff Engineer");
    assert_eq!(body["data"]["address"]["city"], "Oakland");
    assert_eq!(
        body["data"]["skills"],
        json!(["Node.js", "TypeScript", "AWS", "Docker", "Rust"])
    );
}

#[tokio::test]
async fn patch_with_bad_path_changes_nothing() {
    let (source, app) = sample_app();
    let before = source.snapshot();

    let (status, body) = send(
        &app,
        Method::PATCH,
        "/profiles/p1",
        Some(json!({ "set": { "address.geo.lat": "1" } })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].as_str().unwrap().contains("address.geo.lat"));

    let (status, _) = send(
        &app,
        Method::PATCH,
        "/profiles/p1",
        Some(json!({ "set": { "email": "" } })),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    assert_eq!(source.snapshot(), before);
}

#[tokio::test]
async fn delete_is_idempotent() {
    let (source, app) = sample_app();

    let (status, body) = send(&app, Method::DELETE, "/profiles/p2", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, Value::Null);

    let (status, _) = send(&app, Method::DELETE, "/profiles/p2", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = send(&app, Method::GET, "/profiles/p2", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(source.snapshot().len(), 5);
}

#[tokio::test]
async fn delete_then_create_gets_a_fresh_id() {
    let (_, app) = sample_app();

    send(&app, Method::DELETE, "/profiles/p6", None).await;
    let (_, body) = send(&app, Method::POST, "/profiles", Some(new_profile())).await;

    assert_eq!(body["data"]["id"], "p7");
    let (_, body) = send(&app, Method::GET, "/profiles", None).await;
    let ids: Vec<&str> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["p1", "p2", "p3", "p4", "p5", "p7"]);
}

#[tokio::test]
async fn load_failure_surfaces_as_inline_message() {
    let source = Arc::new(InMemorySource::sample());
    source.set_offline(true);
    let app = app_with(source.clone());

    let (status, body) = send(&app, Method::GET, "/profiles", None).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["code"], "LOAD_FAILED");
    assert_eq!(body["message"], "Failed to load profile data");

    source.set_offline(false);
    let (status, _) = send(&app, Method::GET, "/profiles", None).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn health_reports_load_state_without_loading() {
    let (_, app) = sample_app();

    let (status, body) = send(&app, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["profiles_loaded"], false);

    send(&app, Method::GET, "/profiles", None).await;
    let (_, body) = send(&app, Method::GET, "/health", None).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["profiles_loaded"], true);
}

#[tokio::test(start_paused = true)]
async fn health_reports_starting_while_load_is_in_flight() {
    let source = Arc::new(InMemorySource::sample().with_latency(Duration::from_secs(1)));
    let state = AppState::new(Settings::default(), source);
    let app = create_app(state.clone());

    let warm = tokio::spawn({
        let state = state.clone();
        async move { state.profiles.open().await }
    });
    tokio::task::yield_now().await;

    let (status, body) = send(&app, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "starting");
    assert_eq!(body["profiles_loaded"], false);

    warm.await.unwrap().unwrap();
    let (_, body) = send(&app, Method::GET, "/health", None).await;
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn malformed_json_gets_the_error_envelope() {
    let (source, app) = sample_app();

    for (method, uri) in [
        (Method::POST, "/profiles"),
        (Method::PUT, "/profiles/p1"),
        (Method::PATCH, "/profiles/p1"),
    ] {
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method(method)
                    .uri(uri)
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from("{\"name\": "))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["code"], "BAD_REQUEST");
        assert!(!body["message"].as_str().unwrap().is_empty());
    }

    assert_eq!(source.snapshot(), profile_directory::domain::sample::sample_profiles());
}

#[tokio::test]
async fn responses_carry_a_request_id() {
    let (_, app) = sample_app();

    let response = app
        .clone()
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert!(response.headers().contains_key(X_REQUEST_ID));

    let response = app
        .oneshot(
            Request::get("/health")
                .header(X_REQUEST_ID, "abc-123")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(
        profile_directory::middleware::request_id(response.headers()),
        Some("abc-123")
    );
}
