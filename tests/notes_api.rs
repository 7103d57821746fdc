//! Integration tests for the notes query endpoint

mod common;

use axum::http::StatusCode;
use common::{body_json, get, test_router};
use tower::ServiceExt;

#[tokio::test]
async fn notes_without_filters_returns_full_dataset() {
    let response = test_router().oneshot(get("/notes")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["totalCount"], 4);
    assert_eq!(body["notes"].as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn notes_max_results_truncates_but_counts_all() {
    let response = test_router()
        .oneshot(get("/notes?maxResults=2"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["totalCount"], 4);

    let notes = body["notes"].as_array().unwrap();
    assert_eq!(notes.len(), 2);
    // First two notes in seed order.
    assert_eq!(notes[0]["title"], "Meeting Notes for Project X");
    assert_eq!(notes[1]["title"], "Brainstorming Session: New Feature Ideas");
}

#[tokio::test]
async fn notes_query_filters_case_insensitively() {
    let response = test_router()
        .oneshot(get("/notes?query=onboarding"))
        .await
        .unwrap();
    let body = body_json(response).await;

    assert_eq!(body["totalCount"], 1);
    let notes = body["notes"].as_array().unwrap();
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0]["title"], "Onboarding Checklist - New Hire");
    assert_eq!(notes[0]["tags"][0], "onboarding");
}

#[tokio::test]
async fn notes_wire_shape_uses_camel_case() {
    let response = test_router()
        .oneshot(get("/notes?maxResults=1"))
        .await
        .unwrap();
    let body = body_json(response).await;

    let note = &body["notes"][0];
    assert!(note.get("createdAt").is_some());
    assert!(note.get("id").is_some());
    // Seed note 1 has no update time; the field is omitted, not null.
    assert!(note.get("updatedAt").is_none());
}

#[tokio::test]
async fn notes_rejects_zero_max_results() {
    let response = test_router()
        .oneshot(get("/notes?maxResults=0"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn notes_rejects_non_integer_max_results() {
    for uri in ["/notes?maxResults=abc", "/notes?maxResults=-1"] {
        let response = test_router().oneshot(get(uri)).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "uri: {uri}");
    }
}

#[tokio::test]
async fn notes_unmatched_query_returns_empty_set() {
    let response = test_router()
        .oneshot(get("/notes?query=zzzzz"))
        .await
        .unwrap();
    let body = body_json(response).await;

    assert_eq!(body["totalCount"], 0);
    assert_eq!(body["notes"].as_array().unwrap().len(), 0);
}
