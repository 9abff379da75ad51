#![allow(clippy::unwrap_used)]

use std::sync::{Arc, Mutex};

use axum::{extract::RawQuery, extract::State, http::StatusCode, routing::get, Json, Router};
use reqwest::Url;
use rust_decimal_macros::dec;

use super::error::GENERIC_ERROR_MESSAGE;
use super::*;

fn endpoint() -> Url {
    Url::parse(DEFAULT_ENDPOINT).unwrap()
}

// ── Query ─────────────────────────────────────────────────────

#[test]
fn test_query_empty_leaves_endpoint_untouched() {
    let url = Query::default().to_url(&endpoint());
    assert_eq!(url.as_str(), "http://localhost:3000/transaction");
}

#[test]
fn test_query_category_only() {
    let url = Query::from_selection("Food", "").to_url(&endpoint());
    assert_eq!(url.as_str(), "http://localhost:3000/transaction?category=Food");
}

#[test]
fn test_query_status_only() {
    let url = Query::from_selection("", "pending").to_url(&endpoint());
    assert_eq!(url.as_str(), "http://localhost:3000/transaction?status=pending");
}

#[test]
fn test_query_both_in_fixed_order() {
    let url = Query::from_selection("Transport", "complete").to_url(&endpoint());
    assert_eq!(
        url.as_str(),
        "http://localhost:3000/transaction?category=Transport&status=complete"
    );
}

#[test]
fn test_query_encodes_values() {
    let url = Query::from_selection("Eating Out & Bars", "").to_url(&endpoint());
    assert_eq!(
        url.as_str(),
        "http://localhost:3000/transaction?category=Eating+Out+%26+Bars"
    );
}

#[test]
fn test_query_empty_strings_count_as_unset() {
    let query = Query {
        category: Some(String::new()),
        status: None,
    };
    assert!(query.is_empty());
    assert_eq!(query.to_url(&endpoint()).as_str(), DEFAULT_ENDPOINT);
}

#[test]
fn test_query_display() {
    assert_eq!(Query::default().to_string(), "(unfiltered)");
    assert_eq!(
        Query::from_selection("Food", "pending").to_string(),
        "category=Food&status=pending"
    );
}

// ── FetchError ────────────────────────────────────────────────

#[test]
fn test_error_kinds() {
    assert_eq!(
        FetchError::HttpStatus(reqwest::StatusCode::INTERNAL_SERVER_ERROR).kind(),
        ErrorKind::HttpStatus
    );
    let parse = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    assert_eq!(FetchError::from(parse).kind(), ErrorKind::Parse);
    assert_eq!(FetchError::Other("x".into()).kind(), ErrorKind::Other);
}

#[test]
fn test_error_message_for_http_status() {
    let err = FetchError::HttpStatus(reqwest::StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        err.display_message(),
        "Failed to fetch transactions (HTTP 500 Internal Server Error)"
    );
}

#[test]
fn test_error_message_falls_back_when_empty() {
    assert_eq!(
        FetchError::Other(String::new()).display_message(),
        GENERIC_ERROR_MESSAGE
    );
    assert_eq!(
        FetchError::Other("  ".into()).display_message(),
        GENERIC_ERROR_MESSAGE
    );
}

// ── HttpSource ────────────────────────────────────────────────

async fn serve(router: Router) -> Url {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    Url::parse(&format!("http://{addr}/transaction")).unwrap()
}

fn sample_body() -> serde_json::Value {
    serde_json::json!({
        "data": [
            { "id": "1", "amount": 12.5, "category": "Food", "status": "pending" },
            { "id": "2", "amount": 0, "category": "Transport", "status": "complete" }
        ]
    })
}

#[tokio::test]
async fn test_http_source_success() {
    let router = Router::new().route("/transaction", get(|| async { Json(sample_body()) }));
    let source = HttpSource::new(serve(router).await, None).unwrap();

    let txns = source.fetch(&Query::default()).await.unwrap();
    assert_eq!(txns.len(), 2);
    assert_eq!(txns[0].amount, dec!(12.5));
    assert_eq!(txns[1].category, "Transport");
}

#[tokio::test]
async fn test_http_source_sends_only_non_empty_params() {
    let seen: Arc<Mutex<Vec<Option<String>>>> = Arc::default();
    let router = Router::new()
        .route(
            "/transaction",
            get(
                |State(seen): State<Arc<Mutex<Vec<Option<String>>>>>, RawQuery(q): RawQuery| async move {
                    seen.lock().unwrap().push(q);
                    Json(serde_json::json!({ "data": [] }))
                },
            ),
        )
        .with_state(Arc::clone(&seen));
    let source = HttpSource::new(serve(router).await, None).unwrap();

    source.fetch(&Query::default()).await.unwrap();
    source.fetch(&Query::from_selection("Food", "")).await.unwrap();
    source
        .fetch(&Query::from_selection("Utilities", "complete"))
        .await
        .unwrap();

    let seen = seen.lock().unwrap();
    assert_eq!(
        *seen,
        vec![
            None,
            Some("category=Food".to_string()),
            Some("category=Utilities&status=complete".to_string()),
        ]
    );
}

#[tokio::test]
async fn test_http_source_server_error_is_http_status() {
    let router = Router::new().route(
        "/transaction",
        get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, Json(sample_body())) }),
    );
    let source = HttpSource::new(serve(router).await, None).unwrap();

    let err = source.fetch(&Query::default()).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::HttpStatus);
}

#[tokio::test]
async fn test_http_source_not_found_is_http_status() {
    let router = Router::new();
    let source = HttpSource::new(serve(router).await, None).unwrap();

    let err = source.fetch(&Query::default()).await.unwrap_err();
    assert!(matches!(err, FetchError::HttpStatus(s) if s == reqwest::StatusCode::NOT_FOUND));
}

#[tokio::test]
async fn test_http_source_bad_body_is_parse_error() {
    let router = Router::new().route("/transaction", get(|| async { "not json" }));
    let source = HttpSource::new(serve(router).await, None).unwrap();

    let err = source.fetch(&Query::default()).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Parse);
}

#[tokio::test]
async fn test_http_source_unknown_status_value_is_parse_error() {
    let router = Router::new().route(
        "/transaction",
        get(|| async {
            Json(serde_json::json!({
                "data": [{ "id": "1", "amount": 1, "category": "Food", "status": "completed" }]
            }))
        }),
    );
    let source = HttpSource::new(serve(router).await, None).unwrap();

    let err = source.fetch(&Query::default()).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Parse);
}

#[tokio::test]
async fn test_http_source_connection_refused_is_network_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let url = Url::parse(&format!("http://{addr}/transaction")).unwrap();
    let source = HttpSource::new(url, None).unwrap();

    let err = source.fetch(&Query::default()).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Network);
    assert!(err.display_message().starts_with("Failed to fetch transactions"));
}
