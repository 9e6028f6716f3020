//! End-to-end checks for the recruiting router through the public crate API.
//!
//! Scenarios mirror how an integrating caller uses the mock: a GET to learn the contract,
//! then POSTs with and without a valid key.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use chrono::{DateTime, TimeZone, Utc};
use serde_json::{json, Value};
use tower::ServiceExt;

use recruiting_mock::recruiting::{
    recruiting_router, ApiKeyPolicy, Clock, ErrorBody, RecruitingService, UserInfoResponse,
    API_KEY_HEADER,
};

struct PinnedClock;

impl Clock for PinnedClock {
    fn now(&self) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 2, 29, 18, 45, 7)
            .single()
            .expect("valid timestamp")
    }
}

fn router_with_prefix(prefix: &str) -> axum::Router {
    let service = RecruitingService::new(ApiKeyPolicy::new(prefix), Arc::new(PinnedClock));
    recruiting_router(Arc::new(service))
}

fn post(path: &str, key: &str, body: Value) -> Request<Body> {
    Request::post(path)
        .header(header::CONTENT_TYPE, "application/json")
        .header(API_KEY_HEADER, key)
        .body(Body::from(body.to_string()))
        .expect("build request")
}

async fn body_bytes(response: axum::response::Response) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), 4096)
        .await
        .expect("read body")
        .to_vec()
}

#[tokio::test]
async fn lookup_then_book_with_configured_prefix() {
    let router = router_with_prefix("bland_");

    let guide = router
        .clone()
        .oneshot(
            Request::get("/get-user-info")
                .body(Body::empty())
                .expect("build request"),
        )
        .await
        .expect("guide route executes");
    assert_eq!(guide.status(), StatusCode::OK);
    let guide: Value = serde_json::from_slice(&body_bytes(guide).await).expect("json");
    assert!(guide["message"]
        .as_str()
        .unwrap_or_default()
        .contains("starting with 'bland_'"));

    let lookup = router
        .clone()
        .oneshot(post(
            "/get-user-info",
            "bland_123",
            json!({ "first_name": "alan", "last_name": "turing" }),
        ))
        .await
        .expect("lookup route executes");
    assert_eq!(lookup.status(), StatusCode::OK);
    let record: UserInfoResponse =
        serde_json::from_slice(&body_bytes(lookup).await).expect("typed record");
    assert_eq!(record.applicant_information.email, "alan@bland.ai");
    assert_eq!(
        record.applicant_information.date_applied,
        "2024-02-29T18:45:07.000Z"
    );

    let booking = router
        .oneshot(post(
            "/book-appointment",
            "bland_123",
            json!({
                "first_name": "alan",
                "last_name": "turing",
                "interview_date": "01-03-2024",
                "interview_time": "09:15",
            }),
        ))
        .await
        .expect("booking route executes");
    assert_eq!(booking.status(), StatusCode::OK);
}

#[tokio::test]
async fn default_prefix_key_is_refused_under_custom_prefix() {
    let response = router_with_prefix("bland_")
        .oneshot(post(
            "/get-user-info",
            "sk-123",
            json!({ "first_name": "alan", "last_name": "turing" }),
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body: ErrorBody = serde_json::from_slice(&body_bytes(response).await).expect("json");
    assert_eq!(body.error, "INVALID_API_KEY");
    assert_eq!(
        body.message,
        "The API key provided is invalid or missing. It should start with 'bland_'."
    );
}

#[tokio::test]
async fn empty_body_reports_missing_fields() {
    let request = Request::post("/book-appointment")
        .header(header::CONTENT_TYPE, "application/json")
        .header(API_KEY_HEADER, "sk-abc")
        .body(Body::empty())
        .expect("build request");

    let response = router_with_prefix("sk-")
        .oneshot(request)
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: ErrorBody = serde_json::from_slice(&body_bytes(response).await).expect("json");
    assert_eq!(body.error, "MISSING_FIELDS");
    assert_eq!(body.message, "All fields are required");
}
