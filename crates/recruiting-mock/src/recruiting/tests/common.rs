use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request};
use axum::response::Response;
use chrono::{DateTime, TimeZone, Utc};
use serde_json::Value;

use crate::recruiting::{
    recruiting_router, AppointmentRequest, ApiKeyPolicy, Clock, RecruitingService,
    UserInfoRequest, API_KEY_HEADER,
};

pub(super) const VALID_KEY: &str = "sk-test-0001";

/// Clock frozen at a known instant.
pub(super) struct FixedClock(pub(super) DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

pub(super) fn applied_at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2023, 9, 9, 0, 0, 0)
        .single()
        .expect("valid timestamp")
}

pub(super) fn build_service() -> RecruitingService<FixedClock> {
    RecruitingService::new(ApiKeyPolicy::default(), Arc::new(FixedClock(applied_at())))
}

pub(super) fn router() -> axum::Router {
    recruiting_router(Arc::new(build_service()))
}

pub(super) fn user_info() -> UserInfoRequest {
    UserInfoRequest {
        first_name: Some("ada".to_string()),
        last_name: Some("lovelace".to_string()),
    }
}

pub(super) fn appointment() -> AppointmentRequest {
    AppointmentRequest {
        first_name: Some("ada".to_string()),
        last_name: Some("lovelace".to_string()),
        interview_date: Some("15-10-2024".to_string()),
        interview_time: Some("14:30".to_string()),
    }
}

pub(super) fn post_json(path: &str, api_key: Option<&str>, body: &Value) -> Request<Body> {
    let mut builder = Request::post(path).header(header::CONTENT_TYPE, "application/json");
    if let Some(key) = api_key {
        builder = builder.header(API_KEY_HEADER, key);
    }
    builder
        .body(Body::from(serde_json::to_vec(body).expect("serialize body")))
        .expect("build request")
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 4096)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

pub(super) fn error_code(payload: &Value) -> Option<&str> {
    payload.get("error").and_then(Value::as_str)
}
