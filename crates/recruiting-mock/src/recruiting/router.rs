use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::{error, info, warn};

use crate::error::unexpected_error_response;

use super::domain::{AppointmentRequest, Endpoint, EndpointGuide, UserInfoRequest};
use super::rejection::RecruitingError;
use super::service::{Clock, RecruitingService};
use super::API_KEY_HEADER;

/// Router builder exposing the applicant lookup and booking endpoints.
pub fn recruiting_router<C>(service: Arc<RecruitingService<C>>) -> Router
where
    C: Clock + 'static,
{
    Router::new()
        .route(
            Endpoint::UserInfo.path(),
            get(user_info_guide::<C>).post(user_info_handler::<C>),
        )
        .route(
            Endpoint::BookAppointment.path(),
            get(booking_guide::<C>).post(book_appointment_handler::<C>),
        )
        .with_state(service)
}

pub(crate) async fn user_info_guide<C>(
    State(service): State<Arc<RecruitingService<C>>>,
) -> Json<EndpointGuide>
where
    C: Clock + 'static,
{
    Json(service.guide(Endpoint::UserInfo))
}

pub(crate) async fn booking_guide<C>(
    State(service): State<Arc<RecruitingService<C>>>,
) -> Json<EndpointGuide>
where
    C: Clock + 'static,
{
    Json(service.guide(Endpoint::BookAppointment))
}

pub(crate) async fn user_info_handler<C>(
    State(service): State<Arc<RecruitingService<C>>>,
    headers: HeaderMap,
    body: Bytes,
) -> Response
where
    C: Clock + 'static,
{
    let request = match decode_payload::<UserInfoRequest>(&headers, &body) {
        Ok(request) => request,
        Err(error) => return undecodable(Endpoint::UserInfo, &error),
    };
    let outcome = service
        .authorize(api_key(&headers))
        .and_then(|()| service.lookup_applicant(request));

    respond(Endpoint::UserInfo, outcome)
}

pub(crate) async fn book_appointment_handler<C>(
    State(service): State<Arc<RecruitingService<C>>>,
    headers: HeaderMap,
    body: Bytes,
) -> Response
where
    C: Clock + 'static,
{
    let request = match decode_payload::<AppointmentRequest>(&headers, &body) {
        Ok(request) => request,
        Err(error) => return undecodable(Endpoint::BookAppointment, &error),
    };
    let outcome = service
        .authorize(api_key(&headers))
        .and_then(|()| service.book_appointment(request));

    respond(Endpoint::BookAppointment, outcome)
}

fn api_key(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(API_KEY_HEADER)
        .and_then(|value| value.to_str().ok())
}

/// Body that could not be turned into a request payload.
#[derive(Debug, thiserror::Error)]
pub(crate) enum PayloadError {
    #[error("invalid JSON body: {0}")]
    Json(#[from] serde_json::Error),
    #[error("top-level JSON value must be an object or an array")]
    NotContainer,
}

/// Bodies are decoded before the API key is looked at. Without a JSON content type, or
/// with nothing in them, they decode as `{}`; a top-level array carries no named fields
/// and decodes the same way.
pub(crate) fn decode_payload<T>(headers: &HeaderMap, body: &[u8]) -> Result<T, PayloadError>
where
    T: DeserializeOwned + Default,
{
    if !has_json_content_type(headers) || body.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }

    match serde_json::from_slice::<Value>(body)? {
        value @ Value::Object(_) => Ok(serde_json::from_value(value)?),
        Value::Array(_) => Ok(T::default()),
        _ => Err(PayloadError::NotContainer),
    }
}

fn has_json_content_type(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
    else {
        return false;
    };

    content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .eq_ignore_ascii_case("application/json")
}

fn undecodable(endpoint: Endpoint, error: &PayloadError) -> Response {
    error!(endpoint = endpoint.path(), %error, "request body could not be decoded");
    unexpected_error_response()
}

fn respond<T>(endpoint: Endpoint, outcome: Result<T, RecruitingError>) -> Response
where
    T: Serialize,
{
    match outcome {
        Ok(body) => {
            info!(endpoint = endpoint.path(), "recruiting request accepted");
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(error) => {
            warn!(
                endpoint = endpoint.path(),
                code = error.code(),
                status = error.status().as_u16(),
                "recruiting request rejected"
            );
            error.into_response()
        }
    }
}
