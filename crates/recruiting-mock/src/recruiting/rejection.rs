use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

/// Reasons a recruiting request is turned away.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecruitingError {
    #[error("The API key provided is invalid or missing. It should start with '{prefix}'.")]
    InvalidApiKey { prefix: String },
    #[error("{0}")]
    MissingFields(&'static str),
    #[error("Names must be all lowercase letters")]
    InvalidNameFormat,
    #[error("Date must be in DD-MM-YYYY format")]
    InvalidDateFormat,
    #[error("Time must be in HH:MM 24-hour format")]
    InvalidTimeFormat,
}

impl RecruitingError {
    pub fn code(&self) -> &'static str {
        match self {
            RecruitingError::InvalidApiKey { .. } => "INVALID_API_KEY",
            RecruitingError::MissingFields(_) => "MISSING_FIELDS",
            RecruitingError::InvalidNameFormat => "INVALID_NAME_FORMAT",
            RecruitingError::InvalidDateFormat => "INVALID_DATE_FORMAT",
            RecruitingError::InvalidTimeFormat => "INVALID_TIME_FORMAT",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            RecruitingError::InvalidApiKey { .. } => StatusCode::UNAUTHORIZED,
            _ => StatusCode::BAD_REQUEST,
        }
    }

    pub fn body(&self) -> ErrorBody {
        ErrorBody {
            error: self.code().to_string(),
            message: self.to_string(),
        }
    }
}

/// Wire shape shared by every error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    pub message: String,
}

impl IntoResponse for RecruitingError {
    fn into_response(self) -> Response {
        (self.status(), Json(self.body())).into_response()
    }
}
