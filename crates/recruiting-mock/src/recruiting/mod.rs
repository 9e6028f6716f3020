//! Mock recruiting endpoints: applicant lookup and interview booking.
//!
//! Every request is answered from format checks alone. Nothing is stored, and the applicant
//! record returned by a lookup is canned apart from the echoed names and the application time.

pub mod domain;
pub mod rejection;
pub mod router;
pub mod service;
pub mod validation;

#[cfg(test)]
mod tests;

/// Header carrying the caller's API key on the POST endpoints.
pub const API_KEY_HEADER: &str = "bland-api-key";

pub use domain::{
    AppointmentRequest, ApplicantInformation, BookingConfirmation, Endpoint, EndpointGuide,
    UserInfoRequest, UserInfoResponse,
};
pub use rejection::{ErrorBody, RecruitingError};
pub use router::recruiting_router;
pub use service::{Clock, RecruitingService};
pub use validation::{is_valid_date, is_valid_name, is_valid_time, ApiKeyPolicy};
