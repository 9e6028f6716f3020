use crate::infra::SystemClock;
use clap::Args;
use recruiting_mock::error::AppError;
use recruiting_mock::recruiting::{
    ApiKeyPolicy, AppointmentRequest, RecruitingError, RecruitingService, UserInfoRequest,
};
use serde::Serialize;
use std::sync::Arc;

#[derive(Args, Debug)]
pub(crate) struct ApplicantCheckArgs {
    /// Applicant first name (lowercase letters)
    #[arg(long)]
    pub(crate) first_name: Option<String>,
    /// Applicant last name (lowercase letters)
    #[arg(long)]
    pub(crate) last_name: Option<String>,
}

#[derive(Args, Debug)]
pub(crate) struct BookingCheckArgs {
    /// Applicant first name (lowercase letters)
    #[arg(long)]
    pub(crate) first_name: Option<String>,
    /// Applicant last name (lowercase letters)
    #[arg(long)]
    pub(crate) last_name: Option<String>,
    /// Interview date (DD-MM-YYYY)
    #[arg(long)]
    pub(crate) date: Option<String>,
    /// Interview time (HH:MM, 24-hour)
    #[arg(long)]
    pub(crate) time: Option<String>,
}

fn offline_service() -> RecruitingService<SystemClock> {
    RecruitingService::new(ApiKeyPolicy::default(), Arc::new(SystemClock))
}

pub(crate) fn run_applicant_check(args: ApplicantCheckArgs) -> Result<(), AppError> {
    let request = UserInfoRequest {
        first_name: args.first_name,
        last_name: args.last_name,
    };
    let outcome = offline_service().lookup_applicant(request);
    println!("{}", render_outcome(outcome)?);
    Ok(())
}

pub(crate) fn run_booking_check(args: BookingCheckArgs) -> Result<(), AppError> {
    let request = AppointmentRequest {
        first_name: args.first_name,
        last_name: args.last_name,
        interview_date: args.date,
        interview_time: args.time,
    };
    let outcome = offline_service().book_appointment(request);
    println!("{}", render_outcome(outcome)?);
    Ok(())
}

/// Status line followed by the JSON body the HTTP route would send.
pub(crate) fn render_outcome<T>(outcome: Result<T, RecruitingError>) -> Result<String, AppError>
where
    T: Serialize,
{
    let (status, body) = match outcome {
        Ok(body) => (200, serde_json::to_string_pretty(&body)?),
        Err(error) => (
            error.status().as_u16(),
            serde_json::to_string_pretty(&error.body())?,
        ),
    };
    Ok(format!("HTTP {status}\n{body}"))
}
