use std::sync::Arc;

use chrono::{DateTime, SecondsFormat, Utc};

use super::domain::{
    present, AppointmentRequest, ApplicantInformation, BookingConfirmation, Endpoint,
    EndpointGuide, UserInfoRequest, UserInfoResponse,
};
use super::rejection::RecruitingError;
use super::validation::{is_valid_date, is_valid_name, is_valid_time, ApiKeyPolicy};

const JOB_ID: &str = "1234567890";
const APPLICATION_ID: &str = "1234567890";
const JOB_TITLE: &str = "Support Engineer";
const JOB_DESCRIPTION: &str = "Support Engineering at Bland";
const PHONE_NUMBER: &str = "+1 131 255 0123";

/// Time source for `dateApplied`, swappable so tests can pin it.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Composes the key policy and the canned lookup/booking responses.
pub struct RecruitingService<C> {
    policy: ApiKeyPolicy,
    clock: Arc<C>,
}

impl<C> RecruitingService<C>
where
    C: Clock + 'static,
{
    pub fn new(policy: ApiKeyPolicy, clock: Arc<C>) -> Self {
        Self { policy, clock }
    }

    pub fn authorize(&self, api_key: Option<&str>) -> Result<(), RecruitingError> {
        if self.policy.accepts(api_key) {
            Ok(())
        } else {
            Err(RecruitingError::InvalidApiKey {
                prefix: self.policy.prefix().to_string(),
            })
        }
    }

    /// Validate the applicant's names and echo them inside the canned record.
    pub fn lookup_applicant(
        &self,
        request: UserInfoRequest,
    ) -> Result<UserInfoResponse, RecruitingError> {
        let (Some(first_name), Some(last_name)) =
            (present(&request.first_name), present(&request.last_name))
        else {
            return Err(RecruitingError::MissingFields(
                "Both first_name and last_name are required",
            ));
        };

        if !is_valid_name(first_name) || !is_valid_name(last_name) {
            return Err(RecruitingError::InvalidNameFormat);
        }

        let date_applied = self
            .clock
            .now()
            .to_rfc3339_opts(SecondsFormat::Millis, true);

        Ok(UserInfoResponse {
            job_id: JOB_ID.to_string(),
            job_title: JOB_TITLE.to_string(),
            job_description: JOB_DESCRIPTION.to_string(),
            applicant_information: ApplicantInformation {
                application_id: APPLICATION_ID.to_string(),
                first_name: first_name.to_string(),
                last_name: last_name.to_string(),
                email: format!("{first_name}@bland.ai"),
                date_applied,
                phone_number: PHONE_NUMBER.to_string(),
                linkedin_url: format!("https://www.linkedin.com/in/{first_name}-bland-0000000000"),
            },
        })
    }

    /// Run the booking checks in order; the first failing field decides the error.
    pub fn book_appointment(
        &self,
        request: AppointmentRequest,
    ) -> Result<BookingConfirmation, RecruitingError> {
        let (Some(first_name), Some(last_name), Some(interview_date), Some(interview_time)) = (
            present(&request.first_name),
            present(&request.last_name),
            present(&request.interview_date),
            present(&request.interview_time),
        ) else {
            return Err(RecruitingError::MissingFields("All fields are required"));
        };

        if !is_valid_name(first_name) || !is_valid_name(last_name) {
            return Err(RecruitingError::InvalidNameFormat);
        }
        if !is_valid_date(interview_date) {
            return Err(RecruitingError::InvalidDateFormat);
        }
        if !is_valid_time(interview_time) {
            return Err(RecruitingError::InvalidTimeFormat);
        }

        Ok(BookingConfirmation::booked())
    }

    pub fn guide(&self, endpoint: Endpoint) -> EndpointGuide {
        let fields = match endpoint {
            Endpoint::UserInfo => {
                "This endpoint is for getting user info. Use POST method with 'first_name' and 'last_name' in the request body."
            }
            Endpoint::BookAppointment => {
                "This endpoint is for booking appointments. Use POST method with 'first_name', 'last_name', 'interview_date', and 'interview_time' in the request body."
            }
        };

        EndpointGuide {
            message: format!(
                "{fields} Remember to include your API key starting with '{}' in the '{}' header.",
                self.policy.prefix(),
                super::API_KEY_HEADER,
            ),
        }
    }
}
