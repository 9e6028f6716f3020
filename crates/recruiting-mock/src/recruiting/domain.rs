use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body accepted by `POST /get-user-info`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInfoRequest {
    #[serde(default, deserialize_with = "deserialize_field")]
    pub first_name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_field")]
    pub last_name: Option<String>,
}

/// Body accepted by `POST /book-appointment`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppointmentRequest {
    #[serde(default, deserialize_with = "deserialize_field")]
    pub first_name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_field")]
    pub last_name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_field")]
    pub interview_date: Option<String>,
    #[serde(default, deserialize_with = "deserialize_field")]
    pub interview_time: Option<String>,
}

/// Falsy JSON values (null, "", false, 0) count as absent. Any other value is
/// rendered the way a JavaScript string conversion would before format checks.
fn deserialize_field<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(field_text(value))
}

fn field_text(value: Value) -> Option<String> {
    match value {
        Value::Null | Value::Bool(false) => None,
        Value::String(text) if text.is_empty() => None,
        Value::String(text) => Some(text),
        Value::Number(number) if number.as_f64() == Some(0.0) => None,
        other => Some(loose_text(&other)),
    }
}

/// Arrays join their items with commas (null items become empty), objects
/// collapse to `[object Object]`.
fn loose_text(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(flag) => flag.to_string(),
        Value::Number(number) => number.to_string(),
        Value::String(text) => text.clone(),
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::Null => String::new(),
                other => loose_text(other),
            })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

/// Returns the field only when it is present and non-empty.
pub(crate) fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|value| !value.is_empty())
}

/// Canned applicant record returned by a successful lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfoResponse {
    pub job_id: String,
    pub job_title: String,
    pub job_description: String,
    pub applicant_information: ApplicantInformation,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicantInformation {
    pub application_id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub date_applied: String,
    #[serde(rename = "phone_number")]
    pub phone_number: String,
    #[serde(rename = "linkedin_url")]
    pub linkedin_url: String,
}

/// Acknowledgement for a booked interview slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingConfirmation {
    pub status: String,
    pub message: String,
}

impl BookingConfirmation {
    pub fn booked() -> Self {
        Self {
            status: "success".to_string(),
            message: "Appointment booked successfully".to_string(),
        }
    }
}

/// Usage text answered on the GET form of each endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndpointGuide {
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    UserInfo,
    BookAppointment,
}

impl Endpoint {
    pub fn path(self) -> &'static str {
        match self {
            Endpoint::UserInfo => "/get-user-info",
            Endpoint::BookAppointment => "/book-appointment",
        }
    }
}
