use std::sync::OnceLock;

use regex::Regex;

use crate::config::DEFAULT_API_KEY_PREFIX;

fn name_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[a-z]+$").expect("name pattern compiles"))
}

fn date_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^(0[1-9]|[12][0-9]|3[01])-(0[1-9]|1[0-2])-([0-9]{4})$")
            .expect("date pattern compiles")
    })
}

fn time_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^(0[0-9]|1[0-9]|2[0-3]):[0-5][0-9]$").expect("time pattern compiles")
    })
}

/// Lowercase ASCII letters only, at least one.
pub fn is_valid_name(value: &str) -> bool {
    name_pattern().is_match(value)
}

/// `DD-MM-YYYY`. Only the shape is checked, so `31-02-2024` passes.
pub fn is_valid_date(value: &str) -> bool {
    date_pattern().is_match(value)
}

/// 24-hour `HH:MM`.
pub fn is_valid_time(value: &str) -> bool {
    time_pattern().is_match(value)
}

/// Prefix check standing in for real key verification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiKeyPolicy {
    prefix: String,
}

impl ApiKeyPolicy {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn accepts(&self, api_key: Option<&str>) -> bool {
        match api_key {
            Some(key) => !key.is_empty() && key.starts_with(&self.prefix),
            None => false,
        }
    }
}

impl Default for ApiKeyPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_API_KEY_PREFIX)
    }
}
