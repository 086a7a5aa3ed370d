//! Field checks shared by the draft forms.
//!
//! The checks mirror the browser form constraints the console relies on:
//! `required`, `type=email` and `type=datetime-local`. There is no
//! uniqueness, referential or cross-field validation.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde_json::json;

use super::Error;

/// Reasons a draft cannot be submitted.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DraftError {
    /// A required field was blank.
    #[error("missing required field: {field}")]
    MissingField {
        /// Wire name of the field.
        field: &'static str,
    },
    /// The candidate email does not look like an address.
    #[error("{field} must be an email address")]
    InvalidEmail {
        /// Wire name of the field.
        field: &'static str,
        /// Rejected input.
        value: String,
    },
    /// The schedule is neither a local date-time nor an RFC 3339 timestamp.
    #[error("{field} must be a date and time")]
    InvalidTimestamp {
        /// Wire name of the field.
        field: &'static str,
        /// Rejected input.
        value: String,
    },
}

impl DraftError {
    /// Wire name of the offending field.
    pub fn field(&self) -> &'static str {
        match self {
            Self::MissingField { field }
            | Self::InvalidEmail { field, .. }
            | Self::InvalidTimestamp { field, .. } => field,
        }
    }

    fn code(&self) -> &'static str {
        match self {
            Self::MissingField { .. } => "missing_field",
            Self::InvalidEmail { .. } => "invalid_email",
            Self::InvalidTimestamp { .. } => "invalid_timestamp",
        }
    }
}

impl From<DraftError> for Error {
    fn from(value: DraftError) -> Self {
        let details = match &value {
            DraftError::MissingField { field } => json!({
                "field": field,
                "code": value.code(),
            }),
            DraftError::InvalidEmail { field, value: raw }
            | DraftError::InvalidTimestamp { field, value: raw } => json!({
                "field": field,
                "value": raw,
                "code": value.code(),
            }),
        };
        Error::invalid_request(value.to_string()).with_details(details)
    }
}

pub(crate) fn require_text(value: &str, field: &'static str) -> Result<String, DraftError> {
    if value.trim().is_empty() {
        return Err(DraftError::MissingField { field });
    }
    Ok(value.to_owned())
}

pub(crate) fn require_email(value: &str, field: &'static str) -> Result<String, DraftError> {
    let value = require_text(value, field)?;
    let trimmed = value.trim();
    let looks_valid = match trimmed.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && !trimmed.chars().any(char::is_whitespace)
        }
        None => false,
    };
    if !looks_valid {
        return Err(DraftError::InvalidEmail {
            field,
            value: value.clone(),
        });
    }
    Ok(trimmed.to_owned())
}

const LOCAL_DATE_TIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M", "%Y-%m-%dT%H:%M:%S"];

/// Parse a schedule from either `datetime-local` input or RFC 3339.
///
/// Local date-times carry no offset; they are read as UTC, which is how the
/// record store stores a naive timestamp.
pub(crate) fn parse_schedule(value: &str, field: &'static str) -> Result<DateTime<Utc>, DraftError> {
    let raw = require_text(value, field)?;
    let trimmed = raw.trim();
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(timestamp.with_timezone(&Utc));
    }
    LOCAL_DATE_TIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(trimmed, format).ok())
        .map(|naive| naive.and_utc())
        .ok_or(DraftError::InvalidTimestamp { field, value: raw })
}
