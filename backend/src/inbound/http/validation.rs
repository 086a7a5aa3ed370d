//! Shared validation helpers for inbound HTTP adapters.
//!
//! Select inputs arrive as raw strings. An empty string means "no selection"
//! for filters; anything else must be one of the lowercase wire names.

use std::str::FromStr;

use serde_json::json;

use crate::domain::{Error, ParseChoiceError};

/// Validation error codes for HTTP request failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ErrorCode {
    InvalidChoice,
}

impl ErrorCode {
    fn as_str(self) -> &'static str {
        match self {
            ErrorCode::InvalidChoice => "invalid_choice",
        }
    }
}

/// Newtype wrapper for HTTP field names to provide type safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    fn as_str(&self) -> &str {
        self.0
    }
}

pub(crate) fn invalid_choice_error(field: FieldName, error: &ParseChoiceError) -> Error {
    let field = field.as_str();
    Error::invalid_request(format!("{field}: {error}")).with_details(json!({
        "field": field,
        "value": error.input,
        "code": ErrorCode::InvalidChoice.as_str(),
    }))
}

/// Parse an optional select value. Absent or blank input yields `None`.
pub(crate) fn parse_optional_choice<T>(
    value: Option<&str>,
    field: FieldName,
) -> Result<Option<T>, Error>
where
    T: FromStr<Err = ParseChoiceError>,
{
    match value.map(str::trim) {
        None | Some("") => Ok(None),
        Some(raw) => raw
            .parse::<T>()
            .map(Some)
            .map_err(|error| invalid_choice_error(field, &error)),
    }
}

/// Parse a select value that falls back to the form default when absent.
pub(crate) fn parse_choice_or_default<T>(
    value: Option<&str>,
    field: FieldName,
) -> Result<T, Error>
where
    T: FromStr<Err = ParseChoiceError> + Default,
{
    Ok(parse_optional_choice(value, field)?.unwrap_or_default())
}
