//! Opaque record identifiers assigned by the record store.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Validation errors returned by [`RecordId::new`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecordIdValidationError {
    /// The identifier was blank.
    #[error("record id must not be empty")]
    Empty,
}

/// Identifier of an interview or question row.
///
/// The console never interprets the value; it only echoes what the store
/// returned.
///
/// # Examples
/// ```
/// use interview_console::domain::RecordId;
///
/// let id = RecordId::new("42").expect("non-empty id");
/// assert_eq!(id.as_str(), "42");
/// assert!(RecordId::new("  ").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RecordId(String);

impl RecordId {
    /// Validate and wrap a store-assigned identifier.
    pub fn new(value: impl Into<String>) -> Result<Self, RecordIdValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(RecordIdValidationError::Empty);
        }
        Ok(Self(value))
    }

    /// Generate a fresh identifier, as the in-process store does on insert.
    pub fn random() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Borrow the raw identifier.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl std::fmt::Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for RecordId {
    type Error = RecordIdValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<RecordId> for String {
    fn from(value: RecordId) -> Self {
        value.0
    }
}
