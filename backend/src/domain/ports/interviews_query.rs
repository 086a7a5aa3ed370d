//! Driving port for reading the interview list.

use async_trait::async_trait;

use crate::domain::{Error, Interview};

/// Domain use-case port for listing interviews.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait InterviewsQuery: Send + Sync {
    /// List every interview, earliest scheduled first.
    async fn list_interviews(&self) -> Result<Vec<Interview>, Error>;
}

/// Fixture query returning an empty list.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureInterviewsQuery;

#[async_trait]
impl InterviewsQuery for FixtureInterviewsQuery {
    async fn list_interviews(&self) -> Result<Vec<Interview>, Error> {
        Ok(Vec::new())
    }
}
