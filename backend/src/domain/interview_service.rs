//! Interview scheduling service.
//!
//! Implements the interview driving ports on top of an
//! [`InterviewRepository`]. Every call is a single repository round trip.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::error;

use crate::domain::ports::{
    InterviewRepository, InterviewsCommand, InterviewsQuery, RecordStoreError,
};
use crate::domain::{Error, Interview, InterviewDraft};

/// Interview service implementing [`InterviewsQuery`] and [`InterviewsCommand`].
#[derive(Clone)]
pub struct InterviewService<R> {
    repo: Arc<R>,
}

impl<R> InterviewService<R> {
    /// Create a new service over the given repository.
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }
}

/// Map a store failure onto the API error taxonomy.
///
/// Reachability problems become `service_unavailable`; anything else is an
/// internal error.
pub(crate) fn map_store_error(table: &str, error: RecordStoreError) -> Error {
    error!(table, error = %error, "record store call failed");
    if error.is_unavailable() {
        Error::service_unavailable(format!("{table} store unavailable: {error}"))
    } else {
        Error::internal(format!("{table} store error: {error}"))
    }
}

#[async_trait]
impl<R> InterviewsQuery for InterviewService<R>
where
    R: InterviewRepository,
{
    async fn list_interviews(&self) -> Result<Vec<Interview>, Error> {
        self.repo
            .list_by_schedule()
            .await
            .map_err(|err| map_store_error("interviews", err))
    }
}

#[async_trait]
impl<R> InterviewsCommand for InterviewService<R>
where
    R: InterviewRepository,
{
    async fn schedule_interview(&self, draft: InterviewDraft) -> Result<Interview, Error> {
        let new_interview = draft.validate()?;
        self.repo
            .insert(&new_interview)
            .await
            .map_err(|err| map_store_error("interviews", err))
    }
}
