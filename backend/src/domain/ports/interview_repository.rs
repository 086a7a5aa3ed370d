//! Driven port for the `interviews` table.

use async_trait::async_trait;

use crate::domain::{Interview, NewInterview};

use super::RecordStoreError;

/// Storage contract for interview rows.
///
/// Both operations are a single round trip. Adapters must not retry.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait InterviewRepository: Send + Sync {
    /// Fetch every interview ordered by `scheduled_at` ascending.
    async fn list_by_schedule(&self) -> Result<Vec<Interview>, RecordStoreError>;

    /// Insert one interview and return the stored row, including the
    /// store-assigned id, status and creation time.
    async fn insert(&self, interview: &NewInterview) -> Result<Interview, RecordStoreError>;
}
