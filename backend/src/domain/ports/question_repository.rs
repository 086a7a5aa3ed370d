//! Driven port for the `questions` table.

use async_trait::async_trait;

use crate::domain::{NewQuestion, Question, QuestionFilter};

use super::RecordStoreError;

/// Storage contract for question rows.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuestionRepository: Send + Sync {
    /// Fetch the questions matching `filter`, newest first.
    ///
    /// Filtering happens in the store; the full matching set is returned.
    async fn list(&self, filter: &QuestionFilter) -> Result<Vec<Question>, RecordStoreError>;

    /// Insert one question and return the stored row.
    async fn insert(&self, question: &NewQuestion) -> Result<Question, RecordStoreError>;
}
