//! Question bank service.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::domain::interview_service::map_store_error;
use crate::domain::ports::{QuestionBankCommand, QuestionBankQuery, QuestionRepository};
use crate::domain::{Error, Question, QuestionDraft, QuestionFilter};

/// Question bank service implementing [`QuestionBankQuery`] and
/// [`QuestionBankCommand`].
#[derive(Clone)]
pub struct QuestionBankService<R> {
    repo: Arc<R>,
}

impl<R> QuestionBankService<R> {
    /// Create a new service over the given repository.
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R> QuestionBankQuery for QuestionBankService<R>
where
    R: QuestionRepository,
{
    async fn list_questions(&self, filter: &QuestionFilter) -> Result<Vec<Question>, Error> {
        debug!(?filter, "listing questions");
        self.repo
            .list(filter)
            .await
            .map_err(|err| map_store_error("questions", err))
    }
}

#[async_trait]
impl<R> QuestionBankCommand for QuestionBankService<R>
where
    R: QuestionRepository,
{
    async fn add_question(&self, draft: QuestionDraft) -> Result<Question, Error> {
        let new_question = draft.validate()?;
        self.repo
            .insert(&new_question)
            .await
            .map_err(|err| map_store_error("questions", err))
    }
}
