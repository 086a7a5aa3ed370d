//! Driving port for reading the question bank.

use async_trait::async_trait;

use crate::domain::{Error, Question, QuestionFilter};

/// Domain use-case port for listing questions.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuestionBankQuery: Send + Sync {
    /// List the questions matching `filter`, newest first.
    async fn list_questions(&self, filter: &QuestionFilter) -> Result<Vec<Question>, Error>;
}

/// Fixture query returning an empty bank.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureQuestionBankQuery;

#[async_trait]
impl QuestionBankQuery for FixtureQuestionBankQuery {
    async fn list_questions(&self, _filter: &QuestionFilter) -> Result<Vec<Question>, Error> {
        Ok(Vec::new())
    }
}
