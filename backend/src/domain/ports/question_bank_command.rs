//! Driving port for adding questions to the bank.

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::{Error, Question, QuestionDraft, RecordId};

/// Domain use-case port for creating questions from a draft form.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuestionBankCommand: Send + Sync {
    /// Validate `draft` and insert it as one question.
    async fn add_question(&self, draft: QuestionDraft) -> Result<Question, Error>;
}

/// Fixture command echoing the validated draft back as a stored row.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureQuestionBankCommand;

#[async_trait]
impl QuestionBankCommand for FixtureQuestionBankCommand {
    async fn add_question(&self, draft: QuestionDraft) -> Result<Question, Error> {
        let new_question = draft.validate()?;
        Ok(Question {
            id: RecordId::random(),
            content: new_question.content,
            domain: new_question.domain,
            tech_stack: new_question.tech_stack,
            difficulty: new_question.difficulty,
            created_at: Utc::now(),
        })
    }
}
