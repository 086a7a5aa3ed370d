//! Driving port for scheduling interviews.

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::{Error, Interview, InterviewDraft, InterviewStatus, RecordId};

/// Domain use-case port for creating interviews from a draft form.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait InterviewsCommand: Send + Sync {
    /// Validate `draft` and insert it as one interview.
    async fn schedule_interview(&self, draft: InterviewDraft) -> Result<Interview, Error>;
}

/// Fixture command echoing the validated draft back as a stored row.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureInterviewsCommand;

#[async_trait]
impl InterviewsCommand for FixtureInterviewsCommand {
    async fn schedule_interview(&self, draft: InterviewDraft) -> Result<Interview, Error> {
        let new_interview = draft.validate()?;
        Ok(Interview {
            id: RecordId::random(),
            candidate_name: new_interview.candidate_name,
            candidate_email: new_interview.candidate_email,
            domain: new_interview.domain,
            tech_stack: new_interview.tech_stack,
            scheduled_at: new_interview.scheduled_at,
            status: InterviewStatus::Pending,
            created_at: Utc::now(),
        })
    }
}
