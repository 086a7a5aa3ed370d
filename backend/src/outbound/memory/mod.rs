//! In-process record store.
//!
//! Backs both repositories when no store URL is configured, and in tests.
//! It mirrors the store-side behaviour the console relies on: sequential ids,
//! `pending` status for new interviews, clock-stamped `created_at`, the
//! fixed list orderings and the question filter predicates.

use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use mockable::Clock;

use crate::domain::ports::{InterviewRepository, QuestionRepository, RecordStoreError};
use crate::domain::{
    Interview, InterviewStatus, NewInterview, NewQuestion, Question, QuestionFilter, RecordId,
};

#[derive(Debug, Default)]
struct Tables {
    next_id: u64,
    interviews: Vec<Interview>,
    questions: Vec<Question>,
}

impl Tables {
    fn allocate_id(&mut self) -> Result<RecordId, RecordStoreError> {
        self.next_id += 1;
        RecordId::new(self.next_id.to_string())
            .map_err(|error| RecordStoreError::decode(error.to_string()))
    }
}

/// Thread-safe in-memory implementation of both record store ports.
pub struct InMemoryRecordStore {
    clock: Arc<dyn Clock>,
    tables: Mutex<Tables>,
}

impl InMemoryRecordStore {
    /// Create an empty store stamping rows with `clock`.
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            clock,
            tables: Mutex::new(Tables::default()),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Tables>, RecordStoreError> {
        self.tables
            .lock()
            .map_err(|_| RecordStoreError::connection("in-memory store lock poisoned"))
    }
}

#[async_trait]
impl InterviewRepository for InMemoryRecordStore {
    async fn list_by_schedule(&self) -> Result<Vec<Interview>, RecordStoreError> {
        let tables = self.lock()?;
        let mut interviews = tables.interviews.clone();
        interviews.sort_by_key(|interview| interview.scheduled_at);
        Ok(interviews)
    }

    async fn insert(&self, interview: &NewInterview) -> Result<Interview, RecordStoreError> {
        let mut tables = self.lock()?;
        let stored = Interview {
            id: tables.allocate_id()?,
            candidate_name: interview.candidate_name.clone(),
            candidate_email: interview.candidate_email.clone(),
            domain: interview.domain,
            tech_stack: interview.tech_stack.clone(),
            scheduled_at: interview.scheduled_at,
            status: InterviewStatus::Pending,
            created_at: self.clock.utc(),
        };
        tables.interviews.push(stored.clone());
        Ok(stored)
    }
}

#[async_trait]
impl QuestionRepository for InMemoryRecordStore {
    async fn list(&self, filter: &QuestionFilter) -> Result<Vec<Question>, RecordStoreError> {
        let tables = self.lock()?;
        // Newest insert first among equal timestamps.
        let mut questions: Vec<Question> = tables
            .questions
            .iter()
            .rev()
            .filter(|question| filter.matches(question))
            .cloned()
            .collect();
        questions.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(questions)
    }

    async fn insert(&self, question: &NewQuestion) -> Result<Question, RecordStoreError> {
        let mut tables = self.lock()?;
        let stored = Question {
            id: tables.allocate_id()?,
            content: question.content.clone(),
            domain: question.domain,
            tech_stack: question.tech_stack.clone(),
            difficulty: question.difficulty,
            created_at: self.clock.utc(),
        };
        tables.questions.push(stored.clone());
        Ok(stored)
    }
}
