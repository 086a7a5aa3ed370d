//! Port implementations for the two tables.

use async_trait::async_trait;

use super::client::RecordStoreClient;
use super::dto::{
    InterviewInsertDto, InterviewRowDto, QuestionInsertDto, QuestionRowDto,
};
use super::query::{INTERVIEWS_TABLE, QUESTIONS_TABLE, interview_list_query, question_list_query};
use crate::domain::ports::{InterviewRepository, QuestionRepository, RecordStoreError};
use crate::domain::{Interview, NewInterview, NewQuestion, Question, QuestionFilter};

fn map_rows<D, T>(
    rows: Vec<D>,
    into_domain: impl Fn(D) -> Result<T, String>,
) -> Result<Vec<T>, RecordStoreError> {
    rows.into_iter()
        .map(|row| into_domain(row).map_err(RecordStoreError::decode))
        .collect()
}

#[async_trait]
impl InterviewRepository for RecordStoreClient {
    async fn list_by_schedule(&self) -> Result<Vec<Interview>, RecordStoreError> {
        let rows: Vec<InterviewRowDto> = self
            .select(INTERVIEWS_TABLE, &interview_list_query())
            .await?;
        map_rows(rows, InterviewRowDto::into_domain)
    }

    async fn insert(&self, interview: &NewInterview) -> Result<Interview, RecordStoreError> {
        let row: InterviewRowDto = self
            .insert_one(INTERVIEWS_TABLE, &InterviewInsertDto::from(interview))
            .await?;
        row.into_domain().map_err(RecordStoreError::decode)
    }
}

#[async_trait]
impl QuestionRepository for RecordStoreClient {
    async fn list(&self, filter: &QuestionFilter) -> Result<Vec<Question>, RecordStoreError> {
        let rows: Vec<QuestionRowDto> = self
            .select(QUESTIONS_TABLE, &question_list_query(filter))
            .await?;
        map_rows(rows, QuestionRowDto::into_domain)
    }

    async fn insert(&self, question: &NewQuestion) -> Result<Question, RecordStoreError> {
        let row: QuestionRowDto = self
            .insert_one(QUESTIONS_TABLE, &QuestionInsertDto::from(question))
            .await?;
        row.into_domain().map_err(RecordStoreError::decode)
    }
}
