//! Row and insert payloads in the store's snake_case column layout.
//!
//! Rows decode into these transport DTOs first, then map into domain records
//! in one pass so a malformed row surfaces as a single decode error.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{
    Difficulty, Interview, InterviewStatus, NewInterview, NewQuestion, Question, RecordId,
    SkillDomain,
};

/// Store ids are serial integers or UUID strings depending on the schema.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(super) enum RowIdDto {
    Number(i64),
    Text(String),
}

impl RowIdDto {
    fn into_record_id(self) -> Result<RecordId, String> {
        let raw = match self {
            Self::Number(value) => value.to_string(),
            Self::Text(value) => value,
        };
        RecordId::new(raw).map_err(|error| error.to_string())
    }
}

#[derive(Debug, Deserialize)]
pub(super) struct InterviewRowDto {
    pub(super) id: RowIdDto,
    pub(super) candidate_name: String,
    pub(super) candidate_email: String,
    pub(super) domain: String,
    pub(super) tech_stack: String,
    pub(super) scheduled_at: String,
    pub(super) status: Option<String>,
    pub(super) created_at: String,
}

impl InterviewRowDto {
    pub(super) fn into_domain(self) -> Result<Interview, String> {
        let status = match self.status.as_deref() {
            Some(raw) => raw.parse::<InterviewStatus>().map_err(|e| e.to_string())?,
            None => InterviewStatus::default(),
        };
        Ok(Interview {
            id: self.id.into_record_id()?,
            candidate_name: self.candidate_name,
            candidate_email: self.candidate_email,
            domain: self
                .domain
                .parse::<SkillDomain>()
                .map_err(|e| e.to_string())?,
            tech_stack: self.tech_stack,
            scheduled_at: parse_timestamp("scheduled_at", &self.scheduled_at)?,
            status,
            created_at: parse_timestamp("created_at", &self.created_at)?,
        })
    }
}

#[derive(Debug, Deserialize)]
pub(super) struct QuestionRowDto {
    pub(super) id: RowIdDto,
    pub(super) content: String,
    pub(super) domain: String,
    pub(super) tech_stack: String,
    pub(super) difficulty: String,
    pub(super) created_at: String,
}

impl QuestionRowDto {
    pub(super) fn into_domain(self) -> Result<Question, String> {
        Ok(Question {
            id: self.id.into_record_id()?,
            content: self.content,
            domain: self
                .domain
                .parse::<SkillDomain>()
                .map_err(|e| e.to_string())?,
            tech_stack: self.tech_stack,
            difficulty: self
                .difficulty
                .parse::<Difficulty>()
                .map_err(|e| e.to_string())?,
            created_at: parse_timestamp("created_at", &self.created_at)?,
        })
    }
}

#[derive(Debug, Serialize)]
pub(super) struct InterviewInsertDto<'a> {
    candidate_name: &'a str,
    candidate_email: &'a str,
    domain: SkillDomain,
    tech_stack: &'a str,
    scheduled_at: DateTime<Utc>,
}

impl<'a> From<&'a NewInterview> for InterviewInsertDto<'a> {
    fn from(value: &'a NewInterview) -> Self {
        Self {
            candidate_name: &value.candidate_name,
            candidate_email: &value.candidate_email,
            domain: value.domain,
            tech_stack: &value.tech_stack,
            scheduled_at: value.scheduled_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub(super) struct QuestionInsertDto<'a> {
    content: &'a str,
    domain: SkillDomain,
    tech_stack: &'a str,
    difficulty: Difficulty,
}

impl<'a> From<&'a NewQuestion> for QuestionInsertDto<'a> {
    fn from(value: &'a NewQuestion) -> Self {
        Self {
            content: &value.content,
            domain: value.domain,
            tech_stack: &value.tech_stack,
            difficulty: value.difficulty,
        }
    }
}

/// Accept `timestamptz` (RFC 3339) and plain `timestamp` columns, the latter
/// read as UTC.
fn parse_timestamp(column: &str, raw: &str) -> Result<DateTime<Utc>, String> {
    if let Ok(value) = DateTime::parse_from_rfc3339(raw) {
        return Ok(value.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .map(|naive| naive.and_utc())
        .map_err(|error| format!("{column} is not a timestamp ({raw}): {error}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn decodes_interview_row_with_numeric_id() {
        let row: InterviewRowDto = serde_json::from_value(json!({
            "id": 12,
            "candidate_name": "Ada Lovelace",
            "candidate_email": "ada@example.com",
            "domain": "backend",
            "tech_stack": "Go, Postgres",
            "scheduled_at": "2025-03-01T10:00:00+00:00",
            "status": "pending",
            "created_at": "2025-02-01T08:30:00.123456+00:00"
        }))
        .expect("row decodes");

        let interview = row.into_domain().expect("row maps");
        assert_eq!(interview.id.as_str(), "12");
        assert_eq!(interview.domain, SkillDomain::Backend);
        assert_eq!(
            interview.scheduled_at,
            Utc.with_ymd_and_hms(2025, 3, 1, 10, 0, 0).unwrap()
        );
    }

    #[test]
    fn missing_status_defaults_to_pending() {
        let row: InterviewRowDto = serde_json::from_value(json!({
            "id": "a1",
            "candidate_name": "Ada",
            "candidate_email": "ada@example.com",
            "domain": "hr",
            "tech_stack": "People",
            "scheduled_at": "2025-03-01T10:00:00",
            "status": null,
            "created_at": "2025-02-01T08:30:00"
        }))
        .expect("row decodes");
        assert_eq!(
            row.into_domain().expect("row maps").status,
            InterviewStatus::Pending
        );
    }

    #[test]
    fn unknown_difficulty_is_a_decode_failure() {
        let row: QuestionRowDto = serde_json::from_value(json!({
            "id": "q1",
            "content": "Explain Raft",
            "domain": "backend",
            "tech_stack": "Distributed",
            "difficulty": "legendary",
            "created_at": "2025-02-01T08:30:00Z"
        }))
        .expect("row decodes");
        let error = row.into_domain().expect_err("unknown difficulty");
        assert!(error.contains("legendary"));
    }

    #[test]
    fn insert_payload_uses_store_column_names() {
        let new_question = NewQuestion {
            content: "What is Send?".to_owned(),
            domain: SkillDomain::Backend,
            tech_stack: "Rust".to_owned(),
            difficulty: Difficulty::Easy,
        };
        let value = serde_json::to_value(QuestionInsertDto::from(&new_question))
            .expect("payload serialises");
        assert_eq!(
            value,
            json!({
                "content": "What is Send?",
                "domain": "backend",
                "tech_stack": "Rust",
                "difficulty": "easy"
            })
        );
    }
}
