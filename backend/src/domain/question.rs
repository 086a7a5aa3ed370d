//! Question bank entries.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::draft::{DraftError, require_text};
use super::{Difficulty, RecordId, SkillDomain};

/// Question row owned by the record store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    /// Store-assigned identifier.
    pub id: RecordId,
    /// Question text shown to the interviewer.
    pub content: String,
    /// Area the question covers.
    pub domain: SkillDomain,
    /// Free-text technology list.
    pub tech_stack: String,
    /// How hard the question is.
    pub difficulty: Difficulty,
    /// Store-assigned creation time; the bank lists newest first.
    pub created_at: DateTime<Utc>,
}

/// Form buffer for adding a question.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionDraft {
    pub content: String,
    pub domain: SkillDomain,
    pub tech_stack: String,
    pub difficulty: Difficulty,
}

impl QuestionDraft {
    /// Check every field and build the insert payload.
    pub fn validate(&self) -> Result<NewQuestion, DraftError> {
        Ok(NewQuestion {
            content: require_text(&self.content, "content")?,
            domain: self.domain,
            tech_stack: require_text(&self.tech_stack, "techStack")?,
            difficulty: self.difficulty,
        })
    }
}

/// Validated insert payload for the `questions` table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuestion {
    pub content: String,
    pub domain: SkillDomain,
    pub tech_stack: String,
    pub difficulty: Difficulty,
}
