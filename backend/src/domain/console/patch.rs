//! Partial draft edits.
//!
//! The browser sends one message per input change, carrying only the
//! fields that changed. Absent fields leave the draft untouched.

use serde::{Deserialize, Serialize};

use crate::domain::{Difficulty, InterviewDraft, QuestionDraft, SkillDomain};

/// Changed fields of an [`InterviewDraft`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterviewDraftPatch {
    pub candidate_name: Option<String>,
    pub candidate_email: Option<String>,
    pub domain: Option<SkillDomain>,
    pub tech_stack: Option<String>,
    pub scheduled_at: Option<String>,
}

impl InterviewDraftPatch {
    pub fn apply(self, draft: &mut InterviewDraft) {
        if let Some(value) = self.candidate_name {
            draft.candidate_name = value;
        }
        if let Some(value) = self.candidate_email {
            draft.candidate_email = value;
        }
        if let Some(value) = self.domain {
            draft.domain = value;
        }
        if let Some(value) = self.tech_stack {
            draft.tech_stack = value;
        }
        if let Some(value) = self.scheduled_at {
            draft.scheduled_at = value;
        }
    }
}

/// Changed fields of a [`QuestionDraft`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionDraftPatch {
    pub content: Option<String>,
    pub domain: Option<SkillDomain>,
    pub tech_stack: Option<String>,
    pub difficulty: Option<Difficulty>,
}

impl QuestionDraftPatch {
    pub fn apply(self, draft: &mut QuestionDraft) {
        if let Some(value) = self.content {
            draft.content = value;
        }
        if let Some(value) = self.domain {
            draft.domain = value;
        }
        if let Some(value) = self.tech_stack {
            draft.tech_stack = value;
        }
        if let Some(value) = self.difficulty {
            draft.difficulty = value;
        }
    }
}
