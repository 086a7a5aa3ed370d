//! Scheduled interviews.
//!
//! [`Interview`] is the row as the record store returns it. [`InterviewDraft`]
//! is the console's form buffer; it only becomes a [`NewInterview`] insert
//! payload once every field passes the form checks.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::draft::{DraftError, parse_schedule, require_email, require_text};
use super::{InterviewStatus, RecordId, SkillDomain};

/// Interview row owned by the record store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Interview {
    /// Store-assigned identifier.
    pub id: RecordId,
    /// Candidate's full name.
    pub candidate_name: String,
    /// Candidate's email address.
    pub candidate_email: String,
    /// Area the interview covers.
    pub domain: SkillDomain,
    /// Free-text technology list, e.g. `"Go, Postgres"`.
    pub tech_stack: String,
    /// When the interview takes place.
    pub scheduled_at: DateTime<Utc>,
    /// Store-assigned status; `pending` for new rows.
    pub status: InterviewStatus,
    /// Store-assigned creation time.
    pub created_at: DateTime<Utc>,
}

/// Form buffer for scheduling an interview.
///
/// `scheduled_at` keeps the raw text typed into the date-time input so a
/// failed submission hands the user back exactly what they entered.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterviewDraft {
    pub candidate_name: String,
    pub candidate_email: String,
    pub domain: SkillDomain,
    pub tech_stack: String,
    pub scheduled_at: String,
}

impl InterviewDraft {
    /// Check every field and build the insert payload.
    ///
    /// # Examples
    /// ```
    /// use interview_console::domain::{InterviewDraft, SkillDomain};
    ///
    /// let draft = InterviewDraft {
    ///     candidate_name: "Ada Lovelace".into(),
    ///     candidate_email: "ada@example.com".into(),
    ///     domain: SkillDomain::Backend,
    ///     tech_stack: "Go, Postgres".into(),
    ///     scheduled_at: "2025-03-01T10:00".into(),
    /// };
    /// let new_interview = draft.validate().expect("complete draft");
    /// assert_eq!(new_interview.candidate_name, "Ada Lovelace");
    /// ```
    pub fn validate(&self) -> Result<NewInterview, DraftError> {
        Ok(NewInterview {
            candidate_name: require_text(&self.candidate_name, "candidateName")?,
            candidate_email: require_email(&self.candidate_email, "candidateEmail")?,
            domain: self.domain,
            tech_stack: require_text(&self.tech_stack, "techStack")?,
            scheduled_at: parse_schedule(&self.scheduled_at, "scheduledAt")?,
        })
    }
}

/// Validated insert payload for the `interviews` table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewInterview {
    pub candidate_name: String,
    pub candidate_email: String,
    pub domain: SkillDomain,
    pub tech_stack: String,
    pub scheduled_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn complete_draft() -> InterviewDraft {
        InterviewDraft {
            candidate_name: "Ada Lovelace".to_owned(),
            candidate_email: "ada@example.com".to_owned(),
            domain: SkillDomain::Backend,
            tech_stack: "Go, Postgres".to_owned(),
            scheduled_at: "2025-03-01T10:00".to_owned(),
        }
    }

    #[rstest]
    fn default_draft_matches_empty_form() {
        let draft = InterviewDraft::default();
        assert_eq!(draft.domain, SkillDomain::Frontend);
        assert!(draft.candidate_name.is_empty());
        assert!(draft.scheduled_at.is_empty());
    }

    #[rstest]
    fn complete_draft_echoes_fields(complete_draft: InterviewDraft) {
        let new_interview = complete_draft.validate().expect("valid draft");
        assert_eq!(new_interview.candidate_email, "ada@example.com");
        assert_eq!(new_interview.domain, SkillDomain::Backend);
        assert_eq!(new_interview.tech_stack, "Go, Postgres");
        assert_eq!(
            new_interview.scheduled_at.to_rfc3339(),
            "2025-03-01T10:00:00+00:00"
        );
    }

    #[rstest]
    #[case::name(|d: &mut InterviewDraft| d.candidate_name.clear(), "candidateName")]
    #[case::email(|d: &mut InterviewDraft| d.candidate_email.clear(), "candidateEmail")]
    #[case::stack(|d: &mut InterviewDraft| d.tech_stack = " ".to_owned(), "techStack")]
    #[case::schedule(|d: &mut InterviewDraft| d.scheduled_at.clear(), "scheduledAt")]
    fn every_field_is_required(
        complete_draft: InterviewDraft,
        #[case] blank: fn(&mut InterviewDraft),
        #[case] field: &str,
    ) {
        let mut draft = complete_draft;
        blank(&mut draft);
        let err = draft.validate().expect_err("blank field");
        assert_eq!(err.field(), field);
    }
}
