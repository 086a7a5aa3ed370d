//! Wire-level message definitions for the console session.
//!
//! Every message is a JSON object with a `type` tag. Clients send
//! [`ClientMessage`]; the server answers with [`ServerMessage`] snapshots of
//! the slice that changed.

use serde::{Deserialize, Serialize};

use crate::domain::console::{
    InterviewDraftPatch, InterviewSlice, QuestionDraftPatch, QuestionSlice, RecordSlice,
    SliceKind, SlicePhase,
};
use crate::domain::{Error, InterviewDraft, QuestionDraft, QuestionFilter};
use crate::inbound::http::error::redact_if_internal;
use crate::inbound::http::interviews::InterviewResponse;
use crate::inbound::http::questions::QuestionResponse;

/// Inbound request payload provided by the client.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ClientMessage {
    /// Load the slice's list.
    Mount { slice: SliceKind },
    OpenComposer { slice: SliceKind },
    CancelComposer { slice: SliceKind },
    EditInterviewDraft(InterviewDraftPatch),
    EditQuestionDraft(QuestionDraftPatch),
    /// Validate the open draft and insert it.
    Submit { slice: SliceKind },
    /// Replace the question filter set. Empty or absent values clear a
    /// predicate.
    SetQuestionFilter {
        #[serde(default)]
        domain: Option<String>,
        #[serde(default)]
        difficulty: Option<String>,
        #[serde(default)]
        search: Option<String>,
    },
}

/// Snapshot of one slice as the browser renders it.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SliceView<R, D> {
    pub records: Vec<R>,
    pub phase: SlicePhase,
    pub draft: D,
    pub fetching: bool,
    pub last_error: Option<Error>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<QuestionFilter>,
}

impl<R, D> SliceView<R, D> {
    fn from_slice<S>(slice: &RecordSlice<S, D>, filter: Option<QuestionFilter>) -> Self
    where
        S: Clone + Into<R>,
        D: Clone + Default,
    {
        Self {
            records: slice.records().iter().cloned().map(Into::into).collect(),
            phase: slice.phase(),
            draft: slice.draft().clone(),
            fetching: slice.is_fetching(),
            last_error: slice.last_error().map(redact_if_internal),
            filter,
        }
    }
}

/// Outbound payload sent to the client.
#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ServerMessage {
    InterviewsView(SliceView<InterviewResponse, InterviewDraft>),
    QuestionsView(SliceView<QuestionResponse, QuestionDraft>),
    /// The message could not be applied in the current state.
    Rejected { error: Error },
}

impl ServerMessage {
    pub(super) fn interviews(slice: &InterviewSlice) -> Self {
        Self::InterviewsView(SliceView::from_slice(slice, None))
    }

    pub(super) fn questions(slice: &QuestionSlice, filter: &QuestionFilter) -> Self {
        Self::QuestionsView(SliceView::from_slice(slice, Some(filter.clone())))
    }

    pub(super) fn rejected(error: &Error) -> Self {
        Self::Rejected {
            error: redact_if_internal(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::console::ConsoleState;
    use crate::domain::{Difficulty, SkillDomain};
    use serde_json::{Value, json};

    #[test]
    fn decodes_partial_draft_edit() {
        let message: ClientMessage = serde_json::from_value(json!({
            "type": "editInterviewDraft",
            "candidateName": "Ada"
        }))
        .expect("message decodes");
        assert_eq!(
            message,
            ClientMessage::EditInterviewDraft(InterviewDraftPatch {
                candidate_name: Some("Ada".to_owned()),
                ..InterviewDraftPatch::default()
            })
        );
    }

    #[test]
    fn decodes_filter_with_missing_fields() {
        let message: ClientMessage = serde_json::from_value(json!({
            "type": "setQuestionFilter",
            "difficulty": "easy"
        }))
        .expect("message decodes");
        assert_eq!(
            message,
            ClientMessage::SetQuestionFilter {
                domain: None,
                difficulty: Some("easy".to_owned()),
                search: None,
            }
        );
    }

    #[test]
    fn rejects_unknown_slice() {
        let result = serde_json::from_value::<ClientMessage>(json!({
            "type": "mount",
            "slice": "answers"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn questions_view_carries_filter_and_defaults() {
        let state = ConsoleState::default();
        let filter = QuestionFilter::default().with_domain(Some(SkillDomain::Hr));
        let value = serde_json::to_value(ServerMessage::questions(&state.questions, &filter))
            .expect("view serialises");

        assert_eq!(value["type"], "questionsView");
        assert_eq!(value["phase"], "idle");
        assert_eq!(value["draft"]["difficulty"], Difficulty::Medium.as_str());
        assert_eq!(value["filter"]["domain"], "hr");
        assert_eq!(value["lastError"], Value::Null);
    }

    #[test]
    fn interviews_view_omits_filter() {
        let state = ConsoleState::default();
        let value = serde_json::to_value(ServerMessage::interviews(&state.interviews))
            .expect("view serialises");
        assert_eq!(value["type"], "interviewsView");
        assert!(value.get("filter").is_none());
        assert_eq!(value["draft"]["candidateName"], "");
    }

    #[test]
    fn rejected_redacts_internal_errors() {
        let value = serde_json::to_value(ServerMessage::rejected(&Error::internal(
            "decode failed: column xyz",
        )))
        .expect("rejection serialises");
        assert_eq!(value["type"], "rejected");
        assert_eq!(value["error"]["message"], "Internal server error");
    }
}
