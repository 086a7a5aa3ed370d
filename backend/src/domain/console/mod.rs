//! Console view state.
//!
//! A console session owns one [`ConsoleState`]: the interview slice, the
//! question slice and the question filter set. Each slice is a
//! [`RecordSlice`], an explicit state machine over the displayed list, the
//! draft form and the composer phase. The state never performs I/O; callers
//! run the store round trips and feed the outcomes back in.

mod patch;
mod slice;
#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};

use super::{Interview, InterviewDraft, Question, QuestionDraft, QuestionFilter};

pub use patch::{InterviewDraftPatch, QuestionDraftPatch};
pub use slice::{
    FetchResolution, FetchTicket, Placement, RecordSlice, SlicePhase, SliceStateError,
    SubmitResolution,
};

/// Names one of the console's list slices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SliceKind {
    Interviews,
    Questions,
}

impl SliceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Interviews => "interviews",
            Self::Questions => "questions",
        }
    }
}

/// Interview list ordered by schedule; new rows go to the end.
pub type InterviewSlice = RecordSlice<Interview, InterviewDraft>;

/// Question list ordered newest first; new rows go to the front.
pub type QuestionSlice = RecordSlice<Question, QuestionDraft>;

/// All view state held by one console session.
#[derive(Debug, Clone, PartialEq)]
pub struct ConsoleState {
    pub interviews: InterviewSlice,
    pub questions: QuestionSlice,
    question_filter: QuestionFilter,
}

impl Default for ConsoleState {
    fn default() -> Self {
        Self {
            interviews: RecordSlice::new(Placement::Append),
            questions: RecordSlice::new(Placement::Prepend),
            question_filter: QuestionFilter::default(),
        }
    }
}

impl ConsoleState {
    pub fn question_filter(&self) -> &QuestionFilter {
        &self.question_filter
    }

    /// Replace the question filter set and start the re-fetch it implies.
    ///
    /// Returns the ticket the caller must resolve with the filtered rows.
    pub fn set_question_filter(&mut self, filter: QuestionFilter) -> FetchTicket {
        self.question_filter = filter;
        self.questions.begin_fetch()
    }
}
