//! Record list plus create form.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::Error;

/// Where a newly created record is spliced into the displayed list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    Append,
    Prepend,
}

/// Composer phase of a slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SlicePhase {
    /// Composer closed.
    #[default]
    Idle,
    /// Composer open, draft editable.
    Composing,
    /// Insert in flight; the draft is frozen until it resolves.
    Submitting,
}

/// Tag identifying one list fetch.
///
/// Tickets increase monotonically per slice. Only the newest ticket may
/// replace the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FetchTicket(u64);

/// Outcome of resolving a fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchResolution {
    /// The rows replaced the list.
    Applied,
    /// A newer fetch was started; the outcome was dropped.
    Stale,
    /// The fetch failed; the list kept its previous rows.
    Failed,
}

/// Outcome of resolving a submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitResolution {
    /// The record joined the list and the draft was reset.
    Created,
    /// The insert failed; the composer is open again with the draft intact.
    Failed,
}

/// Transition attempted from the wrong phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SliceStateError {
    #[error("composer is not open (phase: {phase:?})")]
    NotComposing { phase: SlicePhase },
    #[error("no submission is in flight (phase: {phase:?})")]
    NotSubmitting { phase: SlicePhase },
}

/// One list slice: displayed records, draft form and composer phase.
///
/// # Examples
/// ```
/// use interview_console::domain::console::{Placement, RecordSlice, SlicePhase};
///
/// let mut slice: RecordSlice<String, String> = RecordSlice::new(Placement::Prepend);
/// slice.open_composer();
/// if let Some(draft) = slice.draft_mut() {
///     draft.push_str("hello");
/// }
/// let draft = slice.begin_submit().expect("composer open");
/// slice.finish_submit(Ok(draft)).expect("submission in flight");
/// assert_eq!(slice.records(), ["hello".to_owned()]);
/// assert_eq!(slice.phase(), SlicePhase::Idle);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RecordSlice<R, D> {
    records: Vec<R>,
    draft: D,
    phase: SlicePhase,
    placement: Placement,
    latest_ticket: u64,
    fetching: bool,
    last_error: Option<Error>,
}

impl<R, D> RecordSlice<R, D>
where
    R: Clone,
    D: Clone + Default,
{
    /// Empty slice with a default draft and the composer closed.
    pub fn new(placement: Placement) -> Self {
        Self {
            records: Vec::new(),
            draft: D::default(),
            phase: SlicePhase::Idle,
            placement,
            latest_ticket: 0,
            fetching: false,
            last_error: None,
        }
    }

    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn draft(&self) -> &D {
        &self.draft
    }

    pub fn phase(&self) -> SlicePhase {
        self.phase
    }

    /// True while the newest fetch has not resolved.
    pub fn is_fetching(&self) -> bool {
        self.fetching
    }

    /// Most recent failure, cleared by the next success.
    pub fn last_error(&self) -> Option<&Error> {
        self.last_error.as_ref()
    }

    /// Open the composer. Does nothing unless the slice is idle.
    pub fn open_composer(&mut self) {
        if self.phase == SlicePhase::Idle {
            self.phase = SlicePhase::Composing;
        }
    }

    /// Close the composer. The draft keeps whatever was typed.
    pub fn cancel_composer(&mut self) {
        if self.phase == SlicePhase::Composing {
            self.phase = SlicePhase::Idle;
        }
    }

    /// Editable draft, available only while composing.
    pub fn draft_mut(&mut self) -> Option<&mut D> {
        match self.phase {
            SlicePhase::Composing => Some(&mut self.draft),
            SlicePhase::Idle | SlicePhase::Submitting => None,
        }
    }

    /// Freeze the draft and hand a copy to the caller for insertion.
    pub fn begin_submit(&mut self) -> Result<D, SliceStateError> {
        if self.phase != SlicePhase::Composing {
            return Err(SliceStateError::NotComposing { phase: self.phase });
        }
        self.phase = SlicePhase::Submitting;
        Ok(self.draft.clone())
    }

    /// Apply the insert outcome.
    pub fn finish_submit(
        &mut self,
        outcome: Result<R, Error>,
    ) -> Result<SubmitResolution, SliceStateError> {
        if self.phase != SlicePhase::Submitting {
            return Err(SliceStateError::NotSubmitting { phase: self.phase });
        }
        match outcome {
            Ok(record) => {
                match self.placement {
                    Placement::Append => self.records.push(record),
                    Placement::Prepend => self.records.insert(0, record),
                }
                self.draft = D::default();
                self.phase = SlicePhase::Idle;
                self.last_error = None;
                Ok(SubmitResolution::Created)
            }
            Err(error) => {
                self.phase = SlicePhase::Composing;
                self.last_error = Some(error);
                Ok(SubmitResolution::Failed)
            }
        }
    }

    /// Start a fetch and return its ticket.
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.latest_ticket += 1;
        self.fetching = true;
        FetchTicket(self.latest_ticket)
    }

    /// Apply a fetch outcome if `ticket` is still the newest one.
    pub fn finish_fetch(
        &mut self,
        ticket: FetchTicket,
        outcome: Result<Vec<R>, Error>,
    ) -> FetchResolution {
        if ticket.0 != self.latest_ticket {
            debug!(
                ticket = ticket.0,
                latest = self.latest_ticket,
                "discarding stale fetch outcome"
            );
            return FetchResolution::Stale;
        }
        self.fetching = false;
        match outcome {
            Ok(records) => {
                self.records = records;
                self.last_error = None;
                FetchResolution::Applied
            }
            Err(error) => {
                self.last_error = Some(error);
                FetchResolution::Failed
            }
        }
    }
}
