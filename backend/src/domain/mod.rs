//! Domain primitives, services and console view state.
//!
//! Purpose: define the record kinds the console manages (interviews and
//! questions), their draft forms and filters, and the services that drive
//! the record store through the ports in [`ports`].
//!
//! Public surface:
//! - Error (alias to `error::Error`): API error response payload.
//! - Interview / Question: rows as the record store returns them.
//! - InterviewDraft / QuestionDraft: form buffers with `validate()`.
//! - QuestionFilter: optional predicates combined by AND.
//! - InterviewService / QuestionBankService: driving port implementations.
//! - console: per-session slice state machines.

mod choice;
pub mod console;
mod dashboard;
mod draft;
pub mod error;
mod interview;
mod interview_service;
pub mod ports;
mod question;
mod question_bank_service;
mod question_filter;
mod record_id;
mod trace_id;

pub use self::choice::{Difficulty, InterviewStatus, ParseChoiceError, SkillDomain};
pub use self::dashboard::{Dashboard, DashboardPanel};
pub use self::draft::DraftError;
pub use self::error::{Error, ErrorCode, ErrorValidationError, TRACE_ID_HEADER};
pub use self::interview::{Interview, InterviewDraft, NewInterview};
pub use self::interview_service::InterviewService;
pub use self::question::{NewQuestion, Question, QuestionDraft};
pub use self::question_bank_service::QuestionBankService;
pub use self::question_filter::QuestionFilter;
pub use self::record_id::{RecordId, RecordIdValidationError};
pub use self::trace_id::TraceId;
