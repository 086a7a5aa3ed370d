//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driving ports (`*Query`, `*Command`) are what the HTTP handlers and the
//! console session call. Driven ports (`*Repository`) are what the record
//! store adapters implement.

mod macros;
pub(crate) use macros::define_port_error;

mod interview_repository;
mod interviews_command;
mod interviews_query;
mod question_bank_command;
mod question_bank_query;
mod question_repository;
mod record_store_error;

#[cfg(test)]
pub use interview_repository::MockInterviewRepository;
pub use interview_repository::InterviewRepository;
#[cfg(test)]
pub use interviews_command::MockInterviewsCommand;
pub use interviews_command::{FixtureInterviewsCommand, InterviewsCommand};
#[cfg(test)]
pub use interviews_query::MockInterviewsQuery;
pub use interviews_query::{FixtureInterviewsQuery, InterviewsQuery};
#[cfg(test)]
pub use question_bank_command::MockQuestionBankCommand;
pub use question_bank_command::{FixtureQuestionBankCommand, QuestionBankCommand};
#[cfg(test)]
pub use question_bank_query::MockQuestionBankQuery;
pub use question_bank_query::{FixtureQuestionBankQuery, QuestionBankQuery};
#[cfg(test)]
pub use question_repository::MockQuestionRepository;
pub use question_repository::QuestionRepository;
pub use record_store_error::RecordStoreError;
