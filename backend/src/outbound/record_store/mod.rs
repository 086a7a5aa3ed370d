//! PostgREST record store adapter.
//!
//! Implements [`InterviewRepository`](crate::domain::ports::InterviewRepository)
//! and [`QuestionRepository`](crate::domain::ports::QuestionRepository) over
//! the `/rest/v1/{table}` HTTP surface of a PostgREST-compatible store.

mod client;
mod dto;
mod query;
mod repositories;

pub use client::{RecordStoreClient, RecordStoreClientError};
