//! HTTP inbound adapter exposing REST endpoints.

pub mod dashboard;
pub mod error;
pub mod health;
pub mod interviews;
pub mod questions;
pub mod schemas;
pub mod state;
pub mod validation;

pub use error::ApiResult;
