//! Interview console backend.
//!
//! An admin console for scheduling interviews and curating a question bank on
//! top of a PostgREST-style record store. The crate follows a hexagonal
//! layout: [`domain`] holds types, services and ports, [`inbound`] the HTTP
//! and WebSocket adapters, [`outbound`] the record store adapters.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod settings;
#[doc(hidden)]
pub mod test_support;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::Trace;
