//! OpenAPI documentation configuration.
//!
//! This module defines the [`ApiDoc`] struct which generates the OpenAPI
//! specification for the REST API. It registers:
//!
//! - **Paths**: the interview, question bank, dashboard and health endpoints
//! - **Schemas**: request and response DTOs plus the domain error wrappers
//!   ([`ErrorSchema`], [`ErrorCodeSchema`]) that keep domain types free of
//!   utoipa derives
//!
//! The WebSocket console session at `/ws` is not part of the document.
//! The generated specification is used by Swagger UI (debug builds) and
//! exported via `cargo run --bin openapi-dump` for external tooling.

use crate::inbound::http::dashboard::{DashboardPanelResponse, DashboardResponse};
use crate::inbound::http::interviews::{InterviewRequest, InterviewResponse};
use crate::inbound::http::questions::{QuestionRequest, QuestionResponse};
use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema};
use utoipa::OpenApi;

/// OpenAPI document for the REST API.
/// Swagger UI is enabled in debug builds only and used by tooling.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Interview console API",
        description = "HTTP interface for scheduling interviews, curating the question bank and health probes."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::interviews::list_interviews,
        crate::inbound::http::interviews::schedule_interview,
        crate::inbound::http::questions::list_questions,
        crate::inbound::http::questions::add_question,
        crate::inbound::http::dashboard::get_dashboard,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        InterviewRequest,
        InterviewResponse,
        QuestionRequest,
        QuestionResponse,
        DashboardPanelResponse,
        DashboardResponse,
        ErrorSchema,
        ErrorCodeSchema
    )),
    tags(
        (name = "interviews", description = "Interview scheduling"),
        (name = "questions", description = "Question bank curation"),
        (name = "dashboard", description = "Landing page panels"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
