//! Interview HTTP handlers.
//!
//! ```text
//! GET /api/v1/interviews
//! POST /api/v1/interviews
//! ```

use actix_web::{HttpResponse, get, post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Error, Interview, InterviewDraft, SkillDomain};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, parse_choice_or_default};

/// Request payload for scheduling an interview.
///
/// Text fields that are absent are treated as empty and rejected by the
/// draft checks; an absent `domain` falls back to `frontend`.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InterviewRequest {
    #[schema(example = "Ada Lovelace")]
    pub candidate_name: Option<String>,
    #[schema(example = "ada@example.com")]
    pub candidate_email: Option<String>,
    #[schema(example = "backend")]
    pub domain: Option<String>,
    #[schema(example = "Go, Postgres")]
    pub tech_stack: Option<String>,
    /// `YYYY-MM-DDTHH:MM` (read as UTC) or an RFC 3339 timestamp.
    #[schema(example = "2025-03-01T10:00")]
    pub scheduled_at: Option<String>,
}

/// Response payload for one interview.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InterviewResponse {
    pub id: String,
    pub candidate_name: String,
    pub candidate_email: String,
    pub domain: String,
    pub tech_stack: String,
    pub scheduled_at: String,
    pub status: String,
    pub created_at: String,
}

impl From<Interview> for InterviewResponse {
    fn from(value: Interview) -> Self {
        Self {
            id: value.id.to_string(),
            candidate_name: value.candidate_name,
            candidate_email: value.candidate_email,
            domain: value.domain.to_string(),
            tech_stack: value.tech_stack,
            scheduled_at: value.scheduled_at.to_rfc3339(),
            status: value.status.to_string(),
            created_at: value.created_at.to_rfc3339(),
        }
    }
}

fn parse_interview_request(payload: InterviewRequest) -> Result<InterviewDraft, Error> {
    Ok(InterviewDraft {
        candidate_name: payload.candidate_name.unwrap_or_default(),
        candidate_email: payload.candidate_email.unwrap_or_default(),
        domain: parse_choice_or_default::<SkillDomain>(
            payload.domain.as_deref(),
            FieldName::new("domain"),
        )?,
        tech_stack: payload.tech_stack.unwrap_or_default(),
        scheduled_at: payload.scheduled_at.unwrap_or_default(),
    })
}

/// List every interview, earliest scheduled first.
#[utoipa::path(
    get,
    path = "/api/v1/interviews",
    responses(
        (status = 200, description = "Interviews ordered by schedule", body = [InterviewResponse]),
        (status = 503, description = "Record store unavailable", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["interviews"],
    operation_id = "listInterviews"
)]
#[get("/interviews")]
pub async fn list_interviews(
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<Vec<InterviewResponse>>> {
    let interviews = state.interviews_query.list_interviews().await?;
    Ok(web::Json(
        interviews.into_iter().map(InterviewResponse::from).collect(),
    ))
}

/// Schedule one interview.
#[utoipa::path(
    post,
    path = "/api/v1/interviews",
    request_body = InterviewRequest,
    responses(
        (status = 201, description = "Stored interview", body = InterviewResponse),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 503, description = "Record store unavailable", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["interviews"],
    operation_id = "scheduleInterview"
)]
#[post("/interviews")]
pub async fn schedule_interview(
    state: web::Data<HttpState>,
    payload: web::Json<InterviewRequest>,
) -> ApiResult<HttpResponse> {
    let draft = parse_interview_request(payload.into_inner())?;
    let interview = state.interviews.schedule_interview(draft).await?;
    Ok(HttpResponse::Created().json(InterviewResponse::from(interview)))
}
