//! Question bank HTTP handlers.
//!
//! ```text
//! GET /api/v1/questions?domain=&difficulty=&search=
//! POST /api/v1/questions
//! ```

use actix_web::{HttpResponse, get, post, web};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::{Difficulty, Error, Question, QuestionDraft, QuestionFilter, SkillDomain};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{
    FieldName, parse_choice_or_default, parse_optional_choice,
};

const DOMAIN: FieldName = FieldName::new("domain");
const DIFFICULTY: FieldName = FieldName::new("difficulty");

/// Filter parameters for listing questions. Empty values match everything.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct QuestionListParams {
    /// `frontend`, `backend`, `finance` or `hr`.
    pub domain: Option<String>,
    /// `easy`, `medium` or `hard`.
    pub difficulty: Option<String>,
    /// Case-insensitive substring of the question text.
    pub search: Option<String>,
}

/// Request payload for adding a question.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct QuestionRequest {
    #[schema(example = "Explain ownership in Rust")]
    pub content: Option<String>,
    #[schema(example = "backend")]
    pub domain: Option<String>,
    #[schema(example = "Rust")]
    pub tech_stack: Option<String>,
    #[schema(example = "medium")]
    pub difficulty: Option<String>,
}

/// Response payload for one question.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct QuestionResponse {
    pub id: String,
    pub content: String,
    pub domain: String,
    pub tech_stack: String,
    pub difficulty: String,
    pub created_at: String,
}

impl From<Question> for QuestionResponse {
    fn from(value: Question) -> Self {
        Self {
            id: value.id.to_string(),
            content: value.content,
            domain: value.domain.to_string(),
            tech_stack: value.tech_stack,
            difficulty: value.difficulty.to_string(),
            created_at: value.created_at.to_rfc3339(),
        }
    }
}

pub(crate) fn parse_list_params(params: &QuestionListParams) -> Result<QuestionFilter, Error> {
    Ok(QuestionFilter::default()
        .with_domain(parse_optional_choice::<SkillDomain>(
            params.domain.as_deref(),
            DOMAIN,
        )?)
        .with_difficulty(parse_optional_choice::<Difficulty>(
            params.difficulty.as_deref(),
            DIFFICULTY,
        )?)
        .with_search(params.search.clone().unwrap_or_default()))
}

fn parse_question_request(payload: QuestionRequest) -> Result<QuestionDraft, Error> {
    Ok(QuestionDraft {
        content: payload.content.unwrap_or_default(),
        domain: parse_choice_or_default(payload.domain.as_deref(), DOMAIN)?,
        tech_stack: payload.tech_stack.unwrap_or_default(),
        difficulty: parse_choice_or_default(payload.difficulty.as_deref(), DIFFICULTY)?,
    })
}

/// List questions matching the filters, newest first.
#[utoipa::path(
    get,
    path = "/api/v1/questions",
    params(QuestionListParams),
    responses(
        (status = 200, description = "Matching questions, newest first", body = [QuestionResponse]),
        (status = 400, description = "Invalid filter value", body = ErrorSchema),
        (status = 503, description = "Record store unavailable", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["questions"],
    operation_id = "listQuestions"
)]
#[get("/questions")]
pub async fn list_questions(
    state: web::Data<HttpState>,
    params: web::Query<QuestionListParams>,
) -> ApiResult<web::Json<Vec<QuestionResponse>>> {
    let filter = parse_list_params(&params)?;
    let questions = state.questions_query.list_questions(&filter).await?;
    Ok(web::Json(
        questions.into_iter().map(QuestionResponse::from).collect(),
    ))
}

/// Add one question to the bank.
#[utoipa::path(
    post,
    path = "/api/v1/questions",
    request_body = QuestionRequest,
    responses(
        (status = 201, description = "Stored question", body = QuestionResponse),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 503, description = "Record store unavailable", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["questions"],
    operation_id = "addQuestion"
)]
#[post("/questions")]
pub async fn add_question(
    state: web::Data<HttpState>,
    payload: web::Json<QuestionRequest>,
) -> ApiResult<HttpResponse> {
    let draft = parse_question_request(payload.into_inner())?;
    let question = state.questions.add_question(draft).await?;
    Ok(HttpResponse::Created().json(QuestionResponse::from(question)))
}
