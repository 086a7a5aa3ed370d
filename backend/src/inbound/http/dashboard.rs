//! Dashboard HTTP handler.
//!
//! ```text
//! GET /api/v1/dashboard
//! ```

use actix_web::{get, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Dashboard, DashboardPanel};

/// One titled panel of dashboard copy.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardPanelResponse {
    #[schema(example = "Quick Stats")]
    pub title: String,
    pub lines: Vec<String>,
}

/// Dashboard payload.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardResponse {
    pub panels: Vec<DashboardPanelResponse>,
}

impl From<DashboardPanel> for DashboardPanelResponse {
    fn from(value: DashboardPanel) -> Self {
        Self {
            title: value.title.to_owned(),
            lines: value.lines.into_iter().map(str::to_owned).collect(),
        }
    }
}

impl From<Dashboard> for DashboardResponse {
    fn from(value: Dashboard) -> Self {
        Self {
            panels: value
                .panels
                .into_iter()
                .map(DashboardPanelResponse::from)
                .collect(),
        }
    }
}

/// Static dashboard placeholder.
#[utoipa::path(
    get,
    path = "/api/v1/dashboard",
    responses((status = 200, description = "Dashboard panels", body = DashboardResponse)),
    tags = ["dashboard"],
    operation_id = "getDashboard"
)]
#[get("/dashboard")]
pub async fn get_dashboard() -> web::Json<DashboardResponse> {
    web::Json(DashboardResponse::from(Dashboard::placeholder()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{App, test};

    #[actix_web::test]
    async fn dashboard_lists_three_panels() {
        let app = test::init_service(
            App::new().service(web::scope("/api/v1").service(get_dashboard)),
        )
        .await;
        let req = test::TestRequest::get().uri("/api/v1/dashboard").to_request();
        let body: DashboardResponse = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body.panels.len(), 3);
        assert_eq!(body.panels[2].lines[1], "Questions in Bank: 0");
    }
}
