use axum::{Json, extract::State};

use crate::middleware::BearerToken;
use crate::modules::auth::controller::ErrorResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;

use super::model::DashboardResponse;
use super::service::DashboardService;

/// Entity counts for the admin dashboard
#[utoipa::path(
    get,
    path = "/api/dashboard",
    responses(
        (status = 200, description = "Counts", body = DashboardResponse),
        (status = 401, description = "Admin only", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Dashboard"
)]
pub async fn get_dashboard(
    State(state): State<AppState>,
    token: BearerToken,
) -> Result<Json<DashboardResponse>, AppError> {
    let summary =
        DashboardService::summary(&state.store, &state.jwt_config, token.as_str()).await?;
    Ok(Json(summary))
}
