use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::middleware::BearerToken;
use crate::modules::auth::controller::ErrorResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::validator::ValidatedJson;

use super::model::{Cohort, CohortDetails, CreateCohortDto, UpdateCohortDto};
use super::service::CohortService;

/// List all cohorts
#[utoipa::path(
    get,
    path = "/api/cohorts",
    responses(
        (status = 200, description = "Cohorts listed", body = [Cohort]),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "No cohorts found", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Cohorts"
)]
pub async fn list_cohorts(
    State(state): State<AppState>,
    token: BearerToken,
) -> Result<Json<Vec<Cohort>>, AppError> {
    let cohorts = CohortService::list(&state.store, &state.jwt_config, token.as_str()).await?;
    Ok(Json(cohorts))
}

/// Fetch a cohort with its enrolled students
#[utoipa::path(
    get,
    path = "/api/cohorts/{id}",
    params(("id" = i64, Path, description = "Cohort ID")),
    responses(
        (status = 200, description = "Cohort found", body = CohortDetails),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Cohort not found", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Cohorts"
)]
pub async fn get_cohort(
    State(state): State<AppState>,
    token: BearerToken,
    Path(id): Path<i64>,
) -> Result<Json<CohortDetails>, AppError> {
    let cohort =
        CohortService::get_by_id(&state.store, &state.jwt_config, id, token.as_str()).await?;
    Ok(Json(cohort))
}

/// Create a cohort
#[utoipa::path(
    post,
    path = "/api/cohorts",
    request_body = CreateCohortDto,
    responses(
        (status = 201, description = "Cohort created", body = Cohort),
        (status = 400, description = "Invalid name or non-professor teacher", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Course or teacher not found", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Cohorts"
)]
pub async fn create_cohort(
    State(state): State<AppState>,
    token: BearerToken,
    ValidatedJson(dto): ValidatedJson<CreateCohortDto>,
) -> Result<(StatusCode, Json<Cohort>), AppError> {
    let cohort =
        CohortService::create(&state.store, &state.jwt_config, dto, token.as_str()).await?;
    Ok((StatusCode::CREATED, Json(cohort)))
}

/// Update a cohort
#[utoipa::path(
    put,
    path = "/api/cohorts/{id}",
    params(("id" = i64, Path, description = "Cohort ID")),
    request_body = UpdateCohortDto,
    responses(
        (status = 200, description = "Cohort updated", body = Cohort),
        (status = 400, description = "Invalid name or non-professor teacher", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Cohort, course or teacher not found", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Cohorts"
)]
pub async fn update_cohort(
    State(state): State<AppState>,
    token: BearerToken,
    Path(id): Path<i64>,
    ValidatedJson(dto): ValidatedJson<UpdateCohortDto>,
) -> Result<Json<Cohort>, AppError> {
    let cohort =
        CohortService::update(&state.store, &state.jwt_config, id, dto, token.as_str()).await?;
    Ok(Json(cohort))
}

/// Delete a cohort
#[utoipa::path(
    delete,
    path = "/api/cohorts/{id}",
    params(("id" = i64, Path, description = "Cohort ID")),
    responses(
        (status = 204, description = "Cohort deleted"),
        (status = 401, description = "Admin only", body = ErrorResponse),
        (status = 404, description = "Cohort not found", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Cohorts"
)]
pub async fn delete_cohort(
    State(state): State<AppState>,
    token: BearerToken,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    CohortService::delete(&state.store, &state.jwt_config, id, token.as_str()).await?;
    Ok(StatusCode::NO_CONTENT)
}
