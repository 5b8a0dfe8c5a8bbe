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

use super::model::{CreateTeacherDto, Teacher, TeacherResponse, UpdateTeacherDto};
use super::service::TeacherService;

/// List teachers visible to the caller
#[utoipa::path(
    get,
    path = "/api/teachers",
    responses(
        (status = 200, description = "Teachers listed", body = [Teacher]),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "No teachers registered", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Teachers"
)]
pub async fn list_teachers(
    State(state): State<AppState>,
    token: BearerToken,
) -> Result<Json<Vec<Teacher>>, AppError> {
    let teachers = TeacherService::list(&state.store, &state.jwt_config, token.as_str()).await?;
    Ok(Json(teachers))
}

/// Fetch a teacher by id
#[utoipa::path(
    get,
    path = "/api/teachers/{id}",
    params(("id" = i64, Path, description = "Teacher ID")),
    responses(
        (status = 200, description = "Teacher found", body = Teacher),
        (status = 401, description = "Unauthorized or teacher not visible to caller", body = ErrorResponse),
        (status = 404, description = "Teacher not found", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Teachers"
)]
pub async fn get_teacher(
    State(state): State<AppState>,
    token: BearerToken,
    Path(id): Path<i64>,
) -> Result<Json<Teacher>, AppError> {
    let teacher =
        TeacherService::get_by_id(&state.store, &state.jwt_config, id, token.as_str()).await?;
    Ok(Json(teacher))
}

/// Create a teacher and its login account
#[utoipa::path(
    post,
    path = "/api/teachers",
    request_body = CreateTeacherDto,
    responses(
        (status = 201, description = "Teacher created", body = TeacherResponse),
        (status = 400, description = "Invalid or duplicate data", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Teachers"
)]
pub async fn create_teacher(
    State(state): State<AppState>,
    token: BearerToken,
    ValidatedJson(dto): ValidatedJson<CreateTeacherDto>,
) -> Result<(StatusCode, Json<TeacherResponse>), AppError> {
    let teacher =
        TeacherService::create(&state.store, &state.jwt_config, dto, token.as_str()).await?;
    Ok((StatusCode::CREATED, Json(teacher)))
}

/// Update a teacher and its linked account
#[utoipa::path(
    put,
    path = "/api/teachers/{id}",
    params(("id" = i64, Path, description = "Teacher ID")),
    request_body = UpdateTeacherDto,
    responses(
        (status = 200, description = "Teacher updated", body = Teacher),
        (status = 400, description = "Invalid or duplicate data", body = ErrorResponse),
        (status = 401, description = "Unauthorized or teacher not visible to caller", body = ErrorResponse),
        (status = 404, description = "Teacher not found", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Teachers"
)]
pub async fn update_teacher(
    State(state): State<AppState>,
    token: BearerToken,
    Path(id): Path<i64>,
    ValidatedJson(dto): ValidatedJson<UpdateTeacherDto>,
) -> Result<Json<Teacher>, AppError> {
    let teacher =
        TeacherService::update(&state.store, &state.jwt_config, id, dto, token.as_str()).await?;
    Ok(Json(teacher))
}

/// Delete a teacher and its linked account
#[utoipa::path(
    delete,
    path = "/api/teachers/{id}",
    params(("id" = i64, Path, description = "Teacher ID")),
    responses(
        (status = 204, description = "Teacher deleted"),
        (status = 401, description = "Admin only", body = ErrorResponse),
        (status = 404, description = "Teacher not found", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Teachers"
)]
pub async fn delete_teacher(
    State(state): State<AppState>,
    token: BearerToken,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    TeacherService::delete(&state.store, &state.jwt_config, id, token.as_str()).await?;
    Ok(StatusCode::NO_CONTENT)
}
