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

use super::model::{CreateSubjectDto, Subject, UpdateSubjectDto};
use super::service::SubjectService;

/// List all subjects
#[utoipa::path(
    get,
    path = "/api/subjects",
    responses(
        (status = 200, description = "Subjects listed", body = [Subject]),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "No subjects found", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Subjects"
)]
pub async fn list_subjects(
    State(state): State<AppState>,
    token: BearerToken,
) -> Result<Json<Vec<Subject>>, AppError> {
    let subjects = SubjectService::list(&state.store, &state.jwt_config, token.as_str()).await?;
    Ok(Json(subjects))
}

/// Fetch a subject by id
#[utoipa::path(
    get,
    path = "/api/subjects/{id}",
    params(("id" = i64, Path, description = "Subject ID")),
    responses(
        (status = 200, description = "Subject found", body = Subject),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Subject not found", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Subjects"
)]
pub async fn get_subject(
    State(state): State<AppState>,
    token: BearerToken,
    Path(id): Path<i64>,
) -> Result<Json<Subject>, AppError> {
    let subject =
        SubjectService::get_by_id(&state.store, &state.jwt_config, id, token.as_str()).await?;
    Ok(Json(subject))
}

/// List the subjects attached to a course
#[utoipa::path(
    get,
    path = "/api/subjects/courses/{course_id}",
    params(("course_id" = i64, Path, description = "Course ID")),
    responses(
        (status = 200, description = "Subjects listed", body = [Subject]),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Course missing or no subjects", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Subjects"
)]
pub async fn list_subjects_by_course(
    State(state): State<AppState>,
    token: BearerToken,
    Path(course_id): Path<i64>,
) -> Result<Json<Vec<Subject>>, AppError> {
    let subjects =
        SubjectService::list_by_course(&state.store, &state.jwt_config, course_id, token.as_str())
            .await?;
    Ok(Json(subjects))
}

/// Create a subject
#[utoipa::path(
    post,
    path = "/api/subjects",
    request_body = CreateSubjectDto,
    responses(
        (status = 201, description = "Subject created", body = Subject),
        (status = 400, description = "Blank or duplicate name", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Course not found", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Subjects"
)]
pub async fn create_subject(
    State(state): State<AppState>,
    token: BearerToken,
    ValidatedJson(dto): ValidatedJson<CreateSubjectDto>,
) -> Result<(StatusCode, Json<Subject>), AppError> {
    let subject =
        SubjectService::create(&state.store, &state.jwt_config, dto, token.as_str()).await?;
    Ok((StatusCode::CREATED, Json(subject)))
}

/// Update a subject
#[utoipa::path(
    put,
    path = "/api/subjects/{id}",
    params(("id" = i64, Path, description = "Subject ID")),
    request_body = UpdateSubjectDto,
    responses(
        (status = 200, description = "Subject updated", body = Subject),
        (status = 400, description = "Blank or duplicate name", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Subject or course not found", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Subjects"
)]
pub async fn update_subject(
    State(state): State<AppState>,
    token: BearerToken,
    Path(id): Path<i64>,
    ValidatedJson(dto): ValidatedJson<UpdateSubjectDto>,
) -> Result<Json<Subject>, AppError> {
    let subject =
        SubjectService::update(&state.store, &state.jwt_config, id, dto, token.as_str()).await?;
    Ok(Json(subject))
}

/// Delete a subject
#[utoipa::path(
    delete,
    path = "/api/subjects/{id}",
    params(("id" = i64, Path, description = "Subject ID")),
    responses(
        (status = 204, description = "Subject deleted"),
        (status = 401, description = "Admin only", body = ErrorResponse),
        (status = 404, description = "Subject not found", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Subjects"
)]
pub async fn delete_subject(
    State(state): State<AppState>,
    token: BearerToken,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    SubjectService::delete(&state.store, &state.jwt_config, id, token.as_str()).await?;
    Ok(StatusCode::NO_CONTENT)
}
