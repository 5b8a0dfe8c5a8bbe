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

use super::model::{CreateGradeDto, Grade, ScoreResponse, UpdateGradeDto};
use super::service::GradeService;

/// List all grades
#[utoipa::path(
    get,
    path = "/api/grades",
    responses(
        (status = 200, description = "Grades listed", body = [Grade]),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "No grades recorded", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Grades"
)]
pub async fn list_grades(
    State(state): State<AppState>,
    token: BearerToken,
) -> Result<Json<Vec<Grade>>, AppError> {
    let grades = GradeService::list(&state.store, &state.jwt_config, token.as_str()).await?;
    Ok(Json(grades))
}

/// Fetch a grade by id
#[utoipa::path(
    get,
    path = "/api/grades/{id}",
    params(("id" = i64, Path, description = "Grade ID")),
    responses(
        (status = 200, description = "Grade found", body = Grade),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Grade not found", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Grades"
)]
pub async fn get_grade(
    State(state): State<AppState>,
    token: BearerToken,
    Path(id): Path<i64>,
) -> Result<Json<Grade>, AppError> {
    let grade =
        GradeService::get_by_id(&state.store, &state.jwt_config, id, token.as_str()).await?;
    Ok(Json(grade))
}

/// List the grades recorded for a student
#[utoipa::path(
    get,
    path = "/api/grades/students/{student_id}",
    params(("student_id" = i64, Path, description = "Student ID")),
    responses(
        (status = 200, description = "Grades listed", body = [Grade]),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Student missing or no grades", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Grades"
)]
pub async fn list_grades_by_student(
    State(state): State<AppState>,
    token: BearerToken,
    Path(student_id): Path<i64>,
) -> Result<Json<Vec<Grade>>, AppError> {
    let grades =
        GradeService::list_by_student(&state.store, &state.jwt_config, student_id, token.as_str())
            .await?;
    Ok(Json(grades))
}

/// Compute a student's aggregate score
#[utoipa::path(
    get,
    path = "/api/grades/students/{student_id}/score",
    params(("student_id" = i64, Path, description = "Student ID")),
    responses(
        (status = 200, description = "Mean of the student's grades", body = ScoreResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Student missing or no grades", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Grades"
)]
pub async fn get_student_score(
    State(state): State<AppState>,
    token: BearerToken,
    Path(student_id): Path<i64>,
) -> Result<Json<ScoreResponse>, AppError> {
    let score =
        GradeService::compute_score(&state.store, &state.jwt_config, student_id, token.as_str())
            .await?;
    Ok(Json(ScoreResponse { score }))
}

/// List the grades recorded by a teacher
#[utoipa::path(
    get,
    path = "/api/grades/teachers/{teacher_id}",
    params(("teacher_id" = i64, Path, description = "Teacher ID")),
    responses(
        (status = 200, description = "Grades listed", body = [Grade]),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Teacher missing or no grades", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Grades"
)]
pub async fn list_grades_by_teacher(
    State(state): State<AppState>,
    token: BearerToken,
    Path(teacher_id): Path<i64>,
) -> Result<Json<Vec<Grade>>, AppError> {
    let grades =
        GradeService::list_by_teacher(&state.store, &state.jwt_config, teacher_id, token.as_str())
            .await?;
    Ok(Json(grades))
}

/// Record a grade
#[utoipa::path(
    post,
    path = "/api/grades",
    request_body = CreateGradeDto,
    responses(
        (status = 201, description = "Grade recorded", body = Grade),
        (status = 400, description = "Value is not a decimal", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Student, teacher or subject not found", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Grades"
)]
pub async fn create_grade(
    State(state): State<AppState>,
    token: BearerToken,
    ValidatedJson(dto): ValidatedJson<CreateGradeDto>,
) -> Result<(StatusCode, Json<Grade>), AppError> {
    let grade = GradeService::create(&state.store, &state.jwt_config, dto, token.as_str()).await?;
    Ok((StatusCode::CREATED, Json(grade)))
}

/// Update a grade's value
#[utoipa::path(
    put,
    path = "/api/grades/{id}",
    params(("id" = i64, Path, description = "Grade ID")),
    request_body = UpdateGradeDto,
    responses(
        (status = 200, description = "Grade updated", body = Grade),
        (status = 400, description = "Value is not a decimal", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Grade not found", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Grades"
)]
pub async fn update_grade(
    State(state): State<AppState>,
    token: BearerToken,
    Path(id): Path<i64>,
    ValidatedJson(dto): ValidatedJson<UpdateGradeDto>,
) -> Result<Json<Grade>, AppError> {
    let grade =
        GradeService::update(&state.store, &state.jwt_config, id, dto, token.as_str()).await?;
    Ok(Json(grade))
}

/// Delete a grade
#[utoipa::path(
    delete,
    path = "/api/grades/{id}",
    params(("id" = i64, Path, description = "Grade ID")),
    responses(
        (status = 204, description = "Grade deleted"),
        (status = 401, description = "Admin only", body = ErrorResponse),
        (status = 404, description = "Grade not found", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Grades"
)]
pub async fn delete_grade(
    State(state): State<AppState>,
    token: BearerToken,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    GradeService::delete(&state.store, &state.jwt_config, id, token.as_str()).await?;
    Ok(StatusCode::NO_CONTENT)
}
