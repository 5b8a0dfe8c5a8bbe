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

use super::model::{Course, CreateCourseDto, UpdateCourseDto};
use super::service::CourseService;

/// List all courses
#[utoipa::path(
    get,
    path = "/api/courses",
    responses(
        (status = 200, description = "Courses listed", body = [Course]),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "No courses found", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Courses"
)]
pub async fn list_courses(
    State(state): State<AppState>,
    token: BearerToken,
) -> Result<Json<Vec<Course>>, AppError> {
    let courses = CourseService::list(&state.store, &state.jwt_config, token.as_str()).await?;
    Ok(Json(courses))
}

/// Fetch a course by id
#[utoipa::path(
    get,
    path = "/api/courses/{id}",
    params(("id" = i64, Path, description = "Course ID")),
    responses(
        (status = 200, description = "Course found", body = Course),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Course not found", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Courses"
)]
pub async fn get_course(
    State(state): State<AppState>,
    token: BearerToken,
    Path(id): Path<i64>,
) -> Result<Json<Course>, AppError> {
    let course =
        CourseService::get_by_id(&state.store, &state.jwt_config, id, token.as_str()).await?;
    Ok(Json(course))
}

/// List the courses a student is enrolled in
#[utoipa::path(
    get,
    path = "/api/courses/students/{student_id}",
    params(("student_id" = i64, Path, description = "Student ID")),
    responses(
        (status = 200, description = "Courses listed", body = [Course]),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Student or course not found", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Courses"
)]
pub async fn list_courses_by_student(
    State(state): State<AppState>,
    token: BearerToken,
    Path(student_id): Path<i64>,
) -> Result<Json<Vec<Course>>, AppError> {
    let courses =
        CourseService::list_by_student(&state.store, &state.jwt_config, student_id, token.as_str())
            .await?;
    Ok(Json(courses))
}

/// Create a course
#[utoipa::path(
    post,
    path = "/api/courses",
    request_body = CreateCourseDto,
    responses(
        (status = 201, description = "Course created", body = Course),
        (status = 400, description = "Blank or duplicate name", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Courses"
)]
pub async fn create_course(
    State(state): State<AppState>,
    token: BearerToken,
    ValidatedJson(dto): ValidatedJson<CreateCourseDto>,
) -> Result<(StatusCode, Json<Course>), AppError> {
    let course =
        CourseService::create(&state.store, &state.jwt_config, dto, token.as_str()).await?;
    Ok((StatusCode::CREATED, Json(course)))
}

/// Update a course
#[utoipa::path(
    put,
    path = "/api/courses/{id}",
    params(("id" = i64, Path, description = "Course ID")),
    request_body = UpdateCourseDto,
    responses(
        (status = 200, description = "Course updated", body = Course),
        (status = 400, description = "Blank or duplicate name", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Course not found", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Courses"
)]
pub async fn update_course(
    State(state): State<AppState>,
    token: BearerToken,
    Path(id): Path<i64>,
    ValidatedJson(dto): ValidatedJson<UpdateCourseDto>,
) -> Result<Json<Course>, AppError> {
    let course =
        CourseService::update(&state.store, &state.jwt_config, id, dto, token.as_str()).await?;
    Ok(Json(course))
}

/// Delete a course
#[utoipa::path(
    delete,
    path = "/api/courses/{id}",
    params(("id" = i64, Path, description = "Course ID")),
    responses(
        (status = 204, description = "Course deleted"),
        (status = 401, description = "Admin only", body = ErrorResponse),
        (status = 404, description = "Course not found", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Courses"
)]
pub async fn delete_course(
    State(state): State<AppState>,
    token: BearerToken,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    CourseService::delete(&state.store, &state.jwt_config, id, token.as_str()).await?;
    Ok(StatusCode::NO_CONTENT)
}
