use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// A subject, optionally attached to a course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Subject {
    pub id: i64,
    pub name: String,
    pub course_id: Option<i64>,
}

#[derive(Debug, Clone)]
pub struct NewSubject {
    pub name: String,
    pub course_id: Option<i64>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateSubjectDto {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    /// Owning course id, if any.
    pub course: Option<i64>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateSubjectDto {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    pub course: Option<i64>,
}
