use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// A recorded grade. The value is kept as decimal text exactly as submitted
/// so no precision is lost to binary floating point.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Grade {
    pub id: i64,
    pub student_id: i64,
    pub teacher_id: i64,
    pub subject_id: i64,
    pub value: String,
}

#[derive(Debug, Clone)]
pub struct NewGrade {
    pub student_id: i64,
    pub teacher_id: i64,
    pub subject_id: i64,
    pub value: String,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateGradeDto {
    pub student: i64,
    pub teacher: i64,
    pub subject: i64,
    #[validate(length(min = 1, message = "value must not be empty"))]
    pub value: String,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateGradeDto {
    #[validate(length(min = 1, message = "value must not be empty"))]
    pub value: String,
}

/// Aggregate score for one student: the arithmetic mean of all grade values.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ScoreResponse {
    #[schema(value_type = String, example = "9.0")]
    pub score: Decimal,
}
