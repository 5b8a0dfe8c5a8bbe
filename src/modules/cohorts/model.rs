use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use crate::modules::students::model::Student;

/// A scheduled class: one teacher, one course, a date window and a weekly
/// schedule string. Enrollment is derived from the students that reference
/// the cohort, never stored here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Cohort {
    pub id: i64,
    pub name: String,
    pub teacher_id: i64,
    pub course_id: i64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub schedule: String,
}

#[derive(Debug, Clone)]
pub struct NewCohort {
    pub name: String,
    pub teacher_id: i64,
    pub course_id: i64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub schedule: String,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateCohortDto {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    pub teacher: i64,
    pub course: i64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub schedule: String,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateCohortDto {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    pub teacher: i64,
    pub course: i64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub schedule: String,
}

/// Detail view of a cohort including its enrolled students.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CohortDetails {
    pub id: i64,
    pub name: String,
    pub teacher_id: i64,
    pub course_id: i64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub schedule: String,
    pub students: Vec<Student>,
}

impl CohortDetails {
    pub fn new(cohort: Cohort, students: Vec<Student>) -> Self {
        Self {
            id: cohort.id,
            name: cohort.name,
            teacher_id: cohort.teacher_id,
            course_id: cohort.course_id,
            start_date: cohort.start_date,
            end_date: cohort.end_date,
            schedule: cohort.schedule,
            students,
        }
    }
}
