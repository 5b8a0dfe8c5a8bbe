use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use crate::modules::accounts::model::AccountResponse;
use crate::modules::cohorts::model::Cohort;

/// A student, bound 1:1 to its login account and many:1 to a cohort.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Student {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub birth_date: NaiveDate,
    pub gender: Option<String>,
    pub cpf: Option<String>,
    pub rg: Option<String>,
    pub marital_status: Option<String>,
    pub phone: Option<String>,
    pub birthplace: Option<String>,
    pub postal_code: Option<String>,
    pub street: Option<String>,
    pub number: Option<String>,
    pub complement: Option<String>,
    pub district: Option<String>,
    pub reference_point: Option<String>,
    pub account_id: i64,
    pub cohort_id: i64,
}

#[derive(Debug, Clone)]
pub struct NewStudent {
    pub name: String,
    pub email: String,
    pub birth_date: NaiveDate,
    pub gender: Option<String>,
    pub cpf: Option<String>,
    pub rg: Option<String>,
    pub marital_status: Option<String>,
    pub phone: Option<String>,
    pub birthplace: Option<String>,
    pub postal_code: Option<String>,
    pub street: Option<String>,
    pub number: Option<String>,
    pub complement: Option<String>,
    pub district: Option<String>,
    pub reference_point: Option<String>,
    pub account_id: i64,
    pub cohort_id: i64,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateStudentDto {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    #[validate(email(message = "email must be valid"))]
    pub email: String,
    #[validate(length(min = 4, message = "password must be at least 4 characters"))]
    pub password: String,
    pub birth_date: NaiveDate,
    pub gender: Option<String>,
    pub cpf: Option<String>,
    pub rg: Option<String>,
    pub marital_status: Option<String>,
    pub phone: Option<String>,
    pub birthplace: Option<String>,
    pub postal_code: Option<String>,
    pub street: Option<String>,
    pub number: Option<String>,
    pub complement: Option<String>,
    pub district: Option<String>,
    pub reference_point: Option<String>,
    pub cohort: i64,
}

/// Update payload. The linked account's login and secret follow the email
/// and password fields, so a student and its account change as one unit.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateStudentDto {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    #[validate(email(message = "email must be valid"))]
    pub email: String,
    #[validate(length(min = 4, message = "password must be at least 4 characters"))]
    pub password: String,
    pub birth_date: NaiveDate,
    pub gender: Option<String>,
    pub cpf: Option<String>,
    pub rg: Option<String>,
    pub marital_status: Option<String>,
    pub phone: Option<String>,
    pub birthplace: Option<String>,
    pub postal_code: Option<String>,
    pub street: Option<String>,
    pub number: Option<String>,
    pub complement: Option<String>,
    pub district: Option<String>,
    pub reference_point: Option<String>,
    pub cohort: i64,
}

/// Creation response: the new student plus its linked account and cohort.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct StudentResponse {
    pub id: i64,
    pub name: String,
    pub birth_date: NaiveDate,
    pub account: AccountResponse,
    pub cohort: Cohort,
}
