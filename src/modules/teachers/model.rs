use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use crate::modules::accounts::model::AccountResponse;

/// A teacher, bound 1:1 to its login account.
///
/// `subjects` is a plain list of subject names, deliberately not a relation
/// to the subject catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Teacher {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub birth_date: NaiveDate,
    pub gender: String,
    pub cpf: String,
    pub rg: String,
    pub marital_status: String,
    pub phone: String,
    pub birthplace: String,
    pub postal_code: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub street: Option<String>,
    pub number: Option<String>,
    pub complement: Option<String>,
    pub district: Option<String>,
    pub reference_point: Option<String>,
    pub subjects: Vec<String>,
    pub registered_on: NaiveDate,
    pub account_id: i64,
}

#[derive(Debug, Clone)]
pub struct NewTeacher {
    pub name: String,
    pub email: String,
    pub birth_date: NaiveDate,
    pub gender: String,
    pub cpf: String,
    pub rg: String,
    pub marital_status: String,
    pub phone: String,
    pub birthplace: String,
    pub postal_code: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub street: Option<String>,
    pub number: Option<String>,
    pub complement: Option<String>,
    pub district: Option<String>,
    pub reference_point: Option<String>,
    pub subjects: Vec<String>,
    pub registered_on: NaiveDate,
    pub account_id: i64,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateTeacherDto {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    #[validate(email(message = "email must be valid"))]
    pub email: String,
    #[validate(length(min = 4, message = "password must be at least 4 characters"))]
    pub password: String,
    pub birth_date: NaiveDate,
    pub gender: String,
    pub cpf: String,
    pub rg: String,
    pub marital_status: String,
    pub phone: String,
    pub birthplace: String,
    pub postal_code: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub street: Option<String>,
    pub number: Option<String>,
    pub complement: Option<String>,
    pub district: Option<String>,
    pub reference_point: Option<String>,
    #[serde(default)]
    pub subjects: Vec<String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateTeacherDto {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    #[validate(email(message = "email must be valid"))]
    pub email: String,
    #[validate(length(min = 4, message = "password must be at least 4 characters"))]
    pub password: String,
    pub birth_date: NaiveDate,
    pub gender: String,
    pub cpf: String,
    pub rg: String,
    pub marital_status: String,
    pub phone: String,
    pub birthplace: String,
    pub postal_code: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub street: Option<String>,
    pub number: Option<String>,
    pub complement: Option<String>,
    pub district: Option<String>,
    pub reference_point: Option<String>,
    #[serde(default)]
    pub subjects: Vec<String>,
}

/// Creation response: every stored field plus the linked account.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TeacherResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub birth_date: NaiveDate,
    pub gender: String,
    pub cpf: String,
    pub rg: String,
    pub marital_status: String,
    pub phone: String,
    pub birthplace: String,
    pub postal_code: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub street: Option<String>,
    pub number: Option<String>,
    pub complement: Option<String>,
    pub district: Option<String>,
    pub reference_point: Option<String>,
    pub subjects: Vec<String>,
    pub registered_on: NaiveDate,
    pub account: AccountResponse,
}

impl TeacherResponse {
    pub fn new(teacher: Teacher, account: AccountResponse) -> Self {
        Self {
            id: teacher.id,
            name: teacher.name,
            email: teacher.email,
            birth_date: teacher.birth_date,
            gender: teacher.gender,
            cpf: teacher.cpf,
            rg: teacher.rg,
            marital_status: teacher.marital_status,
            phone: teacher.phone,
            birthplace: teacher.birthplace,
            postal_code: teacher.postal_code,
            city: teacher.city,
            state: teacher.state,
            street: teacher.street,
            number: teacher.number,
            complement: teacher.complement,
            district: teacher.district,
            reference_point: teacher.reference_point,
            subjects: teacher.subjects,
            registered_on: teacher.registered_on,
            account,
        }
    }
}
