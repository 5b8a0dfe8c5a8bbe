//! Repository abstraction over the backing store.
//!
//! Services never touch SQL: they are generic over these per-entity traits,
//! which expose exactly the operations the managers need (lookup by id,
//! lookup by unique field, save, delete, count). [`postgres::PgStore`]
//! implements all of them against PostgreSQL; a `MemStore` used by the test
//! suite lives in [`memory`] behind the `test-utils` feature.
//!
//! The `*_taken` methods take an optional id to exclude, so the same check
//! serves inserts (`None`) and renames (`Some(current_id)`).

pub mod postgres;

#[cfg(any(test, feature = "test-utils"))]
pub mod memory;

use crate::modules::accounts::model::{Account, NewAccount, Role};
use crate::modules::cohorts::model::{Cohort, NewCohort};
use crate::modules::courses::model::Course;
use crate::modules::grades::model::{Grade, NewGrade};
use crate::modules::students::model::{NewStudent, Student};
use crate::modules::subjects::model::{NewSubject, Subject};
use crate::modules::teachers::model::{NewTeacher, Teacher};
use crate::utils::errors::AppError;

pub trait AccountRepo {
    async fn find_account(&self, id: i64) -> Result<Option<Account>, AppError>;
    async fn find_account_by_login(&self, login: &str) -> Result<Option<Account>, AppError>;
    async fn insert_account(&self, account: NewAccount) -> Result<Account, AppError>;
    async fn update_account(&self, account: &Account) -> Result<(), AppError>;
    async fn delete_account(&self, id: i64) -> Result<bool, AppError>;
}

pub trait CourseRepo {
    async fn find_course(&self, id: i64) -> Result<Option<Course>, AppError>;
    async fn list_courses(&self) -> Result<Vec<Course>, AppError>;
    async fn course_name_taken(&self, name: &str, exclude: Option<i64>)
    -> Result<bool, AppError>;
    async fn insert_course(&self, name: &str) -> Result<Course, AppError>;
    async fn update_course(&self, course: &Course) -> Result<(), AppError>;
    async fn delete_course(&self, id: i64) -> Result<bool, AppError>;
}

pub trait SubjectRepo {
    async fn find_subject(&self, id: i64) -> Result<Option<Subject>, AppError>;
    async fn list_subjects(&self) -> Result<Vec<Subject>, AppError>;
    async fn list_subjects_by_course(&self, course_id: i64) -> Result<Vec<Subject>, AppError>;
    async fn subject_name_taken(&self, name: &str, exclude: Option<i64>)
    -> Result<bool, AppError>;
    async fn insert_subject(&self, subject: NewSubject) -> Result<Subject, AppError>;
    async fn update_subject(&self, subject: &Subject) -> Result<(), AppError>;
    async fn delete_subject(&self, id: i64) -> Result<bool, AppError>;
}

pub trait CohortRepo {
    async fn find_cohort(&self, id: i64) -> Result<Option<Cohort>, AppError>;
    async fn list_cohorts(&self) -> Result<Vec<Cohort>, AppError>;
    async fn cohort_name_taken(&self, name: &str, exclude: Option<i64>)
    -> Result<bool, AppError>;
    async fn insert_cohort(&self, cohort: NewCohort) -> Result<Cohort, AppError>;
    async fn update_cohort(&self, cohort: &Cohort) -> Result<(), AppError>;
    async fn delete_cohort(&self, id: i64) -> Result<bool, AppError>;
    async fn count_cohorts(&self) -> Result<i64, AppError>;
}

pub trait StudentRepo {
    async fn find_student(&self, id: i64) -> Result<Option<Student>, AppError>;
    async fn list_students(&self) -> Result<Vec<Student>, AppError>;
    async fn list_students_by_cohort(&self, cohort_id: i64) -> Result<Vec<Student>, AppError>;
    async fn student_name_taken(&self, name: &str, exclude: Option<i64>)
    -> Result<bool, AppError>;
    async fn insert_student(&self, student: NewStudent) -> Result<Student, AppError>;
    async fn update_student(&self, student: &Student) -> Result<(), AppError>;
    async fn delete_student(&self, id: i64) -> Result<bool, AppError>;
    async fn count_students(&self) -> Result<i64, AppError>;
}

pub trait TeacherRepo {
    async fn find_teacher(&self, id: i64) -> Result<Option<Teacher>, AppError>;
    async fn list_teachers(&self) -> Result<Vec<Teacher>, AppError>;
    /// Teachers whose linked account currently holds the given role.
    async fn list_teachers_by_account_role(&self, role: Role) -> Result<Vec<Teacher>, AppError>;
    async fn teacher_name_taken(&self, name: &str, exclude: Option<i64>)
    -> Result<bool, AppError>;
    async fn teacher_email_taken(&self, email: &str, exclude: Option<i64>)
    -> Result<bool, AppError>;
    async fn insert_teacher(&self, teacher: NewTeacher) -> Result<Teacher, AppError>;
    async fn update_teacher(&self, teacher: &Teacher) -> Result<(), AppError>;
    async fn delete_teacher(&self, id: i64) -> Result<bool, AppError>;
    async fn count_teachers(&self) -> Result<i64, AppError>;
}

pub trait GradeRepo {
    async fn find_grade(&self, id: i64) -> Result<Option<Grade>, AppError>;
    async fn list_grades(&self) -> Result<Vec<Grade>, AppError>;
    async fn list_grades_by_student(&self, student_id: i64) -> Result<Vec<Grade>, AppError>;
    async fn list_grades_by_teacher(&self, teacher_id: i64) -> Result<Vec<Grade>, AppError>;
    async fn insert_grade(&self, grade: NewGrade) -> Result<Grade, AppError>;
    async fn update_grade(&self, grade: &Grade) -> Result<(), AppError>;
    async fn delete_grade(&self, id: i64) -> Result<bool, AppError>;
}
