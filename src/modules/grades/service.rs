use rust_decimal::Decimal;
use tracing::{info, instrument};

use crate::config::jwt::JwtConfig;
use crate::modules::accounts::model::Role;
use crate::modules::grades::model::{CreateGradeDto, Grade, NewGrade, UpdateGradeDto};
use crate::store::{GradeRepo, StudentRepo, SubjectRepo, TeacherRepo};
use crate::utils::access;
use crate::utils::errors::AppError;

const VIEW: &[Role] = &[Role::Admin, Role::Pedagogical, Role::Teacher];
/// Grades are recorded by teachers (or admins acting on their behalf).
const RECORD: &[Role] = &[Role::Admin, Role::Teacher];
const DELETE: &[Role] = &[Role::Admin];
/// Students may check their own aggregate score.
const SCORE: &[Role] = &[Role::Admin, Role::Pedagogical, Role::Teacher, Role::Student];

pub struct GradeService;

impl GradeService {
    pub async fn list<S: GradeRepo>(
        store: &S,
        jwt_config: &JwtConfig,
        token: &str,
    ) -> Result<Vec<Grade>, AppError> {
        access::require_role(jwt_config, token, VIEW)?;

        let grades = store.list_grades().await?;

        if grades.is_empty() {
            return Err(AppError::not_found(anyhow::anyhow!("No grades recorded")));
        }

        Ok(grades)
    }

    pub async fn get_by_id<S: GradeRepo>(
        store: &S,
        jwt_config: &JwtConfig,
        id: i64,
        token: &str,
    ) -> Result<Grade, AppError> {
        access::require_role(jwt_config, token, VIEW)?;

        store
            .find_grade(id)
            .await?
            .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Grade not found")))
    }

    pub async fn list_by_student<S>(
        store: &S,
        jwt_config: &JwtConfig,
        student_id: i64,
        token: &str,
    ) -> Result<Vec<Grade>, AppError>
    where
        S: GradeRepo + StudentRepo,
    {
        access::require_role(jwt_config, token, VIEW)?;

        store
            .find_student(student_id)
            .await?
            .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Student not found")))?;

        let grades = store.list_grades_by_student(student_id).await?;

        if grades.is_empty() {
            return Err(AppError::not_found(anyhow::anyhow!(
                "No grades recorded for the given student"
            )));
        }

        Ok(grades)
    }

    pub async fn list_by_teacher<S>(
        store: &S,
        jwt_config: &JwtConfig,
        teacher_id: i64,
        token: &str,
    ) -> Result<Vec<Grade>, AppError>
    where
        S: GradeRepo + TeacherRepo,
    {
        access::require_role(jwt_config, token, VIEW)?;

        store
            .find_teacher(teacher_id)
            .await?
            .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Teacher not found")))?;

        let grades = store.list_grades_by_teacher(teacher_id).await?;

        if grades.is_empty() {
            return Err(AppError::not_found(anyhow::anyhow!(
                "No grades recorded by the given teacher"
            )));
        }

        Ok(grades)
    }

    #[instrument(skip(store, jwt_config, token))]
    pub async fn create<S>(
        store: &S,
        jwt_config: &JwtConfig,
        dto: CreateGradeDto,
        token: &str,
    ) -> Result<Grade, AppError>
    where
        S: GradeRepo + StudentRepo + TeacherRepo + SubjectRepo,
    {
        access::require_role(jwt_config, token, RECORD)?;

        parse_value(&dto.value)?;

        let student = store
            .find_student(dto.student)
            .await?
            .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Student not found")))?;

        let teacher = store
            .find_teacher(dto.teacher)
            .await?
            .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Teacher not found")))?;

        let subject = store
            .find_subject(dto.subject)
            .await?
            .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Subject not found")))?;

        let grade = store
            .insert_grade(NewGrade {
                student_id: student.id,
                teacher_id: teacher.id,
                subject_id: subject.id,
                value: dto.value,
            })
            .await?;

        info!("grade {} recorded for student {}", grade.id, student.id);
        Ok(grade)
    }

    #[instrument(skip(store, jwt_config, token))]
    pub async fn update<S: GradeRepo>(
        store: &S,
        jwt_config: &JwtConfig,
        id: i64,
        dto: UpdateGradeDto,
        token: &str,
    ) -> Result<Grade, AppError> {
        access::require_role(jwt_config, token, RECORD)?;

        let mut grade = store
            .find_grade(id)
            .await?
            .ok_or_else(|| AppError::not_found(anyhow::anyhow!("No grade found with the given id")))?;

        parse_value(&dto.value)?;

        grade.value = dto.value;
        store.update_grade(&grade).await?;

        info!("grade {} updated", grade.id);
        Ok(grade)
    }

    #[instrument(skip(store, jwt_config, token))]
    pub async fn delete<S: GradeRepo>(
        store: &S,
        jwt_config: &JwtConfig,
        id: i64,
        token: &str,
    ) -> Result<(), AppError> {
        access::require_role(jwt_config, token, DELETE)?;

        if !store.delete_grade(id).await? {
            return Err(AppError::not_found(anyhow::anyhow!(
                "No grade found with the given id"
            )));
        }

        info!("grade {} removed", id);
        Ok(())
    }

    /// Arithmetic mean of every grade recorded for the student, computed in
    /// exact decimal arithmetic.
    pub async fn compute_score<S>(
        store: &S,
        jwt_config: &JwtConfig,
        student_id: i64,
        token: &str,
    ) -> Result<Decimal, AppError>
    where
        S: GradeRepo + StudentRepo,
    {
        access::require_role(jwt_config, token, SCORE)?;

        store
            .find_student(student_id)
            .await?
            .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Student not found")))?;

        let grades = store.list_grades_by_student(student_id).await?;

        if grades.is_empty() {
            return Err(AppError::not_found(anyhow::anyhow!("Score not found")));
        }

        let mut sum = Decimal::ZERO;
        for grade in &grades {
            sum += parse_stored_value(&grade.value)?;
        }

        Ok(sum / Decimal::from(grades.len() as i64))
    }
}

fn parse_value(value: &str) -> Result<Decimal, AppError> {
    if value.trim().is_empty() {
        return Err(AppError::bad_request(anyhow::anyhow!(
            "Value must not be empty"
        )));
    }

    value.trim().parse::<Decimal>().map_err(|_| {
        AppError::bad_request(anyhow::anyhow!("Value must be a decimal number"))
    })
}

fn parse_stored_value(value: &str) -> Result<Decimal, AppError> {
    value.trim().parse::<Decimal>().map_err(|_| {
        AppError::internal(anyhow::anyhow!("Stored grade value is not a decimal: {}", value))
    })
}
