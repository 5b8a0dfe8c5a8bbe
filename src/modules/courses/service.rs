use tracing::{info, instrument};

use crate::config::jwt::JwtConfig;
use crate::modules::accounts::model::Role;
use crate::modules::courses::model::{Course, CreateCourseDto, UpdateCourseDto};
use crate::store::{CohortRepo, CourseRepo, StudentRepo};
use crate::utils::access;
use crate::utils::errors::AppError;

const VIEW: &[Role] = &[Role::Admin, Role::Pedagogical];
const MANAGE: &[Role] = &[Role::Admin, Role::Pedagogical];
const DELETE: &[Role] = &[Role::Admin];
/// Students may follow their own cohort to its course.
const VIEW_BY_STUDENT: &[Role] = &[Role::Admin, Role::Pedagogical, Role::Student];

pub struct CourseService;

impl CourseService {
    /// Listing an empty catalog is an error, not an empty success.
    pub async fn list<S: CourseRepo>(
        store: &S,
        jwt_config: &JwtConfig,
        token: &str,
    ) -> Result<Vec<Course>, AppError> {
        access::require_role(jwt_config, token, VIEW)?;

        let courses = store.list_courses().await?;

        if courses.is_empty() {
            return Err(AppError::not_found(anyhow::anyhow!("No courses found")));
        }

        Ok(courses)
    }

    pub async fn get_by_id<S: CourseRepo>(
        store: &S,
        jwt_config: &JwtConfig,
        id: i64,
        token: &str,
    ) -> Result<Course, AppError> {
        access::require_role(jwt_config, token, VIEW)?;

        store
            .find_course(id)
            .await?
            .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Course not found")))
    }

    #[instrument(skip(store, jwt_config, token))]
    pub async fn create<S: CourseRepo>(
        store: &S,
        jwt_config: &JwtConfig,
        dto: CreateCourseDto,
        token: &str,
    ) -> Result<Course, AppError> {
        access::require_role(jwt_config, token, MANAGE)?;

        validate_name(&dto.name)?;

        if store.course_name_taken(&dto.name, None).await? {
            return Err(AppError::bad_request(anyhow::anyhow!(
                "A course already exists with the given name"
            )));
        }

        let course = store.insert_course(&dto.name).await?;
        info!("course {} saved", course.name);
        Ok(course)
    }

    #[instrument(skip(store, jwt_config, token))]
    pub async fn update<S: CourseRepo>(
        store: &S,
        jwt_config: &JwtConfig,
        id: i64,
        dto: UpdateCourseDto,
        token: &str,
    ) -> Result<Course, AppError> {
        access::require_role(jwt_config, token, MANAGE)?;

        let mut course = store
            .find_course(id)
            .await?
            .ok_or_else(|| AppError::not_found(anyhow::anyhow!("No course found with the given id")))?;

        validate_name(&dto.name)?;

        if store.course_name_taken(&dto.name, Some(id)).await? {
            return Err(AppError::bad_request(anyhow::anyhow!(
                "A course already exists with the given name"
            )));
        }

        course.name = dto.name;
        store.update_course(&course).await?;

        info!("course {} updated", course.id);
        Ok(course)
    }

    #[instrument(skip(store, jwt_config, token))]
    pub async fn delete<S: CourseRepo>(
        store: &S,
        jwt_config: &JwtConfig,
        id: i64,
        token: &str,
    ) -> Result<(), AppError> {
        access::require_role(jwt_config, token, DELETE)?;

        if !store.delete_course(id).await? {
            return Err(AppError::not_found(anyhow::anyhow!(
                "No course found with the given id"
            )));
        }

        info!("course {} removed", id);
        Ok(())
    }

    /// The courses a student is enrolled in, via its cohort.
    pub async fn list_by_student<S>(
        store: &S,
        jwt_config: &JwtConfig,
        student_id: i64,
        token: &str,
    ) -> Result<Vec<Course>, AppError>
    where
        S: CourseRepo + StudentRepo + CohortRepo,
    {
        access::require_role(jwt_config, token, VIEW_BY_STUDENT)?;

        let student = store
            .find_student(student_id)
            .await?
            .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Student not found")))?;

        let cohort = store
            .find_cohort(student.cohort_id)
            .await?
            .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Cohort not found")))?;

        let course = store
            .find_course(cohort.course_id)
            .await?
            .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Course not found")))?;

        Ok(vec![course])
    }
}

fn validate_name(name: &str) -> Result<(), AppError> {
    if name.trim().is_empty() {
        return Err(AppError::bad_request(anyhow::anyhow!(
            "Name must not be empty"
        )));
    }
    Ok(())
}
