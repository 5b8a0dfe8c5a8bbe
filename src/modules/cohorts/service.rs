use tracing::{error, info, instrument};

use crate::config::jwt::JwtConfig;
use crate::modules::accounts::model::Role;
use crate::modules::cohorts::model::{
    Cohort, CohortDetails, CreateCohortDto, NewCohort, UpdateCohortDto,
};
use crate::modules::teachers::model::Teacher;
use crate::store::{AccountRepo, CohortRepo, CourseRepo, StudentRepo, TeacherRepo};
use crate::utils::access;
use crate::utils::errors::AppError;

const VIEW: &[Role] = &[Role::Admin, Role::Pedagogical];
/// Teachers may open their own cohorts.
const CREATE: &[Role] = &[Role::Admin, Role::Pedagogical, Role::Teacher];
const UPDATE: &[Role] = &[Role::Admin, Role::Pedagogical];
const DELETE: &[Role] = &[Role::Admin];

pub struct CohortService;

impl CohortService {
    pub async fn list<S: CohortRepo>(
        store: &S,
        jwt_config: &JwtConfig,
        token: &str,
    ) -> Result<Vec<Cohort>, AppError> {
        access::require_role(jwt_config, token, VIEW)?;

        let cohorts = store.list_cohorts().await?;

        if cohorts.is_empty() {
            return Err(AppError::not_found(anyhow::anyhow!("No cohorts found")));
        }

        Ok(cohorts)
    }

    pub async fn get_by_id<S>(
        store: &S,
        jwt_config: &JwtConfig,
        id: i64,
        token: &str,
    ) -> Result<CohortDetails, AppError>
    where
        S: CohortRepo + StudentRepo,
    {
        access::require_role(jwt_config, token, VIEW)?;

        let cohort = store
            .find_cohort(id)
            .await?
            .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Cohort not found")))?;

        let students = store.list_students_by_cohort(cohort.id).await?;

        Ok(CohortDetails::new(cohort, students))
    }

    #[instrument(skip(store, jwt_config, dto, token))]
    pub async fn create<S>(
        store: &S,
        jwt_config: &JwtConfig,
        dto: CreateCohortDto,
        token: &str,
    ) -> Result<Cohort, AppError>
    where
        S: CohortRepo + CourseRepo + TeacherRepo + AccountRepo,
    {
        access::require_role(jwt_config, token, CREATE)?;

        if dto.name.trim().is_empty() {
            return Err(AppError::bad_request(anyhow::anyhow!(
                "Name must not be empty"
            )));
        }

        if store.cohort_name_taken(&dto.name, None).await? {
            return Err(AppError::bad_request(anyhow::anyhow!(
                "A cohort already exists with the given name"
            )));
        }

        let course = store
            .find_course(dto.course)
            .await?
            .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Course not found")))?;

        let teacher = store
            .find_teacher(dto.teacher)
            .await?
            .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Teacher not found")))?;

        ensure_professor(store, &teacher).await?;

        let cohort = store
            .insert_cohort(NewCohort {
                name: dto.name,
                teacher_id: teacher.id,
                course_id: course.id,
                start_date: dto.start_date,
                end_date: dto.end_date,
                schedule: dto.schedule,
            })
            .await?;

        info!("cohort {} saved", cohort.name);
        Ok(cohort)
    }

    #[instrument(skip(store, jwt_config, dto, token))]
    pub async fn update<S>(
        store: &S,
        jwt_config: &JwtConfig,
        id: i64,
        dto: UpdateCohortDto,
        token: &str,
    ) -> Result<Cohort, AppError>
    where
        S: CohortRepo + CourseRepo + TeacherRepo + AccountRepo,
    {
        access::require_role(jwt_config, token, UPDATE)?;

        let mut cohort = store
            .find_cohort(id)
            .await?
            .ok_or_else(|| AppError::not_found(anyhow::anyhow!("No cohort found with the given id")))?;

        if dto.name.trim().is_empty() {
            return Err(AppError::bad_request(anyhow::anyhow!(
                "Name must not be empty"
            )));
        }

        if store.cohort_name_taken(&dto.name, Some(id)).await? {
            return Err(AppError::bad_request(anyhow::anyhow!(
                "A cohort already exists with the given name"
            )));
        }

        let course = store
            .find_course(dto.course)
            .await?
            .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Course not found")))?;

        let teacher = store
            .find_teacher(dto.teacher)
            .await?
            .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Teacher not found")))?;

        ensure_professor(store, &teacher).await?;

        cohort.name = dto.name;
        cohort.teacher_id = teacher.id;
        cohort.course_id = course.id;
        cohort.start_date = dto.start_date;
        cohort.end_date = dto.end_date;
        cohort.schedule = dto.schedule;

        store.update_cohort(&cohort).await?;

        info!("cohort {} updated", cohort.id);
        Ok(cohort)
    }

    #[instrument(skip(store, jwt_config, token))]
    pub async fn delete<S: CohortRepo>(
        store: &S,
        jwt_config: &JwtConfig,
        id: i64,
        token: &str,
    ) -> Result<(), AppError> {
        access::require_role(jwt_config, token, DELETE)?;

        if !store.delete_cohort(id).await? {
            return Err(AppError::not_found(anyhow::anyhow!(
                "No cohort found with the given id"
            )));
        }

        info!("cohort {} removed", id);
        Ok(())
    }
}

/// A cohort may only be assigned a teacher whose linked account still holds
/// the professor role; a promoted or demoted account disqualifies it.
async fn ensure_professor<S: AccountRepo>(store: &S, teacher: &Teacher) -> Result<(), AppError> {
    let account = store.find_account(teacher.account_id).await?.ok_or_else(|| {
        AppError::internal(anyhow::anyhow!(
            "Teacher {} has no linked account",
            teacher.id
        ))
    })?;

    if account.role != Role::Teacher {
        error!(
            "teacher {} account holds role {}, not professor",
            teacher.id, account.role
        );
        return Err(AppError::bad_request(anyhow::anyhow!(
            "Only a teacher with the professor role can be assigned to a cohort"
        )));
    }

    Ok(())
}
