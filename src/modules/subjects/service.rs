use tracing::{info, instrument};

use crate::config::jwt::JwtConfig;
use crate::modules::accounts::model::Role;
use crate::modules::subjects::model::{CreateSubjectDto, NewSubject, Subject, UpdateSubjectDto};
use crate::store::{CourseRepo, SubjectRepo};
use crate::utils::access;
use crate::utils::errors::AppError;

const VIEW: &[Role] = &[Role::Admin, Role::Pedagogical];
const MANAGE: &[Role] = &[Role::Admin, Role::Pedagogical];
const DELETE: &[Role] = &[Role::Admin];

pub struct SubjectService;

impl SubjectService {
    pub async fn list<S: SubjectRepo>(
        store: &S,
        jwt_config: &JwtConfig,
        token: &str,
    ) -> Result<Vec<Subject>, AppError> {
        access::require_role(jwt_config, token, VIEW)?;

        let subjects = store.list_subjects().await?;

        if subjects.is_empty() {
            return Err(AppError::not_found(anyhow::anyhow!("No subjects found")));
        }

        Ok(subjects)
    }

    pub async fn get_by_id<S: SubjectRepo>(
        store: &S,
        jwt_config: &JwtConfig,
        id: i64,
        token: &str,
    ) -> Result<Subject, AppError> {
        access::require_role(jwt_config, token, VIEW)?;

        store
            .find_subject(id)
            .await?
            .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Subject not found")))
    }

    pub async fn list_by_course<S>(
        store: &S,
        jwt_config: &JwtConfig,
        course_id: i64,
        token: &str,
    ) -> Result<Vec<Subject>, AppError>
    where
        S: SubjectRepo + CourseRepo,
    {
        access::require_role(jwt_config, token, VIEW)?;

        store
            .find_course(course_id)
            .await?
            .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Course not found")))?;

        let subjects = store.list_subjects_by_course(course_id).await?;

        if subjects.is_empty() {
            return Err(AppError::not_found(anyhow::anyhow!(
                "No subjects found for the given course"
            )));
        }

        Ok(subjects)
    }

    #[instrument(skip(store, jwt_config, token))]
    pub async fn create<S>(
        store: &S,
        jwt_config: &JwtConfig,
        dto: CreateSubjectDto,
        token: &str,
    ) -> Result<Subject, AppError>
    where
        S: SubjectRepo + CourseRepo,
    {
        access::require_role(jwt_config, token, MANAGE)?;

        validate_name(&dto.name)?;

        if store.subject_name_taken(&dto.name, None).await? {
            return Err(AppError::bad_request(anyhow::anyhow!(
                "A subject already exists with the given name"
            )));
        }

        let course_id = resolve_course(store, dto.course).await?;

        let subject = store
            .insert_subject(NewSubject {
                name: dto.name,
                course_id,
            })
            .await?;

        info!("subject {} saved", subject.name);
        Ok(subject)
    }

    #[instrument(skip(store, jwt_config, token))]
    pub async fn update<S>(
        store: &S,
        jwt_config: &JwtConfig,
        id: i64,
        dto: UpdateSubjectDto,
        token: &str,
    ) -> Result<Subject, AppError>
    where
        S: SubjectRepo + CourseRepo,
    {
        access::require_role(jwt_config, token, MANAGE)?;

        let mut subject = store
            .find_subject(id)
            .await?
            .ok_or_else(|| AppError::not_found(anyhow::anyhow!("No subject found with the given id")))?;

        validate_name(&dto.name)?;

        if store.subject_name_taken(&dto.name, Some(id)).await? {
            return Err(AppError::bad_request(anyhow::anyhow!(
                "A subject already exists with the given name"
            )));
        }

        subject.name = dto.name;
        subject.course_id = resolve_course(store, dto.course).await?;
        store.update_subject(&subject).await?;

        info!("subject {} updated", subject.id);
        Ok(subject)
    }

    #[instrument(skip(store, jwt_config, token))]
    pub async fn delete<S: SubjectRepo>(
        store: &S,
        jwt_config: &JwtConfig,
        id: i64,
        token: &str,
    ) -> Result<(), AppError> {
        access::require_role(jwt_config, token, DELETE)?;

        if !store.delete_subject(id).await? {
            return Err(AppError::not_found(anyhow::anyhow!(
                "No subject found with the given id"
            )));
        }

        info!("subject {} removed", id);
        Ok(())
    }
}

async fn resolve_course<S: CourseRepo>(
    store: &S,
    course: Option<i64>,
) -> Result<Option<i64>, AppError> {
    match course {
        Some(id) => {
            let course = store
                .find_course(id)
                .await?
                .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Course not found")))?;
            Ok(Some(course.id))
        }
        None => Ok(None),
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
