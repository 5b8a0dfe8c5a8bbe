use chrono::Utc;
use tracing::{error, info, instrument};

use crate::config::jwt::JwtConfig;
use crate::modules::accounts::model::{AccountResponse, Role};
use crate::modules::accounts::service::AccountService;
use crate::modules::teachers::model::{
    CreateTeacherDto, NewTeacher, Teacher, TeacherResponse, UpdateTeacherDto,
};
use crate::store::{AccountRepo, TeacherRepo};
use crate::utils::access;
use crate::utils::errors::AppError;
use crate::utils::password::hash_password;

const VIEW: &[Role] = &[Role::Admin, Role::Pedagogical, Role::Recruiter];
const MANAGE: &[Role] = &[Role::Admin, Role::Pedagogical, Role::Recruiter];
const DELETE: &[Role] = &[Role::Admin];

pub struct TeacherService;

impl TeacherService {
    /// Admins see every teacher; pedagogical staff and recruiters only see
    /// teachers whose account still holds the professor role.
    pub async fn list<S>(
        store: &S,
        jwt_config: &JwtConfig,
        token: &str,
    ) -> Result<Vec<Teacher>, AppError>
    where
        S: TeacherRepo + AccountRepo,
    {
        let role = access::require_role(jwt_config, token, VIEW)?;

        let teachers = if role == Role::Admin {
            store.list_teachers().await?
        } else {
            store.list_teachers_by_account_role(Role::Teacher).await?
        };

        if teachers.is_empty() {
            return Err(AppError::not_found(anyhow::anyhow!(
                "No teachers registered"
            )));
        }

        Ok(teachers)
    }

    /// Same visibility rule as [`Self::list`], but by id the restriction is
    /// an explicit authorization failure rather than a missing entity.
    pub async fn get_by_id<S>(
        store: &S,
        jwt_config: &JwtConfig,
        id: i64,
        token: &str,
    ) -> Result<Teacher, AppError>
    where
        S: TeacherRepo + AccountRepo,
    {
        let role = access::require_role(jwt_config, token, VIEW)?;
        fetch_visible(store, role, id).await
    }

    #[instrument(skip(store, jwt_config, dto, token))]
    pub async fn create<S>(
        store: &S,
        jwt_config: &JwtConfig,
        dto: CreateTeacherDto,
        token: &str,
    ) -> Result<TeacherResponse, AppError>
    where
        S: TeacherRepo + AccountRepo,
    {
        access::require_role(jwt_config, token, MANAGE)?;

        validate_fields(&dto.name, &dto.email, &dto.password)?;

        if store.teacher_name_taken(&dto.name, None).await? {
            return Err(AppError::bad_request(anyhow::anyhow!(
                "A teacher already exists with the given name"
            )));
        }

        if store.teacher_email_taken(&dto.email, None).await? {
            return Err(AppError::bad_request(anyhow::anyhow!(
                "A teacher already exists with the given email"
            )));
        }

        let account = AccountService::create_login(
            store,
            jwt_config,
            token,
            &dto.email,
            &dto.password,
            Role::Teacher,
        )
        .await?;

        let teacher = store
            .insert_teacher(NewTeacher {
                name: dto.name,
                email: dto.email,
                birth_date: dto.birth_date,
                gender: dto.gender,
                cpf: dto.cpf,
                rg: dto.rg,
                marital_status: dto.marital_status,
                phone: dto.phone,
                birthplace: dto.birthplace,
                postal_code: dto.postal_code,
                city: dto.city,
                state: dto.state,
                street: dto.street,
                number: dto.number,
                complement: dto.complement,
                district: dto.district,
                reference_point: dto.reference_point,
                subjects: dto.subjects,
                registered_on: Utc::now().date_naive(),
                account_id: account.id,
            })
            .await?;

        info!("teacher {} saved", teacher.name);

        Ok(TeacherResponse::new(teacher, AccountResponse::from(&account)))
    }

    /// Rewrites the teacher's fields and its linked account's login/secret
    /// together. The caller must be able to see the teacher at all, so the
    /// get-by-id visibility rule applies first.
    #[instrument(skip(store, jwt_config, dto, token))]
    pub async fn update<S>(
        store: &S,
        jwt_config: &JwtConfig,
        id: i64,
        dto: UpdateTeacherDto,
        token: &str,
    ) -> Result<Teacher, AppError>
    where
        S: TeacherRepo + AccountRepo,
    {
        let role = access::require_role(jwt_config, token, MANAGE)?;

        let existing = fetch_visible(store, role, id).await?;

        validate_fields(&dto.name, &dto.email, &dto.password)?;

        if store.teacher_name_taken(&dto.name, Some(id)).await? {
            return Err(AppError::bad_request(anyhow::anyhow!(
                "A teacher already exists with the given name"
            )));
        }

        if store.teacher_email_taken(&dto.email, Some(id)).await? {
            return Err(AppError::bad_request(anyhow::anyhow!(
                "A teacher already exists with the given email"
            )));
        }

        let teacher = Teacher {
            id: existing.id,
            name: dto.name,
            email: dto.email,
            birth_date: dto.birth_date,
            gender: dto.gender,
            cpf: dto.cpf,
            rg: dto.rg,
            marital_status: dto.marital_status,
            phone: dto.phone,
            birthplace: dto.birthplace,
            postal_code: dto.postal_code,
            city: dto.city,
            state: dto.state,
            street: dto.street,
            number: dto.number,
            complement: dto.complement,
            district: dto.district,
            reference_point: dto.reference_point,
            subjects: dto.subjects,
            registered_on: existing.registered_on,
            account_id: existing.account_id,
        };

        store.update_teacher(&teacher).await?;

        let mut account = store.find_account(existing.account_id).await?.ok_or_else(|| {
            AppError::internal(anyhow::anyhow!("Teacher {} has no linked account", id))
        })?;

        account.login = teacher.email.clone();
        account.password = hash_password(&dto.password)?;
        store.update_account(&account).await?;

        info!("teacher {} updated", teacher.id);
        Ok(teacher)
    }

    /// Removes the teacher row, then its linked account.
    #[instrument(skip(store, jwt_config, token))]
    pub async fn delete<S>(
        store: &S,
        jwt_config: &JwtConfig,
        id: i64,
        token: &str,
    ) -> Result<(), AppError>
    where
        S: TeacherRepo + AccountRepo,
    {
        access::require_role(jwt_config, token, DELETE)?;

        let teacher = store
            .find_teacher(id)
            .await?
            .ok_or_else(|| AppError::not_found(anyhow::anyhow!("No teacher found with the given id")))?;

        store.delete_teacher(teacher.id).await?;
        info!("teacher {} removed", teacher.id);

        store.delete_account(teacher.account_id).await?;
        info!("account linked to teacher {} removed", teacher.id);

        Ok(())
    }
}

async fn fetch_visible<S>(store: &S, role: Role, id: i64) -> Result<Teacher, AppError>
where
    S: TeacherRepo + AccountRepo,
{
    let teacher = store
        .find_teacher(id)
        .await?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("No teacher found with the given id")))?;

    if role == Role::Admin {
        return Ok(teacher);
    }

    let account = store.find_account(teacher.account_id).await?.ok_or_else(|| {
        AppError::internal(anyhow::anyhow!("Teacher {} has no linked account", id))
    })?;

    if account.role != Role::Teacher {
        error!(
            "caller with role {} may only access teachers holding the professor role",
            role
        );
        return Err(AppError::unauthorized(anyhow::anyhow!(
            "Pedagogical and recruiter users may only access teachers holding the professor role"
        )));
    }

    Ok(teacher)
}

fn validate_fields(name: &str, email: &str, password: &str) -> Result<(), AppError> {
    if name.trim().is_empty() {
        return Err(AppError::bad_request(anyhow::anyhow!(
            "Name must not be empty"
        )));
    }

    if email.trim().is_empty() {
        return Err(AppError::bad_request(anyhow::anyhow!(
            "Email must not be empty"
        )));
    }

    if password.trim().is_empty() {
        return Err(AppError::bad_request(anyhow::anyhow!(
            "Password must not be empty"
        )));
    }

    Ok(())
}
