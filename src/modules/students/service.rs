use tracing::{info, instrument};

use crate::config::jwt::JwtConfig;
use crate::modules::accounts::model::{AccountResponse, Role};
use crate::modules::accounts::service::AccountService;
use crate::modules::students::model::{
    CreateStudentDto, NewStudent, Student, StudentResponse, UpdateStudentDto,
};
use crate::store::{AccountRepo, CohortRepo, StudentRepo};
use crate::utils::access;
use crate::utils::errors::AppError;
use crate::utils::password::hash_password;

const VIEW: &[Role] = &[Role::Admin, Role::Pedagogical];
const MANAGE: &[Role] = &[Role::Admin, Role::Pedagogical];
const DELETE: &[Role] = &[Role::Admin];

pub struct StudentService;

impl StudentService {
    pub async fn list<S: StudentRepo>(
        store: &S,
        jwt_config: &JwtConfig,
        token: &str,
    ) -> Result<Vec<Student>, AppError> {
        access::require_role(jwt_config, token, VIEW)?;

        let students = store.list_students().await?;

        if students.is_empty() {
            return Err(AppError::not_found(anyhow::anyhow!("No students found")));
        }

        Ok(students)
    }

    pub async fn get_by_id<S: StudentRepo>(
        store: &S,
        jwt_config: &JwtConfig,
        id: i64,
        token: &str,
    ) -> Result<Student, AppError> {
        access::require_role(jwt_config, token, VIEW)?;

        store
            .find_student(id)
            .await?
            .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Student not found")))
    }

    /// Creates the student and its login account in one logical step. The
    /// account takes the student's email as login and holds the `aluno` role.
    #[instrument(skip(store, jwt_config, dto, token))]
    pub async fn create<S>(
        store: &S,
        jwt_config: &JwtConfig,
        dto: CreateStudentDto,
        token: &str,
    ) -> Result<StudentResponse, AppError>
    where
        S: StudentRepo + CohortRepo + AccountRepo,
    {
        access::require_role(jwt_config, token, MANAGE)?;

        if dto.name.trim().is_empty() {
            return Err(AppError::bad_request(anyhow::anyhow!(
                "Name must not be empty"
            )));
        }

        if store.student_name_taken(&dto.name, None).await? {
            return Err(AppError::bad_request(anyhow::anyhow!(
                "A student already exists with the given name"
            )));
        }

        let cohort = store
            .find_cohort(dto.cohort)
            .await?
            .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Cohort not found")))?;

        let account = AccountService::create_login(
            store,
            jwt_config,
            token,
            &dto.email,
            &dto.password,
            Role::Student,
        )
        .await?;

        let student = store
            .insert_student(NewStudent {
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
                street: dto.street,
                number: dto.number,
                complement: dto.complement,
                district: dto.district,
                reference_point: dto.reference_point,
                account_id: account.id,
                cohort_id: cohort.id,
            })
            .await?;

        info!("student {} saved", student.name);

        Ok(StudentResponse {
            id: student.id,
            name: student.name,
            birth_date: student.birth_date,
            account: AccountResponse::from(&account),
            cohort,
        })
    }

    /// Updates the student and its linked account as one unit: the account's
    /// login follows the email and its secret is re-hashed from the payload.
    #[instrument(skip(store, jwt_config, dto, token))]
    pub async fn update<S>(
        store: &S,
        jwt_config: &JwtConfig,
        id: i64,
        dto: UpdateStudentDto,
        token: &str,
    ) -> Result<Student, AppError>
    where
        S: StudentRepo + CohortRepo + AccountRepo,
    {
        access::require_role(jwt_config, token, MANAGE)?;

        let existing = store
            .find_student(id)
            .await?
            .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Student not found")))?;

        if dto.name.trim().is_empty() {
            return Err(AppError::bad_request(anyhow::anyhow!(
                "Name must not be empty"
            )));
        }

        if store.student_name_taken(&dto.name, Some(id)).await? {
            return Err(AppError::bad_request(anyhow::anyhow!(
                "A student already exists with the given name"
            )));
        }

        let cohort = store
            .find_cohort(dto.cohort)
            .await?
            .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Cohort not found")))?;

        let student = Student {
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
            street: dto.street,
            number: dto.number,
            complement: dto.complement,
            district: dto.district,
            reference_point: dto.reference_point,
            account_id: existing.account_id,
            cohort_id: cohort.id,
        };

        store.update_student(&student).await?;

        let mut account = store.find_account(existing.account_id).await?.ok_or_else(|| {
            AppError::internal(anyhow::anyhow!("Student {} has no linked account", id))
        })?;

        account.login = student.email.clone();
        account.password = hash_password(&dto.password)?;
        store.update_account(&account).await?;

        info!("student {} updated", student.id);
        Ok(student)
    }

    /// Removes the student row, then its linked account — exactly two
    /// deletions per student.
    #[instrument(skip(store, jwt_config, token))]
    pub async fn delete<S>(
        store: &S,
        jwt_config: &JwtConfig,
        id: i64,
        token: &str,
    ) -> Result<(), AppError>
    where
        S: StudentRepo + AccountRepo,
    {
        access::require_role(jwt_config, token, DELETE)?;

        let student = store
            .find_student(id)
            .await?
            .ok_or_else(|| AppError::not_found(anyhow::anyhow!("No student found with the given id")))?;

        store.delete_student(student.id).await?;
        info!("student {} removed", student.id);

        store.delete_account(student.account_id).await?;
        info!("account linked to student {} removed", student.id);

        Ok(())
    }
}
