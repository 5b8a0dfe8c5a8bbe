use tracing::{info, instrument};

use crate::config::jwt::JwtConfig;
use crate::modules::accounts::model::{Account, AccountResponse, CreateAccountDto, NewAccount, Role};
use crate::store::AccountRepo;
use crate::utils::access;
use crate::utils::errors::AppError;
use crate::utils::jwt::read_claim;
use crate::utils::password::hash_password;

/// Roles allowed to onboard new logins. Recruiters need it for teacher
/// onboarding, pedagogical staff for student onboarding.
const ONBOARD: &[Role] = &[Role::Admin, Role::Pedagogical, Role::Recruiter];

pub struct AccountService;

impl AccountService {
    /// Registers a standalone account. The requested role name is resolved
    /// case-insensitively against the fixed role set.
    #[instrument(skip(store, jwt_config, dto, token))]
    pub async fn register<S: AccountRepo>(
        store: &S,
        jwt_config: &JwtConfig,
        dto: CreateAccountDto,
        token: &str,
    ) -> Result<AccountResponse, AppError> {
        access::require_role(jwt_config, token, ONBOARD)?;

        let role = Role::resolve(&dto.role).ok_or_else(|| {
            AppError::not_found(anyhow::anyhow!("No role found with name {}", dto.role))
        })?;

        let account =
            Self::create_login(store, jwt_config, token, &dto.login, &dto.password, role).await?;

        Ok(AccountResponse::from(&account))
    }

    /// Creates a login with an already-resolved role. Student and teacher
    /// creation call this with the caller's own token, so the onboarding
    /// permission check applies transitively.
    #[instrument(skip(store, jwt_config, token, password))]
    pub async fn create_login<S: AccountRepo>(
        store: &S,
        jwt_config: &JwtConfig,
        token: &str,
        login: &str,
        password: &str,
        role: Role,
    ) -> Result<Account, AppError> {
        access::require_role(jwt_config, token, ONBOARD)?;

        if login.trim().is_empty() {
            return Err(AppError::bad_request(anyhow::anyhow!(
                "Login must not be empty"
            )));
        }

        if password.trim().is_empty() {
            return Err(AppError::bad_request(anyhow::anyhow!(
                "Password must not be empty"
            )));
        }

        if store.find_account_by_login(login).await?.is_some() {
            return Err(AppError::bad_request(anyhow::anyhow!(
                "An account already exists with the login {}",
                login
            )));
        }

        let hashed = hash_password(password)?;

        let account = store
            .insert_account(NewAccount {
                login: login.to_string(),
                password: hashed,
                role,
            })
            .await?;

        info!("account {} created with role {}", account.login, role);
        Ok(account)
    }

    /// Any authenticated caller may look up an account's public projection.
    pub async fn get_by_id<S: AccountRepo>(
        store: &S,
        jwt_config: &JwtConfig,
        id: i64,
        token: &str,
    ) -> Result<AccountResponse, AppError> {
        access::caller_role(jwt_config, token)?;

        let account = store.find_account(id).await?.ok_or_else(|| {
            AppError::not_found(anyhow::anyhow!("No account found with id {}", id))
        })?;

        Ok(AccountResponse::from(&account))
    }

    /// Resolves the calling account from its own token's `sub` claim.
    pub async fn current<S: AccountRepo>(
        store: &S,
        jwt_config: &JwtConfig,
        token: &str,
    ) -> Result<AccountResponse, AppError> {
        let sub = read_claim(token, "sub", jwt_config)?;
        let id: i64 = sub
            .parse()
            .map_err(|_| AppError::unauthorized(anyhow::anyhow!("Invalid subject in token")))?;

        let account = store
            .find_account(id)
            .await?
            .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Account no longer exists")))?;

        Ok(AccountResponse::from(&account))
    }
}
