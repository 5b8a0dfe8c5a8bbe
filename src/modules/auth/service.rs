use tracing::{info, instrument};

use crate::config::jwt::JwtConfig;
use crate::modules::auth::model::{LoginRequest, LoginResponse};
use crate::store::AccountRepo;
use crate::utils::errors::AppError;
use crate::utils::jwt::create_access_token;
use crate::utils::password::verify_password;

pub struct AuthService;

impl AuthService {
    /// Exchanges a login and password for an access token whose `scope`
    /// claim carries the account's role name.
    #[instrument(skip(store, jwt_config, dto))]
    pub async fn login<S: AccountRepo>(
        store: &S,
        jwt_config: &JwtConfig,
        dto: LoginRequest,
    ) -> Result<LoginResponse, AppError> {
        if dto.login.trim().is_empty() {
            return Err(AppError::bad_request(anyhow::anyhow!(
                "Login must not be empty"
            )));
        }

        if dto.password.trim().is_empty() {
            return Err(AppError::bad_request(anyhow::anyhow!(
                "Password must not be empty"
            )));
        }

        let account = store
            .find_account_by_login(&dto.login)
            .await?
            .ok_or_else(|| AppError::unauthorized(anyhow::anyhow!("Incorrect user")))?;

        if !verify_password(&dto.password, &account.password)? {
            return Err(AppError::unauthorized(anyhow::anyhow!("Incorrect password")));
        }

        let access_token = create_access_token(&account, jwt_config)?;

        info!("account {} logged in", account.login);

        Ok(LoginResponse {
            access_token,
            expires_in: jwt_config.access_token_expiry,
        })
    }
}
