use chrono::Utc;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use crate::config::jwt::JwtConfig;
use crate::modules::accounts::model::Account;
use crate::utils::errors::AppError;

/// Claims carried by every access token. `scope` holds the account's role
/// name and is the claim every manager reads before acting.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub scope: String,
    pub exp: usize,
    pub iat: usize,
}

pub fn create_access_token(account: &Account, jwt_config: &JwtConfig) -> Result<String, AppError> {
    let now = Utc::now().timestamp() as usize;
    let exp = now + jwt_config.access_token_expiry as usize;

    let claims = Claims {
        sub: account.id.to_string(),
        scope: account.role.name().to_string(),
        exp,
        iat: now,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(jwt_config.secret.as_bytes()),
    )
    .map_err(|e| AppError::internal(anyhow::anyhow!("Failed to create token: {}", e)))
}

pub fn verify_token(token: &str, jwt_config: &JwtConfig) -> Result<Claims, AppError> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(jwt_config.secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|_| AppError::unauthorized(anyhow::anyhow!("Invalid or expired token")))
}

/// Reads a single named claim from an already-issued token.
///
/// This is the sole authority the managers consult to learn who is calling
/// and in what role; a token that fails verification surfaces as a 401.
pub fn read_claim(token: &str, claim: &str, jwt_config: &JwtConfig) -> Result<String, AppError> {
    let claims = verify_token(token, jwt_config)?;

    match claim {
        "sub" => Ok(claims.sub),
        "scope" => Ok(claims.scope),
        other => Err(AppError::internal(anyhow::anyhow!(
            "Unknown claim: {}",
            other
        ))),
    }
}
