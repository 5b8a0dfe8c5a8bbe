//! Per-operation authorization.
//!
//! Each service declares its operations' allowed roles as `const` slices and
//! funnels every check through [`require_role`], so the permission table for
//! an operation lives next to the operation instead of being repeated as ad
//! hoc string comparisons.

use tracing::error;

use crate::config::jwt::JwtConfig;
use crate::modules::accounts::model::Role;
use crate::utils::errors::AppError;
use crate::utils::jwt::read_claim;

/// Resolves the caller's role from the token's `scope` claim.
///
/// A token that fails verification is an authentication failure; a scope
/// outside the closed role set is treated the same way.
pub fn caller_role(jwt_config: &JwtConfig, token: &str) -> Result<Role, AppError> {
    let scope = read_claim(token, "scope", jwt_config)?;

    Role::from_name(&scope).ok_or_else(|| {
        error!("token carries unknown role: {}", scope);
        AppError::unauthorized(anyhow::anyhow!("User is not authorized"))
    })
}

/// Resolves the caller's role and checks it against an operation's allow-list.
///
/// Runs before any repository access, so a denied caller never causes a side
/// effect.
pub fn require_role(
    jwt_config: &JwtConfig,
    token: &str,
    allowed: &[Role],
) -> Result<Role, AppError> {
    let role = caller_role(jwt_config, token)?;

    if !allowed.contains(&role) {
        error!("caller role {} is not allowed for this operation", role);
        return Err(AppError::unauthorized(anyhow::anyhow!(
            "User is not authorized"
        )));
    }

    Ok(role)
}
