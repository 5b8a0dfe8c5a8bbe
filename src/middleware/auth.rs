use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};

use crate::utils::errors::AppError;

/// Extractor that pulls the raw bearer token out of the `Authorization`
/// header. It deliberately does not verify the token: every manager reads
/// and verifies the claims itself before acting, so verification failures
/// surface from the operation, not the transport.
#[derive(Debug, Clone)]
pub struct BearerToken(pub String);

impl BearerToken {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl<S> FromRequestParts<S> for BearerToken
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| {
                AppError::unauthorized(anyhow::anyhow!("Missing authorization header"))
            })?;

        let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
            AppError::unauthorized(anyhow::anyhow!("Invalid authorization header format"))
        })?;

        Ok(BearerToken(token.to_string()))
    }
}
