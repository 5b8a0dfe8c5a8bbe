use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::middleware::BearerToken;
use crate::modules::auth::controller::ErrorResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::validator::ValidatedJson;

use super::model::{AccountResponse, CreateAccountDto};
use super::service::AccountService;

/// Register a new login
#[utoipa::path(
    post,
    path = "/api/accounts",
    request_body = CreateAccountDto,
    responses(
        (status = 201, description = "Account created", body = AccountResponse),
        (status = 400, description = "Duplicate login or invalid payload", body = ErrorResponse),
        (status = 401, description = "Caller may not onboard accounts", body = ErrorResponse),
        (status = 404, description = "Unknown role name", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Accounts"
)]
pub async fn register_account(
    State(state): State<AppState>,
    token: BearerToken,
    ValidatedJson(dto): ValidatedJson<CreateAccountDto>,
) -> Result<(StatusCode, Json<AccountResponse>), AppError> {
    let account =
        AccountService::register(&state.store, &state.jwt_config, dto, token.as_str()).await?;
    Ok((StatusCode::CREATED, Json(account)))
}

/// Fetch an account by id
#[utoipa::path(
    get,
    path = "/api/accounts/{id}",
    params(("id" = i64, Path, description = "Account ID")),
    responses(
        (status = 200, description = "Account found", body = AccountResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Account not found", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Accounts"
)]
pub async fn get_account(
    State(state): State<AppState>,
    token: BearerToken,
    Path(id): Path<i64>,
) -> Result<Json<AccountResponse>, AppError> {
    let account =
        AccountService::get_by_id(&state.store, &state.jwt_config, id, token.as_str()).await?;
    Ok(Json(account))
}

/// Fetch the calling account
#[utoipa::path(
    get,
    path = "/api/accounts/me",
    responses(
        (status = 200, description = "Calling account", body = AccountResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Account no longer exists", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Accounts"
)]
pub async fn get_current_account(
    State(state): State<AppState>,
    token: BearerToken,
) -> Result<Json<AccountResponse>, AppError> {
    let account = AccountService::current(&state.store, &state.jwt_config, token.as_str()).await?;
    Ok(Json(account))
}
