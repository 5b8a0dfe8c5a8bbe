use axum::{
    Router,
    routing::{get, post},
};

use crate::modules::accounts::controller::{get_account, get_current_account, register_account};
use crate::state::AppState;

pub fn init_accounts_router() -> Router<AppState> {
    Router::new()
        .route("/", post(register_account))
        .route("/me", get(get_current_account))
        .route("/{id}", get(get_account))
}
