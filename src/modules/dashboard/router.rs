use axum::{Router, routing::get};

use crate::modules::dashboard::controller::get_dashboard;
use crate::state::AppState;

pub fn init_dashboard_router() -> Router<AppState> {
    Router::new().route("/", get(get_dashboard))
}
