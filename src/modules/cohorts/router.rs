use axum::{
    Router,
    routing::{get, post},
};

use crate::modules::cohorts::controller::{
    create_cohort, delete_cohort, get_cohort, list_cohorts, update_cohort,
};
use crate::state::AppState;

pub fn init_cohorts_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_cohort).get(list_cohorts))
        .route(
            "/{id}",
            get(get_cohort).put(update_cohort).delete(delete_cohort),
        )
}
