use axum::{
    Router,
    routing::{get, post},
};

use crate::modules::subjects::controller::{
    create_subject, delete_subject, get_subject, list_subjects, list_subjects_by_course,
    update_subject,
};
use crate::state::AppState;

pub fn init_subjects_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_subject).get(list_subjects))
        .route("/courses/{course_id}", get(list_subjects_by_course))
        .route(
            "/{id}",
            get(get_subject).put(update_subject).delete(delete_subject),
        )
}
