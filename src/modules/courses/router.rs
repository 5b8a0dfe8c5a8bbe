use axum::{
    Router,
    routing::{get, post},
};

use crate::modules::courses::controller::{
    create_course, delete_course, get_course, list_courses, list_courses_by_student, update_course,
};
use crate::state::AppState;

pub fn init_courses_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_course).get(list_courses))
        .route("/students/{student_id}", get(list_courses_by_student))
        .route(
            "/{id}",
            get(get_course).put(update_course).delete(delete_course),
        )
}
