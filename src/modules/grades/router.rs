use axum::{
    Router,
    routing::{get, post},
};

use crate::modules::grades::controller::{
    create_grade, delete_grade, get_grade, get_student_score, list_grades, list_grades_by_student,
    list_grades_by_teacher, update_grade,
};
use crate::state::AppState;

pub fn init_grades_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_grade).get(list_grades))
        .route("/students/{student_id}", get(list_grades_by_student))
        .route("/students/{student_id}/score", get(get_student_score))
        .route("/teachers/{teacher_id}", get(list_grades_by_teacher))
        .route(
            "/{id}",
            get(get_grade).put(update_grade).delete(delete_grade),
        )
}
