mod common;

use common::{jwt_config, seed_student, seed_subject, seed_teacher, token_for};
use lectio::modules::accounts::model::Role;
use lectio::modules::grades::model::{CreateGradeDto, NewGrade, UpdateGradeDto};
use lectio::modules::grades::service::GradeService;
use lectio::store::GradeRepo;
use lectio::store::memory::MemStore;
use rust_decimal::Decimal;

fn dto(student: i64, teacher: i64, subject: i64, value: &str) -> CreateGradeDto {
    CreateGradeDto {
        student,
        teacher,
        subject,
        value: value.to_string(),
    }
}

async fn record_grade(store: &MemStore, student: i64, teacher: i64, subject: i64, value: &str) {
    store
        .insert_grade(NewGrade {
            student_id: student,
            teacher_id: teacher,
            subject_id: subject,
            value: value.to_string(),
        })
        .await
        .unwrap();
}

#[tokio::test]
async fn create_resolves_student_teacher_and_subject() {
    let store = MemStore::new();
    let jwt = jwt_config();
    let student = seed_student(&store, "Ana").await;
    let teacher = seed_teacher(&store, "Marie", Role::Teacher).await;
    let subject = seed_subject(&store, "SQL", None).await;

    let grade = GradeService::create(
        &store,
        &jwt,
        dto(student.id, teacher.id, subject.id, "8.5"),
        &token_for(Role::Teacher),
    )
    .await
    .unwrap();

    assert_eq!(grade.student_id, student.id);
    assert_eq!(grade.value, "8.5");

    for (s, t, m) in [
        (9999, teacher.id, subject.id),
        (student.id, 9999, subject.id),
        (student.id, teacher.id, 9999),
    ] {
        let err = GradeService::create(&store, &jwt, dto(s, t, m, "8.5"), &token_for(Role::Admin))
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }
}

#[tokio::test]
async fn create_is_denied_for_non_recording_roles() {
    let store = MemStore::new();
    let jwt = jwt_config();
    let student = seed_student(&store, "Ana").await;
    let teacher = seed_teacher(&store, "Marie", Role::Teacher).await;
    let subject = seed_subject(&store, "SQL", None).await;

    for role in [Role::Pedagogical, Role::Recruiter, Role::Student] {
        let err = GradeService::create(
            &store,
            &jwt,
            dto(student.id, teacher.id, subject.id, "8.5"),
            &token_for(role),
        )
        .await
        .unwrap_err();
        assert!(err.is_unauthorized());
    }

    assert!(store.list_grades().await.unwrap().is_empty());
}

#[tokio::test]
async fn create_rejects_non_decimal_values() {
    let store = MemStore::new();
    let jwt = jwt_config();
    let student = seed_student(&store, "Ana").await;
    let teacher = seed_teacher(&store, "Marie", Role::Teacher).await;
    let subject = seed_subject(&store, "SQL", None).await;

    for value in ["abc", "", "  ", "8,5"] {
        let err = GradeService::create(
            &store,
            &jwt,
            dto(student.id, teacher.id, subject.id, value),
            &token_for(Role::Admin),
        )
        .await
        .unwrap_err();
        assert!(err.is_bad_request());
    }
}

#[tokio::test]
async fn score_is_the_mean_of_all_grades() {
    let store = MemStore::new();
    let jwt = jwt_config();
    let student = seed_student(&store, "Ana").await;
    let teacher = seed_teacher(&store, "Marie", Role::Teacher).await;
    let subject = seed_subject(&store, "SQL", None).await;

    for value in ["10", "8", "9"] {
        record_grade(&store, student.id, teacher.id, subject.id, value).await;
    }

    let score = GradeService::compute_score(&store, &jwt, student.id, &token_for(Role::Admin))
        .await
        .unwrap();

    assert_eq!(score, Decimal::from(9));
}

#[tokio::test]
async fn score_keeps_decimal_precision() {
    let store = MemStore::new();
    let jwt = jwt_config();
    let student = seed_student(&store, "Ana").await;
    let teacher = seed_teacher(&store, "Marie", Role::Teacher).await;
    let subject = seed_subject(&store, "SQL", None).await;

    for value in ["8.5", "9.5"] {
        record_grade(&store, student.id, teacher.id, subject.id, value).await;
    }

    let score = GradeService::compute_score(&store, &jwt, student.id, &token_for(Role::Teacher))
        .await
        .unwrap();

    assert_eq!(score, "9".parse::<Decimal>().unwrap());
}

#[tokio::test]
async fn score_without_grades_is_not_found() {
    let store = MemStore::new();
    let jwt = jwt_config();
    let student = seed_student(&store, "Ana").await;

    let err = GradeService::compute_score(&store, &jwt, student.id, &token_for(Role::Admin))
        .await
        .unwrap_err();
    assert!(err.is_not_found());

    let err = GradeService::compute_score(&store, &jwt, 9999, &token_for(Role::Admin))
        .await
        .unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn students_may_read_scores_but_not_grade_listings() {
    let store = MemStore::new();
    let jwt = jwt_config();
    let student = seed_student(&store, "Ana").await;
    let teacher = seed_teacher(&store, "Marie", Role::Teacher).await;
    let subject = seed_subject(&store, "SQL", None).await;
    record_grade(&store, student.id, teacher.id, subject.id, "7").await;

    GradeService::compute_score(&store, &jwt, student.id, &token_for(Role::Student))
        .await
        .unwrap();

    let err = GradeService::list(&store, &jwt, &token_for(Role::Student))
        .await
        .unwrap_err();
    assert!(err.is_unauthorized());
}

#[tokio::test]
async fn listings_resolve_their_owner_and_reject_empty_results() {
    let store = MemStore::new();
    let jwt = jwt_config();
    let student = seed_student(&store, "Ana").await;
    let other = seed_student(&store, "Bruno").await;
    let teacher = seed_teacher(&store, "Marie", Role::Teacher).await;
    let subject = seed_subject(&store, "SQL", None).await;
    record_grade(&store, student.id, teacher.id, subject.id, "7").await;

    let grades =
        GradeService::list_by_student(&store, &jwt, student.id, &token_for(Role::Teacher))
            .await
            .unwrap();
    assert_eq!(grades.len(), 1);

    // Student exists but has no grades.
    let err = GradeService::list_by_student(&store, &jwt, other.id, &token_for(Role::Admin))
        .await
        .unwrap_err();
    assert!(err.is_not_found());

    // Unknown student.
    let err = GradeService::list_by_student(&store, &jwt, 9999, &token_for(Role::Admin))
        .await
        .unwrap_err();
    assert!(err.is_not_found());

    let grades =
        GradeService::list_by_teacher(&store, &jwt, teacher.id, &token_for(Role::Pedagogical))
            .await
            .unwrap();
    assert_eq!(grades.len(), 1);
}

#[tokio::test]
async fn update_replaces_the_value() {
    let store = MemStore::new();
    let jwt = jwt_config();
    let student = seed_student(&store, "Ana").await;
    let teacher = seed_teacher(&store, "Marie", Role::Teacher).await;
    let subject = seed_subject(&store, "SQL", None).await;
    record_grade(&store, student.id, teacher.id, subject.id, "7").await;

    let grade = store.list_grades().await.unwrap().pop().unwrap();

    let updated = GradeService::update(
        &store,
        &jwt,
        grade.id,
        UpdateGradeDto {
            value: "9.0".to_string(),
        },
        &token_for(Role::Teacher),
    )
    .await
    .unwrap();

    assert_eq!(updated.value, "9.0");

    let err = GradeService::update(
        &store,
        &jwt,
        grade.id,
        UpdateGradeDto {
            value: "not-a-number".to_string(),
        },
        &token_for(Role::Admin),
    )
    .await
    .unwrap_err();
    assert!(err.is_bad_request());
}

#[tokio::test]
async fn delete_is_admin_only_and_terminal() {
    let store = MemStore::new();
    let jwt = jwt_config();
    let student = seed_student(&store, "Ana").await;
    let teacher = seed_teacher(&store, "Marie", Role::Teacher).await;
    let subject = seed_subject(&store, "SQL", None).await;
    record_grade(&store, student.id, teacher.id, subject.id, "7").await;

    let grade = store.list_grades().await.unwrap().pop().unwrap();

    let err = GradeService::delete(&store, &jwt, grade.id, &token_for(Role::Teacher))
        .await
        .unwrap_err();
    assert!(err.is_unauthorized());

    GradeService::delete(&store, &jwt, grade.id, &token_for(Role::Admin))
        .await
        .unwrap();

    let err = GradeService::get_by_id(&store, &jwt, grade.id, &token_for(Role::Admin))
        .await
        .unwrap_err();
    assert!(err.is_not_found());
}
