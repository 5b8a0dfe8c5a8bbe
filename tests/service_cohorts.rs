mod common;

use common::{date, jwt_config, seed_cohort, seed_course, seed_student_in_cohort, seed_teacher, token_for};
use lectio::modules::accounts::model::Role;
use lectio::modules::cohorts::model::{CreateCohortDto, UpdateCohortDto};
use lectio::modules::cohorts::service::CohortService;
use lectio::store::memory::MemStore;
use lectio::store::{AccountRepo, CohortRepo};

fn dto(name: &str, teacher: i64, course: i64) -> CreateCohortDto {
    CreateCohortDto {
        name: name.to_string(),
        teacher,
        course,
        start_date: date(2025, 2, 3),
        end_date: date(2025, 11, 28),
        schedule: "Mon-Wed 19:00".to_string(),
    }
}

#[tokio::test]
async fn create_binds_course_and_professor() {
    let store = MemStore::new();
    let jwt = jwt_config();
    let course = seed_course(&store, "Backend Development").await;
    let teacher = seed_teacher(&store, "Marie", Role::Teacher).await;

    let cohort = CohortService::create(
        &store,
        &jwt,
        dto("2025 evening", teacher.id, course.id),
        &token_for(Role::Pedagogical),
    )
    .await
    .unwrap();

    assert_eq!(cohort.teacher_id, teacher.id);
    assert_eq!(cohort.course_id, course.id);
    assert_eq!(cohort.schedule, "Mon-Wed 19:00");
}

#[tokio::test]
async fn professors_may_create_cohorts_students_may_not() {
    let store = MemStore::new();
    let jwt = jwt_config();
    let course = seed_course(&store, "Backend Development").await;
    let teacher = seed_teacher(&store, "Marie", Role::Teacher).await;

    CohortService::create(
        &store,
        &jwt,
        dto("2025 evening", teacher.id, course.id),
        &token_for(Role::Teacher),
    )
    .await
    .unwrap();

    let err = CohortService::create(
        &store,
        &jwt,
        dto("2025 morning", teacher.id, course.id),
        &token_for(Role::Student),
    )
    .await
    .unwrap_err();
    assert!(err.is_unauthorized());

    assert_eq!(store.list_cohorts().await.unwrap().len(), 1);
}

#[tokio::test]
async fn create_rejects_teacher_without_professor_account() {
    let store = MemStore::new();
    let jwt = jwt_config();
    let course = seed_course(&store, "Backend Development").await;
    // Teacher row exists, but its account was demoted to a student login.
    let teacher = seed_teacher(&store, "Marie", Role::Student).await;

    let err = CohortService::create(
        &store,
        &jwt,
        dto("2025 evening", teacher.id, course.id),
        &token_for(Role::Admin),
    )
    .await
    .unwrap_err();

    assert!(err.is_bad_request());
    assert!(store.list_cohorts().await.unwrap().is_empty());
}

#[tokio::test]
async fn create_resolves_course_and_teacher_first() {
    let store = MemStore::new();
    let jwt = jwt_config();
    let course = seed_course(&store, "Backend Development").await;
    let teacher = seed_teacher(&store, "Marie", Role::Teacher).await;

    let err = CohortService::create(
        &store,
        &jwt,
        dto("2025 evening", teacher.id, 999),
        &token_for(Role::Admin),
    )
    .await
    .unwrap_err();
    assert!(err.is_not_found());

    let err = CohortService::create(
        &store,
        &jwt,
        dto("2025 evening", 999, course.id),
        &token_for(Role::Admin),
    )
    .await
    .unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn create_rejects_duplicate_name() {
    let store = MemStore::new();
    let jwt = jwt_config();
    let cohort = seed_cohort(&store, "2025 evening").await;

    let err = CohortService::create(
        &store,
        &jwt,
        dto("2025 evening", cohort.teacher_id, cohort.course_id),
        &token_for(Role::Admin),
    )
    .await
    .unwrap_err();

    assert!(err.is_bad_request());
}

#[tokio::test]
async fn get_by_id_includes_enrolled_students() {
    let store = MemStore::new();
    let jwt = jwt_config();
    let cohort = seed_cohort(&store, "2025 evening").await;
    seed_student_in_cohort(&store, "Ana", cohort.id).await;
    seed_student_in_cohort(&store, "Bruno", cohort.id).await;

    let details = CohortService::get_by_id(&store, &jwt, cohort.id, &token_for(Role::Admin))
        .await
        .unwrap();

    assert_eq!(details.name, "2025 evening");
    assert_eq!(details.students.len(), 2);

    let names: Vec<&str> = details.students.iter().map(|s| s.name.as_str()).collect();
    assert!(names.contains(&"Ana"));
    assert!(names.contains(&"Bruno"));
}

#[tokio::test]
async fn update_revalidates_the_teacher_account_role() {
    let store = MemStore::new();
    let jwt = jwt_config();
    let cohort = seed_cohort(&store, "2025 evening").await;

    // Demote the referenced teacher's account, then try to re-save.
    let teacher = lectio::store::TeacherRepo::find_teacher(&store, cohort.teacher_id)
        .await
        .unwrap()
        .unwrap();
    let mut account = store.find_account(teacher.account_id).await.unwrap().unwrap();
    account.role = Role::Student;
    store.update_account(&account).await.unwrap();

    let err = CohortService::update(
        &store,
        &jwt,
        cohort.id,
        UpdateCohortDto {
            name: "2025 evening".to_string(),
            teacher: cohort.teacher_id,
            course: cohort.course_id,
            start_date: cohort.start_date,
            end_date: cohort.end_date,
            schedule: "Tue-Thu 20:00".to_string(),
        },
        &token_for(Role::Pedagogical),
    )
    .await
    .unwrap_err();

    assert!(err.is_bad_request());

    // Nothing was saved.
    let unchanged = store.find_cohort(cohort.id).await.unwrap().unwrap();
    assert_eq!(unchanged.schedule, cohort.schedule);
}

#[tokio::test]
async fn delete_is_admin_only() {
    let store = MemStore::new();
    let jwt = jwt_config();
    let cohort = seed_cohort(&store, "2025 evening").await;

    let err = CohortService::delete(&store, &jwt, cohort.id, &token_for(Role::Pedagogical))
        .await
        .unwrap_err();
    assert!(err.is_unauthorized());

    CohortService::delete(&store, &jwt, cohort.id, &token_for(Role::Admin))
        .await
        .unwrap();

    let err = CohortService::get_by_id(&store, &jwt, cohort.id, &token_for(Role::Admin))
        .await
        .unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn empty_listing_is_not_found() {
    let store = MemStore::new();
    let jwt = jwt_config();

    let err = CohortService::list(&store, &jwt, &token_for(Role::Pedagogical))
        .await
        .unwrap_err();

    assert!(err.is_not_found());
}
