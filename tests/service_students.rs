mod common;

use common::{
    create_student_dto, jwt_config, seed_cohort, seed_student, token_for, update_student_dto,
};
use lectio::modules::accounts::model::Role;
use lectio::modules::students::service::StudentService;
use lectio::store::memory::MemStore;
use lectio::store::{AccountRepo, StudentRepo};
use lectio::utils::password::verify_password;

#[tokio::test]
async fn create_links_cohort_and_a_student_account() {
    let store = MemStore::new();
    let jwt = jwt_config();
    let cohort = seed_cohort(&store, "Night class").await;

    let response = StudentService::create(
        &store,
        &jwt,
        create_student_dto("Ana Souza", "ana@students.example.com", cohort.id),
        &token_for(Role::Pedagogical),
    )
    .await
    .unwrap();

    assert_eq!(response.name, "Ana Souza");
    assert_eq!(response.cohort.id, cohort.id);
    assert_eq!(response.account.role, Role::Student);
    assert_eq!(response.account.login, "ana@students.example.com");

    // The account stores a hash of the submitted secret.
    let account = store.find_account(response.account.id).await.unwrap().unwrap();
    assert!(verify_password("student-secret", &account.password).unwrap());
}

#[tokio::test]
async fn create_then_get_round_trips_the_request_fields() {
    let store = MemStore::new();
    let jwt = jwt_config();
    let cohort = seed_cohort(&store, "Night class").await;
    let dto = create_student_dto("Ana Souza", "ana@students.example.com", cohort.id);

    let response = StudentService::create(&store, &jwt, dto, &token_for(Role::Admin))
        .await
        .unwrap();

    let student = StudentService::get_by_id(&store, &jwt, response.id, &token_for(Role::Admin))
        .await
        .unwrap();

    assert_eq!(student.name, "Ana Souza");
    assert_eq!(student.email, "ana@students.example.com");
    assert_eq!(student.birth_date, common::date(2003, 5, 2));
    assert_eq!(student.gender.as_deref(), Some("M"));
    assert_eq!(student.cpf.as_deref(), Some("111.222.333-44"));
    assert_eq!(student.rg.as_deref(), Some("998877"));
    assert_eq!(student.marital_status.as_deref(), Some("single"));
    assert_eq!(student.phone.as_deref(), Some("5511988887777"));
    assert_eq!(student.birthplace.as_deref(), Some("Curitiba"));
    assert_eq!(student.cohort_id, cohort.id);
}

#[tokio::test]
async fn create_rejects_duplicate_name() {
    let store = MemStore::new();
    let jwt = jwt_config();
    let cohort = seed_cohort(&store, "Night class").await;
    common::seed_student_in_cohort(&store, "Ana Souza", cohort.id).await;

    let err = StudentService::create(
        &store,
        &jwt,
        create_student_dto("Ana Souza", "other@students.example.com", cohort.id),
        &token_for(Role::Admin),
    )
    .await
    .unwrap_err();

    assert!(err.is_bad_request());
}

#[tokio::test]
async fn create_requires_an_existing_cohort() {
    let store = MemStore::new();
    let jwt = jwt_config();

    let err = StudentService::create(
        &store,
        &jwt,
        create_student_dto("Ana Souza", "ana@students.example.com", 77),
        &token_for(Role::Admin),
    )
    .await
    .unwrap_err();

    assert!(err.is_not_found());
    // No orphan account was left behind.
    assert_eq!(store.account_count(), 0);
}

#[tokio::test]
async fn create_denied_roles_cause_no_side_effects() {
    let store = MemStore::new();
    let jwt = jwt_config();
    let cohort = seed_cohort(&store, "Night class").await;
    let accounts_before = store.account_count();

    for role in [Role::Recruiter, Role::Teacher, Role::Student] {
        let err = StudentService::create(
            &store,
            &jwt,
            create_student_dto("Ana Souza", "ana@students.example.com", cohort.id),
            &token_for(role),
        )
        .await
        .unwrap_err();

        assert!(err.is_unauthorized());
    }

    assert!(store.list_students().await.unwrap().is_empty());
    assert_eq!(store.account_count(), accounts_before);
}

#[tokio::test]
async fn update_rewrites_student_and_account_in_lockstep() {
    let store = MemStore::new();
    let jwt = jwt_config();
    let student = seed_student(&store, "Ana Souza").await;

    let updated = StudentService::update(
        &store,
        &jwt,
        student.id,
        update_student_dto("Ana S. Lima", "ana.lima@students.example.com", student.cohort_id),
        &token_for(Role::Pedagogical),
    )
    .await
    .unwrap();

    assert_eq!(updated.name, "Ana S. Lima");
    assert_eq!(updated.id, student.id);

    let account = store.find_account(student.account_id).await.unwrap().unwrap();
    assert_eq!(account.login, "ana.lima@students.example.com");
    assert!(verify_password("rotated-secret", &account.password).unwrap());
}

#[tokio::test]
async fn update_requires_an_existing_cohort() {
    let store = MemStore::new();
    let jwt = jwt_config();
    let student = seed_student(&store, "Ana Souza").await;

    let err = StudentService::update(
        &store,
        &jwt,
        student.id,
        update_student_dto("Ana Souza", "ana@students.example.com", 1234),
        &token_for(Role::Admin),
    )
    .await
    .unwrap_err();

    assert!(err.is_not_found());
}

#[tokio::test]
async fn delete_cascades_to_exactly_one_account() {
    let store = MemStore::new();
    let jwt = jwt_config();
    let student = seed_student(&store, "Ana Souza").await;
    let accounts_before = store.account_count();

    StudentService::delete(&store, &jwt, student.id, &token_for(Role::Admin))
        .await
        .unwrap();

    // Student row and its account are both gone; nothing else was touched.
    assert!(store.find_student(student.id).await.unwrap().is_none());
    assert!(store.find_account(student.account_id).await.unwrap().is_none());
    assert_eq!(store.account_count(), accounts_before - 1);

    let err = StudentService::get_by_id(&store, &jwt, student.id, &token_for(Role::Admin))
        .await
        .unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn delete_is_admin_only() {
    let store = MemStore::new();
    let jwt = jwt_config();
    let student = seed_student(&store, "Ana Souza").await;

    let err = StudentService::delete(&store, &jwt, student.id, &token_for(Role::Pedagogical))
        .await
        .unwrap_err();

    assert!(err.is_unauthorized());
    assert!(store.find_student(student.id).await.unwrap().is_some());
}

#[tokio::test]
async fn delete_missing_student_is_not_found() {
    let store = MemStore::new();
    let jwt = jwt_config();

    let err = StudentService::delete(&store, &jwt, 404, &token_for(Role::Admin))
        .await
        .unwrap_err();

    assert!(err.is_not_found());
}

#[tokio::test]
async fn empty_listing_is_not_found() {
    let store = MemStore::new();
    let jwt = jwt_config();

    let err = StudentService::list(&store, &jwt, &token_for(Role::Admin))
        .await
        .unwrap_err();

    assert!(err.is_not_found());
}
