mod common;

use common::{jwt_config, seed_cohort, seed_course, seed_student, seed_subject, token_for};
use lectio::modules::accounts::model::Role;
use lectio::modules::courses::model::{CreateCourseDto, UpdateCourseDto};
use lectio::modules::courses::service::CourseService;
use lectio::modules::dashboard::service::DashboardService;
use lectio::modules::subjects::model::{CreateSubjectDto, UpdateSubjectDto};
use lectio::modules::subjects::service::SubjectService;
use lectio::store::CourseRepo;
use lectio::store::memory::MemStore;

#[tokio::test]
async fn listing_an_empty_course_registry_is_not_found() {
    let store = MemStore::new();
    let jwt = jwt_config();

    let err = CourseService::list(&store, &jwt, &token_for(Role::Admin))
        .await
        .unwrap_err();

    assert!(err.is_not_found());
}

#[tokio::test]
async fn course_create_then_get_round_trips() {
    let store = MemStore::new();
    let jwt = jwt_config();

    let created = CourseService::create(
        &store,
        &jwt,
        CreateCourseDto {
            name: "Backend Development".to_string(),
        },
        &token_for(Role::Pedagogical),
    )
    .await
    .unwrap();

    let fetched = CourseService::get_by_id(&store, &jwt, created.id, &token_for(Role::Admin))
        .await
        .unwrap();

    assert_eq!(fetched, created);
    assert_eq!(fetched.name, "Backend Development");
}

#[tokio::test]
async fn course_create_rejects_duplicate_and_blank_names() {
    let store = MemStore::new();
    let jwt = jwt_config();
    seed_course(&store, "Backend Development").await;

    let err = CourseService::create(
        &store,
        &jwt,
        CreateCourseDto {
            name: "Backend Development".to_string(),
        },
        &token_for(Role::Admin),
    )
    .await
    .unwrap_err();
    assert!(err.is_bad_request());

    let err = CourseService::create(
        &store,
        &jwt,
        CreateCourseDto {
            name: "   ".to_string(),
        },
        &token_for(Role::Admin),
    )
    .await
    .unwrap_err();
    assert!(err.is_bad_request());
}

#[tokio::test]
async fn course_create_denied_before_any_persistence() {
    let store = MemStore::new();
    let jwt = jwt_config();

    for role in [Role::Teacher, Role::Student, Role::Recruiter] {
        let err = CourseService::create(
            &store,
            &jwt,
            CreateCourseDto {
                name: "Backend Development".to_string(),
            },
            &token_for(role),
        )
        .await
        .unwrap_err();

        assert!(err.is_unauthorized());
    }

    assert!(store.list_courses().await.unwrap().is_empty());
}

#[tokio::test]
async fn course_update_may_keep_its_own_name() {
    let store = MemStore::new();
    let jwt = jwt_config();
    let course = seed_course(&store, "Backend Development").await;

    let updated = CourseService::update(
        &store,
        &jwt,
        course.id,
        UpdateCourseDto {
            name: "Backend Development".to_string(),
        },
        &token_for(Role::Admin),
    )
    .await
    .unwrap();

    assert_eq!(updated.name, "Backend Development");
}

#[tokio::test]
async fn course_delete_is_admin_only_and_terminal() {
    let store = MemStore::new();
    let jwt = jwt_config();
    let course = seed_course(&store, "Backend Development").await;

    let err = CourseService::delete(&store, &jwt, course.id, &token_for(Role::Pedagogical))
        .await
        .unwrap_err();
    assert!(err.is_unauthorized());

    CourseService::delete(&store, &jwt, course.id, &token_for(Role::Admin))
        .await
        .unwrap();

    let err = CourseService::get_by_id(&store, &jwt, course.id, &token_for(Role::Admin))
        .await
        .unwrap_err();
    assert!(err.is_not_found());

    let err = CourseService::delete(&store, &jwt, course.id, &token_for(Role::Admin))
        .await
        .unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn courses_by_student_follow_the_cohort() {
    let store = MemStore::new();
    let jwt = jwt_config();
    let student = seed_student(&store, "Ana").await;

    let courses =
        CourseService::list_by_student(&store, &jwt, student.id, &token_for(Role::Student))
            .await
            .unwrap();

    assert_eq!(courses.len(), 1);
    assert_eq!(courses[0].name, "Ana cohort course");

    let err = CourseService::list_by_student(&store, &jwt, 9999, &token_for(Role::Admin))
        .await
        .unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn subject_create_resolves_its_course() {
    let store = MemStore::new();
    let jwt = jwt_config();
    let course = seed_course(&store, "Backend Development").await;

    let subject = SubjectService::create(
        &store,
        &jwt,
        CreateSubjectDto {
            name: "SQL".to_string(),
            course: Some(course.id),
        },
        &token_for(Role::Pedagogical),
    )
    .await
    .unwrap();

    assert_eq!(subject.course_id, Some(course.id));

    let err = SubjectService::create(
        &store,
        &jwt,
        CreateSubjectDto {
            name: "NoSQL".to_string(),
            course: Some(4321),
        },
        &token_for(Role::Pedagogical),
    )
    .await
    .unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn subjects_by_course_fails_on_empty_result() {
    let store = MemStore::new();
    let jwt = jwt_config();
    let course = seed_course(&store, "Backend Development").await;
    let other = seed_course(&store, "Frontend Development").await;
    seed_subject(&store, "SQL", Some(course.id)).await;

    let subjects =
        SubjectService::list_by_course(&store, &jwt, course.id, &token_for(Role::Admin))
            .await
            .unwrap();
    assert_eq!(subjects.len(), 1);

    let err = SubjectService::list_by_course(&store, &jwt, other.id, &token_for(Role::Admin))
        .await
        .unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn subject_update_can_detach_from_its_course() {
    let store = MemStore::new();
    let jwt = jwt_config();
    let course = seed_course(&store, "Backend Development").await;
    let subject = seed_subject(&store, "SQL", Some(course.id)).await;

    let updated = SubjectService::update(
        &store,
        &jwt,
        subject.id,
        UpdateSubjectDto {
            name: "Advanced SQL".to_string(),
            course: None,
        },
        &token_for(Role::Admin),
    )
    .await
    .unwrap();

    assert_eq!(updated.name, "Advanced SQL");
    assert_eq!(updated.course_id, None);
}

#[tokio::test]
async fn dashboard_is_admin_only() {
    let store = MemStore::new();
    let jwt = jwt_config();

    for role in [Role::Pedagogical, Role::Recruiter, Role::Teacher, Role::Student] {
        let err = DashboardService::summary(&store, &jwt, &token_for(role))
            .await
            .unwrap_err();
        assert!(err.is_unauthorized());
    }
}

#[tokio::test]
async fn dashboard_counts_students_teachers_and_cohorts() {
    let store = MemStore::new();
    let jwt = jwt_config();

    // One student drags in a cohort, which drags in a teacher.
    let cohort = seed_cohort(&store, "Night class").await;
    common::seed_student_in_cohort(&store, "Ana", cohort.id).await;
    common::seed_student_in_cohort(&store, "Bruno", cohort.id).await;

    let summary = DashboardService::summary(&store, &jwt, &token_for(Role::Admin))
        .await
        .unwrap();

    assert_eq!(summary.students, 2);
    assert_eq!(summary.teachers, 1);
    assert_eq!(summary.cohorts, 1);
}
