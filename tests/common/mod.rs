#![allow(dead_code)]

use chrono::NaiveDate;
use lectio::config::jwt::JwtConfig;
use lectio::modules::accounts::model::{Account, NewAccount, Role};
use lectio::modules::cohorts::model::{Cohort, NewCohort};
use lectio::modules::courses::model::Course;
use lectio::modules::students::model::{CreateStudentDto, NewStudent, Student, UpdateStudentDto};
use lectio::modules::subjects::model::{NewSubject, Subject};
use lectio::modules::teachers::model::{CreateTeacherDto, NewTeacher, Teacher};
use lectio::store::memory::MemStore;
use lectio::store::{
    AccountRepo, CohortRepo, CourseRepo, StudentRepo, SubjectRepo, TeacherRepo,
};
use lectio::utils::jwt::create_access_token;
use lectio::utils::password::hash_password;

/// Password used by every seeded account.
pub const SEED_PASSWORD: &str = "pass1234";

pub fn jwt_config() -> JwtConfig {
    JwtConfig {
        secret: "test_secret_key_for_testing_purposes".to_string(),
        access_token_expiry: 3600,
    }
}

/// Mints a token for an ad hoc caller holding the given role.
pub fn token_for(role: Role) -> String {
    let account = Account {
        id: 999,
        login: "caller".to_string(),
        password: "unused".to_string(),
        role,
    };
    create_access_token(&account, &jwt_config()).unwrap()
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub async fn seed_account(store: &MemStore, login: &str, role: Role) -> Account {
    let hashed = hash_password(SEED_PASSWORD).unwrap();
    store
        .insert_account(NewAccount {
            login: login.to_string(),
            password: hashed,
            role,
        })
        .await
        .unwrap()
}

pub async fn seed_course(store: &MemStore, name: &str) -> Course {
    store.insert_course(name).await.unwrap()
}

pub async fn seed_subject(store: &MemStore, name: &str, course_id: Option<i64>) -> Subject {
    store
        .insert_subject(NewSubject {
            name: name.to_string(),
            course_id,
        })
        .await
        .unwrap()
}

/// Seeds a teacher whose linked account holds the given role (pass
/// something other than `Role::Teacher` to simulate a demoted account).
pub async fn seed_teacher(store: &MemStore, name: &str, account_role: Role) -> Teacher {
    let email = format!("{}@faculty.example.com", name.replace(' ', ".").to_lowercase());
    let account = seed_account(store, &email, account_role).await;

    store
        .insert_teacher(NewTeacher {
            name: name.to_string(),
            email,
            birth_date: date(1980, 3, 14),
            gender: "F".to_string(),
            cpf: format!("{}-cpf", name),
            rg: "12345678".to_string(),
            marital_status: "single".to_string(),
            phone: "5511999990000".to_string(),
            birthplace: "Sao Paulo".to_string(),
            postal_code: None,
            city: None,
            state: None,
            street: None,
            number: None,
            complement: None,
            district: None,
            reference_point: None,
            subjects: vec!["Programming".to_string()],
            registered_on: date(2024, 1, 10),
            account_id: account.id,
        })
        .await
        .unwrap()
}

/// Seeds a cohort together with the course and professor it references.
pub async fn seed_cohort(store: &MemStore, name: &str) -> Cohort {
    let course = seed_course(store, &format!("{} course", name)).await;
    let teacher = seed_teacher(store, &format!("{} teacher", name), Role::Teacher).await;

    store
        .insert_cohort(NewCohort {
            name: name.to_string(),
            teacher_id: teacher.id,
            course_id: course.id,
            start_date: date(2025, 2, 3),
            end_date: date(2025, 11, 28),
            schedule: "Mon-Fri 19:00".to_string(),
        })
        .await
        .unwrap()
}

/// Seeds a student with its own cohort and account.
pub async fn seed_student(store: &MemStore, name: &str) -> Student {
    let cohort = seed_cohort(store, &format!("{} cohort", name)).await;
    seed_student_in_cohort(store, name, cohort.id).await
}

pub async fn seed_student_in_cohort(store: &MemStore, name: &str, cohort_id: i64) -> Student {
    let email = format!("{}@students.example.com", name.replace(' ', ".").to_lowercase());
    let account = seed_account(store, &email, Role::Student).await;

    store
        .insert_student(NewStudent {
            name: name.to_string(),
            email,
            birth_date: date(2002, 7, 21),
            gender: None,
            cpf: None,
            rg: None,
            marital_status: None,
            phone: None,
            birthplace: None,
            postal_code: None,
            street: None,
            number: None,
            complement: None,
            district: None,
            reference_point: None,
            account_id: account.id,
            cohort_id,
        })
        .await
        .unwrap()
}

pub fn create_student_dto(name: &str, email: &str, cohort: i64) -> CreateStudentDto {
    CreateStudentDto {
        name: name.to_string(),
        email: email.to_string(),
        password: "student-secret".to_string(),
        birth_date: date(2003, 5, 2),
        gender: Some("M".to_string()),
        cpf: Some("111.222.333-44".to_string()),
        rg: Some("998877".to_string()),
        marital_status: Some("single".to_string()),
        phone: Some("5511988887777".to_string()),
        birthplace: Some("Curitiba".to_string()),
        postal_code: None,
        street: None,
        number: None,
        complement: None,
        district: None,
        reference_point: None,
        cohort,
    }
}

pub fn update_student_dto(name: &str, email: &str, cohort: i64) -> UpdateStudentDto {
    UpdateStudentDto {
        name: name.to_string(),
        email: email.to_string(),
        password: "rotated-secret".to_string(),
        birth_date: date(2003, 5, 2),
        gender: Some("M".to_string()),
        cpf: Some("111.222.333-44".to_string()),
        rg: Some("998877".to_string()),
        marital_status: Some("single".to_string()),
        phone: Some("5511988887777".to_string()),
        birthplace: Some("Curitiba".to_string()),
        postal_code: None,
        street: None,
        number: None,
        complement: None,
        district: None,
        reference_point: None,
        cohort,
    }
}

pub fn create_teacher_dto(name: &str, email: &str) -> CreateTeacherDto {
    CreateTeacherDto {
        name: name.to_string(),
        email: email.to_string(),
        password: "teacher-secret".to_string(),
        birth_date: date(1985, 9, 30),
        gender: "M".to_string(),
        cpf: format!("{}-cpf", name),
        rg: "445566".to_string(),
        marital_status: "married".to_string(),
        phone: "5511977776666".to_string(),
        birthplace: "Recife".to_string(),
        postal_code: Some("01310-100".to_string()),
        city: Some("Sao Paulo".to_string()),
        state: Some("SP".to_string()),
        street: None,
        number: None,
        complement: None,
        district: None,
        reference_point: None,
        subjects: vec!["Databases".to_string(), "Algorithms".to_string()],
    }
}
