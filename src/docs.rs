use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::modules::accounts::model::{AccountResponse, CreateAccountDto, Role};
use crate::modules::auth::controller::ErrorResponse;
use crate::modules::auth::model::{LoginRequest, LoginResponse};
use crate::modules::cohorts::model::{Cohort, CohortDetails, CreateCohortDto, UpdateCohortDto};
use crate::modules::courses::model::{Course, CreateCourseDto, UpdateCourseDto};
use crate::modules::dashboard::model::DashboardResponse;
use crate::modules::grades::model::{CreateGradeDto, Grade, ScoreResponse, UpdateGradeDto};
use crate::modules::students::model::{
    CreateStudentDto, Student, StudentResponse, UpdateStudentDto,
};
use crate::modules::subjects::model::{CreateSubjectDto, Subject, UpdateSubjectDto};
use crate::modules::teachers::model::{
    CreateTeacherDto, Teacher, TeacherResponse, UpdateTeacherDto,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::auth::controller::login,
        crate::modules::accounts::controller::register_account,
        crate::modules::accounts::controller::get_account,
        crate::modules::accounts::controller::get_current_account,
        crate::modules::courses::controller::list_courses,
        crate::modules::courses::controller::get_course,
        crate::modules::courses::controller::list_courses_by_student,
        crate::modules::courses::controller::create_course,
        crate::modules::courses::controller::update_course,
        crate::modules::courses::controller::delete_course,
        crate::modules::subjects::controller::list_subjects,
        crate::modules::subjects::controller::get_subject,
        crate::modules::subjects::controller::list_subjects_by_course,
        crate::modules::subjects::controller::create_subject,
        crate::modules::subjects::controller::update_subject,
        crate::modules::subjects::controller::delete_subject,
        crate::modules::cohorts::controller::list_cohorts,
        crate::modules::cohorts::controller::get_cohort,
        crate::modules::cohorts::controller::create_cohort,
        crate::modules::cohorts::controller::update_cohort,
        crate::modules::cohorts::controller::delete_cohort,
        crate::modules::students::controller::list_students,
        crate::modules::students::controller::get_student,
        crate::modules::students::controller::create_student,
        crate::modules::students::controller::update_student,
        crate::modules::students::controller::delete_student,
        crate::modules::teachers::controller::list_teachers,
        crate::modules::teachers::controller::get_teacher,
        crate::modules::teachers::controller::create_teacher,
        crate::modules::teachers::controller::update_teacher,
        crate::modules::teachers::controller::delete_teacher,
        crate::modules::grades::controller::list_grades,
        crate::modules::grades::controller::get_grade,
        crate::modules::grades::controller::list_grades_by_student,
        crate::modules::grades::controller::get_student_score,
        crate::modules::grades::controller::list_grades_by_teacher,
        crate::modules::grades::controller::create_grade,
        crate::modules::grades::controller::update_grade,
        crate::modules::grades::controller::delete_grade,
        crate::modules::dashboard::controller::get_dashboard,
    ),
    components(
        schemas(
            Role,
            AccountResponse,
            CreateAccountDto,
            LoginRequest,
            LoginResponse,
            ErrorResponse,
            Course,
            CreateCourseDto,
            UpdateCourseDto,
            Subject,
            CreateSubjectDto,
            UpdateSubjectDto,
            Cohort,
            CohortDetails,
            CreateCohortDto,
            UpdateCohortDto,
            Student,
            StudentResponse,
            CreateStudentDto,
            UpdateStudentDto,
            Teacher,
            TeacherResponse,
            CreateTeacherDto,
            UpdateTeacherDto,
            Grade,
            CreateGradeDto,
            UpdateGradeDto,
            ScoreResponse,
            DashboardResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Auth", description = "Token issuance"),
        (name = "Accounts", description = "Login account management"),
        (name = "Courses", description = "Course catalog"),
        (name = "Subjects", description = "Subject catalog"),
        (name = "Cohorts", description = "Class cohorts"),
        (name = "Students", description = "Student management"),
        (name = "Teachers", description = "Teacher management"),
        (name = "Grades", description = "Grades and scores"),
        (name = "Dashboard", description = "Admin summary"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}
