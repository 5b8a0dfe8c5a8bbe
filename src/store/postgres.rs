//! PostgreSQL implementation of the repository traits.
//!
//! Queries use the runtime-checked sqlx API. Uniqueness is validated by the
//! services before insert; the unique indexes remain as a backstop and map
//! to a 400 if a race slips through.

use anyhow::Context;
use sqlx::{FromRow, PgPool};

use crate::modules::accounts::model::{Account, NewAccount, Role};
use crate::modules::cohorts::model::{Cohort, NewCohort};
use crate::modules::courses::model::Course;
use crate::modules::grades::model::{Grade, NewGrade};
use crate::modules::students::model::{NewStudent, Student};
use crate::modules::subjects::model::{NewSubject, Subject};
use crate::modules::teachers::model::{NewTeacher, Teacher};
use crate::store::{
    AccountRepo, CohortRepo, CourseRepo, GradeRepo, StudentRepo, SubjectRepo, TeacherRepo,
};
use crate::utils::errors::AppError;

#[derive(Clone, Debug)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Accounts store the role as its wire name; rows decode through this struct
/// so an unknown name in the column surfaces as an internal error instead of
/// a deserialization panic.
#[derive(FromRow)]
struct AccountRow {
    id: i64,
    login: String,
    password: String,
    role: String,
}

impl AccountRow {
    fn into_account(self) -> Result<Account, AppError> {
        let role = Role::from_name(&self.role).ok_or_else(|| {
            AppError::internal(anyhow::anyhow!("Unknown role stored: {}", self.role))
        })?;

        Ok(Account {
            id: self.id,
            login: self.login,
            password: self.password,
            role,
        })
    }
}

fn map_unique_violation(e: sqlx::Error, message: &str) -> AppError {
    if let sqlx::Error::Database(db_err) = &e {
        if db_err.is_unique_violation() {
            return AppError::bad_request(anyhow::anyhow!("{}", message));
        }
    }
    AppError::database(anyhow::Error::from(e))
}

impl AccountRepo for PgStore {
    async fn find_account(&self, id: i64) -> Result<Option<Account>, AppError> {
        sqlx::query_as::<_, AccountRow>("SELECT id, login, password, role FROM accounts WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .context("Failed to fetch account by id")
            .map_err(AppError::database)?
            .map(AccountRow::into_account)
            .transpose()
    }

    async fn find_account_by_login(&self, login: &str) -> Result<Option<Account>, AppError> {
        sqlx::query_as::<_, AccountRow>(
            "SELECT id, login, password, role FROM accounts WHERE login = $1",
        )
        .bind(login)
        .fetch_optional(&self.pool)
        .await
        .context("Failed to fetch account by login")
        .map_err(AppError::database)?
        .map(AccountRow::into_account)
        .transpose()
    }

    async fn insert_account(&self, account: NewAccount) -> Result<Account, AppError> {
        sqlx::query_as::<_, AccountRow>(
            "INSERT INTO accounts (login, password, role)
             VALUES ($1, $2, $3)
             RETURNING id, login, password, role",
        )
        .bind(&account.login)
        .bind(&account.password)
        .bind(account.role.name())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, "An account already exists with the given login"))?
        .into_account()
    }

    async fn update_account(&self, account: &Account) -> Result<(), AppError> {
        sqlx::query("UPDATE accounts SET login = $1, password = $2, role = $3 WHERE id = $4")
            .bind(&account.login)
            .bind(&account.password)
            .bind(account.role.name())
            .bind(account.id)
            .execute(&self.pool)
            .await
            .map_err(|e| map_unique_violation(e, "An account already exists with the given login"))?;

        Ok(())
    }

    async fn delete_account(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM accounts WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .context("Failed to delete account")
            .map_err(AppError::database)?;

        Ok(result.rows_affected() > 0)
    }
}

impl CourseRepo for PgStore {
    async fn find_course(&self, id: i64) -> Result<Option<Course>, AppError> {
        sqlx::query_as::<_, Course>("SELECT id, name FROM courses WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .context("Failed to fetch course by id")
            .map_err(AppError::database)
    }

    async fn list_courses(&self) -> Result<Vec<Course>, AppError> {
        sqlx::query_as::<_, Course>("SELECT id, name FROM courses ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .context("Failed to list courses")
            .map_err(AppError::database)
    }

    async fn course_name_taken(
        &self,
        name: &str,
        exclude: Option<i64>,
    ) -> Result<bool, AppError> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (SELECT 1 FROM courses WHERE name = $1 AND id IS DISTINCT FROM $2)",
        )
        .bind(name)
        .bind(exclude)
        .fetch_one(&self.pool)
        .await
        .context("Failed to check course name")
        .map_err(AppError::database)
    }

    async fn insert_course(&self, name: &str) -> Result<Course, AppError> {
        sqlx::query_as::<_, Course>("INSERT INTO courses (name) VALUES ($1) RETURNING id, name")
            .bind(name)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| map_unique_violation(e, "A course already exists with the given name"))
    }

    async fn update_course(&self, course: &Course) -> Result<(), AppError> {
        sqlx::query("UPDATE courses SET name = $1 WHERE id = $2")
            .bind(&course.name)
            .bind(course.id)
            .execute(&self.pool)
            .await
            .map_err(|e| map_unique_violation(e, "A course already exists with the given name"))?;

        Ok(())
    }

    async fn delete_course(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM courses WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .context("Failed to delete course")
            .map_err(AppError::database)?;

        Ok(result.rows_affected() > 0)
    }
}

impl SubjectRepo for PgStore {
    async fn find_subject(&self, id: i64) -> Result<Option<Subject>, AppError> {
        sqlx::query_as::<_, Subject>("SELECT id, name, course_id FROM subjects WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .context("Failed to fetch subject by id")
            .map_err(AppError::database)
    }

    async fn list_subjects(&self) -> Result<Vec<Subject>, AppError> {
        sqlx::query_as::<_, Subject>("SELECT id, name, course_id FROM subjects ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .context("Failed to list subjects")
            .map_err(AppError::database)
    }

    async fn list_subjects_by_course(&self, course_id: i64) -> Result<Vec<Subject>, AppError> {
        sqlx::query_as::<_, Subject>(
            "SELECT id, name, course_id FROM subjects WHERE course_id = $1 ORDER BY id",
        )
        .bind(course_id)
        .fetch_all(&self.pool)
        .await
        .context("Failed to list subjects by course")
        .map_err(AppError::database)
    }

    async fn subject_name_taken(
        &self,
        name: &str,
        exclude: Option<i64>,
    ) -> Result<bool, AppError> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (SELECT 1 FROM subjects WHERE name = $1 AND id IS DISTINCT FROM $2)",
        )
        .bind(name)
        .bind(exclude)
        .fetch_one(&self.pool)
        .await
        .context("Failed to check subject name")
        .map_err(AppError::database)
    }

    async fn insert_subject(&self, subject: NewSubject) -> Result<Subject, AppError> {
        sqlx::query_as::<_, Subject>(
            "INSERT INTO subjects (name, course_id)
             VALUES ($1, $2)
             RETURNING id, name, course_id",
        )
        .bind(&subject.name)
        .bind(subject.course_id)
        .fetch_one(&self.pool)
        .await
        .context("Failed to insert subject")
        .map_err(AppError::database)
    }

    async fn update_subject(&self, subject: &Subject) -> Result<(), AppError> {
        sqlx::query("UPDATE subjects SET name = $1, course_id = $2 WHERE id = $3")
            .bind(&subject.name)
            .bind(subject.course_id)
            .bind(subject.id)
            .execute(&self.pool)
            .await
            .context("Failed to update subject")
            .map_err(AppError::database)?;

        Ok(())
    }

    async fn delete_subject(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM subjects WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .context("Failed to delete subject")
            .map_err(AppError::database)?;

        Ok(result.rows_affected() > 0)
    }
}

impl CohortRepo for PgStore {
    async fn find_cohort(&self, id: i64) -> Result<Option<Cohort>, AppError> {
        sqlx::query_as::<_, Cohort>(
            "SELECT id, name, teacher_id, course_id, start_date, end_date, schedule
             FROM cohorts WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .context("Failed to fetch cohort by id")
        .map_err(AppError::database)
    }

    async fn list_cohorts(&self) -> Result<Vec<Cohort>, AppError> {
        sqlx::query_as::<_, Cohort>(
            "SELECT id, name, teacher_id, course_id, start_date, end_date, schedule
             FROM cohorts ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await
        .context("Failed to list cohorts")
        .map_err(AppError::database)
    }

    async fn cohort_name_taken(
        &self,
        name: &str,
        exclude: Option<i64>,
    ) -> Result<bool, AppError> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (SELECT 1 FROM cohorts WHERE name = $1 AND id IS DISTINCT FROM $2)",
        )
        .bind(name)
        .bind(exclude)
        .fetch_one(&self.pool)
        .await
        .context("Failed to check cohort name")
        .map_err(AppError::database)
    }

    async fn insert_cohort(&self, cohort: NewCohort) -> Result<Cohort, AppError> {
        sqlx::query_as::<_, Cohort>(
            "INSERT INTO cohorts (name, teacher_id, course_id, start_date, end_date, schedule)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING id, name, teacher_id, course_id, start_date, end_date, schedule",
        )
        .bind(&cohort.name)
        .bind(cohort.teacher_id)
        .bind(cohort.course_id)
        .bind(cohort.start_date)
        .bind(cohort.end_date)
        .bind(&cohort.schedule)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, "A cohort already exists with the given name"))
    }

    async fn update_cohort(&self, cohort: &Cohort) -> Result<(), AppError> {
        sqlx::query(
            "UPDATE cohorts
             SET name = $1, teacher_id = $2, course_id = $3,
                 start_date = $4, end_date = $5, schedule = $6
             WHERE id = $7",
        )
        .bind(&cohort.name)
        .bind(cohort.teacher_id)
        .bind(cohort.course_id)
        .bind(cohort.start_date)
        .bind(cohort.end_date)
        .bind(&cohort.schedule)
        .bind(cohort.id)
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, "A cohort already exists with the given name"))?;

        Ok(())
    }

    async fn delete_cohort(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM cohorts WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .context("Failed to delete cohort")
            .map_err(AppError::database)?;

        Ok(result.rows_affected() > 0)
    }

    async fn count_cohorts(&self) -> Result<i64, AppError> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM cohorts")
            .fetch_one(&self.pool)
            .await
            .context("Failed to count cohorts")
            .map_err(AppError::database)
    }
}

const STUDENT_COLUMNS: &str = "id, name, email, birth_date, gender, cpf, rg, marital_status, \
     phone, birthplace, postal_code, street, number, complement, district, reference_point, \
     account_id, cohort_id";

impl StudentRepo for PgStore {
    async fn find_student(&self, id: i64) -> Result<Option<Student>, AppError> {
        sqlx::query_as::<_, Student>(&format!(
            "SELECT {STUDENT_COLUMNS} FROM students WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .context("Failed to fetch student by id")
        .map_err(AppError::database)
    }

    async fn list_students(&self) -> Result<Vec<Student>, AppError> {
        sqlx::query_as::<_, Student>(&format!(
            "SELECT {STUDENT_COLUMNS} FROM students ORDER BY id"
        ))
        .fetch_all(&self.pool)
        .await
        .context("Failed to list students")
        .map_err(AppError::database)
    }

    async fn list_students_by_cohort(&self, cohort_id: i64) -> Result<Vec<Student>, AppError> {
        sqlx::query_as::<_, Student>(&format!(
            "SELECT {STUDENT_COLUMNS} FROM students WHERE cohort_id = $1 ORDER BY id"
        ))
        .bind(cohort_id)
        .fetch_all(&self.pool)
        .await
        .context("Failed to list students by cohort")
        .map_err(AppError::database)
    }

    async fn student_name_taken(
        &self,
        name: &str,
        exclude: Option<i64>,
    ) -> Result<bool, AppError> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (SELECT 1 FROM students WHERE name = $1 AND id IS DISTINCT FROM $2)",
        )
        .bind(name)
        .bind(exclude)
        .fetch_one(&self.pool)
        .await
        .context("Failed to check student name")
        .map_err(AppError::database)
    }

    async fn insert_student(&self, student: NewStudent) -> Result<Student, AppError> {
        sqlx::query_as::<_, Student>(&format!(
            "INSERT INTO students (name, email, birth_date, gender, cpf, rg, marital_status, \
             phone, birthplace, postal_code, street, number, complement, district, \
             reference_point, account_id, cohort_id)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17)
             RETURNING {STUDENT_COLUMNS}"
        ))
        .bind(&student.name)
        .bind(&student.email)
        .bind(student.birth_date)
        .bind(&student.gender)
        .bind(&student.cpf)
        .bind(&student.rg)
        .bind(&student.marital_status)
        .bind(&student.phone)
        .bind(&student.birthplace)
        .bind(&student.postal_code)
        .bind(&student.street)
        .bind(&student.number)
        .bind(&student.complement)
        .bind(&student.district)
        .bind(&student.reference_point)
        .bind(student.account_id)
        .bind(student.cohort_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, "A student already exists with the given name"))
    }

    async fn update_student(&self, student: &Student) -> Result<(), AppError> {
        sqlx::query(
            "UPDATE students
             SET name = $1, email = $2, birth_date = $3, gender = $4, cpf = $5, rg = $6,
                 marital_status = $7, phone = $8, birthplace = $9, postal_code = $10,
                 street = $11, number = $12, complement = $13, district = $14,
                 reference_point = $15, cohort_id = $16
             WHERE id = $17",
        )
        .bind(&student.name)
        .bind(&student.email)
        .bind(student.birth_date)
        .bind(&student.gender)
        .bind(&student.cpf)
        .bind(&student.rg)
        .bind(&student.marital_status)
        .bind(&student.phone)
        .bind(&student.birthplace)
        .bind(&student.postal_code)
        .bind(&student.street)
        .bind(&student.number)
        .bind(&student.complement)
        .bind(&student.district)
        .bind(&student.reference_point)
        .bind(student.cohort_id)
        .bind(student.id)
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, "A student already exists with the given name"))?;

        Ok(())
    }

    async fn delete_student(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM students WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .context("Failed to delete student")
            .map_err(AppError::database)?;

        Ok(result.rows_affected() > 0)
    }

    async fn count_students(&self) -> Result<i64, AppError> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM students")
            .fetch_one(&self.pool)
            .await
            .context("Failed to count students")
            .map_err(AppError::database)
    }
}

const TEACHER_COLUMNS: &str = "id, name, email, birth_date, gender, cpf, rg, marital_status, \
     phone, birthplace, postal_code, city, state, street, number, complement, district, \
     reference_point, subjects, registered_on, account_id";

impl TeacherRepo for PgStore {
    async fn find_teacher(&self, id: i64) -> Result<Option<Teacher>, AppError> {
        sqlx::query_as::<_, Teacher>(&format!(
            "SELECT {TEACHER_COLUMNS} FROM teachers WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .context("Failed to fetch teacher by id")
        .map_err(AppError::database)
    }

    async fn list_teachers(&self) -> Result<Vec<Teacher>, AppError> {
        sqlx::query_as::<_, Teacher>(&format!(
            "SELECT {TEACHER_COLUMNS} FROM teachers ORDER BY id"
        ))
        .fetch_all(&self.pool)
        .await
        .context("Failed to list teachers")
        .map_err(AppError::database)
    }

    async fn list_teachers_by_account_role(&self, role: Role) -> Result<Vec<Teacher>, AppError> {
        sqlx::query_as::<_, Teacher>(
            "SELECT t.id, t.name, t.email, t.birth_date, t.gender, t.cpf, t.rg, \
             t.marital_status, t.phone, t.birthplace, t.postal_code, t.city, t.state, \
             t.street, t.number, t.complement, t.district, t.reference_point, t.subjects, \
             t.registered_on, t.account_id
             FROM teachers t
             JOIN accounts a ON a.id = t.account_id
             WHERE a.role = $1
             ORDER BY t.id",
        )
        .bind(role.name())
        .fetch_all(&self.pool)
        .await
        .context("Failed to list teachers by account role")
        .map_err(AppError::database)
    }

    async fn teacher_name_taken(
        &self,
        name: &str,
        exclude: Option<i64>,
    ) -> Result<bool, AppError> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (SELECT 1 FROM teachers WHERE name = $1 AND id IS DISTINCT FROM $2)",
        )
        .bind(name)
        .bind(exclude)
        .fetch_one(&self.pool)
        .await
        .context("Failed to check teacher name")
        .map_err(AppError::database)
    }

    async fn teacher_email_taken(
        &self,
        email: &str,
        exclude: Option<i64>,
    ) -> Result<bool, AppError> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (SELECT 1 FROM teachers WHERE email = $1 AND id IS DISTINCT FROM $2)",
        )
        .bind(email)
        .bind(exclude)
        .fetch_one(&self.pool)
        .await
        .context("Failed to check teacher email")
        .map_err(AppError::database)
    }

    async fn insert_teacher(&self, teacher: NewTeacher) -> Result<Teacher, AppError> {
        sqlx::query_as::<_, Teacher>(&format!(
            "INSERT INTO teachers (name, email, birth_date, gender, cpf, rg, marital_status, \
             phone, birthplace, postal_code, city, state, street, number, complement, \
             district, reference_point, subjects, registered_on, account_id)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, \
             $17, $18, $19, $20)
             RETURNING {TEACHER_COLUMNS}"
        ))
        .bind(&teacher.name)
        .bind(&teacher.email)
        .bind(teacher.birth_date)
        .bind(&teacher.gender)
        .bind(&teacher.cpf)
        .bind(&teacher.rg)
        .bind(&teacher.marital_status)
        .bind(&teacher.phone)
        .bind(&teacher.birthplace)
        .bind(&teacher.postal_code)
        .bind(&teacher.city)
        .bind(&teacher.state)
        .bind(&teacher.street)
        .bind(&teacher.number)
        .bind(&teacher.complement)
        .bind(&teacher.district)
        .bind(&teacher.reference_point)
        .bind(&teacher.subjects)
        .bind(teacher.registered_on)
        .bind(teacher.account_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, "A teacher already exists with the given name or email"))
    }

    async fn update_teacher(&self, teacher: &Teacher) -> Result<(), AppError> {
        sqlx::query(
            "UPDATE teachers
             SET name = $1, email = $2, birth_date = $3, gender = $4, cpf = $5, rg = $6,
                 marital_status = $7, phone = $8, birthplace = $9, postal_code = $10,
                 city = $11, state = $12, street = $13, number = $14, complement = $15,
                 district = $16, reference_point = $17, subjects = $18
             WHERE id = $19",
        )
        .bind(&teacher.name)
        .bind(&teacher.email)
        .bind(teacher.birth_date)
        .bind(&teacher.gender)
        .bind(&teacher.cpf)
        .bind(&teacher.rg)
        .bind(&teacher.marital_status)
        .bind(&teacher.phone)
        .bind(&teacher.birthplace)
        .bind(&teacher.postal_code)
        .bind(&teacher.city)
        .bind(&teacher.state)
        .bind(&teacher.street)
        .bind(&teacher.number)
        .bind(&teacher.complement)
        .bind(&teacher.district)
        .bind(&teacher.reference_point)
        .bind(&teacher.subjects)
        .bind(teacher.id)
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, "A teacher already exists with the given name or email"))?;

        Ok(())
    }

    async fn delete_teacher(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM teachers WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .context("Failed to delete teacher")
            .map_err(AppError::database)?;

        Ok(result.rows_affected() > 0)
    }

    async fn count_teachers(&self) -> Result<i64, AppError> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM teachers")
            .fetch_one(&self.pool)
            .await
            .context("Failed to count teachers")
            .map_err(AppError::database)
    }
}

impl GradeRepo for PgStore {
    async fn find_grade(&self, id: i64) -> Result<Option<Grade>, AppError> {
        sqlx::query_as::<_, Grade>(
            "SELECT id, student_id, teacher_id, subject_id, value FROM grades WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .context("Failed to fetch grade by id")
        .map_err(AppError::database)
    }

    async fn list_grades(&self) -> Result<Vec<Grade>, AppError> {
        sqlx::query_as::<_, Grade>(
            "SELECT id, student_id, teacher_id, subject_id, value FROM grades ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await
        .context("Failed to list grades")
        .map_err(AppError::database)
    }

    async fn list_grades_by_student(&self, student_id: i64) -> Result<Vec<Grade>, AppError> {
        sqlx::query_as::<_, Grade>(
            "SELECT id, student_id, teacher_id, subject_id, value
             FROM grades WHERE student_id = $1 ORDER BY id",
        )
        .bind(student_id)
        .fetch_all(&self.pool)
        .await
        .context("Failed to list grades by student")
        .map_err(AppError::database)
    }

    async fn list_grades_by_teacher(&self, teacher_id: i64) -> Result<Vec<Grade>, AppError> {
        sqlx::query_as::<_, Grade>(
            "SELECT id, student_id, teacher_id, subject_id, value
             FROM grades WHERE teacher_id = $1 ORDER BY id",
        )
        .bind(teacher_id)
        .fetch_all(&self.pool)
        .await
        .context("Failed to list grades by teacher")
        .map_err(AppError::database)
    }

    async fn insert_grade(&self, grade: NewGrade) -> Result<Grade, AppError> {
        sqlx::query_as::<_, Grade>(
            "INSERT INTO grades (student_id, teacher_id, subject_id, value)
             VALUES ($1, $2, $3, $4)
             RETURNING id, student_id, teacher_id, subject_id, value",
        )
        .bind(grade.student_id)
        .bind(grade.teacher_id)
        .bind(grade.subject_id)
        .bind(&grade.value)
        .fetch_one(&self.pool)
        .await
        .context("Failed to insert grade")
        .map_err(AppError::database)
    }

    async fn update_grade(&self, grade: &Grade) -> Result<(), AppError> {
        sqlx::query("UPDATE grades SET value = $1 WHERE id = $2")
            .bind(&grade.value)
            .bind(grade.id)
            .execute(&self.pool)
            .await
            .context("Failed to update grade")
            .map_err(AppError::database)?;

        Ok(())
    }

    async fn delete_grade(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM grades WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .context("Failed to delete grade")
            .map_err(AppError::database)?;

        Ok(result.rows_affected() > 0)
    }
}
