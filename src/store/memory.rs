//! In-memory implementation of the repository traits.
//!
//! Used by the test suite in place of PostgreSQL so service behavior —
//! including which repository calls happen and which don't — can be
//! asserted without a database. Ids come from a single shared counter.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard};

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

#[derive(Default)]
struct Inner {
    next_id: i64,
    accounts: BTreeMap<i64, Account>,
    courses: BTreeMap<i64, Course>,
    subjects: BTreeMap<i64, Subject>,
    cohorts: BTreeMap<i64, Cohort>,
    students: BTreeMap<i64, Student>,
    teachers: BTreeMap<i64, Teacher>,
    grades: BTreeMap<i64, Grade>,
}

impl Inner {
    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }
}

#[derive(Clone, Default)]
pub struct MemStore {
    inner: Arc<Mutex<Inner>>,
}

impl MemStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().expect("MemStore lock poisoned")
    }

    /// Number of stored accounts; handy for no-side-effect assertions.
    pub fn account_count(&self) -> usize {
        self.lock().accounts.len()
    }
}

impl AccountRepo for MemStore {
    async fn find_account(&self, id: i64) -> Result<Option<Account>, AppError> {
        Ok(self.lock().accounts.get(&id).cloned())
    }

    async fn find_account_by_login(&self, login: &str) -> Result<Option<Account>, AppError> {
        Ok(self
            .lock()
            .accounts
            .values()
            .find(|a| a.login == login)
            .cloned())
    }

    async fn insert_account(&self, account: NewAccount) -> Result<Account, AppError> {
        let mut inner = self.lock();
        let id = inner.next_id();
        let account = Account {
            id,
            login: account.login,
            password: account.password,
            role: account.role,
        };
        inner.accounts.insert(id, account.clone());
        Ok(account)
    }

    async fn update_account(&self, account: &Account) -> Result<(), AppError> {
        self.lock().accounts.insert(account.id, account.clone());
        Ok(())
    }

    async fn delete_account(&self, id: i64) -> Result<bool, AppError> {
        Ok(self.lock().accounts.remove(&id).is_some())
    }
}

impl CourseRepo for MemStore {
    async fn find_course(&self, id: i64) -> Result<Option<Course>, AppError> {
        Ok(self.lock().courses.get(&id).cloned())
    }

    async fn list_courses(&self) -> Result<Vec<Course>, AppError> {
        Ok(self.lock().courses.values().cloned().collect())
    }

    async fn course_name_taken(
        &self,
        name: &str,
        exclude: Option<i64>,
    ) -> Result<bool, AppError> {
        Ok(self
            .lock()
            .courses
            .values()
            .any(|c| c.name == name && Some(c.id) != exclude))
    }

    async fn insert_course(&self, name: &str) -> Result<Course, AppError> {
        let mut inner = self.lock();
        let id = inner.next_id();
        let course = Course {
            id,
            name: name.to_string(),
        };
        inner.courses.insert(id, course.clone());
        Ok(course)
    }

    async fn update_course(&self, course: &Course) -> Result<(), AppError> {
        self.lock().courses.insert(course.id, course.clone());
        Ok(())
    }

    async fn delete_course(&self, id: i64) -> Result<bool, AppError> {
        Ok(self.lock().courses.remove(&id).is_some())
    }
}

impl SubjectRepo for MemStore {
    async fn find_subject(&self, id: i64) -> Result<Option<Subject>, AppError> {
        Ok(self.lock().subjects.get(&id).cloned())
    }

    async fn list_subjects(&self) -> Result<Vec<Subject>, AppError> {
        Ok(self.lock().subjects.values().cloned().collect())
    }

    async fn list_subjects_by_course(&self, course_id: i64) -> Result<Vec<Subject>, AppError> {
        Ok(self
            .lock()
            .subjects
            .values()
            .filter(|s| s.course_id == Some(course_id))
            .cloned()
            .collect())
    }

    async fn subject_name_taken(
        &self,
        name: &str,
        exclude: Option<i64>,
    ) -> Result<bool, AppError> {
        Ok(self
            .lock()
            .subjects
            .values()
            .any(|s| s.name == name && Some(s.id) != exclude))
    }

    async fn insert_subject(&self, subject: NewSubject) -> Result<Subject, AppError> {
        let mut inner = self.lock();
        let id = inner.next_id();
        let subject = Subject {
            id,
            name: subject.name,
            course_id: subject.course_id,
        };
        inner.subjects.insert(id, subject.clone());
        Ok(subject)
    }

    async fn update_subject(&self, subject: &Subject) -> Result<(), AppError> {
        self.lock().subjects.insert(subject.id, subject.clone());
        Ok(())
    }

    async fn delete_subject(&self, id: i64) -> Result<bool, AppError> {
        Ok(self.lock().subjects.remove(&id).is_some())
    }
}

impl CohortRepo for MemStore {
    async fn find_cohort(&self, id: i64) -> Result<Option<Cohort>, AppError> {
        Ok(self.lock().cohorts.get(&id).cloned())
    }

    async fn list_cohorts(&self) -> Result<Vec<Cohort>, AppError> {
        Ok(self.lock().cohorts.values().cloned().collect())
    }

    async fn cohort_name_taken(
        &self,
        name: &str,
        exclude: Option<i64>,
    ) -> Result<bool, AppError> {
        Ok(self
            .lock()
            .cohorts
            .values()
            .any(|c| c.name == name && Some(c.id) != exclude))
    }

    async fn insert_cohort(&self, cohort: NewCohort) -> Result<Cohort, AppError> {
        let mut inner = self.lock();
        let id = inner.next_id();
        let cohort = Cohort {
            id,
            name: cohort.name,
            teacher_id: cohort.teacher_id,
            course_id: cohort.course_id,
            start_date: cohort.start_date,
            end_date: cohort.end_date,
            schedule: cohort.schedule,
        };
        inner.cohorts.insert(id, cohort.clone());
        Ok(cohort)
    }

    async fn update_cohort(&self, cohort: &Cohort) -> Result<(), AppError> {
        self.lock().cohorts.insert(cohort.id, cohort.clone());
        Ok(())
    }

    async fn delete_cohort(&self, id: i64) -> Result<bool, AppError> {
        Ok(self.lock().cohorts.remove(&id).is_some())
    }

    async fn count_cohorts(&self) -> Result<i64, AppError> {
        Ok(self.lock().cohorts.len() as i64)
    }
}

impl StudentRepo for MemStore {
    async fn find_student(&self, id: i64) -> Result<Option<Student>, AppError> {
        Ok(self.lock().students.get(&id).cloned())
    }

    async fn list_students(&self) -> Result<Vec<Student>, AppError> {
        Ok(self.lock().students.values().cloned().collect())
    }

    async fn list_students_by_cohort(&self, cohort_id: i64) -> Result<Vec<Student>, AppError> {
        Ok(self
            .lock()
            .students
            .values()
            .filter(|s| s.cohort_id == cohort_id)
            .cloned()
            .collect())
    }

    async fn student_name_taken(
        &self,
        name: &str,
        exclude: Option<i64>,
    ) -> Result<bool, AppError> {
        Ok(self
            .lock()
            .students
            .values()
            .any(|s| s.name == name && Some(s.id) != exclude))
    }

    async fn insert_student(&self, student: NewStudent) -> Result<Student, AppError> {
        let mut inner = self.lock();
        let id = inner.next_id();
        let student = Student {
            id,
            name: student.name,
            email: student.email,
            birth_date: student.birth_date,
            gender: student.gender,
            cpf: student.cpf,
            rg: student.rg,
            marital_status: student.marital_status,
            phone: student.phone,
            birthplace: student.birthplace,
            postal_code: student.postal_code,
            street: student.street,
            number: student.number,
            complement: student.complement,
            district: student.district,
            reference_point: student.reference_point,
            account_id: student.account_id,
            cohort_id: student.cohort_id,
        };
        inner.students.insert(id, student.clone());
        Ok(student)
    }

    async fn update_student(&self, student: &Student) -> Result<(), AppError> {
        self.lock().students.insert(student.id, student.clone());
        Ok(())
    }

    async fn delete_student(&self, id: i64) -> Result<bool, AppError> {
        Ok(self.lock().students.remove(&id).is_some())
    }

    async fn count_students(&self) -> Result<i64, AppError> {
        Ok(self.lock().students.len() as i64)
    }
}

impl TeacherRepo for MemStore {
    async fn find_teacher(&self, id: i64) -> Result<Option<Teacher>, AppError> {
        Ok(self.lock().teachers.get(&id).cloned())
    }

    async fn list_teachers(&self) -> Result<Vec<Teacher>, AppError> {
        Ok(self.lock().teachers.values().cloned().collect())
    }

    async fn list_teachers_by_account_role(&self, role: Role) -> Result<Vec<Teacher>, AppError> {
        let inner = self.lock();
        Ok(inner
            .teachers
            .values()
            .filter(|t| {
                inner
                    .accounts
                    .get(&t.account_id)
                    .is_some_and(|a| a.role == role)
            })
            .cloned()
            .collect())
    }

    async fn teacher_name_taken(
        &self,
        name: &str,
        exclude: Option<i64>,
    ) -> Result<bool, AppError> {
        Ok(self
            .lock()
            .teachers
            .values()
            .any(|t| t.name == name && Some(t.id) != exclude))
    }

    async fn teacher_email_taken(
        &self,
        email: &str,
        exclude: Option<i64>,
    ) -> Result<bool, AppError> {
        Ok(self
            .lock()
            .teachers
            .values()
            .any(|t| t.email == email && Some(t.id) != exclude))
    }

    async fn insert_teacher(&self, teacher: NewTeacher) -> Result<Teacher, AppError> {
        let mut inner = self.lock();
        let id = inner.next_id();
        let teacher = Teacher {
            id,
            name: teacher.name,
            email: teacher.email,
            birth_date: teacher.birth_date,
            gender: teacher.gender,
            cpf: teacher.cpf,
            rg: teacher.rg,
            marital_status: teacher.marital_status,
            phone: teacher.phone,
            birthplace: teacher.birthplace,
            postal_code: teacher.postal_code,
            city: teacher.city,
            state: teacher.state,
            street: teacher.street,
            number: teacher.number,
            complement: teacher.complement,
            district: teacher.district,
            reference_point: teacher.reference_point,
            subjects: teacher.subjects,
            registered_on: teacher.registered_on,
            account_id: teacher.account_id,
        };
        inner.teachers.insert(id, teacher.clone());
        Ok(teacher)
    }

    async fn update_teacher(&self, teacher: &Teacher) -> Result<(), AppError> {
        self.lock().teachers.insert(teacher.id, teacher.clone());
        Ok(())
    }

    async fn delete_teacher(&self, id: i64) -> Result<bool, AppError> {
        Ok(self.lock().teachers.remove(&id).is_some())
    }

    async fn count_teachers(&self) -> Result<i64, AppError> {
        Ok(self.lock().teachers.len() as i64)
    }
}

impl GradeRepo for MemStore {
    async fn find_grade(&self, id: i64) -> Result<Option<Grade>, AppError> {
        Ok(self.lock().grades.get(&id).cloned())
    }

    async fn list_grades(&self) -> Result<Vec<Grade>, AppError> {
        Ok(self.lock().grades.values().cloned().collect())
    }

    async fn list_grades_by_student(&self, student_id: i64) -> Result<Vec<Grade>, AppError> {
        Ok(self
            .lock()
            .grades
            .values()
            .filter(|g| g.student_id == student_id)
            .cloned()
            .collect())
    }

    async fn list_grades_by_teacher(&self, teacher_id: i64) -> Result<Vec<Grade>, AppError> {
        Ok(self
            .lock()
            .grades
            .values()
            .filter(|g| g.teacher_id == teacher_id)
            .cloned()
            .collect())
    }

    async fn insert_grade(&self, grade: NewGrade) -> Result<Grade, AppError> {
        let mut inner = self.lock();
        let id = inner.next_id();
        let grade = Grade {
            id,
            student_id: grade.student_id,
            teacher_id: grade.teacher_id,
            subject_id: grade.subject_id,
            value: grade.value,
        };
        inner.grades.insert(id, grade.clone());
        Ok(grade)
    }

    async fn update_grade(&self, grade: &Grade) -> Result<(), AppError> {
        self.lock().grades.insert(grade.id, grade.clone());
        Ok(())
    }

    async fn delete_grade(&self, id: i64) -> Result<bool, AppError> {
        Ok(self.lock().grades.remove(&id).is_some())
    }
}
