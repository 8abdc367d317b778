//! In-memory implementation of the roster repositories
//!
//! Mirrors the PostgreSQL adapter's query semantics over plain vectors.
//! Used by service and route tests; every call is counted and any
//! operation can be made to fail.

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;

use roster::{
    RosterEntry, StorageError, Student, StudentRepository, StudentStatus, Teacher,
    TeacherRepository,
};

#[derive(Default)]
struct RosterTables {
    teachers: Vec<Teacher>,
    students: Vec<Student>,
    next_teacher_id: i64,
    next_student_id: i64,
}

/// Teacher and student tables behind one lock
#[derive(Default)]
pub struct InMemoryRoster {
    tables: Mutex<RosterTables>,
    calls: Mutex<HashMap<&'static str, usize>>,
    failing: Mutex<HashSet<&'static str>>,
}

impl InMemoryRoster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every later call to `operation` fail with a query error
    pub fn fail(&self, operation: &'static str) {
        self.failing.lock().unwrap().insert(operation);
    }

    /// Number of calls made to `operation`
    pub fn calls(&self, operation: &'static str) -> usize {
        self.calls.lock().unwrap().get(operation).copied().unwrap_or(0)
    }

    pub fn teachers(&self) -> Vec<Teacher> {
        self.tables.lock().unwrap().teachers.clone()
    }

    pub fn students(&self) -> Vec<Student> {
        self.tables.lock().unwrap().students.clone()
    }

    /// Insert a teacher directly, bypassing call counting
    pub fn seed_teacher(&self, email: &str) -> i64 {
        let mut tables = self.tables.lock().unwrap();
        insert_teacher(&mut tables, email).id
    }

    /// Register students directly, bypassing call counting
    pub fn seed_students(&self, teacher_email: &str, emails: &[&str], status: StudentStatus) {
        let mut tables = self.tables.lock().unwrap();
        let existing = tables
            .teachers
            .iter()
            .find(|t| t.email == teacher_email)
            .map(|t| t.id);
        let teacher_id = match existing {
            Some(id) => id,
            None => insert_teacher(&mut tables, teacher_email).id,
        };
        for email in emails {
            tables.next_student_id += 1;
            let student = Student {
                id: tables.next_student_id,
                email: email.to_string(),
                teacher_id,
                status,
                created_at: Utc::now(),
            };
            tables.students.push(student);
        }
    }

    fn enter(&self, operation: &'static str) -> Result<(), StorageError> {
        *self.calls.lock().unwrap().entry(operation).or_default() += 1;
        if self.failing.lock().unwrap().contains(operation) {
            return Err(StorageError::Query(format!("{} unavailable", operation)));
        }
        Ok(())
    }
}

fn insert_teacher(tables: &mut RosterTables, email: &str) -> Teacher {
    tables.next_teacher_id += 1;
    let teacher = Teacher {
        id: tables.next_teacher_id,
        email: email.to_string(),
        created_at: Utc::now(),
    };
    tables.teachers.push(teacher.clone());
    teacher
}

#[async_trait]
impl TeacherRepository for InMemoryRoster {
    async fn find_id_by_email(&self, email: &str) -> Result<Option<i64>, StorageError> {
        self.enter("find_id_by_email")?;
        let tables = self.tables.lock().unwrap();
        Ok(tables
            .teachers
            .iter()
            .find(|t| t.email == email)
            .map(|t| t.id))
    }

    async fn create(&self, email: &str) -> Result<Teacher, StorageError> {
        self.enter("create_teacher")?;
        let mut tables = self.tables.lock().unwrap();
        if let Some(existing) = tables.teachers.iter().find(|t| t.email == email) {
            return Ok(existing.clone());
        }
        Ok(insert_teacher(&mut tables, email))
    }
}

#[async_trait]
impl StudentRepository for InMemoryRoster {
    async fn list_emails(&self) -> Result<Vec<String>, StorageError> {
        self.enter("list_emails")?;
        let tables = self.tables.lock().unwrap();
        Ok(tables.students.iter().map(|s| s.email.clone()).collect())
    }

    async fn find_by_teachers(
        &self,
        teacher_emails: &[String],
    ) -> Result<Vec<RosterEntry>, StorageError> {
        self.enter("find_by_teachers")?;
        let tables = self.tables.lock().unwrap();
        let teacher_ids: HashSet<i64> = tables
            .teachers
            .iter()
            .filter(|t| teacher_emails.contains(&t.email))
            .map(|t| t.id)
            .collect();

        // email -> (matched teachers, suspended), in first registration order
        let mut order: Vec<&str> = Vec::new();
        let mut groups: HashMap<&str, (HashSet<i64>, bool)> = HashMap::new();
        for student in tables
            .students
            .iter()
            .filter(|s| teacher_ids.contains(&s.teacher_id))
        {
            let group = groups.entry(student.email.as_str()).or_insert_with(|| {
                order.push(student.email.as_str());
                (HashSet::new(), false)
            });
            group.0.insert(student.teacher_id);
            group.1 |= student.status == StudentStatus::Suspend;
        }

        Ok(order
            .into_iter()
            .filter(|email| groups[email].0.len() == teacher_emails.len())
            .map(|email| {
                let status = if groups[email].1 {
                    StudentStatus::Suspend
                } else {
                    StudentStatus::Active
                };
                RosterEntry::new(email, status)
            })
            .collect())
    }

    async fn insert_many(
        &self,
        student_emails: &[String],
        teacher_id: i64,
    ) -> Result<u64, StorageError> {
        self.enter("insert_many")?;
        let mut tables = self.tables.lock().unwrap();
        if !tables.teachers.iter().any(|t| t.id == teacher_id) {
            return Err(StorageError::Query(format!(
                "teacher {} does not exist",
                teacher_id
            )));
        }

        let mut inserted = 0;
        for email in student_emails {
            if tables
                .students
                .iter()
                .any(|s| &s.email == email && s.teacher_id == teacher_id)
            {
                continue;
            }
            let suspended = tables
                .students
                .iter()
                .any(|s| &s.email == email && s.status == StudentStatus::Suspend);
            tables.next_student_id += 1;
            let student = Student {
                id: tables.next_student_id,
                email: email.clone(),
                teacher_id,
                status: if suspended {
                    StudentStatus::Suspend
                } else {
                    StudentStatus::Active
                },
                created_at: Utc::now(),
            };
            tables.students.push(student);
            inserted += 1;
        }
        Ok(inserted)
    }

    async fn update_status(
        &self,
        email: &str,
        status: StudentStatus,
    ) -> Result<u64, StorageError> {
        self.enter("update_status")?;
        let mut tables = self.tables.lock().unwrap();
        let mut touched = 0;
        for student in tables.students.iter_mut().filter(|s| s.email == email) {
            student.status = status;
            touched += 1;
        }
        Ok(touched)
    }

    async fn filter_by_status(
        &self,
        student_emails: &[String],
        status: StudentStatus,
    ) -> Result<Vec<String>, StorageError> {
        self.enter("filter_by_status")?;
        let tables = self.tables.lock().unwrap();
        let mut seen = HashSet::new();
        let candidates: Vec<&str> = tables
            .students
            .iter()
            .filter(|s| student_emails.contains(&s.email))
            .map(|s| s.email.as_str())
            .filter(|email| seen.insert(*email))
            .collect();

        Ok(candidates
            .into_iter()
            .filter(|email| {
                tables
                    .students
                    .iter()
                    .filter(|s| s.email == *email)
                    .all(|s| s.status == status)
            })
            .map(str::to_string)
            .collect())
    }
}
