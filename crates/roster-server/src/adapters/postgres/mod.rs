//! PostgreSQL Repository Implementations

mod student_repository;
mod teacher_repository;

pub use student_repository::PgStudentRepository;
pub use teacher_repository::PgTeacherRepository;
