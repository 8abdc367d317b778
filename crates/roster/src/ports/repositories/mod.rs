//! Repository Ports
//!
//! Abstract interfaces for data persistence operations.

mod student_repository;
mod teacher_repository;

pub use student_repository::*;
pub use teacher_repository::*;
