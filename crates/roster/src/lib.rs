//! Roster Domain Library
//!
//! Core domain types and interfaces for the classroom roster service.
//!
//! # Architecture
//!
//! This crate follows Clean Architecture / Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain/`): Pure business entities
//!   - `entities/`: Core domain models (Teacher, Student, RosterEntry)
//!   - `value_objects/`: Immutable value types (StudentStatus)
//!   - `errors/`: Storage error type shared by every port
//!
//! - **Ports** (`ports/`): Abstract interfaces (traits)
//!   - `repositories/`: Data access interfaces, one method per query shape
//!
//! # Usage
//!
//! ```rust,ignore
//! use roster::domain::{Student, StudentStatus, Teacher};
//! use roster::ports::{StudentRepository, TeacherRepository};
//! ```

pub mod domain;
pub mod ports;

// Re-export commonly used types
pub use domain::{RosterEntry, StorageError, Student, StudentStatus, Teacher};
pub use ports::{StudentRepository, TeacherRepository};
