//! Value Objects
//!
//! Immutable objects defined by their attributes rather than identity.

mod student_status;

pub use student_status::*;
