//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the grade-store data access contract.
//! - Isolate SQLite query details from service/shell orchestration.
//!
//! # Invariants
//! - Write paths validate the record before SQL mutations.
//! - Not-found on lookup is a normal outcome (`None`), not an error.

pub mod student_repo;
