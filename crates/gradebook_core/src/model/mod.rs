//! Domain model for student grade records.
//!
//! # Responsibility
//! - Define the canonical student record shared by storage and reporting.
//! - Keep grade computation pure (no I/O).
//!
//! # Invariants
//! - Every record is identified by a non-empty `student_id`.
//! - Unit names are unique within one record; re-adding a unit overwrites.

pub mod grade;
pub mod student;
