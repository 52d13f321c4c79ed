//! Student record domain model.
//!
//! # Responsibility
//! - Hold a student's identity and ordered subject-to-marks entries.
//! - Compute totals and averages without touching storage.
//!
//! # Invariants
//! - `student_id` is stable and non-empty once validated.
//! - Unit names are unique; `add_subject` with an existing name overwrites
//!   the prior score in place (last-write-wins), keeping insertion order.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// One subject entry: a unit name and its numeric score.
///
/// Scores are expected in `0..=100` but not constrained here; range checks
/// are a caller concern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitMark {
    pub unit: String,
    pub marks: f64,
}

/// Canonical in-memory record for one student.
///
/// Units are kept as an explicit ordered list rather than a map, so report
/// output iterates in insertion order deterministically.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentRecord {
    /// Unique identifier, primary key in storage.
    pub student_id: String,
    /// Display name.
    pub name: String,
    /// Ordered (unit, marks) entries with unique unit names.
    units: Vec<UnitMark>,
}

/// Validation failure for a student record about to be persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StudentValidationError {
    EmptyStudentId,
}

impl Display for StudentValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyStudentId => write!(f, "student_id must not be empty"),
        }
    }
}

impl Error for StudentValidationError {}

impl StudentRecord {
    /// Creates a record with no units yet.
    pub fn new(student_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            student_id: student_id.into(),
            name: name.into(),
            units: Vec::new(),
        }
    }

    /// Inserts or overwrites the score for `unit`.
    ///
    /// # Contract
    /// - Always succeeds.
    /// - An existing unit keeps its position in the list; only the score
    ///   changes.
    pub fn add_subject(&mut self, unit: impl Into<String>, marks: f64) {
        let unit = unit.into();
        match self.units.iter_mut().find(|entry| entry.unit == unit) {
            Some(entry) => entry.marks = marks,
            None => self.units.push(UnitMark { unit, marks }),
        }
    }

    /// Returns the score for `unit`, if present.
    pub fn marks_for(&self, unit: &str) -> Option<f64> {
        self.units
            .iter()
            .find(|entry| entry.unit == unit)
            .map(|entry| entry.marks)
    }

    /// Units in insertion order.
    pub fn units(&self) -> &[UnitMark] {
        &self.units
    }

    /// Sum of all scores. `0.0` for a record with no units.
    pub fn total_marks(&self) -> f64 {
        self.units.iter().map(|entry| entry.marks).sum()
    }

    /// Mean score, or `0.0` for a record with no units.
    pub fn average_marks(&self) -> f64 {
        if self.units.is_empty() {
            0.0
        } else {
            self.total_marks() / self.units.len() as f64
        }
    }

    /// Checks invariants required before persistence.
    ///
    /// # Errors
    /// - `EmptyStudentId` when `student_id` is empty or whitespace-only.
    pub fn validate(&self) -> Result<(), StudentValidationError> {
        if self.student_id.trim().is_empty() {
            return Err(StudentValidationError::EmptyStudentId);
        }
        Ok(())
    }
}
