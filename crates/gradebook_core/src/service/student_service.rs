//! Student grade use-case service.
//!
//! # Responsibility
//! - Provide stable entry points for the interactive shell.
//! - Delegate persistence to the repository contract.
//!
//! # Invariants
//! - Service APIs never bypass repository validation contracts.
//! - The service stays storage-agnostic.

use crate::model::student::StudentRecord;
use crate::repo::student_repo::{RepoResult, StudentRepository};

/// Use-case wrapper over a grade store implementation.
pub struct StudentService<R: StudentRepository> {
    repo: R,
}

impl<R: StudentRepository> StudentService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Looks one student up by id; `None` means not enrolled yet.
    pub fn lookup(&self, student_id: &str) -> RepoResult<Option<StudentRecord>> {
        self.repo.get(student_id)
    }

    /// Persists a record, inserting or overwriting per row.
    pub fn save(&self, record: &StudentRecord) -> RepoResult<()> {
        self.repo.upsert(record)
    }

    /// Records one subject score for a student, creating the record when
    /// the student is not stored yet.
    ///
    /// # Contract
    /// - `fallback_name` is used only when a new record is created.
    /// - Returns the record as persisted.
    pub fn record_marks(
        &self,
        student_id: &str,
        fallback_name: &str,
        unit: &str,
        marks: f64,
    ) -> RepoResult<StudentRecord> {
        let mut record = self
            .repo
            .get(student_id)?
            .unwrap_or_else(|| StudentRecord::new(student_id, fallback_name));
        record.add_subject(unit, marks);
        self.repo.upsert(&record)?;
        Ok(record)
    }

    /// Removes a student and every unit row. The caller is responsible for
    /// any user-facing confirmation before invoking this.
    pub fn remove(&self, student_id: &str) -> RepoResult<()> {
        self.repo.delete(student_id)
    }
}
