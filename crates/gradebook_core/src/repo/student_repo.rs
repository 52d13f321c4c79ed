//! Grade store contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide upsert/get/delete over `students` and `units` storage.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - Write paths call `StudentRecord::validate()` before SQL mutations.
//! - Every operation acquires its own connection and releases it on all
//!   exit paths (RAII drop), matching the single-user one-shot lifecycle.
//! - Upsert is an additive merge: units present in storage but absent from
//!   the record being saved are left untouched, not deleted.

use crate::db::{open_db, DbError, DbResult};
use crate::model::student::{StudentRecord, StudentValidationError};
use log::info;
use rusqlite::{params, Connection, OptionalExtension};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

pub type RepoResult<T> = Result<T, RepoError>;

/// Persistence error for grade store operations.
///
/// Storage connectivity failures are fatal and propagated unchanged; there
/// is no retry logic and no partial-success reporting beyond per-statement
/// transaction boundaries.
#[derive(Debug)]
pub enum RepoError {
    Validation(StudentValidationError),
    Db(DbError),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
        }
    }
}

impl From<StudentValidationError> for RepoError {
    fn from(value: StudentValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Storage interface for student grade records.
pub trait StudentRepository {
    /// Writes or overwrites the student row, then each unit row.
    fn upsert(&self, record: &StudentRecord) -> RepoResult<()>;
    /// Loads one record with all of its units; `None` when absent.
    fn get(&self, student_id: &str) -> RepoResult<Option<StudentRecord>>;
    /// Removes unit rows, then the student row. Unconditional; any
    /// confirmation gate lives with the caller.
    fn delete(&self, student_id: &str) -> RepoResult<()>;
}

/// SQLite-backed grade store keyed by database file path.
///
/// Holds no long-lived connection: each operation opens the database, runs
/// its statement group, and drops the connection when the method returns.
pub struct SqliteGradeStore {
    path: PathBuf,
}

impl SqliteGradeStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Creates the schema eagerly so storage errors surface at startup.
    ///
    /// Idempotent: opening an already-migrated database applies nothing.
    pub fn initialize(&self) -> RepoResult<()> {
        let _conn = self.connect()?;
        info!(
            "event=store_init module=repo status=ok path={}",
            self.path.display()
        );
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn connect(&self) -> DbResult<Connection> {
        open_db(&self.path)
    }
}

impl StudentRepository for SqliteGradeStore {
    fn upsert(&self, record: &StudentRecord) -> RepoResult<()> {
        record.validate()?;

        let conn = self.connect()?;
        conn.execute(
            "INSERT INTO students (student_id, name)
             VALUES (?1, ?2)
             ON CONFLICT (student_id) DO UPDATE SET name = excluded.name;",
            params![record.student_id, record.name],
        )?;

        // Each unit row is replaced independently. A row updated in place
        // keeps its rowid, so unit ordering survives reloads.
        let mut stmt = conn.prepare(
            "INSERT INTO units (student_id, unit_name, marks)
             VALUES (?1, ?2, ?3)
             ON CONFLICT (student_id, unit_name) DO UPDATE SET marks = excluded.marks;",
        )?;
        for entry in record.units() {
            stmt.execute(params![record.student_id, entry.unit, entry.marks])?;
        }

        info!(
            "event=student_upsert module=repo status=ok student_id={} units={}",
            record.student_id,
            record.units().len()
        );
        Ok(())
    }

    fn get(&self, student_id: &str) -> RepoResult<Option<StudentRecord>> {
        let conn = self.connect()?;

        let name: Option<String> = conn
            .query_row(
                "SELECT name FROM students WHERE student_id = ?1;",
                [student_id],
                |row| row.get(0),
            )
            .optional()?;

        let Some(name) = name else {
            info!("event=student_get module=repo status=not_found student_id={student_id}");
            return Ok(None);
        };

        let mut record = StudentRecord::new(student_id, name);
        let mut stmt = conn.prepare(
            "SELECT unit_name, marks
             FROM units
             WHERE student_id = ?1
             ORDER BY rowid;",
        )?;
        let mut rows = stmt.query([student_id])?;
        while let Some(row) = rows.next()? {
            let unit: String = row.get(0)?;
            let marks: f64 = row.get(1)?;
            record.add_subject(unit, marks);
        }

        info!(
            "event=student_get module=repo status=ok student_id={student_id} units={}",
            record.units().len()
        );
        Ok(Some(record))
    }

    fn delete(&self, student_id: &str) -> RepoResult<()> {
        let conn = self.connect()?;

        // Unit rows first so the foreign key never sees an orphan.
        conn.execute("DELETE FROM units WHERE student_id = ?1;", [student_id])?;
        let removed = conn.execute("DELETE FROM students WHERE student_id = ?1;", [student_id])?;

        info!(
            "event=student_delete module=repo status=ok student_id={student_id} removed={removed}"
        );
        Ok(())
    }
}
