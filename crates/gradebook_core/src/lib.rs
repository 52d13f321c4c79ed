//! Core domain and persistence logic for the gradebook.
//! This crate is the single source of truth for grade computation and
//! storage invariants; the CLI shell only prompts and prints.

pub mod db;
pub mod logging;
pub mod model;
pub mod report;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::grade::Grade;
pub use model::student::{StudentRecord, StudentValidationError, UnitMark};
pub use report::result_slip;
pub use repo::student_repo::{RepoError, RepoResult, SqliteGradeStore, StudentRepository};
pub use service::student_service::StudentService;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
