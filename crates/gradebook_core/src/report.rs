//! Result slip formatting.
//!
//! # Responsibility
//! - Render one student's units, grades, total and average as plain text.
//!
//! # Invariants
//! - Units are listed in insertion order, never sorted.
//! - The average is printed with exactly two decimal places.

use crate::model::grade::Grade;
use crate::model::student::StudentRecord;
use std::fmt::Write;

const RULE: &str = "---------------------------------";

/// Renders the printable result slip for one record.
///
/// Layout: header with id and name, a unit/marks/grade table, total marks,
/// and the average with its own letter grade.
pub fn result_slip(record: &StudentRecord) -> String {
    let mut out = String::new();

    // Writing into a String cannot fail.
    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(out, "Student ID:\t\t{}", record.student_id);
    let _ = writeln!(out, "Name:\t\t\t{}", record.name);
    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(out, "Units\t\t\tMarks\tGrade");
    for entry in record.units() {
        let _ = writeln!(
            out,
            "{:<16}\t{}\t{}",
            entry.unit,
            entry.marks,
            Grade::for_marks(entry.marks)
        );
    }
    let average = record.average_marks();
    let _ = writeln!(out, "Total Marks:\t\t{}", record.total_marks());
    let _ = writeln!(
        out,
        "Average Marks:\t\t{average:.2}\t{}",
        Grade::for_marks(average)
    );
    let _ = writeln!(out, "{RULE}");

    out
}
