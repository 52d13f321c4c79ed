//! Interactive prompt session.
//!
//! # Responsibility
//! - Drive one lookup/update/delete session over generic reader/writer
//!   streams so the flow is testable without a live terminal.
//! - Validate numeric input at this boundary; the core never sees
//!   malformed marks.
//!
//! # Invariants
//! - Deletion only happens after an explicit "yes" confirmation.
//! - A blank student id ends the session without touching storage.

use anyhow::Result;
use gradebook_core::{result_slip, StudentRecord, StudentRepository, StudentService};
use std::io::{BufRead, Write};

/// Runs one interactive session: look a student up, then add marks or
/// delete the record depending on the answers read from `input`.
pub fn run_session<R, W, S>(
    service: &StudentService<S>,
    input: &mut R,
    output: &mut W,
) -> Result<()>
where
    R: BufRead,
    W: Write,
    S: StudentRepository,
{
    let student_id = prompt(input, output, "Enter Student ID: ")?;
    if student_id.is_empty() {
        return Ok(());
    }

    match service.lookup(&student_id)? {
        Some(record) => found_flow(service, input, output, record)?,
        None => not_found_flow(service, input, output, &student_id)?,
    }

    Ok(())
}

fn found_flow<R, W, S>(
    service: &StudentService<S>,
    input: &mut R,
    output: &mut W,
    mut record: StudentRecord,
) -> Result<()>
where
    R: BufRead,
    W: Write,
    S: StudentRepository,
{
    output.write_all(result_slip(&record).as_bytes())?;

    if confirmed(&prompt(input, output, "Update marks? (yes/no): ")?) {
        match read_unit_and_marks(input, output)? {
            Some((unit, marks)) => {
                record.add_subject(unit, marks);
                service.save(&record)?;
                writeln!(output, "Marks updated.")?;
            }
            None => writeln!(output, "Invalid input.")?,
        }
    }

    if confirmed(&prompt(input, output, "Delete student record? (yes/no): ")?) {
        let sure = prompt(
            input,
            output,
            "Are you sure you want to delete this student? (yes/no): ",
        )?;
        if confirmed(&sure) {
            service.remove(&record.student_id)?;
            writeln!(output, "Student record deleted successfully.")?;
        }
    }

    Ok(())
}

fn not_found_flow<R, W, S>(
    service: &StudentService<S>,
    input: &mut R,
    output: &mut W,
    student_id: &str,
) -> Result<()>
where
    R: BufRead,
    W: Write,
    S: StudentRepository,
{
    let name = prompt(input, output, "Student not found. Enter name to add: ")?;

    match read_unit_and_marks(input, output)? {
        Some((unit, marks)) => {
            let mut record = StudentRecord::new(student_id, name);
            record.add_subject(unit, marks);
            service.save(&record)?;
            writeln!(output, "Student record added.")?;
        }
        None => writeln!(output, "Invalid input.")?,
    }

    Ok(())
}

/// Reads one (unit, marks) pair; `None` when the marks are not numeric.
fn read_unit_and_marks<R, W>(input: &mut R, output: &mut W) -> Result<Option<(String, f64)>>
where
    R: BufRead,
    W: Write,
{
    let unit = prompt(input, output, "Unit name: ")?;
    let raw_marks = prompt(input, output, "Marks: ")?;
    Ok(raw_marks.parse::<f64>().ok().map(|marks| (unit, marks)))
}

fn prompt<R, W>(input: &mut R, output: &mut W, text: &str) -> Result<String>
where
    R: BufRead,
    W: Write,
{
    output.write_all(text.as_bytes())?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().to_string())
}

fn confirmed(answer: &str) -> bool {
    answer.eq_ignore_ascii_case("yes")
}
