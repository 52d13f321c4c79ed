use gradebook_core::{Grade, StudentRecord, StudentValidationError};

#[test]
fn total_and_average_over_multiple_units() {
    let mut record = StudentRecord::new("S1", "Alice");
    record.add_subject("Math", 80.0);
    record.add_subject("Eng", 55.0);
    record.add_subject("Physics", 62.5);

    assert_eq!(record.total_marks(), 197.5);
    assert_eq!(record.average_marks(), 197.5 / 3.0);
}

#[test]
fn empty_record_reports_zero_not_error() {
    let record = StudentRecord::new("S1", "Alice");

    assert_eq!(record.total_marks(), 0.0);
    assert_eq!(record.average_marks(), 0.0);
}

#[test]
fn add_subject_overwrites_existing_unit_in_place() {
    let mut record = StudentRecord::new("S1", "Alice");
    record.add_subject("Math", 80.0);
    record.add_subject("Eng", 55.0);
    record.add_subject("Math", 90.0);

    assert_eq!(record.units().len(), 2);
    assert_eq!(record.marks_for("Math"), Some(90.0));
    // Overwriting keeps the original position.
    assert_eq!(record.units()[0].unit, "Math");
    assert_eq!(record.units()[1].unit, "Eng");
}

#[test]
fn units_iterate_in_insertion_order() {
    let mut record = StudentRecord::new("S1", "Alice");
    for unit in ["Zoology", "Algebra", "Music"] {
        record.add_subject(unit, 50.0);
    }

    let names: Vec<&str> = record
        .units()
        .iter()
        .map(|entry| entry.unit.as_str())
        .collect();
    assert_eq!(names, ["Zoology", "Algebra", "Music"]);
}

#[test]
fn grade_boundaries_are_inclusive_lower_bounds() {
    assert_eq!(Grade::for_marks(100.0), Grade::A);
    assert_eq!(Grade::for_marks(70.0), Grade::A);
    assert_eq!(Grade::for_marks(69.999), Grade::B);
    assert_eq!(Grade::for_marks(60.0), Grade::B);
    assert_eq!(Grade::for_marks(59.999), Grade::C);
    assert_eq!(Grade::for_marks(50.0), Grade::C);
    assert_eq!(Grade::for_marks(40.0), Grade::D);
    assert_eq!(Grade::for_marks(39.999), Grade::F);
    assert_eq!(Grade::for_marks(0.0), Grade::F);
}

#[test]
fn grade_displays_as_single_letter() {
    assert_eq!(Grade::for_marks(85.0).to_string(), "A");
    assert_eq!(Grade::for_marks(10.0).to_string(), "F");
}

#[test]
fn validate_rejects_blank_student_id() {
    let record = StudentRecord::new("  ", "Alice");
    assert_eq!(
        record.validate().unwrap_err(),
        StudentValidationError::EmptyStudentId
    );

    let record = StudentRecord::new("S1", "Alice");
    assert!(record.validate().is_ok());
}

#[test]
fn record_serializes_and_deserializes() {
    let mut record = StudentRecord::new("S1", "Alice");
    record.add_subject("Math", 80.0);

    let json = serde_json::to_string(&record).unwrap();
    let restored: StudentRecord = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, record);
}
