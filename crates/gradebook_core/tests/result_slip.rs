use gradebook_core::{result_slip, StudentRecord};

#[test]
fn slip_lists_units_in_insertion_order_with_grades_and_summary() {
    let mut record = StudentRecord::new("S1", "Alice");
    record.add_subject("Math", 80.0);
    record.add_subject("Eng", 55.0);

    let expected = "---------------------------------\n\
                    Student ID:\t\tS1\n\
                    Name:\t\t\tAlice\n\
                    ---------------------------------\n\
                    Units\t\t\tMarks\tGrade\n\
                    Math            \t80\tA\n\
                    Eng             \t55\tC\n\
                    Total Marks:\t\t135\n\
                    Average Marks:\t\t67.50\tB\n\
                    ---------------------------------\n";
    assert_eq!(result_slip(&record), expected);
}

#[test]
fn slip_for_empty_record_shows_zero_totals() {
    let record = StudentRecord::new("S2", "Bob");
    let slip = result_slip(&record);

    assert!(slip.contains("Student ID:\t\tS2"));
    assert!(slip.contains("Total Marks:\t\t0\n"));
    assert!(slip.contains("Average Marks:\t\t0.00\tF\n"));
}

#[test]
fn slip_preserves_fractional_marks() {
    let mut record = StudentRecord::new("S3", "Cara");
    record.add_subject("Chem", 62.5);

    let slip = result_slip(&record);
    assert!(slip.contains("Chem            \t62.5\tB\n"));
}
