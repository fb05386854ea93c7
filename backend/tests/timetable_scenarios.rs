//! End-to-end lookups against real files in a temporary data directory.

mod support;

use std::fs;

use support::{data_dir, service_in, SINGLE_ROW_CSV};
use timetable::models::{SourceKind, TimetableEntry, BREAK_LABEL};
use timetable::sources::{csv_reader, CsvReader, LocalFiles};
use timetable::services::shape;
use timetable::TimetableError;

const JSON_2_5: &str = r#"{
    "class": "2/5",
    "school": "Example School",
    "semester": "1/2567",
    "periods": ["08:30-09:20", "09:20-10:10", "12:00-13:00"],
    "days": {
        "Mon": [
            {"subject": "Math", "teacher": "A", "room": "101"},
            null,
            "พักกลางวัน"
        ]
    }
}"#;

#[test]
fn csv_only_single_row() {
    let dir = data_dir(&[("mocking.csv", SINGLE_ROW_CSV)]);
    let resolved = service_in(dir.path()).timetable(Some(1), Some(1)).unwrap();

    assert_eq!(resolved.source, SourceKind::Csv);
    assert_eq!(resolved.timetable.len(), 1);
    assert_eq!(
        resolved.timetable["Mon"],
        vec![TimetableEntry {
            period: 0,
            subject: "Math".to_string(),
            teacher: "A".to_string(),
            room: "101".to_string(),
        }]
    );
}

#[test]
fn neither_file_is_source_not_found() {
    let dir = data_dir(&[]);
    let err = service_in(dir.path()).timetable(Some(1), Some(1)).unwrap_err();
    assert_eq!(err, TimetableError::SourceNotFound);
}

#[test]
fn json_document_serves_its_class() {
    let dir = data_dir(&[("timetable.json", JSON_2_5)]);
    let resolved = service_in(dir.path()).timetable(Some(2), Some(5)).unwrap();

    assert_eq!(resolved.source, SourceKind::Json);
    assert_eq!(resolved.metadata.school.as_deref(), Some("Example School"));
    assert_eq!(resolved.metadata.periods.as_ref().map(Vec::len), Some(3));

    let mon = &resolved.timetable["Mon"];
    assert_eq!(mon.len(), 3);
    assert_eq!(mon[0].subject, "Math");
    assert_eq!(mon[1].period, 1);
    assert_eq!(mon[1].subject, "");
    assert_eq!(mon[2].subject, BREAK_LABEL);
    assert_eq!(mon[2].teacher, "");
}

#[test]
fn json_mismatch_verdict_depends_on_csv() {
    let json_only = data_dir(&[("timetable.json", JSON_2_5)]);
    assert_eq!(
        service_in(json_only.path()).timetable(Some(3), Some(5)).unwrap_err(),
        TimetableError::SourceNotFound
    );

    let both = data_dir(&[("timetable.json", JSON_2_5), ("mocking.csv", SINGLE_ROW_CSV)]);
    assert_eq!(
        service_in(both.path()).timetable(Some(3), Some(5)).unwrap_err(),
        TimetableError::NoMatch {
            grade: 3,
            class_number: 5
        }
    );
}

#[test]
fn json_precedence_over_csv_for_same_class() {
    let csv = "grade,class,day,period,subject,teacher,room\n2,5,Tue,0,Art,Z,9\n";
    let dir = data_dir(&[("timetable.json", JSON_2_5), ("mocking.csv", csv)]);
    let resolved = service_in(dir.path()).timetable(Some(2), Some(5)).unwrap();

    assert_eq!(resolved.source, SourceKind::Json);
    assert!(!resolved.timetable.contains_key("Tue"));
}

#[test]
fn malformed_json_falls_back_to_csv() {
    let dir = data_dir(&[("timetable.json", "{ not json"), ("mocking.csv", SINGLE_ROW_CSV)]);
    let resolved = service_in(dir.path()).timetable(Some(1), Some(1)).unwrap();
    assert_eq!(resolved.source, SourceKind::Csv);
}

#[test]
fn csv_round_trip_sorts_periods() {
    let csv = "\
grade,class,day,period,subject,teacher,room
1,1,Mon,2,Art,B,201
1,1,Mon,1,Math,A,101
";
    let dir = data_dir(&[("mocking.csv", csv)]);
    let reader = CsvReader::new(std::sync::Arc::new(LocalFiles), dir.path().join("mocking.csv"));

    let rows = reader.for_class(1, 1);
    let shaped = shape(csv_reader::rows_to_records(&rows));
    let periods: Vec<u32> = shaped["Mon"].iter().map(|e| e.period).collect();
    assert_eq!(periods, vec![1, 2]);
}

#[test]
fn files_are_reread_per_request() {
    let dir = data_dir(&[]);
    let service = service_in(dir.path());
    assert!(service.timetable(Some(1), Some(1)).is_err());

    fs::write(dir.path().join("mocking.csv"), SINGLE_ROW_CSV).unwrap();
    assert!(service.timetable(Some(1), Some(1)).is_ok());
}

#[test]
fn overview_from_csv() {
    let csv = "\
grade,class,day,period,subject,teacher,room
2,3,Mon,0,Math,A,101
1,2,Mon,0,Math,A,101
1,1,Mon,0,Math,A,101
1,2,Tue,0,Math,A,101
";
    let dir = data_dir(&[("mocking.csv", csv)]);
    let overview = service_in(dir.path()).overview();

    assert_eq!(overview.available_grades, vec![1, 2]);
    assert_eq!(overview.grade_class_map[&1], vec![1, 2]);
    assert_eq!(overview.grade_class_map[&2], vec![3]);
}
