use std::path::Path;
use std::sync::Arc;

use super::*;
use crate::error::TimetableError;
use crate::sources::MemoryFiles;

const JSON_PATH: &str = "/data/timetable.json";
const CSV_PATH: &str = "/data/mocking.csv";

const CSV_TEXT: &str = "\
day,period,subject,teacher,room,grade,class
Mon,2,Art,B,201,1,1
Mon,1,Math,A,101,1,1
Tue,1,Math,A,101,1,1
Mon,1,Music,C,301,1,2
";

fn service(store: &MemoryFiles) -> TimetableService {
    TimetableService::from_store(
        Arc::new(store.clone()),
        Path::new(JSON_PATH),
        Path::new(CSV_PATH),
    )
}

#[test]
fn test_timetable_from_csv_when_json_absent() {
    let store = MemoryFiles::new().with_file(CSV_PATH, CSV_TEXT);
    let resolved = service(&store).timetable(Some(1), Some(1)).unwrap();

    assert_eq!(resolved.source, SourceKind::Csv);
    let mon: Vec<&str> = resolved.timetable["Mon"]
        .iter()
        .map(|e| e.subject.as_str())
        .collect();
    assert_eq!(mon, vec!["Math", "Art"]);
    assert_eq!(resolved.timetable["Tue"].len(), 1);
}

#[test]
fn test_json_match_never_reads_csv() {
    let store = MemoryFiles::new()
        .with_file(
            JSON_PATH,
            r#"{"class": "1/1", "semester": "2/2567", "days": {"Mon": [{"subject": "Thai"}]}}"#,
        )
        .with_file(CSV_PATH, CSV_TEXT);
    let resolved = service(&store).timetable(Some(1), Some(1)).unwrap();

    assert_eq!(resolved.source, SourceKind::Json);
    assert_eq!(resolved.metadata.semester.as_deref(), Some("2/2567"));
    assert!(store.was_read(Path::new(JSON_PATH)));
    assert!(!store.was_read(Path::new(CSV_PATH)));
}

#[test]
fn test_invalid_class_reads_nothing() {
    let store = MemoryFiles::new().with_file(CSV_PATH, CSV_TEXT);
    let err = service(&store).timetable(Some(1), Some(18)).unwrap_err();

    assert!(matches!(err, TimetableError::Validation(_)));
    assert!(store.reads().is_empty());
}

#[test]
fn test_errors_by_source_state() {
    let empty = MemoryFiles::new();
    assert_eq!(
        service(&empty).timetable(Some(2), Some(2)).unwrap_err(),
        TimetableError::SourceNotFound
    );

    let csv_only = MemoryFiles::new().with_file(CSV_PATH, CSV_TEXT);
    assert_eq!(
        service(&csv_only).timetable(Some(2), Some(2)).unwrap_err(),
        TimetableError::NoMatch {
            grade: 2,
            class_number: 2
        }
    );
}

#[test]
fn test_rows_without_usable_periods_are_no_match() {
    let store = MemoryFiles::new().with_file(
        CSV_PATH,
        "grade,class,day,period,subject,teacher,room\n1,1,Mon,x,Math,A,101\n",
    );
    assert_eq!(
        service(&store).timetable(Some(1), Some(1)).unwrap_err(),
        TimetableError::NoMatch {
            grade: 1,
            class_number: 1
        }
    );
}

#[test]
fn test_summary_for_class() {
    let store = MemoryFiles::new().with_file(CSV_PATH, CSV_TEXT);
    let summary = service(&store).summary(Some(1), Some(1)).unwrap();

    assert_eq!(summary.class, ClassId { grade: 1, class_number: 1 });
    assert_eq!(summary.summary.days, 2);
    assert_eq!(summary.summary.total_periods, 3);
    assert_eq!(summary.summary.unique_subjects, vec!["Math", "Art"]);

    let value = serde_json::to_value(&summary).unwrap();
    assert_eq!(value["grade"], 1);
    assert_eq!(value["classNumber"], 1);
    assert_eq!(value["source"], "csv");
    assert_eq!(value["summary"]["totalPeriods"], 3);
}

#[test]
fn test_source_status_follows_files() {
    let store = MemoryFiles::new().with_file(CSV_PATH, CSV_TEXT);
    let svc = service(&store);
    assert_eq!(svc.source_status(), SourceStatus { json: false, csv: true });

    store.insert(JSON_PATH, r#"{"class": "1/1", "days": {}}"#);
    store.remove(Path::new(CSV_PATH));
    assert_eq!(svc.source_status(), SourceStatus { json: true, csv: false });
}

#[test]
fn test_overview_and_validate() {
    let store = MemoryFiles::new().with_file(CSV_PATH, CSV_TEXT);
    let svc = service(&store);

    let overview = svc.overview();
    assert_eq!(overview.available_grades, vec![1]);
    assert_eq!(overview.grade_class_map[&1], vec![1, 2]);

    assert!(svc.validate(Some(6), Some(16)).is_valid);
    assert!(!svc.validate(Some(6), Some(17)).is_valid);
    assert!(!svc.validate(None, Some(1)).is_valid);
}
