//! CSV export of a resolved timetable.

use anyhow::{Context, Result};

use super::resolver::ResolvedTimetable;

/// Render `resolved` as CSV, one line per entry.
///
/// Columns: day, period, subject, teacher, room, grade, class
pub fn export_csv(resolved: &ResolvedTimetable) -> Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);
    wtr.write_record(["day", "period", "subject", "teacher", "room", "grade", "class"])?;

    let grade = resolved.class.grade.to_string();
    let class_number = resolved.class.class_number.to_string();
    for (day, entries) in &resolved.timetable {
        for e in entries {
            wtr.write_record([
                day.as_str(),
                &e.period.to_string(),
                &e.subject,
                &e.teacher,
                &e.room,
                &grade,
                &class_number,
            ])?;
        }
    }

    let bytes = wtr.into_inner().context("failed to flush CSV writer")?;
    String::from_utf8(bytes).context("CSV output is not valid UTF-8")
}

/// File name offered for download.
pub fn export_file_name(resolved: &ResolvedTimetable) -> String {
    format!(
        "timetable-grade{}-class{}.csv",
        resolved.class.grade, resolved.class.class_number
    )
}
