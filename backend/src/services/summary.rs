//! Counts and distinct subjects/teachers of a shaped timetable.

use serde::{Deserialize, Serialize};

use crate::models::TimetableByDay;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimetableSummary {
    pub days: usize,
    pub total_periods: usize,
    pub unique_subjects: Vec<String>,
    pub unique_teachers: Vec<String>,
}

/// Summarize a timetable. Distinct lists keep first-seen order and leave out
/// empty values.
pub fn summarize(timetable: &TimetableByDay) -> TimetableSummary {
    let mut subjects: Vec<String> = Vec::new();
    let mut teachers: Vec<String> = Vec::new();
    for entry in timetable.values().flatten() {
        if !entry.subject.is_empty() && !subjects.contains(&entry.subject) {
            subjects.push(entry.subject.clone());
        }
        if !entry.teacher.is_empty() && !teachers.contains(&entry.teacher) {
            teachers.push(entry.teacher.clone());
        }
    }

    TimetableSummary {
        days: timetable.len(),
        total_periods: timetable.values().map(Vec::len).sum(),
        unique_subjects: subjects,
        unique_teachers: teachers,
    }
}
