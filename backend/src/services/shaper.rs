//! Group records by day and order each day by period.

use crate::models::{TimetableByDay, TimetableRecord};

/// Group `records` by day, then stable-sort each day by period.
///
/// Records sharing a period keep their input order. Missing days or periods
/// are not filled in.
pub fn shape(records: impl IntoIterator<Item = TimetableRecord>) -> TimetableByDay {
    let mut by_day = TimetableByDay::new();
    for record in records {
        by_day
            .entry(record.day.clone())
            .or_default()
            .push(record.into());
    }
    for entries in by_day.values_mut() {
        entries.sort_by_key(|e| e.period);
    }
    by_day
}
