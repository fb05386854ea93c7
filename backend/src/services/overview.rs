//! Which grade/class combinations have timetable data.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::{DocumentMetadata, SchoolStructure, SourceKind, TierInfo};
use crate::sources::TimetableSource;

/// Available classes plus the fixed tier descriptors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimetableOverview {
    pub available_grades: Vec<i64>,
    pub grade_class_map: BTreeMap<i64, Vec<i64>>,
    pub junior_high_school: TierInfo,
    pub senior_high_school: TierInfo,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<SourceKind>,
    #[serde(flatten)]
    pub metadata: DocumentMetadata,
}

/// Build the overview from the first source that can index its classes.
///
/// Never fails: with no usable source the class collections are empty.
pub fn build_overview(
    school: &SchoolStructure,
    sources: &[Arc<dyn TimetableSource>],
) -> TimetableOverview {
    let mut overview = TimetableOverview {
        available_grades: Vec::new(),
        grade_class_map: BTreeMap::new(),
        junior_high_school: school.junior.into(),
        senior_high_school: school.senior.into(),
        source: None,
        metadata: DocumentMetadata::default(),
    };

    let Some(index) = sources.iter().find_map(|s| s.class_index()) else {
        debug!("No timetable source available for overview");
        return overview;
    };

    overview.available_grades = index.classes.keys().copied().collect();
    overview.grade_class_map = index
        .classes
        .into_iter()
        .map(|(grade, classes)| (grade, classes.into_iter().collect()))
        .collect();
    overview.source = Some(index.kind);
    overview.metadata = index.metadata;
    overview
}
