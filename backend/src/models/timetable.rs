//! Timetable domain types shared by both source formats.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

/// Label used for the lunch-break slot, both in JSON input and in output.
pub const BREAK_LABEL: &str = "พักกลางวัน";

/// Normalized timetable row, independent of where it was read from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimetableRecord {
    pub day: String,
    pub period: u32,
    pub subject: String,
    pub teacher: String,
    pub room: String,
}

/// One entry of a day's list in the response (the day is the map key).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimetableEntry {
    pub period: u32,
    pub subject: String,
    pub teacher: String,
    pub room: String,
}

impl From<TimetableRecord> for TimetableEntry {
    fn from(record: TimetableRecord) -> Self {
        Self {
            period: record.period,
            subject: record.subject,
            teacher: record.teacher,
            room: record.room,
        }
    }
}

/// Day name to entries sorted by period. Day order carries no meaning.
pub type TimetableByDay = BTreeMap<String, Vec<TimetableEntry>>;

/// Which input file served a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    Json,
    Csv,
}

impl SourceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceKind::Json => "json",
            SourceKind::Csv => "csv",
        }
    }
}

impl std::fmt::Display for SourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One period slot of a JSON day list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Slot {
    Empty,
    Break,
    Lesson {
        subject: String,
        teacher: String,
        room: String,
    },
}

#[derive(Deserialize)]
struct LessonFields {
    #[serde(default)]
    subject: Option<String>,
    #[serde(default)]
    teacher: Option<String>,
    #[serde(default)]
    room: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawSlot {
    Text(String),
    Object(serde_json::Map<String, serde_json::Value>),
    #[allow(dead_code)]
    Other(serde_json::Value),
}

impl<'de> Deserialize<'de> for Slot {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let slot = match Option::<RawSlot>::deserialize(deserializer)? {
            None => Slot::Empty,
            Some(RawSlot::Text(text)) if text == BREAK_LABEL => Slot::Break,
            Some(RawSlot::Text(_)) | Some(RawSlot::Other(_)) => Slot::Empty,
            Some(RawSlot::Object(map)) => {
                match serde_json::from_value::<LessonFields>(serde_json::Value::Object(map)) {
                    Ok(fields) => Slot::Lesson {
                        subject: fields.subject.unwrap_or_default(),
                        teacher: fields.teacher.unwrap_or_default(),
                        room: fields.room.unwrap_or_default(),
                    },
                    Err(_) => Slot::Empty,
                }
            }
        };
        Ok(slot)
    }
}

impl Slot {
    /// Convert to a record for `day` at position `period`.
    pub fn into_record(self, day: &str, period: u32) -> TimetableRecord {
        let (subject, teacher, room) = match self {
            Slot::Empty => (String::new(), String::new(), String::new()),
            Slot::Break => (BREAK_LABEL.to_string(), String::new(), String::new()),
            Slot::Lesson {
                subject,
                teacher,
                room,
            } => (subject, teacher, room),
        };
        TimetableRecord {
            day: day.to_string(),
            period,
            subject,
            teacher,
            room,
        }
    }
}

/// The single-class JSON timetable document.
#[derive(Debug, Clone, Deserialize)]
pub struct TimetableDocument {
    /// `"<grade>/<classNumber>"`, e.g. `"6/14"`.
    pub class: String,
    #[serde(default)]
    pub school: Option<String>,
    #[serde(default)]
    pub semester: Option<String>,
    #[serde(default)]
    pub program: Option<String>,
    #[serde(default)]
    pub periods: Option<Vec<String>>,
    #[serde(default)]
    pub days: BTreeMap<String, Vec<Slot>>,
}

impl TimetableDocument {
    pub fn metadata(&self) -> DocumentMetadata {
        DocumentMetadata {
            school: self.school.clone(),
            semester: self.semester.clone(),
            program: self.program.clone(),
            periods: self.periods.clone(),
        }
    }

    /// Flatten every day's slots into records, `period` being the slot index.
    pub fn into_records(self) -> Vec<TimetableRecord> {
        let mut records = Vec::new();
        for (day, slots) in self.days {
            for (index, slot) in slots.into_iter().enumerate() {
                records.push(slot.into_record(&day, index as u32));
            }
        }
        records
    }
}

/// Optional metadata passed through from a JSON document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentMetadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub school: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub semester: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub program: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub periods: Option<Vec<String>>,
}
