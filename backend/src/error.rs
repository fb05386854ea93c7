//! Error taxonomy returned by the timetable service.

/// Result type for timetable service operations.
pub type TimetableResult<T> = Result<T, TimetableError>;

/// Why a timetable request produced no timetable.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TimetableError {
    /// Grade or class number malformed or out of range.
    #[error("{0}")]
    Validation(String),

    /// No usable source file exists at all.
    #[error("Timetable data not found")]
    SourceNotFound,

    /// Source data exists but has nothing for this class.
    #[error("No timetable found for grade {grade}, class {class_number}")]
    NoMatch { grade: u8, class_number: u8 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(TimetableError::SourceNotFound.to_string(), "Timetable data not found");
        assert_eq!(
            TimetableError::NoMatch { grade: 3, class_number: 5 }.to_string(),
            "No timetable found for grade 3, class 5"
        );
        assert_eq!(TimetableError::Validation("bad".into()).to_string(), "bad");
    }
}
