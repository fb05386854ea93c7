//! School structure and grade/class validation.
//!
//! The school is split into two tiers with different class counts per grade.
//! [`SchoolStructure`] holds those bounds as one immutable value; both the
//! validator and the overview builder read them from here.

use serde::{Deserialize, Serialize};

/// Junior or senior high school division.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Junior,
    Senior,
}

/// Grade range and class count for one tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TierBounds {
    pub first_grade: u8,
    pub last_grade: u8,
    pub classes_per_grade: u8,
}

impl TierBounds {
    pub fn contains_grade(&self, grade: i64) -> bool {
        (i64::from(self.first_grade)..=i64::from(self.last_grade)).contains(&grade)
    }

    pub fn grades(&self) -> Vec<u8> {
        (self.first_grade..=self.last_grade).collect()
    }
}

/// Tier descriptor as exposed to clients (`{grades, classesPerGrade}`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TierInfo {
    pub grades: Vec<u8>,
    pub classes_per_grade: u8,
}

impl From<TierBounds> for TierInfo {
    fn from(bounds: TierBounds) -> Self {
        Self {
            grades: bounds.grades(),
            classes_per_grade: bounds.classes_per_grade,
        }
    }
}

/// A grade/class pair that passed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassId {
    pub grade: u8,
    pub class_number: u8,
}

impl std::fmt::Display for ClassId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.grade, self.class_number)
    }
}

/// Outcome of [`SchoolStructure::validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub error_message: Option<String>,
}

impl ValidationResult {
    fn valid() -> Self {
        Self {
            is_valid: true,
            error_message: None,
        }
    }

    fn invalid(message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            error_message: Some(message.into()),
        }
    }
}

pub const GRADE_RANGE_MESSAGE: &str = "Grade must be a number between 1 and 6";

/// Immutable school-structure configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchoolStructure {
    pub junior: TierBounds,
    pub senior: TierBounds,
}

impl Default for SchoolStructure {
    fn default() -> Self {
        Self {
            junior: TierBounds {
                first_grade: 1,
                last_grade: 3,
                classes_per_grade: 17,
            },
            senior: TierBounds {
                first_grade: 4,
                last_grade: 6,
                classes_per_grade: 16,
            },
        }
    }
}

impl SchoolStructure {
    /// Tier a grade belongs to, if any.
    pub fn tier_of(&self, grade: i64) -> Option<Tier> {
        if self.junior.contains_grade(grade) {
            Some(Tier::Junior)
        } else if self.senior.contains_grade(grade) {
            Some(Tier::Senior)
        } else {
            None
        }
    }

    pub fn bounds(&self, tier: Tier) -> TierBounds {
        match tier {
            Tier::Junior => self.junior,
            Tier::Senior => self.senior,
        }
    }

    /// Check a grade/class pair. `None` stands for a value that did not parse
    /// as an integer and always fails.
    pub fn validate(&self, grade: Option<i64>, class_number: Option<i64>) -> ValidationResult {
        let Some(tier) = grade.and_then(|g| self.tier_of(g)) else {
            return ValidationResult::invalid(GRADE_RANGE_MESSAGE);
        };
        let bounds = self.bounds(tier);
        let in_range = class_number
            .map(|c| (1..=i64::from(bounds.classes_per_grade)).contains(&c))
            .unwrap_or(false);
        if in_range {
            return ValidationResult::valid();
        }

        let label = match tier {
            Tier::Junior => "junior",
            Tier::Senior => "senior",
        };
        ValidationResult::invalid(format!(
            "For {} high school (grade {}-{}), class number must be between 1 and {}",
            label, bounds.first_grade, bounds.last_grade, bounds.classes_per_grade
        ))
    }

    /// Validate and narrow to a [`ClassId`]; the error carries the message.
    pub fn class_id(&self, grade: Option<i64>, class_number: Option<i64>) -> Result<ClassId, String> {
        let result = self.validate(grade, class_number);
        match (result.is_valid, grade, class_number) {
            (true, Some(g), Some(c)) => Ok(ClassId {
                grade: g as u8,
                class_number: c as u8,
            }),
            _ => Err(result
                .error_message
                .unwrap_or_else(|| GRADE_RANGE_MESSAGE.to_string())),
        }
    }
}

/// Strict integer parse for raw grade/class/period values.
///
/// Surrounding whitespace is ignored; anything else that is not a plain
/// integer yields `None`, which never compares equal to a real value.
pub fn parse_int(raw: &str) -> Option<i64> {
    raw.trim().parse::<i64>().ok()
}
