/// Types for registered course interests
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// The three selection categories of the interest form.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum SelectionField {
    Unit,
    Day,
    Shift,
}

impl fmt::Display for SelectionField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SelectionField::Unit => "unit",
            SelectionField::Day => "day",
            SelectionField::Shift => "shift",
        };
        write!(f, "{name}")
    }
}

/// One registration of intent: a course plus the visitor's preferred units,
/// weekdays, and shifts.
///
/// Selections are genuine ordered lists, not the delimited string the
/// prototype passed around; `join_selections`/`split_selections` cover the
/// legacy flat format where it is still needed. Created once on form
/// submission and immutable afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseInterest {
    pub id: Uuid,
    pub course_name: String,
    pub selected_units: Vec<String>,
    pub selected_days: Vec<String>,
    pub selected_shifts: Vec<String>,
    pub registered_at: DateTime<Utc>,
}

impl CourseInterest {
    /// First preferred unit, used by summary displays.
    pub fn first_unit(&self) -> Option<&str> {
        self.selected_units.first().map(String::as_str)
    }
}

/// Joins selections into the prototype's `", "`-delimited flat form.
pub fn join_selections(values: &[String]) -> String {
    values.join(", ")
}

/// Splits a `", "`-delimited selection string back into an ordered list.
///
/// Empty segments are skipped and duplicates removed, keeping the first
/// occurrence. None of the fixed reference values contain the delimiter, so
/// the round trip is exact for well-formed input.
pub fn split_selections(joined: &str) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for part in joined.split(", ") {
        let part = part.trim();
        if part.is_empty() {
            continue;
        }
        if !out.iter().any(|existing| existing == part) {
            out.push(part.to_owned());
        }
    }
    out
}
