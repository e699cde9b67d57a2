/// Types for the static course catalog
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Composite lookup key for one concrete class slot.
///
/// The availability table is a single flat map keyed by this tuple instead of
/// nested per-course/per-unit maps, so a lookup is one probe.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct SlotKey {
    pub course_name: String,
    pub unit: String,
    pub day: String,
    pub shift: String,
}

/// Availability data for one (course, unit, day, shift) slot.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AvailabilitySlot {
    pub available: bool,
    pub start_date: NaiveDate,
    pub enroll_deadline: NaiveDate,
}

/// Flat serde form of one availability table entry.
///
/// Catalog files keep slots as a record list; the in-memory `Catalog` indexes
/// them by `SlotKey` at construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlotRecord {
    pub course_name: String,
    pub unit: String,
    pub day: String,
    pub shift: String,
    pub available: bool,
    pub start_date: NaiveDate,
    pub enroll_deadline: NaiveDate,
}

impl SlotRecord {
    pub fn key(&self) -> SlotKey {
        SlotKey {
            course_name: self.course_name.clone(),
            unit: self.unit.clone(),
            day: self.day.clone(),
            shift: self.shift.clone(),
        }
    }

    pub fn slot(&self) -> AvailabilitySlot {
        AvailabilitySlot {
            available: self.available,
            start_date: self.start_date,
            enroll_deadline: self.enroll_deadline,
        }
    }
}

/// How an offering in the similar-course list relates to the course it is
/// suggested for. Descriptive metadata only; never used for ranking.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum MatchType {
    SameDayShift,
    SameUnitDifferentTime,
    SimilarCourse,
}

/// One entry of the similar-course offering list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimilarCourseOffering {
    pub name: String,
    pub code: String,
    pub unit: String,
    /// Distance from the visitor's reference location, in kilometers.
    pub distance_km: f64,
    pub day: String,
    pub shift: String,
    pub start_date: NaiveDate,
    pub enroll_deadline: NaiveDate,
    pub match_type: MatchType,
}
