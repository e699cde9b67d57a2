/// Matching of registered interests against the catalog
mod processor;

pub use processor::InterestMatcher;

use crate::catalog::SimilarCourseOffering;
use crate::interest::CourseInterest;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A concrete open class matching an interest.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OpenSlot {
    pub unit: String,
    pub day: String,
    pub shift: String,
    pub start_date: NaiveDate,
    pub enroll_deadline: NaiveDate,
}

/// Outcome of resolving an interest against the availability table.
///
/// No match is a normal outcome, never an error.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Availability {
    Available(OpenSlot),
    Unavailable,
}

impl Availability {
    pub fn is_available(&self) -> bool {
        matches!(self, Availability::Available(_))
    }

    pub fn slot(&self) -> Option<&OpenSlot> {
        match self {
            Availability::Available(slot) => Some(slot),
            Availability::Unavailable => None,
        }
    }
}

/// Everything the profile page shows for one registered interest.
///
/// Recommendations are only produced when no slot is available.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterestReport {
    pub interest: CourseInterest,
    pub availability: Availability,
    pub recommendations: Vec<SimilarCourseOffering>,
}
