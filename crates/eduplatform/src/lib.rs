//! Course-interest registration and matching for the EduPlatform prototype.
//!
//! A visitor registers interest in a course by picking preferred units,
//! weekdays, and shifts. The [`matching`] resolvers check those preferences
//! against the static [`catalog`] availability table and, when nothing is
//! open, fall back to a short tiered search over the similar-course list.

pub mod catalog;
pub mod interest;
pub mod matching;

pub use catalog::Catalog;
pub use interest::{CourseInterest, InterestError, RegistrationForm, SelectionField, SessionState};
pub use matching::{Availability, InterestMatcher, InterestReport};
