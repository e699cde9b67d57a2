/// Interest registration: data model, form state machine, session state,
/// and the optional persistent store
mod error;
mod registration;
mod session;
mod store;
mod types;

pub use error::InterestError;
pub use registration::RegistrationForm;
pub use session::{SessionState, View};
pub use store::InterestDbManager;
pub use types::{join_selections, split_selections, CourseInterest, SelectionField};
