//! Process-local session state.
//!
//! Holds everything the prototype keeps in memory for one visit: which view
//! is showing, whether the visitor logged in, and the interests registered so
//! far. All of it is lost when the session is dropped; interests are appended
//! on submission and never removed in this scope.

use crate::interest::types::CourseInterest;

/// The two top-level views of the prototype.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Course,
    Profile,
}

/// In-memory state for a single visitor session.
#[derive(Debug)]
pub struct SessionState {
    view: View,
    logged_in: bool,
    interests: Vec<CourseInterest>,
}

impl SessionState {
    /// Starts a fresh session on the course page.
    pub fn new() -> Self {
        SessionState {
            view: View::Course,
            logged_in: false,
            interests: Vec::new(),
        }
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn navigate(&mut self, view: View) {
        self.view = view;
    }

    pub fn is_logged_in(&self) -> bool {
        self.logged_in
    }

    pub fn login(&mut self) {
        self.logged_in = true;
    }

    /// Appends a submitted interest to the session.
    pub fn register(&mut self, interest: CourseInterest) {
        self.interests.push(interest);
    }

    /// Registered interests, oldest first.
    pub fn interests(&self) -> &[CourseInterest] {
        &self.interests
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}
