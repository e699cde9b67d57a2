//! The interest registration form and its state machine.
//!
//! The form moves between `Browsing` and `DropdownOpen(field)` as the visitor
//! interacts with the three multi-select dropdowns, and is submittable only
//! once every selection category is non-empty. Submission builds an immutable
//! [`CourseInterest`]; closing the form afterwards is the caller's job.

use crate::catalog::Catalog;
use crate::interest::error::InterestError;
use crate::interest::types::{CourseInterest, SelectionField};
use chrono::Utc;
use uuid::Uuid;

/// Interest form state for one course.
#[derive(Debug, Clone)]
pub struct RegistrationForm {
    course_name: String,
    units: Vec<String>,
    days: Vec<String>,
    shifts: Vec<String>,
    open_dropdown: Option<SelectionField>,
}

impl RegistrationForm {
    /// Opens a blank form for the given course.
    pub fn new(course_name: impl Into<String>) -> Self {
        RegistrationForm {
            course_name: course_name.into(),
            units: Vec::new(),
            days: Vec::new(),
            shifts: Vec::new(),
            open_dropdown: None,
        }
    }

    pub fn course_name(&self) -> &str {
        &self.course_name
    }

    /// The dropdown currently open, if any.
    pub fn open_dropdown(&self) -> Option<SelectionField> {
        self.open_dropdown
    }

    /// Opens the dropdown for `field`, or closes it if it is already open.
    pub fn toggle_dropdown(&mut self, field: SelectionField) {
        self.open_dropdown = if self.open_dropdown == Some(field) {
            None
        } else {
            Some(field)
        };
    }

    /// Closes any open dropdown, returning to the browsing state.
    pub fn close_dropdown(&mut self) {
        self.open_dropdown = None;
    }

    /// Current selections for one category, in order of selection.
    pub fn selections(&self, field: SelectionField) -> &[String] {
        match field {
            SelectionField::Unit => &self.units,
            SelectionField::Day => &self.days,
            SelectionField::Shift => &self.shifts,
        }
    }

    /// Selects `value` in the given category, or deselects it when already
    /// selected. Values outside the catalog's reference list are rejected.
    pub fn toggle(
        &mut self,
        field: SelectionField,
        value: &str,
        catalog: &Catalog,
    ) -> Result<(), InterestError> {
        if !Self::reference_list(catalog, field).iter().any(|v| v == value) {
            return Err(InterestError::UnknownValue {
                field,
                value: value.to_owned(),
            });
        }

        let selected = self.selections_mut(field);
        if let Some(pos) = selected.iter().position(|v| v == value) {
            selected.remove(pos);
        } else {
            selected.push(value.to_owned());
        }
        Ok(())
    }

    /// The "select all" toggle: selects the full reference list, or clears the
    /// category when everything is already selected.
    pub fn toggle_select_all(&mut self, field: SelectionField, catalog: &Catalog) {
        let reference = Self::reference_list(catalog, field);
        let selected = self.selections_mut(field);
        if selected.len() == reference.len() {
            selected.clear();
        } else {
            *selected = reference.to_vec();
        }
    }

    /// Submission is enabled only when each category has at least one entry.
    pub fn is_valid(&self) -> bool {
        !self.units.is_empty() && !self.days.is_empty() && !self.shifts.is_empty()
    }

    /// Builds the interest record from the current selections.
    ///
    /// Fails with the first empty category; there is no partial submission.
    pub fn submit(&self) -> Result<CourseInterest, InterestError> {
        for field in [SelectionField::Unit, SelectionField::Day, SelectionField::Shift] {
            if self.selections(field).is_empty() {
                return Err(InterestError::EmptySelection { field });
            }
        }

        Ok(CourseInterest {
            id: Uuid::new_v4(),
            course_name: self.course_name.clone(),
            selected_units: self.units.clone(),
            selected_days: self.days.clone(),
            selected_shifts: self.shifts.clone(),
            registered_at: Utc::now(),
        })
    }

    fn selections_mut(&mut self, field: SelectionField) -> &mut Vec<String> {
        match field {
            SelectionField::Unit => &mut self.units,
            SelectionField::Day => &mut self.days,
            SelectionField::Shift => &mut self.shifts,
        }
    }

    fn reference_list(catalog: &Catalog, field: SelectionField) -> &[String] {
        match field {
            SelectionField::Unit => catalog.units(),
            SelectionField::Day => catalog.days(),
            SelectionField::Shift => catalog.shifts(),
        }
    }
}
