//! Form validation and the add/edit/delete operations against the store.

use shared::{
    domain::{SelectionAction, StoreIndex, Student},
    error::RosterError,
};
use storage::RecordStore;
use tracing::debug;

/// Raw text of the three form inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StudentForm {
    pub name: String,
    pub age: String,
    pub course: String,
}

impl StudentForm {
    pub fn new(
        name: impl Into<String>,
        age: impl Into<String>,
        course: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            age: age.into(),
            course: course.into(),
        }
    }

    pub fn from_student(student: &Student) -> Self {
        Self::new(
            student.name.clone(),
            student.age.to_string(),
            student.course.clone(),
        )
    }

    pub fn clear(&mut self) {
        self.name.clear();
        self.age.clear();
        self.course.clear();
    }

    pub fn is_blank(&self) -> bool {
        self.name.is_empty() && self.age.is_empty() && self.course.is_empty()
    }

    /// Validates the fields. Emptiness is checked before the age format, and
    /// whitespace counts as content.
    pub fn parse(&self) -> Result<Student, RosterError> {
        if self.name.is_empty() || self.age.is_empty() || self.course.is_empty() {
            return Err(RosterError::Validation);
        }
        let age = self
            .age
            .parse::<i32>()
            .map_err(|_| RosterError::Format)?;
        Ok(Student::new(self.name.clone(), age, self.course.clone()))
    }
}

/// Owns the record store and applies validated form submissions to it.
#[derive(Debug, Clone, Default)]
pub struct FormController {
    store: RecordStore,
}

impl FormController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_store(store: RecordStore) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn add(&mut self, form: &mut StudentForm) -> Result<StoreIndex, RosterError> {
        let student = form.parse()?;
        let index = self.store.push(student);
        form.clear();
        Ok(index)
    }

    pub fn edit(
        &mut self,
        selected: Option<StoreIndex>,
        form: &mut StudentForm,
    ) -> Result<StoreIndex, RosterError> {
        let index = self.selection(selected, SelectionAction::Edit)?;
        let student = form.parse()?;
        self.store
            .replace(index, student)
            .map_err(|_| RosterError::NoSelection {
                action: SelectionAction::Edit,
            })?;
        form.clear();
        Ok(index)
    }

    pub fn delete(&mut self, selected: Option<StoreIndex>) -> Result<Student, RosterError> {
        let index = self.selection(selected, SelectionAction::Delete)?;
        self.store
            .remove(index)
            .map_err(|_| RosterError::NoSelection {
                action: SelectionAction::Delete,
            })
    }

    // A selection that no longer points into the store is treated as no selection.
    fn selection(
        &self,
        selected: Option<StoreIndex>,
        action: SelectionAction,
    ) -> Result<StoreIndex, RosterError> {
        match selected {
            Some(index) if self.store.contains_index(index) => Ok(index),
            Some(index) => {
                debug!(index = index.0, len = self.store.len(), %action, "stale selection");
                Err(RosterError::NoSelection { action })
            }
            None => Err(RosterError::NoSelection { action }),
        }
    }
}

#[cfg(test)]
#[path = "tests/form_tests.rs"]
mod tests;
