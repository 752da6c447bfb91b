use shared::{
    domain::{Column, StoreIndex, Student},
    error::RosterError,
};
use storage::RecordStore;
use tracing::{debug, info};

use crate::{FormController, Projection, StudentForm, Theme};

/// Everything the roster window shows, driven by discrete commands.
///
/// The selection is held as a store position, so sorting or filtering the
/// view never changes which record edit and delete act on.
#[derive(Debug, Default)]
pub struct RosterSession {
    controller: FormController,
    form: StudentForm,
    projection: Projection,
    theme: Theme,
    selected: Option<StoreIndex>,
}

impl RosterSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_store(store: RecordStore) -> Self {
        let projection = Projection::new(&store);
        Self {
            controller: FormController::with_store(store),
            projection,
            ..Self::default()
        }
    }

    pub fn store(&self) -> &RecordStore {
        self.controller.store()
    }

    pub fn form(&self) -> &StudentForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut StudentForm {
        &mut self.form
    }

    pub fn projection(&self) -> &Projection {
        &self.projection
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn selected(&self) -> Option<StoreIndex> {
        self.selected
    }

    pub fn selected_display_row(&self) -> Option<usize> {
        self.selected
            .and_then(|index| self.projection.display_row(index))
    }

    /// Rows in display order, each with its store position.
    pub fn visible_rows(&self) -> impl Iterator<Item = (StoreIndex, &Student)> + '_ {
        let store = self.controller.store();
        self.projection
            .rows()
            .iter()
            .filter_map(move |index| store.get(*index).map(|student| (*index, student)))
    }

    pub fn submit_add(&mut self) -> Result<StoreIndex, RosterError> {
        let index = self.controller.add(&mut self.form)?;
        self.after_mutation();
        Ok(index)
    }

    pub fn submit_edit(&mut self) -> Result<StoreIndex, RosterError> {
        let index = self.controller.edit(self.selected, &mut self.form)?;
        self.after_mutation();
        Ok(index)
    }

    pub fn delete_selected(&mut self) -> Result<Student, RosterError> {
        let removed = self.controller.delete(self.selected)?;
        self.after_mutation();
        Ok(removed)
    }

    /// Selects a display row and loads its student into the form.
    pub fn select_row(&mut self, display_row: usize) -> Option<StoreIndex> {
        let index = self.projection.store_index(display_row)?;
        let student = self.controller.store().get(index)?;
        self.form = StudentForm::from_student(student);
        self.selected = Some(index);
        debug!(display_row, index = index.0, "selected student");
        Some(index)
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.projection.set_query(query, self.controller.store());
        if let Some(index) = self.selected {
            if !self.projection.contains(index) {
                self.selected = None;
            }
        }
    }

    pub fn toggle_sort(&mut self, column: Column) {
        self.projection.toggle_sort(column, self.controller.store());
    }

    pub fn toggle_theme(&mut self) -> Theme {
        self.theme.toggle();
        info!(theme = self.theme.label(), "theme toggled");
        self.theme
    }

    fn after_mutation(&mut self) {
        self.selected = None;
        self.projection.refresh(self.controller.store());
    }
}

#[cfg(test)]
#[path = "tests/session_tests.rs"]
mod tests;
