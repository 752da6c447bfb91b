//! Discrete user actions and the notices shown when one is rejected.

use shared::{
    domain::Column,
    error::{ErrorCode, RosterError},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiCommand {
    AddStudent,
    EditSelected,
    DeleteSelected,
    ToggleTheme,
    SelectRow(usize),
    ClearSelection,
    Search(String),
    SortBy(Column),
    DismissNotice,
}

impl UiCommand {
    pub fn name(&self) -> &'static str {
        match self {
            UiCommand::AddStudent => "add_student",
            UiCommand::EditSelected => "edit_selected",
            UiCommand::DeleteSelected => "delete_selected",
            UiCommand::ToggleTheme => "toggle_theme",
            UiCommand::SelectRow(_) => "select_row",
            UiCommand::ClearSelection => "clear_selection",
            UiCommand::Search(_) => "search",
            UiCommand::SortBy(_) => "sort_by",
            UiCommand::DismissNotice => "dismiss_notice",
        }
    }
}

/// Modal message for a rejected action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    code: ErrorCode,
    message: String,
}

impl Notice {
    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn title(&self) -> &'static str {
        match self.code {
            ErrorCode::Validation => "Missing fields",
            ErrorCode::Format => "Invalid age",
            ErrorCode::NoSelection => "No student selected",
        }
    }
}

impl From<RosterError> for Notice {
    fn from(err: RosterError) -> Self {
        Self {
            code: err.code(),
            message: err.to_string(),
        }
    }
}
