//! Roster behaviour behind the desktop window: form validation, filtering,
//! the sortable display projection and the theme toggle.

pub mod filter;
pub mod form;
pub mod projection;
mod session;
pub mod theme;

pub use form::{FormController, StudentForm};
pub use projection::{Projection, SortDirection, SortOrder};
pub use session::RosterSession;
pub use theme::{ButtonColors, Palette, Rgb, Theme};
