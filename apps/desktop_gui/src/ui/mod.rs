//! UI layer for the roster window: app shell, student table, and theme visuals.

pub mod app;
pub mod table;
pub mod theme;

pub use app::RosterApp;
