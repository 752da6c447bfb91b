//! Types shared by every crate in the roster workspace.

pub mod domain;
pub mod error;
