//! Controller layer: UI commands, user-facing notices, and command dispatch.

pub mod events;
pub mod orchestration;
