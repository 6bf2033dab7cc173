//! tri-state-checkbox: yes/no/unknown values for form checkboxes.
//!
//! The core is [`cycle::cycle_tri_state`] plus the pure mappings in
//! [`display`]. Everything else is glue that consumes them.

pub mod adapter;
pub mod config;
pub mod cycle;
pub mod display;
pub mod error;
pub mod form;
pub mod logging;
pub mod report;
pub mod tui;
pub mod types;

pub use cycle::{TriStateField, cycle_tri_state, turn_field, turn_to_tri_state};
pub use error::TriStateError;
pub use types::TriState;
