// Roster domain module
// Contains the roster aggregate root, its edit target and domain events

#![allow(clippy::module_inception)]

pub mod errors;
pub mod events;
pub mod roster;
pub mod value_objects;

// Re-export main types for convenience
pub use errors::{RosterError, RosterResult};
pub use events::RosterEvent;
pub use roster::Roster;
pub use value_objects::EditTarget;
