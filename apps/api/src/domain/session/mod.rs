// Session domain module
// The working state one user drives through the presentation layer

#![allow(clippy::module_inception)]

pub mod session;
pub mod value_objects;

pub use session::Session;
pub use value_objects::PlayerDraft;
