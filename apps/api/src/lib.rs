//! Team Divider API Library
//!
//! This library provides the core functionality for the Team Divider API:
//! roster management, greedy two-team division, and the HTTP adapter that
//! exposes them.

pub mod api;
pub mod config;
pub mod domain;
pub mod infrastructure;
