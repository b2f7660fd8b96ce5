use thiserror::Error;

use crate::domain::player::value_objects::PlayerId;

/// Reasons a roster operation was rejected
///
/// A rejected operation never changes the roster, so callers are free to
/// ignore these and keep the form submittable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RosterError {
    #[error("Player name cannot be empty")]
    InvalidName,

    #[error("Rating {0} is out of range (must be 1-5)")]
    RatingOutOfRange(i64),

    #[error("No player at position {index} (roster has {len})")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Cannot add a player while another player is being edited")]
    EditInProgress,

    #[error("Player not found: {0}")]
    PlayerNotFound(PlayerId),
}

pub type RosterResult<T> = Result<T, RosterError>;
