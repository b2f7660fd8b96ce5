use serde::{Deserialize, Serialize};

use crate::domain::player::Player;

/// Pending values of the entry form
///
/// Unvalidated on purpose: it mirrors what the user typed, including
/// input that a submission would reject.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerDraft {
    pub name: String,
    pub rating: i64,
}

impl PlayerDraft {
    pub const DEFAULT_RATING: i64 = 1;

    pub fn new(name: impl Into<String>, rating: i64) -> Self {
        Self {
            name: name.into(),
            rating,
        }
    }
}

impl Default for PlayerDraft {
    fn default() -> Self {
        Self::new("", Self::DEFAULT_RATING)
    }
}

impl From<&Player> for PlayerDraft {
    fn from(player: &Player) -> Self {
        Self::new(player.name().as_str(), i64::from(player.rating().value()))
    }
}
