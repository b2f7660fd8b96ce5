use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::domain::roster::errors::RosterError;

/// Stable identifier assigned to a player when it joins the roster
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(Uuid);

impl PlayerId {
    /// Generates a fresh random identifier
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Wraps an identifier received from a client
    pub fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for PlayerId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Player name value object
///
/// # Invariants
/// - Leading and trailing whitespace is removed at construction
/// - Is never empty after trimming
/// - Is immutable after construction
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayerName(String);

impl PlayerName {
    /// Creates a new PlayerName, trimming surrounding whitespace
    ///
    /// # Returns
    /// * `Ok(PlayerName)` - If the trimmed name is non-empty
    /// * `Err(RosterError::InvalidName)` - If the name is empty or whitespace only
    ///
    /// # Example
    /// ```
    /// use team_divider_api::domain::player::value_objects::PlayerName;
    ///
    /// let name = PlayerName::new("  Alice ").expect("valid name");
    /// assert_eq!(name.as_str(), "Alice");
    /// assert!(PlayerName::new("   ").is_err());
    /// ```
    pub fn new(name: impl AsRef<str>) -> Result<Self, RosterError> {
        let trimmed = name.as_ref().trim();
        if trimmed.is_empty() {
            return Err(RosterError::InvalidName);
        }
        Ok(PlayerName(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlayerName {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Skill rating value object
///
/// # Invariants
/// - Always within `Rating::MIN..=Rating::MAX`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Rating(u8);

impl Rating {
    pub const MIN: i64 = 1;
    pub const MAX: i64 = 5;

    /// Creates a new Rating
    ///
    /// Accepts any integer so out-of-range form input can be reported
    /// instead of wrapping or truncating.
    ///
    /// # Example
    /// ```
    /// use team_divider_api::domain::player::value_objects::Rating;
    ///
    /// assert_eq!(Rating::new(3).unwrap().value(), 3);
    /// assert!(Rating::new(0).is_err());
    /// assert!(Rating::new(6).is_err());
    /// ```
    pub fn new(value: i64) -> Result<Self, RosterError> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Rating(value as u8))
        } else {
            Err(RosterError::RatingOutOfRange(value))
        }
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
