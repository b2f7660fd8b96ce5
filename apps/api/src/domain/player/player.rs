use serde::Serialize;

use super::value_objects::{PlayerId, PlayerName, Rating};
use crate::domain::roster::errors::RosterError;

/// A rostered player
///
/// Holds only validated values, so any `Player` in a roster or a team
/// satisfies the name and rating invariants.
///
/// # Example
/// ```
/// use team_divider_api::domain::player::Player;
///
/// let player = Player::new(" Alice ", 4).expect("valid player");
/// assert_eq!(player.name().as_str(), "Alice");
/// assert_eq!(player.rating().value(), 4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Player {
    id: PlayerId,
    name: PlayerName,
    rating: Rating,
}

impl Player {
    /// Validates raw form input and creates a player with a fresh id
    ///
    /// Name is checked before rating, so input that fails both reports
    /// `InvalidName`.
    pub fn new(name: impl AsRef<str>, rating: i64) -> Result<Self, RosterError> {
        let name = PlayerName::new(name)?;
        let rating = Rating::new(rating)?;
        Ok(Self::from_parts(PlayerId::new(), name, rating))
    }

    pub fn from_parts(id: PlayerId, name: PlayerName, rating: Rating) -> Self {
        Self { id, name, rating }
    }

    /// Returns a copy carrying new values but the same identity
    pub fn revised(&self, name: impl AsRef<str>, rating: i64) -> Result<Self, RosterError> {
        let name = PlayerName::new(name)?;
        let rating = Rating::new(rating)?;
        Ok(Self::from_parts(self.id, name, rating))
    }

    pub fn id(&self) -> PlayerId {
        self.id
    }

    pub fn name(&self) -> &PlayerName {
        &self.name
    }

    pub fn rating(&self) -> Rating {
        self.rating
    }
}
