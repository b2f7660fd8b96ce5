use serde::Serialize;

use crate::domain::player::Player;

/// Result of splitting a roster into two teams
///
/// Holds copies of the players taken at division time, so later roster
/// edits never reach an existing split. The default value is the empty
/// split used before any division and after a clear.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TeamSplit {
    team_a: Vec<Player>,
    team_b: Vec<Player>,
}

impl TeamSplit {
    pub fn new(team_a: Vec<Player>, team_b: Vec<Player>) -> Self {
        Self { team_a, team_b }
    }

    pub fn team_a(&self) -> &[Player] {
        &self.team_a
    }

    pub fn team_b(&self) -> &[Player] {
        &self.team_b
    }

    /// Accumulated rating of team A
    pub fn sum_a(&self) -> u32 {
        rating_sum(&self.team_a)
    }

    /// Accumulated rating of team B
    pub fn sum_b(&self) -> u32 {
        rating_sum(&self.team_b)
    }

    /// Number of players across both teams
    pub fn len(&self) -> usize {
        self.team_a.len() + self.team_b.len()
    }

    pub fn is_empty(&self) -> bool {
        self.team_a.is_empty() && self.team_b.is_empty()
    }
}

pub(crate) fn rating_sum(players: &[Player]) -> u32 {
    players.iter().map(|p| u32::from(p.rating().value())).sum()
}
