use chrono::{DateTime, Utc};

use super::value_objects::PlayerDraft;
use crate::domain::division::{divide, TeamSplit};
use crate::domain::player::value_objects::PlayerId;
use crate::domain::roster::{Roster, RosterEvent, RosterResult};

/// One user's working state: roster, entry form and last split
///
/// The roster and the split are independent. A split is only replaced by
/// dividing again or reset by a clear, never touched by roster edits.
///
/// # Example
/// ```
/// use team_divider_api::domain::session::Session;
///
/// let mut session = Session::new();
/// session.submit_player("Alice", 5).expect("valid player");
/// session.submit_player("Bob", 3).expect("valid player");
///
/// let split = session.divide_teams();
/// assert_eq!(split.team_a().len(), 1);
/// assert_eq!(split.team_b().len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Session {
    roster: Roster,
    teams: TeamSplit,
    draft: PlayerDraft,
    divided_at: Option<DateTime<Utc>>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a player, or updates the one under edit
    ///
    /// On success the entry form is reset. On rejection the roster is
    /// unchanged and the form keeps the submitted values.
    pub fn submit_player(&mut self, name: &str, rating: i64) -> RosterResult<RosterEvent> {
        match self.roster.submit(name, rating) {
            Ok(event) => {
                self.draft = PlayerDraft::default();
                Ok(event)
            }
            Err(e) => {
                self.draft = PlayerDraft::new(name, rating);
                Err(e)
            }
        }
    }

    /// Replaces the player at `index` directly, bypassing the edit target
    pub fn update_player(
        &mut self,
        index: usize,
        name: &str,
        rating: i64,
    ) -> RosterResult<RosterEvent> {
        let event = self.roster.update_player(index, name, rating)?;
        self.draft = PlayerDraft::default();
        Ok(event)
    }

    /// Loads the player at `index` into the entry form for editing
    pub fn edit_player(&mut self, index: usize) -> RosterResult<RosterEvent> {
        let event = self.roster.select_for_edit(index)?;
        if let Some(player) = self.roster.editing_player() {
            self.draft = PlayerDraft::from(player);
        }
        Ok(event)
    }

    pub fn delete_player(&mut self, index: usize) -> RosterResult<RosterEvent> {
        self.roster.delete_player(index)
    }

    pub fn delete_player_by_id(&mut self, id: PlayerId) -> RosterResult<RosterEvent> {
        self.roster.delete_player_by_id(id)
    }

    /// Divides the current roster and stores the result as the last split
    pub fn divide_teams(&mut self) -> &TeamSplit {
        self.teams = divide(self.roster.players());
        self.divided_at = Some(Utc::now());
        &self.teams
    }

    /// Empties the roster and resets the split and the entry form
    pub fn clear_players(&mut self) -> RosterEvent {
        let event = self.roster.clear();
        self.draft = PlayerDraft::default();
        self.clear_teams();
        event
    }

    /// Resets the split, leaving the roster alone
    pub fn clear_teams(&mut self) {
        self.teams = TeamSplit::default();
        self.divided_at = None;
    }

    // ===== Getters =====

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn teams(&self) -> &TeamSplit {
        &self.teams
    }

    pub fn draft(&self) -> &PlayerDraft {
        &self.draft
    }

    /// When the current split was computed, if there is one
    pub fn divided_at(&self) -> Option<DateTime<Utc>> {
        self.divided_at
    }
}
