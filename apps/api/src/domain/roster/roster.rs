use super::errors::{RosterError, RosterResult};
use super::events::RosterEvent;
use super::value_objects::EditTarget;
use crate::domain::player::value_objects::PlayerId;
use crate::domain::player::Player;

/// Roster aggregate root
///
/// Ordered list of players plus the single edit target of the entry form.
/// Public addressing is positional; the edit target is held by id.
///
/// # Invariants
/// - Every player has a non-blank trimmed name and a rating in 1..=5
/// - At most one player is being edited, and it is always in the roster
/// - A rejected operation leaves the roster and the edit target untouched
/// - No player can be added while an edit is in progress
///
/// # Example
/// ```
/// use team_divider_api::domain::roster::Roster;
///
/// let mut roster = Roster::new();
/// roster.add_player("Alice", 5).expect("valid player");
/// roster.add_player("   ", 3).expect_err("blank names are rejected");
///
/// assert_eq!(roster.len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Roster {
    players: Vec<Player>,
    edit_target: EditTarget,
}

impl Roster {
    /// Creates an empty roster with no edit in progress
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a player built from raw form input
    ///
    /// # Business Rules
    /// - Name is trimmed and must not be blank
    /// - Rating must be within 1..=5
    /// - Rejected while a player is being edited; submit through
    ///   [`Roster::submit`] or [`Roster::update_player`] instead
    pub fn add_player(&mut self, name: &str, rating: i64) -> RosterResult<RosterEvent> {
        if self.edit_target.is_editing() {
            return Err(RosterError::EditInProgress);
        }

        let player = Player::new(name, rating)?;
        let event = RosterEvent::PlayerAdded {
            player_id: player.id(),
            index: self.players.len(),
        };
        self.players.push(player);

        Ok(event)
    }

    /// Replaces the player at `index` in place, keeping its position and id
    ///
    /// A successful update ends any edit in progress.
    pub fn update_player(
        &mut self,
        index: usize,
        name: &str,
        rating: i64,
    ) -> RosterResult<RosterEvent> {
        let revised = self.player_at(index)?.revised(name, rating)?;
        let player_id = revised.id();

        self.players[index] = revised;
        self.edit_target = EditTarget::Adding;

        Ok(RosterEvent::PlayerUpdated { player_id, index })
    }

    /// Removes the player at `index`, shifting later players left
    ///
    /// Removing the player under edit also ends the edit.
    pub fn delete_player(&mut self, index: usize) -> RosterResult<RosterEvent> {
        self.player_at(index)?;
        let removed = self.players.remove(index);

        if self.edit_target == EditTarget::Editing(removed.id()) {
            self.edit_target = EditTarget::Adding;
        }

        Ok(RosterEvent::PlayerRemoved {
            player_id: removed.id(),
            index,
        })
    }

    /// Removes a player by its stable id
    pub fn delete_player_by_id(&mut self, id: PlayerId) -> RosterResult<RosterEvent> {
        let index = self.position(id).ok_or(RosterError::PlayerNotFound(id))?;
        self.delete_player(index)
    }

    /// Marks the player at `index` as the edit target
    ///
    /// Selecting another player while editing simply moves the target.
    pub fn select_for_edit(&mut self, index: usize) -> RosterResult<RosterEvent> {
        let player_id = self.player_at(index)?.id();
        self.edit_target = EditTarget::Editing(player_id);

        Ok(RosterEvent::EditStarted { player_id, index })
    }

    /// Add-or-update: routes the form input according to the edit target
    pub fn submit(&mut self, name: &str, rating: i64) -> RosterResult<RosterEvent> {
        match self.edit_target {
            EditTarget::Adding => self.add_player(name, rating),
            EditTarget::Editing(id) => {
                let index = self.position(id).ok_or(RosterError::PlayerNotFound(id))?;
                self.update_player(index, name, rating)
            }
        }
    }

    /// Removes every player and ends any edit in progress
    pub fn clear(&mut self) -> RosterEvent {
        let removed = self.players.len();
        self.players.clear();
        self.edit_target = EditTarget::Adding;

        RosterEvent::RosterCleared { removed }
    }

    // ===== Getters =====

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Player> {
        self.players.get(index)
    }

    /// Current position of the player with the given id
    pub fn position(&self, id: PlayerId) -> Option<usize> {
        self.players.iter().position(|p| p.id() == id)
    }

    pub fn edit_target(&self) -> EditTarget {
        self.edit_target
    }

    /// Position of the player under edit, if any
    pub fn editing_index(&self) -> Option<usize> {
        self.edit_target.player_id().and_then(|id| self.position(id))
    }

    /// The player under edit, if any
    pub fn editing_player(&self) -> Option<&Player> {
        self.editing_index().and_then(|index| self.players.get(index))
    }

    /// Sum of all ratings on the roster
    pub fn total_rating(&self) -> u32 {
        self.players.iter().map(|p| u32::from(p.rating().value())).sum()
    }

    fn player_at(&self, index: usize) -> RosterResult<&Player> {
        self.players.get(index).ok_or(RosterError::IndexOutOfRange {
            index,
            len: self.players.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster_of(entries: &[(&str, i64)]) -> Roster {
        let mut roster = Roster::new();
        for (name, rating) in entries {
            roster.add_player(name, *rating).unwrap();
        }
        roster
    }

    fn names(roster: &Roster) -> Vec<&str> {
        roster.players().iter().map(|p| p.name().as_str()).collect()
    }

    #[test]
    fn add_player_appends_trimmed_name() {
        let mut roster = roster_of(&[("Alice", 5)]);

        let event = roster.add_player("  Bob  ", 3).unwrap();

        assert_eq!(roster.len(), 2);
        let last = roster.get(1).unwrap();
        assert_eq!(last.name().as_str(), "Bob");
        assert_eq!(last.rating().value(), 3);
        assert_eq!(
            event,
            RosterEvent::PlayerAdded {
                player_id: last.id(),
                index: 1
            }
        );
    }

    #[test]
    fn add_player_accepts_every_valid_rating() {
        let mut roster = Roster::new();
        for rating in 1..=5 {
            let before = roster.len();
            roster.add_player("P", rating).unwrap();
            assert_eq!(roster.len(), before + 1);
        }
    }

    #[test]
    fn add_player_with_invalid_input_is_noop() {
        let mut roster = roster_of(&[("Alice", 5)]);

        assert_eq!(
            roster.add_player("Bob", 0),
            Err(RosterError::RatingOutOfRange(0))
        );
        assert_eq!(
            roster.add_player("Bob", 6),
            Err(RosterError::RatingOutOfRange(6))
        );
        assert_eq!(roster.add_player("", 3), Err(RosterError::InvalidName));
        assert_eq!(roster.add_player(" \t ", 3), Err(RosterError::InvalidName));

        assert_eq!(names(&roster), vec!["Alice"]);
    }

    #[test]
    fn duplicates_are_permitted() {
        let roster = roster_of(&[("Alice", 3), ("Alice", 3)]);
        assert_eq!(roster.len(), 2);
        assert_ne!(roster.get(0).unwrap().id(), roster.get(1).unwrap().id());
    }

    #[test]
    fn add_player_rejected_while_editing() {
        let mut roster = roster_of(&[("Alice", 5)]);
        roster.select_for_edit(0).unwrap();

        assert_eq!(
            roster.add_player("Bob", 2),
            Err(RosterError::EditInProgress)
        );
        assert_eq!(roster.len(), 1);
        assert!(roster.edit_target().is_editing());
    }

    #[test]
    fn update_player_replaces_in_place() {
        let mut roster = roster_of(&[("Alice", 5), ("Bob", 3), ("Carol", 1)]);
        let original_id = roster.get(1).unwrap().id();

        roster.update_player(1, " Robert ", 4).unwrap();

        assert_eq!(names(&roster), vec!["Alice", "Robert", "Carol"]);
        let updated = roster.get(1).unwrap();
        assert_eq!(updated.rating().value(), 4);
        assert_eq!(updated.id(), original_id);
    }

    #[test]
    fn update_player_out_of_range_is_noop() {
        let mut roster = roster_of(&[("Alice", 5)]);

        assert_eq!(
            roster.update_player(1, "Bob", 3),
            Err(RosterError::IndexOutOfRange { index: 1, len: 1 })
        );
        assert_eq!(names(&roster), vec!["Alice"]);
    }

    #[test]
    fn update_player_invalid_input_keeps_edit_target() {
        let mut roster = roster_of(&[("Alice", 5)]);
        roster.select_for_edit(0).unwrap();

        assert!(roster.update_player(0, "Alice", 7).is_err());

        assert_eq!(roster.get(0).unwrap().rating().value(), 5);
        assert_eq!(roster.editing_index(), Some(0));
    }

    #[test]
    fn update_player_clears_edit_target() {
        let mut roster = roster_of(&[("Alice", 5)]);
        roster.select_for_edit(0).unwrap();

        roster.update_player(0, "Alice", 4).unwrap();

        assert_eq!(roster.edit_target(), EditTarget::Adding);
    }

    #[test]
    fn delete_player_shifts_later_players() {
        let mut roster = roster_of(&[("A", 1), ("B", 2), ("C", 3), ("D", 4)]);

        roster.delete_player(1).unwrap();

        assert_eq!(names(&roster), vec!["A", "C", "D"]);
    }

    #[test]
    fn delete_player_out_of_range_is_noop() {
        let mut roster = roster_of(&[("A", 1), ("B", 2)]);

        assert!(roster.delete_player(2).is_err());
        assert!(roster.delete_player(usize::MAX).is_err());
        assert_eq!(names(&roster), vec!["A", "B"]);
    }

    #[test]
    fn delete_on_empty_roster_is_noop() {
        let mut roster = Roster::new();
        assert_eq!(
            roster.delete_player(0),
            Err(RosterError::IndexOutOfRange { index: 0, len: 0 })
        );
    }

    #[test]
    fn deleting_edited_player_ends_edit() {
        let mut roster = roster_of(&[("A", 1), ("B", 2)]);
        roster.select_for_edit(1).unwrap();

        roster.delete_player(1).unwrap();

        assert_eq!(roster.edit_target(), EditTarget::Adding);
        assert!(roster.add_player("C", 3).is_ok());
    }

    #[test]
    fn deleting_earlier_player_keeps_edit_on_same_player() {
        let mut roster = roster_of(&[("A", 1), ("B", 2), ("C", 3)]);
        roster.select_for_edit(2).unwrap();

        roster.delete_player(0).unwrap();

        assert_eq!(roster.editing_index(), Some(1));
        assert_eq!(roster.editing_player().unwrap().name().as_str(), "C");

        roster.submit("Cee", 4).unwrap();
        assert_eq!(names(&roster), vec!["B", "Cee"]);
    }

    #[test]
    fn delete_by_id() {
        let mut roster = roster_of(&[("A", 1), ("B", 2)]);
        let id = roster.get(0).unwrap().id();

        roster.delete_player_by_id(id).unwrap();

        assert_eq!(names(&roster), vec!["B"]);
        assert_eq!(
            roster.delete_player_by_id(id),
            Err(RosterError::PlayerNotFound(id))
        );
    }

    #[test]
    fn select_for_edit_out_of_range_is_noop() {
        let mut roster = roster_of(&[("A", 1)]);

        assert!(roster.select_for_edit(3).is_err());
        assert_eq!(roster.edit_target(), EditTarget::Adding);
    }

    #[test]
    fn select_for_edit_moves_target() {
        let mut roster = roster_of(&[("A", 1), ("B", 2)]);

        roster.select_for_edit(0).unwrap();
        roster.select_for_edit(1).unwrap();

        assert_eq!(roster.editing_index(), Some(1));
    }

    #[test]
    fn submit_adds_when_not_editing() {
        let mut roster = Roster::new();

        let event = roster.submit("Alice", 5).unwrap();

        assert!(matches!(event, RosterEvent::PlayerAdded { index: 0, .. }));
        assert_eq!(roster.len(), 1);
    }

    #[test]
    fn submit_updates_when_editing() {
        let mut roster = roster_of(&[("A", 1), ("B", 2)]);
        roster.select_for_edit(0).unwrap();

        let event = roster.submit("Alpha", 5).unwrap();

        assert!(matches!(event, RosterEvent::PlayerUpdated { index: 0, .. }));
        assert_eq!(names(&roster), vec!["Alpha", "B"]);
        assert_eq!(roster.edit_target(), EditTarget::Adding);
    }

    #[test]
    fn clear_empties_roster_and_edit_target() {
        let mut roster = roster_of(&[("A", 1), ("B", 2)]);
        roster.select_for_edit(0).unwrap();

        let event = roster.clear();

        assert_eq!(event, RosterEvent::RosterCleared { removed: 2 });
        assert!(roster.is_empty());
        assert_eq!(roster.edit_target(), EditTarget::Adding);
    }

    #[test]
    fn total_rating_sums_players() {
        let roster = roster_of(&[("A", 5), ("B", 4), ("C", 3)]);
        assert_eq!(roster.total_rating(), 12);
    }
}
