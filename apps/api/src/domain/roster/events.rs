use crate::domain::player::value_objects::PlayerId;

/// Domain events emitted by successful roster operations
///
/// Positions are those at the time of the operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RosterEvent {
    /// A player was appended
    PlayerAdded { player_id: PlayerId, index: usize },
    /// A player was replaced in place
    PlayerUpdated { player_id: PlayerId, index: usize },
    /// A player was removed and later players shifted left
    PlayerRemoved { player_id: PlayerId, index: usize },
    /// A player was loaded into the entry form
    EditStarted { player_id: PlayerId, index: usize },
    /// Every player was removed
    RosterCleared { removed: usize },
}
