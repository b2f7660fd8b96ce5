use serde::{Deserialize, Serialize};

use crate::domain::player::value_objects::PlayerId;

/// What a form submission will do
///
/// The target is tracked by player id rather than position so that a
/// deletion elsewhere in the roster cannot redirect an edit to a
/// different player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum EditTarget {
    /// Submissions append a new player
    #[default]
    Adding,
    /// Submissions replace the given player in place
    Editing(PlayerId),
}

impl EditTarget {
    pub fn is_editing(&self) -> bool {
        matches!(self, EditTarget::Editing(_))
    }

    pub fn player_id(&self) -> Option<PlayerId> {
        match self {
            EditTarget::Adding => None,
            EditTarget::Editing(id) => Some(*id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_adding() {
        assert_eq!(EditTarget::default(), EditTarget::Adding);
        assert!(!EditTarget::default().is_editing());
    }

    #[test]
    fn editing_exposes_player_id() {
        let id = PlayerId::new();
        let target = EditTarget::Editing(id);

        assert!(target.is_editing());
        assert_eq!(target.player_id(), Some(id));
        assert_eq!(EditTarget::Adding.player_id(), None);
    }
}
