use super::value_objects::TeamSplit;
use crate::domain::player::Player;

/// Splits players into two teams with greedy rating balancing
///
/// Players are visited by rating, highest first; each one joins whichever
/// team currently has the lower rating sum, with ties going to team A.
/// Equal ratings keep their roster order since the sort is stable.
///
/// Only sums are balanced, never head counts: one strong player can face
/// several weak ones. Runs in O(n log n).
///
/// # Example
/// ```
/// use team_divider_api::domain::division::divide;
/// use team_divider_api::domain::player::Player;
///
/// let players: Vec<Player> = [("A", 5), ("B", 4), ("C", 3), ("D", 2)]
///     .into_iter()
///     .map(|(name, rating)| Player::new(name, rating).unwrap())
///     .collect();
///
/// let split = divide(&players);
/// assert_eq!(split.sum_a(), 7);
/// assert_eq!(split.sum_b(), 7);
/// ```
pub fn divide(players: &[Player]) -> TeamSplit {
    let mut sorted = players.to_vec();
    sorted.sort_by(|a, b| b.rating().cmp(&a.rating()));

    let mut team_a = Vec::new();
    let mut team_b = Vec::new();
    let (mut sum_a, mut sum_b) = (0u32, 0u32);

    for player in sorted {
        let rating = u32::from(player.rating().value());
        if sum_a <= sum_b {
            sum_a += rating;
            team_a.push(player);
        } else {
            sum_b += rating;
            team_b.push(player);
        }
    }

    TeamSplit::new(team_a, team_b)
}
