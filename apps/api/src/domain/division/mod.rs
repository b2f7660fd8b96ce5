// Team division module
// Pure greedy split of a roster snapshot into two teams

pub mod divider;
pub mod value_objects;

pub use divider::divide;
pub use value_objects::TeamSplit;
