use super::state::CollisionType;

/// Notifications produced by the engine and session for their collaborators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// The visible state changed and should be redrawn
    StateChanged,
    /// The score passed the previous high score; carries the new value
    NewHighScore(u32),
    /// The round ended on a collision
    GameOver {
        final_score: u32,
        collision: CollisionType,
    },
    /// The snake filled the whole board
    Won { final_score: u32 },
}
