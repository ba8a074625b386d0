use serde::{Deserialize, Serialize};

use super::config::Speed;

/// Direction the snake can move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Returns true if the two directions' unit vectors sum to zero
    pub fn is_opposite(&self, other: Direction) -> bool {
        let (dx, dy) = self.delta();
        let (ox, oy) = other.delta();
        dx + ox == 0 && dy + oy == 0
    }

    /// Returns the delta (dx, dy) for moving in this direction
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

/// A discrete command delivered to a running session between ticks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    RequestDirection(Direction),
    TogglePause,
    Start,
    Reset,
    SetSpeed(Speed),
}

impl From<Direction> for Command {
    fn from(direction: Direction) -> Self {
        Command::RequestDirection(direction)
    }
}
