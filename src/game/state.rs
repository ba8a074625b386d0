use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

use super::action::Direction;

/// A position on the game grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move position by delta
    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Move position in a direction
    pub fn moved_in_direction(&self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        self.moved_by(dx, dy)
    }
}

/// The snake in the game
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    /// Body segments, with head at the front
    pub body: VecDeque<Position>,
    /// Direction applied on the most recent tick
    pub direction: Direction,
}

impl Snake {
    /// Create a new snake with given starting position and direction
    pub fn new(head: Position, direction: Direction, length: usize) -> Self {
        let (dx, dy) = direction.delta();
        let body = (0..length.max(1) as i32)
            .map(|i| head.moved_by(-dx * i, -dy * i))
            .collect();

        Self { body, direction }
    }

    /// Build a snake from explicit head-first segments; `None` if there are none
    pub fn from_segments(
        segments: impl IntoIterator<Item = Position>,
        direction: Direction,
    ) -> Option<Self> {
        let body: VecDeque<Position> = segments.into_iter().collect();
        if body.is_empty() {
            return None;
        }
        Some(Self { body, direction })
    }

    /// Get the head position
    pub fn head(&self) -> Position {
        self.body[0]
    }

    /// Get the tail position (last segment)
    pub fn tail(&self) -> Position {
        self.body[self.body.len() - 1]
    }

    /// Check if any segment, head and tail included, occupies `pos`
    pub fn occupies(&self, pos: Position) -> bool {
        self.body.contains(&pos)
    }

    /// Prepend `new_head`, dropping the tail unless the snake grows
    pub fn advance(&mut self, new_head: Position, grow: bool) {
        self.body.push_front(new_head);

        if !grow {
            self.body.pop_back();
        }
    }

    pub fn segments(&self) -> impl Iterator<Item = &Position> {
        self.body.iter()
    }

    /// Get the length of the snake
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Check if the snake is empty (should never happen in practice)
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

/// Type of collision that occurred
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionType {
    /// Snake hit a wall
    Wall,
    /// Snake hit itself
    SelfCollision,
}

/// Lifecycle of a round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunStatus {
    #[default]
    Idle,
    Running,
    Paused,
    Ended,
    /// The snake filled every cell of the board
    Won,
}

impl RunStatus {
    /// Whether the round is over and only a reset can continue
    pub fn is_terminal(&self) -> bool {
        matches!(self, RunStatus::Ended | RunStatus::Won)
    }

    pub fn label(&self) -> &'static str {
        match self {
            RunStatus::Idle => "Ready",
            RunStatus::Running => "Running",
            RunStatus::Paused => "Paused",
            RunStatus::Ended => "Game over",
            RunStatus::Won => "Won",
        }
    }
}

/// Complete game state
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub snake: Snake,
    /// Last requested direction, committed on the next tick
    pub pending_direction: Direction,
    pub food: Position,
    pub grid_cells: usize,
    pub score: u32,
    pub high_score: u32,
    pub steps: u32,
    pub status: RunStatus,
}

impl GameState {
    /// Create a new idle game state
    pub fn new(snake: Snake, food: Position, grid_cells: usize) -> Self {
        Self {
            pending_direction: snake.direction,
            snake,
            food,
            grid_cells,
            score: 0,
            high_score: 0,
            steps: 0,
            status: RunStatus::Idle,
        }
    }

    /// Buffer a direction change for the next tick.
    ///
    /// Only honored while running, and dropped when it would reverse the
    /// committed direction. A later request before the next tick replaces an
    /// earlier one. Returns whether the request was kept.
    pub fn request_direction(&mut self, direction: Direction) -> bool {
        if !self.is_running() || self.snake.direction.is_opposite(direction) {
            return false;
        }
        self.pending_direction = direction;
        true
    }

    /// Check if a position is within the grid bounds
    pub fn is_in_bounds(&self, pos: Position) -> bool {
        let side = self.grid_cells as i32;
        pos.x >= 0 && pos.x < side && pos.y >= 0 && pos.y < side
    }

    /// Check if a position is occupied by the snake
    pub fn is_occupied_by_snake(&self, pos: Position) -> bool {
        self.snake.occupies(pos)
    }

    pub fn is_running(&self) -> bool {
        self.status == RunStatus::Running
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn running_state(snake: Snake) -> GameState {
        let mut state = GameState::new(snake, Position::new(15, 15), 25);
        state.status = RunStatus::Running;
        state
    }

    #[test]
    fn test_position_movement() {
        let pos = Position::new(5, 5);
        assert_eq!(pos.moved_by(1, 0), Position::new(6, 5));
        assert_eq!(pos.moved_by(-1, 0), Position::new(4, 5));
        assert_eq!(pos.moved_in_direction(Direction::Down), Position::new(5, 6));
        assert_eq!(pos.moved_in_direction(Direction::Up), Position::new(5, 4));
    }

    #[test]
    fn test_snake_creation() {
        let snake = Snake::new(Position::new(5, 5), Direction::Right, 3);
        assert_eq!(snake.len(), 3);
        assert_eq!(snake.head(), Position::new(5, 5));
        assert_eq!(snake.body[1], Position::new(4, 5));
        assert_eq!(snake.tail(), Position::new(3, 5));
    }

    #[test]
    fn test_snake_advance() {
        let mut snake = Snake::new(Position::new(5, 5), Direction::Right, 3);

        snake.advance(Position::new(6, 5), false);
        assert_eq!(snake.len(), 3);
        assert_eq!(snake.head(), Position::new(6, 5));
        assert_eq!(snake.tail(), Position::new(4, 5));

        snake.advance(Position::new(7, 5), true);
        assert_eq!(snake.len(), 4);
        assert_eq!(snake.tail(), Position::new(4, 5));
    }

    #[test]
    fn test_from_segments() {
        let snake = Snake::from_segments(
            [Position::new(3, 3), Position::new(3, 4)],
            Direction::Up,
        )
        .unwrap();
        assert_eq!(snake.head(), Position::new(3, 3));
        assert_eq!(snake.tail(), Position::new(3, 4));

        assert_eq!(Snake::from_segments([], Direction::Up), None);
    }

    #[test]
    fn test_is_running() {
        let mut state = running_state(Snake::new(Position::new(10, 10), Direction::Right, 1));
        assert!(state.is_running());

        state.status = RunStatus::Paused;
        assert!(!state.is_running());
    }

    #[test]
    fn test_occupancy_includes_head_and_tail() {
        let snake = Snake::new(Position::new(5, 5), Direction::Right, 3);
        assert!(snake.occupies(Position::new(5, 5)));
        assert!(snake.occupies(Position::new(3, 5)));
        assert!(!snake.occupies(Position::new(10, 10)));
    }

    #[test]
    fn test_bounds_checking() {
        let state = GameState::new(
            Snake::new(Position::new(5, 5), Direction::Right, 3),
            Position::new(10, 10),
            20,
        );

        assert!(state.is_in_bounds(Position::new(0, 0)));
        assert!(state.is_in_bounds(Position::new(19, 19)));
        assert!(!state.is_in_bounds(Position::new(-1, 0)));
        assert!(!state.is_in_bounds(Position::new(20, 0)));
        assert!(!state.is_in_bounds(Position::new(0, 20)));
    }

    #[test]
    fn test_request_direction_replaces_pending() {
        let mut state = running_state(Snake::new(Position::new(10, 10), Direction::Right, 1));

        assert!(state.request_direction(Direction::Up));
        assert!(state.request_direction(Direction::Down));
        assert_eq!(state.pending_direction, Direction::Down);
    }

    #[test]
    fn test_request_direction_drops_reversal() {
        let mut state = running_state(Snake::new(Position::new(10, 10), Direction::Right, 2));

        assert!(!state.request_direction(Direction::Left));
        assert_eq!(state.pending_direction, Direction::Right);
    }

    #[test]
    fn test_request_direction_ignored_unless_running() {
        let mut state = running_state(Snake::new(Position::new(10, 10), Direction::Right, 1));

        for status in [RunStatus::Idle, RunStatus::Paused, RunStatus::Ended, RunStatus::Won] {
            state.status = status;
            assert!(!state.request_direction(Direction::Up));
            assert_eq!(state.pending_direction, Direction::Right);
        }
    }
}
