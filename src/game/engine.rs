use rand::{Rng, SeedableRng, rngs::StdRng, seq::SliceRandom};

use super::{
    action::Direction,
    config::GameConfig,
    events::GameEvent,
    state::{CollisionType, GameState, Position, RunStatus, Snake},
};
use crate::error::ConfigError;

/// Random probes before falling back to scanning the board for free cells
const RANDOM_SPAWN_ATTEMPTS: usize = 64;

/// Information about a step
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StepInfo {
    /// Whether the snake ate food this step
    pub ate_food: bool,
    /// Type of collision if one occurred
    pub collision_type: Option<CollisionType>,
    /// Whether the score set a new high score this step
    pub new_high_score: bool,
}

/// Result of a game step
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StepResult {
    /// Whether the round has terminated (collision or full board)
    pub terminated: bool,
    /// Additional information about the step
    pub info: StepInfo,
    /// Events for the renderer and persistence collaborators, in order
    pub events: Vec<GameEvent>,
}

/// The game engine that handles all game logic
pub struct GameEngine {
    config: GameConfig,
    rng: StdRng,
}

impl GameEngine {
    /// Create a new game engine with the given configuration
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Create an engine whose food placement is reproducible
    pub fn with_seed(config: GameConfig, seed: u64) -> Result<Self, ConfigError> {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: GameConfig, rng: StdRng) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config, rng })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Build a fresh idle round in the canonical start configuration
    pub fn new_game(&mut self) -> GameState {
        let snake = Snake::new(
            self.config.start,
            Direction::Right,
            self.config.initial_length,
        );
        let mut state = GameState::new(snake, self.config.start, self.config.grid_cells);

        // A validated config always leaves at least one free cell.
        if let Some(food) = self.spawn_food(&state) {
            state.food = food;
        }
        state
    }

    /// Reinitialize `state` to a fresh idle round, keeping its high score
    pub fn reset(&mut self, state: &mut GameState) {
        let high_score = state.high_score;
        *state = self.new_game();
        state.high_score = high_score;
    }

    /// Advance a running round by one grid step
    pub fn advance_tick(&mut self, state: &mut GameState) -> StepResult {
        if !state.is_running() {
            return StepResult {
                terminated: state.status.is_terminal(),
                ..Default::default()
            };
        }

        // Collision math uses the committed direction, never a raw request.
        state.snake.direction = state.pending_direction;
        let new_head = state.snake.head().moved_in_direction(state.snake.direction);

        if let Some(collision) = self.check_collision(state, new_head) {
            state.status = RunStatus::Ended;
            tracing::info!(score = state.score, ?collision, "game over");

            return StepResult {
                terminated: true,
                info: StepInfo {
                    collision_type: Some(collision),
                    ..Default::default()
                },
                events: vec![
                    GameEvent::GameOver {
                        final_score: state.score,
                        collision,
                    },
                    GameEvent::StateChanged,
                ],
            };
        }

        let ate_food = new_head == state.food;
        state.snake.advance(new_head, ate_food);
        state.steps += 1;

        let mut events = Vec::new();
        let mut won = false;

        if ate_food {
            state.score += 1;
            match self.spawn_food(state) {
                Some(food) => state.food = food,
                None => {
                    state.status = RunStatus::Won;
                    won = true;
                }
            }
        }

        let new_high_score = state.score > state.high_score;
        if new_high_score {
            state.high_score = state.score;
            events.push(GameEvent::NewHighScore(state.score));
        }

        if won {
            tracing::info!(score = state.score, "board filled");
            events.push(GameEvent::Won {
                final_score: state.score,
            });
        }
        events.push(GameEvent::StateChanged);

        StepResult {
            terminated: won,
            info: StepInfo {
                ate_food,
                collision_type: None,
                new_high_score,
            },
            events,
        }
    }

    /// Check if the new head position causes a collision
    fn check_collision(&self, state: &GameState, pos: Position) -> Option<CollisionType> {
        if !state.is_in_bounds(pos) {
            return Some(CollisionType::Wall);
        }

        // The tail has not moved yet, so entering its cell is fatal too.
        if state.is_occupied_by_snake(pos) {
            return Some(CollisionType::SelfCollision);
        }

        None
    }

    /// Pick a uniformly random free cell, or `None` when the snake fills the board
    pub fn spawn_food(&mut self, state: &GameState) -> Option<Position> {
        let side = state.grid_cells as i32;
        if side == 0 || state.snake.len() >= state.grid_cells * state.grid_cells {
            return None;
        }

        for _ in 0..RANDOM_SPAWN_ATTEMPTS {
            let pos = Position::new(self.rng.gen_range(0..side), self.rng.gen_range(0..side));
            if !state.is_occupied_by_snake(pos) {
                return Some(pos);
            }
        }

        let free: Vec<Position> = (0..side)
            .flat_map(|y| (0..side).map(move |x| Position::new(x, y)))
            .filter(|pos| !state.is_occupied_by_snake(*pos))
            .collect();
        free.choose(&mut self.rng).copied()
    }
}
