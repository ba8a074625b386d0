//! Core game logic module for Snake
//!
//! This module contains all the game logic without any I/O or rendering dependencies.
//! Front ends drive it through ticks and commands and read the state back.

pub mod action;
pub mod config;
pub mod engine;
pub mod events;
pub mod state;

// Re-export commonly used types
pub use action::{Command, Direction};
pub use config::{GameConfig, Speed};
pub use engine::{GameEngine, StepInfo, StepResult};
pub use events::GameEvent;
pub use state::{CollisionType, GameState, Position, RunStatus, Snake};
