//! Grid Snake - a snake game with a headless, testable core
//!
//! This library provides:
//! - Core game logic: state, tick algorithm, food spawning (game module)
//! - Run control over a single owned state (session module)
//! - Tick scheduling behind a trait (schedule module)
//! - High-score persistence (persistence module)
//! - Terminal input, rendering and the interactive loop (input, render, modes)

pub mod error;
pub mod game;
pub mod input;
pub mod modes;
pub mod persistence;
pub mod render;
pub mod schedule;
pub mod session;
