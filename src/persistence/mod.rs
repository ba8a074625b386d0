//! High-score persistence
//!
//! The core only compares scores; storing the single non-negative integer is
//! delegated to a [`HighScoreStore`].

pub mod high_score;

pub use high_score::{FileHighScoreStore, HighScoreStore, MemoryHighScoreStore};
