use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use super::state::Position;
use crate::error::ConfigError;

/// Named tick-interval presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Speed {
    #[serde(alias = "easy")]
    #[value(alias = "easy")]
    Slow,
    #[default]
    Medium,
    #[serde(alias = "hard")]
    #[value(alias = "hard")]
    Fast,
}

impl Speed {
    pub const ALL: [Speed; 3] = [Speed::Slow, Speed::Medium, Speed::Fast];

    /// Milliseconds between ticks
    pub fn interval_ms(&self) -> u64 {
        match self {
            Speed::Slow => 120,
            Speed::Medium => 80,
            Speed::Fast => 50,
        }
    }

    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms())
    }

    pub fn label(&self) -> &'static str {
        match self {
            Speed::Slow => "slow",
            Speed::Medium => "medium",
            Speed::Fast => "fast",
        }
    }
}

/// Configuration for the game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "ConfigFile")]
pub struct GameConfig {
    /// Side length of the square grid, in cells
    pub grid_cells: usize,
    /// Cell the snake's head occupies after a reset
    pub start: Position,
    /// Initial length of the snake, extending left of the start cell
    pub initial_length: usize,
    /// Tick interval preset
    pub speed: Speed,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::from_canvas(500, 20)
    }
}

impl GameConfig {
    /// Create a configuration with a custom grid size and the default start cell
    pub fn new(grid_cells: usize) -> Self {
        Self {
            grid_cells,
            start: Position::new(10, 10),
            initial_length: 1,
            speed: Speed::default(),
        }
    }

    /// Derive the grid side from a square canvas and a cell size, both in pixels
    pub fn from_canvas(canvas_px: usize, cell_px: usize) -> Self {
        Self::new(canvas_px / cell_px.max(1))
    }

    /// Create a small grid for testing
    pub fn small() -> Self {
        Self::default().with_grid_cells(10)
    }

    /// Resize the grid, moving the start cell to the centre if it no longer fits
    pub fn with_grid_cells(mut self, grid_cells: usize) -> Self {
        self.grid_cells = grid_cells;
        let side = grid_cells as i32;
        if self.start.x >= side || self.start.y >= side {
            self.start = Position::new(side / 2, side / 2);
        }
        self
    }

    /// Load a configuration from a JSON file; missing fields take defaults
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: GameConfig =
            serde_json::from_str(&json).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Total number of cells on the board
    pub fn area(&self) -> usize {
        self.grid_cells * self.grid_cells
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid_cells == 0 {
            return Err(ConfigError::Invalid("grid_cells must be positive".into()));
        }
        if i32::try_from(self.grid_cells).is_err() {
            return Err(ConfigError::Invalid(format!(
                "grid_cells {} is too large",
                self.grid_cells
            )));
        }
        let side = self.grid_cells as i32;
        let Position { x, y } = self.start;
        if x < 0 || y < 0 || x >= side || y >= side {
            return Err(ConfigError::Invalid(format!(
                "start cell ({x}, {y}) lies outside a {side}x{side} grid"
            )));
        }
        if self.initial_length == 0 {
            return Err(ConfigError::Invalid("initial_length must be at least 1".into()));
        }
        // The body trails to the left of a rightward-facing head.
        if self.initial_length > x as usize + 1 {
            return Err(ConfigError::Invalid(format!(
                "a snake of length {} does not fit left of column {x}",
                self.initial_length
            )));
        }
        if self.initial_length >= self.area() {
            return Err(ConfigError::Invalid(
                "initial snake leaves no room for food".into(),
            ));
        }
        Ok(())
    }
}

/// On-disk shape of [`GameConfig`]; every field is optional
#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    grid_cells: Option<usize>,
    start: Option<Position>,
    initial_length: Option<usize>,
    speed: Option<Speed>,
}

impl From<ConfigFile> for GameConfig {
    fn from(file: ConfigFile) -> Self {
        let mut config = GameConfig::default();
        if let Some(grid_cells) = file.grid_cells {
            config = config.with_grid_cells(grid_cells);
        }
        if let Some(start) = file.start {
            config.start = start;
        }
        if let Some(initial_length) = file.initial_length {
            config.initial_length = initial_length;
        }
        if let Some(speed) = file.speed {
            config.speed = speed;
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.grid_cells, 25);
        assert_eq!(config.start, Position::new(10, 10));
        assert_eq!(config.initial_length, 1);
        assert_eq!(config.speed, Speed::Medium);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_small_grid_centres_start() {
        let config = GameConfig::small();
        assert_eq!(config.grid_cells, 10);
        assert_eq!(config.start, Position::new(5, 5));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_with_grid_cells_keeps_start_inside() {
        for side in 2..=10 {
            let config = GameConfig::default().with_grid_cells(side);
            assert!(config.validate().is_ok(), "side {side} rejected");
        }

        // A start that still fits is left alone.
        let config = GameConfig::default().with_grid_cells(12);
        assert_eq!(config.start, Position::new(10, 10));
    }

    #[test]
    fn test_from_canvas() {
        assert_eq!(GameConfig::from_canvas(500, 20).grid_cells, 25);
        assert_eq!(GameConfig::from_canvas(400, 20).grid_cells, 20);
    }

    #[test]
    fn test_speed_presets() {
        assert_eq!(Speed::Slow.interval_ms(), 120);
        assert_eq!(Speed::Medium.interval_ms(), 80);
        assert_eq!(Speed::Fast.interval_ms(), 50);
        assert_eq!(Speed::Fast.interval(), Duration::from_millis(50));
    }

    #[test]
    fn test_validation_rejects_bad_configs() {
        assert!(GameConfig::new(0).validate().is_err());

        let outside = GameConfig {
            start: Position::new(30, 3),
            ..GameConfig::default()
        };
        assert!(outside.validate().is_err());

        let too_long = GameConfig {
            start: Position::new(2, 2),
            initial_length: 4,
            ..GameConfig::default()
        };
        assert!(too_long.validate().is_err());

        let no_room = GameConfig {
            grid_cells: 1,
            start: Position::new(0, 0),
            ..GameConfig::default()
        };
        assert!(no_room.validate().is_err());
    }

    #[test]
    fn test_load_partial_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "grid_cells": 15, "speed": "hard" }}"#).unwrap();

        let config = GameConfig::load(file.path()).unwrap();
        assert_eq!(config.grid_cells, 15);
        assert_eq!(config.speed, Speed::Fast);
        assert_eq!(config.start, Position::new(10, 10));
    }

    #[test]
    fn test_load_small_grid_without_start() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "grid_cells": 8 }}"#).unwrap();

        let config = GameConfig::load(file.path()).unwrap();
        assert_eq!(config.start, Position::new(4, 4));
    }

    #[test]
    fn test_load_explicit_start_kept() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "grid_cells": 8, "start": {{ "x": 1, "y": 6 }} }}"#).unwrap();

        let config = GameConfig::load(file.path()).unwrap();
        assert_eq!(config.start, Position::new(1, 6));
    }

    #[test]
    fn test_load_malformed_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let err = GameConfig::load(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }
}
