use std::path::{Path, PathBuf};

use crate::error::HighScoreError;

/// Storage for the persisted high score
pub trait HighScoreStore {
    /// Read the stored value; absent or unreadable data counts as 0
    fn load(&self) -> u32;

    fn save(&mut self, score: u32) -> Result<(), HighScoreError>;
}

/// Stores the high score as a decimal integer in a text file
#[derive(Debug, Clone)]
pub struct FileHighScoreStore {
    path: PathBuf,
}

impl FileHighScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl HighScoreStore for FileHighScoreStore {
    fn load(&self) -> u32 {
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => return 0,
            Err(error) => {
                tracing::warn!(?error, path = ?self.path, "failed to read high score");
                return 0;
            }
        };

        contents.trim().parse().unwrap_or_else(|error| {
            tracing::warn!(?error, path = ?self.path, "ignoring malformed high score");
            0
        })
    }

    fn save(&mut self, score: u32) -> Result<(), HighScoreError> {
        let io_error = |source| HighScoreError::Io {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(io_error)?;
        }
        std::fs::write(&self.path, score.to_string()).map_err(io_error)
    }
}

/// In-process store; nothing survives the process
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryHighScoreStore {
    pub score: Option<u32>,
    /// Every value passed to `save`, oldest first
    pub saves: Vec<u32>,
}

impl MemoryHighScoreStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_score(score: u32) -> Self {
        Self {
            score: Some(score),
            saves: Vec::new(),
        }
    }
}

impl HighScoreStore for MemoryHighScoreStore {
    fn load(&self) -> u32 {
        self.score.unwrap_or(0)
    }

    fn save(&mut self, score: u32) -> Result<(), HighScoreError> {
        self.score = Some(score);
        self.saves.push(score);
        Ok(())
    }
}
