//! High score persistence
//!
//! A plain text file holding one decimal integer. A missing or garbled file
//! reads as 0; saving overwrites the whole file.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Location of the persisted high score
#[derive(Debug, Clone)]
pub struct HighScoreFile {
    path: PathBuf,
}

impl HighScoreFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the stored high score, falling back to 0
    pub fn load(&self) -> u32 {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::info!("No high score file at {}, starting fresh", self.path.display());
                return 0;
            }
            Err(e) => {
                log::error!("Failed to read high score file {}: {}", self.path.display(), e);
                return 0;
            }
        };

        match contents.trim().parse::<u32>() {
            Ok(score) => {
                log::info!("Loaded high score {}", score);
                score
            }
            Err(e) => {
                log::warn!(
                    "High score file {} is unreadable ({}), using 0",
                    self.path.display(),
                    e
                );
                0
            }
        }
    }

    /// Overwrite the file with `score`
    pub fn save(&self, score: u32) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&self.path, score.to_string())?;
        log::info!("High score saved ({})", score);
        Ok(())
    }
}
