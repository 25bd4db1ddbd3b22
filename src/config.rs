//! Runtime configuration
//!
//! The game has no user-facing settings. This gathers the fixed file
//! locations and frame rate in one place so they are logged at startup and
//! can be pointed elsewhere in tests.

use std::path::PathBuf;

use serde::Serialize;

use crate::consts::TARGET_FPS;

/// Fixed runtime paths and timing
#[derive(Debug, Clone, Serialize)]
pub struct GameConfig {
    /// Plain text file holding the best score
    pub high_score_path: PathBuf,
    /// Directory searched for sprite images
    pub assets_dir: PathBuf,
    /// Log file (created along with its directory)
    pub log_path: PathBuf,
    /// Frames per second the loop aims for
    pub target_fps: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            high_score_path: PathBuf::from("highscore.txt"),
            assets_dir: PathBuf::from("assets").join("images"),
            log_path: PathBuf::from("logs").join("game.log"),
            target_fps: TARGET_FPS,
        }
    }
}

impl GameConfig {
    /// Same layout rooted at `dir` instead of the working directory
    pub fn rooted_at(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        let defaults = Self::default();
        Self {
            high_score_path: dir.join(defaults.high_score_path),
            assets_dir: dir.join(defaults.assets_dir),
            log_path: dir.join(defaults.log_path),
            target_fps: defaults.target_fps,
        }
    }

    /// Frame budget derived from the target frame rate
    pub fn frame_duration(&self) -> std::time::Duration {
        std::time::Duration::from_secs_f64(1.0 / self.target_fps.max(1) as f64)
    }
}
