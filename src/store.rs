//! High-score persistence.
//!
//! A single number in a dot-file under the user's home directory.  Owning
//! the path makes the store trivial to point at a scratch file in tests.

use std::fs;
use std::path::PathBuf;

pub struct HighScoreStore {
    path: PathBuf,
}

impl HighScoreStore {
    pub fn new(path: PathBuf) -> HighScoreStore {
        HighScoreStore { path }
    }

    /// The default store: `~/.retro_shooter_score`.
    pub fn default_location() -> HighScoreStore {
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
        HighScoreStore::new(PathBuf::from(home).join(".retro_shooter_score"))
    }

    /// A missing or unreadable file reads as no high score yet.
    pub fn load(&self) -> u32 {
        fs::read_to_string(&self.path)
            .ok()
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(0)
    }

    pub fn save(&self, score: u32) -> std::io::Result<()> {
        fs::write(&self.path, score.to_string())
    }
}
