use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{GameError, Result};
use crate::settings::Settings;

/// On-disk shape of the scores file.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
struct SavedScores {
    hi_score: u32,
}

/// JSON-backed persistence for the all-time high score.
#[derive(Debug, Clone)]
pub struct ScoreStore {
    path: PathBuf,
}

impl ScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn read(&self) -> Result<u32> {
        let contents = fs::read_to_string(&self.path).map_err(|source| GameError::Io {
            path: self.path.clone(),
            source,
        })?;
        let scores: SavedScores =
            serde_json::from_str(&contents).map_err(|source| GameError::Json {
                path: self.path.clone(),
                source,
            })?;
        Ok(scores.hi_score)
    }

    pub fn write(&self, hi_score: u32) -> Result<()> {
        let io_err = |source| GameError::Io {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(io_err)?;
        }

        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        SavedScores { hi_score }
            .serialize(&mut serializer)
            .map_err(|source| GameError::Json {
                path: self.path.clone(),
                source,
            })?;

        fs::write(&self.path, buf).map_err(io_err)
    }

    /// Reads the stored high score. A missing or unreadable file counts as 0
    /// and is rewritten so the next run finds a valid document.
    pub fn init(&self) -> u32 {
        match self.read() {
            Ok(hi_score) => hi_score,
            Err(err) => {
                tracing::warn!("resetting high score: {err}");
                self.save(0);
                0
            }
        }
    }

    /// Writes the high score; failures are logged and otherwise ignored.
    pub fn save(&self, hi_score: u32) {
        if let Err(err) = self.write(hi_score) {
            tracing::warn!("could not save high score: {err}");
        }
    }
}

/// Score, level and lives for the running session.
#[derive(Debug, Clone)]
pub struct GameStats {
    pub score: u32,
    /// Best score since the program started
    pub max_score: u32,
    /// Best score ever, mirrored to disk
    pub hi_score: u32,
    pub level: u32,
    pub ships_left: u32,
    alien_points: u32,
    starting_ship_count: u32,
    store: ScoreStore,
}

impl GameStats {
    pub fn new(settings: &Settings) -> Self {
        Self::with_store(settings, ScoreStore::new(&settings.scores_file))
    }

    pub fn with_store(settings: &Settings, store: ScoreStore) -> Self {
        let hi_score = store.init();
        let mut stats = Self {
            score: 0,
            max_score: 0,
            hi_score,
            level: 1,
            ships_left: settings.starting_ship_count,
            alien_points: settings.alien_points,
            starting_ship_count: settings.starting_ship_count,
            store,
        };
        stats.reset_stats();
        stats
    }

    /// Starts a fresh session; max and high scores are kept.
    pub fn reset_stats(&mut self) {
        self.ships_left = self.starting_ship_count;
        self.score = 0;
        self.level = 1;
    }

    /// Credits `aliens_hit` kills and raises max/high scores as needed.
    pub fn update(&mut self, aliens_hit: usize) {
        self.score += self.alien_points * aliens_hit as u32;
        self.max_score = self.max_score.max(self.score);
        if self.score > self.hi_score {
            self.hi_score = self.score;
            self.store.save(self.hi_score);
        }
    }

    pub fn update_level(&mut self) {
        self.level += 1;
        tracing::info!(level = self.level, "level up");
    }

    /// Takes a life; returns true while ships remain.
    pub fn lose_ship(&mut self) -> bool {
        self.ships_left = self.ships_left.saturating_sub(1);
        tracing::info!(ships_left = self.ships_left, "ship lost");
        self.ships_left > 0
    }

    pub fn store(&self) -> &ScoreStore {
        &self.store
    }
}
