use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::entities::DEFAULT_BASE_WIDTH;
use crate::error::{GameError, Result};

/// Every tunable of the game in one flat, read-only value.
///
/// Components copy what they need at construction time. Between levels the
/// game swaps in [`Settings::apply_difficulty_step`]'s result instead of
/// mutating the current value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// World size in pixels; the renderer scales this onto the terminal
    pub screen_width: i32,
    pub screen_height: i32,
    pub fps: u32,
    pub difficulty_scale: f32,
    pub scores_file: PathBuf,
    pub laser_sound: PathBuf,
    pub impact_sound: PathBuf,

    pub ship_width: f32,
    pub ship_height: f32,
    pub ship_speed: f32,
    pub starting_ship_count: u32,

    pub bullet_width: f32,
    pub bullet_height: f32,
    pub bullet_speed: f32,
    /// Maximum bullets on screen at once
    pub bullet_amount: usize,

    pub alien_width: f32,
    pub alien_height: f32,
    pub alien_points: u32,
    pub fleet_speed: f32,
    pub fleet_drop_speed: f32,
    pub fleet_direction: i8,
    pub triangle_base_width: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            screen_width: 1265,
            screen_height: 625,
            fps: 60,
            difficulty_scale: 1.1,
            scores_file: PathBuf::from("assets/file/scores.json"),
            laser_sound: PathBuf::from("assets/sound/laser.wav"),
            impact_sound: PathBuf::from("assets/sound/impact.wav"),
            ship_width: 30.0,
            ship_height: 50.0,
            ship_speed: 7.0,
            starting_ship_count: 3,
            bullet_width: 30.0,
            bullet_height: 60.0,
            bullet_speed: 10.0,
            bullet_amount: 5,
            alien_width: 40.0,
            alien_height: 40.0,
            alien_points: 100,
            fleet_speed: 1.0,
            fleet_drop_speed: 40.0,
            fleet_direction: 1,
            triangle_base_width: DEFAULT_BASE_WIDTH,
        }
    }
}

impl Settings {
    /// Loads overrides from a JSON file. Missing keys keep their defaults and
    /// a missing file yields [`Settings::default`].
    pub fn load(path: &Path) -> Result<Self> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                tracing::info!(path = %path.display(), "no settings file, using defaults");
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(GameError::Io {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        let settings: Self = serde_json::from_str(&contents).map_err(|source| GameError::Json {
            path: path.to_path_buf(),
            source,
        })?;
        settings.validate().map_err(|(field, reason)| GameError::InvalidSetting {
            path: path.to_path_buf(),
            field,
            reason,
        })?;
        tracing::info!(path = %path.display(), "loaded settings");
        Ok(settings)
    }

    /// Checks the values the game relies on being in range.
    fn validate(&self) -> std::result::Result<(), (&'static str, String)> {
        if !matches!(self.fleet_direction, -1 | 1) {
            return Err((
                "fleet_direction",
                format!("expected 1 or -1, got {}", self.fleet_direction),
            ));
        }
        Ok(())
    }

    /// Returns the next level's settings: ship, bullet and fleet speeds and
    /// bullet width grow by `difficulty_scale`, aliens shrink by it.
    pub fn apply_difficulty_step(&self) -> Self {
        let scale = self.difficulty_scale;
        Self {
            ship_speed: self.ship_speed * scale,
            bullet_speed: self.bullet_speed * scale,
            bullet_width: self.bullet_width * scale,
            fleet_speed: self.fleet_speed * scale,
            alien_width: self.alien_width / scale,
            alien_height: self.alien_height / scale,
            ..self.clone()
        }
    }

    /// Frame period for the main loop.
    pub fn frame_millis(&self) -> u64 {
        1000 / u64::from(self.fps.max(1))
    }
}
