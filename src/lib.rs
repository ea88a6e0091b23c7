// Library exports for testing
pub use entities::{
    Alien, Arsenal, Bullet, Collider, Fleet, FormationLayout, GameState, Hit, Movable2D, Rect,
    Ship,
};
pub use error::GameError;
pub use game::{Game, TickReport};
pub use settings::Settings;
pub use stats::{GameStats, ScoreStore};

pub mod app;
pub mod audio;
pub mod entities;
pub mod error;
pub mod game;
pub mod input;
pub mod renderer;
pub mod settings;
pub mod stats;
