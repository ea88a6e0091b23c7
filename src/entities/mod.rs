mod alien;
mod arsenal;
mod bullet;
mod collision;
mod fleet;
mod formation;
mod game_state;
mod movable;
mod ship;

// Re-export all public types
pub use alien::Alien;
pub use arsenal::Arsenal;
pub use bullet::Bullet;
pub use collision::{Collider, Hit, resolve};
pub use fleet::Fleet;
pub use formation::{DEFAULT_BASE_WIDTH, FormationLayout, build as build_formation};
pub use game_state::GameState;
pub use movable::{Movable2D, Rect};
pub use ship::Ship;
