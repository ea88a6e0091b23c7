use super::collision::Collider;
use super::movable::{Movable2D, Rect};

/// A player projectile travelling straight up.
#[derive(Debug, Clone, PartialEq)]
pub struct Bullet {
    pub body: Movable2D,
    pub speed: f32,
}

impl Bullet {
    /// Creates a bullet whose top edge is centred on `origin`.
    pub fn new(origin: (f32, f32), width: f32, height: f32, speed: f32) -> Self {
        Self {
            body: Movable2D::at_midtop(origin.0, origin.1, width, height),
            speed,
        }
    }

    pub fn update(&mut self) {
        self.body.translate(0.0, -self.speed);
    }

    /// True once the bullet has fully left the top of the play area.
    pub fn is_off_screen(&self) -> bool {
        self.rect().bottom() <= 0
    }
}

impl Collider for Bullet {
    fn rect(&self) -> Rect {
        self.body.rect()
    }
}
