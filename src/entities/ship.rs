use super::arsenal::Arsenal;
use super::collision::Collider;
use super::fleet::Fleet;
use super::movable::{Movable2D, Rect};
use crate::settings::Settings;

/// The player's ship: slides along the bottom of the screen and fires upward.
#[derive(Debug, Clone)]
pub struct Ship {
    pub body: Movable2D,
    pub moving_left: bool,
    pub moving_right: bool,
    pub speed: f32,
    pub arsenal: Arsenal,
    screen_width: f32,
    screen_height: f32,
}

impl Ship {
    pub fn new(settings: &Settings) -> Self {
        let screen_width = settings.screen_width as f32;
        let screen_height = settings.screen_height as f32;
        Self {
            body: Self::dock(
                screen_width,
                screen_height,
                settings.ship_width,
                settings.ship_height,
            ),
            moving_left: false,
            moving_right: false,
            speed: settings.ship_speed,
            arsenal: Arsenal::new(settings),
            screen_width,
            screen_height,
        }
    }

    fn dock(screen_width: f32, screen_height: f32, width: f32, height: f32) -> Movable2D {
        let body = Movable2D::at_midbottom(screen_width / 2.0, screen_height, width, height);
        // Snap to whole pixels the way a rect placement would.
        Movable2D::new(body.x.trunc(), body.y.trunc(), width, height)
    }

    /// Puts the ship back at the bottom-centre dock position.
    pub fn recenter(&mut self) {
        self.body = Self::dock(self.screen_width, self.screen_height, self.body.w, self.body.h);
    }

    /// Applies held movement flags, then advances the arsenal.
    pub fn tick(&mut self) {
        self.update_movement();
        self.arsenal.tick();
    }

    fn update_movement(&mut self) {
        let max_x = (self.screen_width - self.body.w).max(0.0);
        if self.moving_right {
            self.body.x = (self.body.x + self.speed).min(max_x);
        }
        if self.moving_left {
            self.body.x = (self.body.x - self.speed).max(0.0);
        }
    }

    /// Fires from the ship's top-centre; false when the arsenal is full.
    pub fn fire(&mut self) -> bool {
        let origin = (self.body.x + self.body.w / 2.0, self.body.y);
        self.arsenal.fire(origin)
    }

    /// True when the ship overlaps any alien. A collision also re-docks the
    /// ship; the caller is responsible for taking a life.
    pub fn check_collision(&mut self, fleet: &Fleet) -> bool {
        let rect = self.rect();
        let hit = fleet.aliens().iter().any(|alien| rect.overlaps(&alien.rect()));
        if hit {
            self.recenter();
        }
        hit
    }
}

impl Collider for Ship {
    fn rect(&self) -> Rect {
        self.body.rect()
    }
}
