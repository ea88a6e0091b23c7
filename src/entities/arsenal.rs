use super::bullet::Bullet;
use crate::settings::Settings;

/// Bounded pool of the player's live bullets.
#[derive(Debug, Clone)]
pub struct Arsenal {
    bullets: Vec<Bullet>,
    max_concurrent: usize,
    bullet_width: f32,
    bullet_height: f32,
    bullet_speed: f32,
}

impl Arsenal {
    pub fn new(settings: &Settings) -> Self {
        Self {
            bullets: Vec::with_capacity(settings.bullet_amount),
            max_concurrent: settings.bullet_amount,
            bullet_width: settings.bullet_width,
            bullet_height: settings.bullet_height,
            bullet_speed: settings.bullet_speed,
        }
    }

    /// Adds a bullet whose top edge is centred on `origin`.
    /// Returns false without firing when the pool is already full.
    pub fn fire(&mut self, origin: (f32, f32)) -> bool {
        if self.bullets.len() >= self.max_concurrent {
            tracing::debug!(active = self.bullets.len(), "fire rejected, arsenal full");
            return false;
        }

        self.bullets.push(Bullet::new(
            origin,
            self.bullet_width,
            self.bullet_height,
            self.bullet_speed,
        ));
        true
    }

    /// Moves every bullet, then drops the ones that left the top of the screen.
    pub fn tick(&mut self) {
        for bullet in &mut self.bullets {
            bullet.update();
        }
        self.bullets.retain(|b| !b.is_off_screen());
    }

    pub fn clear(&mut self) {
        self.bullets.clear();
    }

    pub fn bullets(&self) -> &[Bullet] {
        &self.bullets
    }

    pub(crate) fn bullets_mut(&mut self) -> &mut Vec<Bullet> {
        &mut self.bullets
    }

    pub fn len(&self) -> usize {
        self.bullets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bullets.is_empty()
    }
}
