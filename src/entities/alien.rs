use super::collision::Collider;
use super::movable::{Movable2D, Rect};

/// A single member of the alien fleet.
#[derive(Debug, Clone, PartialEq)]
pub struct Alien {
    pub body: Movable2D,
}

impl Alien {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            body: Movable2D::new(x, y, width, height),
        }
    }

    /// Moves horizontally by `direction * speed`.
    pub fn update(&mut self, direction: i8, speed: f32) {
        self.body.translate(f32::from(direction) * speed, 0.0);
    }

    pub fn drop_by(&mut self, distance: f32) {
        self.body.translate(0.0, distance);
    }

    /// True when the alien touches the left or right screen edge.
    pub fn check_edges(&self, screen_width: i32) -> bool {
        let rect = self.rect();
        rect.right() >= screen_width || rect.left() <= 0
    }
}

impl Collider for Alien {
    fn rect(&self) -> Rect {
        self.body.rect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alien_moves_with_direction() {
        let mut alien = Alien::new(100.0, 50.0, 40.0, 40.0);
        alien.update(1, 2.5);
        assert_eq!(alien.body.x, 102.5);
        alien.update(-1, 2.5);
        assert_eq!(alien.body.x, 100.0);
        assert_eq!(alien.body.y, 50.0);
    }

    #[test]
    fn test_alien_drop() {
        let mut alien = Alien::new(100.0, 50.0, 40.0, 40.0);
        alien.drop_by(40.0);
        assert_eq!(alien.rect().top(), 90);
    }

    #[test]
    fn test_alien_edges() {
        assert!(Alien::new(0.0, 0.0, 40.0, 40.0).check_edges(200));
        assert!(Alien::new(160.0, 0.0, 40.0, 40.0).check_edges(200));
        assert!(!Alien::new(1.0, 0.0, 40.0, 40.0).check_edges(200));
        assert!(!Alien::new(159.0, 0.0, 40.0, 40.0).check_edges(200));
    }
}
