use super::alien::Alien;
use super::arsenal::Arsenal;
use super::bullet::Bullet;
use super::collision::{Hit, resolve};
use super::formation::build;
use crate::settings::Settings;

/// The alien formation, moved as one body.
#[derive(Debug, Clone)]
pub struct Fleet {
    aliens: Vec<Alien>,
    /// Horizontal direction: 1 right, -1 left
    pub direction: i8,
    pub speed: f32,
    pub drop_distance: f32,
    screen_width: i32,
}

impl Fleet {
    /// Builds a full triangular formation from the settings.
    pub fn new(settings: &Settings) -> Self {
        let mut fleet = Self::from_aliens(Vec::new(), settings);
        fleet.rebuild(settings);
        fleet
    }

    /// Wraps an explicit set of aliens; used for custom layouts and tests.
    pub fn from_aliens(aliens: Vec<Alien>, settings: &Settings) -> Self {
        Self {
            aliens,
            direction: heading(settings.fleet_direction),
            speed: settings.fleet_speed,
            drop_distance: settings.fleet_drop_speed,
            screen_width: settings.screen_width,
        }
    }

    /// Replaces the aliens with a fresh formation and resets movement state.
    pub fn rebuild(&mut self, settings: &Settings) {
        self.aliens = build(
            settings.screen_width,
            settings.screen_height,
            settings.alien_width as i32,
            settings.alien_height as i32,
            settings.triangle_base_width,
        )
        .into_iter()
        .map(|(x, y)| Alien::new(x as f32, y as f32, settings.alien_width, settings.alien_height))
        .collect();
        self.direction = heading(settings.fleet_direction);
        self.speed = settings.fleet_speed;
        self.drop_distance = settings.fleet_drop_speed;
        self.screen_width = settings.screen_width;

        tracing::debug!(aliens = self.aliens.len(), "fleet rebuilt");
    }

    /// Advances the formation one frame.
    ///
    /// Every alien moves first. If any alien then touches a side edge the
    /// whole fleet drops once and reverses; returns whether that happened.
    pub fn tick(&mut self) -> bool {
        for alien in &mut self.aliens {
            alien.update(self.direction, self.speed);
        }

        let at_edge = self
            .aliens
            .iter()
            .any(|alien| alien.check_edges(self.screen_width));

        if at_edge {
            for alien in &mut self.aliens {
                alien.drop_by(self.drop_distance);
            }
            self.direction = -self.direction;
            tracing::debug!(direction = self.direction, "fleet hit edge");
        }

        at_edge
    }

    /// True when any alien's bottom edge has reached `floor_y`.
    pub fn check_breach(&self, floor_y: i32) -> bool {
        self.aliens
            .iter()
            .any(|alien| alien.body.rect().bottom() >= floor_y)
    }

    pub fn is_cleared(&self) -> bool {
        self.aliens.is_empty()
    }

    /// Removes every alien/bullet pair that overlaps and returns the pairs.
    pub fn resolve_hits(&mut self, arsenal: &mut Arsenal) -> Vec<Hit<Alien, Bullet>> {
        resolve(&mut self.aliens, arsenal.bullets_mut())
    }

    pub fn aliens(&self) -> &[Alien] {
        &self.aliens
    }

    pub fn len(&self) -> usize {
        self.aliens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aliens.is_empty()
    }
}

/// Keeps the fleet direction at exactly 1 or -1.
fn heading(direction: i8) -> i8 {
    if direction < 0 { -1 } else { 1 }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_settings() -> Settings {
        Settings {
            screen_width: 200,
            screen_height: 400,
            alien_width: 40.0,
            alien_height: 40.0,
            fleet_speed: 5.0,
            fleet_drop_speed: 40.0,
            fleet_direction: 1,
            ..Settings::default()
        }
    }

    #[test]
    fn test_new_fleet_uses_formation() {
        let fleet = Fleet::new(&Settings::default());
        assert_eq!(fleet.len(), 81);
        assert_eq!(fleet.direction, 1);
        assert!(!fleet.is_cleared());
    }

    #[test]
    fn test_tick_moves_all_aliens() {
        let aliens = vec![
            Alien::new(50.0, 10.0, 40.0, 40.0),
            Alien::new(100.0, 10.0, 40.0, 40.0),
        ];
        let mut fleet = Fleet::from_aliens(aliens, &test_settings());
        assert!(!fleet.tick());
        assert_eq!(fleet.aliens()[0].body.x, 55.0);
        assert_eq!(fleet.aliens()[1].body.x, 105.0);
        assert_eq!(fleet.direction, 1);
    }

    #[test]
    fn test_edge_contact_drops_once_and_flips() {
        // Both aliens reach an edge on the same tick.
        let aliens = vec![
            Alien::new(5.0, 10.0, 40.0, 40.0),
            Alien::new(150.0, 10.0, 40.0, 40.0),
        ];
        let mut settings = test_settings();
        settings.fleet_direction = -1;
        let mut fleet = Fleet::from_aliens(aliens, &settings);

        assert!(fleet.tick());
        assert_eq!(fleet.direction, 1);
        for alien in fleet.aliens() {
            assert_eq!(alien.body.y, 50.0);
        }
    }

    #[test]
    fn test_fleet_reverses_after_reaching_right_edge() {
        let aliens = vec![Alien::new(100.0, 10.0, 40.0, 40.0)];
        let mut fleet = Fleet::from_aliens(aliens, &test_settings());

        let mut flips = 0;
        for _ in 0..12 {
            if fleet.tick() {
                flips += 1;
            }
        }
        // Right edge at x = 160 on tick 12.
        assert_eq!(flips, 1);
        assert_eq!(fleet.direction, -1);
        assert_eq!(fleet.aliens()[0].body.y, 50.0);
    }

    #[test]
    fn test_out_of_range_direction_is_clamped_to_a_heading() {
        let aliens = vec![Alien::new(100.0, 10.0, 40.0, 40.0)];
        for (raw, expected) in [(0, 1), (5, 1), (-3, -1), (i8::MIN, -1)] {
            let settings = Settings { fleet_direction: raw, ..test_settings() };
            let mut fleet = Fleet::from_aliens(aliens.clone(), &settings);
            assert_eq!(fleet.direction, expected);
            fleet.tick();
            assert_ne!(fleet.aliens()[0].body.x, 100.0);
        }
    }

    #[test]
    fn test_check_breach() {
        let aliens = vec![Alien::new(50.0, 300.0, 40.0, 40.0)];
        let fleet = Fleet::from_aliens(aliens, &test_settings());
        assert!(fleet.check_breach(340));
        assert!(fleet.check_breach(320));
        assert!(!fleet.check_breach(341));
    }

    #[test]
    fn test_resolve_hits_removes_pair() {
        let settings = test_settings();
        let aliens = vec![
            Alien::new(20.0, 10.0, 40.0, 40.0),
            Alien::new(120.0, 10.0, 40.0, 40.0),
        ];
        let mut fleet = Fleet::from_aliens(aliens, &settings);
        let mut arsenal = Arsenal::new(&settings);
        arsenal.fire((140.0, 30.0));
        arsenal.fire((40.0, 300.0));

        let hits = fleet.resolve_hits(&mut arsenal);

        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].first.body.x, 120.0);
        assert_eq!(fleet.len(), 1);
        assert_eq!(arsenal.len(), 1);
    }

    #[test]
    fn test_cleared_after_last_hit() {
        let settings = test_settings();
        let aliens = vec![Alien::new(20.0, 10.0, 40.0, 40.0)];
        let mut fleet = Fleet::from_aliens(aliens, &settings);
        let mut arsenal = Arsenal::new(&settings);
        arsenal.fire((40.0, 20.0));

        fleet.resolve_hits(&mut arsenal);
        assert!(fleet.is_cleared());
    }

    #[test]
    fn test_rebuild_restores_formation() {
        let settings = Settings::default();
        let mut fleet = Fleet::from_aliens(Vec::new(), &settings);
        assert!(fleet.is_cleared());
        fleet.direction = -1;
        fleet.rebuild(&settings);
        assert_eq!(fleet.len(), 81);
        assert_eq!(fleet.direction, settings.fleet_direction);
    }

    // Property-based tests
    #[cfg(test)]
    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn test_direction_flips_only_on_edge_ticks(
                xs in prop::collection::vec(0u16..160, 1..10),
                speed in 1u8..8,
                ticks in 1usize..100
            ) {
                let settings = Settings { fleet_speed: f32::from(speed), ..test_settings() };
                let aliens = xs
                    .iter()
                    .map(|x| Alien::new(f32::from(*x), 10.0, 40.0, 40.0))
                    .collect();
                let mut fleet = Fleet::from_aliens(aliens, &settings);

                for _ in 0..ticks {
                    let direction_before = fleet.direction;
                    let y_before = fleet.aliens()[0].body.y;
                    let edge = fleet.tick();
                    let touching = fleet
                        .aliens()
                        .iter()
                        .any(|a| a.check_edges(settings.screen_width));

                    prop_assert_eq!(edge, touching);
                    if edge {
                        prop_assert_eq!(fleet.direction, -direction_before);
                        prop_assert_eq!(fleet.aliens()[0].body.y, y_before + 40.0);
                    } else {
                        prop_assert_eq!(fleet.direction, direction_before);
                        prop_assert_eq!(fleet.aliens()[0].body.y, y_before);
                    }
                }
            }
        }
    }
}
