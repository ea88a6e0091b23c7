use crate::entities::{Fleet, GameState, Ship};
use crate::settings::Settings;
use crate::stats::GameStats;

/// What happened during one simulation step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickReport {
    /// The fleet touched a side edge, dropped and reversed
    pub fleet_turned: bool,
    pub aliens_hit: usize,
    pub level_cleared: bool,
    pub ship_lost: bool,
    pub game_over: bool,
}

/// Simulation state for one play session, independent of the terminal.
pub struct Game {
    /// Settings of the current level
    settings: Settings,
    /// Level 1 settings, restored on restart
    base_settings: Settings,
    pub state: GameState,
    pub ship: Ship,
    pub fleet: Fleet,
    pub stats: GameStats,
}

impl Game {
    pub fn new(settings: Settings) -> Self {
        let stats = GameStats::new(&settings);
        Self::with_stats(settings, stats)
    }

    pub fn with_stats(settings: Settings, stats: GameStats) -> Self {
        Self {
            ship: Ship::new(&settings),
            fleet: Fleet::new(&settings),
            base_settings: settings.clone(),
            settings,
            state: GameState::Menu,
            stats,
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Begins a new session from level 1; ignored while a game is running.
    pub fn start(&mut self) {
        if !matches!(self.state, GameState::Menu | GameState::GameOver) {
            return;
        }

        self.settings = self.base_settings.clone();
        self.stats.reset_stats();
        self.ship = Ship::new(&self.settings);
        self.fleet.rebuild(&self.settings);
        self.state = GameState::Playing;
        tracing::info!(hi_score = self.stats.hi_score, "game started");
    }

    pub fn pause(&mut self) {
        if self.state == GameState::Playing {
            self.state = GameState::Paused;
        }
    }

    pub fn resume(&mut self) {
        if self.state == GameState::Paused {
            self.state = GameState::Playing;
        }
    }

    pub fn set_movement(&mut self, left: bool, right: bool) {
        self.ship.moving_left = left;
        self.ship.moving_right = right;
    }

    /// Fires one bullet if playing and the arsenal has room.
    pub fn fire(&mut self) -> bool {
        self.state == GameState::Playing && self.ship.fire()
    }

    /// Runs one frame: fleet, ship and bullets move, hits are scored, then
    /// level and life transitions are applied.
    pub fn tick(&mut self) -> TickReport {
        let mut report = TickReport::default();
        if self.state != GameState::Playing {
            return report;
        }

        report.fleet_turned = self.fleet.tick();
        self.ship.tick();

        let hits = self.fleet.resolve_hits(&mut self.ship.arsenal);
        report.aliens_hit = hits.len();
        if !hits.is_empty() {
            self.stats.update(hits.len());
        }

        if self.fleet.is_cleared() {
            self.next_level();
            report.level_cleared = true;
            return report;
        }

        let rammed = self.ship.check_collision(&self.fleet);
        let breached = self.fleet.check_breach(self.settings.screen_height);
        if rammed || breached {
            report.ship_lost = true;
            report.game_over = !self.ship_hit();
        }

        report
    }

    /// Harder settings, a fresh fleet and a fresh ship.
    fn next_level(&mut self) {
        self.settings = self.settings.apply_difficulty_step();
        self.ship = Ship::new(&self.settings);
        self.fleet.rebuild(&self.settings);
        self.stats.update_level();
    }

    /// Takes a life and resets the board; returns false when none are left.
    fn ship_hit(&mut self) -> bool {
        if self.stats.lose_ship() {
            self.ship.arsenal.clear();
            self.ship.recenter();
            self.fleet.rebuild(&self.settings);
            true
        } else {
            self.state = GameState::GameOver;
            tracing::info!(score = self.stats.score, level = self.stats.level, "game over");
            false
        }
    }
}
