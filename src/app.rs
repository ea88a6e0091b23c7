use color_eyre::Result;
use ratatui::{Terminal, backend::CrosstermBackend, layout::Rect};
use std::time::Duration;

use crate::audio::AudioManager;
use crate::entities::GameState;
use crate::game::Game;
use crate::input::{InputAction, InputManager};
use crate::renderer::{GameRenderer, RenderView};
use crate::settings::Settings;

/// The main application which holds the state and logic of the application.
pub struct App {
    running: bool,
    game: Game,
    frame_count: u64,
    frame_time: Duration,
    /// Terminal area of the last draw, for mouse hit tests
    last_area: Rect,
    /// internal components
    input_manager: InputManager,
    renderer: GameRenderer,
    audio_manager: AudioManager,
}

impl App {
    pub fn new(settings: Settings) -> Self {
        let audio_manager = AudioManager::new(&settings);
        let frame_time = Duration::from_millis(settings.frame_millis());
        Self {
            running: true,
            game: Game::new(settings),
            frame_count: 0,
            frame_time,
            last_area: Rect::default(),
            input_manager: InputManager::new(),
            renderer: GameRenderer::new(),
            audio_manager,
        }
    }

    /// Run the application's main loop.
    pub fn run(mut self, terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>) -> Result<()> {
        while self.running {
            terminal.draw(|frame| {
                self.last_area = frame.area();
                let settings = self.game.settings();
                let view = RenderView {
                    game_state: self.game.state,
                    ship: &self.game.ship,
                    fleet: &self.game.fleet,
                    stats: &self.game.stats,
                    frame_count: self.frame_count,
                    area: frame.area(),
                    world_width: settings.screen_width,
                    world_height: settings.screen_height,
                };
                self.renderer.render(frame, &view);
            })?;

            self.input_manager.poll_events(&self.game.state)?;
            let actions = self.input_manager.get_actions(&self.game.state);
            self.process_actions(&actions);

            if self.game.state == GameState::Playing {
                self.update_game();
            }

            std::thread::sleep(self.frame_time);
        }
        Ok(())
    }

    /// Process input actions and update game state accordingly
    fn process_actions(&mut self, actions: &[InputAction]) {
        let mut left = false;
        let mut right = false;

        for action in actions {
            match action {
                InputAction::Quit => {
                    self.running = false;
                }
                InputAction::Start | InputAction::Restart => {
                    self.game.start();
                }
                InputAction::Pause => {
                    self.game.pause();
                    self.input_manager.release_all();
                }
                InputAction::Resume => {
                    self.game.resume();
                }
                InputAction::Click { column, row } => {
                    let on_button = self
                        .renderer
                        .play_button()
                        .check_clicked(self.last_area, *column, *row);
                    if on_button {
                        self.game.start();
                    }
                }
                InputAction::MoveLeft => left = true,
                InputAction::MoveRight => right = true,
                InputAction::Fire => {
                    if self.game.fire() {
                        self.audio_manager.play_laser();
                    }
                }
            }
        }

        self.game.set_movement(left, right);
    }

    fn update_game(&mut self) {
        self.frame_count += 1;

        let report = self.game.tick();
        if report.fleet_turned {
            tracing::trace!(frame = self.frame_count, "fleet turned");
        }
        if report.aliens_hit > 0 {
            self.audio_manager.play_impact();
        }
        if report.ship_lost {
            self.input_manager.release_all();
        }
    }
}
