use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use std::time::Duration;

use crate::entities::GameState;

/// Represents semantic game actions that can be triggered by input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    MoveLeft,
    MoveRight,
    Fire,
    Start,
    Pause,
    Resume,
    Restart,
    /// Left mouse button pressed at a terminal cell
    Click { column: u16, row: u16 },
    Quit,
}

/// Tracks the state of keys that can be held down for continuous input
#[derive(Debug, Default)]
struct KeyState {
    left: bool,
    right: bool,
}

/// Manages input polling and translates raw key events into game actions
pub struct InputManager {
    key_state: KeyState,
    oneshot_actions: Vec<InputAction>,
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}

impl InputManager {
    pub fn new() -> Self {
        Self {
            key_state: KeyState::default(),
            oneshot_actions: Vec::new(),
        }
    }

    /// Polls for all input events and stores one-shot actions
    /// Should be called once per frame before getting actions
    pub fn poll_events(&mut self, game_state: &GameState) -> color_eyre::Result<()> {
        self.oneshot_actions.clear();

        while event::poll(Duration::from_millis(0))? {
            self.handle_event(event::read()?, game_state);
        }

        Ok(())
    }

    pub fn handle_event(&mut self, event: Event, game_state: &GameState) {
        match event {
            Event::Key(key_event) => self.handle_key_event(key_event, game_state),
            Event::Mouse(mouse_event) => self.handle_mouse_event(mouse_event),
            // Resize is picked up from the terminal size on the next draw
            _ => {}
        }
    }

    fn handle_mouse_event(&mut self, mouse_event: MouseEvent) {
        if mouse_event.kind == MouseEventKind::Down(MouseButton::Left) {
            self.oneshot_actions.push(InputAction::Click {
                column: mouse_event.column,
                row: mouse_event.row,
            });
        }
    }

    fn handle_key_event(&mut self, key_event: KeyEvent, game_state: &GameState) {
        match key_event.kind {
            KeyEventKind::Press => self.handle_key_press(key_event, game_state),
            KeyEventKind::Release => self.handle_key_release(key_event.code),
            _ => {}
        }
    }

    fn handle_key_press(&mut self, key_event: KeyEvent, game_state: &GameState) {
        // Quit works in any state
        if matches!(
            key_event.code,
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc
        ) || (key_event.code == KeyCode::Char('c')
            && key_event.modifiers.contains(KeyModifiers::CONTROL))
        {
            self.oneshot_actions.push(InputAction::Quit);
            return;
        }

        let pause_key = matches!(key_event.code, KeyCode::Char('p') | KeyCode::Char('P'));
        match game_state {
            GameState::Menu => {
                if pause_key || key_event.code == KeyCode::Enter {
                    self.oneshot_actions.push(InputAction::Start);
                }
            }
            GameState::Playing => match key_event.code {
                _ if pause_key => self.oneshot_actions.push(InputAction::Pause),
                KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Left => {
                    self.key_state.left = true;
                    self.key_state.right = false;
                }
                KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Right => {
                    self.key_state.right = true;
                    self.key_state.left = false;
                }
                // One bullet per press
                KeyCode::Char(' ') => self.oneshot_actions.push(InputAction::Fire),
                _ => {}
            },
            GameState::Paused => {
                if pause_key {
                    self.oneshot_actions.push(InputAction::Resume);
                }
            }
            GameState::GameOver => {
                if matches!(
                    key_event.code,
                    KeyCode::Char('r') | KeyCode::Char('R') | KeyCode::Enter
                ) {
                    self.oneshot_actions.push(InputAction::Restart);
                }
            }
        }
    }

    fn handle_key_release(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Left => {
                self.key_state.left = false;
            }
            KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Right => {
                self.key_state.right = false;
            }
            _ => {}
        }
    }

    /// Drops held movement, e.g. after a pause or a lost life.
    pub fn release_all(&mut self) {
        self.key_state = KeyState::default();
    }

    /// Returns all actions for this frame (both continuous and one-shot)
    /// Must be called after poll_events()
    pub fn get_actions(&self, game_state: &GameState) -> Vec<InputAction> {
        let mut actions = Vec::new();
        actions.extend_from_slice(&self.oneshot_actions);

        if *game_state == GameState::Playing {
            if self.key_state.left {
                actions.push(InputAction::MoveLeft);
            }
            if self.key_state.right {
                actions.push(InputAction::MoveRight);
            }
        }

        actions
    }
}
