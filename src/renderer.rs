use crate::entities::{Collider, Fleet, GameState, Rect as WorldRect, Ship};
use crate::stats::GameStats;
use rand::Rng;
use ratatui::{
    Frame,
    buffer::Buffer,
    layout::{Alignment, Position, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// View struct that holds all game state needed for rendering
pub struct RenderView<'a> {
    pub game_state: GameState,
    pub ship: &'a Ship,
    pub fleet: &'a Fleet,
    pub stats: &'a GameStats,
    pub frame_count: u64,
    pub area: Rect,
    /// World size in pixels
    pub world_width: i32,
    pub world_height: i32,
}

/// Maps a world-space rectangle onto terminal cells inside `area`.
///
/// The result is clipped to `area`; `None` when nothing is visible. Anything
/// visible covers at least one cell.
pub fn to_cells(rect: WorldRect, area: Rect, world_width: i32, world_height: i32) -> Option<Rect> {
    if world_width <= 0 || world_height <= 0 || area.width == 0 || area.height == 0 {
        return None;
    }

    let scale_x = |x: i32| i64::from(x) * i64::from(area.width) / i64::from(world_width);
    let scale_y = |y: i32| i64::from(y) * i64::from(area.height) / i64::from(world_height);

    let left = scale_x(rect.left()).max(0);
    let top = scale_y(rect.top()).max(0);
    let right = scale_x(rect.right()).max(left + 1).min(i64::from(area.width));
    let bottom = scale_y(rect.bottom()).max(top + 1).min(i64::from(area.height));

    if left >= right || top >= bottom || rect.bottom() <= 0 || rect.right() <= 0 {
        return None;
    }

    Some(Rect {
        x: area.x + left as u16,
        y: area.y + top as u16,
        width: (right - left) as u16,
        height: (bottom - top) as u16,
    })
}

/// Formats with thousands separators, e.g. `12,300`.
pub fn with_commas(value: u32) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// A clickable label centred on the screen.
#[derive(Debug, Clone)]
pub struct Button {
    pub label: &'static str,
    pub width: u16,
    pub height: u16,
}

impl Button {
    pub fn new(label: &'static str) -> Self {
        Self {
            label,
            width: 20,
            height: 3,
        }
    }

    /// Where the button sits inside `screen`.
    pub fn area(&self, screen: Rect) -> Rect {
        let width = self.width.min(screen.width);
        let height = self.height.min(screen.height);
        Rect {
            x: screen.x + (screen.width - width) / 2,
            y: screen.y + (screen.height - height) / 2,
            width,
            height,
        }
    }

    pub fn check_clicked(&self, screen: Rect, column: u16, row: u16) -> bool {
        self.area(screen).contains(Position::new(column, row))
    }

    fn render(&self, frame: &mut Frame, screen: Rect) {
        let area = self.area(screen);
        frame.render_widget(
            Paragraph::new(Line::from(self.label).bold().white())
                .alignment(Alignment::Center)
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(Color::Blue)),
                )
                .style(Style::default().bg(Color::Blue)),
            area,
        );
    }
}

/// Handles all rendering responsibilities for the game
pub struct GameRenderer {
    play_button: Button,
}

impl Default for GameRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl GameRenderer {
    pub fn new() -> Self {
        Self {
            play_button: Button::new("Play"),
        }
    }

    pub fn play_button(&self) -> &Button {
        &self.play_button
    }

    /// Main render method that dispatches to state-specific renderers
    pub fn render(&self, frame: &mut Frame, view: &RenderView) {
        match view.game_state {
            GameState::Menu => {
                self.render_game(frame, view);
                self.play_button.render(frame, view.area);
            }
            GameState::Playing => self.render_game(frame, view),
            GameState::Paused => self.render_paused(frame, view),
            GameState::GameOver => self.render_game_over(frame, view),
        }
    }

    /// Renders the playfield and HUD
    fn render_game(&self, frame: &mut Frame, view: &RenderView) {
        let area = view.area;

        // Twinkling star background
        if view.frame_count % 10 < 5 {
            let mut rng = rand::rng();
            let star_text = (0..area.height)
                .map(|_| {
                    (0..area.width)
                        .map(|_| if rng.random_bool(0.01) { '.' } else { ' ' })
                        .collect::<String>()
                })
                .collect::<Vec<_>>()
                .join("\n");
            frame.render_widget(
                Paragraph::new(star_text).style(Style::default().fg(Color::DarkGray)),
                area,
            );
        }

        let buffer = frame.buffer_mut();

        for alien in view.fleet.aliens() {
            if let Some(cells) = to_cells(alien.rect(), area, view.world_width, view.world_height)
            {
                fill_cells(buffer, cells, alien_glyph(cells.width), Color::LightGreen);
            }
        }

        for bullet in view.ship.arsenal.bullets() {
            if let Some(cells) = to_cells(bullet.rect(), area, view.world_width, view.world_height)
            {
                fill_cells(buffer, cells, "┃", Color::Yellow);
            }
        }

        if let Some(cells) = to_cells(view.ship.rect(), area, view.world_width, view.world_height)
        {
            fill_cells(buffer, cells, "█", Color::Cyan);
            buffer.set_string(
                cells.x + cells.width / 2,
                cells.y,
                "▲",
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            );
        }

        self.render_hud(frame, view);
    }

    fn render_hud(&self, frame: &mut Frame, view: &RenderView) {
        let area = view.area;
        let label = Style::default().fg(Color::DarkGray);
        let value = Style::default().fg(Color::White).add_modifier(Modifier::BOLD);

        let row = |offset: u16| Rect {
            x: area.x + 1,
            y: area.y + offset,
            width: area.width.saturating_sub(2),
            height: 1,
        };

        // Lives and level on the left
        let lives = "▲ ".repeat(view.stats.ships_left as usize);
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                lives,
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ))),
            row(0),
        );
        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled("LEVEL: ", label),
                Span::styled(view.stats.level.to_string(), value),
            ])),
            row(1),
        );

        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled("HI-SCORE: ", label),
                Span::styled(with_commas(view.stats.hi_score), value.fg(Color::Yellow)),
            ]))
            .centered(),
            row(0),
        );

        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled("MAX SCORE: ", label),
                Span::styled(with_commas(view.stats.max_score), value),
            ]))
            .right_aligned(),
            row(0),
        );
        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled("Score: ", label),
                Span::styled(with_commas(view.stats.score), value),
            ]))
            .right_aligned(),
            row(1),
        );

        let controls = Line::from(Span::styled(
            "[A/D/Arrows: Move] [Space: Fire] [P: Pause] [Q: Quit]",
            label,
        ));
        let controls_area = Rect {
            y: area.y + area.height.saturating_sub(1),
            ..row(0)
        };
        frame.render_widget(Paragraph::new(controls).centered(), controls_area);
    }

    /// Renders the pause screen with overlay
    fn render_paused(&self, frame: &mut Frame, view: &RenderView) {
        self.render_game(frame, view);

        let area = view.area;
        let pause_text = vec![
            Line::from(""),
            Line::from("PAUSED").centered().bold().yellow(),
            Line::from(""),
            Line::from("Press P to resume").centered().white(),
        ];

        let width = 30u16.min(area.width);
        let height = 6u16.min(area.height);
        let pause_area = Rect {
            x: area.x + (area.width - width) / 2,
            y: area.y + (area.height - height) / 2,
            width,
            height,
        };

        frame.render_widget(
            Paragraph::new(pause_text)
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(Color::Yellow)),
                )
                .alignment(Alignment::Center),
            pause_area,
        );
    }

    /// Renders the game over screen
    fn render_game_over(&self, frame: &mut Frame, view: &RenderView) {
        let area = view.area;

        let game_over_text = vec![
            Line::from(""),
            Line::from("╔═══════════════════════════╗").centered().red(),
            Line::from("║        GAME OVER!         ║")
                .centered()
                .red()
                .bold(),
            Line::from("╚═══════════════════════════╝").centered().red(),
            Line::from(""),
            Line::from(format!("Final Score: {}", with_commas(view.stats.score)))
                .centered()
                .yellow()
                .bold(),
            Line::from(format!("Level Reached: {}", view.stats.level))
                .centered()
                .cyan()
                .bold(),
            Line::from(format!("HI-SCORE: {}", with_commas(view.stats.hi_score)))
                .centered()
                .white(),
            Line::from(""),
            Line::from("Press R or click Play to restart").centered().white(),
            Line::from("Press Q to quit").centered().white(),
        ];

        frame.render_widget(
            Paragraph::new(game_over_text)
                .block(Block::default().borders(Borders::ALL))
                .alignment(Alignment::Center),
            area,
        );

        self.play_button.render(frame, area);
    }
}

fn alien_glyph(width: u16) -> &'static str {
    match width {
        0..=1 => "Ѫ",
        2 => "<>",
        _ => "<o>",
    }
}

/// Tiles `glyph` across every row of `cells`.
fn fill_cells(buffer: &mut Buffer, cells: Rect, glyph: &str, color: Color) {
    let glyph_width = glyph.chars().count().max(1);
    let repeats = (cells.width as usize).div_ceil(glyph_width);
    let line: String = glyph
        .chars()
        .cycle()
        .take(repeats * glyph_width)
        .take(cells.width as usize)
        .collect();
    let style = Style::default().fg(color).add_modifier(Modifier::BOLD);
    for row in cells.y..cells.y + cells.height {
        buffer.set_string(cells.x, row, &line, style);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn terminal() -> Rect {
        Rect::new(0, 0, 100, 50)
    }

    #[test]
    fn test_to_cells_scales_world() {
        // 1000x500 world onto 100x50 cells: 10 px per cell.
        let cells = to_cells(WorldRect::new(200, 100, 40, 40), terminal(), 1000, 500).unwrap();
        assert_eq!(cells, Rect::new(20, 10, 4, 4));
    }

    #[test]
    fn test_to_cells_minimum_one_cell() {
        let cells = to_cells(WorldRect::new(505, 255, 3, 3), terminal(), 1000, 500).unwrap();
        assert_eq!(cells.width, 1);
        assert_eq!(cells.height, 1);
    }

    #[test]
    fn test_to_cells_clips_partially_visible() {
        let cells = to_cells(WorldRect::new(100, -20, 40, 40), terminal(), 1000, 500).unwrap();
        assert_eq!(cells.y, 0);
        assert_eq!(cells.height, 2);
    }

    #[test]
    fn test_to_cells_hides_off_screen() {
        assert!(to_cells(WorldRect::new(100, -60, 30, 60), terminal(), 1000, 500).is_none());
        assert!(to_cells(WorldRect::new(100, 500, 30, 60), terminal(), 1000, 500).is_none());
    }

    #[test]
    fn test_with_commas() {
        assert_eq!(with_commas(0), "0");
        assert_eq!(with_commas(999), "999");
        assert_eq!(with_commas(1000), "1,000");
        assert_eq!(with_commas(1234567), "1,234,567");
    }

    #[test]
    fn test_button_centered_and_clickable() {
        let button = Button::new("Play");
        let area = button.area(terminal());
        assert_eq!(area, Rect::new(40, 23, 20, 3));

        assert!(button.check_clicked(terminal(), 40, 23));
        assert!(button.check_clicked(terminal(), 59, 25));
        assert!(!button.check_clicked(terminal(), 60, 25));
        assert!(!button.check_clicked(terminal(), 50, 22));
        assert!(!button.check_clicked(terminal(), 50, 26));
    }
}
