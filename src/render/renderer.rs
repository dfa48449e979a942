use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

use crate::game::{GameState, Position};
use crate::session::SessionPhase;

const HEAD_COLOR: Color = Color::Green;
const BODY_COLOR: Color = Color::Yellow;
const APPLE_COLOR: Color = Color::Rgb(255, 165, 0);

/// Every board cell is two terminal columns wide so cells look square
const CELL_GLYPH: &str = "██";
const EMPTY_GLYPH: &str = "  ";

pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, state: &GameState, phase: SessionPhase) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Score
                Constraint::Min(0),    // Board
                Constraint::Length(1), // Controls
            ])
            .split(frame.area());

        frame.render_widget(self.render_score(state), chunks[0]);

        let board_area = self.board_area(chunks[1], state);
        frame.render_widget(self.render_board(state), board_area);

        if phase == SessionPhase::GameOver {
            let popup = centered(board_area, 24, 4);
            frame.render_widget(Clear, popup);
            frame.render_widget(self.render_game_over(), popup);
        }

        frame.render_widget(self.render_controls(phase), chunks[2]);
    }

    /// Board rectangle including its border, centred in `area`
    fn board_area(&self, area: Rect, state: &GameState) -> Rect {
        let width = terminal_extent(state.board.columns().saturating_mul(2));
        let height = terminal_extent(state.board.rows());
        centered(area, width, height)
    }

    fn render_board(&self, state: &GameState) -> Paragraph<'_> {
        let lines: Vec<Line> = cell_colors(state)
            .into_iter()
            .map(|row| {
                Line::from(
                    row.into_iter()
                        .map(|cell| match cell {
                            Some(color) => Span::styled(CELL_GLYPH, Style::default().fg(color)),
                            None => Span::raw(EMPTY_GLYPH),
                        })
                        .collect::<Vec<_>>(),
                )
            })
            .collect();

        Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Plain)
                .border_style(Style::default().fg(Color::DarkGray))
                .title(" Snake Game "),
        )
    }

    fn render_score(&self, state: &GameState) -> Paragraph<'_> {
        let text = Line::from(vec![
            Span::styled(
                "Score: ",
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            ),
            Span::styled(state.score.to_string(), Style::default().fg(Color::Red)),
        ]);

        Paragraph::new(text).alignment(Alignment::Right)
    }

    fn render_game_over(&self) -> Paragraph<'_> {
        let text = vec![
            Line::from(vec![Span::styled(
                "Game Over",
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )]),
            Line::from(vec![Span::styled(
                "Play Again? (Y/N)",
                Style::default().fg(Color::Green),
            )]),
        ];

        Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::White)),
        )
    }

    fn render_controls(&self, phase: SessionPhase) -> Paragraph<'_> {
        let text = match phase {
            SessionPhase::GameOver => Line::from(vec![
                Span::styled("Y", Style::default().fg(Color::Green)),
                Span::raw(" to play again | "),
                Span::styled("N", Style::default().fg(Color::Red)),
                Span::raw(" or "),
                Span::styled("Q", Style::default().fg(Color::Red)),
                Span::raw(" to quit"),
            ]),
            _ => Line::from(vec![
                Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
                Span::raw(" or "),
                Span::styled("WASD", Style::default().fg(Color::Cyan)),
                Span::raw(" to move | "),
                Span::styled("Q", Style::default().fg(Color::Red)),
                Span::raw(" to quit"),
            ]),
        };

        Paragraph::new(text).alignment(Alignment::Center)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Colour of every board cell, row by row; `None` is empty ground.
///
/// Apples are painted first and the snake over them, head last.
pub fn cell_colors(state: &GameState) -> Vec<Vec<Option<Color>>> {
    let board = &state.board;
    let mut cells = vec![vec![None; board.columns() as usize]; board.rows() as usize];
    let mut paint = |pos: Position, color: Color| {
        if board.contains(pos) {
            let (column, row) = board.to_cell(pos);
            cells[row as usize][column as usize] = Some(color);
        }
    };

    for apple in state.active_apples() {
        paint(apple.position, APPLE_COLOR);
    }
    for segment in state.snake.segments().skip(1) {
        paint(segment.position, BODY_COLOR);
    }
    paint(state.snake.head().position, HEAD_COLOR);

    cells
}

/// Cells plus a two-cell border, clamped to what a terminal can address
fn terminal_extent(cells: i32) -> u16 {
    u16::try_from(cells.saturating_add(2)).unwrap_or(u16::MAX)
}

/// Rectangle of at most `width` x `height` centred in `area`
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}
