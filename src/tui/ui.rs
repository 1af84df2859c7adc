//! Stateless UI rendering for tic-tac-toe.
//!
//! [`ScreenLayout`] is computed once per frame and shared between drawing
//! and mouse hit-testing, so a click always lands on what was drawn.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};
use tictactoe_core::{Board, Player, Position, Square};

use super::app::App;

const CELL_WIDTH: u16 = 11;
const CELL_HEIGHT: u16 = 3;
const BUTTON_WIDTH: u16 = 16;
const BUTTON_HEIGHT: u16 = 3;

const START_COLOR: Color = Color::Rgb(0x4c, 0xaf, 0x50);
const RESET_COLOR: Color = Color::Rgb(0xff, 0x98, 0x00);
const EXIT_COLOR: Color = Color::Rgb(0xf4, 0x43, 0x36);

const HELP_TEXT: &str = "Click or 1-9: play | Arrows + Enter: play | S: start | R: reset | Q: exit";

/// Something clickable on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// A board cell.
    Cell(Position),
    /// The "Start Game" button.
    Start,
    /// The "Reset Game" button.
    Reset,
    /// The "Exit" button.
    Exit,
}

/// Screen regions for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScreenLayout {
    /// Instructions and turn status.
    pub status: Rect,
    /// Board cells in row-major order.
    pub cells: [Rect; 9],
    /// "Start Game" button.
    pub start: Rect,
    /// "Reset Game" button.
    pub reset: Rect,
    /// "Exit" button.
    pub exit: Rect,
    /// Running score.
    pub score: Rect,
    /// Key help.
    pub help: Rect,
}

impl ScreenLayout {
    /// Lays out the screen inside `area`.
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4),               // Status
                Constraint::Length(1),               // Spacer
                Constraint::Length(CELL_HEIGHT * 3), // Board
                Constraint::Length(1),               // Spacer
                Constraint::Length(BUTTON_HEIGHT),   // Buttons
                Constraint::Length(1),               // Score
                Constraint::Length(1),               // Help
                Constraint::Min(0),
            ])
            .split(area);

        let board_area = center_rect(chunks[2], CELL_WIDTH * 3, CELL_HEIGHT * 3);
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(CELL_HEIGHT); 3])
            .split(board_area);

        let mut cells = [Rect::default(); 9];
        for (row, row_area) in rows.iter().enumerate() {
            let cols = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Length(CELL_WIDTH); 3])
                .split(*row_area);
            for (col, cell) in cols.iter().enumerate() {
                cells[row * 3 + col] = *cell;
            }
        }

        let button_area = center_rect(chunks[4], BUTTON_WIDTH * 3 + 2, BUTTON_HEIGHT);
        let buttons = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(BUTTON_WIDTH),
                Constraint::Length(1),
                Constraint::Length(BUTTON_WIDTH),
                Constraint::Length(1),
                Constraint::Length(BUTTON_WIDTH),
            ])
            .split(button_area);

        Self {
            status: chunks[0],
            cells,
            start: buttons[0],
            reset: buttons[2],
            exit: buttons[4],
            score: chunks[5],
            help: chunks[6],
        }
    }

    /// Returns what sits under the terminal cell `(column, row)`.
    pub fn hit(&self, column: u16, row: u16) -> Option<Target> {
        if let Some(index) = self.cells.iter().position(|r| contains(*r, column, row)) {
            return Position::from_index(index).map(Target::Cell);
        }
        [
            (self.start, Target::Start),
            (self.reset, Target::Reset),
            (self.exit, Target::Exit),
        ]
        .into_iter()
        .find(|(area, _)| contains(*area, column, row))
        .map(|(_, target)| target)
    }
}

fn contains(area: Rect, column: u16, row: u16) -> bool {
    column >= area.x
        && column < area.x.saturating_add(area.width)
        && row >= area.y
        && row < area.y.saturating_add(area.height)
}

/// Renders the whole screen.
pub fn draw(frame: &mut Frame, app: &App, layout: &ScreenLayout) {
    let status = Paragraph::new(app.status_message())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Tic Tac Toe ")
                .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
        );
    frame.render_widget(status, layout.status);

    match app.notification() {
        Some(notification) => {
            draw_board(frame, layout, notification.board(), |pos| notification.highlights(pos), None)
        }
        None => draw_board(frame, layout, app.session().board(), |_| false, Some(app.cursor())),
    }

    draw_button(frame, layout.start, "Start Game", START_COLOR);
    draw_button(frame, layout.reset, "Reset Game", RESET_COLOR);
    draw_button(frame, layout.exit, "Exit", EXIT_COLOR);

    let score = Paragraph::new(app.session().score().to_string())
        .style(Style::default().add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(score, layout.score);

    let help = Paragraph::new(HELP_TEXT)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, layout.help);

    if let Some(notification) = app.notification() {
        // Drawn over the status box so the final board stays visible.
        let area = center_rect(layout.status, 40, 4);
        let popup = Paragraph::new(vec![
            Line::from(Span::styled(
                notification.message(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "Press any key to continue",
                Style::default().fg(Color::DarkGray),
            )),
        ])
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(notification.title())
                .border_style(Style::default().fg(Color::Yellow)),
        );
        frame.render_widget(Clear, area);
        frame.render_widget(popup, area);
    }
}

fn draw_board(
    frame: &mut Frame,
    layout: &ScreenLayout,
    board: &Board,
    highlighted: impl Fn(Position) -> bool,
    cursor: Option<Position>,
) {
    for pos in Position::ALL {
        let (symbol, mut style) = match board.get(pos) {
            Square::Empty => ("", Style::default()),
            Square::Occupied(Player::X) => (
                "X",
                Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
            ),
            Square::Occupied(Player::O) => (
                "O",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
        };

        if highlighted(pos) {
            style = style.bg(Color::Yellow);
        } else if cursor == Some(pos) {
            style = style.bg(Color::Gray);
        }

        let cell = Paragraph::new(symbol)
            .style(style)
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray)),
            );
        frame.render_widget(cell, layout.cells[pos.index()]);
    }
}

fn draw_button(frame: &mut Frame, area: Rect, label: &str, color: Color) {
    let button = Paragraph::new(label)
        .style(
            Style::default()
                .fg(Color::White)
                .bg(color)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(button, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}
