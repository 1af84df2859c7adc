//! Maps terminal events to user actions.

use crossterm::event::{Event, KeyCode, KeyEventKind, MouseButton, MouseEventKind};

use super::app::{Action, Direction};
use super::ui::{ScreenLayout, Target};

/// Decodes a terminal event against the layout of the last frame.
///
/// Key releases, mouse moves and resizes yield `None`. Unbound key
/// presses and clicks on empty space yield [`Action::Acknowledge`].
pub fn action_for(event: &Event, layout: &ScreenLayout) -> Option<Action> {
    match event {
        Event::Key(key) if key.kind != KeyEventKind::Release => Some(key_action(key.code)),
        Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
            Some(match layout.hit(mouse.column, mouse.row) {
                Some(Target::Cell(pos)) => {
                    let (row, col) = pos.coords();
                    Action::Play { row, col }
                }
                Some(Target::Start) => Action::Start,
                Some(Target::Reset) => Action::Reset,
                Some(Target::Exit) => Action::Exit,
                None => Action::Acknowledge,
            })
        }
        _ => None,
    }
}

fn key_action(code: KeyCode) -> Action {
    match code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Action::Exit,
        KeyCode::Char('s') | KeyCode::Char('S') => Action::Start,
        KeyCode::Char('r') | KeyCode::Char('R') => Action::Reset,
        KeyCode::Enter | KeyCode::Char(' ') => Action::PlayCursor,
        KeyCode::Up => Action::MoveCursor(Direction::Up),
        KeyCode::Down => Action::MoveCursor(Direction::Down),
        KeyCode::Left => Action::MoveCursor(Direction::Left),
        KeyCode::Right => Action::MoveCursor(Direction::Right),
        KeyCode::Char(c @ '1'..='9') => {
            let index = c as usize - '1' as usize;
            Action::Play {
                row: index / 3,
                col: index % 3,
            }
        }
        _ => Action::Acknowledge,
    }
}
