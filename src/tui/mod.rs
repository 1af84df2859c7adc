//! Terminal UI for tic-tac-toe.

pub mod app;
pub mod input;
pub mod ui;

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::time::Duration;
use tracing::{error, info, instrument};

use crate::audio;
use crate::config::GameConfig;
use app::App;
use ui::ScreenLayout;

/// Runs the game until the user exits.
///
/// The terminal is restored even when the event loop fails.
#[instrument(skip_all, fields(sound = *config.sound()))]
pub fn run_tui(config: &GameConfig) -> Result<()> {
    info!("Starting tic-tac-toe TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let app = App::new(audio::chime_for(*config.sound()));
    let res = run_app(&mut terminal, app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Event loop error");
    }
    info!("Tic-tac-toe TUI closed");

    res
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, mut app: App) -> Result<()> {
    let mut layout = ScreenLayout::default();

    loop {
        terminal.draw(|f| {
            layout = ScreenLayout::new(f.area());
            ui::draw(f, &app, &layout);
        })?;

        if event::poll(Duration::from_millis(250))?
            && let Some(action) = input::action_for(&event::read()?, &layout)
        {
            app.dispatch(action);
        }

        if app.should_quit() {
            return Ok(());
        }
    }
}
