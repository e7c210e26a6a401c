//! TUI module for interactive mode.

mod actions;
mod app;
mod event;
mod ui;

use std::io;
use std::time::Duration;

use color_eyre::eyre::Result;
use crossterm::{
    event::{poll, read, Event, KeyEventKind},
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
    },
};
use ratatui::prelude::*;

use contextkit_core::config::Settings;

use app::App;
use event::map_key_event;

/// Run the TUI application.
pub fn run(settings: Settings) -> Result<()> {
    color_eyre::install()?;

    let app = App::new(settings);

    // Setup terminal
    let mut terminal = setup_terminal()?;

    // Run with cleanup on panic
    let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
        run_app(&mut terminal, app)
    }));

    // Always restore terminal
    restore_terminal(&mut terminal)?;

    match result {
        Ok(Ok(())) => Ok(()),
        Ok(Err(e)) => Err(e),
        Err(_) => Err(color_eyre::eyre::eyre!("Application panicked")),
    }
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    mut app: App,
) -> Result<()> {
    loop {
        terminal.draw(|frame| ui::draw(frame, &app))?;

        if poll(Duration::from_millis(100))? {
            if let Event::Key(key) = read()? {
                // Windows reports releases too
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if let Some(msg) = map_key_event(&app, key) {
                    app.update(msg);
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
