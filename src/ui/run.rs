use std::io;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::config::Settings;
use crate::controller::Controller;
use crate::export::DirectorySink;

use super::draw::draw;
use super::view::{Input, TerminalView};

struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> Result<Self> {
        enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen)?;
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

/// Runs the interactive playground until the user quits.
///
/// # Errors
/// Returns an error if terminal setup or rendering fails.
pub fn run(settings: &Settings) -> Result<()> {
    let sink = DirectorySink::new(&settings.output_dir);
    let mut controller = Controller::new(settings, settings.rng(), sink);

    let mut view = TerminalView::new(settings.axes.clone());
    controller.start(&mut view);

    let _guard = TerminalGuard::enter()?;

    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    loop {
        terminal.draw(|f| draw(f, &view))?;

        if !event::poll(Duration::from_millis(120))? {
            continue;
        }

        let Event::Key(key) = event::read()? else {
            continue;
        };

        if key.kind != KeyEventKind::Press || view.dismiss_notice() {
            continue;
        }

        match view.handle_key(key) {
            Input::Quit => break,
            Input::Event(event) => controller.handle(event, &mut view),
            Input::None => {}
        }
    }

    log::info!("leaving playground");

    terminal.show_cursor()?;
    Ok(())
}
