use crate::app::{App, AppMode};
use crate::ui::keys::map_key;
use crate::ui::terminal_guard::TerminalGuard;
use crate::ui::view;
use crossterm::event::{self, Event};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::time::Duration;
use tracing::debug;

const POLL_INTERVAL: Duration = Duration::from_millis(250);

pub struct TuiManager {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    // Dropped after the terminal so the screen is restored last
    _guard: TerminalGuard,
}

impl TuiManager {
    pub fn new() -> Result<Self, io::Error> {
        let guard = TerminalGuard::new()?;
        let backend = CrosstermBackend::new(io::stdout());
        let terminal = Terminal::new(backend)?;

        Ok(TuiManager {
            terminal,
            _guard: guard,
        })
    }

    /// Draw, wait for a key, apply it. Events that block on the network get
    /// an extra frame first so their loading text is visible.
    pub fn run_event_loop(&mut self, app: &mut App) -> io::Result<()> {
        loop {
            if app.mode() == AppMode::Quit {
                return Ok(());
            }

            self.render_frame(app)?;

            if !event::poll(POLL_INTERVAL)? {
                continue;
            }
            if let Event::Key(key) = event::read()? {
                let app_event = map_key(app, key);
                if app.prepare(&app_event) {
                    debug!(view = ?app.view, "drawing loading frame");
                    self.render_frame(app)?;
                }
                app.handle_event(app_event);
            }
        }
    }

    pub fn render_frame(&mut self, app: &App) -> io::Result<()> {
        self.terminal.draw(|frame| view::draw(frame, app))?;
        Ok(())
    }
}
