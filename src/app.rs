use crate::config::Config;
use crate::error::AppError;
use crate::events::terminal::Handler as TerminalEventHandler;
use crate::logger;
use crate::state::State;
use crate::ui::Theme;
use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::*;
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::io::{self, stdout};
use std::sync::{Arc, Mutex};

/// Oversees event processing, state management, and terminal output.
///
pub struct App {
    state: State,
    log_buffer: Arc<Mutex<Vec<String>>>,
}

impl App {
    /// Start a new application according to the given configuration. Returns
    /// the result of the application execution.
    ///
    pub fn start(config: Config) -> Result<()> {
        let log_buffer =
            logger::init(LevelFilter::Info).map_err(|e| AppError::Logger(e.to_string()))?;
        info!("Starting application...");

        let theme = match Theme::from_name(&config.theme_name) {
            Some(theme) => theme,
            None => {
                warn!(
                    "Unknown theme '{}', falling back to the default.",
                    config.theme_name
                );
                Theme::default()
            }
        };

        let mut app = App {
            state: State::new(theme, config.initial_screen()),
            log_buffer,
        };
        app.start_ui()?;

        info!("Exiting application...");
        Ok(())
    }

    /// Begin the terminal event poll on a separate thread before starting the
    /// render loop on the main thread. Return the result following an exit
    /// request or unrecoverable error.
    ///
    fn start_ui(&mut self) -> Result<()> {
        debug!("Starting user interface on main thread...");
        let mut stdout = stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        enable_raw_mode()?;

        let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        terminal.hide_cursor()?;

        let terminal_event_handler = TerminalEventHandler::new();
        loop {
            self.drain_log_buffer();
            if let Ok(size) = terminal.backend().size() {
                self.state.set_terminal_size(size);
            };
            terminal.draw(|frame| crate::ui::render(frame, &mut self.state))?;
            if !terminal_event_handler.handle_next(&mut self.state)? {
                debug!("Received application exit request.");
                break;
            }
        }

        disable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, LeaveAlternateScreen, DisableMouseCapture)?;

        Ok(())
    }

    /// Move captured log lines into state for the debug overlay.
    ///
    fn drain_log_buffer(&mut self) {
        if let Ok(mut buffer) = self.log_buffer.lock() {
            for entry in buffer.drain(..) {
                self.state.push_debug_entry(entry);
            }
        }
    }
}
