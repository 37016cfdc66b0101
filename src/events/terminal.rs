use crate::state::{Screen, State};
use anyhow::Result;
use crossterm::{
    event,
    event::{Event as CrosstermEvent, KeyCode, KeyEvent, KeyModifiers},
};
use log::*;
use std::{sync::mpsc, thread, time::Duration};

/// Specify terminal event poll rate in milliseconds.
///
const TICK_RATE_IN_MS: u64 = 60;

/// Specify different terminal event types.
///
#[derive(Debug)]
pub enum Event<I> {
    Input(I),
    Tick,
}

/// Specify struct for managing terminal events channel.
///
pub struct Handler {
    rx: mpsc::Receiver<Event<KeyEvent>>,
    _tx: mpsc::Sender<Event<KeyEvent>>,
}

impl Handler {
    /// Return new instance after spawning new input polling thread.
    ///
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        let tx_clone = tx.clone();
        thread::spawn(move || loop {
            let tick_rate = Duration::from_millis(TICK_RATE_IN_MS);
            if event::poll(tick_rate).unwrap() {
                if let CrosstermEvent::Key(key) = event::read().unwrap() {
                    tx_clone.send(Event::Input(key)).unwrap();
                }
            }
            tx_clone.send(Event::Tick).unwrap();
        });
        Handler { rx, _tx: tx }
    }

    /// Receive next terminal event and handle it accordingly. Returns result
    /// with value true if should continue or false if exit was requested.
    ///
    pub fn handle_next(&self, state: &mut State) -> Result<bool> {
        match self.rx.recv()? {
            Event::Input(event) => match event {
                KeyEvent {
                    code: KeyCode::Char('c'),
                    modifiers: KeyModifiers::CONTROL,
                    ..
                } => {
                    debug!("Processing exit terminal event '{:?}'...", event);
                    return Ok(false);
                }
                KeyEvent {
                    code: KeyCode::Char('q'),
                    ..
                } => {
                    debug!("Processing exit terminal event '{:?}'...", event);
                    return Ok(false);
                }
                KeyEvent {
                    code: KeyCode::Tab, ..
                } => {
                    // Ignored by state while the detail overlay is open
                    state.next_screen();
                }
                KeyEvent {
                    code: KeyCode::Char('d'),
                    ..
                } => {
                    debug!("Processing debug overlay toggle event '{:?}'...", event);
                    state.toggle_debug_mode();
                }
                KeyEvent {
                    code: KeyCode::Esc, ..
                } => {
                    if state.is_debug_mode() {
                        state.exit_debug_mode();
                    } else if state.is_detail_visible() {
                        debug!("Processing close detail event '{:?}'...", event);
                        state.close_details();
                    }
                }
                KeyEvent {
                    code: KeyCode::Enter,
                    ..
                } => match state.current_screen() {
                    Screen::Bmi => {
                        debug!("Processing calculate event '{:?}'...", event);
                        state.calculate();
                    }
                    Screen::Catalog => {
                        if state.is_detail_visible() {
                            state.confirm_purchase();
                        } else {
                            state.open_selected_details();
                        }
                    }
                },
                KeyEvent {
                    code: KeyCode::Backspace,
                    ..
                } => match state.current_screen() {
                    Screen::Bmi => {
                        state.backspace_input();
                    }
                    Screen::Catalog => {
                        // Platform back gesture equivalent
                        if state.is_detail_visible() {
                            state.close_details();
                        }
                    }
                },
                KeyEvent {
                    code: KeyCode::Char('b'),
                    ..
                } if *state.current_screen() == Screen::Catalog => {
                    if state.is_detail_visible() {
                        state.confirm_purchase();
                    } else {
                        state.open_selected_details();
                    }
                }
                KeyEvent {
                    code: KeyCode::Char('r'),
                    ..
                } if *state.current_screen() == Screen::Bmi => {
                    debug!("Processing reset form event '{:?}'...", event);
                    state.reset_form();
                }
                KeyEvent {
                    code: KeyCode::Down,
                    ..
                }
                | KeyEvent {
                    code: KeyCode::Char('j'),
                    ..
                } => match state.current_screen() {
                    Screen::Bmi => {
                        state.next_field();
                    }
                    Screen::Catalog => {
                        if !state.is_detail_visible() {
                            state.next_product();
                        }
                    }
                },
                KeyEvent {
                    code: KeyCode::Up, ..
                }
                | KeyEvent {
                    code: KeyCode::Char('k'),
                    ..
                } => match state.current_screen() {
                    Screen::Bmi => {
                        state.previous_field();
                    }
                    Screen::Catalog => {
                        if !state.is_detail_visible() {
                            state.previous_product();
                        }
                    }
                },
                KeyEvent {
                    code: KeyCode::Char(c),
                    ..
                } if *state.current_screen() == Screen::Bmi => {
                    // State drops anything that is not a digit or separator
                    state.add_input_char(c);
                }
                _ => {}
            },
            Event::Tick => {
                state.advance_animations();
            }
        }
        Ok(true)
    }
}
