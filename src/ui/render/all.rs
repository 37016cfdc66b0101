use super::Frame;
use crate::state::State;
use ratatui::layout::{Constraint, Direction, Layout};

/// Render all widgets according to state.
///
pub fn all(frame: &mut Frame, state: &mut State) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(3)].as_ref())
        .split(frame.size());

    super::main(frame, rows[0], state);
    super::footer(frame, rows[1], state);

    // Log overlay sits on top of whatever screen is active
    if state.is_debug_mode() {
        let overlay = super::centered_rect(80, 60, rows[0]);
        super::log(frame, overlay, state);
    }
}
