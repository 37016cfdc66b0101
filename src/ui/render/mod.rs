mod all;
mod bmi_form;
mod catalog;
mod footer;
mod log;
mod main;
mod product_detail;

use self::log::log;
use super::*;
use footer::footer;
use main::main;

pub use all::all as render;

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Return a rectangle centered in `r` covering the given percentages of it.
///
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
