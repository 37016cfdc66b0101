use super::{bmi_form, catalog, product_detail, Frame};
use crate::state::{Screen, State};
use ratatui::layout::Rect;

/// Render main widget according to state.
///
pub fn main(frame: &mut Frame, size: Rect, state: &mut State) {
    match state.current_screen() {
        Screen::Bmi => {
            bmi_form::bmi_form(frame, size, state);
        }
        Screen::Catalog => {
            // Always draw the card list first so the modal appears on top
            catalog::catalog(frame, size, state);

            if state.is_detail_visible() {
                product_detail::product_detail(frame, size, state);
            }
        }
    }
}
