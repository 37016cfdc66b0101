use super::Frame;
use crate::state::{Screen, State};
use crate::ui::widgets::styling;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::{Block, Borders, Paragraph};

/// Render the footer with key hints for the current interaction mode.
///
pub fn footer(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.get_theme();

    let (hints, color) = if state.is_debug_mode() {
        (
            "d/Échap: fermer le log · Ctrl-c: quitter",
            theme.info.to_color(),
        )
    } else if state.is_detail_visible() {
        (
            "Entrée/b: acheter · Échap/Retour: fermer",
            theme.success.to_color(),
        )
    } else {
        match state.current_screen() {
            Screen::Bmi => (
                "Tab: boutique · ↑/↓: champ · Entrée: calculer · r: réinitialiser · q: quitter",
                theme.primary.to_color(),
            ),
            Screen::Catalog => (
                "Tab: calculateur · ↑/↓: article · Entrée: détails · b: acheter · q: quitter",
                theme.primary.to_color(),
            ),
        }
    };

    let widget = Paragraph::new(hints).style(Style::default().fg(color)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(styling::normal_block_border_style(theme)),
    );
    frame.render_widget(widget, size);
}
