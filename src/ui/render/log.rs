use super::Frame;
use crate::state::State;
use crate::ui::widgets::styling;
use ratatui::layout::Rect;
use ratatui::text::Span;
use ratatui::widgets::{Block, Borders, Clear, List, ListItem};

/// Render the debug log overlay with the most recent captured lines.
///
pub fn log(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.get_theme();
    let visible = size.height.saturating_sub(2) as usize;
    let entries = state.get_debug_entries();
    let start = entries.len().saturating_sub(visible);

    let items: Vec<ListItem> = entries[start..]
        .iter()
        .map(|entry| ListItem::new(entry.as_str()))
        .collect();

    frame.render_widget(Clear, size);
    let list = List::new(items)
        .style(styling::secondary_text_style(theme))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(styling::normal_block_border_style(theme).fg(theme.info.to_color()))
                .title(Span::styled(
                    " Log (d: fermer) ",
                    styling::active_block_title_style(),
                )),
        );
    frame.render_widget(list, size);
}
