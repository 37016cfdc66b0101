use super::Frame;
use crate::state::State;
use crate::ui::widgets::styling;
use crate::utils::text::wrap_truncate;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem};

/// Number of card lines reserved for the wrapped product description.
///
const DESCRIPTION_LINES: usize = 2;

/// Render the product catalog screen as a stateful card list.
///
pub fn catalog(frame: &mut Frame, size: Rect, state: &mut State) {
    let theme = state.get_theme().clone();
    let text_width = size.width.saturating_sub(6) as usize;

    let items: Vec<ListItem> = state
        .get_products()
        .iter()
        .map(|product| {
            let mut title_spans = vec![Span::styled(
                product.title.to_owned(),
                styling::current_list_item_style(&theme),
            )];
            if let Some(rating) = product.rating {
                title_spans.push(Span::styled(
                    format!("  ★ {:.1}", rating),
                    styling::normal_text_style(&theme).fg(theme.warning.to_color()),
                ));
            }

            let mut lines = vec![
                Line::from(title_spans),
                Line::from(Span::styled(
                    product.price.to_owned(),
                    styling::secondary_text_style(&theme),
                )),
            ];
            for wrapped in wrap_truncate(&product.description, text_width, DESCRIPTION_LINES) {
                lines.push(Line::from(Span::styled(
                    wrapped,
                    styling::muted_text_style(&theme),
                )));
            }
            lines.push(Line::from(Span::styled(
                "Entrée: détails · b: acheter",
                styling::normal_text_style(&theme).fg(theme.success.to_color()),
            )));
            lines.push(Line::from(""));

            ListItem::new(lines)
        })
        .collect();

    let count = items.len();
    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(styling::active_block_border_style(&theme))
                .title(Span::styled(
                    format!(" Boutique ({} articles) ", count),
                    styling::banner_style(&theme).patch(styling::active_block_title_style()),
                )),
        )
        .highlight_style(styling::active_list_item_style(&theme))
        .highlight_symbol("▸ ");

    frame.render_stateful_widget(list, size, state.get_products_list_state());
}
