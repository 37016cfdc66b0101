use super::Frame;
use crate::state::State;
use crate::ui::widgets::styling;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

/// Render the product detail overlay for the selected product.
///
pub fn product_detail(frame: &mut Frame, size: Rect, state: &State) {
    let product = match state.get_selected_product() {
        Some(product) => product,
        None => return,
    };
    let theme = state.get_theme();

    let area = super::centered_rect(70, 70, size);
    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styling::active_block_border_style(theme))
        .title(Span::styled(
            format!(" {} ", product.title),
            styling::banner_style(theme).patch(styling::active_block_title_style()),
        ));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let art_height = product.art.lines().count() as u16;
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints(
            [
                Constraint::Length(art_height),
                Constraint::Length(2),
                Constraint::Min(1),
                Constraint::Length(1),
            ]
            .as_ref(),
        )
        .split(inner);

    frame.render_widget(
        Paragraph::new(product.art.as_str())
            .alignment(Alignment::Center)
            .style(styling::normal_text_style(theme).fg(theme.accent.to_color())),
        rows[0],
    );

    let rating_span = match product.rating {
        Some(rating) => Span::styled(
            format!("★ {:.1}", rating),
            styling::normal_text_style(theme).fg(theme.warning.to_color()),
        ),
        None => Span::styled("Pas encore noté", styling::muted_text_style(theme)),
    };
    let meta = Line::from(vec![
        Span::styled(
            product.price.to_owned(),
            styling::secondary_text_style(theme).patch(styling::active_block_title_style()),
        ),
        Span::raw("   "),
        rating_span,
    ]);
    frame.render_widget(Paragraph::new(meta).alignment(Alignment::Center), rows[1]);

    frame.render_widget(
        Paragraph::new(product.description.as_str())
            .style(styling::normal_text_style(theme))
            .wrap(Wrap { trim: true }),
        rows[2],
    );

    frame.render_widget(
        Paragraph::new("Entrée/b: Acheter maintenant · Échap: Fermer")
            .alignment(Alignment::Center)
            .style(styling::normal_text_style(theme).fg(theme.success.to_color())),
        rows[3],
    );
}
