use super::Frame;
use crate::bmi;
use crate::state::{BmiField, State};
use crate::ui::widgets::styling;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Gauge, Paragraph, Wrap};

/// Render the IMC calculator screen.
///
pub fn bmi_form(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.get_theme();

    let outer = Block::default()
        .borders(Borders::ALL)
        .border_style(styling::active_block_border_style(theme))
        .title(Span::styled(
            " Calculateur d'IMC ",
            styling::banner_style(theme).patch(styling::active_block_title_style()),
        ));
    let inner = outer.inner(size);
    frame.render_widget(outer, size);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            [
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Min(8),
            ]
            .as_ref(),
        )
        .split(inner);

    input_field(
        frame,
        rows[0],
        state,
        " Poids (kg) ",
        state.get_weight_input(),
        "ex: 72",
        *state.active_field() == BmiField::Weight,
    );
    input_field(
        frame,
        rows[1],
        state,
        " Taille (cm) ",
        state.get_height_input(),
        "ex: 175",
        *state.active_field() == BmiField::Height,
    );
    message_line(frame, rows[2], state);
    result_card(frame, rows[3], state);
}

/// Render one bordered single-line input.
///
fn input_field(
    frame: &mut Frame,
    size: Rect,
    state: &State,
    title: &str,
    value: &str,
    placeholder: &str,
    active: bool,
) {
    let theme = state.get_theme();
    let border_style = if active {
        styling::active_block_border_style(theme)
    } else {
        styling::normal_block_border_style(theme)
    };
    let title_span = if active {
        Span::styled(title.to_string(), styling::active_block_title_style())
    } else {
        Span::raw(title.to_string())
    };
    let content = if value.is_empty() {
        Span::styled(placeholder.to_string(), styling::muted_text_style(theme))
    } else if active {
        // Trailing block stands in for a cursor
        Span::styled(format!("{}█", value), styling::normal_text_style(theme))
    } else {
        Span::styled(value.to_string(), styling::normal_text_style(theme))
    };
    let widget = Paragraph::new(Line::from(content)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(title_span),
    );
    frame.render_widget(widget, size);
}

/// Render the validation message, or the form hints when the inputs are fine.
///
fn message_line(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.get_theme();
    let widget = match state.get_reading().message {
        Some(message) => Paragraph::new(message).style(styling::error_text_style(theme)),
        None => Paragraph::new("↑/↓: changer de champ · Entrée: calculer · r: réinitialiser")
            .style(styling::muted_text_style(theme)),
    };
    frame.render_widget(widget, size);
}

/// Render the result card: animated value, figure, scale gauge, legend and
/// advisory tip.
///
fn result_card(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.get_theme();
    let reading = state.get_reading();
    let category_color = theme.bmi_category_color(reading.category);

    let card = Block::default()
        .borders(Borders::ALL)
        .border_style(styling::normal_block_border_style(theme))
        .title(" Résultat ");
    let inner = card.inner(size);
    frame.render_widget(card, size);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(38), Constraint::Percentage(62)].as_ref())
        .split(inner);

    // Left column: value, category label, figure
    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            [
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Min(3),
            ]
            .as_ref(),
        )
        .split(columns[0]);

    let value_text = match reading.value {
        Some(_) => format!("{:.2}", state.displayed_value()),
        None => "--".to_string(),
    };
    let value_line = Line::from(vec![
        Span::styled("IMC ", styling::secondary_text_style(theme)),
        Span::styled(
            value_text,
            styling::active_block_title_style().fg(category_color),
        ),
    ]);
    frame.render_widget(
        Paragraph::new(value_line).alignment(Alignment::Center),
        left[0],
    );

    if let Some(category) = reading.category {
        frame.render_widget(
            Paragraph::new(category.label())
                .alignment(Alignment::Center)
                .style(styling::active_block_title_style().fg(category_color)),
            left[1],
        );
        frame.render_widget(
            Paragraph::new(category.figure())
                .alignment(Alignment::Center)
                .style(styling::normal_text_style(theme).fg(category_color)),
            left[2],
        );
    }

    // Right column: gauge, legend, tip
    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            [
                Constraint::Length(3),
                Constraint::Length(7),
                Constraint::Min(4),
            ]
            .as_ref(),
        )
        .split(columns[1]);

    let progress = state.displayed_progress().clamp(0.0, 1.0);
    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(styling::normal_block_border_style(theme))
                .title(format!(
                    " Échelle {:.0}–{:.0} ",
                    bmi::PROGRESS_MIN,
                    bmi::PROGRESS_MAX
                )),
        )
        .gauge_style(styling::normal_text_style(theme).fg(category_color))
        .label(format!("{:.0} %", progress * 100.0))
        .ratio(progress);
    frame.render_widget(gauge, right[0]);

    let legend_lines: Vec<Line> = bmi::Category::all()
        .iter()
        .map(|category| {
            let mut label_style = styling::secondary_text_style(theme);
            if reading.category == Some(*category) {
                label_style = styling::current_list_item_style(theme);
            }
            Line::from(vec![
                Span::styled(
                    "■ ",
                    styling::normal_text_style(theme)
                        .fg(theme.bmi_category_color(Some(*category))),
                ),
                Span::styled(category.label(), label_style),
            ])
        })
        .collect();
    let legend = Paragraph::new(legend_lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(styling::normal_block_border_style(theme))
            .title(" Légende "),
    );
    frame.render_widget(legend, right[1]);

    let tip = Paragraph::new(bmi::tip_for(reading.category))
        .style(styling::secondary_text_style(theme))
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(styling::normal_block_border_style(theme))
                .title(Span::styled(
                    " Conseil ",
                    styling::normal_text_style(theme).fg(theme.warning.to_color()),
                )),
        );
    frame.render_widget(tip, right[2]);
}
