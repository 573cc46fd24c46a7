//! Add / edit product form

use crate::forms::ProductField;
use crate::state::AppState;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap};

pub fn render_product_form(f: &mut Frame, area: Rect, state: &AppState) {
    let form = &state.product_form;
    let title = if form.is_edit() {
        "EDIT PRODUCT"
    } else {
        "ADD PRODUCT"
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(ProductField::ALL.len() as u16 + 4), Constraint::Fill(1)])
        .split(area);

    let lines: Vec<Line> = ProductField::ALL
        .iter()
        .map(|field| {
            let focused = form.focused() == *field;
            let label_style = if focused {
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            let value = match form.input(*field) {
                Some(input) => Span::raw(format!(
                    "{}{}",
                    input.value(),
                    if focused { "_" } else { "" }
                )),
                None => Span::styled(
                    format!("< {} >", form.category()),
                    Style::default().fg(Color::LightYellow),
                ),
            };
            Line::from(vec![
                Span::styled(format!("{:>32}: ", field.label()), label_style),
                value,
            ])
        })
        .collect();

    let fields = Paragraph::new(lines).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Cyan))
            .padding(Padding::horizontal(1)),
    );
    f.render_widget(fields, chunks[0]);

    let mut notes = Vec::new();
    if form.is_edit() && form.name.value().is_empty() && state.is_loading() {
        notes.push(Line::from(Span::styled(
            "Loading product...",
            Style::default().fg(Color::LightYellow),
        )));
    }
    if !form.existing_images.is_empty() {
        notes.push(Line::from(Span::styled(
            "Current images (kept unless new files are given):",
            Style::default().fg(Color::Gray),
        )));
        for image in &form.existing_images {
            notes.push(Line::from(format!("  {}", state.environment.asset_url(image))));
        }
    }
    let selected = form.image_paths();
    if !selected.is_empty() {
        notes.push(Line::from(Span::styled(
            format!("{} new image(s) will be uploaded", selected.len()),
            Style::default().fg(Color::Green),
        )));
    }
    if state.is_loading() {
        notes.push(Line::from(Span::styled(
            "Saving...",
            Style::default().fg(Color::LightYellow),
        )));
    }

    let notes = Paragraph::new(notes).wrap(Wrap { trim: true }).block(
        Block::default()
            .title("IMAGES")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    f.render_widget(notes, chunks[1]);
}
