//! Login / registration screen

use crate::forms::{AuthField, AuthForm, AuthMode};
use crate::state::AppState;
use crate::ui::utils::centered_rect;
use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph};

fn field_line(form: &AuthForm, field: AuthField) -> Line<'static> {
    let focused = form.focused() == field;
    let raw = form.input(field).value();
    let value = if field == AuthField::Password {
        "*".repeat(raw.chars().count())
    } else {
        raw.to_string()
    };
    let cursor = if focused { "_" } else { "" };
    let label_style = if focused {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };

    Line::from(vec![
        Span::styled(format!("{:>14}: ", field.label()), label_style),
        Span::raw(value),
        Span::styled(cursor, Style::default().fg(Color::Cyan)),
    ])
}

pub fn render_login(f: &mut Frame, area: Rect, state: &AppState) {
    let form = &state.auth_form;
    let title = match form.mode {
        AuthMode::Login => "Vendor Sign in",
        AuthMode::Register => "Register as a Vendor",
    };

    let mut lines: Vec<Line> = form
        .fields()
        .iter()
        .map(|field| field_line(form, *field))
        .collect();
    lines.push(Line::from(""));

    let status = if state.session.is_authenticating() {
        Span::styled("Signing in...", Style::default().fg(Color::LightYellow))
    } else {
        let hint = match form.mode {
            AuthMode::Login => "No account yet? Press F2 to register",
            AuthMode::Register => "Already registered? Press F2 to sign in",
        };
        Span::styled(hint, Style::default().fg(Color::DarkGray))
    };
    lines.push(Line::from(status));
    lines.push(Line::from(Span::styled(
        format!("Server: {}", state.environment.api_url()),
        Style::default().fg(Color::DarkGray),
    )));

    let height = lines.len() as u16 + 4;
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::horizontal(1));

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Left)
        .block(block);

    f.render_widget(paragraph, centered_rect(64, height, area));
}
