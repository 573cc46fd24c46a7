//! Vendor profile panel

use crate::environment::Environment;
use crate::state::AppState;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::prelude::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap};

pub fn render_info_panel(f: &mut Frame, area: Rect, state: &AppState) {
    let mut info_lines = Vec::new();

    if let Some(vendor) = state.session.vendor() {
        info_lines.push(Line::from(Span::styled(
            vendor.business_name.clone(),
            Style::default().fg(Color::LightBlue),
        )));
        info_lines.push(Line::from(Span::styled(
            vendor.name.clone(),
            Style::default().fg(Color::Cyan),
        )));
        info_lines.push(Line::from(Span::styled(
            vendor.email.clone(),
            Style::default().fg(Color::Gray),
        )));
        if !vendor.phone.is_empty() {
            info_lines.push(Line::from(Span::styled(
                vendor.phone.clone(),
                Style::default().fg(Color::Gray),
            )));
        }
        info_lines.push(Line::from(""));
    }

    let env_color = match state.environment {
        Environment::Local => Color::Green,
        Environment::Custom { .. } => Color::Yellow,
    };
    info_lines.push(Line::from(Span::styled(
        format!("Server: {}", state.environment.api_url()),
        Style::default().fg(env_color),
    )));
    info_lines.push(Line::from(Span::styled(
        format!("Version: {}", env!("CARGO_PKG_VERSION")),
        Style::default().fg(Color::Cyan),
    )));

    let block = Block::default()
        .title("VENDOR")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::uniform(1));

    let paragraph = Paragraph::new(info_lines)
        .block(block)
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}
