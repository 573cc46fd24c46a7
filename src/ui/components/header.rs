//! Header component
//!
//! Renders the title, the signed-in vendor and the navigation tabs

use crate::state::AppState;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Tabs};

const TABS: [&str; 3] = ["[1] Dashboard", "[2] Products", "[3] Orders"];

pub fn render_header(f: &mut Frame, area: Rect, state: &AppState) {
    let header_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Length(2)])
        .split(area);

    let mut title_spans = vec![Span::styled(
        format!(
            "KIAKART VENDOR v{} | {}",
            env!("CARGO_PKG_VERSION"),
            state.view().title()
        ),
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )];
    if let Some(welcome) = state.welcome_text() {
        title_spans.push(Span::raw("  |  "));
        title_spans.push(Span::styled(welcome, Style::default().fg(Color::LightGreen)));
    }
    if state.is_loading() {
        title_spans.push(Span::styled(
            "  Loading...",
            Style::default().fg(Color::LightYellow),
        ));
    }

    let title = Paragraph::new(Line::from(title_spans))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_type(BorderType::Thick),
        );
    f.render_widget(title, header_chunks[0]);

    let mut tabs = Tabs::new(TABS.to_vec())
        .style(Style::default().fg(Color::DarkGray))
        .highlight_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        )
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
    if let Some(index) = state.view().tab_index() {
        tabs = tabs.select(index);
    }
    f.render_widget(tabs, header_chunks[1]);
}
