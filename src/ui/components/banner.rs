//! Success / error banner

use crate::state::{Banner, BannerKind};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Wrap};

pub fn render_banner(f: &mut Frame, area: Rect, banner: &Banner) {
    let (icon, color) = match banner.kind {
        BannerKind::Success => ("✅", Color::Green),
        BannerKind::Error => ("❌", Color::Red),
    };

    let line = Line::from(vec![
        Span::raw(format!("{} ", icon)),
        Span::styled(
            banner.message.clone(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
        Span::styled("  [Esc] dismiss", Style::default().fg(Color::DarkGray)),
    ]);

    let paragraph = Paragraph::new(line).wrap(Wrap { trim: true }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(color)),
    );
    f.render_widget(paragraph, area);
}
