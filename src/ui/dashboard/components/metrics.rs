//! Dashboard stat cards

use crate::stats::DashboardStats;
use crate::ui::utils::format_price;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

fn stat_card(title: &str, value: String, color: Color) -> Paragraph<'_> {
    Paragraph::new(value)
        .alignment(Alignment::Center)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(color)),
        )
}

pub fn render_stat_cards(f: &mut Frame, area: Rect, stats: &DashboardStats) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(area);

    let cards = [
        stat_card(
            "Total Products",
            stats.total_products.to_string(),
            Color::Cyan,
        ),
        stat_card(
            "Total Orders",
            stats.total_orders.to_string(),
            Color::LightBlue,
        ),
        stat_card(
            "Pending Orders",
            stats.pending_orders.to_string(),
            Color::Yellow,
        ),
        stat_card(
            "Total Revenue",
            format_price(stats.total_revenue),
            Color::Green,
        ),
    ];

    for (card, chunk) in cards.into_iter().zip(chunks.iter()) {
        f.render_widget(card, *chunk);
    }
}
