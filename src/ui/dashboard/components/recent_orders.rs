//! Recent orders table

use crate::stats::DashboardStats;
use crate::ui::utils::{format_price, status_color};
use ratatui::Frame;
use ratatui::layout::{Constraint, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Borders, Cell, Paragraph, Row, Table};

pub fn render_recent_orders(f: &mut Frame, area: Rect, stats: &DashboardStats) {
    let block = Block::default()
        .title("RECENT ORDERS")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan));

    if stats.recent_orders.is_empty() {
        let empty = Paragraph::new(vec![
            Line::from("No orders yet."),
            Line::from("Open Orders [3] and press [G] to generate sample orders."),
        ])
        .style(Style::default().fg(Color::DarkGray))
        .block(block);
        f.render_widget(empty, area);
        return;
    }

    let header = Row::new(["Product", "Customer", "Total", "Status"]).style(
        Style::default()
            .fg(Color::Gray)
            .add_modifier(Modifier::BOLD),
    );
    let rows = stats.recent_orders.iter().map(|order| {
        Row::new(vec![
            Cell::from(order.product_name.clone()),
            Cell::from(order.customer_name.clone()),
            Cell::from(format_price(order.total_price)),
            Cell::from(order.status.to_string())
                .style(Style::default().fg(status_color(order.status))),
        ])
    });

    let table = Table::new(
        rows,
        [
            Constraint::Fill(2),
            Constraint::Fill(2),
            Constraint::Length(12),
            Constraint::Length(10),
        ],
    )
    .header(header)
    .block(block);
    f.render_widget(table, area);
}
