//! Orders screen with the status filter

use crate::orders::StatusFilter;
use crate::state::AppState;
use crate::ui::utils::{format_price, status_color};
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Cell, Paragraph, Row, Table, TableState};

fn filter_bar(current: StatusFilter) -> Line<'static> {
    let mut spans = vec![Span::styled("Filter: ", Style::default().fg(Color::Gray))];
    for option in StatusFilter::options() {
        let style = if option == current {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled(format!(" {} ", option), style));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

pub fn render_orders(f: &mut Frame, area: Rect, state: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Fill(1)])
        .split(area);

    f.render_widget(Paragraph::new(filter_bar(state.order_filter())), chunks[0]);

    let orders = state.visible_orders();
    let block = Block::default()
        .title(format!("ORDERS ({} of {})", orders.len(), state.orders().len()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan));

    if orders.is_empty() {
        let text = if state.orders().is_empty() {
            "No orders yet. Press [G] to generate sample orders."
        } else {
            "No orders match this filter."
        };
        let empty = Paragraph::new(text)
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        f.render_widget(empty, chunks[1]);
        return;
    }

    let header = Row::new(["Date", "Product", "Customer", "Email", "Qty", "Total", "Status"])
        .style(
            Style::default()
                .fg(Color::Gray)
                .add_modifier(Modifier::BOLD),
        );
    let rows = orders.iter().map(|order| {
        Row::new(vec![
            Cell::from(order.created_at.format("%Y-%m-%d %H:%M").to_string()),
            Cell::from(order.product_name.clone()),
            Cell::from(order.customer_name.clone()),
            Cell::from(order.customer_email.clone()),
            Cell::from(order.quantity.to_string()),
            Cell::from(format_price(order.total_price)),
            Cell::from(order.status.to_string())
                .style(Style::default().fg(status_color(order.status))),
        ])
    });

    let table = Table::new(
        rows,
        [
            Constraint::Length(17),
            Constraint::Fill(2),
            Constraint::Fill(2),
            Constraint::Fill(2),
            Constraint::Length(5),
            Constraint::Length(12),
            Constraint::Length(10),
        ],
    )
    .header(header)
    .block(block)
    .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED));

    let mut table_state = TableState::default().with_selected(Some(state.selected_order_index()));
    f.render_stateful_widget(table, chunks[1], &mut table_state);
}
