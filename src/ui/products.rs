//! Product list screen

use crate::state::AppState;
use crate::ui::utils::format_price;
use ratatui::Frame;
use ratatui::layout::{Constraint, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Borders, Cell, Paragraph, Row, Table, TableState};

pub fn render_products(f: &mut Frame, area: Rect, state: &AppState) {
    let products = state.products();
    let block = Block::default()
        .title(format!("PRODUCTS ({})", products.len()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan));

    if products.is_empty() {
        let text = if state.is_loading() {
            vec![Line::from("Loading products...")]
        } else {
            vec![
                Line::from("No products yet."),
                Line::from("Press [A] to add your first product."),
            ]
        };
        let empty = Paragraph::new(text)
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        f.render_widget(empty, area);
        return;
    }

    let header = Row::new(["Name", "Category", "Price", "Stock", "Images"]).style(
        Style::default()
            .fg(Color::Gray)
            .add_modifier(Modifier::BOLD),
    );
    let rows = products.iter().map(|product| {
        let stock_style = if product.quantity == 0 {
            Style::default().fg(Color::Red)
        } else {
            Style::default()
        };
        Row::new(vec![
            Cell::from(product.name.clone()),
            Cell::from(product.category.clone()),
            Cell::from(format_price(product.price)),
            Cell::from(product.quantity.to_string()).style(stock_style),
            Cell::from(product.images.len().to_string()),
        ])
    });

    let table = Table::new(
        rows,
        [
            Constraint::Fill(3),
            Constraint::Fill(2),
            Constraint::Length(12),
            Constraint::Length(8),
            Constraint::Length(8),
        ],
    )
    .header(header)
    .block(block)
    .row_highlight_style(
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )
    .highlight_symbol("> ");

    let mut table_state = TableState::default().with_selected(Some(state.selected_product_index()));
    f.render_stateful_widget(table, area, &mut table_state);
}
