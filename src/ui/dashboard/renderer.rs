//! Dashboard main renderer

use super::components::{info_panel, logs, metrics, recent_orders};
use crate::state::AppState;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub fn render_dashboard(f: &mut Frame, area: Rect, state: &AppState) {
    let stats = state.stats();

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),
            Constraint::Fill(1),
            Constraint::Percentage(30),
        ])
        .split(area);

    metrics::render_stat_cards(f, main_chunks[0], &stats);

    let content_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(main_chunks[1]);

    recent_orders::render_recent_orders(f, content_chunks[0], &stats);
    info_panel::render_info_panel(f, content_chunks[1], state);
    logs::render_logs_panel(f, main_chunks[2], state);
}
