//! Footer component
//!
//! Key hints for the current screen

use crate::state::AppState;
use crate::view::View;
use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

pub fn key_hints(state: &AppState) -> &'static str {
    if state.pending_delete().is_some() {
        return "[Y] Delete | [N] Cancel";
    }
    match state.view() {
        View::Login => "[Tab] Next field | [Enter] Submit | [F2] Sign in / Register | [Esc] Quit",
        View::Dashboard => "[A] Add product | [R] Refresh | [L] Logout | [Q] Quit",
        View::Products => {
            "[Up/Down] Select | [E] Edit | [D] Delete | [A] Add | [R] Refresh | [L] Logout | [Q] Quit"
        }
        View::AddProduct | View::EditProduct { .. } => {
            "[Tab] Next field | [Left/Right] Category | [Enter] Save | [Esc] Back"
        }
        View::Orders => {
            "[F] Filter | [G] Generate sample orders | [R] Refresh | [L] Logout | [Q] Quit"
        }
    }
}

pub fn render_footer(f: &mut Frame, area: Rect, state: &AppState) {
    let footer = Paragraph::new(key_hints(state))
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_type(BorderType::Thick),
        );
    f.render_widget(footer, area);
}
