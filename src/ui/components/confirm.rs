//! Delete confirmation prompt

use crate::state::PendingDelete;
use crate::ui::utils::centered_rect;
use ratatui::Frame;
use ratatui::layout::Alignment;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap};

pub fn render_confirm(f: &mut Frame, pending: &PendingDelete) {
    let area = centered_rect(50, 7, f.area());
    let text = vec![
        Line::from(format!("Delete \"{}\"?", pending.product_name)),
        Line::from(""),
        Line::from("[Y] Yes    [N] No"),
    ];
    let prompt = Paragraph::new(text)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title("Confirm delete")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(
                    Style::default()
                        .fg(Color::Red)
                        .add_modifier(Modifier::BOLD),
                ),
        );
    f.render_widget(Clear, area);
    f.render_widget(prompt, area);
}
