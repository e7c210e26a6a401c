//! Status bar rendering.

use contextkit_core::opener::Launcher;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::tui::app::{App, Mode};

pub fn draw<L: Launcher>(frame: &mut Frame, area: Rect, app: &App<L>) {
    let (left_text, right_text) = match &app.mode {
        Mode::Browse => {
            (" [j/k] navigate  [Enter] open  [e] edit  [n] new  [q] quit", "Ready")
        }
        Mode::Session => (
            " [a] add  [space] mark  [d] remove  [s] save  [Esc] back",
            "Editing",
        ),
        Mode::Input(_) => (" [Enter] submit  [Esc] cancel", "Input Mode"),
        Mode::Result => (" [Enter] continue", "Done"),
    };

    let right_content = match &app.status {
        Some(status) => {
            let style = if status.is_error {
                Style::default().fg(Color::Red)
            } else {
                Style::default().fg(Color::Green)
            };
            Span::styled(status.text.as_str(), style)
        }
        None => Span::styled(right_text, Style::default().fg(Color::DarkGray)),
    };

    let left = Span::styled(left_text, Style::default().fg(Color::DarkGray));

    let right_len = app.status.as_ref().map_or(right_text.len(), |s| s.text.len());
    let padding =
        area.width.saturating_sub(left_text.len() as u16 + right_len as u16 + 2) as usize;

    let line = Line::from(vec![left, Span::raw(" ".repeat(padding)), right_content]);

    let paragraph = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(Color::DarkGray)),
    );

    frame.render_widget(paragraph, area);
}
