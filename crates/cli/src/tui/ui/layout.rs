//! Main layout and frame composition.

use contextkit_core::opener::Launcher;
use ratatui::{prelude::*, widgets::Paragraph};

use super::{contexts, items, status};
use crate::tui::app::App;

/// Draw the entire application UI.
pub fn draw<L: Launcher>(frame: &mut Frame, app: &App<L>) {
    // Main layout: header, body, footer
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(5),    // Body
            Constraint::Length(2), // Status bar
        ])
        .split(frame.area());

    draw_header(frame, main_chunks[0], app);

    // Body: contexts | items
    let body_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
        .split(main_chunks[1]);

    contexts::draw(frame, body_chunks[0], app);
    items::draw(frame, body_chunks[1], app);

    status::draw(frame, main_chunks[2], app);
}

fn draw_header<L: Launcher>(frame: &mut Frame, area: Rect, app: &App<L>) {
    let dir_text = format!("[{}]", app.settings.contexts_dir.display());
    let title = "contextkit";

    let padding =
        area.width.saturating_sub(title.len() as u16 + dir_text.len() as u16 + 2) as usize;

    let line = Line::from(vec![
        Span::styled(format!(" {}", title), Style::default().fg(Color::Cyan).bold()),
        Span::raw(" ".repeat(padding)),
        Span::styled(dir_text, Style::default().fg(Color::DarkGray)),
        Span::raw(" "),
    ]);

    frame.render_widget(Paragraph::new(line), area);
}
