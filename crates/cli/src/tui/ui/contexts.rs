//! Context list rendering.

use contextkit_core::opener::Launcher;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, List, ListItem},
};

use crate::tui::app::{App, Mode};

pub fn draw<L: Launcher>(frame: &mut Frame, area: Rect, app: &App<L>) {
    let browsing = matches!(app.mode, Mode::Browse)
        || (matches!(app.mode, Mode::Result) && app.edit.is_none());

    let mut items: Vec<ListItem> = Vec::new();

    for (i, name) in app.contexts.iter().enumerate() {
        let style = if i == app.selected && browsing {
            Style::default().bg(Color::DarkGray).fg(Color::White)
        } else if browsing {
            Style::default()
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let prefix = if i == app.selected { " > " } else { "   " };
        items.push(ListItem::new(format!("{}{}", prefix, name)).style(style));
    }

    if app.contexts.is_empty() {
        items.push(ListItem::new(Span::styled(
            " (no contexts yet, press n)",
            Style::default().fg(Color::DarkGray).italic(),
        )));
    }

    let list = List::new(items).block(
        Block::default()
            .title(" CONTEXTS ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );

    frame.render_widget(list, area);
}
