//! Right pane: preview while browsing, the session while editing, or the input form.

use contextkit_core::opener::Launcher;
use contextkit_core::reference::{classify, ReferenceKind};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
};

use crate::tui::app::{App, EditState, InputPurpose, Mode, Preview};

pub fn draw<L: Launcher>(frame: &mut Frame, area: Rect, app: &App<L>) {
    if let Mode::Input(purpose) = app.mode {
        draw_input_form(frame, area, app, purpose);
        return;
    }

    // Failure reports can be long; give them the whole pane.
    if let (Mode::Result, Some(status)) = (&app.mode, &app.status) {
        if status.is_error {
            let p = Paragraph::new(status.text.replace("; ", "\n"))
                .style(Style::default().fg(Color::Red))
                .block(
                    Block::default()
                        .title(" Result ")
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(Color::Red)),
                )
                .wrap(Wrap { trim: false });
            frame.render_widget(p, area);
            return;
        }
    }

    match &app.edit {
        Some(edit) => draw_session(frame, area, edit),
        None => draw_preview(frame, area, app),
    }
}

fn draw_preview<L: Launcher>(frame: &mut Frame, area: Rect, app: &App<L>) {
    let block = Block::default()
        .title(" Preview ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    match &app.preview {
        Preview::None => {
            let p = Paragraph::new("Select a context to preview")
                .style(Style::default().fg(Color::DarkGray))
                .block(block);
            frame.render_widget(p, area);
        }
        Preview::Error(e) => {
            let p = Paragraph::new(e.as_str())
                .style(Style::default().fg(Color::Red))
                .block(block)
                .wrap(Wrap { trim: false });
            frame.render_widget(p, area);
        }
        Preview::Items(items) => {
            let rows: Vec<ListItem> =
                items.iter().map(|item| reference_line(item, "   ", Style::default())).collect();
            frame.render_widget(List::new(rows).block(block), area);
        }
    }
}

fn draw_session(frame: &mut Frame, area: Rect, edit: &EditState) {
    let title = match &edit.name {
        Some(name) => format!(" {} ({}) ", name, edit.session.state()),
        None => " New context ".to_string(),
    };

    let mut rows: Vec<ListItem> = Vec::new();
    for (i, item) in edit.session.items().iter().enumerate() {
        let marked = edit.marked.contains(&i);
        let prefix = match (i == edit.cursor, marked) {
            (true, true) => " >*",
            (true, false) => " > ",
            (false, true) => "  *",
            (false, false) => "   ",
        };
        let style = if i == edit.cursor {
            Style::default().bg(Color::DarkGray).fg(Color::White)
        } else {
            Style::default()
        };
        rows.push(reference_line(item, prefix, style));
    }

    if rows.is_empty() {
        rows.push(ListItem::new(Span::styled(
            " (empty, press a to add a URL, file or folder)",
            Style::default().fg(Color::DarkGray).italic(),
        )));
    }

    let list = List::new(rows).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );
    frame.render_widget(list, area);
}

fn reference_line<'a>(item: &'a str, prefix: &'a str, style: Style) -> ListItem<'a> {
    let (tag, color) = match classify(item) {
        ReferenceKind::Url => ("url ", Color::Blue),
        ReferenceKind::LocalPath => ("path", Color::Green),
    };
    ListItem::new(Line::from(vec![
        Span::raw(prefix),
        Span::styled(tag, Style::default().fg(color)),
        Span::raw(" "),
        Span::raw(item),
    ]))
    .style(style)
}

fn draw_input_form<L: Launcher>(
    frame: &mut Frame,
    area: Rect,
    app: &App<L>,
    purpose: InputPurpose,
) {
    let (title, label) = match purpose {
        InputPurpose::AddReference => {
            (" Add ", "Enter URL, file path, or folder path:")
        }
        InputPurpose::SaveName => (" Save Context ", "Context name:"),
        InputPurpose::ConfirmOverwrite => {
            (" Save Context ", "A context with this name exists. Replace it? (y/N)")
        }
    };

    let text = vec![
        Line::from(Span::styled(label, Style::default().fg(Color::Cyan))),
        Line::from(""),
        Line::from(vec![
            Span::raw("> "),
            Span::raw(app.input_buffer.as_str()),
            Span::styled("_", Style::default().fg(Color::DarkGray)),
        ]),
    ];

    let paragraph = Paragraph::new(text)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow)),
        )
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}
