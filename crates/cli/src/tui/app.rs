//! Application state and update logic following The Elm Architecture.

use std::collections::BTreeSet;

use contextkit_core::config::Settings;
use contextkit_core::opener::{Launcher, Opener, SystemLauncher};
use contextkit_core::session::Session;
use contextkit_core::store::ContextStore;

use super::actions;

/// Current operating mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Browsing the list of saved contexts.
    Browse,
    /// Editing the items of a session.
    Session,
    /// Typing into the input line.
    Input(InputPurpose),
    /// Showing the outcome of an operation.
    Result,
}

/// What the input line is collecting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputPurpose {
    AddReference,
    SaveName,
    ConfirmOverwrite,
}

/// Items of the selected context, shown next to the list while browsing.
#[derive(Debug, Clone)]
pub enum Preview {
    None,
    Items(Vec<String>),
    Error(String),
}

/// Feedback message to display in status bar.
#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub is_error: bool,
}

impl StatusMessage {
    pub fn info(text: impl Into<String>) -> Self {
        Self { text: text.into(), is_error: false }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self { text: text.into(), is_error: true }
    }
}

/// Messages that drive state updates.
#[derive(Debug, Clone)]
pub enum Message {
    // Navigation
    SelectNext,
    SelectPrev,
    ToggleMark,

    // Browse actions
    OpenSelected,
    EditSelected,
    NewContext,
    Refresh,

    // Session actions
    AddItem,
    RemoveSelected,
    SaveSession,
    Back,

    // Input handling
    InputChar(char),
    InputBackspace,
    InputSubmit,
    Cancel,

    // System
    Quit,
    ClearStatus,
}

/// The session being edited plus its cursor state.
#[derive(Debug)]
pub struct EditState {
    pub session: Session,
    /// Context name, once known (loaded or saved).
    pub name: Option<String>,
    pub cursor: usize,
    pub marked: BTreeSet<usize>,
}

impl EditState {
    fn new(session: Session, name: Option<String>) -> Self {
        Self { session, name, cursor: 0, marked: BTreeSet::new() }
    }

    fn clamp_cursor(&mut self) {
        self.cursor = self.cursor.min(self.session.len().saturating_sub(1));
    }
}

/// Main application state.
pub struct App<L: Launcher = SystemLauncher> {
    /// Operating mode.
    pub mode: Mode,

    /// Resolved settings.
    pub settings: Settings,

    /// Saved context names, sorted.
    pub contexts: Vec<String>,

    /// Currently selected index in the context list.
    pub selected: usize,

    /// Preview of the selected context.
    pub preview: Preview,

    /// Session being created or edited.
    pub edit: Option<EditState>,

    /// Mode to return to after the result screen.
    pub return_mode: Mode,

    /// Current input buffer.
    pub input_buffer: String,

    /// Name awaiting overwrite confirmation.
    pub pending_name: Option<String>,

    /// Status bar message.
    pub status: Option<StatusMessage>,

    /// Should quit.
    pub should_quit: bool,

    opener: Opener<L>,
}

impl App<SystemLauncher> {
    pub fn new(settings: Settings) -> Self {
        Self::with_launcher(settings, SystemLauncher)
    }
}

impl<L: Launcher> App<L> {
    pub fn with_launcher(settings: Settings, launcher: L) -> Self {
        let mut app = App {
            mode: Mode::Browse,
            settings,
            contexts: Vec::new(),
            selected: 0,
            preview: Preview::None,
            edit: None,
            return_mode: Mode::Browse,
            input_buffer: String::new(),
            pending_name: None,
            status: None,
            should_quit: false,
            opener: Opener::new(launcher),
        };
        app.refresh_contexts();
        app
    }

    pub fn store(&self) -> ContextStore {
        self.settings.store()
    }

    pub fn launcher(&self) -> &L {
        self.opener.launcher()
    }

    pub fn selected_context(&self) -> Option<&str> {
        self.contexts.get(self.selected).map(String::as_str)
    }

    /// Process a message and update state.
    pub fn update(&mut self, msg: Message) {
        match msg {
            Message::SelectNext => self.move_selection(1),
            Message::SelectPrev => self.move_selection(-1),
            Message::ToggleMark => self.toggle_mark(),
            Message::OpenSelected => self.open_selected(),
            Message::EditSelected => self.edit_selected(),
            Message::NewContext => {
                self.edit = Some(EditState::new(Session::create(), None));
                self.mode = Mode::Session;
            }
            Message::Refresh => self.refresh_contexts(),
            Message::AddItem => {
                self.input_buffer.clear();
                self.mode = Mode::Input(InputPurpose::AddReference);
            }
            Message::RemoveSelected => self.remove_selected(),
            Message::SaveSession => self.save_session(),
            Message::Back => {
                // Leaving discards the session.
                self.edit = None;
                self.mode = Mode::Browse;
                self.refresh_contexts();
            }
            Message::InputChar(c) => self.input_buffer.push(c),
            Message::InputBackspace => {
                self.input_buffer.pop();
            }
            Message::InputSubmit => self.submit_input(),
            Message::Cancel => {
                self.input_buffer.clear();
                self.pending_name = None;
                self.mode = if self.edit.is_some() { Mode::Session } else { Mode::Browse };
            }
            Message::ClearStatus => {
                self.status = None;
                self.mode = self.return_mode.clone();
            }
            Message::Quit => self.should_quit = true,
        }
    }

    /// Re-read the context directory, keeping the selection in range.
    pub fn refresh_contexts(&mut self) {
        match self.store().list() {
            Ok(names) => self.contexts = names,
            Err(e) => {
                self.contexts.clear();
                self.status = Some(StatusMessage::error(e.to_string()));
            }
        }
        self.selected = self.selected.min(self.contexts.len().saturating_sub(1));
        self.load_preview();
    }

    fn move_selection(&mut self, delta: isize) {
        if self.mode == Mode::Session {
            if let Some(edit) = self.edit.as_mut() {
                let last = edit.session.len().saturating_sub(1);
                edit.cursor = edit.cursor.saturating_add_signed(delta).min(last);
            }
            return;
        }

        let last = self.contexts.len().saturating_sub(1);
        let next = self.selected.saturating_add_signed(delta).min(last);
        if next != self.selected {
            self.selected = next;
            self.load_preview();
        }
    }

    fn toggle_mark(&mut self) {
        if let Some(edit) = self.edit.as_mut() {
            if edit.session.is_empty() {
                return;
            }
            if !edit.marked.remove(&edit.cursor) {
                edit.marked.insert(edit.cursor);
            }
        }
    }

    fn load_preview(&mut self) {
        self.preview = match self.selected_context() {
            None => Preview::None,
            Some(name) => match self.store().load(name) {
                Ok(items) => Preview::Items(items),
                Err(e) => Preview::Error(e.to_string()),
            },
        };
    }

    fn open_selected(&mut self) {
        let Some(name) = self.selected_context().map(str::to_string) else {
            self.show_result(StatusMessage::info("No context selected."));
            return;
        };
        let status = actions::open_context(&self.store(), &self.opener, &name);
        self.show_result(status);
    }

    fn edit_selected(&mut self) {
        let Some(name) = self.selected_context().map(str::to_string) else {
            self.show_result(StatusMessage::info("No context selected."));
            return;
        };
        match actions::start_edit(&self.store(), &name) {
            Ok(session) => {
                self.edit = Some(EditState::new(session, Some(name)));
                self.mode = Mode::Session;
            }
            Err(status) => self.show_result(status),
        }
    }

    fn remove_selected(&mut self) {
        let Some(edit) = self.edit.as_mut() else { return };
        let indices: Vec<usize> = if edit.marked.is_empty() {
            if edit.session.is_empty() { Vec::new() } else { vec![edit.cursor] }
        } else {
            edit.marked.iter().copied().collect()
        };

        match edit.session.remove(&indices) {
            Ok(items) => {
                let left = items.len();
                edit.marked.clear();
                edit.clamp_cursor();
                self.status = Some(StatusMessage::info(format!(
                    "Removed {} items, {left} left",
                    indices.len()
                )));
            }
            Err(e) => self.status = Some(StatusMessage::info(e.to_string())),
        }
    }

    fn save_session(&mut self) {
        let Some(edit) = self.edit.take() else { return };
        if edit.session.path().is_none() {
            // New context: ask for a name first.
            self.edit = Some(edit);
            self.input_buffer.clear();
            self.mode = Mode::Input(InputPurpose::SaveName);
            return;
        }
        self.finish_save(edit, None, false);
    }

    fn submit_input(&mut self) {
        let input = std::mem::take(&mut self.input_buffer);
        match self.mode {
            Mode::Input(InputPurpose::AddReference) => {
                self.mode = Mode::Session;
                let Some(edit) = self.edit.as_mut() else { return };
                match edit.session.add(&input) {
                    Ok(items) => {
                        edit.cursor = items.len() - 1;
                        self.status = Some(StatusMessage::info("Item added"));
                    }
                    Err(e) => self.status = Some(StatusMessage::info(e.to_string())),
                }
            }
            Mode::Input(InputPurpose::SaveName) => {
                let Some(edit) = self.edit.take() else {
                    self.mode = Mode::Browse;
                    return;
                };
                let name = input.trim().to_string();
                if self.store().exists(&name) {
                    self.edit = Some(edit);
                    self.pending_name = Some(name);
                    self.mode = Mode::Input(InputPurpose::ConfirmOverwrite);
                    return;
                }
                self.finish_save(edit, Some(name), false);
            }
            Mode::Input(InputPurpose::ConfirmOverwrite) => {
                let name = self.pending_name.take();
                let Some(edit) = self.edit.take() else {
                    self.mode = Mode::Browse;
                    return;
                };
                if matches!(input.trim().to_lowercase().as_str(), "y" | "yes") {
                    self.finish_save(edit, name, true);
                } else {
                    self.edit = Some(edit);
                    self.mode = Mode::Session;
                    self.status = Some(StatusMessage::info("Save cancelled"));
                }
            }
            _ => {}
        }
    }

    fn finish_save(&mut self, edit: EditState, name: Option<String>, overwrite: bool) {
        let EditState { session, name: current, cursor, marked } = edit;
        let name = name.or_else(|| current.clone());

        match actions::save_session(&self.store(), session, name.as_deref(), overwrite) {
            Ok(status) => {
                self.edit = None;
                self.refresh_contexts();
                if let Some(name) = &name {
                    if let Some(pos) = self.contexts.iter().position(|c| c == name) {
                        self.selected = pos;
                        self.load_preview();
                    }
                }
                self.return_mode = Mode::Browse;
                self.status = Some(status);
                self.mode = Mode::Result;
            }
            Err((session, status)) => {
                self.edit = Some(EditState { session, name: current, cursor, marked });
                self.return_mode = Mode::Session;
                self.status = Some(status);
                self.mode = Mode::Result;
            }
        }
    }

    fn show_result(&mut self, status: StatusMessage) {
        self.return_mode = self.mode.clone();
        self.status = Some(status);
        self.mode = Mode::Result;
    }
}
