use crate::event::AppEvent;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use folio_contact::analytics::LogAnalytics;
use folio_contact::port::PENDING_LABEL;
use folio_contact::{
    Config, ContactFormController, FormFields, FormPort, NotificationCenter, Severity, SubmissionOutcome,
};
use std::sync::Arc;
use tokio::sync::mpsc::UnboundedSender;
use tokio::time::Instant;

/// Label of the submit control when idle
pub const SUBMIT_LABEL: &str = "Send Message";

/// Focusable form element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
    Submit,
}

impl Field {
    pub fn next(self) -> Self {
        match self {
            Field::Name => Field::Email,
            Field::Email => Field::Message,
            Field::Message => Field::Submit,
            Field::Submit => Field::Name,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Field::Name => Field::Submit,
            Field::Email => Field::Name,
            Field::Message => Field::Email,
            Field::Submit => Field::Message,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Message => "Message",
            Field::Submit => "",
        }
    }
}

/// Main application state
pub struct App {
    /// Active configuration
    pub config: Config,

    // Form fields
    pub name: String,
    pub email: String,
    pub message: String,
    /// Focused element
    pub focus: Field,
    /// Cursor position in the focused field (char index)
    pub input_cursor: usize,

    // Submit control
    /// Inputs and submit control disabled while a submission is pending
    pub locked: bool,
    pub submit_label: String,

    /// The one visible notification, if any
    pub notifications: NotificationCenter,

    /// Should the app quit
    pub should_quit: bool,

    /// Whether keyboard enhancements are supported (for Shift+Enter)
    pub keyboard_enhancements_supported: bool,

    controller: Option<Arc<ContactFormController>>,
    event_sender: UnboundedSender<AppEvent>,
}

impl App {
    /// Build the form screen and attach the contact controller to it
    pub fn initialize(config: Config, event_sender: UnboundedSender<AppEvent>) -> Self {
        let mut app = Self::new(config.clone(), event_sender);

        let analytics = Arc::new(LogAnalytics::new(config.analytics_id.clone()));
        app.controller = ContactFormController::attach(Some(&app), Some(config))
            .map(|c| Arc::new(c.with_analytics(analytics)));

        app
    }

    /// Form screen driven by an existing controller
    #[cfg(test)]
    pub fn with_controller(
        controller: ContactFormController,
        event_sender: UnboundedSender<AppEvent>,
    ) -> Self {
        let mut app = Self::new(controller.config().clone(), event_sender);
        app.controller = Some(Arc::new(controller));
        app
    }

    fn new(config: Config, event_sender: UnboundedSender<AppEvent>) -> Self {
        let notifications = NotificationCenter::new(config.notification_timeout());

        Self {
            config,
            name: String::new(),
            email: String::new(),
            message: String::new(),
            focus: Field::Name,
            input_cursor: 0,
            locked: false,
            submit_label: SUBMIT_LABEL.to_string(),
            notifications,
            should_quit: false,
            keyboard_enhancements_supported: false, // Will be set by main.rs
            controller: None,
            event_sender,
        }
    }

    /// Handle incoming events
    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Key(key) => self.handle_key(key),
            AppEvent::Paste(text) => self.handle_paste(text),
            AppEvent::Tick => {
                self.notifications.expire(Instant::now());
            }
            AppEvent::SubmissionResolved(outcome) => self.handle_resolved(outcome),
        }
    }

    /// Handle keyboard input
    fn handle_key(&mut self, key: KeyEvent) {
        // Only presses and repeats edit; releases would apply every key twice
        if key.kind == KeyEventKind::Release {
            return;
        }

        // Global shortcuts (work in any state)
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('c') | KeyCode::Char('q') => {
                    self.should_quit = true;
                    return;
                }
                KeyCode::Char('j') if !self.locked && self.focus == Field::Message => {
                    self.handle_char_input('\n');
                    return;
                }
                _ => return,
            }
        }

        match key.code {
            // Close control for the notification
            KeyCode::Esc => {
                self.notifications.dismiss_current();
            }
            KeyCode::Tab | KeyCode::Down => self.set_focus(self.focus.next()),
            KeyCode::BackTab | KeyCode::Up => self.set_focus(self.focus.prev()),
            // Everything below edits or submits, which a locked form refuses
            _ if self.locked => {}
            KeyCode::Enter => {
                if key.modifiers.contains(KeyModifiers::SHIFT) && self.focus == Field::Message {
                    self.handle_char_input('\n');
                } else {
                    self.handle_submit();
                }
            }
            KeyCode::Backspace => self.handle_backspace(),
            KeyCode::Delete => self.handle_delete(),
            KeyCode::Left => {
                self.input_cursor = self.input_cursor.saturating_sub(1);
            }
            KeyCode::Right => {
                let max = self.focused_len();
                if self.input_cursor < max {
                    self.input_cursor += 1;
                }
            }
            KeyCode::Home => {
                self.input_cursor = 0;
            }
            KeyCode::End => {
                self.input_cursor = self.focused_len();
            }
            KeyCode::Char(c) => self.handle_char_input(c),
            _ => {}
        }
    }

    /// Handle paste event: insert into the focused field
    fn handle_paste(&mut self, text: String) {
        if self.locked {
            return;
        }
        // Single-line fields drop newlines
        let text = if self.focus == Field::Message {
            text
        } else {
            text.replace(['\r', '\n'], " ")
        };
        for c in text.chars() {
            self.handle_char_input(c);
        }
    }

    /// Submit the form through the controller; the request runs on its own task
    fn handle_submit(&mut self) {
        let Some(controller) = self.controller.clone() else {
            return;
        };

        if let Some(pending) = controller.begin(self) {
            let sender = self.event_sender.clone();
            tokio::spawn(async move {
                let outcome = pending.send().await;
                let _ = sender.send(AppEvent::SubmissionResolved(outcome));
            });
        }
    }

    fn handle_resolved(&mut self, outcome: SubmissionOutcome) {
        if let Some(controller) = self.controller.clone() {
            controller.finish(self, outcome);
        }
    }

    fn set_focus(&mut self, field: Field) {
        self.focus = field;
        self.input_cursor = self.focused_len();
    }

    fn focused_field_mut(&mut self) -> Option<&mut String> {
        match self.focus {
            Field::Name => Some(&mut self.name),
            Field::Email => Some(&mut self.email),
            Field::Message => Some(&mut self.message),
            Field::Submit => None,
        }
    }

    fn focused_len(&self) -> usize {
        match self.focus {
            Field::Name => self.name.chars().count(),
            Field::Email => self.email.chars().count(),
            Field::Message => self.message.chars().count(),
            Field::Submit => 0,
        }
    }

    /// Handle backspace in the focused field
    fn handle_backspace(&mut self) {
        let cursor = self.input_cursor;
        if cursor == 0 {
            return;
        }
        if let Some(field) = self.focused_field_mut() {
            let byte_pos = char_to_byte_index(field, cursor - 1);
            let next_byte = char_to_byte_index(field, cursor);
            field.drain(byte_pos..next_byte);
            self.input_cursor -= 1;
        }
    }

    /// Delete character at cursor (Delete key)
    fn handle_delete(&mut self) {
        let cursor = self.input_cursor;
        if let Some(field) = self.focused_field_mut() {
            if cursor < field.chars().count() {
                let byte_pos = char_to_byte_index(field, cursor);
                let next_byte = char_to_byte_index(field, cursor + 1);
                field.drain(byte_pos..next_byte);
            }
        }
    }

    /// Insert a character at the cursor of the focused field
    fn handle_char_input(&mut self, c: char) {
        let cursor = self.input_cursor;
        if let Some(field) = self.focused_field_mut() {
            let byte_pos = char_to_byte_index(field, cursor);
            field.insert(byte_pos, c);
            self.input_cursor += 1;
        }
    }
}

impl FormPort for App {
    fn read_fields(&self) -> FormFields {
        FormFields::new(self.name.as_str(), self.email.as_str(), self.message.as_str())
    }

    fn is_locked(&self) -> bool {
        self.locked
    }

    fn disable_form(&mut self) {
        self.locked = true;
        self.submit_label = PENDING_LABEL.to_string();
    }

    fn enable_form(&mut self) {
        self.locked = false;
        self.submit_label = SUBMIT_LABEL.to_string();
    }

    fn show_notification(&mut self, text: &str, severity: Severity) {
        self.notifications.show(text, severity);
    }

    fn clear_form(&mut self) {
        self.name.clear();
        self.email.clear();
        self.message.clear();
        self.focus = Field::Name;
        self.input_cursor = 0;
    }
}

/// Convert a char index to a byte index in a UTF-8 string.
pub fn char_to_byte_index(s: &str, char_idx: usize) -> usize {
    s.char_indices()
        .nth(char_idx)
        .map(|(b, _)| b)
        .unwrap_or(s.len())
}
