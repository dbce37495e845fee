//! Application state and logic

use std::time::Instant;

use roster_core::{
    Column, Debouncer, Department, EmployeeForm, EmployeeStore, Field, Page, TableView,
    ValidationErrors, US_STATES,
};

use crate::i18n::Strings;

/// Which screen is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// The employee table
    List,
    /// The creation form
    Form,
}

/// Input mode on the list screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Normal navigation mode
    Normal,
    /// Search input mode (after pressing /)
    Filter,
}

/// Application state
pub struct App {
    /// Whether the app should exit
    pub should_quit: bool,
    /// Current screen
    pub screen: Screen,
    /// Current input mode (list screen)
    pub input_mode: InputMode,
    /// Table view settings (filter, sort, pagination)
    pub view: TableView,
    /// Last projected page
    pub page: Page,
    /// Raw search input (applied to the view through the debouncer)
    pub filter_input: String,
    /// Debounces search keystrokes before they hit the view
    pub debouncer: Debouncer,
    /// Column the sort cursor is on
    pub sort_cursor: usize,
    /// Creation form state
    pub form: EmployeeForm,
    /// Focused form field (index into `Field::ALL`)
    pub form_focus: usize,
    /// Validation errors from the last submit attempt
    pub form_errors: ValidationErrors,
    /// Status message to display temporarily
    pub status_message: Option<String>,
    /// When the status message was set (for auto-dismiss)
    pub status_message_time: Option<Instant>,
    /// Whether help overlay is visible
    pub show_help: bool,
    /// Active UI string table
    pub strings: &'static Strings,
}

impl App {
    /// Create a new app and project the initial page
    pub fn new(store: &EmployeeStore, strings: &'static Strings) -> Self {
        let mut view = TableView::new();
        let page = view.project(store.records());

        Self {
            should_quit: false,
            screen: Screen::List,
            input_mode: InputMode::Normal,
            view,
            page,
            filter_input: String::new(),
            debouncer: Debouncer::default(),
            sort_cursor: 0,
            form: EmployeeForm::default(),
            form_focus: 0,
            form_errors: ValidationErrors::default(),
            status_message: None,
            status_message_time: None,
            show_help: false,
            strings,
        }
    }

    /// Re-project the table from the store
    pub fn refresh(&mut self, store: &EmployeeStore) {
        self.page = self.view.project(store.records());
    }

    /// Advance time-based state: commit a settled search, expire status
    pub fn tick(&mut self, store: &EmployeeStore, now: Instant) {
        if let Some(filter) = self.debouncer.poll(now) {
            self.view.set_filter(filter);
            self.refresh(store);
        }
        self.check_status_timeout(now);
    }

    /// Column under the sort cursor
    pub fn cursor_column(&self) -> Column {
        Column::ALL[self.sort_cursor]
    }

    /// Move the sort cursor left (wrapping)
    pub fn cursor_left(&mut self) {
        self.sort_cursor = (self.sort_cursor + Column::ALL.len() - 1) % Column::ALL.len();
    }

    /// Move the sort cursor right (wrapping)
    pub fn cursor_right(&mut self) {
        self.sort_cursor = (self.sort_cursor + 1) % Column::ALL.len();
    }

    /// Switch to the creation form with a fresh slate
    pub fn open_form(&mut self) {
        self.screen = Screen::Form;
        self.form = EmployeeForm::default();
        self.form_focus = 0;
        self.form_errors = ValidationErrors::default();
    }

    /// Leave the form without saving
    pub fn close_form(&mut self) {
        self.screen = Screen::List;
        self.form = EmployeeForm::default();
        self.form_errors = ValidationErrors::default();
    }

    /// Field currently focused on the form
    pub fn focused_field(&self) -> Field {
        Field::ALL[self.form_focus]
    }

    /// Move form focus to the next field (wrapping)
    pub fn focus_next(&mut self) {
        self.form_focus = (self.form_focus + 1) % Field::ALL.len();
    }

    /// Move form focus to the previous field (wrapping)
    pub fn focus_prev(&mut self) {
        self.form_focus = (self.form_focus + Field::ALL.len() - 1) % Field::ALL.len();
    }

    /// Step the focused field through its fixed options, if it has any
    ///
    /// State and department are pick-lists; every other field ignores this.
    pub fn cycle_option(&mut self, delta: isize) {
        match self.focused_field() {
            Field::State => {
                let codes: Vec<&str> = US_STATES.iter().map(|(code, _)| *code).collect();
                let value = self.form.value_mut(Field::State);
                *value = cycle(&codes, value, delta).to_string();
            }
            Field::Department => {
                let names: Vec<&str> = Department::ALL.iter().map(|d| d.name()).collect();
                let value = self.form.value_mut(Field::Department);
                *value = cycle(&names, value, delta).to_string();
            }
            _ => {}
        }
    }

    /// Validate the form and hand back the committed record
    pub fn submit_form(&mut self) -> Option<roster_core::Employee> {
        match self.form.validate() {
            Ok(employee) => {
                self.form_errors = ValidationErrors::default();
                Some(employee)
            }
            Err(errors) => {
                // Jump focus to the first offending field
                if let Some((field, _)) = errors.iter().next() {
                    if let Some(index) = Field::ALL.iter().position(|f| *f == field) {
                        self.form_focus = index;
                    }
                }
                self.form_errors = errors;
                None
            }
        }
    }

    /// Set a status message with the current time
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
        self.status_message_time = Some(Instant::now());
    }

    /// Check and clear expired status message
    pub fn check_status_timeout(&mut self, now: Instant) {
        if let Some(time) = self.status_message_time {
            if now.duration_since(time) > std::time::Duration::from_secs(3) {
                self.status_message = None;
                self.status_message_time = None;
            }
        }
    }

    /// Toggle help overlay
    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }
}

/// Step through a fixed option list from the current value
///
/// An unknown (or empty) current value lands on the first option.
fn cycle<'a>(options: &[&'a str], current: &str, delta: isize) -> &'a str {
    let len = options.len() as isize;
    let position = options
        .iter()
        .position(|o| o.eq_ignore_ascii_case(current.trim()));

    let index = match position {
        Some(i) => (i as isize + delta).rem_euclid(len),
        None => 0,
    };
    options[index as usize]
}
