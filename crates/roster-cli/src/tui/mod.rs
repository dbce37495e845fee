//! Roster TUI
//!
//! Terminal user interface for the employee roster.
//!
//! ## Screens
//!
//! - List: the employee table (filter, sort, paginate)
//! - Form: create a new employee
//!
//! ## Navigation (list)
//!
//! - /: Search (applied after typing settles)
//! - h/l or ←/→: Move the sort cursor across columns
//! - s or Enter: Cycle the cursor column through asc/desc/off
//! - n/p: Next/previous page, g/G: first/last page
//! - z: Cycle rows per page
//! - a: New employee, ?: Help, q: Quit
//!
//! ## Navigation (form)
//!
//! - Tab/↓ and Shift+Tab/↑: Move between fields
//! - ←/→: Step through state/department options
//! - Enter: Save, Esc: Cancel

mod app;
mod ui;

use std::fs::File;
use std::io::stdout;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::prelude::*;
use tracing::info;
use tracing_subscriber::EnvFilter;

use roster_core::{Config, EmployeeStore, JsonFilePersistence};

use crate::i18n::Strings;
use app::{App, InputMode, Screen};

/// Run the TUI application
pub fn run(config: &Config) -> Result<()> {
    // Initialize TUI logging (file-based, only if ROSTER_LOG is set)
    init_tui_logging(config);

    config.ensure_data_dir()?;
    let persistence = Box::new(JsonFilePersistence::new(config.employees_path()));
    let mut store = if config.seed_demo_data {
        EmployeeStore::open_seeded(persistence)
    } else {
        EmployeeStore::open(persistence)
    };
    info!(count = store.len(), "store opened");

    // Setup terminal
    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;

    let strings = Strings::for_language(config.language);
    let mut app = App::new(&store, strings);

    let result = run_app(&mut terminal, &mut app, &mut store);

    // Restore terminal
    disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;

    result
}

fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    store: &mut EmployeeStore,
) -> Result<()> {
    loop {
        // Settle debounced search and expire stale status text
        app.tick(store, Instant::now());

        terminal.draw(|frame| ui::draw(frame, app))?;

        // Poll so the debounce window fires without a keypress
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                // Only handle key press events (not release)
                if key.kind != KeyEventKind::Press {
                    continue;
                }

                // If help is showing, any key dismisses it
                if app.show_help {
                    app.show_help = false;
                    continue;
                }

                match (app.screen, app.input_mode) {
                    (Screen::List, InputMode::Normal) => {
                        handle_list_keys(app, store, key.code, key.modifiers);
                    }
                    (Screen::List, InputMode::Filter) => {
                        handle_filter_keys(app, store, key.code);
                    }
                    (Screen::Form, _) => {
                        handle_form_keys(app, store, key.code, key.modifiers);
                    }
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Handle key events on the list screen in normal mode
fn handle_list_keys(
    app: &mut App,
    store: &mut EmployeeStore,
    code: KeyCode,
    modifiers: KeyModifiers,
) {
    match code {
        // Quit
        KeyCode::Char('q') => {
            app.should_quit = true;
        }
        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
            app.should_quit = true;
        }

        // New employee
        KeyCode::Char('a') => {
            app.open_form();
        }

        // Search
        KeyCode::Char('/') => {
            app.input_mode = InputMode::Filter;
        }
        KeyCode::Esc => {
            app.filter_input.clear();
            app.debouncer.cancel();
            app.view.set_filter("");
            app.refresh(store);
        }

        // Sort cursor
        KeyCode::Char('h') | KeyCode::Left => {
            app.cursor_left();
        }
        KeyCode::Char('l') | KeyCode::Right => {
            app.cursor_right();
        }
        KeyCode::Char('s') | KeyCode::Enter => {
            let column = app.cursor_column();
            app.view.toggle_sort(column);
            app.refresh(store);
        }

        // Pagination
        KeyCode::Char('n') => {
            app.view.next_page();
            app.refresh(store);
        }
        KeyCode::Char('p') => {
            app.view.prev_page();
            app.refresh(store);
        }
        KeyCode::Char('g') => {
            app.view.first_page();
            app.refresh(store);
        }
        KeyCode::Char('G') => {
            app.view.last_page();
            app.refresh(store);
        }
        KeyCode::Char('z') => {
            app.view.cycle_page_size();
            app.refresh(store);
        }

        // Help
        KeyCode::Char('?') => {
            app.toggle_help();
        }

        _ => {}
    }
}

/// Handle key events while typing a search
fn handle_filter_keys(app: &mut App, store: &mut EmployeeStore, code: KeyCode) {
    match code {
        // Esc clears the search entirely
        KeyCode::Esc => {
            app.input_mode = InputMode::Normal;
            app.filter_input.clear();
            app.debouncer.cancel();
            app.view.set_filter("");
            app.refresh(store);
        }

        // Enter keeps the search and applies it immediately
        KeyCode::Enter => {
            app.input_mode = InputMode::Normal;
            if let Some(filter) = app.debouncer.flush() {
                app.view.set_filter(filter);
                app.refresh(store);
            }
        }

        KeyCode::Backspace => {
            app.filter_input.pop();
            app.debouncer.submit(app.filter_input.clone(), Instant::now());
        }

        KeyCode::Char(c) => {
            app.filter_input.push(c);
            app.debouncer.submit(app.filter_input.clone(), Instant::now());
        }

        _ => {}
    }
}

/// Handle key events on the creation form
fn handle_form_keys(
    app: &mut App,
    store: &mut EmployeeStore,
    code: KeyCode,
    modifiers: KeyModifiers,
) {
    match code {
        KeyCode::Esc => {
            app.close_form();
        }
        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
            app.should_quit = true;
        }

        KeyCode::Tab | KeyCode::Down => {
            app.focus_next();
        }
        KeyCode::BackTab | KeyCode::Up => {
            app.focus_prev();
        }

        // Pick-list fields step through their options
        KeyCode::Left => {
            app.cycle_option(-1);
        }
        KeyCode::Right => {
            app.cycle_option(1);
        }

        KeyCode::Enter => {
            if let Some(employee) = app.submit_form() {
                info!(id = %employee.id, "employee created");
                store.append(employee);
                app.close_form();
                app.set_status(app.strings.employee_created.to_string());
                app.refresh(store);
            }
        }

        KeyCode::Backspace => {
            let field = app.focused_field();
            app.form.value_mut(field).pop();
        }

        KeyCode::Char(c) => {
            let field = app.focused_field();
            app.form.value_mut(field).push(c);
        }

        _ => {}
    }
}

/// Initialize file-based logging for TUI mode
///
/// Writing to stderr would corrupt the alternate screen, so logs go to a
/// file, and only when ROSTER_LOG asks for them.
fn init_tui_logging(config: &Config) {
    let Ok(log_level) = std::env::var("ROSTER_LOG") else {
        return;
    };

    let log_path = config
        .log_file
        .clone()
        .unwrap_or_else(|| config.data_dir.join("debug.log"));

    let log_file = match File::create(&log_path) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("Warning: Could not create log file {:?}: {}", log_path, e);
            return;
        }
    };

    let env_filter = EnvFilter::new(format!(
        "roster_core={},roster_cli={}",
        log_level, log_level
    ));

    // Ignore the error if a subscriber is already installed
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(log_file)
        .with_ansi(false)
        .try_init();
}
