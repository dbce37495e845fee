//! UI rendering

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table},
    Frame,
};

use roster_core::{Column, Field, SortDirection};

use super::app::{App, InputMode, Screen};

/// Main UI rendering function
pub fn draw(frame: &mut Frame, app: &App) {
    // Vertical layout with a one-line bar at the bottom
    let outer_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(frame.area());

    match app.screen {
        Screen::List => draw_table(frame, app, outer_chunks[0]),
        Screen::Form => draw_form(frame, app, outer_chunks[0]),
    }

    match (app.screen, app.input_mode) {
        (Screen::List, InputMode::Filter) => draw_filter_input(frame, app, outer_chunks[1]),
        _ => draw_status_bar(frame, app, outer_chunks[1]),
    }

    if app.show_help {
        draw_help_overlay(frame, app);
    }
}

/// Columns shown in the table, in order, with their width weights
const TABLE_COLUMNS: [(Column, u16); 9] = [
    (Column::FirstName, 10),
    (Column::LastName, 10),
    (Column::StartDate, 10),
    (Column::Department, 12),
    (Column::DateOfBirth, 10),
    (Column::Street, 14),
    (Column::City, 10),
    (Column::State, 5),
    (Column::ZipCode, 7),
];

/// Draw the employee table
fn draw_table(frame: &mut Frame, app: &App, area: Rect) {
    let strings = app.strings;
    let page = &app.page;

    let title = format!(" {} — {} ", strings.app_title, strings.list_title);
    let footer = format!(
        " {}: {} | {} {} {} {} {} | {} {} {} {} ",
        strings.rows_label,
        app.view.page_size(),
        strings.showing_label,
        page.rows.len(),
        strings.of_label,
        page.matched,
        strings.results_label,
        strings.page_label,
        page.page_index + 1,
        strings.of_label,
        page.page_count.max(1),
    );

    let block = Block::default()
        .title(title)
        .title_bottom(Line::from(footer).right_aligned())
        .borders(Borders::ALL);

    if page.rows.is_empty() {
        let message = if app.view.filter().is_empty() {
            strings.no_employees
        } else {
            strings.no_employees_filtered
        };
        let paragraph = Paragraph::new(message)
            .style(Style::default().add_modifier(Modifier::DIM))
            .block(block);
        frame.render_widget(paragraph, area);
        return;
    }

    let header_cells = TABLE_COLUMNS.iter().enumerate().map(|(i, (column, _))| {
        let marker = match app.view.sort() {
            Some((active, SortDirection::Ascending)) if active == *column => " ▲",
            Some((active, SortDirection::Descending)) if active == *column => " ▼",
            _ => "",
        };

        let mut style = Style::default().add_modifier(Modifier::BOLD);
        if i == app.sort_cursor {
            style = style.add_modifier(Modifier::REVERSED);
        }

        Cell::from(format!("{}{}", strings.column(*column), marker)).style(style)
    });
    let header = Row::new(header_cells).height(1);

    let rows = page.rows.iter().map(|employee| {
        Row::new(
            TABLE_COLUMNS
                .iter()
                .map(|(column, _)| Cell::from(column.value(employee).to_string())),
        )
    });

    let widths: Vec<Constraint> = TABLE_COLUMNS
        .iter()
        .map(|(_, weight)| Constraint::Fill(*weight))
        .collect();

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .column_spacing(1);

    frame.render_widget(table, area);
}

/// Section header shown above a group of form fields
fn section_line(label: &'static str) -> Line<'static> {
    Line::from(Span::styled(
        label,
        Style::default().add_modifier(Modifier::BOLD),
    ))
}

/// Draw the creation form
fn draw_form(frame: &mut Frame, app: &App, area: Rect) {
    let strings = app.strings;
    let mut lines: Vec<Line> = Vec::new();

    for field in Field::ALL {
        // Section headers, mirroring the form layout
        match field {
            Field::FirstName => lines.push(section_line(strings.personal_information)),
            Field::Street => {
                lines.push(Line::from(""));
                lines.push(section_line(strings.address));
            }
            Field::Department => {
                lines.push(Line::from(""));
                lines.push(section_line(strings.department_section));
            }
            _ => {}
        }

        let focused = app.focused_field() == field;
        let label = format!("  {:16}", strings.field(field));
        let value = app.form.value(field);

        let value_style = if focused {
            Style::default().add_modifier(Modifier::REVERSED)
        } else {
            Style::default()
        };

        let mut spans = vec![Span::raw(label), Span::styled(value.to_string(), value_style)];
        if focused {
            spans.push(Span::styled("▏", Style::default().fg(Color::Yellow)));
        }
        if matches!(field, Field::State | Field::Department) {
            spans.push(Span::styled(
                "  ◂ ▸",
                Style::default().add_modifier(Modifier::DIM),
            ));
        }
        lines.push(Line::from(spans));

        if let Some(message) = app.form_errors.message(field) {
            lines.push(Line::from(Span::styled(
                format!("    {}", message),
                Style::default().fg(Color::Red),
            )));
        }
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!("  [{}]  [{}]", strings.save_employee, strings.cancel),
        Style::default().add_modifier(Modifier::DIM),
    )));

    let block = Block::default()
        .title(format!(" {} ", strings.create_title))
        .borders(Borders::ALL);

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Draw the status bar at the bottom
fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let content = if let Some(msg) = &app.status_message {
        msg.clone()
    } else {
        match app.screen {
            Screen::List => app.strings.list_hints.to_string(),
            Screen::Form => app.strings.form_hints.to_string(),
        }
    };

    let paragraph = Paragraph::new(content).style(Style::default().add_modifier(Modifier::DIM));
    frame.render_widget(paragraph, area);
}

/// Draw the search input at the bottom
fn draw_filter_input(frame: &mut Frame, app: &App, area: Rect) {
    let prefix = "/";

    let line = Line::from(vec![
        Span::styled(prefix, Style::default().fg(Color::Cyan)),
        Span::raw(app.filter_input.as_str()),
        Span::styled(
            format!("  ({} {})", app.page.matched, app.strings.results_label),
            Style::default().add_modifier(Modifier::DIM),
        ),
    ]);

    frame.render_widget(Paragraph::new(line), area);

    // Position cursor after the typed text
    let cursor_x = area.x + prefix.len() as u16 + app.filter_input.chars().count() as u16;
    frame.set_cursor_position((cursor_x, area.y));
}

/// Draw help overlay
fn draw_help_overlay(frame: &mut Frame, app: &App) {
    let area = frame.area();

    // Centered popup
    let popup_width = 52.min(area.width.saturating_sub(4));
    let popup_height = 20.min(area.height.saturating_sub(4));
    let popup_x = (area.width.saturating_sub(popup_width)) / 2;
    let popup_y = (area.height.saturating_sub(popup_height)) / 2;
    let popup_area = Rect::new(popup_x, popup_y, popup_width, popup_height);

    frame.render_widget(Clear, popup_area);

    let help_text = vec![
        Line::from(vec![Span::styled(
            app.strings.help_title,
            Style::default().add_modifier(Modifier::BOLD),
        )]),
        Line::from(""),
        Line::from("  a           New employee"),
        Line::from("  /           Search (debounced)"),
        Line::from("  Esc         Clear search"),
        Line::from(""),
        Line::from("  h/l, ←/→    Move sort cursor"),
        Line::from("  s, Enter    Sort column (asc/desc/off)"),
        Line::from(""),
        Line::from("  n/p         Next/previous page"),
        Line::from("  g/G         First/last page"),
        Line::from("  z           Cycle rows per page"),
        Line::from(""),
        Line::from("  ?           Toggle this help"),
        Line::from("  q, Ctrl+C   Quit"),
        Line::from(""),
        Line::from(vec![Span::styled(
            app.strings.press_any_key,
            Style::default().add_modifier(Modifier::DIM),
        )]),
    ];

    let block = Block::default()
        .title(format!(" {} ", app.strings.help_title))
        .borders(Borders::ALL)
        .border_style(Style::default().add_modifier(Modifier::BOLD));

    frame.render_widget(Paragraph::new(help_text).block(block), popup_area);
}
