//! Employee command handlers

use anyhow::{bail, Result};

use roster_core::{EmployeeForm, EmployeeStore, SortDirection, TableView};

use crate::output::{parse_column, Output};

/// Raw field values collected from `roster add` flags
pub struct AddArgs {
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: String,
    pub start_date: String,
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub department: String,
}

/// Create a new employee record
///
/// Runs the same validation as the TUI form; a validation failure is
/// reported and nothing reaches the store.
pub fn add(store: &mut EmployeeStore, args: AddArgs, output: &Output) -> Result<()> {
    let form = EmployeeForm {
        first_name: args.first_name,
        last_name: args.last_name,
        date_of_birth: args.date_of_birth,
        start_date: args.start_date,
        street: args.street,
        city: args.city,
        state: args.state,
        zip_code: args.zip_code,
        department: args.department,
    };

    let employee = match form.validate() {
        Ok(employee) => employee,
        Err(errors) => {
            for (_, message) in errors.iter() {
                eprintln!("✗ {}", message);
            }
            bail!("Employee not created: {} validation error(s)", errors.len());
        }
    };

    store.append(employee.clone());

    output.success("Employee created");
    output.print_employee(&employee);

    Ok(())
}

/// List employees with the given view settings
pub fn list(
    store: &EmployeeStore,
    filter: Option<String>,
    sort: Option<String>,
    descending: bool,
    page: usize,
    page_size: usize,
    output: &Output,
) -> Result<()> {
    let mut view = TableView::new();

    if let Some(filter) = filter {
        view.set_filter(filter);
    }

    if let Some(key) = sort {
        let Some(column) = parse_column(&key) else {
            output.print_sort_columns();
            bail!("Unknown sort column: '{}'", key);
        };
        let direction = if descending {
            SortDirection::Descending
        } else {
            SortDirection::Ascending
        };
        view.set_sort(Some((column, direction)));
    }

    view.set_page_size(page_size);
    for _ in 0..page {
        view.next_page();
    }

    let projected = view.project(store.records());
    output.print_page(&projected);

    Ok(())
}
