//! Output formatting for CLI
//!
//! Provides consistent output formatting across all commands:
//! - Human-readable default output
//! - JSON output (--json flag)
//! - Quiet mode for scripting (--quiet flag)

use roster_core::{Column, Employee, Page};

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable output (default)
    Human,
    /// JSON output
    Json,
    /// Quiet mode - minimal output
    Quiet,
}

impl OutputFormat {
    /// Create format from CLI flags
    pub fn from_flags(json: bool, quiet: bool) -> Self {
        if quiet {
            OutputFormat::Quiet
        } else if json {
            OutputFormat::Json
        } else {
            OutputFormat::Human
        }
    }
}

/// Output helper for consistent formatting
pub struct Output {
    /// The output format
    pub format: OutputFormat,
}

impl Output {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Check if output is in quiet mode
    pub fn is_quiet(&self) -> bool {
        matches!(self.format, OutputFormat::Quiet)
    }

    /// Check if output is in JSON mode
    pub fn is_json(&self) -> bool {
        matches!(self.format, OutputFormat::Json)
    }

    /// Print a success message (human mode only)
    pub fn success(&self, message: &str) {
        if matches!(self.format, OutputFormat::Human) {
            println!("✓ {}", message);
        }
    }

    /// Print a single employee record
    pub fn print_employee(&self, employee: &Employee) {
        match self.format {
            OutputFormat::Human => {
                println!("ID:            {}", employee.id);
                println!("First Name:    {}", employee.first_name);
                println!("Last Name:     {}", employee.last_name);
                println!("Date of Birth: {}", employee.date_of_birth);
                println!("Start Date:    {}", employee.start_date);
                println!("Street:        {}", employee.street);
                println!("City:          {}", employee.city);
                println!("State:         {}", employee.state.code());
                println!("Zip Code:      {}", employee.zip_code);
                println!("Department:    {}", employee.department);
            }
            OutputFormat::Json => match serde_json::to_string_pretty(employee) {
                Ok(json) => println!("{}", json),
                Err(e) => eprintln!("Failed to encode employee: {}", e),
            },
            OutputFormat::Quiet => {
                println!("{}", employee.id);
            }
        }
    }

    /// Print a projected page of the employee table
    pub fn print_page(&self, page: &Page) {
        match self.format {
            OutputFormat::Human => {
                if page.rows.is_empty() {
                    println!("No employees found.");
                    return;
                }

                for employee in &page.rows {
                    println!(
                        "{} | {:12} | {:12} | {:10} | {:15} | {}, {} {}",
                        &employee.id.to_string()[..8],
                        truncate(&employee.first_name, 12),
                        truncate(&employee.last_name, 12),
                        employee.start_date,
                        truncate(employee.department.name(), 15),
                        truncate(&employee.city, 18),
                        employee.state.code(),
                        employee.zip_code,
                    );
                }
                println!(
                    "\nShowing {} of {} results | Page {} of {}",
                    page.rows.len(),
                    page.matched,
                    page.page_index + 1,
                    page.page_count,
                );
            }
            OutputFormat::Json => {
                let value = serde_json::json!({
                    "employees": page.rows,
                    "pageIndex": page.page_index,
                    "pageCount": page.page_count,
                    "matched": page.matched,
                    "total": page.total,
                });
                match serde_json::to_string_pretty(&value) {
                    Ok(json) => println!("{}", json),
                    Err(e) => eprintln!("Failed to encode page: {}", e),
                }
            }
            OutputFormat::Quiet => {
                for employee in &page.rows {
                    println!("{}", employee.id);
                }
            }
        }
    }

    /// Print the column names accepted by `--sort`
    pub fn print_sort_columns(&self) {
        if matches!(self.format, OutputFormat::Human) {
            let names: Vec<&str> = Column::ALL.iter().map(|c| column_key(*c)).collect();
            println!("Sortable columns: {}", names.join(", "));
        }
    }
}

/// CLI key for a column (used by `--sort`)
pub fn column_key(column: Column) -> &'static str {
    match column {
        Column::FirstName => "first-name",
        Column::LastName => "last-name",
        Column::StartDate => "start-date",
        Column::Department => "department",
        Column::DateOfBirth => "date-of-birth",
        Column::Street => "street",
        Column::City => "city",
        Column::State => "state",
        Column::ZipCode => "zip-code",
    }
}

/// Parse a `--sort` key back into a column
pub fn parse_column(key: &str) -> Option<Column> {
    Column::ALL
        .iter()
        .copied()
        .find(|c| column_key(*c).eq_ignore_ascii_case(key.trim()))
}

/// Truncate a string to a maximum length, adding an ellipsis
fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max.saturating_sub(1)).collect();
        format!("{}…", truncated)
    }
}
