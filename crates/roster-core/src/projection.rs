//! Table view projection
//!
//! Derives the visible window over the store's records for the current
//! filter text, sort column/direction, and page. The projection always
//! recomputes from the full record list; it never filters a previously
//! filtered subset.
//!
//! Sorting compares the column's stored text with a plain lexicographic
//! comparison. Dates and zip codes sort as text, not as parsed values;
//! the listing surface depends on that.

use crate::models::Employee;

/// Available page sizes, in the order the page-size control cycles them
pub const PAGE_SIZES: [usize; 4] = [10, 25, 50, 100];

/// A sortable/displayable table column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    FirstName,
    LastName,
    StartDate,
    Department,
    DateOfBirth,
    Street,
    City,
    State,
    ZipCode,
}

impl Column {
    /// All columns, in display order
    pub const ALL: [Column; 9] = [
        Column::FirstName,
        Column::LastName,
        Column::StartDate,
        Column::Department,
        Column::DateOfBirth,
        Column::Street,
        Column::City,
        Column::State,
        Column::ZipCode,
    ];

    /// The displayed text of this column for a record
    pub fn value<'a>(&self, employee: &'a Employee) -> &'a str {
        match self {
            Column::FirstName => &employee.first_name,
            Column::LastName => &employee.last_name,
            Column::StartDate => &employee.start_date,
            Column::Department => employee.department.name(),
            Column::DateOfBirth => &employee.date_of_birth,
            Column::Street => &employee.street,
            Column::City => &employee.city,
            Column::State => employee.state.code(),
            Column::ZipCode => &employee.zip_code,
        }
    }
}

/// Sort direction for the active column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// The visible window produced by a projection pass
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    /// Records on the current page, in display order
    pub rows: Vec<Employee>,
    /// Page index after clamping
    pub page_index: usize,
    /// Total pages for the current filter (0 when nothing matches)
    pub page_count: usize,
    /// Records matching the filter
    pub matched: usize,
    /// Records in the store, unfiltered
    pub total: usize,
}

/// User-chosen view state: filter text, sort, and pagination
#[derive(Debug, Clone)]
pub struct TableView {
    filter: String,
    sort: Option<(Column, SortDirection)>,
    page_size: usize,
    page_index: usize,
}

impl Default for TableView {
    fn default() -> Self {
        Self::new()
    }
}

impl TableView {
    pub fn new() -> Self {
        Self {
            filter: String::new(),
            sort: None,
            page_size: PAGE_SIZES[0],
            page_index: 0,
        }
    }

    pub fn filter(&self) -> &str {
        &self.filter
    }

    pub fn sort(&self) -> Option<(Column, SortDirection)> {
        self.sort
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn page_index(&self) -> usize {
        self.page_index
    }

    /// Replace the filter text; resets to the first page
    pub fn set_filter(&mut self, filter: impl Into<String>) {
        self.filter = filter.into();
        self.page_index = 0;
    }

    /// Set an explicit sort; resets to the first page
    pub fn set_sort(&mut self, sort: Option<(Column, SortDirection)>) {
        self.sort = sort;
        self.page_index = 0;
    }

    /// Cycle a column through ascending, descending, unsorted
    ///
    /// Activating a different column starts it ascending. Resets to the
    /// first page either way.
    pub fn toggle_sort(&mut self, column: Column) {
        self.sort = match self.sort {
            Some((current, SortDirection::Ascending)) if current == column => {
                Some((column, SortDirection::Descending))
            }
            Some((current, SortDirection::Descending)) if current == column => None,
            _ => Some((column, SortDirection::Ascending)),
        };
        self.page_index = 0;
    }

    /// Change the page size; the current page index is clamped on the next
    /// projection pass rather than reset
    pub fn set_page_size(&mut self, page_size: usize) {
        if page_size > 0 {
            self.page_size = page_size;
        }
    }

    /// Cycle to the next available page size
    pub fn cycle_page_size(&mut self) {
        let next = PAGE_SIZES
            .iter()
            .position(|&s| s == self.page_size)
            .map(|i| PAGE_SIZES[(i + 1) % PAGE_SIZES.len()])
            .unwrap_or(PAGE_SIZES[0]);
        self.page_size = next;
    }

    pub fn next_page(&mut self) {
        // Clamped against the match count on the next projection pass
        self.page_index = self.page_index.saturating_add(1);
    }

    pub fn prev_page(&mut self) {
        self.page_index = self.page_index.saturating_sub(1);
    }

    pub fn first_page(&mut self) {
        self.page_index = 0;
    }

    pub fn last_page(&mut self) {
        // Projection clamps this down to the real last page
        self.page_index = usize::MAX;
    }

    /// Compute the visible window over the given records
    ///
    /// Filters from the full list, sorts (stable), clamps the stored page
    /// index into range, and slices out the current page.
    pub fn project(&mut self, records: &[Employee]) -> Page {
        let query = self.filter.trim().to_lowercase();

        let mut matches: Vec<&Employee> = records
            .iter()
            .filter(|e| query.is_empty() || matches_query(e, &query))
            .collect();

        if let Some((column, direction)) = self.sort {
            matches.sort_by(|a, b| {
                let ordering = column.value(a).cmp(column.value(b));
                match direction {
                    SortDirection::Ascending => ordering,
                    SortDirection::Descending => ordering.reverse(),
                }
            });
        }

        let matched = matches.len();
        let page_count = page_count(matched, self.page_size);

        self.page_index = self.page_index.min(page_count.saturating_sub(1));

        let start = self.page_index * self.page_size;
        let end = (start + self.page_size).min(matched);
        let rows = matches[start..end].iter().map(|e| (*e).clone()).collect();

        Page {
            rows,
            page_index: self.page_index,
            page_count,
            matched,
            total: records.len(),
        }
    }
}

/// Number of pages for a match count: `ceil(matched / page_size)`, 0 when empty
pub fn page_count(matched: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    matched.div_ceil(page_size)
}

/// Case-insensitive substring match across every displayed field value
fn matches_query(employee: &Employee, query: &str) -> bool {
    Column::ALL
        .iter()
        .any(|col| col.value(employee).to_lowercase().contains(query))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{sample_employees, Department, UsState};
    use uuid::Uuid;

    fn employee(first: &str, last: &str, state: &str) -> Employee {
        Employee {
            id: Uuid::new_v4(),
            first_name: first.to_string(),
            last_name: last.to_string(),
            date_of_birth: "01/01/1990".to_string(),
            start_date: "01/01/2020".to_string(),
            street: "1 Main St".to_string(),
            city: "Springfield".to_string(),
            state: UsState::parse(state).unwrap(),
            zip_code: "12345".to_string(),
            department: Department::Sales,
        }
    }

    #[test]
    fn test_empty_filter_matches_all() {
        let records = sample_employees();
        let page = TableView::new().project(&records);
        assert_eq!(page.matched, 3);
        assert_eq!(page.total, 3);
        assert_eq!(page.rows.len(), 3);
    }

    #[test]
    fn test_filter_is_case_insensitive_across_fields() {
        let records = sample_employees();
        let mut view = TableView::new();

        // "ny" matches the two NY records regardless of typed case
        view.set_filter("ny");
        assert_eq!(view.project(&records).matched, 2);

        view.set_filter("NY");
        assert_eq!(view.project(&records).matched, 2);

        // Matches inside other fields too
        view.set_filter("malibu");
        assert_eq!(view.project(&records).matched, 1);
    }

    #[test]
    fn test_filter_recomputes_from_full_list() {
        let records = sample_employees();
        let mut view = TableView::new();

        view.set_filter("romanoff");
        assert_eq!(view.project(&records).matched, 1);

        // Widening the query again sees the whole store, not the narrowed set
        view.set_filter("");
        assert_eq!(view.project(&records).matched, 3);
    }

    #[test]
    fn test_filter_is_idempotent() {
        let records = sample_employees();
        let mut view = TableView::new();
        view.set_filter("ny");

        let first = view.project(&records);
        let second = view.project(&records);
        assert_eq!(first, second);
    }

    #[test]
    fn test_sort_by_last_name_is_lexicographic() {
        let records = sample_employees();
        let mut view = TableView::new();
        view.set_sort(Some((Column::LastName, SortDirection::Ascending)));

        let names: Vec<String> = view
            .project(&records)
            .rows
            .iter()
            .map(|e| e.last_name.clone())
            .collect();
        assert_eq!(names, vec!["Romanoff", "Rogers", "Stark"]);
    }

    #[test]
    fn test_sort_descending_reverses() {
        let records = sample_employees();
        let mut view = TableView::new();
        view.set_sort(Some((Column::LastName, SortDirection::Descending)));

        let names: Vec<String> = view
            .project(&records)
            .rows
            .iter()
            .map(|e| e.last_name.clone())
            .collect();
        assert_eq!(names, vec!["Stark", "Rogers", "Romanoff"]);
    }

    #[test]
    fn test_no_sort_restores_insertion_order() {
        let records = sample_employees();
        let mut view = TableView::new();

        view.toggle_sort(Column::LastName); // ascending
        view.toggle_sort(Column::LastName); // descending
        view.toggle_sort(Column::LastName); // back to none

        let names: Vec<String> = view
            .project(&records)
            .rows
            .iter()
            .map(|e| e.last_name.clone())
            .collect();
        assert_eq!(names, vec!["Stark", "Romanoff", "Rogers"]);
    }

    #[test]
    fn test_toggle_different_column_starts_ascending() {
        let mut view = TableView::new();
        view.toggle_sort(Column::LastName);
        view.toggle_sort(Column::City);
        assert_eq!(view.sort(), Some((Column::City, SortDirection::Ascending)));
    }

    #[test]
    fn test_dates_sort_as_text() {
        let mut a = employee("A", "A", "CA");
        a.start_date = "02/01/2001".to_string();
        let mut b = employee("B", "B", "CA");
        b.start_date = "10/30/1999".to_string();
        let records = vec![a, b];

        let mut view = TableView::new();
        view.set_sort(Some((Column::StartDate, SortDirection::Ascending)));

        // "02/..." < "10/..." textually even though 1999 is the earlier year
        let starts: Vec<String> = view
            .project(&records)
            .rows
            .iter()
            .map(|e| e.start_date.clone())
            .collect();
        assert_eq!(starts, vec!["02/01/2001", "10/30/1999"]);
    }

    #[test]
    fn test_sort_is_stable_on_equal_keys() {
        let records = vec![
            employee("First", "Same", "CA"),
            employee("Second", "Same", "CA"),
            employee("Third", "Same", "CA"),
        ];
        let mut view = TableView::new();
        view.set_sort(Some((Column::LastName, SortDirection::Ascending)));

        let firsts: Vec<String> = view
            .project(&records)
            .rows
            .iter()
            .map(|e| e.first_name.clone())
            .collect();
        assert_eq!(firsts, vec!["First", "Second", "Third"]);
    }

    #[test]
    fn test_page_count_is_ceiling() {
        assert_eq!(page_count(0, 10), 0);
        assert_eq!(page_count(1, 10), 1);
        assert_eq!(page_count(10, 10), 1);
        assert_eq!(page_count(11, 10), 2);
        assert_eq!(page_count(3, 10), 1);
    }

    #[test]
    fn test_pagination_slices_contiguously() {
        let records: Vec<Employee> = (0..25)
            .map(|i| employee(&format!("E{:02}", i), "Page", "CA"))
            .collect();
        let mut view = TableView::new();
        view.set_page_size(10);

        let page = view.project(&records);
        assert_eq!(page.rows.len(), 10);
        assert_eq!(page.rows[0].first_name, "E00");
        assert_eq!(page.page_count, 3);

        view.next_page();
        let page = view.project(&records);
        assert_eq!(page.rows[0].first_name, "E10");

        view.next_page();
        let page = view.project(&records);
        assert_eq!(page.rows.len(), 5);
        assert_eq!(page.page_index, 2);
    }

    #[test]
    fn test_next_page_is_noop_on_last_page() {
        let records = sample_employees();
        let mut view = TableView::new();

        // 3 records, page size 10: exactly one page
        let page = view.project(&records);
        assert_eq!(page.page_count, 1);

        view.next_page();
        let page = view.project(&records);
        assert_eq!(page.page_index, 0);
        assert_eq!(page.rows.len(), 3);
    }

    #[test]
    fn test_filter_change_resets_page() {
        let records: Vec<Employee> = (0..25)
            .map(|i| employee(&format!("E{:02}", i), "Page", "CA"))
            .collect();
        let mut view = TableView::new();
        view.next_page();
        assert_eq!(view.project(&records).page_index, 1);

        view.set_filter("e1");
        assert_eq!(view.page_index(), 0);
    }

    #[test]
    fn test_page_size_change_clamps_index() {
        let records: Vec<Employee> = (0..30)
            .map(|i| employee(&format!("E{:02}", i), "Page", "CA"))
            .collect();
        let mut view = TableView::new();
        view.set_page_size(10);
        view.last_page();
        assert_eq!(view.project(&records).page_index, 2);

        // 30 records at page size 50 fit on one page
        view.set_page_size(50);
        let page = view.project(&records);
        assert_eq!(page.page_index, 0);
        assert_eq!(page.rows.len(), 30);
    }

    #[test]
    fn test_cycle_page_size() {
        let mut view = TableView::new();
        assert_eq!(view.page_size(), 10);
        view.cycle_page_size();
        assert_eq!(view.page_size(), 25);
        view.cycle_page_size();
        view.cycle_page_size();
        assert_eq!(view.page_size(), 100);
        view.cycle_page_size();
        assert_eq!(view.page_size(), 10);
    }

    #[test]
    fn test_zero_matches_yields_empty_page() {
        let records = sample_employees();
        let mut view = TableView::new();
        view.set_filter("wakanda");

        let page = view.project(&records);
        assert_eq!(page.matched, 0);
        assert_eq!(page.page_count, 0);
        assert!(page.rows.is_empty());
        assert_eq!(page.total, 3);
    }
}
