//! Data models for Roster
//!
//! Defines the core data structures: Employee, UsState, and Department.
//! Field names serialize in camelCase; that is the wire shape of the
//! persisted envelope.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One employee record
///
/// Dates are committed as pre-formatted `MM/DD/YYYY` text; the round trip
/// through persistence is text-in, text-out.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    /// Unique identifier, assigned at creation, never reassigned
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: String,
    pub start_date: String,
    pub street: String,
    pub city: String,
    pub state: UsState,
    pub zip_code: String,
    pub department: Department,
}

/// A US state or territory, held as its two-letter region code
///
/// Construction is validated against a fixed table, so a held value is
/// always a known code.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(try_from = "String", into = "String")]
pub struct UsState(String);

/// Region codes and display names, including territories, in pick-list order
pub const US_STATES: &[(&str, &str)] = &[
    ("AL", "Alabama"),
    ("AK", "Alaska"),
    ("AS", "American Samoa"),
    ("AZ", "Arizona"),
    ("AR", "Arkansas"),
    ("CA", "California"),
    ("CO", "Colorado"),
    ("CT", "Connecticut"),
    ("DE", "Delaware"),
    ("DC", "District Of Columbia"),
    ("FM", "Federated States Of Micronesia"),
    ("FL", "Florida"),
    ("GA", "Georgia"),
    ("GU", "Guam"),
    ("HI", "Hawaii"),
    ("ID", "Idaho"),
    ("IL", "Illinois"),
    ("IN", "Indiana"),
    ("IA", "Iowa"),
    ("KS", "Kansas"),
    ("KY", "Kentucky"),
    ("LA", "Louisiana"),
    ("ME", "Maine"),
    ("MH", "Marshall Islands"),
    ("MD", "Maryland"),
    ("MA", "Massachusetts"),
    ("MI", "Michigan"),
    ("MN", "Minnesota"),
    ("MS", "Mississippi"),
    ("MO", "Missouri"),
    ("MT", "Montana"),
    ("NE", "Nebraska"),
    ("NV", "Nevada"),
    ("NH", "New Hampshire"),
    ("NJ", "New Jersey"),
    ("NM", "New Mexico"),
    ("NY", "New York"),
    ("NC", "North Carolina"),
    ("ND", "North Dakota"),
    ("MP", "Northern Mariana Islands"),
    ("OH", "Ohio"),
    ("OK", "Oklahoma"),
    ("OR", "Oregon"),
    ("PW", "Palau"),
    ("PA", "Pennsylvania"),
    ("PR", "Puerto Rico"),
    ("RI", "Rhode Island"),
    ("SC", "South Carolina"),
    ("SD", "South Dakota"),
    ("TN", "Tennessee"),
    ("TX", "Texas"),
    ("UT", "Utah"),
    ("VT", "Vermont"),
    ("VI", "Virgin Islands"),
    ("VA", "Virginia"),
    ("WA", "Washington"),
    ("WV", "West Virginia"),
    ("WI", "Wisconsin"),
    ("WY", "Wyoming"),
];

impl UsState {
    /// Parse from a region code or full name, case-insensitive
    pub fn parse(input: &str) -> Option<Self> {
        let trimmed = input.trim();
        US_STATES
            .iter()
            .find(|(code, name)| {
                code.eq_ignore_ascii_case(trimmed) || name.eq_ignore_ascii_case(trimmed)
            })
            .map(|(code, _)| Self((*code).to_string()))
    }

    /// The two-letter region code
    pub fn code(&self) -> &str {
        &self.0
    }

    /// The full display name
    pub fn name(&self) -> &str {
        US_STATES
            .iter()
            .find(|(code, _)| *code == self.0)
            .map(|(_, name)| *name)
            .unwrap_or(&self.0)
    }
}

impl std::fmt::Display for UsState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for UsState {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        UsState::parse(&value).ok_or_else(|| format!("unknown state code: {}", value))
    }
}

impl From<UsState> for String {
    fn from(state: UsState) -> Self {
        state.0
    }
}

/// Department an employee belongs to
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Department {
    Sales,
    Marketing,
    Engineering,
    #[serde(rename = "Human Resources")]
    HumanResources,
    Legal,
}

impl Department {
    /// All departments, in pick-list order
    pub const ALL: [Department; 5] = [
        Department::Sales,
        Department::Marketing,
        Department::Engineering,
        Department::HumanResources,
        Department::Legal,
    ];

    /// Display name, as shown in the table and stored in the envelope
    pub fn name(&self) -> &'static str {
        match self {
            Department::Sales => "Sales",
            Department::Marketing => "Marketing",
            Department::Engineering => "Engineering",
            Department::HumanResources => "Human Resources",
            Department::Legal => "Legal",
        }
    }

    /// Parse from a display name, case-insensitive
    pub fn parse(input: &str) -> Option<Self> {
        let trimmed = input.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|d| d.name().eq_ignore_ascii_case(trimmed))
    }
}

impl std::fmt::Display for Department {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Demo records seeded on first run when `seed_demo_data` is enabled
pub fn sample_employees() -> Vec<Employee> {
    vec![
        Employee {
            id: Uuid::parse_str("d8e7f8a0-9b1c-4d5e-8f9a-0b1c2d3e4f5a").unwrap(),
            first_name: "Howard".to_string(),
            last_name: "Stark".to_string(),
            date_of_birth: "05/29/1970".to_string(),
            start_date: "10/25/2008".to_string(),
            street: "10880 Malibu Point".to_string(),
            city: "Malibu".to_string(),
            state: UsState::parse("CA").unwrap(),
            zip_code: "90265".to_string(),
            department: Department::Engineering,
        },
        Employee {
            id: Uuid::parse_str("a1b2c3d4-e5f6-7890-1234-567890abcdef").unwrap(),
            first_name: "Natasha".to_string(),
            last_name: "Romanoff".to_string(),
            date_of_birth: "11/22/1984".to_string(),
            start_date: "04/20/2010".to_string(),
            street: "1 Avengers Tower".to_string(),
            city: "New York".to_string(),
            state: UsState::parse("NY").unwrap(),
            zip_code: "10001".to_string(),
            department: Department::Legal,
        },
        Employee {
            id: Uuid::parse_str("c9d0e1f2-3a4b-5c6d-7e8f-9a0b1c2d3e4f").unwrap(),
            first_name: "Steve".to_string(),
            last_name: "Rogers".to_string(),
            date_of_birth: "07/04/1918".to_string(),
            start_date: "07/19/2011".to_string(),
            street: "569 Leaman Place".to_string(),
            city: "Brooklyn".to_string(),
            state: UsState::parse("NY").unwrap(),
            zip_code: "11201".to_string(),
            department: Department::Sales,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_parse_by_code() {
        let state = UsState::parse("ny").unwrap();
        assert_eq!(state.code(), "NY");
        assert_eq!(state.name(), "New York");
    }

    #[test]
    fn test_state_parse_by_name() {
        let state = UsState::parse("california").unwrap();
        assert_eq!(state.code(), "CA");
    }

    #[test]
    fn test_state_parse_unknown() {
        assert!(UsState::parse("ZZ").is_none());
        assert!(UsState::parse("").is_none());
    }

    #[test]
    fn test_state_serializes_as_code() {
        let state = UsState::parse("TX").unwrap();
        let json = serde_json::to_string(&state).unwrap();
        assert_eq!(json, "\"TX\"");

        let parsed: UsState = serde_json::from_str("\"TX\"").unwrap();
        assert_eq!(parsed, state);
    }

    #[test]
    fn test_state_deserialize_rejects_unknown() {
        let result: Result<UsState, _> = serde_json::from_str("\"XX\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_department_parse() {
        assert_eq!(Department::parse("Sales"), Some(Department::Sales));
        assert_eq!(
            Department::parse("human resources"),
            Some(Department::HumanResources)
        );
        assert_eq!(Department::parse("Accounting"), None);
    }

    #[test]
    fn test_department_serializes_as_display_name() {
        let json = serde_json::to_string(&Department::HumanResources).unwrap();
        assert_eq!(json, "\"Human Resources\"");

        let parsed: Department = serde_json::from_str("\"Human Resources\"").unwrap();
        assert_eq!(parsed, Department::HumanResources);
    }

    #[test]
    fn test_employee_serializes_camel_case() {
        let employee = sample_employees().remove(0);
        let json = serde_json::to_value(&employee).unwrap();

        assert_eq!(json["firstName"], "Howard");
        assert_eq!(json["dateOfBirth"], "05/29/1970");
        assert_eq!(json["zipCode"], "90265");
        assert_eq!(json["state"], "CA");
        assert_eq!(json["department"], "Engineering");
    }

    #[test]
    fn test_employee_round_trip() {
        for employee in sample_employees() {
            let json = serde_json::to_string(&employee).unwrap();
            let parsed: Employee = serde_json::from_str(&json).unwrap();
            assert_eq!(parsed, employee);
        }
    }

    #[test]
    fn test_sample_employees_have_unique_ids() {
        let samples = sample_employees();
        assert_eq!(samples.len(), 3);
        assert_ne!(samples[0].id, samples[1].id);
        assert_ne!(samples[1].id, samples[2].id);
    }
}
