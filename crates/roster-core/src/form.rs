//! Employee creation form
//!
//! Holds raw text input for every field and validates it into a committed
//! `Employee`. Validation failures stay at the form boundary; the store
//! only ever sees fully-formed records.

use chrono::NaiveDate;
use uuid::Uuid;

use crate::models::{Department, Employee, UsState};

/// Form fields, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    FirstName,
    LastName,
    DateOfBirth,
    StartDate,
    Street,
    City,
    State,
    ZipCode,
    Department,
}

impl Field {
    pub const ALL: [Field; 9] = [
        Field::FirstName,
        Field::LastName,
        Field::DateOfBirth,
        Field::StartDate,
        Field::Street,
        Field::City,
        Field::State,
        Field::ZipCode,
        Field::Department,
    ];

    fn required_message(&self) -> &'static str {
        match self {
            Field::FirstName => "First name is required",
            Field::LastName => "Last name is required",
            Field::DateOfBirth => "Date of birth is required",
            Field::StartDate => "Start date is required",
            Field::Street => "Street is required",
            Field::City => "City is required",
            Field::State => "State is required",
            Field::ZipCode => "Zip code is required",
            Field::Department => "Department is required",
        }
    }
}

/// Validation failures, one message per offending field
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: Vec<(Field, String)>,
}

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Message for a specific field, if it failed
    pub fn message(&self, field: Field) -> Option<&str> {
        self.errors
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, msg)| msg.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.errors.iter().map(|(f, msg)| (*f, msg.as_str()))
    }

    fn push(&mut self, field: Field, message: impl Into<String>) {
        self.errors.push((field, message.into()));
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let messages: Vec<&str> = self.errors.iter().map(|(_, m)| m.as_str()).collect();
        write!(f, "{}", messages.join("; "))
    }
}

/// Raw form input for one employee
#[derive(Debug, Clone, Default)]
pub struct EmployeeForm {
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

impl EmployeeForm {
    /// Get the raw text of a field
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::FirstName => &self.first_name,
            Field::LastName => &self.last_name,
            Field::DateOfBirth => &self.date_of_birth,
            Field::StartDate => &self.start_date,
            Field::Street => &self.street,
            Field::City => &self.city,
            Field::State => &self.state,
            Field::ZipCode => &self.zip_code,
            Field::Department => &self.department,
        }
    }

    /// Get mutable access to the raw text of a field
    pub fn value_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::FirstName => &mut self.first_name,
            Field::LastName => &mut self.last_name,
            Field::DateOfBirth => &mut self.date_of_birth,
            Field::StartDate => &mut self.start_date,
            Field::Street => &mut self.street,
            Field::City => &mut self.city,
            Field::State => &mut self.state,
            Field::ZipCode => &mut self.zip_code,
            Field::Department => &mut self.department,
        }
    }

    /// Validate the form, producing a committed `Employee` with a fresh id
    ///
    /// Every field is required. Dates must be valid `MM/DD/YYYY` calendar
    /// dates; state and department must come from their fixed enumerations.
    /// Committed dates are re-formatted zero-padded regardless of how they
    /// were typed.
    pub fn validate(&self) -> Result<Employee, ValidationErrors> {
        let mut errors = ValidationErrors::default();

        for field in Field::ALL {
            if self.value(field).trim().is_empty() {
                errors.push(field, field.required_message());
            }
        }

        let date_of_birth = self.validate_date(Field::DateOfBirth, &mut errors);
        let start_date = self.validate_date(Field::StartDate, &mut errors);

        let state = if !self.state.trim().is_empty() {
            let parsed = UsState::parse(&self.state);
            if parsed.is_none() {
                errors.push(Field::State, format!("Unknown state: {}", self.state.trim()));
            }
            parsed
        } else {
            None
        };

        let department = if !self.department.trim().is_empty() {
            let parsed = Department::parse(&self.department);
            if parsed.is_none() {
                errors.push(
                    Field::Department,
                    format!("Unknown department: {}", self.department.trim()),
                );
            }
            parsed
        } else {
            None
        };

        if !errors.is_empty() {
            return Err(errors);
        }

        // All fields validated above; the unwraps cannot fail past this point
        Ok(Employee {
            id: Uuid::new_v4(),
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            date_of_birth: date_of_birth.unwrap(),
            start_date: start_date.unwrap(),
            street: self.street.trim().to_string(),
            city: self.city.trim().to_string(),
            state: state.unwrap(),
            zip_code: self.zip_code.trim().to_string(),
            department: department.unwrap(),
        })
    }

    fn validate_date(&self, field: Field, errors: &mut ValidationErrors) -> Option<String> {
        let raw = self.value(field).trim();
        if raw.is_empty() {
            return None;
        }

        match NaiveDate::parse_from_str(raw, "%m/%d/%Y") {
            Ok(date) => Some(date.format("%m/%d/%Y").to_string()),
            Err(_) => {
                errors.push(field, format!("Invalid date (expected MM/DD/YYYY): {}", raw));
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> EmployeeForm {
        EmployeeForm {
            first_name: "Wanda".to_string(),
            last_name: "Maximoff".to_string(),
            date_of_birth: "02/10/1989".to_string(),
            start_date: "05/01/2015".to_string(),
            street: "2800 Westview Ln".to_string(),
            city: "Westview".to_string(),
            state: "NJ".to_string(),
            zip_code: "07901".to_string(),
            department: "Marketing".to_string(),
        }
    }

    #[test]
    fn test_valid_form_commits() {
        let employee = filled_form().validate().unwrap();
        assert_eq!(employee.first_name, "Wanda");
        assert_eq!(employee.state.code(), "NJ");
        assert_eq!(employee.department, Department::Marketing);
        assert_eq!(employee.date_of_birth, "02/10/1989");
    }

    #[test]
    fn test_each_submission_gets_fresh_id() {
        let form = filled_form();
        let a = form.validate().unwrap();
        let b = form.validate().unwrap();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_empty_form_reports_every_field() {
        let errors = EmployeeForm::default().validate().unwrap_err();
        assert_eq!(errors.len(), Field::ALL.len());
        assert_eq!(
            errors.message(Field::FirstName),
            Some("First name is required")
        );
        assert_eq!(errors.message(Field::ZipCode), Some("Zip code is required"));
    }

    #[test]
    fn test_blank_field_is_missing() {
        let mut form = filled_form();
        form.city = "   ".to_string();
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.message(Field::City), Some("City is required"));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_invalid_date_rejected() {
        let mut form = filled_form();
        form.start_date = "13/45/2020".to_string();
        let errors = form.validate().unwrap_err();
        assert!(errors
            .message(Field::StartDate)
            .unwrap()
            .contains("Invalid date"));
    }

    #[test]
    fn test_unpadded_date_normalized() {
        let mut form = filled_form();
        form.date_of_birth = "2/3/1989".to_string();
        let employee = form.validate().unwrap();
        assert_eq!(employee.date_of_birth, "02/03/1989");
    }

    #[test]
    fn test_state_accepts_full_name() {
        let mut form = filled_form();
        form.state = "new jersey".to_string();
        let employee = form.validate().unwrap();
        assert_eq!(employee.state.code(), "NJ");
    }

    #[test]
    fn test_unknown_state_rejected() {
        let mut form = filled_form();
        form.state = "Atlantis".to_string();
        let errors = form.validate().unwrap_err();
        assert!(errors.message(Field::State).unwrap().contains("Atlantis"));
    }

    #[test]
    fn test_unknown_department_rejected() {
        let mut form = filled_form();
        form.department = "Accounting".to_string();
        let errors = form.validate().unwrap_err();
        assert!(errors
            .message(Field::Department)
            .unwrap()
            .contains("Accounting"));
    }

    #[test]
    fn test_whitespace_trimmed_on_commit() {
        let mut form = filled_form();
        form.first_name = "  Wanda  ".to_string();
        let employee = form.validate().unwrap();
        assert_eq!(employee.first_name, "Wanda");
    }
}
