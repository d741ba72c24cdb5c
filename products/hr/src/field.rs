//! Static catalogue of the editable employee fields.
//!
//! Forms enumerate [`EmployeeField::EDITABLE`] instead of walking a record's
//! keys at runtime, and move values in and out of an [`EmployeeDraft`] through
//! the typed accessors here.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::employee::EmployeeDraft;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EmployeeField {
    Name,
    Position,
    Department,
    Age,
    Salary,
    Experience,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Text,
    Integer,
    Number,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FieldError {
    #[error("{field} is required")]
    Missing { field: EmployeeField },
    #[error("{field} must be a {kind}, got {value:?}")]
    Invalid {
        field: EmployeeField,
        kind: FieldKind,
        value: String,
    },
}

impl EmployeeField {
    /// Display order used by forms and tables.
    pub const EDITABLE: [EmployeeField; 6] = [
        EmployeeField::Name,
        EmployeeField::Position,
        EmployeeField::Department,
        EmployeeField::Age,
        EmployeeField::Salary,
        EmployeeField::Experience,
    ];

    pub fn key(self) -> &'static str {
        match self {
            EmployeeField::Name => "name",
            EmployeeField::Position => "position",
            EmployeeField::Department => "department",
            EmployeeField::Age => "age",
            EmployeeField::Salary => "salary",
            EmployeeField::Experience => "experience",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            EmployeeField::Name => "Name",
            EmployeeField::Position => "Position",
            EmployeeField::Department => "Department",
            EmployeeField::Age => "Age",
            EmployeeField::Salary => "Salary",
            EmployeeField::Experience => "Experience",
        }
    }

    pub fn kind(self) -> FieldKind {
        match self {
            EmployeeField::Name | EmployeeField::Position | EmployeeField::Department => {
                FieldKind::Text
            }
            EmployeeField::Age | EmployeeField::Experience => FieldKind::Integer,
            EmployeeField::Salary => FieldKind::Number,
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::EDITABLE
            .into_iter()
            .find(|field| field.key().eq_ignore_ascii_case(key.trim()))
    }

    /// Borrowed value of a text field; `None` for numeric fields.
    pub fn text(self, draft: &EmployeeDraft) -> Option<&str> {
        match self {
            EmployeeField::Name => Some(&draft.name),
            EmployeeField::Position => Some(&draft.position),
            EmployeeField::Department => Some(&draft.department),
            EmployeeField::Age | EmployeeField::Salary | EmployeeField::Experience => None,
        }
    }

    /// Renders the field the way an input box would show it.
    pub fn read(self, draft: &EmployeeDraft) -> String {
        match self {
            EmployeeField::Age => draft.age.to_string(),
            EmployeeField::Salary => draft.salary.to_string(),
            EmployeeField::Experience => draft.experience.to_string(),
            text => text.text(draft).unwrap_or_default().to_string(),
        }
    }

    /// Parses raw form input into the draft. Text is stored verbatim; numbers
    /// are trimmed first and a blank numeric input counts as missing.
    pub fn write(self, draft: &mut EmployeeDraft, raw: &str) -> Result<(), FieldError> {
        match self {
            EmployeeField::Name => draft.name = raw.to_string(),
            EmployeeField::Position => draft.position = raw.to_string(),
            EmployeeField::Department => draft.department = raw.to_string(),
            EmployeeField::Age => draft.age = self.parse(raw)?,
            EmployeeField::Salary => draft.salary = self.parse_number(raw)?,
            EmployeeField::Experience => draft.experience = self.parse(raw)?,
        }
        Ok(())
    }

    fn parse(self, raw: &str) -> Result<u32, FieldError> {
        let trimmed = self.present(raw)?;
        trimmed.parse().map_err(|_| self.invalid(raw))
    }

    fn parse_number(self, raw: &str) -> Result<f64, FieldError> {
        let trimmed = self.present(raw)?;
        match trimmed.parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(value),
            _ => Err(self.invalid(raw)),
        }
    }

    fn present(self, raw: &str) -> Result<&str, FieldError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(FieldError::Missing { field: self });
        }
        Ok(trimmed)
    }

    fn invalid(self, raw: &str) -> FieldError {
        FieldError::Invalid {
            field: self,
            kind: self.kind(),
            value: raw.to_string(),
        }
    }
}

impl fmt::Display for EmployeeField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FieldKind::Text => "text",
            FieldKind::Integer => "whole number",
            FieldKind::Number => "number",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_capitalise_keys() {
        for field in EmployeeField::EDITABLE {
            let key = field.key();
            let mut expected = key[..1].to_uppercase();
            expected.push_str(&key[1..]);
            assert_eq!(field.label(), expected);
        }
    }

    #[test]
    fn from_key_is_case_insensitive() {
        assert_eq!(EmployeeField::from_key("Salary"), Some(EmployeeField::Salary));
        assert_eq!(EmployeeField::from_key(" age "), Some(EmployeeField::Age));
        assert_eq!(EmployeeField::from_key("id"), None);
    }

    #[test]
    fn write_then_read_each_field() {
        let mut draft = EmployeeDraft::default();
        let inputs = [
            (EmployeeField::Name, "Grace Hopper"),
            (EmployeeField::Position, "Rear Admiral"),
            (EmployeeField::Department, "Navy"),
            (EmployeeField::Age, "45"),
            (EmployeeField::Salary, "120000.5"),
            (EmployeeField::Experience, "20"),
        ];
        for (field, raw) in inputs {
            field.write(&mut draft, raw).unwrap();
        }
        for (field, raw) in inputs {
            assert_eq!(field.read(&draft), raw);
        }
        assert_eq!(draft.age, 45);
        assert_eq!(draft.salary, 120_000.5);
    }

    #[test]
    fn numeric_fields_reject_garbage() {
        let mut draft = EmployeeDraft::default();
        let err = EmployeeField::Age.write(&mut draft, "thirty").unwrap_err();
        assert_eq!(
            err,
            FieldError::Invalid {
                field: EmployeeField::Age,
                kind: FieldKind::Integer,
                value: "thirty".into(),
            }
        );
        assert!(EmployeeField::Salary.write(&mut draft, "NaN").is_err());
        assert!(EmployeeField::Experience.write(&mut draft, "-1").is_err());
        assert_eq!(draft, EmployeeDraft::default());
    }

    #[test]
    fn blank_numeric_input_is_missing() {
        let mut draft = EmployeeDraft::default();
        let err = EmployeeField::Salary.write(&mut draft, "   ").unwrap_err();
        assert_eq!(err.to_string(), "Salary is required");
    }

    #[test]
    fn text_accessor_skips_numbers() {
        let draft = EmployeeDraft::default();
        assert!(EmployeeField::Age.text(&draft).is_none());
        assert_eq!(EmployeeField::Name.text(&draft), Some(""));
    }
}
