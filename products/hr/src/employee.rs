use serde::{Deserialize, Serialize};

use crate::field::{EmployeeField, FieldError};

pub type EmployeeId = u32;

/// One row of the roster.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Employee {
    pub id: EmployeeId,
    pub name: String,
    pub position: String,
    pub department: String,
    pub age: u32,
    pub salary: f64,
    pub experience: u32,
}

/// Every employee attribute except the id.
///
/// Insert and update both take a draft, so the id of an existing record can
/// never be overwritten through them.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct EmployeeDraft {
    pub name: String,
    pub position: String,
    pub department: String,
    pub age: u32,
    pub salary: f64,
    pub experience: u32,
}

impl Employee {
    pub fn from_draft(id: EmployeeId, draft: EmployeeDraft) -> Self {
        let EmployeeDraft {
            name,
            position,
            department,
            age,
            salary,
            experience,
        } = draft;
        Self {
            id,
            name,
            position,
            department,
            age,
            salary,
            experience,
        }
    }

    /// Detached copy of the editable fields.
    pub fn draft(&self) -> EmployeeDraft {
        EmployeeDraft {
            name: self.name.clone(),
            position: self.position.clone(),
            department: self.department.clone(),
            age: self.age,
            salary: self.salary,
            experience: self.experience,
        }
    }

    /// Replaces every field except the id.
    pub(crate) fn apply(&mut self, draft: EmployeeDraft) {
        *self = Self::from_draft(self.id, draft);
    }
}

impl EmployeeDraft {
    /// Presence check over the text fields, reporting the first blank one.
    pub fn validate(&self) -> Result<(), FieldError> {
        for field in EmployeeField::EDITABLE {
            if let Some(value) = field.text(self) {
                if value.trim().is_empty() {
                    return Err(FieldError::Missing { field });
                }
            }
        }
        Ok(())
    }
}
