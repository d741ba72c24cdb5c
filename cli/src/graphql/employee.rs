use async_graphql::{Enum, InputObject, SimpleObject};
use platform_api::{ApiError, ApiResult};
use products_hr::{Employee, EmployeeDraft, EmployeeField, FieldKind};

#[derive(Clone, Debug, SimpleObject)]
#[graphql(name = "Employee")]
pub struct EmployeeNode {
    pub id: u32,
    pub name: String,
    pub position: String,
    pub department: String,
    pub age: u32,
    pub salary: f64,
    pub experience: u32,
}

impl From<Employee> for EmployeeNode {
    fn from(employee: Employee) -> Self {
        Self {
            id: employee.id,
            name: employee.name,
            position: employee.position,
            department: employee.department,
            age: employee.age,
            salary: employee.salary,
            experience: employee.experience,
        }
    }
}

#[derive(Clone, Debug, InputObject)]
pub struct EmployeeInput {
    /// Accepted so an edited record can be sent back whole; never applied.
    pub id: Option<u32>,
    pub name: String,
    pub position: String,
    pub department: String,
    pub age: u32,
    pub salary: f64,
    pub experience: u32,
}

impl EmployeeInput {
    pub fn into_draft(self) -> ApiResult<EmployeeDraft> {
        if !self.salary.is_finite() {
            return Err(ApiError::invalid_input("Salary must be a finite number"));
        }
        let draft = EmployeeDraft {
            name: self.name,
            position: self.position,
            department: self.department,
            age: self.age,
            salary: self.salary,
            experience: self.experience,
        };
        draft.validate().map_err(ApiError::invalid_input)?;
        Ok(draft)
    }
}

#[derive(Enum, Copy, Clone, Debug, Eq, PartialEq)]
#[graphql(name = "FieldKind")]
pub enum FieldKindValue {
    Text,
    Integer,
    Number,
}

impl From<FieldKind> for FieldKindValue {
    fn from(kind: FieldKind) -> Self {
        match kind {
            FieldKind::Text => FieldKindValue::Text,
            FieldKind::Integer => FieldKindValue::Integer,
            FieldKind::Number => FieldKindValue::Number,
        }
    }
}

#[derive(Clone, Debug, SimpleObject)]
#[graphql(name = "EmployeeField")]
pub struct FieldNode {
    pub key: String,
    pub label: String,
    pub kind: FieldKindValue,
}

impl From<EmployeeField> for FieldNode {
    fn from(field: EmployeeField) -> Self {
        Self {
            key: field.key().to_string(),
            label: field.label().to_string(),
            kind: field.kind().into(),
        }
    }
}
