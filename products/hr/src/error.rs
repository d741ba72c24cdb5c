use thiserror::Error;

use crate::{employee::EmployeeId, field::FieldError};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RosterError {
    #[error("employee {id} not found")]
    NotFound { id: EmployeeId },
    #[error("duplicate employee id {id}")]
    DuplicateId { id: EmployeeId },
}

pub type RosterResult<T> = Result<T, RosterError>;

/// Failure of a single-field edit: the record is gone or the input did not parse.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EditError {
    #[error(transparent)]
    Roster(#[from] RosterError),
    #[error(transparent)]
    Field(#[from] FieldError),
}
