//! HR roster: an in-memory, ordered collection of employee records with
//! insert, update, delete and name-filter queries.

mod employee;
mod error;
mod field;
mod module;
mod roster;
mod seed;

pub use employee::{Employee, EmployeeDraft, EmployeeId};
pub use error::{EditError, RosterError, RosterResult};
pub use field::{EmployeeField, FieldError, FieldKind};
pub use module::HrModule;
pub use roster::Roster;
pub use seed::{demo_employees, demo_roster};
