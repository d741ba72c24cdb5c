use std::collections::HashSet;

use crate::{
    employee::{Employee, EmployeeDraft, EmployeeId},
    error::{EditError, RosterError, RosterResult},
    field::EmployeeField,
};

/// Ordered, in-memory collection of employees plus the active name filter.
///
/// Records keep insertion order. Nothing outside the roster ever holds a
/// reference into it: every read hands back clones.
#[derive(Clone, Debug, Default)]
pub struct Roster {
    records: Vec<Employee>,
    filter: String,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a roster from existing records, keeping their ids and order.
    pub fn from_records(records: impl IntoIterator<Item = Employee>) -> RosterResult<Self> {
        let records: Vec<Employee> = records.into_iter().collect();
        let mut seen = HashSet::with_capacity(records.len());
        for record in &records {
            if !seen.insert(record.id) {
                return Err(RosterError::DuplicateId { id: record.id });
            }
        }
        Ok(Self {
            records,
            filter: String::new(),
        })
    }

    /// Appends a record under the next free id.
    ///
    /// The id is `max + 1` over the records present right now, so removing
    /// the highest id and inserting again hands that id out a second time.
    pub fn insert(&mut self, draft: EmployeeDraft) -> Employee {
        let employee = Employee::from_draft(self.next_id(), draft);
        self.records.push(employee.clone());
        employee
    }

    /// Replaces every non-id field of the matching record in place.
    pub fn update(&mut self, id: EmployeeId, draft: EmployeeDraft) -> RosterResult<Employee> {
        let record = self
            .records
            .iter_mut()
            .find(|record| record.id == id)
            .ok_or(RosterError::NotFound { id })?;
        record.apply(draft);
        Ok(record.clone())
    }

    /// Parses `raw` into one field of the matching record. On a parse error
    /// the record is left as it was.
    pub fn edit_field(
        &mut self,
        id: EmployeeId,
        field: EmployeeField,
        raw: &str,
    ) -> Result<Employee, EditError> {
        let record = self
            .records
            .iter_mut()
            .find(|record| record.id == id)
            .ok_or(RosterError::NotFound { id })?;
        let mut draft = record.draft();
        field.write(&mut draft, raw)?;
        record.apply(draft);
        Ok(record.clone())
    }

    /// Removes the matching record. Returns whether anything was removed;
    /// deleting an unknown id is not an error.
    pub fn delete(&mut self, id: EmployeeId) -> bool {
        let before = self.records.len();
        self.records.retain(|record| record.id != id);
        self.records.len() != before
    }

    /// Records whose name contains `filter`, ignoring case, in roster order.
    pub fn query(&self, filter: &str) -> Vec<Employee> {
        let needle = filter.to_lowercase();
        self.records
            .iter()
            .filter(|record| needle.is_empty() || record.name.to_lowercase().contains(&needle))
            .cloned()
            .collect()
    }

    /// Copy of a single record, e.g. to seed an edit form.
    pub fn get(&self, id: EmployeeId) -> Option<Employee> {
        self.records.iter().find(|record| record.id == id).cloned()
    }

    pub fn set_filter(&mut self, filter: impl Into<String>) {
        self.filter = filter.into();
    }

    pub fn filter(&self) -> &str {
        &self.filter
    }

    /// `query` under the stored filter.
    pub fn visible(&self) -> Vec<Employee> {
        self.query(&self.filter)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn ids(&self) -> Vec<EmployeeId> {
        self.records.iter().map(|record| record.id).collect()
    }

    fn next_id(&self) -> EmployeeId {
        self.records
            .iter()
            .map(|record| record.id)
            .max()
            .map_or(1, |max| max + 1)
    }
}
