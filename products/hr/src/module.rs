use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::{
    employee::{Employee, EmployeeDraft, EmployeeId},
    error::{EditError, RosterResult},
    field::EmployeeField,
    roster::Roster,
};

/// Cloneable handle that serialises access to one [`Roster`].
///
/// Readers share the lock; every mutation takes it exclusively for the
/// length of a single roster call.
#[derive(Clone, Debug, Default)]
pub struct HrModule {
    roster: Arc<RwLock<Roster>>,
}

impl HrModule {
    pub fn new(roster: Roster) -> Self {
        Self {
            roster: Arc::new(RwLock::new(roster)),
        }
    }

    pub fn insert(&self, draft: EmployeeDraft) -> Employee {
        self.write().insert(draft)
    }

    pub fn update(&self, id: EmployeeId, draft: EmployeeDraft) -> RosterResult<Employee> {
        self.write().update(id, draft)
    }

    pub fn edit_field(
        &self,
        id: EmployeeId,
        field: EmployeeField,
        raw: &str,
    ) -> Result<Employee, EditError> {
        self.write().edit_field(id, field, raw)
    }

    pub fn delete(&self, id: EmployeeId) -> bool {
        self.write().delete(id)
    }

    pub fn query(&self, filter: &str) -> Vec<Employee> {
        self.read().query(filter)
    }

    pub fn get(&self, id: EmployeeId) -> Option<Employee> {
        self.read().get(id)
    }

    pub fn set_filter(&self, filter: impl Into<String>) {
        self.write().set_filter(filter);
    }

    pub fn filter(&self) -> String {
        self.read().filter().to_string()
    }

    pub fn visible(&self) -> Vec<Employee> {
        self.read().visible()
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    // A panic can only happen between whole roster calls, so a poisoned lock
    // still guards a consistent roster.
    fn read(&self) -> RwLockReadGuard<'_, Roster> {
        self.roster.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Roster> {
        self.roster.write().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::demo_roster;

    #[test]
    fn clones_share_one_roster() {
        let hr = HrModule::new(demo_roster().unwrap());
        let other = hr.clone();
        let draft = hr.get(1).map(|e| e.draft()).unwrap();
        let added = other.insert(draft);
        assert_eq!(added.id, 6);
        assert_eq!(hr.len(), 6);
        assert!(hr.delete(6));
        assert!(!other.delete(6));
    }

    #[test]
    fn concurrent_inserts_keep_ids_unique() {
        let hr = HrModule::default();
        let handles: Vec<_> = (0..8)
            .map(|n| {
                let hr = hr.clone();
                std::thread::spawn(move || {
                    for i in 0..25 {
                        hr.insert(EmployeeDraft {
                            name: format!("worker-{n}-{i}"),
                            ..EmployeeDraft::default()
                        });
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        let mut ids: Vec<_> = hr.query("").into_iter().map(|e| e.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 200);
        assert_eq!(ids.last(), Some(&200));
    }

    #[test]
    fn filter_round_trips_through_handle() {
        let hr = HrModule::new(demo_roster().unwrap());
        hr.set_filter("smith");
        assert_eq!(hr.filter(), "smith");
        let visible = hr.visible();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, 2);
        assert!(!hr.is_empty());
    }
}
