use crate::{employee::Employee, error::RosterResult, roster::Roster};

/// The five demo employees a fresh roster starts with.
pub fn demo_employees() -> Vec<Employee> {
    vec![
        employee(1, "John Doe", "Software Engineer", "Engineering", 30, 80_000.0, 5),
        employee(2, "Jane Smith", "UI/UX Designer", "Design", 28, 70_000.0, 4),
        employee(3, "Michael Johnson", "Product Manager", "Product Management", 35, 100_000.0, 7),
        employee(4, "Emily Brown", "Marketing Specialist", "Marketing", 32, 75_000.0, 6),
        employee(5, "William Taylor", "Data Analyst", "Analytics", 27, 65_000.0, 3),
    ]
}

/// Roster holding the demo employees under their listed ids.
pub fn demo_roster() -> RosterResult<Roster> {
    Roster::from_records(demo_employees())
}

fn employee(
    id: u32,
    name: &str,
    position: &str,
    department: &str,
    age: u32,
    salary: f64,
    experience: u32,
) -> Employee {
    Employee {
        id,
        name: name.into(),
        position: position.into(),
        department: department.into(),
        age,
        salary,
        experience,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_roster_matches_demo_employees() {
        let roster = demo_roster().unwrap();
        assert_eq!(roster.ids(), vec![1, 2, 3, 4, 5]);
        assert_eq!(roster.query(""), demo_employees());
    }

    #[test]
    fn demo_roster_keeps_listed_ids() {
        let mut roster = demo_roster().unwrap();
        for record in demo_employees() {
            assert_eq!(roster.get(record.id), Some(record));
        }
        assert_eq!(roster.insert(demo_employees()[0].draft()).id, 6);
    }
}
