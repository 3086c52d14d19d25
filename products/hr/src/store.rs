use tracing::debug;

use crate::{
    Employee, EmployeeChanges, EmployeeFilter, EmployeeId, HrError, HrResult, NewEmployee,
    seed_employees,
};

/// Ordered, id-unique employee collection.
///
/// All mutation goes through `create`, `update` and `delete`, which keep the
/// ids unique and the insertion order stable.
#[derive(Clone, Debug, Default)]
pub struct EmployeeStore {
    employees: Vec<Employee>,
}

impl EmployeeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store holding the three seed records.
    pub fn seeded() -> Self {
        Self {
            employees: seed_employees(),
        }
    }

    pub fn len(&self) -> usize {
        self.employees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }

    pub fn list(&self) -> &[Employee] {
        &self.employees
    }

    pub fn get(&self, id: EmployeeId) -> HrResult<&Employee> {
        self.employees
            .iter()
            .find(|employee| employee.id == id)
            .ok_or(HrError::NotFound(id))
    }

    /// Append a new record. Missing salary becomes 0; a missing or zero
    /// joining year is stored as absent.
    pub fn create(&mut self, input: NewEmployee) -> HrResult<Employee> {
        let (Some(id), Some(name)) = (input.id, input.name) else {
            return Err(HrError::InvalidInput);
        };
        if self.position(id).is_some() {
            return Err(HrError::Conflict(id));
        }
        let employee = Employee {
            id,
            name,
            salary: input.salary.unwrap_or(0),
            joining_year: input.joining_year.filter(|year| *year != 0),
        };
        self.employees.push(employee.clone());
        debug!(id, total = self.employees.len(), "employee appended");
        Ok(employee)
    }

    /// Apply a partial update. Fields left as `None` keep their stored value.
    pub fn update(&mut self, id: EmployeeId, changes: EmployeeChanges) -> HrResult<Employee> {
        let index = self.position(id).ok_or(HrError::NotFound(id))?;
        let employee = &mut self.employees[index];
        if let Some(name) = changes.name {
            employee.name = name;
        }
        if let Some(salary) = changes.salary {
            employee.salary = salary;
        }
        if let Some(year) = changes.joining_year {
            employee.joining_year = Some(year);
        }
        Ok(employee.clone())
    }

    /// Remove a record and hand it back.
    pub fn delete(&mut self, id: EmployeeId) -> HrResult<Employee> {
        let index = self.position(id).ok_or(HrError::NotFound(id))?;
        let removed = self.employees.remove(index);
        debug!(id, total = self.employees.len(), "employee removed");
        Ok(removed)
    }

    pub fn filter(&self, filter: &EmployeeFilter) -> Vec<Employee> {
        self.employees
            .iter()
            .filter(|employee| filter.matches(employee))
            .cloned()
            .collect()
    }

    fn position(&self, id: EmployeeId) -> Option<usize> {
        self.employees.iter().position(|employee| employee.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_employee(id: EmployeeId, name: &str) -> NewEmployee {
        NewEmployee {
            id: Some(id),
            name: Some(name.to_string()),
            ..NewEmployee::default()
        }
    }

    #[test]
    fn list_keeps_insertion_order() {
        let mut store = EmployeeStore::seeded();
        store.create(new_employee(10, "Zed")).unwrap();
        store.create(new_employee(4, "Amy")).unwrap();
        let ids: Vec<_> = store.list().iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 10, 4]);
    }

    #[test]
    fn create_requires_id_and_name() {
        let mut store = EmployeeStore::new();
        let missing_name = NewEmployee {
            id: Some(1),
            ..NewEmployee::default()
        };
        let missing_id = NewEmployee {
            name: Some("Ann".into()),
            ..NewEmployee::default()
        };
        assert_eq!(store.create(missing_name), Err(HrError::InvalidInput));
        assert_eq!(store.create(missing_id), Err(HrError::InvalidInput));
        assert!(store.is_empty());
    }

    #[test]
    fn create_fills_defaults() {
        let mut store = EmployeeStore::new();
        let created = store.create(new_employee(5, "Eve")).unwrap();
        assert_eq!(created, Employee::new(5, "Eve", 0, None));
        assert_eq!(store.get(5).unwrap(), &created);
    }

    #[test]
    fn zero_year_on_create_is_absent() {
        let mut store = EmployeeStore::new();
        let created = store
            .create(NewEmployee {
                joining_year: Some(0),
                ..new_employee(6, "Zero")
            })
            .unwrap();
        assert_eq!(created.joining_year, None);
    }

    #[test]
    fn negative_salary_is_stored_as_given() {
        let mut store = EmployeeStore::new();
        let created = store
            .create(NewEmployee {
                salary: Some(-1),
                ..new_employee(7, "Debtor")
            })
            .unwrap();
        assert_eq!(created.salary, -1);
        let updated = store
            .update(
                7,
                EmployeeChanges {
                    salary: Some(-250),
                    ..EmployeeChanges::default()
                },
            )
            .unwrap();
        assert_eq!(updated.salary, -250);
    }

    #[test]
    fn duplicate_id_conflicts_and_keeps_original() {
        let mut store = EmployeeStore::seeded();
        let err = store.create(new_employee(1, "Impostor")).unwrap_err();
        assert_eq!(err, HrError::Conflict(1));
        assert_eq!(store.get(1).unwrap().name, "John Doe");
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn update_touches_only_supplied_fields() {
        let mut store = EmployeeStore::seeded();
        let updated = store
            .update(
                2,
                EmployeeChanges {
                    name: Some("Janet".into()),
                    ..EmployeeChanges::default()
                },
            )
            .unwrap();
        assert_eq!(updated, Employee::new(2, "Janet", 55_000, Some(2023)));
    }

    #[test]
    fn update_unknown_id_is_not_found() {
        let mut store = EmployeeStore::seeded();
        assert_eq!(
            store.update(99, EmployeeChanges::default()),
            Err(HrError::NotFound(99))
        );
    }

    #[test]
    fn delete_preserves_remaining_order() {
        let mut store = EmployeeStore::seeded();
        let removed = store.delete(2).unwrap();
        assert_eq!(removed.id, 2);
        let ids: Vec<_> = store.list().iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![1, 3]);
        assert_eq!(store.delete(2), Err(HrError::NotFound(2)));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn filter_does_not_mutate() {
        let store = EmployeeStore::seeded();
        let hits = store.filter(&EmployeeFilter::from_query(Some("60000"), None));
        assert_eq!(hits.len(), 1);
        assert_eq!(store.len(), 3);
    }
}
