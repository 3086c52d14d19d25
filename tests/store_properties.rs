use std::collections::HashSet;

use products_hr::{
    CreateEmployeePayload, Employee, EmployeeChanges, EmployeeFilter, EmployeeStore, HrError,
    NewEmployee, UpdateEmployeePayload,
};
use serde_json::{Value, json};

fn create_from(body: Value) -> NewEmployee {
    serde_json::from_value::<CreateEmployeePayload>(body)
        .unwrap()
        .into_new_employee()
}

fn changes_from(body: Value) -> EmployeeChanges {
    serde_json::from_value::<UpdateEmployeePayload>(body)
        .unwrap()
        .into_changes()
}

fn ids(employees: &[Employee]) -> Vec<u64> {
    employees.iter().map(|e| e.id).collect()
}

#[test]
fn ids_stay_unique_across_creates_and_deletes() {
    let mut store = EmployeeStore::seeded();
    let script: [(bool, u64); 10] = [
        (true, 4),
        (true, 1),
        (false, 2),
        (true, 2),
        (true, 2),
        (false, 9),
        (true, 5),
        (false, 4),
        (true, 4),
        (true, 3),
    ];
    for (create, id) in script {
        if create {
            let _ = store.create(create_from(json!({"id": id, "name": format!("E{id}")})));
        } else {
            let _ = store.delete(id);
        }
        let unique: HashSet<_> = store.list().iter().map(|e| e.id).collect();
        assert_eq!(unique.len(), store.len());
    }
    assert_eq!(ids(store.list()), vec![1, 3, 2, 5, 4]);
}

#[test]
fn create_then_get_round_trips_with_defaults() {
    let mut store = EmployeeStore::new();
    store
        .create(create_from(json!({"id": 10, "name": "Full", "salary": 1200, "joiningYear": 2019})))
        .unwrap();
    store
        .create(create_from(json!({"id": 11, "name": "Bare"})))
        .unwrap();

    assert_eq!(
        store.get(10).unwrap(),
        &Employee::new(10, "Full", 1_200, Some(2019))
    );
    assert_eq!(store.get(11).unwrap(), &Employee::new(11, "Bare", 0, None));
}

#[test]
fn partial_update_leaves_other_fields_alone() {
    let mut store = EmployeeStore::seeded();
    let before = store.get(1).unwrap().clone();
    let after = store.update(1, changes_from(json!({"name": "X"}))).unwrap();
    assert_eq!(after.name, "X");
    assert_eq!(after.salary, before.salary);
    assert_eq!(after.joining_year, before.joining_year);
}

#[test]
fn bad_numbers_default_on_create_but_are_ignored_on_update() {
    let mut store = EmployeeStore::seeded();

    let updated = store
        .update(3, changes_from(json!({"salary": "abc", "joiningYear": "soon"})))
        .unwrap();
    assert_eq!(updated.salary, 60_000);
    assert_eq!(updated.joining_year, Some(2021));

    let created = store
        .create(create_from(json!({
            "id": 4,
            "name": "New",
            "salary": "abc",
            "joiningYear": "soon"
        })))
        .unwrap();
    assert_eq!(created.salary, 0);
    assert_eq!(created.joining_year, None);
}

#[test]
fn deleting_missing_id_changes_nothing() {
    let mut store = EmployeeStore::seeded();
    assert_eq!(store.delete(404), Err(HrError::NotFound(404)));
    assert_eq!(store.len(), 3);
}

#[test]
fn salary_is_inclusive_and_year_is_exact() {
    let store = EmployeeStore::seeded();
    let by_salary = store.filter(&EmployeeFilter::from_query(Some("50000"), None));
    assert_eq!(ids(&by_salary), vec![2, 3]);

    let by_year = store.filter(&EmployeeFilter::from_query(None, Some("2022")));
    assert_eq!(ids(&by_year), vec![1]);

    let both = store.filter(&EmployeeFilter::from_query(Some("50000"), Some("2021")));
    assert_eq!(ids(&both), vec![3]);

    let none = store.filter(&EmployeeFilter::from_query(Some("70000"), None));
    assert!(none.is_empty());
}

#[test]
fn out_of_range_filters_are_ignored() {
    let store = EmployeeStore::seeded();
    for (salary, year) in [
        (Some("-5"), None),
        (None, Some("1800")),
        (Some(""), Some("")),
        (Some("abc"), Some("later")),
        (None, None),
    ] {
        let hits = store.filter(&EmployeeFilter::from_query(salary, year));
        assert_eq!(ids(&hits), vec![1, 2, 3], "{salary:?} {year:?}");
    }
}

#[test]
fn filter_sees_later_mutations() {
    let mut store = EmployeeStore::seeded();
    let filter = EmployeeFilter::from_query(None, Some("2021"));
    assert_eq!(store.filter(&filter).len(), 1);
    store
        .create(create_from(json!({"id": 8, "name": "Late", "joiningYear": 2021})))
        .unwrap();
    assert_eq!(ids(&store.filter(&filter)), vec![3, 8]);
}

#[test]
fn conflicting_create_keeps_existing_record() {
    let mut store = EmployeeStore::seeded();
    let original = store.get(2).unwrap().clone();
    let err = store
        .create(create_from(json!({"id": 2, "name": "Other", "salary": 1})))
        .unwrap_err();
    assert_eq!(err, HrError::Conflict(2));
    assert_eq!(store.get(2).unwrap(), &original);
}
