use super::*;

fn store() -> RecordStore {
    [
        Student::new("carol", 21, "Physics"),
        Student::new("Alice", 9, "CS"),
        Student::new("Bob", 100, "Math"),
        Student::new("alice", 30, "Art"),
    ]
    .into_iter()
    .collect()
}

fn positions(projection: &Projection) -> Vec<usize> {
    projection.rows().iter().map(|index| index.0).collect()
}

#[test]
fn unsorted_projection_follows_store_order() {
    let store = store();
    let projection = Projection::new(&store);
    assert_eq!(positions(&projection), vec![0, 1, 2, 3]);
    assert_eq!(projection.sort(), None);
}

#[test]
fn name_sort_is_case_insensitive_with_stable_ties() {
    let store = store();
    let mut projection = Projection::new(&store);

    projection.toggle_sort(Column::Name, &store);
    assert_eq!(
        projection.sort(),
        Some(SortOrder {
            column: Column::Name,
            direction: SortDirection::Ascending
        })
    );
    // "Alice" < "alice" on the raw tie-break, then Bob, then carol.
    assert_eq!(positions(&projection), vec![1, 3, 2, 0]);

    projection.toggle_sort(Column::Name, &store);
    assert_eq!(positions(&projection), vec![0, 2, 3, 1]);
}

#[test]
fn age_sorts_numerically() {
    let store = store();
    let mut projection = Projection::new(&store);
    projection.toggle_sort(Column::Age, &store);
    assert_eq!(positions(&projection), vec![1, 0, 3, 2]);
}

#[test]
fn switching_column_restarts_ascending() {
    let store = store();
    let mut projection = Projection::new(&store);
    projection.toggle_sort(Column::Age, &store);
    projection.toggle_sort(Column::Age, &store);
    projection.toggle_sort(Column::Course, &store);

    assert_eq!(
        projection.sort().map(|order| order.direction),
        Some(SortDirection::Ascending)
    );
    assert_eq!(positions(&projection), vec![3, 1, 2, 0]);
}

#[test]
fn sorting_leaves_store_untouched() {
    let store = store();
    let before = store.students().to_vec();
    let mut projection = Projection::new(&store);
    projection.toggle_sort(Column::Name, &store);
    assert_eq!(store.students(), before.as_slice());
}

#[test]
fn display_rows_map_back_to_store_positions() {
    let store = store();
    let mut projection = Projection::new(&store);
    projection.set_query("ali", &store);
    projection.toggle_sort(Column::Age, &store);

    assert_eq!(projection.len(), 2);
    assert_eq!(projection.store_index(0), Some(StoreIndex(1)));
    assert_eq!(projection.store_index(1), Some(StoreIndex(3)));
    assert_eq!(projection.store_index(2), None);
    assert_eq!(projection.display_row(StoreIndex(3)), Some(1));
    assert!(!projection.contains(StoreIndex(2)));
}

#[test]
fn refresh_picks_up_store_changes() {
    let mut store = store();
    let mut projection = Projection::new(&store);
    projection.set_query("math", &store);
    assert_eq!(positions(&projection), vec![2]);

    store.push(Student::new("Dana", 40, "Applied Math"));
    projection.refresh(&store);
    assert_eq!(positions(&projection), vec![2, 4]);
    assert_eq!(projection.query(), "math");
}
