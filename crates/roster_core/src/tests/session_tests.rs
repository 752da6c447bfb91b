use super::*;
use shared::domain::SelectionAction;

fn fill(session: &mut RosterSession, name: &str, age: &str, course: &str) {
    *session.form_mut() = StudentForm::new(name, age, course);
}

fn seeded() -> RosterSession {
    RosterSession::with_store(
        [
            Student::new("Alice", 20, "CS"),
            Student::new("Bob", 22, "Math"),
            Student::new("Carol", 19, "Engineering"),
        ]
        .into_iter()
        .collect(),
    )
}

#[test]
fn add_refreshes_projection_under_active_query() {
    let mut session = seeded();
    session.set_query("math");
    assert_eq!(session.projection().len(), 1);

    fill(&mut session, "Dana", "30", "Applied Math");
    session.submit_add().expect("add");

    let names: Vec<_> = session.visible_rows().map(|(_, s)| s.name.clone()).collect();
    assert_eq!(names, vec!["Bob", "Dana"]);
    assert!(session.form().is_blank());
}

#[test]
fn selecting_a_row_loads_it_into_the_form() {
    let mut session = seeded();
    session.toggle_sort(Column::Age);

    // Sorted by age: Carol (19), Alice (20), Bob (22).
    let index = session.select_row(0).expect("row 0");

    assert_eq!(index, StoreIndex(2));
    assert_eq!(session.form(), &StudentForm::new("Carol", "19", "Engineering"));
    assert_eq!(session.selected_display_row(), Some(0));
}

#[test]
fn edit_through_sorted_view_targets_mapped_record() {
    let mut session = seeded();
    session.toggle_sort(Column::Name);
    session.toggle_sort(Column::Name);

    // Descending by name: Carol, Bob, Alice.
    session.select_row(2).expect("row 2");
    session.form_mut().course = "Data Science".to_string();
    let index = session.submit_edit().expect("edit");

    assert_eq!(index, StoreIndex(0));
    assert_eq!(
        session.store().get(StoreIndex(0)),
        Some(&Student::new("Alice", 20, "Data Science"))
    );
    assert_eq!(session.selected(), None);
}

#[test]
fn add_and_delete_leave_nothing_selected() {
    let mut session = seeded();
    session.select_row(0).expect("row 0");

    fill(&mut session, "Dana", "30", "Physics");
    session.submit_add().expect("add");
    assert_eq!(session.selected(), None);
    assert_eq!(session.selected_display_row(), None);

    session.select_row(1).expect("row 1");
    let removed = session.delete_selected().expect("delete");
    assert_eq!(removed, Student::new("Bob", 22, "Math"));
    assert_eq!(session.selected(), None);
    assert_eq!(
        session.delete_selected(),
        Err(RosterError::NoSelection {
            action: SelectionAction::Delete
        })
    );
    assert_eq!(session.store().len(), 3);
}

#[test]
fn clear_selection_keeps_form_and_store() {
    let mut session = seeded();
    session.select_row(2).expect("row 2");

    session.clear_selection();

    assert_eq!(session.selected(), None);
    assert_eq!(session.form(), &StudentForm::new("Carol", "19", "Engineering"));
    assert_eq!(session.store().len(), 3);
    assert_eq!(
        session.submit_edit(),
        Err(RosterError::NoSelection {
            action: SelectionAction::Edit
        })
    );
}

#[test]
fn delete_without_selection_reports_and_keeps_store() {
    let mut session = seeded();
    assert_eq!(
        session.delete_selected(),
        Err(RosterError::NoSelection {
            action: SelectionAction::Delete
        })
    );
    assert_eq!(session.store().len(), 3);
}

#[test]
fn query_change_drops_hidden_selection() {
    let mut session = seeded();
    session.select_row(1).expect("Bob");

    session.set_query("bo");
    assert_eq!(session.selected(), Some(StoreIndex(1)));

    session.set_query("alice");
    assert_eq!(session.selected(), None);
    assert_eq!(
        session.submit_edit(),
        Err(RosterError::NoSelection {
            action: SelectionAction::Edit
        })
    );
}

#[test]
fn selecting_past_the_projection_is_ignored() {
    let mut session = seeded();
    session.set_query("carol");
    assert_eq!(session.select_row(1), None);
    assert_eq!(session.selected(), None);
    assert!(session.form().is_blank());
}

#[test]
fn theme_toggle_does_not_touch_data() {
    let mut session = seeded();
    session.select_row(0).expect("row");
    let before = session.store().students().to_vec();

    assert_eq!(session.toggle_theme(), Theme::Dark);
    assert_eq!(session.toggle_theme(), Theme::Light);

    assert_eq!(session.store().students(), before.as_slice());
    assert_eq!(session.selected(), Some(StoreIndex(0)));
}
