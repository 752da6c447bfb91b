//! Case-insensitive substring search over name and course.

use shared::domain::{StoreIndex, Student};
use storage::RecordStore;

/// Query as it is compared: surrounding whitespace dropped, lower-cased.
pub fn normalize_query(query: &str) -> String {
    query.trim().to_lowercase()
}

pub fn matches(student: &Student, query: &str) -> bool {
    matches_normalized(student, &normalize_query(query))
}

fn matches_normalized(student: &Student, needle: &str) -> bool {
    needle.is_empty()
        || student.name.to_lowercase().contains(needle)
        || student.course.to_lowercase().contains(needle)
}

/// Matching students in store order. Recomputed from the whole store on every call.
pub fn filter<'a>(store: &'a RecordStore, query: &str) -> Vec<(StoreIndex, &'a Student)> {
    let needle = normalize_query(query);
    store
        .iter()
        .filter(|(_, student)| matches_normalized(student, &needle))
        .collect()
}
