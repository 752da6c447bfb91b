//! Display projection: the filtered, optionally sorted view of the store plus
//! the mapping from display rows back to store positions.

use std::cmp::Ordering;

use shared::domain::{Column, StoreIndex, Student};
use storage::RecordStore;

use crate::filter::filter;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    pub fn arrow(self) -> &'static str {
        match self {
            SortDirection::Ascending => "▲",
            SortDirection::Descending => "▼",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortOrder {
    pub column: Column,
    pub direction: SortDirection,
}

#[derive(Debug, Clone, Default)]
pub struct Projection {
    query: String,
    sort: Option<SortOrder>,
    rows: Vec<StoreIndex>,
}

impl Projection {
    pub fn new(store: &RecordStore) -> Self {
        let mut projection = Self::default();
        projection.refresh(store);
        projection
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn sort(&self) -> Option<SortOrder> {
        self.sort
    }

    pub fn rows(&self) -> &[StoreIndex] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn store_index(&self, display_row: usize) -> Option<StoreIndex> {
        self.rows.get(display_row).copied()
    }

    pub fn display_row(&self, index: StoreIndex) -> Option<usize> {
        self.rows.iter().position(|row| *row == index)
    }

    pub fn contains(&self, index: StoreIndex) -> bool {
        self.rows.contains(&index)
    }

    pub fn set_query(&mut self, query: impl Into<String>, store: &RecordStore) {
        self.query = query.into();
        self.refresh(store);
    }

    /// A new column sorts ascending; the active column flips direction.
    pub fn toggle_sort(&mut self, column: Column, store: &RecordStore) {
        let direction = match self.sort {
            Some(order) if order.column == column => order.direction.flipped(),
            _ => SortDirection::Ascending,
        };
        self.sort = Some(SortOrder { column, direction });
        self.refresh(store);
    }

    pub fn refresh(&mut self, store: &RecordStore) {
        let mut rows = filter(store, &self.query);
        if let Some(order) = self.sort {
            // sort_by is stable, so equal keys keep store order in both directions.
            rows.sort_by(|(_, a), (_, b)| {
                let ordering = compare(order.column, a, b);
                match order.direction {
                    SortDirection::Ascending => ordering,
                    SortDirection::Descending => ordering.reverse(),
                }
            });
        }
        self.rows = rows.into_iter().map(|(index, _)| index).collect();
    }
}

fn compare(column: Column, a: &Student, b: &Student) -> Ordering {
    match column {
        Column::Name => compare_text(&a.name, &b.name),
        Column::Age => a.age.cmp(&b.age),
        Column::Course => compare_text(&a.course, &b.course),
    }
}

fn compare_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

#[cfg(test)]
#[path = "tests/projection_tests.rs"]
mod tests;
