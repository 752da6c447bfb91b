use shared::domain::{StoreIndex, Student};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("store index {index} is out of range for {len} students")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Ordered in-memory roster. Insertion order is kept and duplicates are allowed.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    students: Vec<Student>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    pub fn get(&self, index: StoreIndex) -> Option<&Student> {
        self.students.get(index.0)
    }

    pub fn contains_index(&self, index: StoreIndex) -> bool {
        index.0 < self.students.len()
    }

    pub fn students(&self) -> &[Student] {
        &self.students
    }

    /// Students paired with their store position, in store order.
    pub fn iter(&self) -> impl Iterator<Item = (StoreIndex, &Student)> + '_ {
        self.students
            .iter()
            .enumerate()
            .map(|(position, student)| (StoreIndex(position), student))
    }

    pub fn push(&mut self, student: Student) -> StoreIndex {
        self.students.push(student);
        let index = StoreIndex(self.students.len() - 1);
        debug!(index = index.0, len = self.students.len(), "appended student");
        index
    }

    /// Replaces the whole record at `index`, returning the previous value.
    pub fn replace(&mut self, index: StoreIndex, student: Student) -> Result<Student, StoreError> {
        self.check(index)?;
        let previous = std::mem::replace(&mut self.students[index.0], student);
        debug!(index = index.0, len = self.students.len(), "replaced student");
        Ok(previous)
    }

    /// Removes the record at `index`; later records move down one position.
    pub fn remove(&mut self, index: StoreIndex) -> Result<Student, StoreError> {
        self.check(index)?;
        let removed = self.students.remove(index.0);
        debug!(index = index.0, len = self.students.len(), "removed student");
        Ok(removed)
    }

    fn check(&self, index: StoreIndex) -> Result<(), StoreError> {
        if self.contains_index(index) {
            Ok(())
        } else {
            Err(StoreError::IndexOutOfRange {
                index: index.0,
                len: self.students.len(),
            })
        }
    }
}

impl FromIterator<Student> for RecordStore {
    fn from_iter<I: IntoIterator<Item = Student>>(iter: I) -> Self {
        Self {
            students: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
