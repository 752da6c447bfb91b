use std::fmt;

/// Position of a student in the record store.
///
/// Display rows and store positions diverge as soon as a filter or sort is
/// active, so the store side gets its own type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StoreIndex(pub usize);

impl fmt::Display for StoreIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Student {
    pub name: String,
    pub age: i32,
    pub course: String,
}

impl Student {
    pub fn new(name: impl Into<String>, age: i32, course: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            age,
            course: course.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    Name,
    Age,
    Course,
}

impl Column {
    pub const ALL: [Column; 3] = [Column::Name, Column::Age, Column::Course];

    pub fn label(self) -> &'static str {
        match self {
            Column::Name => "Name",
            Column::Age => "Age",
            Column::Course => "Course",
        }
    }
}

/// Row action that requires a selected student.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionAction {
    Edit,
    Delete,
}

impl fmt::Display for SelectionAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectionAction::Edit => f.write_str("edit"),
            SelectionAction::Delete => f.write_str("delete"),
        }
    }
}
