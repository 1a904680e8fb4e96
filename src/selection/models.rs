use std::{fmt, ops::Deref};

use crate::catalog::models::Course;

/// Identity of a selected course, unique for the whole session
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct InstanceId(pub u64);

impl fmt::Display for InstanceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A course added to the list.
///
/// The same course can be added several times, each copy keeps its own id
/// so it can be removed on its own.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectedCourse {
    pub instance_id: InstanceId,
    pub course: Course,
}

impl Deref for SelectedCourse {
    type Target = Course;

    fn deref(&self) -> &Course {
        &self.course
    }
}
