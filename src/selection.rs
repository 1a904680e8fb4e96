use tracing::debug;

use crate::catalog::{models::Course, Catalog};
use crate::conflict::ConflictIndex;
use crate::error::{Error, Result};

pub mod models;

use models::{InstanceId, SelectedCourse};

/// Ordered list of the courses picked by the user.
///
/// The order is the one chosen by the user when inserting, it is never
/// sorted by date or by name.
#[derive(Debug)]
pub struct SelectionStore {
    instances: Vec<SelectedCourse>,
    /// Never reused, even after a removal
    next_instance_id: u64,
}

impl Default for SelectionStore {
    fn default() -> Self {
        Self {
            instances: Vec::new(),
            next_instance_id: 1,
        }
    }
}

impl SelectionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a course right after the row `after`, or at the end with `None`.
    ///
    /// An `after` past the last row is refused before any id is allocated,
    /// so the store is left untouched.
    pub fn add(&mut self, course: Course, after: Option<usize>) -> Result<InstanceId> {
        let len = self.instances.len();
        let position = match after {
            None => len,
            Some(index) if index < len => index + 1,
            Some(index) => return Err(Error::OutOfRange { index, len }),
        };

        let instance_id = InstanceId(self.next_instance_id);
        self.next_instance_id += 1;

        debug!(%instance_id, acronym = %course.acronym, position, "adding course");
        self.instances
            .insert(position, SelectedCourse { instance_id, course });

        Ok(instance_id)
    }

    /// Remove a course by its id, returns `false` when there was no such course
    pub fn remove(&mut self, instance_id: InstanceId) -> bool {
        match self.position(instance_id) {
            Some(position) => {
                let removed = self.instances.remove(position);
                debug!(%instance_id, acronym = %removed.acronym, position, "removed course");
                true
            }
            None => {
                debug!(%instance_id, "nothing to remove");
                false
            }
        }
    }

    /// Courses in their current order
    pub fn list(&self) -> &[SelectedCourse] {
        &self.instances
    }

    /// Number of courses per exam date, computed from the current list
    pub fn conflicts(&self) -> ConflictIndex {
        ConflictIndex::build(&self.instances)
    }

    pub fn get(&self, instance_id: InstanceId) -> Option<&SelectedCourse> {
        self.instances
            .iter()
            .find(|selected| selected.instance_id == instance_id)
    }

    pub fn position(&self, instance_id: InstanceId) -> Option<usize> {
        self.instances
            .iter()
            .position(|selected| selected.instance_id == instance_id)
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }
}

/// What the user is working with: the catalog, the list being built and the
/// course currently picked in the search
#[derive(Debug)]
pub struct Session {
    catalog: Catalog,
    store: SelectionStore,
    pending: Option<Course>,
}

impl Session {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            store: SelectionStore::new(),
            pending: None,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn store(&self) -> &SelectionStore {
        &self.store
    }

    pub fn pending(&self) -> Option<&Course> {
        self.pending.as_ref()
    }

    /// Replace the picked course, `None` clears it
    pub fn pick(&mut self, course: Option<Course>) {
        self.pending = course;
    }

    /// Pick the course with this acronym
    pub fn pick_acronym(&mut self, acronym: &str) -> Result<()> {
        let course = self.catalog.find(acronym)?.clone();
        self.pick(Some(course));

        Ok(())
    }

    /// Add the picked course, then clear the pick.
    ///
    /// Nothing happens when no course is picked. On error the pick is kept.
    pub fn add(&mut self, after: Option<usize>) -> Result<Option<InstanceId>> {
        let Some(course) = &self.pending else {
            debug!("no course picked, nothing to add");
            return Ok(None);
        };

        let instance_id = self.store.add(course.clone(), after)?;
        self.pending = None;

        Ok(Some(instance_id))
    }

    pub fn remove(&mut self, instance_id: InstanceId) -> bool {
        self.store.remove(instance_id)
    }
}
