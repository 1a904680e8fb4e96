use std::collections::HashMap;

use crate::selection::models::SelectedCourse;

/// How many selected courses share each exam date.
///
/// Always built from the current list, never kept around between mutations.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConflictIndex {
    counts: HashMap<String, usize>,
}

impl ConflictIndex {
    /// Count the courses per date, dates are compared as plain strings
    pub fn build(selected: &[SelectedCourse]) -> Self {
        let mut counts = HashMap::new();
        for course in selected {
            *counts.entry(course.date.clone()).or_insert(0) += 1;
        }

        Self { counts }
    }

    pub fn count(&self, date: &str) -> usize {
        self.counts.get(date).copied().unwrap_or(0)
    }

    pub fn is_conflicting(&self, date: &str) -> bool {
        self.count(date) > 1
    }

    /// Dates holding more than one exam, sorted
    pub fn conflicting_dates(&self) -> Vec<&str> {
        let mut dates: Vec<&str> = self
            .counts
            .iter()
            .filter(|(_, count)| **count > 1)
            .map(|(date, _)| date.as_str())
            .collect();
        dates.sort_unstable();

        dates
    }

    pub fn as_map(&self) -> &HashMap<String, usize> {
        &self.counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::models::Course;
    use crate::selection::models::InstanceId;

    fn selected(id: u64, date: &str) -> SelectedCourse {
        SelectedCourse {
            instance_id: InstanceId(id),
            course: Course {
                acronym: format!("C{id}"),
                name: String::new(),
                date: date.into(),
                time: String::new(),
                rooms: vec!["Room".into()],
            },
        }
    }

    #[test]
    fn test_empty_list_has_no_conflict() {
        let index = ConflictIndex::build(&[]);
        assert!(index.as_map().is_empty());
        assert!(!index.is_conflicting("2024-05-10"));
        assert_eq!(index.count("2024-05-10"), 0);
    }

    #[test]
    fn test_shared_date_flags_every_member() {
        let list = [
            selected(1, "2024-05-10"),
            selected(2, "2024-05-11"),
            selected(3, "2024-05-10"),
        ];
        let index = ConflictIndex::build(&list);

        assert_eq!(index.count("2024-05-10"), 2);
        assert!(index.is_conflicting(&list[0].date));
        assert!(index.is_conflicting(&list[2].date));
        assert!(!index.is_conflicting(&list[1].date));
        assert_eq!(index.conflicting_dates(), vec!["2024-05-10"]);
    }

    #[test]
    fn test_dates_are_compared_literally() {
        let list = [
            selected(1, "2024-05-10"),
            selected(2, "5/10/2024"),
            selected(3, ""),
            selected(4, ""),
        ];
        let index = ConflictIndex::build(&list);

        assert!(!index.is_conflicting("2024-05-10"));
        assert!(!index.is_conflicting("5/10/2024"));
        assert!(index.is_conflicting(""));
        assert_eq!(index.conflicting_dates(), vec![""]);
    }

    #[test]
    fn test_conflicting_dates_sorted() {
        let list = [
            selected(1, "b"),
            selected(2, "a"),
            selected(3, "b"),
            selected(4, "a"),
            selected(5, "c"),
        ];
        assert_eq!(ConflictIndex::build(&list).conflicting_dates(), vec!["a", "b"]);
    }
}
