//! Home screen grouping of the fetched catalog.

use serde::{Deserialize, Serialize};

use coursehub_core::Course;

/// The catalog split the way the home screen shows it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogSections {
    /// "Course in progress": the first `in_progress_count` courses.
    pub in_progress: Vec<Course>,

    /// "Recommended": everything after those.
    pub recommended: Vec<Course>,
}

impl CatalogSections {
    /// Splits `courses` after the first `in_progress_count` entries,
    /// keeping catalog order in both halves.
    pub fn split(mut courses: Vec<Course>, in_progress_count: usize) -> Self {
        let at = in_progress_count.min(courses.len());
        let recommended = courses.split_off(at);
        CatalogSections {
            in_progress: courses,
            recommended,
        }
    }

    pub fn total(&self) -> usize {
        self.in_progress.len() + self.recommended.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Looks up a course in either section.
    pub fn find(&self, course_id: &str) -> Option<&Course> {
        self.in_progress
            .iter()
            .chain(self.recommended.iter())
            .find(|c| c.id == course_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn courses(n: usize) -> Vec<Course> {
        (0..n)
            .map(|i| Course::new(i.to_string(), format!("C{}", i), "Inst", "https://i"))
            .collect()
    }

    #[test]
    fn test_split_at_six() {
        let sections = CatalogSections::split(courses(10), 6);

        assert_eq!(sections.in_progress.len(), 6);
        assert_eq!(sections.recommended.len(), 4);
        assert_eq!(sections.in_progress[0].id, "0");
        assert_eq!(sections.recommended[0].id, "6");
        assert_eq!(sections.total(), 10);
    }

    #[test]
    fn test_split_short_catalog() {
        let sections = CatalogSections::split(courses(3), 6);

        assert_eq!(sections.in_progress.len(), 3);
        assert!(sections.recommended.is_empty());
    }

    #[test]
    fn test_split_empty() {
        let sections = CatalogSections::split(Vec::new(), 6);
        assert!(sections.is_empty());
    }

    #[test]
    fn test_find() {
        let sections = CatalogSections::split(courses(8), 6);

        assert_eq!(sections.find("2").map(|c| c.name.as_str()), Some("C2"));
        assert_eq!(sections.find("7").map(|c| c.name.as_str()), Some("C7"));
        assert!(sections.find("99").is_none());
    }
}
