//! # Course Catalog
//!
//! The catalog is the list of course names a student may enrol in. It lives in
//! its own file, one name per line, and nothing in roster ever writes to it.
//!
//! Loading is forgiving: a missing or empty file is just an empty catalog.
//! Blank lines are skipped and repeated names collapse onto the first one.
//!
//! Operations take a [`CourseSource`] so they can be tested against a
//! [`StaticCatalog`] without touching the filesystem.

use crate::error::Result;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Course names in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    courses: Vec<String>,
}

impl Catalog {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut courses: Vec<String> = Vec::new();
        for name in names {
            let name = name.into();
            if !name.is_empty() && !courses.contains(&name) {
                courses.push(name);
            }
        }
        Self { courses }
    }

    /// Exact, case-sensitive membership.
    pub fn contains(&self, course: &str) -> bool {
        self.courses.iter().any(|c| c == course)
    }

    pub fn courses(&self) -> &[String] {
        &self.courses
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }
}

/// True when every candidate is in the catalog. An empty list is valid.
pub fn are_valid_courses<S: AsRef<str>>(candidates: &[S], catalog: &Catalog) -> bool {
    candidates.iter().all(|c| catalog.contains(c.as_ref()))
}

/// The candidates missing from the catalog, in request order.
pub fn unknown_courses<S: AsRef<str>>(candidates: &[S], catalog: &Catalog) -> Vec<String> {
    candidates
        .iter()
        .map(AsRef::as_ref)
        .filter(|c| !catalog.contains(c))
        .map(str::to_string)
        .collect()
}

/// Where the catalog comes from.
pub trait CourseSource {
    fn load_courses(&self) -> Result<Catalog>;
}

/// Catalog backed by a one-name-per-line file.
pub struct FileCatalog {
    path: PathBuf,
}

impl FileCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CourseSource for FileCatalog {
    fn load_courses(&self) -> Result<Catalog> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "course catalog missing");
                return Ok(Catalog::default());
            }
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "course catalog unreadable");
                return Ok(Catalog::default());
            }
        };

        let catalog = Catalog::new(content.lines().map(|l| l.trim_end_matches('\r')));
        tracing::debug!(count = catalog.len(), "loaded course catalog");
        Ok(catalog)
    }
}

/// Fixed in-memory catalog.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    catalog: Catalog,
}

impl StaticCatalog {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            catalog: Catalog::new(names),
        }
    }
}

impl CourseSource for StaticCatalog {
    fn load_courses(&self) -> Result<Catalog> {
        Ok(self.catalog.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn membership_is_case_sensitive() {
        let catalog = Catalog::new(["Math", "CS"]);
        assert!(catalog.contains("Math"));
        assert!(!catalog.contains("math"));
    }

    #[test]
    fn validates_candidate_lists() {
        let catalog = Catalog::new(["Math", "CS"]);
        assert!(are_valid_courses(&["Math", "CS"], &catalog));
        assert!(!are_valid_courses(&["Math", "Bio"], &catalog));
        assert!(are_valid_courses::<&str>(&[], &catalog));
    }

    #[test]
    fn empty_catalog_rejects_everything_but_empty_list() {
        let catalog = Catalog::default();
        assert!(!are_valid_courses(&["Math"], &catalog));
        assert!(are_valid_courses::<String>(&[], &catalog));
    }

    #[test]
    fn reports_unknown_courses_in_order() {
        let catalog = Catalog::new(["Math", "CS"]);
        assert_eq!(
            unknown_courses(&["Bio", "Math", "Art"], &catalog),
            vec!["Bio", "Art"]
        );
    }

    #[test]
    fn collapses_duplicates_and_blanks() {
        let catalog = Catalog::new(["Math", "", "CS", "Math"]);
        assert_eq!(catalog.courses(), &["Math".to_string(), "CS".to_string()]);
    }

    #[test]
    fn missing_file_is_empty_catalog() {
        let dir = TempDir::new().unwrap();
        let source = FileCatalog::new(dir.path().join("courses.csv"));
        assert!(source.load_courses().unwrap().is_empty());
    }

    #[test]
    fn reads_one_course_per_line() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("courses.csv");
        fs::write(&path, "Math\r\nCS\n\nBio\n").unwrap();

        let catalog = FileCatalog::new(&path).load_courses().unwrap();
        assert_eq!(
            catalog.courses(),
            &["Math".to_string(), "CS".to_string(), "Bio".to_string()]
        );
    }
}
