//! # Storage Layer
//!
//! The [`StudentStore`] trait is the only way commands reach persisted records.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production store, one delimited line per student
//!   (see [`crate::codec`] for the format).
//! - [`memory::InMemoryStore`]: Vector-backed store for testing. No persistence.
//!
//! ## Operations
//!
//! A store only knows how to scan, append and rewrite. It never validates: ids,
//! dates and courses are checked by the commands before anything is written.
//!
//! Delete and id-update are both rewrites. `rewrite_excluding` drops the
//! records matching a predicate, `rewrite_transform` replaces the records with a
//! given id. Both keep the relative order of everything else and report whether
//! anything matched; when nothing matched the store is left exactly as it was.

use crate::error::Result;
use crate::model::Student;

pub mod fs;
pub mod memory;

pub trait StudentStore {
    /// All records in on-disk order. A store that does not exist yet is empty.
    fn scan_all(&self) -> Result<Vec<Student>>;

    /// Add a record at the end of the store.
    fn append(&mut self, student: &Student) -> Result<()>;

    /// Drop every record matching `predicate`. Returns whether any matched.
    fn rewrite_excluding<P>(&mut self, predicate: P) -> Result<bool>
    where
        P: FnMut(&Student) -> bool;

    /// Replace every record whose id is `match_id` with `transform(record)`.
    /// Returns whether any matched.
    fn rewrite_transform<F>(&mut self, match_id: &str, transform: F) -> Result<bool>
    where
        F: FnMut(Student) -> Student;
}

/// What a rewrite does with one record.
pub(crate) enum Rewrite {
    Keep(Student),
    Replace(Student),
    Drop,
}

impl Rewrite {
    pub(crate) fn is_match(&self) -> bool {
        !matches!(self, Rewrite::Keep(_))
    }

    pub(crate) fn into_kept(self) -> Option<Student> {
        match self {
            Rewrite::Keep(s) | Rewrite::Replace(s) => Some(s),
            Rewrite::Drop => None,
        }
    }
}

pub(crate) fn excluding<P>(mut predicate: P) -> impl FnMut(Student) -> Rewrite
where
    P: FnMut(&Student) -> bool,
{
    move |student| {
        if predicate(&student) {
            Rewrite::Drop
        } else {
            Rewrite::Keep(student)
        }
    }
}

pub(crate) fn transforming<'a, F>(
    match_id: &'a str,
    mut transform: F,
) -> impl FnMut(Student) -> Rewrite + 'a
where
    F: FnMut(Student) -> Student + 'a,
{
    move |student| {
        if student.id == match_id {
            Rewrite::Replace(transform(student))
        } else {
            Rewrite::Keep(student)
        }
    }
}

/// Apply `step` to every record. Returns the surviving records and whether
/// anything matched.
pub(crate) fn apply_rewrite<F>(students: Vec<Student>, mut step: F) -> (Vec<Student>, bool)
where
    F: FnMut(Student) -> Rewrite,
{
    let mut matched = false;
    let mut kept = Vec::with_capacity(students.len());
    for student in students {
        let outcome = step(student);
        matched |= outcome.is_match();
        if let Some(s) = outcome.into_kept() {
            kept.push(s);
        }
    }
    (kept, matched)
}
