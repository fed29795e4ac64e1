use super::{apply_rewrite, excluding, transforming, StudentStore};
use crate::error::Result;
use crate::model::Student;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    students: Vec<Student>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StudentStore for InMemoryStore {
    fn scan_all(&self) -> Result<Vec<Student>> {
        Ok(self.students.clone())
    }

    fn append(&mut self, student: &Student) -> Result<()> {
        self.students.push(student.clone());
        Ok(())
    }

    fn rewrite_excluding<P>(&mut self, predicate: P) -> Result<bool>
    where
        P: FnMut(&Student) -> bool,
    {
        let current = std::mem::take(&mut self.students);
        let (kept, matched) = apply_rewrite(current, excluding(predicate));
        self.students = kept;
        Ok(matched)
    }

    fn rewrite_transform<F>(&mut self, match_id: &str, transform: F) -> Result<bool>
    where
        F: FnMut(Student) -> Student,
    {
        let current = std::mem::take(&mut self.students);
        let (kept, matched) = apply_rewrite(current, transforming(match_id, transform));
        self.students = kept;
        Ok(matched)
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_student(mut self, id: &str, name: &str) -> Self {
            let student = Student::new(id, name, vec!["Math".to_string()], "2024-01-15");
            self.store.append(&student).unwrap();
            self
        }

        pub fn with_students(mut self, count: usize) -> Self {
            for i in 0..count {
                let student = Student::new(
                    (i + 1).to_string(),
                    format!("Student {}", i + 1),
                    vec!["Math".to_string()],
                    "2024-01-15",
                );
                self.store.append(&student).unwrap();
            }
            self
        }
    }
}
