use serde::{Deserialize, Serialize};

/// One student's persisted data.
///
/// Field order here matches the on-disk column order: id, name, courses, date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub id: String,
    pub name: String,
    pub courses: Vec<String>,
    pub registration_date: String,
}

impl Student {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        courses: Vec<String>,
        registration_date: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            courses,
            registration_date: registration_date.into(),
        }
    }

    /// Copy of this record with a different id; every other field is kept.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_id_keeps_other_fields() {
        let student = Student::new("1", "Ann", vec!["Math".into()], "2024-01-15");
        let moved = student.clone().with_id("2");
        assert_eq!(moved.id, "2");
        assert_eq!(moved.name, student.name);
        assert_eq!(moved.courses, student.courses);
        assert_eq!(moved.registration_date, student.registration_date);
    }
}
