//! # Command Layer
//!
//! Each user-facing operation lives in its own submodule as a plain function over a
//! [`StudentStore`](crate::store::StudentStore) and, where courses matter, a
//! [`CourseSource`](crate::catalog::CourseSource).
//!
//! Commands validate, talk to the store, and return a [`CmdResult`]. Failures that
//! the operator can fix (bad format, duplicate id, unknown course, missing id) come
//! back as `Err(RosterError)` and nothing is written. Commands never print.
//!
//! Every command re-reads the store; nothing is cached between calls.
//!
//! ## Command Modules
//!
//! - [`list`]: All students, sorted by name
//! - [`add`]: Validate and append a new student
//! - [`delete`]: Remove a student by id
//! - [`update_id`]: Change a student's id
//! - [`courses`]: The course catalog

use crate::model::Student;
use serde::Serialize;

pub mod add;
pub mod courses;
pub mod delete;
pub mod list;
pub mod update_id;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_students: Vec<Student>,
    pub listed_students: Vec<Student>,
    pub listed_courses: Vec<String>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_students(mut self, students: Vec<Student>) -> Self {
        self.affected_students = students;
        self
    }

    pub fn with_listed_students(mut self, students: Vec<Student>) -> Self {
        self.listed_students = students;
        self
    }

    pub fn with_listed_courses(mut self, courses: Vec<String>) -> Self {
        self.listed_courses = courses;
        self
    }
}

/// Input for [`add::run`].
#[derive(Debug, Clone)]
pub struct NewStudent {
    pub id: String,
    pub name: String,
    pub courses: Vec<String>,
    pub registration_date: String,
}

impl NewStudent {
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

    pub fn into_student(self) -> Student {
        Student {
            id: self.id,
            name: self.name,
            courses: self.courses,
            registration_date: self.registration_date,
        }
    }
}
