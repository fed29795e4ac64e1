//! Line format for student records.
//!
//! ```text
//! id,name,course1;course2;...;courseN,date
//! ```
//!
//! Nothing is quoted or escaped. A field that contains `,` or `;` cannot be
//! represented, which is why the add command rejects such values up front.

use crate::model::Student;

pub const FIELD_DELIMITER: char = ',';
pub const COURSE_DELIMITER: char = ';';

const FIELD_COUNT: usize = 4;

/// Why a line failed to decode. The store attaches the line number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeError(pub String);

pub fn encode(student: &Student) -> String {
    format!(
        "{id}{d}{name}{d}{courses}{d}{date}",
        id = student.id,
        name = student.name,
        courses = join_courses(&student.courses),
        date = student.registration_date,
        d = FIELD_DELIMITER,
    )
}

pub fn decode(line: &str) -> Result<Student, DecodeError> {
    let line = line.strip_suffix('\r').unwrap_or(line);
    let fields: Vec<&str> = line.split(FIELD_DELIMITER).collect();

    let [id, name, courses, date] = fields.as_slice() else {
        return Err(DecodeError(format!(
            "expected {} fields, found {}",
            FIELD_COUNT,
            fields.len()
        )));
    };

    Ok(Student {
        id: id.to_string(),
        name: name.to_string(),
        courses: split_courses(courses),
        registration_date: date.to_string(),
    })
}

/// Splits a `course1;course2` field. Empty segments are dropped.
pub fn split_courses(field: &str) -> Vec<String> {
    field
        .split(COURSE_DELIMITER)
        .filter(|c| !c.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn join_courses<S: AsRef<str>>(courses: &[S]) -> String {
    courses
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(&COURSE_DELIMITER.to_string())
}
