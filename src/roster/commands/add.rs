use crate::catalog::{unknown_courses, CourseSource};
use crate::commands::{CmdMessage, CmdResult, NewStudent};
use crate::error::{Result, RosterError};
use crate::store::StudentStore;
use crate::validate::{is_clean_field, is_numeric_id, is_valid_date};

/// Validate and append a new student.
///
/// Checks run in order and stop at the first failure: field format, duplicate
/// id, then the course catalog. The store is only written when all pass.
pub fn run<S: StudentStore, C: CourseSource>(
    store: &mut S,
    catalog: &C,
    new: NewStudent,
) -> Result<CmdResult> {
    check_format(&new)?;

    if store.scan_all()?.iter().any(|s| s.id == new.id) {
        return Err(RosterError::DuplicateId(new.id));
    }

    let available = catalog.load_courses()?;
    let unknown = unknown_courses(&new.courses, &available);
    if !unknown.is_empty() {
        return Err(RosterError::UnknownCourse(unknown));
    }

    let student = new.into_student();
    store.append(&student)?;
    tracing::info!(id = %student.id, "student added");

    let mut result = CmdResult::default().with_affected_students(vec![student]);
    result.add_message(CmdMessage::success("Student is added successfully."));
    Ok(result)
}

fn check_format(new: &NewStudent) -> Result<()> {
    if !is_numeric_id(&new.id) {
        return Err(RosterError::InvalidFormat(format!(
            "student id must be a number, got '{}'",
            new.id
        )));
    }
    if !is_valid_date(&new.registration_date) {
        return Err(RosterError::InvalidFormat(format!(
            "registration date must be YYYY-MM-DD, got '{}'",
            new.registration_date
        )));
    }
    if !is_clean_field(&new.name) {
        return Err(RosterError::InvalidFormat(
            "student name may not contain ',' or ';'".to_string(),
        ));
    }
    if let Some(bad) = new.courses.iter().find(|c| !is_clean_field(c)) {
        return Err(RosterError::InvalidFormat(format!(
            "course name may not contain ',' or ';', got '{}'",
            bad
        )));
    }
    Ok(())
}
