use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, RosterError};
use crate::store::StudentStore;
use crate::validate::{is_clean_field, is_numeric_id};

/// Change a student's id, keeping every other field.
///
/// The new id may be non-numeric or already taken. Both cases go through and
/// come back as warnings on the result. An id containing a delimiter would
/// break the line format and is rejected.
pub fn run<S: StudentStore>(store: &mut S, old_id: &str, new_id: &str) -> Result<CmdResult> {
    if !is_clean_field(new_id) {
        return Err(RosterError::InvalidFormat(format!(
            "student id may not contain ',' or ';', got '{}'",
            new_id
        )));
    }

    let taken = old_id != new_id && store.scan_all()?.iter().any(|s| s.id == new_id);

    let mut updated = Vec::new();
    let matched = store.rewrite_transform(old_id, |student| {
        let student = student.with_id(new_id);
        updated.push(student.clone());
        student
    })?;

    if !matched {
        return Err(RosterError::NotFound(old_id.to_string()));
    }

    tracing::info!(old_id, new_id, "student id updated");
    let mut result = CmdResult::default().with_affected_students(updated);
    result.add_message(CmdMessage::success("Student ID updated successfully."));
    if !is_numeric_id(new_id) {
        result.add_message(CmdMessage::warning(format!(
            "New id '{}' is not numeric",
            new_id
        )));
    }
    if taken {
        result.add_message(CmdMessage::warning(format!(
            "Another student already had id {}; ids are no longer unique",
            new_id
        )));
    }
    Ok(result)
}
