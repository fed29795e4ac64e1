use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, RosterError};
use crate::store::StudentStore;

pub fn run<S: StudentStore>(store: &mut S, id: &str) -> Result<CmdResult> {
    if !store.rewrite_excluding(|s| s.id == id)? {
        return Err(RosterError::NotFound(id.to_string()));
    }

    tracing::info!(id, "student deleted");
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Student with ID {} deleted successfully.",
        id
    )));
    Ok(result)
}
