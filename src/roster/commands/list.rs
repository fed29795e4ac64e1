use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::StudentStore;

pub fn run<S: StudentStore>(store: &S) -> Result<CmdResult> {
    let mut students = store.scan_all()?;

    if students.is_empty() {
        let mut result = CmdResult::default();
        result.add_message(CmdMessage::info("No students found"));
        return Ok(result);
    }

    // Stable: equal names stay in store order.
    students.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(CmdResult::default().with_listed_students(students))
}
