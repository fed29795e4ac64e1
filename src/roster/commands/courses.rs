use crate::catalog::CourseSource;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;

pub fn run<C: CourseSource>(catalog: &C) -> Result<CmdResult> {
    let courses = catalog.load_courses()?;
    if courses.is_empty() {
        let mut result = CmdResult::default();
        result.add_message(CmdMessage::info("No courses available"));
        return Ok(result);
    }
    Ok(CmdResult::default().with_listed_courses(courses.courses().to_vec()))
}
