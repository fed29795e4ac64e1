use colored::Colorize;
use roster::api::{CmdMessage, MessageLevel};
use roster::error::RosterError;
use roster::model::Student;
use std::io::{self, Write};
use unicode_width::UnicodeWidthStr;

const RULE: &str =
    "------------------------------------------------------------------------------------------";

const ADD_USAGE: &str =
    "studentadd <student_id> <student_name> <course1;course2;...> <registration_date>";

pub(super) fn write_messages<W: Write>(out: &mut W, messages: &[CmdMessage]) -> io::Result<()> {
    for message in messages {
        match message.level {
            MessageLevel::Info => writeln!(out, "{}", message.content.dimmed())?,
            MessageLevel::Success => writeln!(out, "{}", message.content.green())?,
            MessageLevel::Warning => writeln!(out, "{}", message.content.yellow())?,
        }
    }
    Ok(())
}

pub(super) fn write_error<W: Write>(out: &mut W, err: &RosterError) -> io::Result<()> {
    writeln!(out, "{}", err.to_string().red())?;
    if let Some(hint) = error_hint(err) {
        writeln!(out, "{}", hint.dimmed())?;
    }
    Ok(())
}

pub(super) fn error_hint(err: &RosterError) -> Option<&'static str> {
    match err {
        RosterError::InvalidFormat(_) => Some(
            "Expected: <student_id as a number> <student_name> <course1;course2;...> <registration_date as YYYY-MM-DD>",
        ),
        RosterError::UnknownCourse(_) => {
            Some("Please make sure all courses are available (see courseslist).")
        }
        RosterError::MalformedRecord { .. } => {
            Some("The student store was edited by hand; fix or remove the line above.")
        }
        _ => None,
    }
}

pub(super) fn write_students<W: Write>(out: &mut W, students: &[Student]) -> io::Result<()> {
    if students.is_empty() {
        return Ok(());
    }

    let id_width = column_width("ID", students.iter().map(|s| s.id.as_str()));
    let name_width = column_width("Name", students.iter().map(|s| s.name.as_str()));
    let courses: Vec<String> = students.iter().map(|s| s.courses.join(" ")).collect();
    let courses_width = column_width("Courses", courses.iter().map(String::as_str));

    writeln!(
        out,
        "{}  {}  {}  {}",
        pad("ID", id_width).bold(),
        pad("Name", name_width).bold(),
        pad("Courses", courses_width).bold(),
        "Reg Date".bold()
    )?;

    for (student, course_line) in students.iter().zip(&courses) {
        writeln!(
            out,
            "{}  {}  {}  {}",
            pad(&student.id, id_width).yellow(),
            pad(&student.name, name_width),
            pad(course_line, courses_width),
            student.registration_date.dimmed()
        )?;
    }
    Ok(())
}

pub(super) fn write_courses<W: Write>(out: &mut W, courses: &[String]) -> io::Result<()> {
    if courses.is_empty() {
        return Ok(());
    }
    writeln!(out, "{}", "Available Courses:".bold())?;
    for course in courses {
        writeln!(out, "{}", course)?;
    }
    Ok(())
}

pub(super) fn write_rule<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", RULE.dimmed())
}

pub(super) fn write_help<W: Write>(out: &mut W) -> io::Result<()> {
    let rows = [
        (ADD_USAGE, ""),
        ("studentslist", "List all students"),
        ("studentdelete <student_id>", "Delete a student"),
        ("studentupdateid <student_id> <new_student_id>", "Change a student's id"),
        ("courseslist", "List all available courses"),
        ("help", "Prints user manual"),
        ("exit", "Exit the program"),
    ];
    let width = rows.iter().map(|(cmd, _)| cmd.width()).max().unwrap_or(0);

    writeln!(out, "{}", "Command syntaxes".bold())?;
    write_rule(out)?;
    for (cmd, desc) in rows {
        if desc.is_empty() {
            writeln!(out, " {}", cmd)?;
        } else {
            writeln!(out, " {}  {}", pad(cmd, width), desc.dimmed())?;
        }
    }
    write_rule(out)
}

pub(super) fn write_usage<W: Write>(out: &mut W, usage: &str) -> io::Result<()> {
    writeln!(out, "{} {}", "Invalid command. Usage:".red(), usage)
}

pub(super) fn add_usage() -> &'static str {
    ADD_USAGE
}

fn column_width<'a>(header: &str, values: impl Iterator<Item = &'a str>) -> usize {
    values.map(UnicodeWidthStr::width).fold(header.width(), usize::max)
}

fn pad(s: &str, width: usize) -> String {
    let padding = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(padding))
}
