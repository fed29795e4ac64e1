//! The interactive `Console >` loop.
//!
//! One line is one command. The first word picks the command (case-insensitive),
//! the rest are whitespace-separated arguments; extra arguments are ignored.
//! Errors are printed and the loop carries on, including lines that are not
//! UTF-8. Only `exit` or end of input stops it.

use super::print::{
    add_usage, write_courses, write_error, write_help, write_messages, write_rule,
    write_students, write_usage,
};
use roster::api::{CmdResult, NewStudent, RosterApi};
use roster::catalog::CourseSource;
use roster::codec::split_courses;
use roster::error::Result;
use roster::store::StudentStore;
use std::io::{self, BufRead, Write};

const PROMPT: &str = "Console >";

pub(super) struct Shell<'a, S: StudentStore, C: CourseSource, R: BufRead, W: Write> {
    api: &'a mut RosterApi<S, C>,
    input: R,
    output: W,
}

enum Flow {
    Continue,
    Exit,
}

impl<'a, S: StudentStore, C: CourseSource, R: BufRead, W: Write> Shell<'a, S, C, R, W> {
    pub(super) fn new(api: &'a mut RosterApi<S, C>, input: R, output: W) -> Self {
        Self { api, input, output }
    }

    pub(super) fn run(&mut self) -> io::Result<()> {
        writeln!(self.output, "Need help? Type 'help' then press Enter key.")?;

        let mut buf = Vec::new();
        loop {
            write!(self.output, "{}", PROMPT)?;
            self.output.flush()?;

            buf.clear();
            if self.input.read_until(b'\n', &mut buf)? == 0 {
                writeln!(self.output)?;
                break;
            }

            let Ok(line) = std::str::from_utf8(&buf) else {
                tracing::debug!(bytes = buf.len(), "shell input is not UTF-8");
                writeln!(self.output, "Input is not valid UTF-8; line ignored.")?;
                continue;
            };

            if let Flow::Exit = self.dispatch(line)? {
                break;
            }
        }
        Ok(())
    }

    fn dispatch(&mut self, line: &str) -> io::Result<Flow> {
        let mut words = line.split_whitespace();
        let Some(command) = words.next() else {
            return Ok(Flow::Continue);
        };
        let args: Vec<&str> = words.collect();
        tracing::debug!(command, ?args, "shell command");

        match command.to_lowercase().as_str() {
            "studentslist" => {
                write_rule(&mut self.output)?;
                let result = self.api.list_students();
                self.report(result, true)?;
                write_rule(&mut self.output)?;
            }
            "studentadd" => match args.as_slice() {
                [id, name, courses, date, ..] => {
                    let new = NewStudent::new(*id, *name, split_courses(courses), *date);
                    let result = self.api.add_student(new);
                    self.report(result, false)?;
                }
                _ => write_usage(&mut self.output, add_usage())?,
            },
            "studentdelete" => match args.as_slice() {
                [id, ..] => {
                    let result = self.api.delete_student(id);
                    self.report(result, false)?;
                }
                _ => write_usage(&mut self.output, "studentdelete <student_id>")?,
            },
            "studentupdateid" => match args.as_slice() {
                [old_id, new_id, ..] => {
                    let result = self.api.update_student_id(old_id, new_id);
                    self.report(result, false)?;
                }
                _ => write_usage(
                    &mut self.output,
                    "studentupdateid <student_id> <new_student_id>",
                )?,
            },
            "courseslist" => {
                write_rule(&mut self.output)?;
                let result = self.api.list_courses();
                self.report(result, true)?;
                write_rule(&mut self.output)?;
            }
            "help" => write_help(&mut self.output)?,
            "exit" => return Ok(Flow::Exit),
            _ => {
                writeln!(
                    self.output,
                    "Invalid command. Below is the help option to provide you a list of commands."
                )?;
                write_help(&mut self.output)?;
            }
        }
        Ok(Flow::Continue)
    }

    fn report(&mut self, result: Result<CmdResult>, show_listing: bool) -> io::Result<()> {
        match result {
            Ok(result) => {
                if show_listing {
                    write_students(&mut self.output, &result.listed_students)?;
                    write_courses(&mut self.output, &result.listed_courses)?;
                }
                write_messages(&mut self.output, &result.messages)
            }
            Err(e) => write_error(&mut self.output, &e),
        }
    }
}
