//! Terminal front end: clap argument parsing, the interactive shell, and
//! colored rendering of command results.

mod args;
mod print;
mod shell;

use args::{Cli, Commands};
use clap::Parser;
use print::{error_hint, write_courses, write_messages, write_students};
use roster::api::{NewStudent, RosterApi};
use roster::catalog::FileCatalog;
use roster::codec::split_courses;
use roster::config::RosterConfig;
use roster::error::{Result, RosterError};
use roster::store::fs::FileStore;
use shell::Shell;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "ROSTER_LOG";

struct AppContext {
    api: RosterApi<FileStore, FileCatalog>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::List { json }) => handle_list(&ctx, json),
        Some(Commands::Add {
            id,
            name,
            courses,
            date,
        }) => handle_add(&mut ctx, id, name, courses, date),
        Some(Commands::Delete { id }) => handle_delete(&mut ctx, &id),
        Some(Commands::UpdateId { old_id, new_id }) => {
            handle_update_id(&mut ctx, &old_id, &new_id)
        }
        Some(Commands::Courses) => handle_courses(&ctx),
        Some(Commands::Shell) | None => handle_shell(&mut ctx),
    }
}

/// Print a one-shot error with its hint, for `main`.
pub fn report_error(err: &RosterError) {
    eprintln!("Error: {}", err);
    if let Some(hint) = error_hint(err) {
        eprintln!("{}", hint);
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));

    // A second init (e.g. in tests) is not an error worth surfacing.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let config = RosterConfig::discover(&cwd)?;

    let students_path = cli
        .students
        .clone()
        .unwrap_or_else(|| config.students_path(&cwd));
    let courses_path = cli
        .courses
        .clone()
        .unwrap_or_else(|| config.courses_path(&cwd));
    tracing::debug!(
        students = %students_path.display(),
        courses = %courses_path.display(),
        "resolved store paths"
    );

    let api = RosterApi::new(FileStore::new(students_path), FileCatalog::new(courses_path));
    Ok(AppContext { api })
}

fn handle_list(ctx: &AppContext, json: bool) -> Result<()> {
    let result = ctx.api.list_students()?;
    let mut out = io::stdout().lock();

    if json {
        serde_json::to_writer_pretty(&mut out, &result.listed_students)?;
        writeln!(out)?;
        return Ok(());
    }

    write_students(&mut out, &result.listed_students)?;
    write_messages(&mut out, &result.messages)?;
    Ok(())
}

fn handle_add(
    ctx: &mut AppContext,
    id: String,
    name: String,
    courses: String,
    date: String,
) -> Result<()> {
    let new = NewStudent::new(id, name, split_courses(&courses), date);
    let result = ctx.api.add_student(new)?;
    write_messages(&mut io::stdout().lock(), &result.messages)?;
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, id: &str) -> Result<()> {
    let result = ctx.api.delete_student(id)?;
    write_messages(&mut io::stdout().lock(), &result.messages)?;
    Ok(())
}

fn handle_update_id(ctx: &mut AppContext, old_id: &str, new_id: &str) -> Result<()> {
    let result = ctx.api.update_student_id(old_id, new_id)?;
    write_messages(&mut io::stdout().lock(), &result.messages)?;
    Ok(())
}

fn handle_courses(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.list_courses()?;
    let mut out = io::stdout().lock();
    write_courses(&mut out, &result.listed_courses)?;
    write_messages(&mut out, &result.messages)?;
    Ok(())
}

fn handle_shell(ctx: &mut AppContext) -> Result<()> {
    let stdin = io::stdin().lock();
    let stdout = io::stdout().lock();
    Shell::new(&mut ctx.api, stdin, stdout).run()?;
    Ok(())
}
