use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "roster")]
#[command(version)]
#[command(about = "Command-line student record manager", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Student store file (overrides roster.json)
    #[arg(long, global = true, value_name = "PATH")]
    pub students: Option<PathBuf>,

    /// Course catalog file (overrides roster.json)
    #[arg(id = "courses_file", long = "courses", global = true, value_name = "PATH")]
    pub courses: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List students sorted by name
    #[command(alias = "ls")]
    List {
        /// Print students as JSON
        #[arg(long)]
        json: bool,
    },

    /// Add a student
    Add {
        /// Numeric student id
        id: String,

        /// Student name
        name: String,

        /// Courses separated by ';' (e.g. "Math;CS")
        courses: String,

        /// Registration date, YYYY-MM-DD
        date: String,
    },

    /// Delete a student by id
    #[command(alias = "rm")]
    Delete {
        /// Id of the student
        id: String,
    },

    /// Change a student's id
    UpdateId {
        /// Current id
        old_id: String,

        /// New id
        new_id: String,
    },

    /// List available courses
    Courses,

    /// Start the interactive console (default)
    Shell,
}
