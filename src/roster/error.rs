use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RosterError {
    #[error("Invalid data format: {0}")]
    InvalidFormat(String),

    #[error("Student with id {0} already exists")]
    DuplicateId(String),

    #[error("Unknown course(s): {}", .0.join(", "))]
    UnknownCourse(Vec<String>),

    #[error("Student with id {0} not found")]
    NotFound(String),

    #[error("Malformed record on line {line}: {reason}")]
    MalformedRecord { line: usize, reason: String },

    #[error("Store unavailable at {}: {source}", .path.display())]
    StoreUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, RosterError>;
