//! # Roster Architecture
//!
//! Roster is a small **student record library** with a command-line client on top.
//! Records live in a flat delimited file, one student per line, and every operation
//! re-reads that file from disk. There is no cache and no index.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - clap subcommands and the interactive `Console >` shell   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Generic over the student store and course source        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - list, add, delete, update-id, courses                    │
//! │  - Validation, duplicate detection, catalog checks          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/, catalog.rs, codec.rs)               │
//! │  - StudentStore trait: FileStore, InMemoryStore             │
//! │  - CourseSource trait: FileCatalog, StaticCatalog           │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Store Format
//!
//! ```text
//! students.csv   id,name,course1;course2;...,YYYY-MM-DD   (one record per line)
//! courses.csv    one course name per line
//! ```
//!
//! Fields are not quoted or escaped, so names and courses may not contain the
//! delimiters. New records are checked for this before they are written.
//!
//! ## Mutation
//!
//! Appends go straight to the end of the store. Delete and id-update rewrite the
//! whole store into a temporary file next to it and rename that file over the
//! original, so a failed rewrite never leaves the store truncated.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each operation
//! - [`store`]: Student store abstraction and implementations
//! - [`catalog`]: Course catalog loading and membership checks
//! - [`codec`]: Line format for student records
//! - [`validate`]: Field validators for ids and dates
//! - [`model`]: The `Student` record
//! - [`config`]: File locations
//! - [`error`]: Error types

pub mod api;
pub mod catalog;
pub mod codec;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod store;
pub mod validate;
