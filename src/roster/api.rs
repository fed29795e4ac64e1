//! # API Facade
//!
//! A thin facade over the command layer and the single entry point for every
//! roster operation, whichever UI is driving it.
//!
//! The facade dispatches to `commands/*.rs` and returns their `Result<CmdResult>`
//! untouched. It holds no state beyond the store and the course source, and it
//! never prints.
//!
//! `RosterApi<S, C>` is generic over both backends:
//! - Production: `RosterApi<FileStore, FileCatalog>`
//! - Testing: `RosterApi<InMemoryStore, StaticCatalog>`

use crate::catalog::CourseSource;
use crate::commands;
use crate::error::Result;
use crate::store::StudentStore;

pub struct RosterApi<S: StudentStore, C: CourseSource> {
    store: S,
    catalog: C,
}

impl<S: StudentStore, C: CourseSource> RosterApi<S, C> {
    pub fn new(store: S, catalog: C) -> Self {
        Self { store, catalog }
    }

    pub fn list_students(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.store)
    }

    pub fn add_student(&mut self, new: commands::NewStudent) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.store, &self.catalog, new)
    }

    pub fn delete_student(&mut self, id: &str) -> Result<commands::CmdResult> {
        commands::delete::run(&mut self.store, id)
    }

    pub fn update_student_id(
        &mut self,
        old_id: &str,
        new_id: &str,
    ) -> Result<commands::CmdResult> {
        commands::update_id::run(&mut self.store, old_id, new_id)
    }

    pub fn list_courses(&self) -> Result<commands::CmdResult> {
        commands::courses::run(&self.catalog)
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

pub use commands::{CmdMessage, CmdResult, MessageLevel, NewStudent};
