//! Domain model for subjects and tasks.
//!
//! # Responsibility
//! - Define the records read from and written to the study desk store.
//!
//! # Invariants
//! - Identities are SQLite integer row ids and are never reused.
//! - References between records are by id only, without ownership.

pub mod subject;
pub mod task;
