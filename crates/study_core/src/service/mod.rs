//! Core use-case services.
//!
//! # Responsibility
//! - Expose the study desk store to hosts without leaking SQL.
//! - Project task rows into the kanban read model.

pub mod kanban;
pub mod store;
