//! Core domain logic for the study desk.
//! Subjects live on a draggable card canvas; tasks feed a kanban board. Both
//! persist to one local SQLite file.

pub mod canvas;
pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use canvas::card::{CardView, DragEvent, DragState, SubjectCard};
pub use canvas::controller::{apply_fallback_layout, CanvasController};
pub use canvas::grid::{CanvasPoint, GridSpec};
pub use canvas::{CanvasError, PositionSink, SnapToggle};
pub use config::{ConfigError, StudyConfig};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::subject::{Position, Subject, SubjectId};
pub use model::task::{Task, TaskId, TaskStatus};
pub use repo::{RepoError, RepoResult};
pub use service::kanban::{KanbanBoard, KanbanColumn};
pub use service::store::StudyStore;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
