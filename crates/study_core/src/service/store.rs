//! Persistence gateway over the study desk database file.
//!
//! # Responsibility
//! - Own the database path and the only read/write path to it.
//! - Initialize the schema and seed subjects on startup.
//! - Act as the canvas position sink.
//!
//! # Invariants
//! - Every call opens its own connection and drops it before returning;
//!   nothing is shared across calls.
//! - `initialize` is safe to run on every process start.

use crate::canvas::PositionSink;
use crate::config::StudyConfig;
use crate::db::open_db;
use crate::db::seed::seed_subjects_if_empty;
use crate::model::subject::{Position, Subject, SubjectId};
use crate::model::task::{Task, TaskId};
use crate::repo::subject_repo::{SqliteSubjectRepository, SubjectRepository};
use crate::repo::task_repo::{SqliteTaskRepository, TaskRepository};
use crate::repo::{RepoError, RepoResult};
use log::{debug, info, warn};
use rusqlite::Connection;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct StudyStore {
    db_path: PathBuf,
}

impl StudyStore {
    pub fn new(db_path: impl Into<PathBuf>) -> Self {
        Self {
            db_path: db_path.into(),
        }
    }

    pub fn from_config(config: &StudyConfig) -> Self {
        Self::new(config.db_path.clone())
    }

    pub fn db_path(&self) -> &Path {
        &self.db_path
    }

    /// Creates missing tables and seeds the default subjects when none exist.
    ///
    /// Returns how many seed rows were inserted.
    pub fn initialize(&self) -> RepoResult<usize> {
        let inserted = self.with_connection(|conn| Ok(seed_subjects_if_empty(conn)?))?;
        info!(
            "event=store_init module=store status=ok seeded={} path={}",
            inserted,
            self.db_path.display()
        );
        Ok(inserted)
    }

    /// Stores a subject position, truncating fractional coordinates.
    ///
    /// An unknown id is accepted and changes nothing. NaN or infinite
    /// coordinates are rejected before the database is touched.
    pub fn update_position(&self, subject_id: SubjectId, x: f64, y: f64) -> RepoResult<()> {
        let position = Position::try_truncated(x, y).ok_or_else(|| {
            warn!(
                "event=position_update module=store status=error subject_id={} error_code=non_finite_coordinate",
                subject_id
            );
            RepoError::NonFiniteCoordinate { x, y }
        })?;
        self.write_position(subject_id, position)
    }

    pub fn list_subjects(&self) -> RepoResult<Vec<Subject>> {
        self.with_connection(|conn| SqliteSubjectRepository::new(conn).list_subjects())
    }

    pub fn get_subject(&self, subject_id: SubjectId) -> RepoResult<Option<Subject>> {
        self.with_connection(|conn| SqliteSubjectRepository::new(conn).get_subject(subject_id))
    }

    /// Inserts a `Todo` task and returns its id.
    pub fn add_task(&self, title: &str, subject_id: Option<SubjectId>) -> RepoResult<TaskId> {
        let task_id =
            self.with_connection(|conn| SqliteTaskRepository::new(conn).add_task(title, subject_id))?;
        info!(
            "event=task_add module=store status=ok task_id={} subject_id={:?}",
            task_id, subject_id
        );
        Ok(task_id)
    }

    pub fn list_tasks(&self) -> RepoResult<Vec<Task>> {
        self.with_connection(|conn| SqliteTaskRepository::new(conn).list_tasks())
    }

    fn write_position(&self, subject_id: SubjectId, position: Position) -> RepoResult<()> {
        let changed = self.with_connection(|conn| {
            SqliteSubjectRepository::new(conn).update_position(subject_id, position)
        })?;
        debug!(
            "event=position_update module=store status=ok subject_id={} x={} y={} changed={}",
            subject_id, position.x, position.y, changed
        );
        Ok(())
    }

    fn with_connection<T>(
        &self,
        f: impl FnOnce(&mut Connection) -> RepoResult<T>,
    ) -> RepoResult<T> {
        let mut conn = open_db(&self.db_path)?;
        f(&mut conn)
    }
}

impl PositionSink for StudyStore {
    fn persist(&self, subject_id: SubjectId, position: Position) -> RepoResult<()> {
        self.write_position(subject_id, position)
    }
}
