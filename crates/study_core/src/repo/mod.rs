//! Repository layer over the study desk SQLite tables.
//!
//! # Responsibility
//! - Define use-case oriented data access contracts.
//! - Keep SQL details out of the gateway and canvas layers.
//!
//! # Invariants
//! - Read paths reject invalid persisted values instead of masking them.
//! - List queries are ordered by `id ASC`.

use crate::db::DbError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod subject_repo;
pub mod task_repo;

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for subject and task persistence.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    InvalidData(String),
    /// A coordinate handed to a write was NaN or infinite.
    NonFiniteCoordinate { x: f64, y: f64 },
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted data: {message}"),
            Self::NonFiniteCoordinate { x, y } => {
                write!(f, "position ({x}, {y}) is not a finite coordinate pair")
            }
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::InvalidData(_) | Self::NonFiniteCoordinate { .. } => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}
