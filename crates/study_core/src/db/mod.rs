//! SQLite storage bootstrap, schema and seed data.
//!
//! # Responsibility
//! - Open and configure SQLite connections for the study desk.
//! - Create the schema on demand and seed default subjects once.
//!
//! # Invariants
//! - Schema creation is `CREATE TABLE IF NOT EXISTS` only; there is no
//!   version tracking.
//! - Foreign keys are declared but enforcement is switched off on open, so
//!   task/attachment parents behave as weak references.

use std::error::Error;
use std::fmt::{Display, Formatter};

mod open;
pub mod schema;
pub mod seed;

pub use open::{open_db, open_db_in_memory};

pub type DbResult<T> = Result<T, DbError>;

#[derive(Debug)]
pub enum DbError {
    Sqlite(rusqlite::Error),
}

impl Display for DbError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "{err}"),
        }
    }
}

impl Error for DbError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
        }
    }
}

impl From<rusqlite::Error> for DbError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}
