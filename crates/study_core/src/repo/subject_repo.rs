//! Subject repository contract and SQLite implementation.
//!
//! # Invariants
//! - Position writes never validate that the subject exists; an unknown id
//!   updates zero rows and is not an error.

use crate::model::subject::{Position, Subject, SubjectId};
use crate::repo::RepoResult;
use rusqlite::{params, Connection, Row};

const SUBJECT_SELECT_SQL: &str = "SELECT
    id,
    name,
    color,
    icon,
    schedule,
    pos_x,
    pos_y
FROM subjects";

/// Repository interface for subject reads and position writes.
pub trait SubjectRepository {
    fn list_subjects(&self) -> RepoResult<Vec<Subject>>;
    fn get_subject(&self, id: SubjectId) -> RepoResult<Option<Subject>>;
    /// Returns the number of rows changed (0 or 1).
    fn update_position(&self, id: SubjectId, position: Position) -> RepoResult<usize>;
}

/// SQLite-backed subject repository.
pub struct SqliteSubjectRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteSubjectRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl SubjectRepository for SqliteSubjectRepository<'_> {
    fn list_subjects(&self) -> RepoResult<Vec<Subject>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{SUBJECT_SELECT_SQL} ORDER BY id ASC;"))?;
        let mut rows = stmt.query([])?;
        let mut subjects = Vec::new();
        while let Some(row) = rows.next()? {
            subjects.push(parse_subject_row(row)?);
        }
        Ok(subjects)
    }

    fn get_subject(&self, id: SubjectId) -> RepoResult<Option<Subject>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{SUBJECT_SELECT_SQL} WHERE id = ?1;"))?;
        let mut rows = stmt.query([id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_subject_row(row)?));
        }
        Ok(None)
    }

    fn update_position(&self, id: SubjectId, position: Position) -> RepoResult<usize> {
        let changed = self.conn.execute(
            "UPDATE subjects SET pos_x = ?1, pos_y = ?2 WHERE id = ?3;",
            params![position.x, position.y, id],
        )?;
        Ok(changed)
    }
}

// Nullable display columns fall back to the column defaults so rows written
// by older tools without defaults still load.
fn parse_subject_row(row: &Row<'_>) -> RepoResult<Subject> {
    Ok(Subject {
        id: row.get("id")?,
        name: row.get("name")?,
        color: row
            .get::<_, Option<String>>("color")?
            .unwrap_or_else(|| "#3498db".to_string()),
        icon: row
            .get::<_, Option<String>>("icon")?
            .unwrap_or_else(|| "BOOK".to_string()),
        schedule: row.get::<_, Option<String>>("schedule")?.unwrap_or_default(),
        position: Position::new(
            row.get::<_, Option<i64>>("pos_x")?.unwrap_or(0),
            row.get::<_, Option<i64>>("pos_y")?.unwrap_or(0),
        ),
    })
}

#[cfg(test)]
mod tests {
    use super::{SqliteSubjectRepository, SubjectRepository};
    use crate::db::open_db_in_memory;
    use crate::model::subject::Position;

    #[test]
    fn null_display_columns_use_defaults() {
        let conn = open_db_in_memory().unwrap();
        conn.execute(
            "INSERT INTO subjects (name, color, icon, schedule, pos_x, pos_y)
             VALUES ('Bare', NULL, NULL, NULL, NULL, NULL);",
            [],
        )
        .unwrap();

        let repo = SqliteSubjectRepository::new(&conn);
        let subject = repo.list_subjects().unwrap().remove(0);
        assert_eq!(subject.color, "#3498db");
        assert_eq!(subject.icon, "BOOK");
        assert_eq!(subject.schedule, "");
        assert_eq!(subject.position, Position::ORIGIN);
    }

    #[test]
    fn update_position_on_unknown_id_changes_nothing() {
        let conn = open_db_in_memory().unwrap();
        let repo = SqliteSubjectRepository::new(&conn);
        assert_eq!(repo.update_position(42, Position::new(1, 2)).unwrap(), 0);
        assert_eq!(repo.get_subject(42).unwrap(), None);
    }
}
