//! Task repository contract and SQLite implementation.
//!
//! # Invariants
//! - New tasks always start as `TaskStatus::Todo`.
//! - `subject_id` is stored as given; it is not checked against `subjects`.

use crate::model::subject::SubjectId;
use crate::model::task::{Task, TaskId, TaskStatus};
use crate::repo::{RepoError, RepoResult};
use rusqlite::{params, Connection, Row};

/// Repository interface for the kanban task list.
pub trait TaskRepository {
    fn add_task(&self, title: &str, subject_id: Option<SubjectId>) -> RepoResult<TaskId>;
    fn list_tasks(&self) -> RepoResult<Vec<Task>>;
}

/// SQLite-backed task repository.
pub struct SqliteTaskRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteTaskRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl TaskRepository for SqliteTaskRepository<'_> {
    fn add_task(&self, title: &str, subject_id: Option<SubjectId>) -> RepoResult<TaskId> {
        self.conn.execute(
            "INSERT INTO tasks (title, status, subject_id) VALUES (?1, ?2, ?3);",
            params![title, TaskStatus::Todo.as_db_str(), subject_id],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    fn list_tasks(&self) -> RepoResult<Vec<Task>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, subject_id, title, status, due_date
             FROM tasks
             ORDER BY id ASC;",
        )?;
        let mut rows = stmt.query([])?;
        let mut tasks = Vec::new();
        while let Some(row) = rows.next()? {
            tasks.push(parse_task_row(row)?);
        }
        Ok(tasks)
    }
}

fn parse_task_row(row: &Row<'_>) -> RepoResult<Task> {
    let status = match row.get::<_, Option<String>>("status")? {
        Some(value) => TaskStatus::from_db_str(&value).ok_or_else(|| {
            RepoError::InvalidData(format!("invalid task status `{value}` in tasks.status"))
        })?,
        None => TaskStatus::default(),
    };

    Ok(Task {
        id: row.get("id")?,
        subject_id: row.get("subject_id")?,
        title: row.get("title")?,
        status,
        due_date: row.get("due_date")?,
    })
}

#[cfg(test)]
mod tests {
    use super::{SqliteTaskRepository, TaskRepository};
    use crate::db::open_db_in_memory;
    use crate::model::task::TaskStatus;
    use crate::repo::RepoError;

    #[test]
    fn add_task_returns_increasing_ids() {
        let conn = open_db_in_memory().unwrap();
        let repo = SqliteTaskRepository::new(&conn);
        let first = repo.add_task("first", None).unwrap();
        let second = repo.add_task("second", Some(1)).unwrap();
        assert!(second > first);
    }

    #[test]
    fn list_rejects_unknown_status_text() {
        let conn = open_db_in_memory().unwrap();
        conn.execute(
            "INSERT INTO tasks (title, status) VALUES ('odd', 'Blocked');",
            [],
        )
        .unwrap();

        let err = SqliteTaskRepository::new(&conn).list_tasks().unwrap_err();
        assert!(matches!(err, RepoError::InvalidData(message) if message.contains("Blocked")));
    }

    #[test]
    fn null_status_reads_as_todo() {
        let conn = open_db_in_memory().unwrap();
        conn.execute("INSERT INTO tasks (title, status) VALUES ('x', NULL);", [])
            .unwrap();
        let tasks = SqliteTaskRepository::new(&conn).list_tasks().unwrap();
        assert_eq!(tasks[0].status, TaskStatus::Todo);
    }
}
