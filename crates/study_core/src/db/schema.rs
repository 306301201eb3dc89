//! Table definitions for subjects, tasks and attachments.

use super::DbResult;
use rusqlite::Connection;

/// Tables created by [`ensure_schema`], in creation order.
pub const TABLES: [&str; 3] = ["subjects", "tasks", "attachments"];

pub const SCHEMA_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS subjects (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    color TEXT DEFAULT '#3498db',
    icon TEXT DEFAULT 'BOOK',
    schedule TEXT DEFAULT '',
    pos_x INTEGER DEFAULT 0,
    pos_y INTEGER DEFAULT 0
);

CREATE TABLE IF NOT EXISTS tasks (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    subject_id INTEGER,
    title TEXT NOT NULL,
    status TEXT DEFAULT 'Todo',
    due_date TEXT,
    FOREIGN KEY (subject_id) REFERENCES subjects (id)
);

CREATE TABLE IF NOT EXISTS attachments (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    task_id INTEGER,
    file_name TEXT,
    file_path TEXT,
    FOREIGN KEY (task_id) REFERENCES tasks (id)
);
"#;

/// Creates any missing table. Existing tables are left untouched.
pub fn ensure_schema(conn: &Connection) -> DbResult<()> {
    conn.execute_batch(SCHEMA_SQL)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{ensure_schema, TABLES};
    use rusqlite::Connection;

    #[test]
    fn ensure_schema_is_repeatable() {
        let conn = Connection::open_in_memory().unwrap();
        ensure_schema(&conn).unwrap();
        ensure_schema(&conn).unwrap();

        for table in TABLES {
            let exists: i64 = conn
                .query_row(
                    "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = ?1);",
                    [table],
                    |row| row.get(0),
                )
                .unwrap();
            assert_eq!(exists, 1, "table {table} does not exist");
        }
    }
}
