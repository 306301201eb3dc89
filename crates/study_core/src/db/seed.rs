//! Default subjects inserted on first start.
//!
//! # Invariants
//! - Seeding only happens when `subjects` is empty.
//! - All seed rows are inserted in one transaction.
//! - Seed rows keep the column default position (0, 0).

use super::DbResult;
use log::info;
use rusqlite::{params, Connection, TransactionBehavior};

/// Display fields of one seeded subject.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubjectSeed {
    pub name: &'static str,
    pub color: &'static str,
    pub icon: &'static str,
    pub schedule: &'static str,
}

pub const SEED_SUBJECTS: [SubjectSeed; 5] = [
    SubjectSeed {
        name: "Intro to Biology (ITB)",
        color: "#2ecc71",
        icon: "BIOTECH",
        schedule: "24/11 (3pm - 6pm)",
    },
    SubjectSeed {
        name: "Algo Analysis (AAD)",
        color: "#3498db",
        icon: "CODE",
        schedule: "27/11 (3pm - 6pm)",
    },
    SubjectSeed {
        name: "Probability (PRP)",
        color: "#9b59b6",
        icon: "TIMELINE",
        schedule: "28/11 (3pm - 6pm)",
    },
    SubjectSeed {
        name: "Data & Apps (DnA)",
        color: "#e67e22",
        icon: "STORAGE",
        schedule: "29/11 (3pm - 6pm)",
    },
    SubjectSeed {
        name: "Quantum Mech (QM)",
        color: "#34495e",
        icon: "SCIENCE",
        schedule: "1/12 (9am - 12pm)",
    },
];

/// Inserts [`SEED_SUBJECTS`] when the subjects table has no rows.
///
/// Returns the number of inserted rows (0 when the table was already
/// populated).
pub fn seed_subjects_if_empty(conn: &mut Connection) -> DbResult<usize> {
    let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;
    let existing: i64 = tx.query_row("SELECT COUNT(*) FROM subjects;", [], |row| row.get(0))?;
    if existing > 0 {
        return Ok(0);
    }

    {
        let mut stmt = tx.prepare(
            "INSERT INTO subjects (name, color, icon, schedule) VALUES (?1, ?2, ?3, ?4);",
        )?;
        for seed in &SEED_SUBJECTS {
            stmt.execute(params![seed.name, seed.color, seed.icon, seed.schedule])?;
        }
    }
    tx.commit()?;

    info!(
        "event=seed_subjects module=db status=ok inserted={}",
        SEED_SUBJECTS.len()
    );
    Ok(SEED_SUBJECTS.len())
}

#[cfg(test)]
mod tests {
    use super::{seed_subjects_if_empty, SEED_SUBJECTS};
    use crate::db::open_db_in_memory;

    #[test]
    fn seeding_twice_inserts_once() {
        let mut conn = open_db_in_memory().unwrap();
        assert_eq!(seed_subjects_if_empty(&mut conn).unwrap(), SEED_SUBJECTS.len());
        assert_eq!(seed_subjects_if_empty(&mut conn).unwrap(), 0);

        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM subjects;", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 5);
    }

    #[test]
    fn seeding_skips_a_table_with_user_rows() {
        let mut conn = open_db_in_memory().unwrap();
        conn.execute("INSERT INTO subjects (name) VALUES ('Custom');", [])
            .unwrap();

        assert_eq!(seed_subjects_if_empty(&mut conn).unwrap(), 0);
        let (color, icon, schedule): (String, String, String) = conn
            .query_row(
                "SELECT color, icon, schedule FROM subjects WHERE name = 'Custom';",
                [],
                |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)),
            )
            .unwrap();
        assert_eq!(color, "#3498db");
        assert_eq!(icon, "BOOK");
        assert_eq!(schedule, "");
    }
}
