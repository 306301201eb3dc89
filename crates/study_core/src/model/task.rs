//! Task model for the kanban list.

use crate::model::subject::SubjectId;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Row id of a task.
pub type TaskId = i64;

/// Kanban lifecycle state of a task.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaskStatus {
    #[default]
    #[serde(rename = "Todo")]
    Todo,
    #[serde(rename = "In Progress")]
    InProgress,
    #[serde(rename = "Done")]
    Done,
}

impl TaskStatus {
    /// Board column order.
    pub const ALL: [TaskStatus; 3] = [Self::Todo, Self::InProgress, Self::Done];

    /// Text stored in `tasks.status`.
    pub fn as_db_str(self) -> &'static str {
        match self {
            Self::Todo => "Todo",
            Self::InProgress => "In Progress",
            Self::Done => "Done",
        }
    }

    pub fn from_db_str(value: &str) -> Option<Self> {
        match value {
            "Todo" => Some(Self::Todo),
            "In Progress" => Some(Self::InProgress),
            "Done" => Some(Self::Done),
            _ => None,
        }
    }
}

impl Display for TaskStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_db_str())
    }
}

/// One row of `tasks`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    /// Weak reference; the subject may not exist.
    pub subject_id: Option<SubjectId>,
    pub title: String,
    pub status: TaskStatus,
    /// Free-text due date as entered by the user.
    pub due_date: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::TaskStatus;

    #[test]
    fn db_text_matches_all_variants() {
        for status in TaskStatus::ALL {
            assert_eq!(TaskStatus::from_db_str(status.as_db_str()), Some(status));
        }
        assert_eq!(TaskStatus::from_db_str("todo"), None);
    }

    #[test]
    fn default_status_is_todo() {
        assert_eq!(TaskStatus::default(), TaskStatus::Todo);
    }
}
