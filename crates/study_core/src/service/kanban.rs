//! Kanban board projection of the task list.

use crate::model::task::{Task, TaskStatus};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KanbanColumn {
    pub status: TaskStatus,
    pub tasks: Vec<Task>,
}

/// Tasks grouped into one column per status, in `TaskStatus::ALL` order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KanbanBoard {
    pub columns: Vec<KanbanColumn>,
}

impl KanbanBoard {
    /// Groups tasks by status. Empty columns are kept and task order inside a
    /// column follows the input order.
    pub fn from_tasks(tasks: impl IntoIterator<Item = Task>) -> Self {
        let mut columns: Vec<KanbanColumn> = TaskStatus::ALL
            .iter()
            .map(|status| KanbanColumn {
                status: *status,
                tasks: Vec::new(),
            })
            .collect();

        for task in tasks {
            if let Some(column) = columns.iter_mut().find(|column| column.status == task.status) {
                column.tasks.push(task);
            }
        }

        Self { columns }
    }

    pub fn column(&self, status: TaskStatus) -> Option<&KanbanColumn> {
        self.columns.iter().find(|column| column.status == status)
    }

    pub fn total_tasks(&self) -> usize {
        self.columns.iter().map(|column| column.tasks.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::KanbanBoard;
    use crate::model::task::{Task, TaskStatus};

    fn task(id: i64, status: TaskStatus) -> Task {
        Task {
            id,
            subject_id: None,
            title: format!("task {id}"),
            status,
            due_date: None,
        }
    }

    #[test]
    fn empty_board_keeps_all_columns() {
        let board = KanbanBoard::from_tasks(Vec::new());
        let statuses: Vec<TaskStatus> = board.columns.iter().map(|c| c.status).collect();
        assert_eq!(statuses, TaskStatus::ALL.to_vec());
        assert_eq!(board.total_tasks(), 0);
    }

    #[test]
    fn tasks_are_grouped_in_input_order() {
        let board = KanbanBoard::from_tasks(vec![
            task(1, TaskStatus::Done),
            task(2, TaskStatus::Todo),
            task(3, TaskStatus::Done),
            task(4, TaskStatus::InProgress),
        ]);

        let done: Vec<i64> = board
            .column(TaskStatus::Done)
            .unwrap()
            .tasks
            .iter()
            .map(|t| t.id)
            .collect();
        assert_eq!(done, vec![1, 3]);
        assert_eq!(board.column(TaskStatus::Todo).unwrap().tasks.len(), 1);
        assert_eq!(board.total_tasks(), 4);
    }

    #[test]
    fn board_serializes_status_labels() {
        let board = KanbanBoard::from_tasks(vec![task(1, TaskStatus::InProgress)]);
        let json = serde_json::to_value(&board).unwrap();
        assert_eq!(json["columns"][1]["status"], "In Progress");
        assert_eq!(json["columns"][1]["tasks"][0]["title"], "task 1");
    }
}
