use crate::task::{Task, TaskStatus};

/// Ordered sub-sequence of `tasks` whose status equals `status`.
///
/// Relative order from the source collection is preserved. Pure; a task whose
/// stored status is outside the known four matches no bucket.
pub fn tasks_by_status(tasks: &[Task], status: TaskStatus) -> Vec<&Task> {
    tasks.iter().filter(|t| t.has_status(status)).collect()
}

/// The board's four fixed columns, derived from one flat task collection.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct BoardColumns<'a> {
    pub pending: Vec<&'a Task>,
    pub in_progress: Vec<&'a Task>,
    pub completed: Vec<&'a Task>,
    pub closed: Vec<&'a Task>,
}

impl<'a> BoardColumns<'a> {
    pub fn partition(tasks: &'a [Task]) -> Self {
        let mut columns = Self::default();
        for task in tasks {
            match task.known_status() {
                Some(TaskStatus::Pending) => columns.pending.push(task),
                Some(TaskStatus::InProgress) => columns.in_progress.push(task),
                Some(TaskStatus::Completed) => columns.completed.push(task),
                Some(TaskStatus::Closed) => columns.closed.push(task),
                None => {}
            }
        }
        columns
    }

    pub fn column(&self, status: TaskStatus) -> &[&'a Task] {
        match status {
            TaskStatus::Pending => &self.pending,
            TaskStatus::InProgress => &self.in_progress,
            TaskStatus::Completed => &self.completed,
            TaskStatus::Closed => &self.closed,
        }
    }

    /// All bucketed tasks, flattened in fixed column order.
    pub fn flatten(&self) -> Vec<&'a Task> {
        TaskStatus::ALL
            .iter()
            .flat_map(|status| self.column(*status).iter().copied())
            .collect()
    }

    pub fn len(&self) -> usize {
        TaskStatus::ALL
            .iter()
            .map(|status| self.column(*status).len())
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
