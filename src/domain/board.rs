use crate::domain::id::{BoardId, ColumnId, TaskId};
use crate::domain::task::Task;
use serde::{Deserialize, Serialize};

/// Translation keys of the columns every new board starts with, in order
pub const DEFAULT_COLUMN_KEYS: [&str; 3] = [
    "defaultColumnTodo",
    "defaultColumnInProgress",
    "defaultColumnDone",
];

/// A stage of a board holding an ordered list of tasks
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub id: ColumnId,
    pub name: String,
    pub tasks: Vec<Task>,
}

impl Column {
    pub fn new(name: String) -> Self {
        Self {
            id: ColumnId::generate(),
            name,
            tasks: Vec::new(),
        }
    }

    /// Position of a task within this column
    pub fn task_index(&self, task_id: &TaskId) -> Option<usize> {
        self.tasks.iter().position(|t| &t.id == task_id)
    }

    pub fn task(&self, task_id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| &t.id == task_id)
    }
}

/// A kanban board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    pub id: BoardId,
    pub name: String,
    pub columns: Vec<Column>,
}

impl Board {
    /// Creates a board with one empty column per given name
    pub fn new<I>(name: String, column_names: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        Self {
            id: BoardId::generate(),
            name,
            columns: column_names.into_iter().map(Column::new).collect(),
        }
    }

    pub fn column(&self, column_id: &ColumnId) -> Option<&Column> {
        self.columns.iter().find(|c| &c.id == column_id)
    }

    pub fn column_mut(&mut self, column_id: &ColumnId) -> Option<&mut Column> {
        self.columns.iter_mut().find(|c| &c.id == column_id)
    }

    pub fn column_index(&self, column_id: &ColumnId) -> Option<usize> {
        self.columns.iter().position(|c| &c.id == column_id)
    }

    /// Total number of tasks across all columns
    pub fn task_count(&self) -> usize {
        self.columns.iter().map(|c| c.tasks.len()).sum()
    }
}
