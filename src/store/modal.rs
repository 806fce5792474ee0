//! Editing slot operations.
//!
//! Opening a task places a detached copy in the slot. Changes to that copy
//! reach the board only through [`Store::save_task_changes`]. Save and delete
//! close the slot on every path, including when their target has vanished.

use crate::{
    domain::{
        validation::{normalize_description, validate_task_title},
        ColumnId, Task, TaskId, TaskUpdate,
    },
    error::Result,
    store::{Store, StoreEvent},
};

/// A task opened for editing, detached from the board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSession {
    /// ID of the stored task this session edits
    pub task_id: TaskId,
    /// Copy of the task as it was when opened, plus any in-modal edits
    pub task: Task,
    /// Column the task was opened from
    pub column_id: ColumnId,
}

impl EditSession {
    pub fn task_mut(&mut self) -> &mut Task {
        &mut self.task
    }

    /// The edited copy as an update payload
    pub fn to_update(&self) -> TaskUpdate {
        TaskUpdate::from(self.task.clone())
    }
}

impl Store {
    /// Opens a task of the current board for editing. Returns `false` and
    /// leaves the slot untouched when the board, column or task is missing.
    pub fn open_task_modal(&mut self, task_id: &TaskId, column_id: &ColumnId) -> bool {
        let Some(task) = self
            .current_board()
            .and_then(|board| board.column(column_id))
            .and_then(|column| column.task(task_id))
            .cloned()
        else {
            tracing::trace!(%task_id, %column_id, "Open of unknown task ignored");
            return false;
        };

        self.state.ui.editing_task = Some(EditSession {
            task_id: task.id.clone(),
            task,
            column_id: column_id.clone(),
        });
        true
    }

    pub fn close_task_modal(&mut self) {
        self.state.ui.editing_task = None;
    }

    /// Merges `update` into the stored task and closes the editing slot.
    ///
    /// A title in the update must pass validation; on failure nothing changes
    /// and the slot stays open. Returns whether a task was updated.
    pub fn save_task_changes(
        &mut self,
        task_id: &TaskId,
        original_column_id: &ColumnId,
        mut update: TaskUpdate,
    ) -> Result<bool> {
        if let Some(title) = update.title.as_deref() {
            update.title = Some(validate_task_title(
                title,
                self.config.min_task_title_length,
            )?);
        }
        if let Some(description) = update.description.take() {
            update.description = Some(normalize_description(description));
        }

        let saved = match self
            .current_board_mut()
            .and_then(|board| board.column_mut(original_column_id))
            .and_then(|column| column.tasks.iter_mut().find(|t| &t.id == task_id))
        {
            Some(task) => {
                task.apply_update(update);
                true
            }
            None => false,
        };

        self.close_task_modal();

        if saved {
            tracing::debug!(%task_id, column_id = %original_column_id, "Task updated");
            if let Some(board_id) = self.state.current_board_id.clone() {
                self.events.emit(StoreEvent::TaskUpdated {
                    board_id,
                    column_id: original_column_id.clone(),
                    task_id: task_id.clone(),
                });
            }
        } else {
            tracing::trace!(
                %task_id,
                column_id = %original_column_id,
                "Save of unknown task ignored"
            );
        }
        Ok(saved)
    }

    /// Saves whatever is in the editing slot. Returns `Ok(false)` when the
    /// slot is empty.
    pub fn save_editing_task(&mut self) -> Result<bool> {
        let Some(session) = self.state.ui.editing_task.as_ref() else {
            return Ok(false);
        };
        let task_id = session.task_id.clone();
        let column_id = session.column_id.clone();
        let update = session.to_update();

        self.save_task_changes(&task_id, &column_id, update)
    }

    /// Removes a task from a column of the current board and closes the
    /// editing slot. Returns whether a task was removed.
    pub fn delete_task_from_modal(&mut self, task_id: &TaskId, column_id: &ColumnId) -> bool {
        let removed = match self
            .current_board_mut()
            .and_then(|board| board.column_mut(column_id))
        {
            Some(column) => {
                let before = column.tasks.len();
                column.tasks.retain(|t| &t.id != task_id);
                column.tasks.len() != before
            }
            None => false,
        };

        self.close_task_modal();

        if removed {
            tracing::debug!(%task_id, %column_id, "Task deleted");
            if let Some(board_id) = self.state.current_board_id.clone() {
                self.events.emit(StoreEvent::TaskDeleted {
                    board_id,
                    column_id: column_id.clone(),
                    task_id: task_id.clone(),
                });
            }
        }
        removed
    }
}
