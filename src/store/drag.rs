//! Drag slot operations.
//!
//! At most one task is in drag at a time. Starting a drag overwrites the
//! slot, silently discarding any unfinished drag. A drop always empties the
//! slot, whether or not it moved anything.

use crate::{
    domain::{ColumnId, TaskId},
    store::{Store, StoreEvent},
};

/// The task currently being dragged and the column it left
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragInfo {
    pub task_id: TaskId,
    pub original_column_id: ColumnId,
}

/// What a drop did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropOutcome {
    /// No drag was in progress
    NoDrag,
    /// Dropped back on the origin column; nothing moved
    Cancelled,
    /// The board, a column or the task could not be resolved; nothing moved
    Discarded,
    /// The task now sits at the end of the target column
    Moved {
        task_id: TaskId,
        from: ColumnId,
        to: ColumnId,
    },
}

impl Store {
    pub fn handle_task_drag_start(&mut self, task_id: TaskId, original_column_id: ColumnId) {
        if let Some(previous) = &self.state.ui.dragged_task {
            tracing::trace!(task_id = %previous.task_id, "Unfinished drag replaced");
        }
        self.state.ui.dragged_task = Some(DragInfo {
            task_id,
            original_column_id,
        });
    }

    /// Resolves the in-flight drag against a target column of the current
    /// board, appending the task to the end of the target.
    pub fn handle_task_drop_on_column(&mut self, target_column_id: &ColumnId) -> DropOutcome {
        let Some(drag) = self.state.ui.dragged_task.take() else {
            return DropOutcome::NoDrag;
        };

        if &drag.original_column_id == target_column_id {
            return DropOutcome::Cancelled;
        }

        let Some(board) = self.current_board_mut() else {
            tracing::trace!(task_id = %drag.task_id, "Drop without a current board discarded");
            return DropOutcome::Discarded;
        };
        let board_id = board.id.clone();

        let (Some(source), Some(target)) = (
            board.column_index(&drag.original_column_id),
            board.column_index(target_column_id),
        ) else {
            tracing::trace!(task_id = %drag.task_id, "Drop on unknown column discarded");
            return DropOutcome::Discarded;
        };

        let Some(task_index) = board.columns[source].task_index(&drag.task_id) else {
            tracing::trace!(task_id = %drag.task_id, "Drop of vanished task discarded");
            return DropOutcome::Discarded;
        };

        let task = board.columns[source].tasks.remove(task_index);
        board.columns[target].tasks.push(task);

        tracing::debug!(
            task_id = %drag.task_id,
            from = %drag.original_column_id,
            to = %target_column_id,
            "Task moved"
        );
        self.events.emit(StoreEvent::TaskMoved {
            board_id,
            task_id: drag.task_id.clone(),
            from: drag.original_column_id.clone(),
            to: target_column_id.clone(),
        });

        DropOutcome::Moved {
            task_id: drag.task_id,
            from: drag.original_column_id,
            to: target_column_id.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{BoardId, NewTask};
    use crate::store::tests::{column_id, store_with_current_board};

    fn store_with_tasks() -> (Store, BoardId, Vec<TaskId>) {
        let (mut store, board_id) = store_with_current_board();
        let todo = column_id(&store, &board_id, 0);
        let done = column_id(&store, &board_id, 2);

        let ids = vec![
            store
                .add_task(&board_id, NewTask::new("First").in_column(todo.clone()))
                .unwrap()
                .id,
            store
                .add_task(&board_id, NewTask::new("Second").in_column(todo))
                .unwrap()
                .id,
            store
                .add_task(&board_id, NewTask::new("Already done").in_column(done))
                .unwrap()
                .id,
        ];
        (store, board_id, ids)
    }

    #[test]
    fn test_drag_start_overwrites_previous_drag() {
        let (mut store, board_id, ids) = store_with_tasks();
        let todo = column_id(&store, &board_id, 0);
        let done = column_id(&store, &board_id, 2);

        store.handle_task_drag_start(ids[0].clone(), todo);
        store.handle_task_drag_start(ids[2].clone(), done.clone());

        assert_eq!(
            store.dragged_task(),
            Some(&DragInfo {
                task_id: ids[2].clone(),
                original_column_id: done,
            })
        );
    }

    #[test]
    fn test_drop_moves_task_to_end_of_target() {
        let (mut store, board_id, ids) = store_with_tasks();
        let todo = column_id(&store, &board_id, 0);
        let done = column_id(&store, &board_id, 2);

        store.handle_task_drag_start(ids[0].clone(), todo.clone());
        let outcome = store.handle_task_drop_on_column(&done);

        assert_eq!(
            outcome,
            DropOutcome::Moved {
                task_id: ids[0].clone(),
                from: todo,
                to: done,
            }
        );
        let board = store.board(&board_id).unwrap();
        let todo_ids: Vec<_> = board.columns[0].tasks.iter().map(|t| t.id.clone()).collect();
        let done_ids: Vec<_> = board.columns[2].tasks.iter().map(|t| t.id.clone()).collect();
        assert_eq!(todo_ids, vec![ids[1].clone()]);
        assert_eq!(done_ids, vec![ids[2].clone(), ids[0].clone()]);
        assert_eq!(board.task_count(), 3);
        assert!(store.dragged_task().is_none());
    }

    #[test]
    fn test_drop_on_origin_cancels() {
        let (mut store, board_id, ids) = store_with_tasks();
        let todo = column_id(&store, &board_id, 0);
        let before = store.board(&board_id).unwrap().clone();

        store.handle_task_drag_start(ids[0].clone(), todo.clone());
        assert_eq!(store.handle_task_drop_on_column(&todo), DropOutcome::Cancelled);

        assert_eq!(store.board(&board_id).unwrap(), &before);
        assert!(store.dragged_task().is_none());
    }

    #[test]
    fn test_drop_without_drag() {
        let (mut store, board_id, _) = store_with_tasks();
        let done = column_id(&store, &board_id, 2);
        let before = store.board(&board_id).unwrap().clone();

        assert_eq!(store.handle_task_drop_on_column(&done), DropOutcome::NoDrag);
        assert_eq!(store.board(&board_id).unwrap(), &before);
    }

    #[test]
    fn test_drop_on_unknown_column_is_discarded() {
        let (mut store, board_id, ids) = store_with_tasks();
        let todo = column_id(&store, &board_id, 0);
        let before = store.board(&board_id).unwrap().clone();

        store.handle_task_drag_start(ids[0].clone(), todo);
        assert_eq!(
            store.handle_task_drop_on_column(&"elsewhere".into()),
            DropOutcome::Discarded
        );

        assert_eq!(store.board(&board_id).unwrap(), &before);
        assert!(store.dragged_task().is_none());
    }

    #[test]
    fn test_drop_of_vanished_task_is_discarded() {
        let (mut store, board_id, ids) = store_with_tasks();
        let todo = column_id(&store, &board_id, 0);
        let done = column_id(&store, &board_id, 2);

        store.handle_task_drag_start(ids[0].clone(), todo.clone());
        store.delete_task_from_modal(&ids[0], &todo);

        assert_eq!(
            store.handle_task_drop_on_column(&done),
            DropOutcome::Discarded
        );
        assert_eq!(store.board(&board_id).unwrap().task_count(), 2);
    }

    #[test]
    fn test_drop_without_current_board_is_discarded() {
        let (mut store, board_id, ids) = store_with_tasks();
        let todo = column_id(&store, &board_id, 0);
        let done = column_id(&store, &board_id, 2);

        store.handle_task_drag_start(ids[0].clone(), todo);
        store.set_current_board(None);

        assert_eq!(
            store.handle_task_drop_on_column(&done),
            DropOutcome::Discarded
        );
        assert_eq!(store.board(&board_id).unwrap().columns[0].tasks.len(), 2);
    }

    #[test]
    fn test_only_latest_drag_is_resolved() {
        let (mut store, board_id, ids) = store_with_tasks();
        let todo = column_id(&store, &board_id, 0);
        let in_progress = column_id(&store, &board_id, 1);

        store.handle_task_drag_start(ids[0].clone(), todo.clone());
        store.handle_task_drag_start(ids[1].clone(), todo);
        store.handle_task_drop_on_column(&in_progress);

        let board = store.board(&board_id).unwrap();
        assert_eq!(board.columns[0].tasks[0].id, ids[0]);
        assert_eq!(board.columns[1].tasks[0].id, ids[1]);
    }

    #[test]
    fn test_move_emits_event() {
        let (mut store, board_id, ids) = store_with_tasks();
        let todo = column_id(&store, &board_id, 0);
        let done = column_id(&store, &board_id, 2);
        let mut events = store.subscribe();

        store.handle_task_drag_start(ids[1].clone(), todo.clone());
        store.handle_task_drop_on_column(&done);

        assert_eq!(
            events.try_recv().unwrap(),
            StoreEvent::TaskMoved {
                board_id,
                task_id: ids[1].clone(),
                from: todo,
                to: done,
            }
        );
    }
}
