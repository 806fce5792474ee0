use crate::domain::id::{BoardId, ColumnId, TaskId};
use crate::domain::settings::Settings;
use tokio::sync::broadcast;

/// Buffered events per subscriber before the slowest one starts lagging
pub const EVENT_CHANNEL_CAPACITY: usize = 256;

/// Notification of a state change applied by the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreEvent {
    BoardCreated {
        board_id: BoardId,
    },
    BoardDeleted {
        board_id: BoardId,
    },
    CurrentBoardChanged {
        board_id: Option<BoardId>,
    },
    TaskAdded {
        board_id: BoardId,
        column_id: ColumnId,
        task_id: TaskId,
    },
    TaskUpdated {
        board_id: BoardId,
        column_id: ColumnId,
        task_id: TaskId,
    },
    TaskDeleted {
        board_id: BoardId,
        column_id: ColumnId,
        task_id: TaskId,
    },
    TaskMoved {
        board_id: BoardId,
        task_id: TaskId,
        from: ColumnId,
        to: ColumnId,
    },
    SettingsChanged {
        settings: Settings,
    },
    FilterChanged {
        query: String,
    },
    Reset,
}

/// Fan-out of store events to any number of subscribers
#[derive(Debug)]
pub struct EventBus {
    sender: broadcast::Sender<StoreEvent>,
}

impl EventBus {
    pub fn new() -> Self {
        let (sender, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<StoreEvent> {
        self.sender.subscribe()
    }

    /// Publishes an event. Having no subscribers is not an error.
    pub fn emit(&self, event: StoreEvent) {
        if self.sender.send(event).is_err() {
            tracing::trace!("No subscribers for store event");
        }
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}
