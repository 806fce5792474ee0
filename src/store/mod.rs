//! The board store.
//!
//! [`Store`] exclusively owns the board hierarchy and the transient UI
//! slots. Every mutation goes through one of its operations; readers get
//! shared references or derived projections.

use crate::{
    config::StoreConfig,
    domain::{
        board::DEFAULT_COLUMN_KEYS,
        filter::filter_board,
        validation::{normalize_description, validate_board_name, validate_task_title},
        Board, BoardId, NewTask, Settings, SettingsUpdate, Task,
    },
    error::{KanbanError, Result},
    i18n::{Catalog, Translator},
};
use tokio::sync::broadcast;

pub mod drag;
pub mod events;
pub mod modal;

pub use drag::{DragInfo, DropOutcome};
pub use events::{EventBus, StoreEvent};
pub use modal::EditSession;

/// Transient view state. Reset on every store reset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UiState {
    /// Single editing slot; opening another task replaces it
    pub editing_task: Option<EditSession>,
    /// Single drag slot; starting another drag replaces it
    pub dragged_task: Option<DragInfo>,
    pub filter_query: String,
}

/// Everything the store owns
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppState {
    pub boards: Vec<Board>,
    pub current_board_id: Option<BoardId>,
    pub settings: Settings,
    pub ui: UiState,
}

pub struct Store {
    config: StoreConfig,
    translator: Box<dyn Translator>,
    state: AppState,
    events: EventBus,
}

impl Store {
    /// Creates a store with the default configuration and built-in catalog
    pub fn new() -> Self {
        Self::with_config(StoreConfig::default())
    }

    pub fn with_config(config: StoreConfig) -> Self {
        let state = AppState {
            settings: config.default_settings,
            ..AppState::default()
        };
        Self {
            config,
            translator: Box::new(Catalog),
            state,
            events: EventBus::new(),
        }
    }

    /// Replaces the text lookup used for column names and messages
    pub fn with_translator(mut self, translator: impl Translator + 'static) -> Self {
        self.translator = Box::new(translator);
        self
    }

    /// Restores the initial state: no boards, default settings, empty slots
    pub fn reset(&mut self) {
        self.state = AppState {
            settings: self.config.default_settings,
            ..AppState::default()
        };
        tracing::debug!("Store reset");
        self.events.emit(StoreEvent::Reset);
    }

    /// Subscribes to change notifications
    pub fn subscribe(&self) -> broadcast::Receiver<StoreEvent> {
        self.events.subscribe()
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn boards(&self) -> &[Board] {
        &self.state.boards
    }

    pub fn board(&self, board_id: &BoardId) -> Option<&Board> {
        self.state.boards.iter().find(|b| &b.id == board_id)
    }

    pub fn settings(&self) -> &Settings {
        &self.state.settings
    }

    pub fn current_board_id(&self) -> Option<&BoardId> {
        self.state.current_board_id.as_ref()
    }

    /// The board the current-board pointer resolves to
    pub fn current_board(&self) -> Option<&Board> {
        self.state
            .current_board_id
            .as_ref()
            .and_then(|id| self.board(id))
    }

    /// The current board projected through the active filter query
    pub fn filtered_current_board(&self) -> Option<Board> {
        self.current_board()
            .map(|board| filter_board(board, &self.state.ui.filter_query))
    }

    pub fn filter_query(&self) -> &str {
        &self.state.ui.filter_query
    }

    pub fn editing_task(&self) -> Option<&EditSession> {
        self.state.ui.editing_task.as_ref()
    }

    /// Mutable access to the detached copy in the editing slot
    pub fn editing_task_mut(&mut self) -> Option<&mut EditSession> {
        self.state.ui.editing_task.as_mut()
    }

    pub fn dragged_task(&self) -> Option<&DragInfo> {
        self.state.ui.dragged_task.as_ref()
    }

    /// Looks up display text in the active language
    pub fn translate(&self, key: &str, args: &[&str]) -> String {
        self.translator
            .translate(self.state.settings.language, key, args)
    }

    /// Localized message for an error
    pub fn error_message(&self, error: &KanbanError) -> String {
        match error {
            KanbanError::InvalidName { min_length } | KanbanError::InvalidTitle { min_length } => {
                let min = min_length.to_string();
                self.translate(error.message_key(), &[min.as_str()])
            }
            _ => self.translate(error.message_key(), &[]),
        }
    }

    /// Creates a board with the three default columns, named in the active
    /// language, and appends it to the collection
    pub fn create_board(&mut self, name: &str) -> Result<Board> {
        let name = validate_board_name(name, self.config.min_board_name_length)?;
        let column_names: Vec<String> = DEFAULT_COLUMN_KEYS
            .iter()
            .map(|key| self.translate(key, &[]))
            .collect();

        let board = Board::new(name, column_names);
        tracing::debug!(board_id = %board.id, name = %board.name, "Board created");

        self.state.boards.push(board.clone());
        self.events.emit(StoreEvent::BoardCreated {
            board_id: board.id.clone(),
        });
        Ok(board)
    }

    /// Removes a board. Deleting a missing board is a no-op.
    ///
    /// When the current board is deleted the pointer moves to the first
    /// remaining board, or is cleared when none remain. Returns whether a
    /// board was removed.
    pub fn delete_board(&mut self, board_id: &BoardId) -> bool {
        let before = self.state.boards.len();
        self.state.boards.retain(|b| &b.id != board_id);
        if self.state.boards.len() == before {
            tracing::trace!(%board_id, "Delete of unknown board ignored");
            return false;
        }

        tracing::debug!(%board_id, "Board deleted");
        self.events.emit(StoreEvent::BoardDeleted {
            board_id: board_id.clone(),
        });

        if self.state.current_board_id.as_ref() == Some(board_id) {
            let fallback = self.state.boards.first().map(|b| b.id.clone());
            self.set_current_board(fallback);
        }
        true
    }

    /// Adds a task to a board.
    ///
    /// The task lands at the end of the requested column, or of the board's
    /// first column when the requested one is missing or unknown.
    pub fn add_task(&mut self, board_id: &BoardId, details: NewTask) -> Result<Task> {
        let min_length = self.config.min_task_title_length;
        let title = validate_task_title(&details.title, min_length)?;

        let board = self
            .state
            .boards
            .iter_mut()
            .find(|b| &b.id == board_id)
            .ok_or(KanbanError::InvalidTitle { min_length })?;

        let column_index = details
            .column_id
            .as_ref()
            .and_then(|column_id| board.column_index(column_id))
            .or_else(|| (!board.columns.is_empty()).then_some(0))
            .ok_or_else(|| KanbanError::NoColumnAvailable {
                board_id: board_id.to_string(),
            })?;

        let mut task = Task::new(title);
        task.description = normalize_description(details.description);
        task.priority = details.priority;
        task.due_date = details.due_date;

        let column = &mut board.columns[column_index];
        column.tasks.push(task.clone());
        tracing::debug!(%board_id, column_id = %column.id, task_id = %task.id, "Task added");

        let column_id = column.id.clone();
        self.events.emit(StoreEvent::TaskAdded {
            board_id: board_id.clone(),
            column_id,
            task_id: task.id.clone(),
        });
        Ok(task)
    }

    /// Merges a partial settings change
    pub fn update_settings(&mut self, update: SettingsUpdate) {
        self.state.settings.merge(update);
        tracing::debug!(
            language = %self.state.settings.language,
            theme = %self.state.settings.theme,
            "Settings updated"
        );
        self.events.emit(StoreEvent::SettingsChanged {
            settings: self.state.settings,
        });
    }

    /// Sets the free-text query used by the filtered board view
    pub fn set_filter_query(&mut self, query: impl Into<String>) {
        let query = query.into();
        if self.state.ui.filter_query == query {
            return;
        }
        self.state.ui.filter_query = query.clone();
        self.events.emit(StoreEvent::FilterChanged { query });
    }

    /// Moves the current-board pointer. Only navigation and board deletion
    /// write it.
    pub(crate) fn set_current_board(&mut self, board_id: Option<BoardId>) {
        if self.state.current_board_id == board_id {
            return;
        }
        tracing::debug!(board_id = ?board_id, "Current board changed");
        self.state.current_board_id = board_id.clone();
        self.events.emit(StoreEvent::CurrentBoardChanged { board_id });
    }

    fn current_board_mut(&mut self) -> Option<&mut Board> {
        let current = self.state.current_board_id.as_ref()?;
        self.state.boards.iter_mut().find(|b| &b.id == current)
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Store {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store")
            .field("config", &self.config)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}
