//! # Kanban Store
//!
//! In-memory state layer for a single-user kanban board manager.
//!
//! This crate owns the board/column/task hierarchy and the transient UI
//! slots (task being edited, task being dragged, search query), exposes the
//! validated operations that mutate them, and maps route signals onto the
//! current board. Rendering, prompts and text lookup are supplied by the
//! caller through small traits.

pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod navigation;
pub mod store;

// Re-export commonly used types
pub use app::{App, Prompter};
pub use config::StoreConfig;
pub use domain::{
    board::{Board, Column},
    filter::filter_board,
    id::{BoardId, ColumnId, TaskId},
    settings::{Language, Settings, SettingsUpdate, Theme},
    task::{NewTask, Priority, Task, TaskUpdate},
};
pub use error::{KanbanError, Result};
pub use i18n::{Catalog, Translator};
pub use navigation::{NavigationOutcome, Navigator, Route};
pub use store::{DragInfo, DropOutcome, EditSession, Store, StoreEvent};
