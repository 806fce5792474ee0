pub mod board;
pub mod filter;
pub mod id;
pub mod settings;
pub mod task;
pub mod validation;

pub use board::{Board, Column, DEFAULT_COLUMN_KEYS};
pub use filter::filter_board;
pub use id::{generate_id, BoardId, ColumnId, TaskId};
pub use settings::{Language, Settings, SettingsUpdate, Theme};
pub use task::{NewTask, Priority, Task, TaskUpdate};
