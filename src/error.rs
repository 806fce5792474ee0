use thiserror::Error;

pub type Result<T> = std::result::Result<T, KanbanError>;

#[derive(Debug, Error)]
pub enum KanbanError {
    #[error("Board name must be at least {min_length} characters")]
    InvalidName { min_length: usize },

    #[error("Task title must be at least {min_length} characters")]
    InvalidTitle { min_length: usize },

    #[error("Board not found: {id}")]
    BoardNotFound { id: String },

    #[error("Board {board_id} has no column to hold a task")]
    NoColumnAvailable { board_id: String },

    #[error("Due date {date} is in the past")]
    InvalidDueDate { date: String },

    #[error("Invalid priority: {0}")]
    InvalidPriority(String),

    #[error("Unsupported language: {0}")]
    InvalidLanguage(String),

    #[error("Unsupported theme: {0}")]
    InvalidTheme(String),

    #[error("Invalid route: {0}")]
    InvalidRoute(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl KanbanError {
    /// Translation key of the user-facing message for this error
    pub fn message_key(&self) -> &'static str {
        match self {
            Self::InvalidName { .. } => "boardNameCannotBeEmpty",
            Self::InvalidTitle { .. } => "taskTitleCannotBeEmpty",
            Self::BoardNotFound { .. } => "boardNotFound",
            Self::NoColumnAvailable { .. } => "noColumnAvailable",
            Self::InvalidDueDate { .. } => "validationFutureDate",
            Self::InvalidPriority(_)
            | Self::InvalidLanguage(_)
            | Self::InvalidTheme(_)
            | Self::InvalidRoute(_)
            | Self::ConfigError(_)
            | Self::SerializationError(_) => "unexpectedError",
        }
    }
}
