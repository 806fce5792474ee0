use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Produces a fresh opaque identifier.
///
/// UUIDv7 combines a millisecond timestamp with random bits, so values are
/// unique across the process lifetime and sort roughly by creation time.
pub fn generate_id() -> String {
    Uuid::now_v7().simple().to_string()
}

macro_rules! opaque_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Creates a fresh, process-unique identifier
            pub fn generate() -> Self {
                Self(generate_id())
            }

            /// Returns the string representation
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }
    };
}

opaque_id!(
    /// Identifier of a board
    BoardId
);
opaque_id!(
    /// Identifier of a column within a board
    ColumnId
);
opaque_id!(
    /// Identifier of a task
    TaskId
);
