use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Caller-supplied identifier. Uniqueness is left to the table's primary key.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct TodoId(pub String);

impl TodoId {
    /// Builds an id from a captured path segment, rejecting an empty one.
    pub fn from_path(segment: String) -> Option<Self> {
        if segment.is_empty() { None } else { Some(Self(segment)) }
    }

    pub fn as_str(&self) -> &str { &self.0 }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(&self.0) }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    pub id: TodoId,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub completed: bool,
}

/// Create payload. `created_at` is assigned by the store, so a client-sent value is dropped.
#[derive(Debug, Clone, Deserialize)]
pub struct NewTodo {
    pub id: TodoId,
    pub description: String,
    pub completed: bool,
}

/// Update payload. The id comes from the path; any `id` in the body is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct TodoChanges {
    pub description: String,
    pub completed: bool,
}
