use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

// New Type Pattern -- https://doc.rust-lang.org/rust-by-example/generics/new_types.html
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct EntityId(pub String);

impl EntityId {
    pub fn new() -> EntityId {
        EntityId(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for EntityId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for EntityId {
    fn from(value: &str) -> Self {
        EntityId(value.to_string())
    }
}

// Values
/// Key the canonical employee sequence is stored under
pub const STORAGE_KEY: &str = "employees";

/// Minimum number of characters (after trimming) for name and position fields
pub const MIN_FIELD_LENGTH: usize = 2;
