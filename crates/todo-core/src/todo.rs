//! Todo data model

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// All todos keyed by ID, iterated in ascending ID order
pub type TodoMap = BTreeMap<String, Todo>;

/// A single stored todo. The ID is the key it is stored under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    /// Lower values are listed first
    pub priority: u64,

    pub text: String,
}

impl Todo {
    pub fn new(priority: u64, text: impl Into<String>) -> Self {
        Self {
            priority,
            text: text.into(),
        }
    }
}

impl std::fmt::Display for Todo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "priority {}: \"{}\"", self.priority, self.text)
    }
}
