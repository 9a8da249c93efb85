//! todo-core: Core library for the todo list manager
//!
//! Todos live in a single JSON object on disk, keyed by a short random ID.
//! The [`Dispatcher`] turns command-line tokens into stdout/stderr text.

pub mod config;
pub mod dispatch;
pub mod error;
pub mod id;
pub mod listing;
pub mod store;
pub mod todo;

pub use config::Config;
pub use dispatch::{Dispatcher, HELP_TEXT, Output, Subcommand};
pub use error::Error;
pub use id::{generate_id, unique_id};
pub use store::Store;
pub use todo::{Todo, TodoMap};

/// Result type for todo operations
pub type Result<T> = std::result::Result<T, Error>;
