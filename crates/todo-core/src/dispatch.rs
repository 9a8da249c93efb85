//! Subcommand dispatch
//!
//! Maps raw command-line tokens to an [`Output`] pair. Usage problems are
//! reported through `stderr`; only storage failures become `Err`.

use crate::{Result, Store, Todo, listing, unique_id};

pub const HELP_TEXT: &str = "\
Usage: todo <subcommand> [arguments]

Subcommands:
  list                     List todos sorted by priority
  new <priority> <text>    Create a todo with an integer priority
  del <id>                 Delete the todo with the given id
  clear                    Delete all todos
  help                     Show this help text
";

pub const NEW_USAGE: &str = "Must pass an integer priority and text string.";
pub const DEL_USAGE: &str =
    "Must pass a valid todo id. See valid todo ids via the `list` subcommand.";

/// Subcommand selected by the first token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Subcommand {
    List,
    New,
    Del,
    Clear,
    Help,
}

impl std::str::FromStr for Subcommand {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "list" => Ok(Subcommand::List),
            "new" => Ok(Subcommand::New),
            "del" => Ok(Subcommand::Del),
            "clear" => Ok(Subcommand::Clear),
            "help" => Ok(Subcommand::Help),
            _ => Err(format!("No valid subcommand `{}`.", s)),
        }
    }
}

impl Subcommand {
    /// Whether running this subcommand reads or writes the data file
    pub fn touches_store(&self) -> bool {
        !matches!(self, Subcommand::Help)
    }
}

/// Text destined for stdout and stderr
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Output {
    pub stdout: String,
    pub stderr: String,
}

impl Output {
    pub fn ok(stdout: impl Into<String>) -> Self {
        Self {
            stdout: stdout.into(),
            stderr: String::new(),
        }
    }

    /// Help text on stdout, `message` on stderr
    pub fn usage(message: impl Into<String>) -> Self {
        Self {
            stdout: HELP_TEXT.to_string(),
            stderr: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        !self.stderr.is_empty()
    }
}

/// Runs subcommands against a [`Store`]
pub struct Dispatcher {
    store: Store,
}

impl Dispatcher {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    /// Handle one invocation. `args[0]` selects the subcommand.
    pub fn handle(&self, args: &[String]) -> Result<Output> {
        let Some(first) = args.first() else {
            return Ok(Output::ok(HELP_TEXT));
        };

        let subcommand = match first.parse::<Subcommand>() {
            Ok(subcommand) => subcommand,
            Err(message) => return Ok(Output::usage(message)),
        };
        tracing::debug!(?subcommand, args = args.len() - 1, "dispatching");

        let rest = &args[1..];
        match subcommand {
            Subcommand::Help => Ok(Output::ok(HELP_TEXT)),
            Subcommand::List => self.list(),
            Subcommand::New => self.new_todo(rest),
            Subcommand::Del => self.delete(rest),
            Subcommand::Clear => self.clear(),
        }
    }

    fn list(&self) -> Result<Output> {
        let todos = self.store.load()?;
        Ok(Output::ok(listing::render(&todos)))
    }

    fn new_todo(&self, args: &[String]) -> Result<Output> {
        let [priority, text] = args else {
            return Ok(Output::usage(NEW_USAGE));
        };
        let Ok(priority) = priority.parse::<u64>() else {
            return Ok(Output::usage(NEW_USAGE));
        };

        let mut todos = self.store.load()?;
        let id = unique_id(|id| todos.contains_key(id))?;
        let todo = Todo::new(priority, text.as_str());
        let message = format!("Created todo with {}.", todo);

        todos.insert(id.clone(), todo);
        self.store.save(&todos)?;
        tracing::info!(id = %id, priority, "created todo");

        Ok(Output::ok(message))
    }

    fn delete(&self, args: &[String]) -> Result<Output> {
        let [id] = args else {
            return Ok(Output::usage(DEL_USAGE));
        };

        let mut todos = self.store.load()?;
        let Some(todo) = todos.remove(id) else {
            return Ok(Output::usage(DEL_USAGE));
        };
        self.store.save(&todos)?;
        tracing::info!(id = %id, "deleted todo");

        Ok(Output::ok(format!("Deleted todo with {}.", todo)))
    }

    fn clear(&self) -> Result<Output> {
        self.store.clear()?;
        tracing::info!(path = %self.store.path().display(), "cleared todos");
        Ok(Output::ok("Cleared all todos."))
    }
}
