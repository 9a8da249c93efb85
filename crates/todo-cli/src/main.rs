//! todo - Minimal personal todo list
//!
//! Todos live in a single JSON file; see `todo help` for subcommands.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

mod output;

#[derive(Parser)]
#[command(name = "todo")]
#[command(about = "Minimal personal todo list")]
#[command(version)]
struct Cli {
    /// JSON file holding the todos
    #[arg(long, env = "TODO_DATA_FILE")]
    data_file: Option<PathBuf>,

    /// Config file to read instead of the default
    #[arg(long, env = "TODO_CONFIG")]
    config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Subcommand and its arguments (list, new, del, clear, help)
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    args: Vec<String>,
}

fn init_tracing() {
    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<ExitCode> {
    init_tracing();
    let cli = Cli::parse();

    // help and usage errors must work even with a broken config
    let touches_store = cli
        .args
        .first()
        .and_then(|arg| arg.parse::<todo_core::Subcommand>().ok())
        .is_some_and(|subcommand| subcommand.touches_store());

    let mut config = match cli.config.or_else(todo_core::Config::default_path) {
        Some(path) if touches_store => todo_core::Config::load(&path)?,
        _ => todo_core::Config::default(),
    };
    if let Some(path) = cli.data_file {
        config.data_file = Some(path);
    }
    if cli.no_color {
        config.colors = false;
    }

    let store = todo_core::Store::new(config.data_path());
    let data_path = store.path().display().to_string();
    tracing::debug!(path = %data_path, touches_store, "resolved data file");
    let dispatcher = todo_core::Dispatcher::new(store);

    let result = dispatcher
        .handle(&cli.args)
        .with_context(|| format!("Failed to access todos in {}", data_path))?;

    Ok(output::emit(&result, config.colors))
}
