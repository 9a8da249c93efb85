//! Text rendering for the `list` subcommand

use crate::{Todo, TodoMap};
use std::collections::BTreeSet;
use std::fmt::Write;

/// Printed when there is nothing to list
pub const NO_TODOS: &str = "No todos!";

const HEADER: &str = "Priority  ID    Todo";

/// Render todos as a table sorted by priority, then ID
///
/// Gaps in the priority sequence are reported after the table.
pub fn render(todos: &TodoMap) -> String {
    if todos.is_empty() {
        return NO_TODOS.to_string();
    }

    let mut out = String::new();
    writeln!(out, "{HEADER}").ok();
    for (id, todo) in sorted(todos) {
        writeln!(out, "{:>8}  {:<4}  {}", todo.priority, id, todo.text).ok();
    }

    let missing = missing_priorities(todos.values().map(|t| t.priority));
    if !missing.is_empty() {
        let joined = missing
            .iter()
            .map(u64::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        writeln!(out).ok();
        writeln!(out, "Missing priorities:").ok();
        writeln!(out, "{joined}").ok();
    }

    out
}

/// Entries ordered by ascending priority, ties broken by ascending ID
pub fn sorted(todos: &TodoMap) -> Vec<(&str, &Todo)> {
    let mut entries: Vec<_> = todos.iter().map(|(id, t)| (id.as_str(), t)).collect();
    entries.sort_by(|(a_id, a), (b_id, b)| {
        a.priority
            .cmp(&b.priority)
            .then_with(|| a_id.cmp(b_id))
    });
    entries
}

/// Priorities in `1..max` that no todo uses, ascending
///
/// 0 and the maximum itself are never reported.
pub fn missing_priorities(priorities: impl IntoIterator<Item = u64>) -> Vec<u64> {
    let present: BTreeSet<u64> = priorities.into_iter().collect();
    let Some(&max) = present.last() else {
        return Vec::new();
    };
    (1..max).filter(|p| !present.contains(p)).collect()
}
