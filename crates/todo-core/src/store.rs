//! JSON file store for todos
//!
//! The whole list lives in one JSON object, rewritten on every change.

use crate::{Result, TodoMap};
use std::fs::{self, File};
use std::io::{BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

/// JSON-file-backed todo store
#[derive(Debug, Clone)]
pub struct Store {
    path: PathBuf,
}

impl Store {
    /// Store backed by the file at `path`. Nothing is touched until the first load or save.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path to the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load all todos
    ///
    /// An absent file, an empty file, and `{}` all mean no todos.
    pub fn load(&self) -> Result<TodoMap> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "no data file, starting empty");
                return Ok(TodoMap::new());
            }
            Err(e) => return Err(e.into()),
        };

        if content.trim().is_empty() {
            return Ok(TodoMap::new());
        }

        let todos: TodoMap = serde_json::from_str(&content)?;
        tracing::debug!(path = %self.path.display(), count = todos.len(), "loaded todos");
        Ok(todos)
    }

    /// Save all todos, replacing the previous contents
    pub fn save(&self, todos: &TodoMap) -> Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let file = File::create(&self.path)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer(&mut writer, todos)?;
        writer.flush()?;

        tracing::debug!(path = %self.path.display(), count = todos.len(), "saved todos");
        Ok(())
    }

    /// Drop every todo
    pub fn clear(&self) -> Result<()> {
        self.save(&TodoMap::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Error, Todo};
    use tempfile::TempDir;

    fn temp_store() -> (TempDir, Store) {
        let dir = TempDir::new().unwrap();
        let store = Store::new(dir.path().join("todos.json"));
        (dir, store)
    }

    #[test]
    fn test_load_missing_file() {
        let (_dir, store) = temp_store();
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_load_empty_file() {
        let (_dir, store) = temp_store();
        fs::write(store.path(), "").unwrap();
        assert!(store.load().unwrap().is_empty());

        fs::write(store.path(), "  \n").unwrap();
        assert!(store.load().unwrap().is_empty());

        fs::write(store.path(), "{}").unwrap();
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_load_existing_todos() {
        let (_dir, store) = temp_store();
        fs::write(
            store.path(),
            r#"{"4567":{"priority":3,"text":"Bar"},"1234":{"priority":1,"text":"Foo"}}"#,
        )
        .unwrap();

        let todos = store.load().unwrap();
        assert_eq!(todos.len(), 2);
        assert_eq!(todos["1234"], Todo::new(1, "Foo"));
        assert_eq!(todos["4567"], Todo::new(3, "Bar"));
    }

    #[test]
    fn test_load_malformed_file() {
        let (_dir, store) = temp_store();
        fs::write(store.path(), "not json").unwrap();
        assert!(matches!(store.load(), Err(Error::Json(_))));
    }

    #[test]
    fn test_save_then_load() {
        let (_dir, store) = temp_store();
        let mut todos = TodoMap::new();
        todos.insert("abcd".to_string(), Todo::new(2, "Write tests"));
        store.save(&todos).unwrap();

        assert_eq!(store.load().unwrap(), todos);
        assert_eq!(
            fs::read_to_string(store.path()).unwrap(),
            r#"{"abcd":{"priority":2,"text":"Write tests"}}"#
        );
    }

    #[test]
    fn test_save_creates_parent_dirs() {
        let dir = TempDir::new().unwrap();
        let store = Store::new(dir.path().join("nested").join("todos.json"));
        store.clear().unwrap();
        assert_eq!(fs::read_to_string(store.path()).unwrap(), "{}");
    }

    #[test]
    fn test_clear_overwrites() {
        let (_dir, store) = temp_store();
        fs::write(store.path(), r#"{"1234":{"priority":1,"text":"Foo"}}"#).unwrap();
        store.clear().unwrap();
        assert_eq!(fs::read_to_string(store.path()).unwrap(), "{}");
    }
}
