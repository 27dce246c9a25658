use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// A single to-do item.
///
/// `title` is kept exactly as the client supplied it; a create request
/// without a title field is persisted without one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

/// File-backed storage for the full task collection.
///
/// The path is fixed for the lifetime of the process. Every operation reads
/// or writes the collection in full; there is no partial update.
#[derive(Debug, Clone)]
pub struct TaskStore {
    path: PathBuf,
}

impl TaskStore {
    /// Opens a store at the given path. The file itself is only created by
    /// the first [`TaskStore::save`].
    pub fn open(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads and deserializes the full collection, in stored order.
    ///
    /// A file that does not exist yet yields an empty collection. Unreadable
    /// or malformed content is an error; the caller picks the failure policy.
    pub fn load(&self) -> Result<Vec<Task>> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(err.into()),
        };

        let tasks = serde_json::from_str(&contents)?;
        Ok(tasks)
    }

    /// Serializes the full collection and overwrites the file with it.
    pub fn save(&self, tasks: &[Task]) -> Result<()> {
        let contents = serde_json::to_string_pretty(tasks)?;
        fs::write(&self.path, contents)?;
        Ok(())
    }
}
