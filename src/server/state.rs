use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard};

use crate::server::ServerError;
use crate::store::{Task, TaskStore};
use crate::Result;

/// Represents the state of the server.
///
/// Holds the store handle for the whole process, the id counter, and the
/// lock that serializes every load-mutate-save sequence.
pub struct ServerState {
    store: TaskStore,
    strict: bool,
    last_id: AtomicU64,
    write_lock: Mutex<()>,
}

impl ServerState {
    /// Opens the server state over a store, seeding the id counter from the
    /// highest id already persisted.
    ///
    /// In strict mode an unreadable store fails startup; otherwise the
    /// counter is seeded as if the store were empty.
    pub fn new(store: TaskStore, strict: bool) -> Result<Self> {
        let tasks = match store.load() {
            Ok(tasks) => tasks,
            Err(err) if strict => return Err(err),
            Err(err) => {
                tracing::warn!(
                    path = %store.path().display(),
                    "Error reading data file, seeding ids from empty: {err}"
                );
                Vec::new()
            }
        };

        let last_id = tasks.iter().map(|t| t.id).max().unwrap_or(0);

        Ok(Self {
            store,
            strict,
            last_id: AtomicU64::new(last_id),
            write_lock: Mutex::new(()),
        })
    }

    /// Issues a fresh id, distinct from every id handed out so far and from
    /// every id present in the store at startup.
    pub fn next_id(&self) -> u64 {
        self.last_id.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Serializes mutating operations. Held for the whole load-mutate-save
    /// sequence so concurrent creates or deletes cannot lose updates.
    pub fn lock_writes(&self) -> MutexGuard<'_, ()> {
        self.write_lock
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Reads the full collection under the configured failure policy: strict
    /// mode surfaces read failures, the default logs them and serves an
    /// empty collection.
    pub fn load_tasks(&self) -> std::result::Result<Vec<Task>, ServerError> {
        match self.store.load() {
            Ok(tasks) => Ok(tasks),
            Err(err) if self.strict => Err(err.into()),
            Err(err) => {
                tracing::error!("Error reading data file: {err}");
                Ok(Vec::new())
            }
        }
    }

    /// Writes the full collection under the configured failure policy:
    /// strict mode surfaces write failures, the default logs them and
    /// reports success anyway.
    pub fn save_tasks(&self, tasks: &[Task]) -> std::result::Result<(), ServerError> {
        match self.store.save(tasks) {
            Ok(()) => Ok(()),
            Err(err) if self.strict => Err(err.into()),
            Err(err) => {
                tracing::error!("Error writing data file: {err}");
                Ok(())
            }
        }
    }
}
