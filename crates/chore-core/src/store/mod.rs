use crate::db::DbPool;
use crate::error::CoreError;
use crate::models::{Domain, HistoryEntry, Task};
use async_trait::async_trait;
use uuid::Uuid;

pub mod history;
pub mod tasks;

/// Persistence for tracked tasks
#[async_trait]
pub trait TaskStore: Send + Sync {
    /// Every task in creation order.
    async fn load_all(&self) -> Result<Vec<Task>, CoreError>;
    async fn load_domain(&self, domain: Domain) -> Result<Vec<Task>, CoreError>;
    async fn find(&self, id: Uuid) -> Result<Option<Task>, CoreError>;
    /// Tasks whose id starts with `prefix` (hex digits, hyphens ignored).
    async fn find_by_prefix(&self, prefix: &str) -> Result<Vec<Task>, CoreError>;
    async fn insert(&self, task: Task) -> Result<Task, CoreError>;
    /// Writes `task` if the stored version still equals `task.version` and
    /// returns it with the version bumped. A stale version is a `Conflict`.
    async fn save(&self, task: &Task) -> Result<Task, CoreError>;
    async fn delete(&self, id: Uuid) -> Result<(), CoreError>;
}

/// Append-only completion log
#[async_trait]
pub trait HistoryStore: Send + Sync {
    async fn add_history(&self, entry: HistoryEntry) -> Result<HistoryEntry, CoreError>;
    /// Saves a completed task and appends its entry in one transaction;
    /// neither is written if either fails.
    async fn record_completion(
        &self,
        task: &Task,
        entry: HistoryEntry,
    ) -> Result<(Task, HistoryEntry), CoreError>;
    /// Newest first, optionally restricted to one domain.
    async fn load_history(&self, domain: Option<Domain>) -> Result<Vec<HistoryEntry>, CoreError>;
}

/// Everything the tracker needs from a backend
pub trait Store: TaskStore + HistoryStore {}

impl<T: TaskStore + HistoryStore> Store for T {}

/// SQLite implementation of both stores
#[derive(Debug, Clone)]
pub struct SqliteStore {
    pool: DbPool,
}

impl SqliteStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub(crate) fn pool(&self) -> &DbPool {
        &self.pool
    }
}
