use crate::error::CoreError;
use crate::models::{Domain, HistoryEntry, Task};
use crate::store::{HistoryStore, SqliteStore};
use async_trait::async_trait;
use sqlx::{Sqlite, Transaction};

#[async_trait]
impl HistoryStore for SqliteStore {
    async fn add_history(&self, entry: HistoryEntry) -> Result<HistoryEntry, CoreError> {
        let mut tx = self.pool().begin().await?;
        Self::insert_history(&mut tx, &entry).await?;
        tx.commit().await?;
        Ok(entry)
    }

    async fn record_completion(
        &self,
        task: &Task,
        entry: HistoryEntry,
    ) -> Result<(Task, HistoryEntry), CoreError> {
        let mut tx = self.pool().begin().await?;
        let saved = Self::save_task(&mut tx, task).await?;
        Self::insert_history(&mut tx, &entry).await?;
        tx.commit().await?;
        Ok((saved, entry))
    }

    async fn load_history(&self, domain: Option<Domain>) -> Result<Vec<HistoryEntry>, CoreError> {
        let entries = match domain {
            Some(domain) => {
                sqlx::query_as(
                    "SELECT * FROM history WHERE domain = $1 ORDER BY completed_at DESC, rowid DESC",
                )
                .bind(domain)
                .fetch_all(self.pool())
                .await?
            }
            None => {
                sqlx::query_as("SELECT * FROM history ORDER BY completed_at DESC, rowid DESC")
                    .fetch_all(self.pool())
                    .await?
            }
        };
        Ok(entries)
    }
}

impl SqliteStore {
    async fn insert_history<'a>(
        tx: &mut Transaction<'a, Sqlite>,
        entry: &HistoryEntry,
    ) -> Result<(), CoreError> {
        sqlx::query(
            r#"INSERT INTO history (id, task_id, task_name, category, domain, completed_at, notes, cost)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(entry.id)
        .bind(entry.task_id)
        .bind(&entry.task_name)
        .bind(&entry.category)
        .bind(entry.domain)
        .bind(entry.completed_at)
        .bind(&entry.notes)
        .bind(entry.cost)
        .execute(&mut **tx)
        .await?;
        Ok(())
    }
}
