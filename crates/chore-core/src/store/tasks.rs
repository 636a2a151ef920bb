use crate::error::CoreError;
use crate::models::{Domain, RecurrenceRule, Task};
use crate::store::{SqliteStore, TaskStore};
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::{FromRow, Sqlite, Transaction};
use uuid::Uuid;

const SELECT_TASKS: &str = "SELECT id, template_id, name, description, category, domain, rule, cost, notes, \
     last_completed_at, next_due, created_at, version FROM tasks";

/// Row shape of the `tasks` table; the rule is stored as a JSON frequency record.
#[derive(Debug, FromRow)]
struct TaskRow {
    id: Uuid,
    template_id: Option<String>,
    name: String,
    description: Option<String>,
    category: String,
    domain: Domain,
    rule: String,
    cost: Option<f64>,
    notes: Option<String>,
    last_completed_at: Option<DateTime<Utc>>,
    next_due: NaiveDate,
    created_at: DateTime<Utc>,
    version: i64,
}

impl TryFrom<TaskRow> for Task {
    type Error = CoreError;

    fn try_from(row: TaskRow) -> Result<Self, Self::Error> {
        let rule: RecurrenceRule = serde_json::from_str(&row.rule)?;
        Ok(Task {
            id: row.id,
            template_id: row.template_id,
            name: row.name,
            description: row.description,
            category: row.category,
            domain: row.domain,
            rule,
            cost: row.cost,
            notes: row.notes,
            last_completed_at: row.last_completed_at,
            next_due: row.next_due,
            created_at: row.created_at,
            version: row.version,
        })
    }
}

fn into_tasks(rows: Vec<TaskRow>) -> Result<Vec<Task>, CoreError> {
    rows.into_iter().map(Task::try_from).collect()
}

#[async_trait]
impl TaskStore for SqliteStore {
    async fn load_all(&self) -> Result<Vec<Task>, CoreError> {
        let rows: Vec<TaskRow> = sqlx::query_as(&format!("{SELECT_TASKS} ORDER BY rowid"))
            .fetch_all(self.pool())
            .await?;
        into_tasks(rows)
    }

    async fn load_domain(&self, domain: Domain) -> Result<Vec<Task>, CoreError> {
        let rows: Vec<TaskRow> =
            sqlx::query_as(&format!("{SELECT_TASKS} WHERE domain = $1 ORDER BY rowid"))
                .bind(domain)
                .fetch_all(self.pool())
                .await?;
        into_tasks(rows)
    }

    async fn find(&self, id: Uuid) -> Result<Option<Task>, CoreError> {
        let row: Option<TaskRow> = sqlx::query_as(&format!("{SELECT_TASKS} WHERE id = $1"))
            .bind(id)
            .fetch_optional(self.pool())
            .await?;
        row.map(Task::try_from).transpose()
    }

    async fn find_by_prefix(&self, prefix: &str) -> Result<Vec<Task>, CoreError> {
        let hex: String = prefix
            .chars()
            .filter(|c| *c != '-')
            .map(|c| c.to_ascii_lowercase())
            .collect();
        if hex.is_empty() || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Ok(Vec::new());
        }

        let mut pattern = String::with_capacity(hex.len() + 1);
        pattern.push_str(&hex);
        pattern.push('%');

        let rows: Vec<TaskRow> =
            sqlx::query_as(&format!("{SELECT_TASKS} WHERE lower(hex(id)) LIKE $1 ORDER BY rowid"))
                .bind(pattern)
                .fetch_all(self.pool())
                .await?;
        into_tasks(rows)
    }

    async fn insert(&self, task: Task) -> Result<Task, CoreError> {
        let rule = serde_json::to_string(&task.rule)?;
        sqlx::query(
            r#"INSERT INTO tasks (id, template_id, name, description, category, domain, rule, cost, notes, last_completed_at, next_due, created_at, version)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
            "#,
        )
        .bind(task.id)
        .bind(&task.template_id)
        .bind(&task.name)
        .bind(&task.description)
        .bind(&task.category)
        .bind(task.domain)
        .bind(rule)
        .bind(task.cost)
        .bind(&task.notes)
        .bind(task.last_completed_at)
        .bind(task.next_due)
        .bind(task.created_at)
        .bind(task.version)
        .execute(self.pool())
        .await?;

        tracing::debug!(task_id = %task.id, domain = %task.domain, "task inserted");
        Ok(task)
    }

    async fn save(&self, task: &Task) -> Result<Task, CoreError> {
        let mut tx = self.pool().begin().await?;
        let saved = Self::save_task(&mut tx, task).await?;
        tx.commit().await?;
        Ok(saved)
    }

    async fn delete(&self, id: Uuid) -> Result<(), CoreError> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = $1")
            .bind(id)
            .execute(self.pool())
            .await?;

        if result.rows_affected() == 0 {
            return Err(CoreError::NotFound(id.to_string()));
        }
        Ok(())
    }
}

impl SqliteStore {
    /// Version-checked update inside `tx`; see [`TaskStore::save`].
    pub(crate) async fn save_task<'a>(
        tx: &mut Transaction<'a, Sqlite>,
        task: &Task,
    ) -> Result<Task, CoreError> {
        let rule = serde_json::to_string(&task.rule)?;
        let result = sqlx::query(
            r#"UPDATE tasks
            SET template_id = $1, name = $2, description = $3, category = $4, domain = $5, rule = $6,
                cost = $7, notes = $8, last_completed_at = $9, next_due = $10, version = version + 1
            WHERE id = $11 AND version = $12
            "#,
        )
        .bind(&task.template_id)
        .bind(&task.name)
        .bind(&task.description)
        .bind(&task.category)
        .bind(task.domain)
        .bind(rule)
        .bind(task.cost)
        .bind(&task.notes)
        .bind(task.last_completed_at)
        .bind(task.next_due)
        .bind(task.id)
        .bind(task.version)
        .execute(&mut **tx)
        .await?;

        if result.rows_affected() == 0 {
            let exists: Option<i64> = sqlx::query_scalar("SELECT version FROM tasks WHERE id = $1")
                .bind(task.id)
                .fetch_optional(&mut **tx)
                .await?;
            return Err(match exists {
                Some(stored) => {
                    tracing::warn!(task_id = %task.id, expected = task.version, stored, "stale task version");
                    CoreError::Conflict(task.name.clone())
                }
                None => CoreError::NotFound(task.id.to_string()),
            });
        }

        let mut saved = task.clone();
        saved.version += 1;
        tracing::debug!(task_id = %saved.id, version = saved.version, next_due = %saved.next_due, "task saved");
        Ok(saved)
    }
}
