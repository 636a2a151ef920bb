//! Store-backed operations: each one reads the current task, applies a
//! [`lifecycle`](crate::lifecycle) transition, and writes it back under the
//! version it read.

use chrono::{DateTime, NaiveDate};
use chrono_tz::Tz;
use uuid::Uuid;

use crate::error::CoreError;
use crate::lifecycle;
use crate::models::{Domain, HistoryEntry, NewTask, Task, TaskEdit};
use crate::store::Store;
use crate::templates::{self, find_template};
use crate::urgency::{group_by_urgency, Agenda};

pub struct Tracker<S> {
    store: S,
}

impl<S: Store> Tracker<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    async fn fetch(&self, id: Uuid) -> Result<Task, CoreError> {
        self.store
            .find(id)
            .await?
            .ok_or_else(|| CoreError::NotFound(id.to_string()))
    }

    pub async fn add_task(&self, data: NewTask, now: &DateTime<Tz>) -> Result<Task, CoreError> {
        if data.name.trim().is_empty() {
            return Err(CoreError::InvalidInput("Task name cannot be empty".to_string()));
        }
        let task = self.store.insert(lifecycle::new_task(data, now)).await?;
        tracing::info!(task_id = %task.id, domain = %task.domain, next_due = %task.next_due, "task added");
        Ok(task)
    }

    pub async fn add_from_template(&self, template_id: &str, now: &DateTime<Tz>) -> Result<Task, CoreError> {
        let template = find_template(template_id)
            .ok_or_else(|| CoreError::NotFound(format!("template '{}'", template_id)))?;
        self.add_task(template.instantiate(), now).await
    }

    /// Adds the default tasks of each domain, but only into an empty store.
    /// Returns the tasks created.
    pub async fn seed_defaults(&self, domains: &[Domain], now: &DateTime<Tz>) -> Result<Vec<Task>, CoreError> {
        if !self.store.load_all().await?.is_empty() {
            tracing::info!("store already has tasks; skipping seed");
            return Ok(Vec::new());
        }

        let mut created = Vec::new();
        for &domain in domains {
            for data in templates::seed_tasks(domain) {
                created.push(self.store.insert(lifecycle::new_task(data, now)).await?);
            }
        }
        tracing::info!(count = created.len(), "seeded default tasks");
        Ok(created)
    }

    pub async fn complete_task(&self, id: Uuid, now: &DateTime<Tz>) -> Result<(Task, HistoryEntry), CoreError> {
        let task = self.fetch(id).await?;
        let (task, entry) = lifecycle::complete(task, now);
        let (task, entry) = self.store.record_completion(&task, entry).await?;
        tracing::info!(task_id = %task.id, domain = %task.domain, next_due = %task.next_due, "task completed");
        Ok((task, entry))
    }

    pub async fn snooze_task(&self, id: Uuid) -> Result<Task, CoreError> {
        let task = lifecycle::snooze(self.fetch(id).await?);
        let task = self.store.save(&task).await?;
        tracing::info!(task_id = %task.id, next_due = %task.next_due, "task snoozed");
        Ok(task)
    }

    pub async fn edit_task(&self, id: Uuid, edit: TaskEdit, now: &DateTime<Tz>) -> Result<Task, CoreError> {
        if edit.is_empty() {
            return Err(CoreError::InvalidInput("Nothing to update".to_string()));
        }
        if matches!(&edit.name, Some(name) if name.trim().is_empty()) {
            return Err(CoreError::InvalidInput("Task name cannot be empty".to_string()));
        }

        let task = lifecycle::apply_edit(self.fetch(id).await?, edit, now);
        let task = self.store.save(&task).await?;
        tracing::info!(task_id = %task.id, next_due = %task.next_due, "task edited");
        Ok(task)
    }

    pub async fn delete_task(&self, id: Uuid) -> Result<Task, CoreError> {
        let task = self.fetch(id).await?;
        self.store.delete(id).await?;
        tracing::info!(task_id = %id, "task deleted");
        Ok(task)
    }

    pub async fn tasks(&self, domain: Option<Domain>) -> Result<Vec<Task>, CoreError> {
        match domain {
            Some(domain) => self.store.load_domain(domain).await,
            None => self.store.load_all().await,
        }
    }

    pub async fn agenda(&self, domain: Option<Domain>, today: NaiveDate) -> Result<Agenda, CoreError> {
        Ok(group_by_urgency(self.tasks(domain).await?, today))
    }

    pub async fn history(&self, domain: Option<Domain>) -> Result<Vec<HistoryEntry>, CoreError> {
        self.store.load_history(domain).await
    }
}
