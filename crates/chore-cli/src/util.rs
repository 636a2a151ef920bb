use anyhow::{anyhow, Result};
use chore_core::error::CoreError;
use chore_core::store::TaskStore;
use uuid::Uuid;

pub async fn resolve_task_id(store: &impl TaskStore, short_id: &str) -> Result<Uuid> {
    if short_id.len() < 2 {
        return Err(anyhow!(CoreError::InvalidInput(
            "Short ID must be at least 2 characters long.".to_string()
        )));
    }
    if let Ok(id) = Uuid::parse_str(short_id) {
        return Ok(id);
    }
    let tasks = store.find_by_prefix(short_id).await?;
    if tasks.len() == 1 {
        Ok(tasks[0].id)
    } else if tasks.is_empty() {
        Err(anyhow!(CoreError::NotFound(format!(
            "No task found with ID prefix '{}'",
            short_id
        ))))
    } else {
        let task_info: Vec<(String, String)> = tasks
            .into_iter()
            .map(|t| (t.id.to_string(), t.name))
            .collect();
        Err(anyhow!(CoreError::AmbiguousId(task_info)))
    }
}

/// First characters of an id, as shown in tables
pub fn short_id(id: &Uuid) -> String {
    id.simple().to_string()[..8].to_string()
}
