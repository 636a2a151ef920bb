use anyhow::Result;
use chore_core::store::{Store, TaskStore};
use chore_core::tracker::Tracker;
use dialoguer::Confirm;

use crate::cli::DeleteCommand;
use crate::util::resolve_task_id;

pub async fn delete_task<S: Store>(tracker: &Tracker<S>, command: DeleteCommand) -> Result<()> {
    let task_id = resolve_task_id(tracker.store(), &command.id).await?;

    if !command.force {
        let name = tracker
            .store()
            .find(task_id)
            .await?
            .map(|task| task.name)
            .unwrap_or_else(|| task_id.to_string());
        let confirmation = Confirm::new()
            .with_prompt(format!("Are you sure you want to delete task '{}'?", name))
            .default(false)
            .interact()
            .unwrap_or(false);

        if !confirmation {
            println!("Deletion cancelled.");
            return Ok(());
        }
    }

    let task = tracker.delete_task(task_id).await?;
    println!("Deleted task: '{}'", task.name);
    Ok(())
}
