use anyhow::Result;
use chore_core::format::describe_due;
use chore_core::store::Store;
use chore_core::timezone::now_in;
use chore_core::tracker::Tracker;
use chrono_tz::Tz;
use owo_colors::OwoColorize;

use crate::cli::TaskIdCommand;
use crate::util::resolve_task_id;

pub async fn done_task<S: Store>(tracker: &Tracker<S>, command: TaskIdCommand, tz: Tz) -> Result<()> {
    let task_id = resolve_task_id(tracker.store(), &command.id).await?;
    let now = now_in(tz);
    let (task, _) = tracker.complete_task(task_id, &now).await?;

    println!("{} Completed task: '{}'", "✓".green().bold(), task.name);
    println!(
        "  Next due: {} ({})",
        describe_due(task.next_due, now.date_naive()),
        task.next_due
    );
    Ok(())
}
