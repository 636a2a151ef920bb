use anyhow::Result;
use chore_core::format::describe_due;
use chore_core::store::Store;
use chore_core::timezone::today_in;
use chore_core::tracker::Tracker;
use chrono_tz::Tz;

use crate::cli::TaskIdCommand;
use crate::util::resolve_task_id;

pub async fn snooze_task<S: Store>(tracker: &Tracker<S>, command: TaskIdCommand, tz: Tz) -> Result<()> {
    let task_id = resolve_task_id(tracker.store(), &command.id).await?;
    let task = tracker.snooze_task(task_id).await?;

    println!(
        "Snoozed '{}' until {} ({})",
        task.name,
        describe_due(task.next_due, today_in(tz)),
        task.next_due
    );
    Ok(())
}
