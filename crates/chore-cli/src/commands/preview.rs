use anyhow::{anyhow, Result};
use chore_core::error::CoreError;
use chore_core::recurrence::preview_due_dates;
use chore_core::store::{Store, TaskStore};
use chore_core::timezone::today_in;
use chore_core::tracker::Tracker;
use chrono_tz::Tz;

use crate::cli::PreviewCommand;
use crate::util::resolve_task_id;
use crate::views::table::display_preview;

pub async fn preview_task<S: Store>(tracker: &Tracker<S>, command: PreviewCommand, tz: Tz) -> Result<()> {
    let task_id = resolve_task_id(tracker.store(), &command.id).await?;
    let task = tracker
        .store()
        .find(task_id)
        .await?
        .ok_or_else(|| anyhow!(CoreError::NotFound(task_id.to_string())))?;

    let later = preview_due_dates(&task.rule, task.next_due, (command.count - 1) as usize);
    display_preview(&task, &later, today_in(tz));
    Ok(())
}
