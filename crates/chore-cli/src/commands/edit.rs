use anyhow::Result;
use chore_core::format::describe_rule;
use chore_core::models::TaskEdit;
use chore_core::store::Store;
use chore_core::timezone::now_in;
use chore_core::tracker::Tracker;
use chrono_tz::Tz;

use crate::cli::EditCommand;
use crate::parser::{build_rule, parse_due_date};
use crate::util::resolve_task_id;

fn set_or_clear<T>(value: Option<T>, clear: bool) -> Option<Option<T>> {
    if clear {
        Some(None)
    } else {
        value.map(Some)
    }
}

pub async fn edit_task<S: Store>(tracker: &Tracker<S>, command: EditCommand, tz: Tz) -> Result<()> {
    let task_id = resolve_task_id(tracker.store(), &command.id).await?;
    let now = now_in(tz);

    let edit = TaskEdit {
        name: command.name,
        description: set_or_clear(command.description, command.description_clear),
        category: command.category,
        domain: command.domain,
        rule: build_rule(&command.rule)?,
        cost: set_or_clear(command.cost, command.cost_clear),
        notes: set_or_clear(command.notes, command.notes_clear),
        due: command.due.as_deref().map(|d| parse_due_date(d, now)).transpose()?,
    };

    let task = tracker.edit_task(task_id, edit, &now).await?;
    println!("Updated task: '{}'", task.name);
    println!("  Repeats: {}, next due {}", describe_rule(&task.rule), task.next_due);
    Ok(())
}
