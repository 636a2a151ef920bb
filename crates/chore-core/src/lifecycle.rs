//! Pure state transitions for a [`Task`].
//!
//! Each function takes a task by value and returns the updated task; the caller
//! is responsible for persisting the result.

use chrono::{DateTime, Days, NaiveDate, TimeZone, Utc};
use uuid::Uuid;

use crate::models::{HistoryEntry, NewTask, Task, TaskEdit};
use crate::recurrence::{resolve_next_due, resolve_next_due_at};

/// Builds a task created at `created_at`. The first due date comes from the
/// rule unless `data.due` supplies one.
pub fn new_task<Tz: TimeZone>(data: NewTask, created_at: &DateTime<Tz>) -> Task {
    let next_due = data
        .due
        .unwrap_or_else(|| resolve_next_due_at(&data.rule, created_at));

    // Random ids keep short prefixes distinct for tasks created together
    Task {
        id: Uuid::new_v4(),
        template_id: data.template_id,
        name: data.name,
        description: data.description,
        category: data.category,
        domain: data.domain,
        rule: data.rule,
        cost: data.cost,
        notes: data.notes,
        last_completed_at: None,
        next_due,
        created_at: created_at.with_timezone(&Utc),
        version: 0,
    }
}

/// Marks `task` done at `at` and schedules the next occurrence from that day.
pub fn complete<Tz: TimeZone>(mut task: Task, at: &DateTime<Tz>) -> (Task, HistoryEntry) {
    let completed_at = at.with_timezone(&Utc);
    task.last_completed_at = Some(completed_at);
    task.next_due = resolve_next_due_at(&task.rule, at);

    let entry = HistoryEntry {
        id: Uuid::now_v7(),
        task_id: task.id,
        task_name: task.name.clone(),
        category: task.category.clone(),
        domain: task.domain,
        completed_at,
        notes: task.notes.clone(),
        cost: task.cost,
    };
    (task, entry)
}

/// Pushes the due date back by exactly one day, whatever the rule.
pub fn snooze(mut task: Task) -> Task {
    task.next_due = task
        .next_due
        .checked_add_days(Days::new(1))
        .unwrap_or(NaiveDate::MAX);
    task
}

/// Applies an edit. An explicit `due` wins; otherwise a changed rule is
/// re-resolved from the local day of the last completion, or from `now` for a
/// task that was never completed.
pub fn apply_edit<Tz: TimeZone>(mut task: Task, edit: TaskEdit, now: &DateTime<Tz>) -> Task {
    if let Some(name) = edit.name {
        task.name = name;
    }
    if let Some(description) = edit.description {
        task.description = description;
    }
    if let Some(category) = edit.category {
        task.category = category;
    }
    if let Some(domain) = edit.domain {
        task.domain = domain;
    }
    if let Some(cost) = edit.cost {
        task.cost = cost;
    }
    if let Some(notes) = edit.notes {
        task.notes = notes;
    }

    let rule_changed = match edit.rule {
        Some(rule) if rule != task.rule => {
            task.rule = rule;
            true
        }
        _ => false,
    };

    if let Some(due) = edit.due {
        task.next_due = due;
    } else if rule_changed {
        let reference = task
            .last_completed_at
            .map(|at| at.with_timezone(&now.timezone()).date_naive())
            .unwrap_or_else(|| now.date_naive());
        task.next_due = resolve_next_due(&task.rule, reference);
    }

    task
}
