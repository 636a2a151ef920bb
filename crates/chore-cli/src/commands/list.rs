use anyhow::Result;
use chore_core::format::{describe_due, describe_rule};
use chore_core::models::{Domain, Task};
use chore_core::store::Store;
use chore_core::timezone::today_in;
use chore_core::tracker::Tracker;
use chore_core::urgency::{classify, UrgencyTier};
use chrono::NaiveDate;
use chrono_tz::Tz;
use serde::Serialize;

use crate::cli::ListCommand;
use crate::config::Config;
use crate::views::table::{display_agenda, display_by_category};

#[derive(Serialize)]
struct ListedTask<'a> {
    #[serde(flatten)]
    task: &'a Task,
    urgency: UrgencyTier,
    frequency: String,
    due: String,
}

fn selected_domain(command: &ListCommand, config: &Config) -> Option<Domain> {
    if command.everything {
        None
    } else {
        command.domain.or(config.default_domain)
    }
}

fn print_json<'a>(tasks: impl IntoIterator<Item = &'a Task>, today: NaiveDate) -> Result<()> {
    let listed: Vec<ListedTask> = tasks
        .into_iter()
        .map(|task| ListedTask {
            task,
            urgency: classify(task.next_due, today),
            frequency: describe_rule(&task.rule),
            due: describe_due(task.next_due, today),
        })
        .collect();
    println!("{}", serde_json::to_string_pretty(&listed)?);
    Ok(())
}

pub async fn list_tasks<S: Store>(
    tracker: &Tracker<S>,
    command: ListCommand,
    config: &Config,
    tz: Tz,
) -> Result<()> {
    let today = today_in(tz);
    let agenda = tracker.agenda(selected_domain(&command, config), today).await?;

    if command.json {
        return print_json(agenda.sections().flat_map(|section| section.tasks.iter()), today);
    }
    display_agenda(&agenda);
    Ok(())
}

pub async fn list_all<S: Store>(
    tracker: &Tracker<S>,
    command: ListCommand,
    config: &Config,
    tz: Tz,
) -> Result<()> {
    let today = today_in(tz);
    let tasks = tracker.tasks(selected_domain(&command, config)).await?;

    if command.json {
        return print_json(&tasks, today);
    }
    display_by_category(&tasks, today);
    Ok(())
}
