use anyhow::{anyhow, Result};
use chore_core::error::CoreError;
use chore_core::format::{describe_due, describe_rule};
use chore_core::models::NewTask;
use chore_core::store::Store;
use chore_core::templates::find_template;
use chore_core::timezone::now_in;
use chore_core::tracker::Tracker;
use chrono_tz::Tz;
use owo_colors::{OwoColorize, Style};

use crate::cli::AddCommand;
use crate::config::Config;
use crate::parser::{build_rule, parse_due_date};
use crate::util::short_id;

const DEFAULT_CATEGORY: &str = "General";

pub async fn add_task<S: Store>(
    tracker: &Tracker<S>,
    command: AddCommand,
    config: &Config,
    tz: Tz,
) -> Result<()> {
    let now = now_in(tz);
    let due = command.due.as_deref().map(|d| parse_due_date(d, now)).transpose()?;
    let rule = build_rule(&command.rule)?;

    let mut data = match command.template.as_deref() {
        Some(template_id) => find_template(template_id)
            .ok_or_else(|| anyhow!(CoreError::NotFound(format!("template '{}'", template_id))))?
            .instantiate(),
        None => NewTask {
            name: command.name.unwrap_or_default(),
            category: DEFAULT_CATEGORY.to_string(),
            domain: config.default_domain.unwrap_or_default(),
            ..Default::default()
        },
    };

    if let Some(category) = command.category {
        data.category = category;
    }
    if let Some(domain) = command.domain {
        data.domain = domain;
    }
    if let Some(rule) = rule {
        data.rule = rule;
    }
    if command.cost.is_some() {
        data.cost = command.cost;
    }
    if command.notes.is_some() {
        data.notes = command.notes;
    }
    if command.description.is_some() {
        data.description = command.description;
    }
    data.due = due;

    let task = tracker.add_task(data, &now).await?;

    let success_style = Style::new().green().bold();
    let info_style = Style::new().blue();
    println!(
        "{} Added task: {}",
        "✓".style(success_style),
        task.name.bright_white().bold()
    );
    println!("  {} Task ID: {}", "→".style(info_style), short_id(&task.id).yellow());
    println!("  {} Repeats: {}", "→".style(info_style), describe_rule(&task.rule));
    println!(
        "  {} Next due: {} ({})",
        "→".style(info_style),
        describe_due(task.next_due, now.date_naive()),
        task.next_due
    );

    Ok(())
}
