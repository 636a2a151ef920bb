use chore_core::format::{describe_due, describe_rule};
use chore_core::models::{HistoryEntry, Task};
use chore_core::templates::TaskTemplate;
use chore_core::urgency::{classify, urgency_key, Agenda, UrgencyTier};
use chrono::NaiveDate;
use chrono_tz::Tz;
use comfy_table::{Attribute, Cell, Color, Row, Table};
use owo_colors::{OwoColorize, Style};
use std::collections::BTreeMap;

use crate::util::short_id;

fn tier_color(tier: UrgencyTier) -> Option<Color> {
    match tier {
        UrgencyTier::Overdue => Some(Color::Red),
        UrgencyTier::DueToday => Some(Color::Yellow),
        UrgencyTier::DueSoon => Some(Color::Cyan),
        UrgencyTier::DueThisWeek => Some(Color::Blue),
        UrgencyTier::Future => None,
    }
}

fn tier_style(tier: UrgencyTier) -> Style {
    match tier {
        UrgencyTier::Overdue => Style::new().red().bold(),
        UrgencyTier::DueToday => Style::new().yellow().bold(),
        UrgencyTier::DueSoon => Style::new().cyan().bold(),
        UrgencyTier::DueThisWeek => Style::new().blue().bold(),
        UrgencyTier::Future => Style::new().bright_black(),
    }
}

fn format_cost(cost: Option<f64>) -> String {
    cost.map(|c| format!("${:.2}", c)).unwrap_or_default()
}

fn task_table(tasks: &[&Task], today: NaiveDate) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["ID", "Name", "Category", "Domain", "Frequency", "Due", "Cost"]);

    for task in tasks {
        let mut row = Row::new();
        row.add_cell(Cell::new(short_id(&task.id)));

        let mut name_cell = Cell::new(&task.name);
        let mut due_cell = Cell::new(describe_due(task.next_due, today));
        let tier = classify(task.next_due, today);
        if let Some(color) = tier_color(tier) {
            due_cell = due_cell.fg(color);
        }
        if tier == UrgencyTier::Overdue {
            name_cell = name_cell.add_attribute(Attribute::Bold);
        }

        row.add_cell(name_cell);
        row.add_cell(Cell::new(&task.category));
        row.add_cell(Cell::new(task.domain));
        row.add_cell(Cell::new(describe_rule(&task.rule)));
        row.add_cell(due_cell);
        row.add_cell(Cell::new(format_cost(task.cost)));
        table.add_row(row);
    }
    table
}

/// Prints each non-empty urgency section under its heading.
pub fn display_agenda(agenda: &Agenda) {
    if agenda.is_empty() {
        println!("No tasks found.");
        return;
    }

    for section in agenda.sections() {
        let label = section.tier.section_label(section.tasks.len());
        println!("{}", label.style(tier_style(section.tier)));
        let tasks: Vec<&Task> = section.tasks.iter().collect();
        println!("{}\n", task_table(&tasks, agenda.today()));
    }
}

/// Prints tasks grouped by category, most urgent first inside each group.
pub fn display_by_category(tasks: &[Task], today: NaiveDate) {
    if tasks.is_empty() {
        println!("No tasks found.");
        return;
    }

    let mut groups: BTreeMap<&str, Vec<&Task>> = BTreeMap::new();
    for task in tasks {
        groups.entry(task.category.as_str()).or_default().push(task);
    }

    for (category, mut group) in groups {
        group.sort_by_key(|task| urgency_key(task, today));
        println!("{}", category.bold());
        println!("{}\n", task_table(&group, today));
    }
}

pub fn display_history(entries: &[HistoryEntry], tz: Tz) {
    if entries.is_empty() {
        println!("No history yet.");
        return;
    }

    let mut table = Table::new();
    table.set_header(vec!["Completed", "Task", "Category", "Domain", "Cost", "Notes"]);

    for entry in entries {
        let mut row = Row::new();
        row.add_cell(Cell::new(
            entry.completed_at.with_timezone(&tz).format("%Y-%m-%d %H:%M"),
        ));
        row.add_cell(Cell::new(&entry.task_name));
        row.add_cell(Cell::new(&entry.category));
        row.add_cell(Cell::new(entry.domain));
        row.add_cell(Cell::new(format_cost(entry.cost)));
        row.add_cell(Cell::new(entry.notes.as_deref().unwrap_or("")));
        table.add_row(row);
    }

    let total: f64 = entries.iter().filter_map(|entry| entry.cost).sum();
    println!("{table}");
    if total > 0.0 {
        println!("Total spent: {}", format_cost(Some(total)).green());
    }
}

pub fn display_templates<'a>(templates: impl IntoIterator<Item = &'a TaskTemplate>) {
    let mut table = Table::new();
    table.set_header(vec!["Template", "Name", "Category", "Domain", "Frequency", "Cost"]);

    for template in templates {
        let mut row = Row::new();
        row.add_cell(Cell::new(template.id).fg(Color::Yellow));
        row.add_cell(Cell::new(template.name));
        row.add_cell(Cell::new(template.category));
        row.add_cell(Cell::new(template.domain));
        row.add_cell(Cell::new(describe_rule(&template.rule)));
        row.add_cell(Cell::new(format_cost(template.default_cost)));
        table.add_row(row);
    }

    println!("{table}");
}

pub fn display_preview(task: &Task, dates: &[NaiveDate], today: NaiveDate) {
    println!(
        "{} ({})",
        task.name.bright_white().bold(),
        describe_rule(&task.rule)
    );

    let mut table = Table::new();
    table.set_header(vec!["#", "Date", "Weekday", "When"]);
    for (i, date) in std::iter::once(&task.next_due).chain(dates).enumerate() {
        let mut row = Row::new();
        row.add_cell(Cell::new(i + 1));
        row.add_cell(Cell::new(date.format("%Y-%m-%d")));
        row.add_cell(Cell::new(date.format("%A")));
        row.add_cell(Cell::new(describe_due(*date, today)));
        table.add_row(row);
    }
    println!("{table}");
}
