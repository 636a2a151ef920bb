//! Urgency tiers used to order and group tasks for display.

use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;

use crate::models::Task;

/// Ordinal urgency bucket. Declaration order is the sort order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum UrgencyTier {
    Overdue,
    DueToday,
    DueSoon,
    DueThisWeek,
    Future,
}

impl UrgencyTier {
    pub const ALL: [UrgencyTier; 5] = [
        UrgencyTier::Overdue,
        UrgencyTier::DueToday,
        UrgencyTier::DueSoon,
        UrgencyTier::DueThisWeek,
        UrgencyTier::Future,
    ];

    /// Heading shown above a section of `count` tasks.
    pub fn section_label(self, count: usize) -> String {
        let noun = if count == 1 { "task" } else { "tasks" };
        match self {
            UrgencyTier::Overdue => format!("{count} {noun} overdue. Let's get these done!"),
            UrgencyTier::DueToday => format!("{count} {noun} due today. Make sure you check them off!"),
            UrgencyTier::DueSoon => format!("{count} {noun} due in the next 3 days. Stay on top of them!"),
            UrgencyTier::DueThisWeek => format!("{count} {noun} due this week. Make sure you check them off!"),
            UrgencyTier::Future => format!("{count} {noun} upcoming. You've got time!"),
        }
    }
}

impl fmt::Display for UrgencyTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UrgencyTier::Overdue => write!(f, "overdue"),
            UrgencyTier::DueToday => write!(f, "due today"),
            UrgencyTier::DueSoon => write!(f, "due soon"),
            UrgencyTier::DueThisWeek => write!(f, "due this week"),
            UrgencyTier::Future => write!(f, "future"),
        }
    }
}

/// Whole calendar days from `today` to `due`; negative when overdue.
pub fn days_until(due: NaiveDate, today: NaiveDate) -> i64 {
    (due - today).num_days()
}

pub fn classify(due: NaiveDate, today: NaiveDate) -> UrgencyTier {
    match days_until(due, today) {
        d if d < 0 => UrgencyTier::Overdue,
        0 => UrgencyTier::DueToday,
        1..=3 => UrgencyTier::DueSoon,
        4..=7 => UrgencyTier::DueThisWeek,
        _ => UrgencyTier::Future,
    }
}

/// Ordering key for urgency: tier first, then due date.
pub fn urgency_key(task: &Task, today: NaiveDate) -> (UrgencyTier, NaiveDate) {
    (classify(task.next_due, today), task.next_due)
}

/// Sorts by tier, then by due date. Stable: equal keys keep their input order.
pub fn sort_by_urgency(tasks: &mut [Task], today: NaiveDate) {
    tasks.sort_by_key(|task| urgency_key(task, today));
}

#[derive(Debug, Clone)]
pub struct AgendaSection {
    pub tier: UrgencyTier,
    pub tasks: Vec<Task>,
}

/// Tasks split into the five urgency sections, each sorted.
#[derive(Debug, Clone)]
pub struct Agenda {
    today: NaiveDate,
    sections: Vec<AgendaSection>,
}

impl Agenda {
    pub fn today(&self) -> NaiveDate {
        self.today
    }

    /// Non-empty sections in tier order.
    pub fn sections(&self) -> impl Iterator<Item = &AgendaSection> {
        self.sections.iter().filter(|section| !section.tasks.is_empty())
    }

    pub fn section(&self, tier: UrgencyTier) -> &[Task] {
        self.sections
            .iter()
            .find(|section| section.tier == tier)
            .map(|section| section.tasks.as_slice())
            .unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.sections.iter().map(|section| section.tasks.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

pub fn group_by_urgency(mut tasks: Vec<Task>, today: NaiveDate) -> Agenda {
    sort_by_urgency(&mut tasks, today);

    let mut sections: Vec<AgendaSection> = UrgencyTier::ALL
        .iter()
        .map(|&tier| AgendaSection { tier, tasks: Vec::new() })
        .collect();
    for task in tasks {
        let tier = classify(task.next_due, today);
        sections[tier as usize].tasks.push(task);
    }

    Agenda { today, sections }
}
