//! Human-readable labels for rules and due dates.
//!
//! `describe_rule` branches exactly like [`crate::recurrence::resolve_next_due`]:
//! a rule that resolves daily is labelled daily, a pinned rule names its pin.

use chrono::{Datelike, NaiveDate, Weekday};

use crate::models::{CustomUnit, Monthly, RecurrenceRule, Weekly};
use crate::urgency::days_until;

pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Sun => "Sunday",
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
    }
}

fn every(interval: u32, singular: &'static str, plural: &str) -> String {
    if interval > 1 {
        format!("Every {} {}", interval, plural)
    } else {
        singular.to_string()
    }
}

pub fn describe_rule(rule: &RecurrenceRule) -> String {
    match rule {
        RecurrenceRule::Daily | RecurrenceRule::Unrecognized { .. } => "Daily".to_string(),
        RecurrenceRule::Weekly(Weekly::On(day)) => format!("Every {}", weekday_name(*day)),
        RecurrenceRule::Weekly(Weekly::Every { interval }) => every(*interval, "Weekly", "weeks"),
        RecurrenceRule::Monthly(Monthly::OnDay(day)) if (1..=31).contains(day) => {
            format!("Monthly on day {}", day)
        }
        // Out-of-range pins resolve as a plain one-month step
        RecurrenceRule::Monthly(Monthly::OnDay(_)) => "Monthly".to_string(),
        RecurrenceRule::Monthly(Monthly::Every { interval }) => every(*interval, "Monthly", "months"),
        RecurrenceRule::Yearly { interval } => every(*interval, "Yearly", "years"),
        RecurrenceRule::Custom { interval, unit } => {
            let singular = match unit {
                CustomUnit::Days => "Every day",
                CustomUnit::Weeks => "Every week",
                CustomUnit::Months => "Every month",
                CustomUnit::Years => "Every year",
            };
            every(*interval, singular, &unit.to_string())
        }
    }
}

/// Relative label for a due date: "Today", "Tomorrow", "3 days ago",
/// "In 5 days", or a short calendar date beyond a week out.
pub fn describe_due(due: NaiveDate, today: NaiveDate) -> String {
    match days_until(due, today) {
        0 => "Today".to_string(),
        -1 => "Yesterday".to_string(),
        1 => "Tomorrow".to_string(),
        d if d < 0 => format!("{} days ago", -d),
        d if d <= 7 => format!("In {} days", d),
        _ if due.year() == today.year() => due.format("%b %-d").to_string(),
        _ => due.format("%b %-d, %Y").to_string(),
    }
}
