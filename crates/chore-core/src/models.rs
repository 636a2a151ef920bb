use chrono::{DateTime, NaiveDate, Utc, Weekday};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use uuid::Uuid;

use crate::error::CoreError;

/// Top-level life area a task belongs to. Only used for grouping.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash, sqlx::Type)]
#[sqlx(type_name = "TEXT", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Domain {
    #[default]
    Home,
    Car,
    Pet,
    Life,
}

impl Domain {
    pub const ALL: [Domain; 4] = [Domain::Home, Domain::Car, Domain::Pet, Domain::Life];
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Domain::Home => write!(f, "home"),
            Domain::Car => write!(f, "car"),
            Domain::Pet => write!(f, "pet"),
            Domain::Life => write!(f, "life"),
        }
    }
}

#[derive(Error, Debug, PartialEq)]
#[error("Invalid domain: {0} (expected home, car, pet or life)")]
pub struct ParseDomainError(String);

impl FromStr for Domain {
    type Err = ParseDomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "home" => Ok(Domain::Home),
            "car" => Ok(Domain::Car),
            "pet" => Ok(Domain::Pet),
            "life" => Ok(Domain::Life),
            _ => Err(ParseDomainError(s.to_string())),
        }
    }
}

// ============================================================================
// Recurrence Rules
// ============================================================================

/// Calendar unit used by [`RecurrenceRule::Custom`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CustomUnit {
    Days,
    Weeks,
    Months,
    Years,
}

impl fmt::Display for CustomUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CustomUnit::Days => write!(f, "days"),
            CustomUnit::Weeks => write!(f, "weeks"),
            CustomUnit::Months => write!(f, "months"),
            CustomUnit::Years => write!(f, "years"),
        }
    }
}

#[derive(Error, Debug, PartialEq)]
#[error("Invalid recurrence unit: {0} (expected days, weeks, months or years)")]
pub struct ParseCustomUnitError(String);

impl FromStr for CustomUnit {
    type Err = ParseCustomUnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "day" | "days" => Ok(CustomUnit::Days),
            "week" | "weeks" => Ok(CustomUnit::Weeks),
            "month" | "months" => Ok(CustomUnit::Months),
            "year" | "years" => Ok(CustomUnit::Years),
            _ => Err(ParseCustomUnitError(s.to_string())),
        }
    }
}

/// Weekly recurrence: either every N weeks, or pinned to a weekday.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Weekly {
    Every { interval: u32 },
    On(Weekday),
}

/// Monthly recurrence: either every N months, or pinned to a day of the month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Monthly {
    Every { interval: u32 },
    /// Day of month, 1..=31. Short months clamp to their last day.
    OnDay(u32),
}

/// How often a task repeats.
///
/// Each variant carries only the fields meaningful for its kind, so a pinned
/// weekday on a monthly rule (or a unit on a yearly rule) cannot be expressed.
/// Rules are stored as a flat [`FrequencyRecord`]; see the `From` impls for how
/// malformed records are normalized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "FrequencyRecord", into = "FrequencyRecord")]
pub enum RecurrenceRule {
    Daily,
    Weekly(Weekly),
    Monthly(Monthly),
    Yearly { interval: u32 },
    Custom { interval: u32, unit: CustomUnit },
    /// A kind this build does not know. Kept verbatim so it survives a
    /// load/save cycle; resolves like `Daily`.
    Unrecognized { kind: String },
}

impl Default for RecurrenceRule {
    fn default() -> Self {
        RecurrenceRule::Monthly(Monthly::Every { interval: 1 })
    }
}

impl RecurrenceRule {
    pub fn weekly(interval: u32) -> Self {
        RecurrenceRule::Weekly(Weekly::Every { interval: interval.max(1) })
    }

    pub fn weekly_on(day: Weekday) -> Self {
        RecurrenceRule::Weekly(Weekly::On(day))
    }

    /// Weekly rule pinned to a Sunday-based weekday index (Sunday = 0).
    pub fn weekly_on_index(index: i64) -> Result<Self, CoreError> {
        weekday_from_index(index)
            .map(Self::weekly_on)
            .ok_or_else(|| CoreError::InvalidInput(format!("Day of week must be 0-6, got {}", index)))
    }

    pub fn monthly(interval: u32) -> Self {
        RecurrenceRule::Monthly(Monthly::Every { interval: interval.max(1) })
    }

    pub fn monthly_on(day: u32) -> Result<Self, CoreError> {
        if (1..=31).contains(&day) {
            Ok(RecurrenceRule::Monthly(Monthly::OnDay(day)))
        } else {
            Err(CoreError::InvalidInput(format!("Day of month must be 1-31, got {}", day)))
        }
    }

    pub fn yearly(interval: u32) -> Self {
        RecurrenceRule::Yearly { interval: interval.max(1) }
    }

    pub fn custom(interval: u32, unit: CustomUnit) -> Self {
        RecurrenceRule::Custom { interval: interval.max(1), unit }
    }
}

/// Sunday-based weekday index (Sunday = 0 .. Saturday = 6).
pub fn weekday_from_index(index: i64) -> Option<Weekday> {
    match index {
        0 => Some(Weekday::Sun),
        1 => Some(Weekday::Mon),
        2 => Some(Weekday::Tue),
        3 => Some(Weekday::Wed),
        4 => Some(Weekday::Thu),
        5 => Some(Weekday::Fri),
        6 => Some(Weekday::Sat),
        _ => None,
    }
}

/// Flat storage form of a [`RecurrenceRule`], as kept in the `rule` column.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrequencyRecord {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day_of_week: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day_of_month: Option<i64>,
}

impl FrequencyRecord {
    /// Strict check for records entered by a user. Stored records are never
    /// validated; they go through the lenient `From` conversion instead.
    pub fn validate(&self) -> Result<(), CoreError> {
        let kind = self.kind.to_lowercase();
        if !matches!(kind.as_str(), "daily" | "weekly" | "monthly" | "yearly" | "custom") {
            return Err(CoreError::InvalidInput(format!("Unknown frequency: {}", self.kind)));
        }
        if let Some(value) = self.value {
            if value < 1 || value > i64::from(u32::MAX) {
                return Err(CoreError::InvalidInput(format!("Interval must be a positive number, got {}", value)));
            }
            if kind == "daily" {
                return Err(CoreError::InvalidInput("Daily rules take no interval; use a custom rule".to_string()));
            }
            if self.day_of_week.is_some() || self.day_of_month.is_some() {
                return Err(CoreError::InvalidInput(
                    "A rule repeats either on a fixed day or every N periods, not both".to_string(),
                ));
            }
        }
        if let Some(day) = self.day_of_week {
            if kind != "weekly" {
                return Err(CoreError::InvalidInput("A day of week only applies to weekly rules".to_string()));
            }
            RecurrenceRule::weekly_on_index(day)?;
        }
        if let Some(day) = self.day_of_month {
            if kind != "monthly" {
                return Err(CoreError::InvalidInput("A day of month only applies to monthly rules".to_string()));
            }
            if !(1..=31).contains(&day) {
                return Err(CoreError::InvalidInput(format!("Day of month must be 1-31, got {}", day)));
            }
        }
        match (&self.unit, kind.as_str()) {
            (Some(unit), "custom") => {
                unit.parse::<CustomUnit>()
                    .map_err(|e| CoreError::InvalidInput(e.to_string()))?;
            }
            (Some(_), _) => {
                return Err(CoreError::InvalidInput("A unit only applies to custom rules".to_string()));
            }
            (None, _) => {}
        }
        Ok(())
    }
}

fn normalize_interval(value: Option<i64>) -> u32 {
    match value {
        Some(v) if v >= 1 => u32::try_from(v).unwrap_or(u32::MAX),
        _ => 1,
    }
}

impl From<FrequencyRecord> for RecurrenceRule {
    fn from(record: FrequencyRecord) -> Self {
        let interval = normalize_interval(record.value);
        match record.kind.to_lowercase().as_str() {
            "daily" => RecurrenceRule::Daily,
            "weekly" => match record.day_of_week.and_then(weekday_from_index) {
                Some(day) => RecurrenceRule::Weekly(Weekly::On(day)),
                None => RecurrenceRule::Weekly(Weekly::Every { interval }),
            },
            "monthly" => match record.day_of_month.filter(|day| (1..=31).contains(day)) {
                Some(day) => RecurrenceRule::Monthly(Monthly::OnDay(day as u32)),
                None => RecurrenceRule::Monthly(Monthly::Every { interval }),
            },
            "yearly" => RecurrenceRule::Yearly { interval },
            "custom" => RecurrenceRule::Custom {
                interval,
                unit: record
                    .unit
                    .as_deref()
                    .and_then(|unit| unit.parse().ok())
                    .unwrap_or(CustomUnit::Days),
            },
            _ => RecurrenceRule::Unrecognized { kind: record.kind },
        }
    }
}

impl From<RecurrenceRule> for FrequencyRecord {
    fn from(rule: RecurrenceRule) -> Self {
        let record = |kind: &str| FrequencyRecord { kind: kind.to_string(), ..Default::default() };
        match rule {
            RecurrenceRule::Daily => record("daily"),
            RecurrenceRule::Weekly(Weekly::On(day)) => FrequencyRecord {
                day_of_week: Some(i64::from(day.num_days_from_sunday())),
                ..record("weekly")
            },
            RecurrenceRule::Weekly(Weekly::Every { interval }) => FrequencyRecord {
                value: Some(i64::from(interval)),
                ..record("weekly")
            },
            RecurrenceRule::Monthly(Monthly::OnDay(day)) => FrequencyRecord {
                day_of_month: Some(i64::from(day)),
                ..record("monthly")
            },
            RecurrenceRule::Monthly(Monthly::Every { interval }) => FrequencyRecord {
                value: Some(i64::from(interval)),
                ..record("monthly")
            },
            RecurrenceRule::Yearly { interval } => FrequencyRecord {
                value: Some(i64::from(interval)),
                ..record("yearly")
            },
            RecurrenceRule::Custom { interval, unit } => FrequencyRecord {
                value: Some(i64::from(interval)),
                unit: Some(unit.to_string()),
                ..record("custom")
            },
            RecurrenceRule::Unrecognized { kind } => FrequencyRecord { kind, ..Default::default() },
        }
    }
}

// ============================================================================
// Tasks and History
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: Uuid,
    /// Catalog template this task was created from, `None` for custom tasks
    pub template_id: Option<String>,
    pub name: String,
    pub description: Option<String>,
    pub category: String,
    pub domain: Domain,
    pub rule: RecurrenceRule,
    pub cost: Option<f64>,
    pub notes: Option<String>,
    pub last_completed_at: Option<DateTime<Utc>>,
    /// Day-granular due date. Always derived from `rule` or a snooze.
    pub next_due: NaiveDate,
    pub created_at: DateTime<Utc>,
    /// Bumped by the store on every save
    pub version: i64,
}

#[derive(Debug, Clone, Default)]
pub struct NewTask {
    pub template_id: Option<String>,
    pub name: String,
    pub description: Option<String>,
    pub category: String,
    pub domain: Domain,
    pub rule: RecurrenceRule,
    pub cost: Option<f64>,
    pub notes: Option<String>,
    /// Explicit first due date; computed from `rule` when absent
    pub due: Option<NaiveDate>,
}

#[derive(Debug, Clone, Default)]
pub struct TaskEdit {
    pub name: Option<String>,
    pub description: Option<Option<String>>,
    pub category: Option<String>,
    pub domain: Option<Domain>,
    pub rule: Option<RecurrenceRule>,
    pub cost: Option<Option<f64>>,
    pub notes: Option<Option<String>>,
    /// Explicit due date; takes precedence over a recomputation from `rule`
    pub due: Option<NaiveDate>,
}

impl TaskEdit {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.category.is_none()
            && self.domain.is_none()
            && self.rule.is_none()
            && self.cost.is_none()
            && self.notes.is_none()
            && self.due.is_none()
    }
}

/// A record of one completion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct HistoryEntry {
    pub id: Uuid,
    pub task_id: Uuid,
    pub task_name: String,
    pub category: String,
    pub domain: Domain,
    pub completed_at: DateTime<Utc>,
    pub notes: Option<String>,
    pub cost: Option<f64>,
}
