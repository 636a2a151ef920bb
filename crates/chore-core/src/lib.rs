//! # Chore Core Library
//!
//! Recurrence and urgency engine for household chores, car and pet care, and
//! recurring bills.
//!
//! ## Features
//!
//! - **Completion-anchored recurrence**: the next due date is always computed
//!   from the day a task was last done, never from the previous due date
//! - **Pinned schedules**: weekly on a weekday, monthly on a day of the month
//!   (clamped to short months)
//! - **Urgency agenda**: stable ordering into overdue, today, soon, this week
//!   and future sections
//! - **Timezone awareness**: "today" and completion days are local calendar days
//! - **Optimistic concurrency**: stale read-modify-write cycles surface as
//!   [`error::CoreError::Conflict`]
//!
//! ## Core Modules
//!
//! - [`models`]: Tasks, recurrence rules and their stored frequency record
//! - [`recurrence`]: Next-due-date resolution
//! - [`urgency`]: Urgency tiers, sorting and grouping
//! - [`format`]: Human-readable rule and due-date labels
//! - [`lifecycle`]: Pure create/complete/snooze/edit transitions
//! - [`templates`]: Built-in catalog of default tasks
//! - [`store`]: Task and history persistence over SQLite
//! - [`tracker`]: Store-backed operations used by front ends
//! - [`db`]: Database connection and migration management
//! - [`timezone`]: Timezone utilities and validation
//! - [`error`]: Error types
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use chore_core::{
//!     db, models::Domain, store::SqliteStore, timezone, tracker::Tracker,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), chore_core::error::CoreError> {
//!     let pool = db::establish_connection("chore.db").await?;
//!     let tracker = Tracker::new(SqliteStore::new(pool));
//!     let tz = timezone::validate_timezone("America/New_York")?;
//!
//!     let task = tracker.add_from_template("home-air-filter", &timezone::now_in(tz)).await?;
//!     println!("{} is due {}", task.name, task.next_due);
//!
//!     let agenda = tracker.agenda(Some(Domain::Home), timezone::today_in(tz)).await?;
//!     for section in agenda.sections() {
//!         println!("{}", section.tier.section_label(section.tasks.len()));
//!     }
//!     Ok(())
//! }
//! ```

pub mod db;
pub mod error;
pub mod format;
pub mod lifecycle;
pub mod models;
pub mod recurrence;
pub mod store;
pub mod templates;
pub mod timezone;
pub mod tracker;
pub mod urgency;
