use anyhow::Result;
use chore_core::store::Store;
use chore_core::tracker::Tracker;
use chrono_tz::Tz;

use crate::cli::HistoryCommand;
use crate::views::table::display_history;

pub async fn show_history<S: Store>(tracker: &Tracker<S>, command: HistoryCommand, tz: Tz) -> Result<()> {
    let mut entries = tracker.history(command.domain).await?;
    if let Some(limit) = command.limit {
        entries.truncate(limit);
    }
    display_history(&entries, tz);
    Ok(())
}
