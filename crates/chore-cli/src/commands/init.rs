use anyhow::Result;
use chore_core::models::Domain;
use chore_core::store::Store;
use chore_core::timezone::now_in;
use chore_core::tracker::Tracker;
use chrono_tz::Tz;
use owo_colors::OwoColorize;

use crate::cli::InitCommand;

pub async fn init_tasks<S: Store>(tracker: &Tracker<S>, command: InitCommand, tz: Tz) -> Result<()> {
    let domains = if command.domains.is_empty() {
        Domain::ALL.to_vec()
    } else {
        command.domains
    };

    let created = tracker.seed_defaults(&domains, &now_in(tz)).await?;
    if created.is_empty() {
        println!("Tracker already has tasks; nothing was added.");
    } else {
        println!("{} Added {} default tasks.", "✓".green().bold(), created.len());
    }
    Ok(())
}
