use chore_core::db;
use chore_core::error::CoreError;
use chore_core::store::SqliteStore;
use chore_core::tracker::Tracker;
use clap::Parser;
use owo_colors::{OwoColorize, Style};
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod config;
mod parser;
mod util;
mod views;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("CHORE_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = cli::Cli::parse();

    if let Err(e) = run(cli).await {
        handle_error(e);
        std::process::exit(1);
    }
}

async fn run(cli: cli::Cli) -> anyhow::Result<()> {
    let config = config::Config::new().unwrap_or_else(|e| {
        tracing::warn!(error = %e, "ignoring unreadable configuration");
        config::Config::default()
    });
    let tz = config.tz()?;

    // Templates need no database
    if let cli::Commands::Templates(command) = &cli.command {
        return commands::templates::list_templates(command.clone());
    }

    let pool = db::establish_connection(&config.database_path).await?;
    let tracker = Tracker::new(SqliteStore::new(pool));

    match cli.command {
        cli::Commands::Init(command) => commands::init::init_tasks(&tracker, command, tz).await,
        cli::Commands::Add(command) => {
            commands::add::add_task(&tracker, command, &config, tz).await
        }
        cli::Commands::List(command) => {
            commands::list::list_tasks(&tracker, command, &config, tz).await
        }
        cli::Commands::All(command) => {
            commands::list::list_all(&tracker, command, &config, tz).await
        }
        cli::Commands::Done(command) => commands::done::done_task(&tracker, command, tz).await,
        cli::Commands::Snooze(command) => {
            commands::snooze::snooze_task(&tracker, command, tz).await
        }
        cli::Commands::Edit(command) => commands::edit::edit_task(&tracker, command, tz).await,
        cli::Commands::Delete(command) => commands::delete::delete_task(&tracker, command).await,
        cli::Commands::History(command) => {
            commands::history::show_history(&tracker, command, tz).await
        }
        cli::Commands::Preview(command) => {
            commands::preview::preview_task(&tracker, command, tz).await
        }
        cli::Commands::Templates(command) => commands::templates::list_templates(command),
    }
}

fn handle_error(err: anyhow::Error) {
    let error_style = Style::new().red().bold();

    if let Some(core_error) = err.downcast_ref::<CoreError>() {
        match core_error {
            CoreError::NotFound(s) => {
                eprintln!("{} Not found: {}", "Error:".style(error_style), s);
            }
            CoreError::AmbiguousId(tasks) => {
                eprintln!("{}", "Error: Ambiguous ID.".style(error_style));
                eprintln!("Did you mean one of these?");
                for (id, name) in tasks {
                    eprintln!("  {} ({})", id.yellow(), name);
                }
            }
            CoreError::InvalidInput(s) => {
                eprintln!("{} Invalid input: {}", "Error:".style(error_style), s);
            }
            CoreError::Conflict(name) => {
                eprintln!(
                    "{} Task '{}' changed while you were editing it. Run the command again.",
                    "Error:".style(error_style),
                    name.yellow()
                );
            }
            CoreError::Database(e) => {
                eprintln!("{} Database error: {}", "Error:".style(error_style), e);
            }
            _ => eprintln!("{} {}", "Error:".style(error_style), err),
        }
    } else {
        eprintln!("{} {:#}", "Error:".style(error_style), err);
    }
}
