use chore_core::models::{CustomUnit, Domain};
use clap::{Parser, Subcommand, ValueEnum};

/// Keep track of recurring chores, car and pet care, and bills
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Add the default tasks for one or more domains to an empty tracker
    Init(InitCommand),
    /// Add a task, from a template or from scratch
    Add(AddCommand),
    /// Show tasks grouped by urgency
    List(ListCommand),
    /// Show every task grouped by category
    All(ListCommand),
    /// Mark a task as done and schedule its next occurrence
    Done(TaskIdCommand),
    /// Push a task's due date back by one day
    Snooze(TaskIdCommand),
    /// Edit a task
    Edit(EditCommand),
    /// Delete a task
    Delete(DeleteCommand),
    /// Show completion history
    History(HistoryCommand),
    /// List the built-in templates
    Templates(TemplatesCommand),
    /// Show the next due dates a task would get if completed on time
    Preview(PreviewCommand),
}

#[derive(Parser, Debug, Clone)]
pub struct InitCommand {
    /// Domains to seed; all of them when omitted
    #[arg(value_parser = parse_domain)]
    pub domains: Vec<Domain>,
}

/// How often a task repeats
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Every {
    Daily,
    Weekly,
    Monthly,
    Yearly,
    Custom,
}

impl Every {
    pub fn as_str(self) -> &'static str {
        match self {
            Every::Daily => "daily",
            Every::Weekly => "weekly",
            Every::Monthly => "monthly",
            Every::Yearly => "yearly",
            Every::Custom => "custom",
        }
    }
}

/// Recurrence flags shared by `add` and `edit`
#[derive(clap::Args, Debug, Clone, Default)]
pub struct RuleArgs {
    /// Frequency of the task
    #[arg(long, value_enum)]
    pub every: Option<Every>,
    /// Repeat every N periods
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..), requires = "every")]
    pub interval: Option<u32>,
    /// Weekday for weekly tasks (mon..sun or 0-6, Sunday = 0)
    #[arg(long, requires = "every")]
    pub on: Option<String>,
    /// Day of the month for monthly tasks (1-31; short months use their last day)
    #[arg(long, requires = "every")]
    pub day: Option<u32>,
    /// Unit for custom tasks
    #[arg(long, value_parser = parse_unit, requires = "every")]
    pub unit: Option<CustomUnit>,
}

#[derive(Parser, Debug, Clone)]
pub struct AddCommand {
    /// The name of the task
    #[arg(required_unless_present = "template", conflicts_with = "template")]
    pub name: Option<String>,
    /// Create the task from a built-in template (see `chore templates`)
    #[arg(short, long)]
    pub template: Option<String>,
    /// Category shown in the `all` view
    #[arg(short, long)]
    pub category: Option<String>,
    /// Domain of the task (home, car, pet, life)
    #[arg(long, value_parser = parse_domain)]
    pub domain: Option<Domain>,
    #[command(flatten)]
    pub rule: RuleArgs,
    /// Expected cost per occurrence
    #[arg(long)]
    pub cost: Option<f64>,
    #[arg(long)]
    pub notes: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
    /// First due date instead of the computed one (e.g. "2025-07-01", "next friday")
    #[arg(short, long)]
    pub due: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct EditCommand {
    /// The ID of the task to edit
    pub id: String,

    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub category: Option<String>,

    #[arg(long, value_parser = parse_domain)]
    pub domain: Option<Domain>,

    #[arg(long)]
    pub description: Option<String>,
    #[arg(long, conflicts_with = "description")]
    pub description_clear: bool,

    #[arg(long)]
    pub notes: Option<String>,
    #[arg(long, conflicts_with = "notes")]
    pub notes_clear: bool,

    #[arg(long)]
    pub cost: Option<f64>,
    #[arg(long, conflicts_with = "cost")]
    pub cost_clear: bool,

    #[command(flatten)]
    pub rule: RuleArgs,

    /// Set the next due date directly
    #[arg(short, long)]
    pub due: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct TaskIdCommand {
    /// The ID (or unique ID prefix) of the task
    pub id: String,
}

#[derive(Parser, Debug, Clone)]
pub struct DeleteCommand {
    /// The ID of the task to delete
    pub id: String,
    /// Force deletion without confirmation
    #[arg(short, long)]
    pub force: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct ListCommand {
    /// Only show one domain; defaults to `default_domain` from the config
    #[arg(long, value_parser = parse_domain)]
    pub domain: Option<Domain>,
    /// Show every domain, ignoring `default_domain`
    #[arg(long, conflicts_with = "domain")]
    pub everything: bool,
    /// Print JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct HistoryCommand {
    #[arg(long, value_parser = parse_domain)]
    pub domain: Option<Domain>,
    /// Show at most N entries
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,
}

#[derive(Parser, Debug, Clone)]
pub struct TemplatesCommand {
    #[arg(long, value_parser = parse_domain)]
    pub domain: Option<Domain>,
}

#[derive(Parser, Debug, Clone)]
pub struct PreviewCommand {
    /// The ID of the task
    pub id: String,
    /// Number of due dates to show
    #[arg(short = 'n', long, default_value_t = 5, value_parser = clap::value_parser!(u32).range(1..))]
    pub count: u32,
}

fn parse_domain(value: &str) -> Result<Domain, String> {
    value.parse().map_err(|e: chore_core::models::ParseDomainError| e.to_string())
}

fn parse_unit(value: &str) -> Result<CustomUnit, String> {
    value.parse().map_err(|e: chore_core::models::ParseCustomUnitError| e.to_string())
}
