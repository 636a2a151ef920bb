use anyhow::Result;
use chore_core::templates::{catalog, templates_for};

use crate::cli::TemplatesCommand;
use crate::views::table::display_templates;

pub fn list_templates(command: TemplatesCommand) -> Result<()> {
    match command.domain {
        Some(domain) => display_templates(templates_for(domain)),
        None => display_templates(catalog()),
    }
    Ok(())
}
