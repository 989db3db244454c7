//! @acp:module "Set Command"
//! @acp:summary "Record a field value and re-save the manifest"
//! @acp:domain cli
//! @acp:layer handler
//!
//! The CLI counterpart of a field-change event: every accepted value
//! immediately recompiles and rewrites the manifest. The pseudo-category
//! `general` routes to the top-level metadata fields; `general name` goes
//! through the rename path and may relocate the project folder.

use anyhow::{bail, Result};
use console::style;

use crate::config::Config;
use crate::project::IdentityChange;
use crate::session::{EditSession, SaveOutcome};

/// Options for the set command
#[derive(Debug, Clone)]
pub struct SetOptions {
    /// Project folder name
    pub project: String,
    /// Payload category key, or "general"
    pub category: String,
    /// Dotted field path within the category
    pub field: String,
    /// Raw value; blank clears the slot
    pub value: String,
}

/// Execute the set command
pub fn execute_set(options: SetOptions, config: &Config) -> Result<()> {
    let root = config.projects_dir.join(&options.project);
    if !root.is_dir() {
        eprintln!(
            "{} No project {} in {}",
            style("✗").red(),
            style(&options.project).cyan(),
            config.projects_dir.display()
        );
        eprintln!("  Run 'gxmod list' to see available mods");
        std::process::exit(1);
    }

    let mut session = EditSession::open_or_seed(&config.projects_dir, &options.project)?;

    let outcome = match options.category.as_str() {
        "general" => match options.field.as_str() {
            "name" => session.set_name(&options.value)?,
            "developer" => session.set_developer(&options.value)?,
            "description" => session.set_description(&options.value)?,
            other => bail!("'general' has fields name, developer, description (got '{other}')"),
        },
        _ => session.set_field(&options.category, &options.field, &options.value)?,
    };

    if let Some(outcome) = outcome {
        report(&outcome, &session);
    }

    Ok(())
}

fn report(outcome: &SaveOutcome, session: &EditSession) {
    super::report_warnings(outcome);

    if outcome.identity_change == IdentityChange::Moved {
        if let Some(identity) = session.identity() {
            println!(
                "{} Project relocated to {}",
                style("→").blue(),
                style(identity.folder_name()).cyan()
            );
        }
    }
    for asset in &outcome.assets_written {
        println!("  {} {}", style("✓").green(), asset.display());
    }
    println!("{} Saved {}", style("✓").green(), outcome.manifest_path.display());
}
