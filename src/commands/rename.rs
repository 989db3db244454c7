//! @acp:module "Rename Command"
//! @acp:summary "Rename a mod, relocating its project folder"
//! @acp:domain cli
//! @acp:layer handler

use anyhow::Result;
use console::style;

use crate::config::Config;
use crate::session::EditSession;

/// Options for the rename command
#[derive(Debug, Clone)]
pub struct RenameOptions {
    /// Current project folder name
    pub project: String,
    /// New mod name (folder derives from it)
    pub new_name: String,
}

/// Execute the rename command
pub fn execute_rename(options: RenameOptions, config: &Config) -> Result<()> {
    let root = config.projects_dir.join(&options.project);
    if !root.is_dir() {
        eprintln!(
            "{} No project {} in {}",
            style("✗").red(),
            style(&options.project).cyan(),
            config.projects_dir.display()
        );
        std::process::exit(1);
    }

    let mut session = EditSession::open_or_seed(&config.projects_dir, &options.project)?;
    let outcome = session.set_name(&options.new_name)?;

    if let Some(outcome) = outcome {
        super::report_warnings(&outcome);
    }
    if let Some(identity) = session.identity() {
        println!(
            "{} Renamed to {} ({})",
            style("✓").green(),
            style(&options.new_name).cyan(),
            identity.folder_name()
        );
    }

    Ok(())
}
