//! @acp:module "List Command"
//! @acp:summary "List existing mod projects under the projects root"
//! @acp:domain cli
//! @acp:layer handler

use anyhow::Result;
use console::style;

use crate::config::Config;
use crate::project::scan_projects;

/// Execute the list command
pub fn execute_list(config: &Config) -> Result<()> {
    let projects = scan_projects(&config.projects_dir)?;

    if projects.is_empty() {
        println!(
            "{} No mods in {}",
            style("!").yellow(),
            style(config.projects_dir.display()).cyan()
        );
        println!("  Run {} to create one", style("gxmod new <name>").cyan());
        return Ok(());
    }

    println!(
        "{} Mods in {}",
        style("→").blue(),
        style(config.projects_dir.display()).cyan()
    );
    for project in projects {
        println!("  {} {}", style("✓").green(), project);
    }

    Ok(())
}
