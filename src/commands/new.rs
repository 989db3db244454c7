//! @acp:module "New Command"
//! @acp:summary "Create a new mod project"
//! @acp:domain cli
//! @acp:layer handler

use anyhow::Result;
use console::style;
use dialoguer::{theme::ColorfulTheme, Input};

use crate::config::Config;
use crate::project::sanitize_mod_name;
use crate::session::EditSession;

/// Options for the new command
#[derive(Debug, Clone, Default)]
pub struct NewOptions {
    /// Mod name; also determines the project folder
    pub name: String,
    /// Developer name (prompted when absent)
    pub developer: Option<String>,
    /// Mod description (prompted when absent)
    pub description: Option<String>,
    /// Skip interactive prompts (use config defaults + CLI args)
    pub yes: bool,
}

/// Execute the new command
pub fn execute_new(options: NewOptions, config: &Config) -> Result<()> {
    let folder = sanitize_mod_name(&options.name);
    let target = config.projects_dir.join(&folder);
    if target.exists() {
        eprintln!(
            "{} Project {} already exists at {}",
            style("✗").red(),
            style(&folder).cyan(),
            target.display()
        );
        eprintln!("  Use 'gxmod set' to edit it or pick another name");
        std::process::exit(1);
    }

    let interactive = !options.yes && (options.developer.is_none() || options.description.is_none());

    let developer = match options.developer {
        Some(dev) => dev,
        None if interactive => Input::with_theme(&ColorfulTheme::default())
            .with_prompt("Your name")
            .default(config.developer.clone())
            .interact_text()?,
        None => config.developer.clone(),
    };
    let description = match options.description {
        Some(desc) => desc,
        None if interactive => Input::with_theme(&ColorfulTheme::default())
            .with_prompt("Description")
            .default(config.description.clone())
            .interact_text()?,
        None => config.description.clone(),
    };

    let mut session = EditSession::new(&config.projects_dir, &options.name, &developer, &description);
    let outcome = session.save()?;
    super::report_warnings(&outcome);

    println!(
        "{} Created {} at {}",
        style("✓").green(),
        style(&folder).cyan(),
        target.display()
    );

    println!("\n{}", style("Next steps:").bold());
    println!(
        "  1. Fill payload fields with {}",
        style(format!("gxmod set {} <category> <field> <value>", folder)).cyan()
    );
    println!(
        "  2. Package it with {}",
        style(format!("gxmod pack {}", folder)).cyan()
    );

    Ok(())
}
