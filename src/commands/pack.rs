//! @acp:module "Pack Command"
//! @acp:summary "Package a saved project into its zip archive"
//! @acp:domain cli
//! @acp:layer handler

use anyhow::Result;
use console::style;

use crate::config::Config;
use crate::error::ModError;
use crate::session::EditSession;

/// Options for the pack command
#[derive(Debug, Clone)]
pub struct PackOptions {
    /// Project folder name
    pub project: String,
}

/// Execute the pack command
pub fn execute_pack(options: PackOptions, config: &Config) -> Result<()> {
    let session = match EditSession::open(&config.projects_dir, &options.project) {
        Ok(session) => session,
        Err(ModError::MissingManifest(path)) => {
            eprintln!("{} No manifest at {}", style("✗").red(), path.display());
            eprintln!("  Save the project before packaging it");
            std::process::exit(1);
        }
        Err(e) => return Err(e.into()),
    };

    let zip_path = session.package()?;
    println!("{} Mod zipped to {}", style("✓").green(), style(zip_path.display()).cyan());

    Ok(())
}
