//! @acp:module "Show Command"
//! @acp:summary "Display a project's manifest metadata and populated fields"
//! @acp:domain cli
//! @acp:layer handler

use anyhow::Result;
use console::style;

use crate::config::Config;
use crate::error::ModError;
use crate::manifest::{seed_fields, Manifest};
use crate::schema;

/// Options for the show command
#[derive(Debug, Clone)]
pub struct ShowOptions {
    /// Project folder name (as printed by `gxmod list`)
    pub project: String,
    /// Dump the raw manifest JSON instead of the field view
    pub json: bool,
}

/// Execute the show command
pub fn execute_show(options: ShowOptions, config: &Config) -> Result<()> {
    let root = config.projects_dir.join(&options.project);
    let doc = match Manifest::from_project(&root) {
        Ok(doc) => doc,
        Err(ModError::MissingManifest(_)) => {
            eprintln!(
                "{} No manifest in {}",
                style("✗").red(),
                style(root.display()).cyan()
            );
            eprintln!("  Run 'gxmod list' to see available mods");
            std::process::exit(1);
        }
        Err(e) => return Err(e.into()),
    };

    if options.json {
        println!("{}", serde_json::to_string_pretty(&doc)?);
        return Ok(());
    }

    println!("{} {}", style("Mod:").bold(), style(&doc.name).cyan());
    println!("{} {}", style("Developer:").bold(), doc.developer.name);
    println!("{} {}", style("Description:").bold(), doc.description);

    let fields = seed_fields(&doc);
    if fields.is_empty() {
        println!("\n{} No payload fields set yet", style("!").yellow());
        return Ok(());
    }

    for cat in schema::CATEGORIES {
        let populated: Vec<_> = cat
            .fields
            .iter()
            .filter(|f| fields.is_populated(cat.key, f.path))
            .collect();
        if populated.is_empty() {
            continue;
        }
        println!("\n{} ({})", style(cat.label).cyan().bold(), style(cat.key).dim());
        for spec in populated {
            println!(
                "  {} = {}",
                style(spec.path).dim(),
                fields.get(cat.key, spec.path)
            );
        }
    }

    Ok(())
}
