#![forbid(unsafe_code)]
//! GX Mod Maker Command Line Interface

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use gxmod::commands::{
    execute_categories, execute_list, execute_new, execute_pack, execute_rename, execute_set,
    execute_show, CategoriesOptions, NewOptions, PackOptions, RenameOptions, SetOptions,
    ShowOptions,
};
use gxmod::Config;

#[derive(Parser)]
#[command(name = "gxmod")]
#[command(about = "Opera GX mod workbench - compile mod packages from structured fields")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file path
    #[arg(short, long, global = true, default_value = ".gxmod.config.json")]
    config: PathBuf,

    /// Projects root directory (overrides config)
    #[arg(long, global = true)]
    projects_dir: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new mod project
    New {
        /// Mod name (the project folder derives from it)
        name: String,

        /// Developer name
        #[arg(long)]
        developer: Option<String>,

        /// Mod description
        #[arg(long)]
        description: Option<String>,

        /// Skip interactive prompts (use defaults + CLI args)
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// List existing mod projects
    List,

    /// Show a project's manifest fields
    Show {
        /// Project folder name
        project: String,

        /// Dump raw manifest JSON
        #[arg(long)]
        json: bool,
    },

    /// Set a field value and re-save the manifest
    Set {
        /// Project folder name
        project: String,

        /// Payload category key, or "general" for name/developer/description
        category: String,

        /// Dotted field path within the category
        field: String,

        /// Value to store (blank clears the slot)
        value: String,
    },

    /// Rename a mod, relocating its project folder
    Rename {
        /// Current project folder name
        project: String,

        /// New mod name
        new_name: String,
    },

    /// Package a project into its zip archive
    Pack {
        /// Project folder name
        project: String,
    },

    /// List payload categories and their fields
    Categories {
        /// Also show file-picker extension patterns
        #[arg(long)]
        filters: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "gxmod=debug" } else { "gxmod=warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    // Load config
    let mut config = if cli.config.exists() {
        Config::load(&cli.config)?
    } else {
        Config::default()
    };
    if let Some(projects_dir) = cli.projects_dir {
        config.projects_dir = projects_dir;
    }

    match cli.command {
        Commands::New { name, developer, description, yes } => {
            let options = NewOptions {
                name,
                developer,
                description,
                yes,
            };
            execute_new(options, &config)?;
        }

        Commands::List => {
            execute_list(&config)?;
        }

        Commands::Show { project, json } => {
            let options = ShowOptions { project, json };
            execute_show(options, &config)?;
        }

        Commands::Set { project, category, field, value } => {
            let options = SetOptions {
                project,
                category,
                field,
                value,
            };
            execute_set(options, &config)?;
        }

        Commands::Rename { project, new_name } => {
            let options = RenameOptions { project, new_name };
            execute_rename(options, &config)?;
        }

        Commands::Pack { project } => {
            let options = PackOptions { project };
            execute_pack(options, &config)?;
        }

        Commands::Categories { filters } => {
            let options = CategoriesOptions { filters };
            execute_categories(options)?;
        }
    }

    Ok(())
}
