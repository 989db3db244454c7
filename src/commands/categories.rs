//! @acp:module "Categories Command"
//! @acp:summary "List payload categories, field layouts and file-picker filters"
//! @acp:domain cli
//! @acp:layer handler

use anyhow::Result;
use console::style;

use crate::schema::{self, Cardinality};

/// Options for the categories command
#[derive(Debug, Clone, Default)]
pub struct CategoriesOptions {
    /// Also show the file-picker extension patterns per category
    pub filters: bool,
}

fn cardinality_name(cardinality: Cardinality) -> &'static str {
    match cardinality {
        Cardinality::Singleton => "singleton",
        Cardinality::List => "list",
        Cardinality::PerField => "per-field",
        Cardinality::FixedStruct => "fixed-struct",
    }
}

/// Execute the categories command
pub fn execute_categories(options: CategoriesOptions) -> Result<()> {
    for cat in schema::CATEGORIES {
        println!(
            "{} {} {}",
            style(cat.label).cyan().bold(),
            style(cat.key).dim(),
            style(format!("[{}]", cardinality_name(cat.cardinality))).dim()
        );
        for spec in cat.fields {
            println!("    {}", spec.path);
        }
        if options.filters {
            let filters = schema::file_filters(cat.key);
            if filters.is_empty() {
                println!("    {} (no file fields)", style("filters:").dim());
            } else {
                println!("    {} {}", style("filters:").dim(), filters.join(" "));
            }
        }
    }
    Ok(())
}
