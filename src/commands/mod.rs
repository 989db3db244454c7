//! @acp:module "Commands"
//! @acp:summary "CLI command implementations"
//! @acp:domain cli
//! @acp:layer handler
//!
//! Provides implementations for all CLI commands.
//! Each command is in its own submodule for maintainability.

pub mod categories;
pub mod list;
pub mod new;
pub mod pack;
pub mod rename;
pub mod set;
pub mod show;

pub use categories::{execute_categories, CategoriesOptions};
pub use list::execute_list;
pub use new::{execute_new, NewOptions};
pub use pack::{execute_pack, PackOptions};
pub use rename::{execute_rename, RenameOptions};
pub use set::{execute_set, SetOptions};
pub use show::{execute_show, ShowOptions};

use console::style;

use crate::session::SaveOutcome;

/// Print the per-asset warnings a save carried, if any
pub(crate) fn report_warnings(outcome: &SaveOutcome) {
    for warning in &outcome.warnings {
        eprintln!("  {} {}", style("!").yellow(), warning);
    }
}
