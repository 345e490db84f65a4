//! Action catalog listing and search command.

use crate::action_db::ActionDb;
use crate::cli::common::{CliError, CliResult};
use clap::Args;

/// List or search the catalog of known actions
#[derive(Debug, Clone, Args)]
pub struct ActionsArgs {
    /// Search query (substring of id, name, or description)
    #[arg(value_name = "QUERY")]
    pub query: Option<String>,

    /// Only show actions in this category
    #[arg(long, value_name = "ID")]
    pub category: Option<String>,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

impl ActionsArgs {
    /// Execute the actions command
    pub fn execute(&self) -> CliResult<()> {
        let db = ActionDb::load()
            .map_err(|e| CliError::io(format!("Failed to load action catalog: {e}")))?;

        if let Some(category) = &self.category {
            if db.get_category(category).is_none() {
                let available: Vec<&str> = db.categories().iter().map(|c| c.id.as_str()).collect();
                return Err(CliError::usage(format!(
                    "Unknown category '{}'. Available: {}",
                    category,
                    available.join(", ")
                )));
            }
        }

        let results: Vec<_> = db
            .search(self.query.as_deref().unwrap_or(""))
            .into_iter()
            .filter(|a| self.category.as_ref().is_none_or(|c| &a.category == c))
            .collect();

        if self.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&results)
                    .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
            );
        } else if results.is_empty() {
            println!("No matching actions");
        } else {
            for action in results {
                println!("{:<24} [{}] {}", action.id, action.category, action.description);
            }
        }

        Ok(())
    }
}
