//! Binding resolution command.

use crate::cli::common::{CliError, CliResult, ResolveResponse};
use crate::models::Preset;
use crate::resolver::resolve;
use clap::Args;
use std::path::PathBuf;

/// Resolve a button press against a preset
#[derive(Debug, Clone, Args)]
pub struct ResolveArgs {
    /// Path to preset JSON file
    #[arg(short, long, value_name = "FILE")]
    pub preset: PathBuf,

    /// Canonical button id (e.g., "back", "thumb")
    #[arg(short, long, value_name = "ID")]
    pub button: String,

    /// Active context name; omit for the default mapping
    #[arg(short, long, value_name = "NAME", default_value = "")]
    pub context: String,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

impl ResolveArgs {
    /// Execute the resolve command
    ///
    /// An unmapped button is a normal outcome, not an error: the command
    /// prints "no mapping" (or a null action in JSON) and exits 0, the
    /// same way the event path passes the press through to the host.
    pub fn execute(&self) -> CliResult<()> {
        let preset = Preset::load(&self.preset)
            .map_err(|e| CliError::io(format!("Failed to load preset: {e}")))?;

        let action = resolve(&preset, &self.button, &self.context);

        let response = ResolveResponse {
            button: self.button.clone(),
            context: self.context.clone(),
            action: action.map(|a| a.action.clone()),
            parameters: action
                .filter(|a| !a.parameters.is_empty())
                .map(|a| a.parameters.clone()),
        };

        if self.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&response)
                    .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
            );
        } else {
            match &response.action {
                Some(action) => println!("{} -> {action}", self.button),
                None => println!("{} -> no mapping", self.button),
            }
        }

        Ok(())
    }
}
