//! User preset listing command.

use crate::cli::common::{CliError, CliResult};
use crate::config::Config;
use crate::manager::PresetManager;
use clap::Args;
use std::path::PathBuf;

/// List presets from the user preset directory
#[derive(Debug, Clone, Args)]
pub struct PresetsArgs {
    /// Preset directory to read instead of the configured one
    #[arg(long, value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Only show presets targeting this mouse profile id
    #[arg(long, value_name = "ID")]
    pub mouse: Option<String>,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

impl PresetsArgs {
    /// Execute the presets command
    pub fn execute(&self) -> CliResult<()> {
        let user_dir = match &self.dir {
            Some(dir) => dir.clone(),
            None => {
                let config = Config::load()
                    .map_err(|e| CliError::io(format!("Failed to load config: {e}")))?;
                config
                    .user_presets_dir()
                    .map_err(|e| CliError::io(format!("Failed to locate preset directory: {e}")))?
            }
        };

        let mut manager = PresetManager::new(None, Some(user_dir));
        let presets = match &self.mouse {
            Some(mouse_id) => manager.presets_for_mouse(mouse_id),
            None => manager.all(),
        }
        .map_err(|e| CliError::io(format!("Failed to load presets: {e}")))?;

        if self.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&presets)
                    .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
            );
        } else if presets.is_empty() {
            println!("No presets found");
        } else {
            for preset in presets {
                println!(
                    "{:<24} {} (mouse: {}, {} mappings, {} contexts)",
                    preset.id,
                    preset.name,
                    preset.mouse_id,
                    preset.mappings.len(),
                    preset.context_mappings.len()
                );
            }
        }

        Ok(())
    }
}
