//! Preset import command.

use crate::cli::common::{CliError, CliResult};
use crate::config::Config;
use crate::manager::PresetManager;
use clap::Args;
use std::path::PathBuf;

/// Import a preset file into the user preset directory
#[derive(Debug, Clone, Args)]
pub struct ImportArgs {
    /// Preset JSON file to import
    #[arg(long, short, value_name = "FILE")]
    pub input: PathBuf,

    /// Preset directory to write instead of the configured one
    #[arg(long, value_name = "DIR")]
    pub dir: Option<PathBuf>,
}

impl ImportArgs {
    /// Execute the import command
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
        let preset = manager
            .import(&self.input)
            .map_err(|e| CliError::io(format!("Import failed: {e}")))?;

        println!("Imported '{}' ({})", preset.name, preset.id);
        Ok(())
    }
}
