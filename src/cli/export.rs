//! Preset export command.

use crate::cli::common::{CliError, CliResult};
use crate::config::Config;
use crate::manager::PresetManager;
use clap::Args;
use std::path::PathBuf;

/// Export a preset to a standalone JSON file
#[derive(Debug, Clone, Args)]
pub struct ExportArgs {
    /// Id of the preset to export
    #[arg(long = "preset-id", value_name = "ID")]
    pub preset_id: String,

    /// Destination file path
    #[arg(long, short, value_name = "FILE")]
    pub output: PathBuf,

    /// Preset directory to read instead of the configured one
    #[arg(long, value_name = "DIR")]
    pub dir: Option<PathBuf>,
}

impl ExportArgs {
    /// Execute the export command
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
        manager
            .export(&self.preset_id, &self.output)
            .map_err(|e| CliError::io(format!("Export failed: {e}")))?;

        println!("Exported '{}' to {}", self.preset_id, self.output.display());
        Ok(())
    }
}
