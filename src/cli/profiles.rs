//! Bundled mouse profile listing command.

use crate::cli::common::{CliError, CliResult};
use crate::profile_db::ProfileDb;
use clap::Args;

/// List bundled mouse profiles or show one in detail
#[derive(Debug, Clone, Args)]
pub struct ProfilesArgs {
    /// Profile id to show in detail (e.g., "generic_5_button")
    #[arg(value_name = "ID")]
    pub id: Option<String>,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

impl ProfilesArgs {
    /// Execute the profiles command
    pub fn execute(&self) -> CliResult<()> {
        let db = ProfileDb::load()
            .map_err(|e| CliError::io(format!("Failed to load profile database: {e}")))?;

        if let Some(id) = &self.id {
            let Some(profile) = db.get(id) else {
                let available: Vec<&str> = db.all().iter().map(|p| p.id.as_str()).collect();
                return Err(CliError::usage(format!(
                    "Unknown profile '{}'. Available: {}",
                    id,
                    available.join(", ")
                )));
            };

            if self.json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(profile)
                        .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
                );
            } else {
                println!("{} ({})", profile.name, profile.id);
                println!("  Vendor: {} ({})", profile.vendor, profile.vendor_id);
                println!("  Buttons:");
                for button in &profile.buttons {
                    let mut flags = Vec::new();
                    if !button.remappable {
                        flags.push("fixed".to_string());
                    }
                    if let Some(action) = &button.default_action {
                        flags.push(format!("default: {action}"));
                    }
                    let suffix = if flags.is_empty() {
                        String::new()
                    } else {
                        format!(" ({})", flags.join(", "))
                    };
                    println!(
                        "    {:<10} code {:#04x}{}",
                        button.id, button.hardware_code, suffix
                    );
                }
            }
            return Ok(());
        }

        if self.json {
            println!(
                "{}",
                serde_json::to_string_pretty(db.all())
                    .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
            );
        } else {
            for profile in db.all() {
                println!(
                    "{:<24} {} ({} buttons, {} remappable)",
                    profile.id,
                    profile.name,
                    profile.button_count(),
                    profile.remappable_count()
                );
            }
        }

        Ok(())
    }
}
