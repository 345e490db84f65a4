//! Validation command for preset files.

use crate::action_db::ActionDb;
use crate::cli::common::{CliError, CliResult, ValidationMessage, ValidationResponse};
use crate::models::{MouseProfile, Preset};
use crate::profile_db::ProfileDb;
use crate::validator::{validate_file, ValidationReport};
use clap::Args;
use std::path::PathBuf;

/// Validate a preset file against its mouse profile
#[derive(Debug, Clone, Args)]
pub struct ValidateArgs {
    /// Path to preset JSON file
    #[arg(short, long, value_name = "FILE")]
    pub preset: PathBuf,

    /// Profile to validate against: a bundled profile id or a path to a
    /// profile JSON file. Defaults to the preset's mouseId.
    #[arg(long, value_name = "ID|FILE")]
    pub profile: Option<String>,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,

    /// Treat warnings as errors (exit non-zero)
    #[arg(long)]
    pub strict: bool,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> CliResult<()> {
        let catalog = ActionDb::load()
            .map_err(|e| CliError::io(format!("Failed to load action catalog: {e}")))?;
        let profile_db = ProfileDb::load()
            .map_err(|e| CliError::io(format!("Failed to load profile database: {e}")))?;

        let profile = self.resolve_profile(&profile_db)?;
        let report = validate_file(&self.preset, profile.as_ref(), &catalog);
        let response = build_response(&report);

        if self.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&response)
                    .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
            );
        } else if response.valid && report.warnings.is_empty() {
            println!("Validation passed");
        } else {
            print!("{}", report.format_message());
        }

        if !response.valid {
            return Err(CliError::validation("Validation failed"));
        }
        if self.strict && !report.warnings.is_empty() {
            return Err(CliError::validation("Warnings found in strict mode"));
        }

        Ok(())
    }

    /// Picks the profile to validate against: an explicit id/path when
    /// given, otherwise the preset's own mouseId looked up in the bundled
    /// database. Returns None when no profile can be found (the validator
    /// then reports the skip as a warning).
    fn resolve_profile(&self, profile_db: &ProfileDb) -> CliResult<Option<MouseProfile>> {
        if let Some(selector) = &self.profile {
            if let Some(profile) = profile_db.get(selector) {
                return Ok(Some(profile.clone()));
            }
            let path = PathBuf::from(selector);
            if path.exists() {
                return MouseProfile::load(&path)
                    .map(Some)
                    .map_err(|e| CliError::io(format!("Failed to load profile: {e}")));
            }
            return Err(CliError::usage(format!(
                "Unknown profile '{selector}': not a bundled profile id or an existing file"
            )));
        }

        // Best effort: peek at the preset's mouseId. A broken preset file
        // still gets its MalformedFile report from validate_file.
        let Ok(preset) = Preset::load(&self.preset) else {
            return Ok(None);
        };
        Ok(profile_db.get(&preset.mouse_id).cloned())
    }
}

fn build_response(report: &ValidationReport) -> ValidationResponse {
    let mut findings = Vec::new();

    for error in &report.errors {
        findings.push(ValidationMessage {
            severity: "error".to_string(),
            kind: Some(error.kind.to_string()),
            context: error.context.clone(),
            button: error.button.clone(),
            message: error.message.clone(),
            suggestion: error.suggestion.clone(),
        });
    }
    for warning in &report.warnings {
        findings.push(ValidationMessage {
            severity: "warning".to_string(),
            kind: None,
            context: None,
            button: None,
            message: warning.message.clone(),
            suggestion: None,
        });
    }

    ValidationResponse {
        valid: report.is_valid(),
        findings,
    }
}
