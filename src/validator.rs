//! Preset validation against a mouse profile.
//!
//! Validation is exhaustive: every violation found is collected into a
//! report so the caller can display all problems at once rather than
//! stopping at the first. Nothing here aborts early.

use crate::action_db::ActionDb;
use crate::models::preset::SUPPORTED_PRESET_VERSIONS;
use crate::models::{ActionRef, MouseProfile, Preset};
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::OnceLock;

/// Syntax for well-formed action ids: lowercase snake_case segments.
fn action_id_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^[a-z][a-z0-9]*(_[a-z0-9]+)*$").expect("action id pattern is valid")
    })
}

/// Validation result with specific errors and warnings.
#[derive(Debug, Clone, Default)]
pub struct ValidationReport {
    /// Violations that make the preset unusable or unsafe to apply
    pub errors: Vec<ValidationError>,
    /// Advisory findings that do not block loading the preset
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationReport {
    /// Creates a new empty validation report.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Returns true if there are no errors (warnings are allowed).
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Adds an error to the report.
    pub fn add_error(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    /// Adds a warning to the report.
    pub fn add_warning(&mut self, warning: ValidationWarning) {
        self.warnings.push(warning);
    }

    /// Formats the report as a user-friendly message.
    #[must_use]
    pub fn format_message(&self) -> String {
        let mut message = String::new();

        if !self.errors.is_empty() {
            message.push_str(&format!("{} validation errors:\n", self.errors.len()));
            for (idx, error) in self.errors.iter().enumerate() {
                message.push_str(&format!("  {}. {}\n", idx + 1, error));
            }
        }

        if !self.warnings.is_empty() {
            message.push_str(&format!("\n{} warnings:\n", self.warnings.len()));
            for (idx, warning) in self.warnings.iter().enumerate() {
                message.push_str(&format!("  {}. {}\n", idx + 1, warning));
            }
        }

        message
    }
}

/// Validation error with location context.
#[derive(Debug, Clone)]
pub struct ValidationError {
    /// Type of validation error
    pub kind: ValidationErrorKind,
    /// Context table where the error occurred, if any
    pub context: Option<String>,
    /// Button id involved, if any
    pub button: Option<String>,
    /// Human-readable error message
    pub message: String,
    /// Optional suggestion for fixing the error
    pub suggestion: Option<String>,
}

impl ValidationError {
    /// Creates a new validation error.
    pub fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            context: None,
            button: None,
            message: message.into(),
            suggestion: None,
        }
    }

    /// Sets the context table location.
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    /// Sets the button location.
    pub fn with_button(mut self, button: impl Into<String>) -> Self {
        self.button = Some(button.into());
        self
    }

    /// Sets a suggestion for fixing the error.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (&self.context, &self.button) {
            (Some(context), Some(button)) => {
                write!(f, "[{context}:{button}] {}: {}", self.kind, self.message)?;
            }
            (Some(context), None) => {
                write!(f, "[{context}] {}: {}", self.kind, self.message)?;
            }
            (None, Some(button)) => {
                write!(f, "[{button}] {}: {}", self.kind, self.message)?;
            }
            (None, None) => write!(f, "{}: {}", self.kind, self.message)?,
        }

        if let Some(suggestion) = &self.suggestion {
            write!(f, "\n    -> {suggestion}")?;
        }

        Ok(())
    }
}

/// Types of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// File is not parseable JSON or not a preset object
    MalformedFile,
    /// Required field missing or empty (id, name, version, mouseId)
    MissingField,
    /// Preset version is not supported by this build
    UnsupportedVersion,
    /// Mapped button id does not exist in the target profile
    UnknownButton,
    /// Action id is not a syntactically well-formed identifier
    MalformedActionId,
}

impl std::fmt::Display for ValidationErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MalformedFile => write!(f, "Malformed File"),
            Self::MissingField => write!(f, "Missing Field"),
            Self::UnsupportedVersion => write!(f, "Unsupported Version"),
            Self::UnknownButton => write!(f, "Unknown Button"),
            Self::MalformedActionId => write!(f, "Malformed Action Id"),
        }
    }
}

/// Validation warning (non-blocking).
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// Warning message
    pub message: String,
}

impl ValidationWarning {
    /// Creates a new validation warning.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// Preset validator.
///
/// Checks a preset against the profile it targets and the catalog of known
/// actions. Action ids are only checked for syntax (errors) and catalog
/// membership (warnings); whether an action actually fires is decided
/// lazily by the `ActionRegistry` at execution time.
pub struct PresetValidator<'a> {
    preset: &'a Preset,
    profile: Option<&'a MouseProfile>,
    catalog: &'a ActionDb,
}

impl<'a> PresetValidator<'a> {
    /// Creates a new validator.
    ///
    /// Pass `None` for the profile when the targeted device is unknown;
    /// button-existence checks are then skipped with a warning.
    #[must_use]
    pub const fn new(
        preset: &'a Preset,
        profile: Option<&'a MouseProfile>,
        catalog: &'a ActionDb,
    ) -> Self {
        Self {
            preset,
            profile,
            catalog,
        }
    }

    /// Validates the preset, collecting every violation found.
    ///
    /// Checks:
    /// - required fields present (id, name, version, mouseId)
    /// - version is supported
    /// - every mapped button id exists in the target profile
    /// - action ids are syntactically well-formed
    /// - (warnings) unknown catalog actions, non-remappable buttons,
    ///   mouseId / profile mismatch
    #[must_use]
    pub fn validate(&self) -> ValidationReport {
        let mut report = ValidationReport::new();

        self.validate_required_fields(&mut report);
        self.validate_version(&mut report);
        self.validate_profile_reference(&mut report);

        self.validate_table(&mut report, &self.preset.mappings, None);
        for (context, table) in &self.preset.context_mappings {
            self.validate_table(&mut report, table, Some(context));
        }

        report
    }

    fn validate_required_fields(&self, report: &mut ValidationReport) {
        let required = [
            ("id", &self.preset.id),
            ("name", &self.preset.name),
            ("version", &self.preset.version),
            ("mouseId", &self.preset.mouse_id),
        ];

        for (field, value) in required {
            if value.is_empty() {
                report.add_error(
                    ValidationError::new(
                        ValidationErrorKind::MissingField,
                        format!("Required field '{field}' is missing or empty"),
                    )
                    .with_suggestion(format!("Add a \"{field}\" field to the preset")),
                );
            }
        }
    }

    fn validate_version(&self, report: &mut ValidationReport) {
        let version = &self.preset.version;
        if !version.is_empty() && !SUPPORTED_PRESET_VERSIONS.contains(&version.as_str()) {
            report.add_error(
                ValidationError::new(
                    ValidationErrorKind::UnsupportedVersion,
                    format!("Preset version '{version}' is not supported"),
                )
                .with_suggestion(format!(
                    "Supported versions: {}",
                    SUPPORTED_PRESET_VERSIONS.join(", ")
                )),
            );
        }
    }

    fn validate_profile_reference(&self, report: &mut ValidationReport) {
        match self.profile {
            Some(profile) => {
                if !self.preset.mouse_id.is_empty() && profile.id != self.preset.mouse_id {
                    report.add_warning(ValidationWarning::new(format!(
                        "Preset targets mouse '{}' but was validated against profile '{}'",
                        self.preset.mouse_id, profile.id
                    )));
                }
            }
            None => {
                report.add_warning(ValidationWarning::new(
                    "No profile available for this preset; button references were not checked",
                ));
            }
        }
    }

    fn validate_table(
        &self,
        report: &mut ValidationReport,
        table: &BTreeMap<String, ActionRef>,
        context: Option<&str>,
    ) {
        for (button_id, action) in table {
            self.validate_button(report, button_id, context);
            self.validate_action(report, &action.action, button_id, context);
        }
    }

    fn validate_button(
        &self,
        report: &mut ValidationReport,
        button_id: &str,
        context: Option<&str>,
    ) {
        let Some(profile) = self.profile else {
            return;
        };

        match profile.button(button_id) {
            None => {
                let available: Vec<&str> =
                    profile.buttons.iter().map(|b| b.id.as_str()).collect();
                let mut error = ValidationError::new(
                    ValidationErrorKind::UnknownButton,
                    format!(
                        "Button '{}' does not exist on profile '{}'",
                        button_id, profile.id
                    ),
                )
                .with_button(button_id)
                .with_suggestion(format!("Available buttons: {}", available.join(", ")));
                if let Some(ctx) = context {
                    error = error.with_context(ctx);
                }
                report.add_error(error);
            }
            Some(button) if !button.remappable => {
                report.add_warning(ValidationWarning::new(format!(
                    "Button '{button_id}' is not remappable on profile '{}'; the mapping will be ignored by the host",
                    profile.id
                )));
            }
            Some(_) => {}
        }
    }

    fn validate_action(
        &self,
        report: &mut ValidationReport,
        action_id: &str,
        button_id: &str,
        context: Option<&str>,
    ) {
        if !action_id_pattern().is_match(action_id) {
            let mut error = ValidationError::new(
                ValidationErrorKind::MalformedActionId,
                format!("Action id '{action_id}' is not a well-formed identifier"),
            )
            .with_button(button_id)
            .with_suggestion("Action ids are lowercase snake_case, e.g. 'edit_undo'");
            if let Some(ctx) = context {
                error = error.with_context(ctx);
            }
            report.add_error(error);
            return;
        }

        // Catalog membership is advisory: registries may carry actions the
        // catalog does not know about, and resolution happens lazily.
        if !self.catalog.is_known(action_id) {
            let similar: Vec<&str> = self
                .catalog
                .search(action_id)
                .iter()
                .take(3)
                .map(|a| a.id.as_str())
                .collect();
            let hint = if similar.is_empty() {
                String::new()
            } else {
                format!(" (did you mean: {}?)", similar.join(", "))
            };
            report.add_warning(ValidationWarning::new(format!(
                "Action '{action_id}' is not in the action catalog{hint}"
            )));
        }
    }
}

/// Validates a preset file on disk, folding file-level failures into the
/// report instead of returning an error.
///
/// A file that is unreadable, not valid JSON, or not a JSON object yields a
/// single `MalformedFile` error; otherwise the decoded preset is validated
/// normally (after forward migration).
#[must_use]
pub fn validate_file(
    path: &std::path::Path,
    profile: Option<&MouseProfile>,
    catalog: &ActionDb,
) -> ValidationReport {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            let mut report = ValidationReport::new();
            report.add_error(ValidationError::new(
                ValidationErrorKind::MalformedFile,
                format!("Failed to read {}: {e}", path.display()),
            ));
            return report;
        }
    };

    let mut value: serde_json::Value = match serde_json::from_str(&content) {
        Ok(value) => value,
        Err(e) => {
            let mut report = ValidationReport::new();
            report.add_error(
                ValidationError::new(
                    ValidationErrorKind::MalformedFile,
                    format!("Invalid JSON in {}: {e}", path.display()),
                )
                .with_suggestion("Check the file for syntax errors"),
            );
            return report;
        }
    };

    crate::models::preset::migrate_preset_value(&mut value);

    let preset: Preset = match serde_json::from_value(value) {
        Ok(preset) => preset,
        Err(e) => {
            let mut report = ValidationReport::new();
            report.add_error(ValidationError::new(
                ValidationErrorKind::MalformedFile,
                format!("Not a valid preset object: {e}"),
            ));
            return report;
        }
    };

    PresetValidator::new(&preset, profile, catalog).validate()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::profile::MouseButton;
    use crate::models::MouseFeatures;
    use std::io::Write;

    fn test_profile() -> MouseProfile {
        MouseProfile {
            id: "generic_5_button".to_string(),
            name: "Generic 5-Button Mouse".to_string(),
            vendor: "Generic".to_string(),
            vendor_id: "0x0000".to_string(),
            product_ids: vec![],
            buttons: vec![
                MouseButton::new("left", "Left Click", 1).fixed(),
                MouseButton::new("right", "Right Click", 2).fixed(),
                MouseButton::new("middle", "Middle Click", 4),
                MouseButton::new("back", "Back", 8),
                MouseButton::new("forward", "Forward", 16),
            ],
            features: MouseFeatures::default(),
        }
    }

    fn valid_preset() -> Preset {
        let mut preset = Preset::new("Editing", "generic_5_button");
        preset.set_mapping("back", ActionRef::new("edit_undo"), None);
        preset.set_mapping(
            "back",
            ActionRef::new("segment_previous"),
            Some("SegmentEditor"),
        );
        preset
    }

    fn catalog() -> ActionDb {
        ActionDb::load().unwrap()
    }

    #[test]
    fn test_valid_preset_passes() {
        let profile = test_profile();
        let db = catalog();
        let preset = valid_preset();
        let report = PresetValidator::new(&preset, Some(&profile), &db).validate();

        assert!(report.is_valid(), "{}", report.format_message());
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn test_missing_fields_reported_exhaustively() {
        let profile = test_profile();
        let db = catalog();
        let mut preset = valid_preset();
        preset.name.clear();
        preset.mouse_id.clear();

        let report = PresetValidator::new(&preset, Some(&profile), &db).validate();
        let missing: Vec<_> = report
            .errors
            .iter()
            .filter(|e| e.kind == ValidationErrorKind::MissingField)
            .collect();
        // Exactly two: one per missing field, not just the first
        assert_eq!(missing.len(), 2);
    }

    #[test]
    fn test_unknown_button_reported_per_table() {
        let profile = test_profile();
        let db = catalog();
        let mut preset = valid_preset();
        preset.set_mapping("thumb", ActionRef::new("edit_redo"), None);
        preset.set_mapping("pinky", ActionRef::new("edit_redo"), Some("Markups"));

        let report = PresetValidator::new(&preset, Some(&profile), &db).validate();
        let unknown: Vec<_> = report
            .errors
            .iter()
            .filter(|e| e.kind == ValidationErrorKind::UnknownButton)
            .collect();
        assert_eq!(unknown.len(), 2);
        assert!(unknown.iter().any(|e| e.context.as_deref() == Some("Markups")));
        assert!(unknown
            .iter()
            .all(|e| e.suggestion.as_deref().is_some_and(|s| s.contains("back"))));
    }

    #[test]
    fn test_malformed_action_id() {
        let profile = test_profile();
        let db = catalog();
        let mut preset = valid_preset();
        preset.set_mapping("middle", ActionRef::new("Edit Undo!"), None);

        let report = PresetValidator::new(&preset, Some(&profile), &db).validate();
        assert!(report
            .errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::MalformedActionId));
    }

    #[test]
    fn test_unsupported_version() {
        let profile = test_profile();
        let db = catalog();
        let mut preset = valid_preset();
        preset.version = "9.7".to_string();

        let report = PresetValidator::new(&preset, Some(&profile), &db).validate();
        assert!(report
            .errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::UnsupportedVersion));
    }

    #[test]
    fn test_unknown_catalog_action_is_warning_not_error() {
        let profile = test_profile();
        let db = catalog();
        let mut preset = valid_preset();
        preset.set_mapping("middle", ActionRef::new("edit_undoo"), None);

        let report = PresetValidator::new(&preset, Some(&profile), &db).validate();
        assert!(report.is_valid());
        assert!(report
            .warnings
            .iter()
            .any(|w| w.message.contains("edit_undoo") && w.message.contains("did you mean")));
    }

    #[test]
    fn test_non_remappable_button_is_warning() {
        let profile = test_profile();
        let db = catalog();
        let mut preset = valid_preset();
        preset.set_mapping("left", ActionRef::new("edit_undo"), None);

        let report = PresetValidator::new(&preset, Some(&profile), &db).validate();
        assert!(report.is_valid());
        assert!(report
            .warnings
            .iter()
            .any(|w| w.message.contains("not remappable")));
    }

    #[test]
    fn test_mouse_id_mismatch_is_warning() {
        let profile = test_profile();
        let db = catalog();
        let mut preset = valid_preset();
        preset.mouse_id = "some_other_mouse".to_string();

        let report = PresetValidator::new(&preset, Some(&profile), &db).validate();
        assert!(report.is_valid());
        assert!(report
            .warnings
            .iter()
            .any(|w| w.message.contains("some_other_mouse")));
    }

    #[test]
    fn test_missing_profile_skips_button_checks() {
        let db = catalog();
        let mut preset = valid_preset();
        preset.set_mapping("thumb", ActionRef::new("edit_redo"), None);

        let report = PresetValidator::new(&preset, None, &db).validate();
        assert!(report.is_valid());
        assert!(report
            .warnings
            .iter()
            .any(|w| w.message.contains("not checked")));
    }

    #[test]
    fn test_validate_file_malformed_json() {
        let db = catalog();
        let profile = test_profile();
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();

        let report = validate_file(file.path(), Some(&profile), &db);
        assert!(!report.is_valid());
        assert_eq!(report.errors.len(), 1);
        assert_eq!(report.errors[0].kind, ValidationErrorKind::MalformedFile);
    }

    #[test]
    fn test_validate_file_valid_preset() {
        let db = catalog();
        let profile = test_profile();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preset.json");
        valid_preset().save(&path).unwrap();

        let report = validate_file(&path, Some(&profile), &db);
        assert!(report.is_valid(), "{}", report.format_message());
    }

    #[test]
    fn test_report_format_message() {
        let mut report = ValidationReport::new();
        report.add_error(
            ValidationError::new(ValidationErrorKind::UnknownButton, "Test error")
                .with_context("SegmentEditor")
                .with_button("thumb")
                .with_suggestion("Use a real button"),
        );
        report.add_warning(ValidationWarning::new("Test warning"));

        let message = report.format_message();
        assert!(message.contains("1 validation errors"));
        assert!(message.contains("1 warnings"));
        assert!(message.contains("SegmentEditor:thumb"));
        assert!(message.contains("Use a real button"));
    }
}
