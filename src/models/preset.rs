//! Button mapping preset data structures.
//!
//! A preset maps canonical button ids to action references, with optional
//! per-context override tables. Presets are user-editable and persisted as
//! JSON files.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use uuid::Uuid;

/// Current preset file format version.
pub const CURRENT_PRESET_VERSION: &str = "1.0";

/// Preset format versions this build can read (after migration).
pub const SUPPORTED_PRESET_VERSIONS: &[&str] = &["1.0"];

/// A reference to an action, with an optional free-form parameter bag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRef {
    /// Action identifier (e.g., "edit_undo", "segment_previous")
    pub action: String,
    /// Parameters passed to the action handler at execution time
    #[serde(default, skip_serializing_if = "serde_json::Map::is_empty")]
    pub parameters: serde_json::Map<String, Value>,
}

impl ActionRef {
    /// Creates an action reference with no parameters.
    pub fn new(action: impl Into<String>) -> Self {
        Self {
            action: action.into(),
            parameters: serde_json::Map::new(),
        }
    }

    /// Adds a parameter to the reference.
    #[must_use]
    pub fn with_parameter(mut self, key: impl Into<String>, value: Value) -> Self {
        self.parameters.insert(key.into(), value);
        self
    }
}

/// A named, versioned set of button-to-action mappings.
///
/// Lookup order is context mapping first, default mapping second; context
/// names are exact-match, case-sensitive strings with no hierarchy.
///
/// # Validation
///
/// All fields are lenient at parse time so a structurally broken file can
/// still be loaded and reported on in full. `PresetValidator` checks that
/// the required fields (id, name, version, mouseId) are present and that
/// referenced button ids exist in the target profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Preset {
    /// Unique preset identifier
    pub id: String,
    /// Human-readable preset name
    pub name: String,
    /// Preset file format version
    pub version: String,
    /// Id of the mouse profile this preset targets
    pub mouse_id: String,
    /// Default button mappings (button id -> action)
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub mappings: BTreeMap<String, ActionRef>,
    /// Per-context overrides (context name -> button id -> action)
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub context_mappings: BTreeMap<String, BTreeMap<String, ActionRef>>,
    /// Optional author name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    /// Optional description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Preset {
    /// Creates a new empty preset targeting the given mouse profile.
    ///
    /// A fresh UUID is assigned as the preset id.
    pub fn new(name: impl Into<String>, mouse_id: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            version: CURRENT_PRESET_VERSION.to_string(),
            mouse_id: mouse_id.into(),
            ..Self::default()
        }
    }

    /// Loads a preset from a JSON file, migrating old formats forward.
    pub fn load(path: &Path) -> Result<Self> {
        tracing::debug!(path = %path.display(), "loading preset");
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read preset file: {}", path.display()))?;
        let mut value: Value = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse preset file: {}", path.display()))?;
        migrate_preset_value(&mut value);
        serde_json::from_value(value)
            .with_context(|| format!("Failed to decode preset file: {}", path.display()))
    }

    /// Saves the preset to a JSON file using an atomic temp-file + rename.
    pub fn save(&self, path: &Path) -> Result<()> {
        tracing::debug!(path = %path.display(), "saving preset");
        let content = serde_json::to_string_pretty(self).context("Failed to serialize preset")?;

        let temp_path = path.with_extension("json.tmp");
        fs::write(&temp_path, content)
            .with_context(|| format!("Failed to write temp file: {}", temp_path.display()))?;
        fs::rename(&temp_path, path)
            .with_context(|| format!("Failed to rename temp file to: {}", path.display()))
    }

    /// Gets the mapping for a button, checking the context table first.
    ///
    /// An empty context string means "no context": only the default table
    /// is consulted.
    #[must_use]
    pub fn mapping(&self, button_id: &str, context: &str) -> Option<&ActionRef> {
        if !context.is_empty() {
            if let Some(action) = self
                .context_mappings
                .get(context)
                .and_then(|m| m.get(button_id))
            {
                return Some(action);
            }
        }
        self.mappings.get(button_id)
    }

    /// Sets a mapping, either in the default table or a context table.
    pub fn set_mapping(&mut self, button_id: &str, action: ActionRef, context: Option<&str>) {
        match context {
            Some(ctx) => {
                self.context_mappings
                    .entry(ctx.to_string())
                    .or_default()
                    .insert(button_id.to_string(), action);
            }
            None => {
                self.mappings.insert(button_id.to_string(), action);
            }
        }
    }

    /// Removes a mapping. Returns true if a mapping was removed.
    ///
    /// Empty context tables are dropped so they do not linger in the file.
    pub fn remove_mapping(&mut self, button_id: &str, context: Option<&str>) -> bool {
        match context {
            Some(ctx) => {
                let Some(table) = self.context_mappings.get_mut(ctx) else {
                    return false;
                };
                let removed = table.remove(button_id).is_some();
                if table.is_empty() {
                    self.context_mappings.remove(ctx);
                }
                removed
            }
            None => self.mappings.remove(button_id).is_some(),
        }
    }

    /// All context names that carry overrides, in sorted order.
    #[must_use]
    pub fn contexts(&self) -> Vec<&str> {
        self.context_mappings.keys().map(String::as_str).collect()
    }
}

/// Migrates a raw preset JSON value from older format versions to the
/// current version.
///
/// An absent version field is treated as current (nothing to migrate);
/// the validator still reports it as a missing required field.
pub fn migrate_preset_value(value: &mut Value) {
    let Some(obj) = value.as_object_mut() else {
        return;
    };

    let version = obj
        .get("version")
        .and_then(Value::as_str)
        .unwrap_or(CURRENT_PRESET_VERSION)
        .to_string();

    if version == CURRENT_PRESET_VERSION {
        return;
    }

    // Linear migration chain; each step rewrites the object in place and
    // bumps the version field.
    #[allow(clippy::single_match)]
    match version.as_str() {
        // Pre-release files used a flat "bindings" table with no contexts.
        "0.9" => {
            if let Some(bindings) = obj.remove("bindings") {
                obj.insert("mappings".to_string(), bindings);
            }
            obj.insert(
                "version".to_string(),
                Value::String(CURRENT_PRESET_VERSION.to_string()),
            );
            tracing::info!(from = "0.9", to = CURRENT_PRESET_VERSION, "migrated preset");
        }
        _ => {}
    }
}
