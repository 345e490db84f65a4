//! Mouse hardware profile data structures.
//!
//! A profile describes the physical buttons and features of a specific
//! mouse model. Profiles are read-only resources: they are bundled with
//! the application (or loaded from extra profile files) and never edited
//! by presets.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// A single physical mouse button.
///
/// The `id` is the canonical, platform-independent identifier used by
/// presets (e.g., "back", "thumb"); `hardware_code` is the raw button
/// code reported by the host event source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MouseButton {
    /// Canonical button identifier (e.g., "left", "back", "thumb")
    pub id: String,
    /// Human-readable button name (e.g., "Back", "Thumb Button")
    pub name: String,
    /// Raw hardware button code reported by the host event source
    pub hardware_code: u32,
    /// Whether this button may be remapped by presets
    #[serde(default = "default_remappable")]
    pub remappable: bool,
    /// Default action bound to this button when no preset overrides it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_action: Option<String>,
}

/// Default value for `remappable` (true)
const fn default_remappable() -> bool {
    true
}

impl MouseButton {
    /// Creates a new remappable button with the given id, name, and code.
    pub fn new(id: impl Into<String>, name: impl Into<String>, hardware_code: u32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            hardware_code,
            remappable: true,
            default_action: None,
        }
    }

    /// Marks the button as fixed (not remappable).
    #[must_use]
    pub const fn fixed(mut self) -> Self {
        self.remappable = false;
        self
    }

    /// Sets the default action for this button.
    pub fn with_default_action(mut self, action: impl Into<String>) -> Self {
        self.default_action = Some(action.into());
        self
    }
}

/// Optional device feature flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct MouseFeatures {
    /// Device has a horizontal scroll wheel
    pub horizontal_scroll: bool,
    /// Device has a thumb wheel
    pub thumb_wheel: bool,
    /// Device has a dedicated gesture button
    pub gesture_button: bool,
}

/// A mouse hardware profile.
///
/// # Validation
///
/// Profiles themselves are trusted resources; presets referencing a
/// profile are checked against its button list by `PresetValidator`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MouseProfile {
    /// Unique profile identifier (e.g., "logitech_mx_master_3s")
    pub id: String,
    /// Human-readable device name
    pub name: String,
    /// Vendor name
    #[serde(default = "default_vendor")]
    pub vendor: String,
    /// USB vendor ID as a hex string (e.g., "0x046d")
    #[serde(default = "default_vendor_id")]
    pub vendor_id: String,
    /// USB product IDs as hex strings
    #[serde(default)]
    pub product_ids: Vec<String>,
    /// Ordered button definitions
    #[serde(default)]
    pub buttons: Vec<MouseButton>,
    /// Optional feature flags
    #[serde(default)]
    pub features: MouseFeatures,
}

fn default_vendor() -> String {
    "Unknown".to_string()
}

fn default_vendor_id() -> String {
    "0x0000".to_string()
}

impl MouseProfile {
    /// Loads a profile from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        tracing::debug!(path = %path.display(), "loading mouse profile");
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read profile file: {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse profile file: {}", path.display()))
    }

    /// Saves the profile to a JSON file.
    pub fn save(&self, path: &Path) -> Result<()> {
        tracing::debug!(path = %path.display(), "saving mouse profile");
        let content =
            serde_json::to_string_pretty(self).context("Failed to serialize profile")?;
        fs::write(path, content)
            .with_context(|| format!("Failed to write profile file: {}", path.display()))
    }

    /// Gets a button by canonical id.
    #[must_use]
    pub fn button(&self, button_id: &str) -> Option<&MouseButton> {
        self.buttons.iter().find(|b| b.id == button_id)
    }

    /// Gets a button by raw hardware code.
    #[must_use]
    pub fn button_by_hardware_code(&self, code: u32) -> Option<&MouseButton> {
        self.buttons.iter().find(|b| b.hardware_code == code)
    }

    /// Checks whether a button id exists on this device.
    #[must_use]
    pub fn has_button(&self, button_id: &str) -> bool {
        self.button(button_id).is_some()
    }

    /// Gets all buttons that may be remapped.
    #[must_use]
    pub fn remappable_buttons(&self) -> Vec<&MouseButton> {
        self.buttons.iter().filter(|b| b.remappable).collect()
    }

    /// Total number of buttons on the device.
    #[must_use]
    pub fn button_count(&self) -> usize {
        self.buttons.len()
    }

    /// Number of remappable buttons on the device.
    #[must_use]
    pub fn remappable_count(&self) -> usize {
        self.buttons.iter().filter(|b| b.remappable).count()
    }
}
