//! Shared test fixtures for E2E CLI tests.
#![allow(dead_code)] // Some fixtures reserved for future tests

use mousebind::models::{ActionRef, MouseButton, MouseFeatures, MouseProfile, Preset};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Creates a preset mirroring a typical five-button editing setup:
/// back/forward undo/redo by default, SegmentEditor overrides back and
/// forward to slice stepping, Markups overrides only forward.
pub fn test_preset_editing() -> Preset {
    let mut preset = Preset::new("Editing Preset", "generic_5_button");
    preset.id = "editing_preset".to_string();
    preset.author = Some("Test Suite".to_string());
    preset.set_mapping("back", ActionRef::new("edit_undo"), None);
    preset.set_mapping("forward", ActionRef::new("edit_redo"), None);
    preset.set_mapping("middle", ActionRef::new("view_reset_3d"), None);
    preset.set_mapping(
        "back",
        ActionRef::new("segment_previous"),
        Some("SegmentEditor"),
    );
    preset.set_mapping(
        "forward",
        ActionRef::new("segment_next"),
        Some("SegmentEditor"),
    );
    preset.set_mapping(
        "forward",
        ActionRef::new("markups_place_point"),
        Some("Markups"),
    );
    preset
}

/// Creates a minimal preset with a single default mapping.
pub fn test_preset_minimal() -> Preset {
    let mut preset = Preset::new("Minimal Preset", "generic_3_button");
    preset.id = "minimal_preset".to_string();
    preset.set_mapping("middle", ActionRef::new("view_reset_3d"), None);
    preset
}

/// Creates a preset that references a button the generic_5_button
/// profile does not have and an action id with invalid syntax.
pub fn test_preset_with_errors() -> Preset {
    let mut preset = Preset::new("Broken Preset", "generic_5_button");
    preset.id = "broken_preset".to_string();
    preset.set_mapping("hyperscroll", ActionRef::new("edit_undo"), None);
    preset.set_mapping("back", ActionRef::new("Edit-Undo"), None);
    preset
}

/// Creates a three-button profile for tests that need a profile file
/// on disk rather than a bundled id.
pub fn test_profile_three_button() -> MouseProfile {
    MouseProfile {
        id: "test_3_button".to_string(),
        name: "Test Three Button".to_string(),
        vendor: "Test Vendor".to_string(),
        vendor_id: "0x1234".to_string(),
        product_ids: vec!["0xabcd".to_string()],
        buttons: vec![
            MouseButton::new("left", "Left Click", 1).fixed(),
            MouseButton::new("right", "Right Click", 2).fixed(),
            MouseButton::new("middle", "Middle Click", 4),
        ],
        features: MouseFeatures::default(),
    }
}

/// Writes a preset to `<temp>/preset.json` and returns the path with
/// the guard keeping the directory alive.
pub fn create_temp_preset_file(preset: &Preset) -> (PathBuf, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("preset.json");
    preset.save(&path).expect("Failed to write preset file");
    (path, temp_dir)
}

/// Writes a profile to `<temp>/profile.json` and returns the path with
/// the guard keeping the directory alive.
pub fn create_temp_profile_file(profile: &MouseProfile) -> (PathBuf, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("profile.json");
    profile.save(&path).expect("Failed to write profile file");
    (path, temp_dir)
}

/// Writes raw JSON text to `<temp>/preset.json` for malformed-input tests.
pub fn create_temp_raw_file(contents: &str) -> (PathBuf, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("preset.json");
    fs::write(&path, contents).expect("Failed to write file");
    (path, temp_dir)
}

/// Creates an empty directory to use as a user preset directory.
pub fn create_temp_preset_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}
