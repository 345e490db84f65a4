//! Preset file management.
//!
//! The manager owns the builtin and user preset directories: builtin
//! presets ship with the application, user presets override them by id
//! and are the target of save/import/delete operations.

use crate::models::Preset;
use anyhow::{bail, Context, Result};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Manages loading, saving, and organizing preset files.
#[derive(Debug, Default)]
pub struct PresetManager {
    builtin_dir: Option<PathBuf>,
    user_dir: Option<PathBuf>,
    presets: BTreeMap<String, Preset>,
    loaded: bool,
}

impl PresetManager {
    /// Creates a manager over a builtin and a user preset directory.
    ///
    /// Either directory may be absent; a missing directory simply
    /// contributes no presets.
    #[must_use]
    pub fn new(builtin_dir: Option<PathBuf>, user_dir: Option<PathBuf>) -> Self {
        Self {
            builtin_dir,
            user_dir,
            presets: BTreeMap::new(),
            loaded: false,
        }
    }

    /// Loads all presets from both directories.
    ///
    /// Builtin presets load first, then user presets override by id.
    /// Files that fail to load are logged and skipped so one broken file
    /// cannot hide the rest.
    pub fn load_all(&mut self) -> Result<()> {
        self.presets.clear();

        if let Some(dir) = self.builtin_dir.clone() {
            self.load_from_directory(&dir)?;
        }
        if let Some(dir) = self.user_dir.clone() {
            self.load_from_directory(&dir)?;
        }

        self.loaded = true;
        tracing::info!(count = self.presets.len(), "loaded presets");
        Ok(())
    }

    fn load_from_directory(&mut self, dir: &Path) -> Result<()> {
        if !dir.exists() {
            return Ok(());
        }

        let entries = fs::read_dir(dir)
            .with_context(|| format!("Failed to read preset directory: {}", dir.display()))?;
        for entry in entries {
            let path = entry.context("Failed to read directory entry")?.path();
            if path.extension().is_none_or(|ext| ext != "json") {
                continue;
            }
            match Preset::load(&path) {
                Ok(preset) => {
                    tracing::debug!(id = %preset.id, path = %path.display(), "loaded preset");
                    self.presets.insert(preset.id.clone(), preset);
                }
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "skipping preset file");
                }
            }
        }
        Ok(())
    }

    fn ensure_loaded(&mut self) -> Result<()> {
        if !self.loaded {
            self.load_all()?;
        }
        Ok(())
    }

    /// Gets a preset by id.
    pub fn get(&mut self, preset_id: &str) -> Result<Option<&Preset>> {
        self.ensure_loaded()?;
        Ok(self.presets.get(preset_id))
    }

    /// Gets all presets targeting a specific mouse profile.
    pub fn presets_for_mouse(&mut self, mouse_id: &str) -> Result<Vec<&Preset>> {
        self.ensure_loaded()?;
        Ok(self
            .presets
            .values()
            .filter(|p| p.mouse_id == mouse_id)
            .collect())
    }

    /// Gets all loaded presets, ordered by id.
    pub fn all(&mut self) -> Result<Vec<&Preset>> {
        self.ensure_loaded()?;
        Ok(self.presets.values().collect())
    }

    /// Saves a preset into the user directory.
    pub fn save(&mut self, preset: &Preset) -> Result<()> {
        let Some(user_dir) = self.user_dir.clone() else {
            bail!("User preset directory not configured");
        };

        fs::create_dir_all(&user_dir).with_context(|| {
            format!("Failed to create preset directory: {}", user_dir.display())
        })?;

        let path = user_dir.join(format!("{}.json", preset.id));
        preset.save(&path)?;
        self.presets.insert(preset.id.clone(), preset.clone());
        tracing::info!(id = %preset.id, "saved preset");
        Ok(())
    }

    /// Deletes a user preset. Returns true if a file was deleted.
    ///
    /// Builtin presets cannot be deleted; without a user directory this
    /// is a no-op.
    pub fn delete(&mut self, preset_id: &str) -> Result<bool> {
        let Some(user_dir) = &self.user_dir else {
            return Ok(false);
        };

        let path = user_dir.join(format!("{preset_id}.json"));
        if !path.exists() {
            return Ok(false);
        }

        fs::remove_file(&path)
            .with_context(|| format!("Failed to delete preset file: {}", path.display()))?;
        self.presets.remove(preset_id);
        tracing::info!(id = %preset_id, "deleted preset");
        Ok(true)
    }

    /// Exports a preset to an arbitrary path for sharing.
    pub fn export(&mut self, preset_id: &str, path: &Path) -> Result<()> {
        self.ensure_loaded()?;
        let Some(preset) = self.presets.get(preset_id) else {
            bail!("Preset not found: {preset_id}");
        };
        preset.save(path)?;
        tracing::info!(id = %preset_id, path = %path.display(), "exported preset");
        Ok(())
    }

    /// Imports a preset file, saving it into the user directory when one
    /// is configured.
    pub fn import(&mut self, path: &Path) -> Result<Preset> {
        let preset = Preset::load(path)?;

        if self.user_dir.is_some() {
            self.save(&preset)?;
        } else {
            self.presets.insert(preset.id.clone(), preset.clone());
        }

        tracing::info!(id = %preset.id, "imported preset");
        Ok(preset)
    }
}
