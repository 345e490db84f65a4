//! Bundled mouse profile database.
//!
//! Profiles for known devices ship embedded in the binary; extra profile
//! files can be layered on top from a configured directory. Bundled
//! profiles are read-only resources.

use crate::models::MouseProfile;
use anyhow::{Context, Result};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Database schema from profiles.json.
#[derive(Debug, serde::Deserialize)]
struct ProfileCatalog {
    #[allow(dead_code)]
    version: String,
    profiles: Vec<MouseProfile>,
}

/// Mouse profile database with id and vendor/product lookup.
#[derive(Debug, Clone)]
pub struct ProfileDb {
    profiles: Vec<MouseProfile>,
    lookup: HashMap<String, usize>,
}

impl ProfileDb {
    /// Loads the bundled profiles from the embedded JSON file.
    pub fn load() -> Result<Self> {
        let json_data = include_str!("profiles.json");
        let catalog: ProfileCatalog =
            serde_json::from_str(json_data).context("Failed to parse embedded profiles.json")?;

        let mut db = Self {
            profiles: Vec::new(),
            lookup: HashMap::new(),
        };
        for profile in catalog.profiles {
            db.insert(profile);
        }
        Ok(db)
    }

    /// Loads the bundled profiles plus any `*.json` profile files from a
    /// directory. Directory profiles override bundled ones by id;
    /// unreadable files are logged and skipped.
    pub fn load_with_extra_dir(dir: &Path) -> Result<Self> {
        let mut db = Self::load()?;
        if !dir.exists() {
            return Ok(db);
        }

        let entries = fs::read_dir(dir)
            .with_context(|| format!("Failed to read profile directory: {}", dir.display()))?;
        for entry in entries {
            let path = entry.context("Failed to read directory entry")?.path();
            if path.extension().is_none_or(|ext| ext != "json") {
                continue;
            }
            match MouseProfile::load(&path) {
                Ok(profile) => db.insert(profile),
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "skipping profile file");
                }
            }
        }
        Ok(db)
    }

    fn insert(&mut self, profile: MouseProfile) {
        if let Some(idx) = self.lookup.get(&profile.id) {
            self.profiles[*idx] = profile;
        } else {
            self.lookup.insert(profile.id.clone(), self.profiles.len());
            self.profiles.push(profile);
        }
    }

    /// Gets a profile by id.
    #[must_use]
    pub fn get(&self, profile_id: &str) -> Option<&MouseProfile> {
        let idx = self.lookup.get(profile_id)?;
        self.profiles.get(*idx)
    }

    /// All profiles in load order.
    #[must_use]
    pub fn all(&self) -> &[MouseProfile] {
        &self.profiles
    }

    /// Finds a profile matching a USB vendor/product id pair.
    #[must_use]
    pub fn find_by_product(&self, vendor_id: &str, product_id: &str) -> Option<&MouseProfile> {
        self.profiles.iter().find(|p| {
            p.vendor_id.eq_ignore_ascii_case(vendor_id)
                && p.product_ids
                    .iter()
                    .any(|id| id.eq_ignore_ascii_case(product_id))
        })
    }

    /// Number of available profiles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    /// Returns true if no profiles are available.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}
