//! Admin credential storage: one opaque API key under a fixed name,
//! persisted as a small JSON object in the platform config directory.
//! Absence of the value means "not logged in".

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use directories::ProjectDirs;

/// Fixed storage key for the admin API key.
pub const CREDENTIAL_KEY: &str = "adminApiKey";

pub struct CredentialStore {
    path: PathBuf,
}

impl CredentialStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Opens the store at the default platform location,
    /// e.g. `~/.config/admin/credentials.json` on Linux.
    pub fn open_default() -> Result<Self> {
        let dirs = ProjectDirs::from("", "", "admin")
            .ok_or_else(|| anyhow!("Could not determine a config directory for this platform"))?;
        Ok(Self::new(dirs.config_dir().join("credentials.json")))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the stored API key, or `None` when not logged in.
    pub fn load(&self) -> Result<Option<String>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let raw = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read {}", self.path.display()))?;
        let map: BTreeMap<String, String> =
            serde_json::from_str(&raw).context("Credential file is not valid JSON")?;
        Ok(map.get(CREDENTIAL_KEY).cloned().filter(|k| !k.is_empty()))
    }

    pub fn save(&self, api_key: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let mut map = BTreeMap::new();
        map.insert(CREDENTIAL_KEY.to_string(), api_key.trim().to_string());
        fs::write(&self.path, serde_json::to_string_pretty(&map)?)
            .with_context(|| format!("Failed to write {}", self.path.display()))?;
        Ok(())
    }

    pub fn clear(&self) -> Result<()> {
        if self.path.exists() {
            fs::remove_file(&self.path)
                .with_context(|| format!("Failed to remove {}", self.path.display()))?;
        }
        Ok(())
    }
}
