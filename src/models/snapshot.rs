use anyhow::Result;
use machines_core::{ProviderState, Vm};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("unsupported snapshot format: {0} (expected .json or .toml)")]
    UnsupportedFormat(PathBuf),
}

/// Everything known about one host at one point in time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HostSnapshot {
    pub vms: Vec<Vm>,
    pub provider_state: ProviderState,
}

impl HostSnapshot {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let snapshot = match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::from_json(&content)?,
            Some("toml") => Self::from_toml(&content)?,
            _ => return Err(SnapshotError::UnsupportedFormat(path.to_path_buf()).into()),
        };
        tracing::debug!("Loaded {} VMs from {}", snapshot.vms.len(), path.display());
        Ok(snapshot)
    }

    pub fn from_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}
