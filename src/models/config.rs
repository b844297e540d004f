use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Which built-in provider backs the console.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    #[default]
    Libvirt,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Host snapshot rendered when none is given on the command line.
    pub snapshot_path: Option<PathBuf>,
    pub provider: ProviderKind,
    /// Tab shown when a row is expanded without naming one.
    pub default_tab: usize,
}

impl AppConfig {
    pub fn config_path() -> Result<PathBuf> {
        let config_dir =
            dirs::config_dir().ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?;
        Ok(config_dir.join("machines-console").join("config.toml"))
    }

    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Reads the config at `path`, or the defaults if there is no file yet.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            Ok(toml::from_str(&content)?)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_gives_defaults() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config = AppConfig::load_from(&temp_dir.path().join("config.toml"))?;

        assert_eq!(config, AppConfig::default());
        assert_eq!(config.provider, ProviderKind::Libvirt);
        Ok(())
    }

    #[test]
    fn test_save_and_load() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("nested").join("config.toml");
        let config = AppConfig {
            snapshot_path: Some(PathBuf::from("/var/lib/machines/host.json")),
            provider: ProviderKind::Libvirt,
            default_tab: 1,
        };

        config.save_to(&path)?;
        assert_eq!(AppConfig::load_from(&path)?, config);
        Ok(())
    }

    #[test]
    fn test_partial_file() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "default_tab = 2\n")?;

        let config = AppConfig::load_from(&path)?;
        assert_eq!(config.default_tab, 2);
        assert_eq!(config.snapshot_path, None);
        Ok(())
    }

    #[test]
    fn test_invalid_file_is_an_error() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "provider = \"xen\"\n")?;

        assert!(AppConfig::load_from(&path).is_err());
        Ok(())
    }
}
