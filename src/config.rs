use anyhow::{Context, Result};
use log::warn;
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;
use std::{fs, io::ErrorKind};

use crate::installer::PackageManager;
use crate::manifest::DEFAULT_BASE_URL;

const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Deserialize, Debug, PartialEq, Eq, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub managers: ManagersConfig,
}

/// Where the starter kit files are fetched from.
#[derive(Deserialize, Debug, PartialEq, Eq, Clone)]
#[serde(default, deny_unknown_fields)]
pub struct SourceConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl SourceConfig {
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Programs invoked for each package manager.
#[derive(Deserialize, Debug, PartialEq, Eq, Clone)]
#[serde(default, deny_unknown_fields)]
pub struct ManagersConfig {
    pub npm: String,
    pub yarn: String,
}

impl Default for ManagersConfig {
    fn default() -> Self {
        Self {
            npm: PackageManager::Npm.name().to_string(),
            yarn: PackageManager::Yarn.name().to_string(),
        }
    }
}

impl ManagersConfig {
    pub fn program(&self, manager: PackageManager) -> &str {
        match manager {
            PackageManager::Npm => &self.npm,
            PackageManager::Yarn => &self.yarn,
        }
    }
}

impl TryFrom<String> for Config {
    type Error = toml::de::Error;

    fn try_from(contents: String) -> Result<Self, Self::Error> {
        let config: Self = toml::from_str(&contents)?;
        Ok(config)
    }
}

impl Config {
    pub fn from_path(path: &Option<impl AsRef<Path>>) -> Result<Self> {
        let config = match path {
            Some(path) => {
                let path = path.as_ref();
                match fs::read_to_string(path) {
                    Ok(contents) => Self::try_from(contents).with_context(|| {
                        format!("invalid configuration file {}", path.display())
                    })?,
                    Err(e) => match e.kind() {
                        ErrorKind::NotFound => {
                            warn!(
                                "Configuration file {} not found, using defaults",
                                path.display()
                            );
                            Self::default()
                        }
                        _ => anyhow::bail!(e),
                    },
                }
            }
            None => Self::default(),
        };
        Ok(config)
    }
}
