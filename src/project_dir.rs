use std::{
    fmt::Display,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};

/// Destination directory of the new project, fixed for the whole run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectTarget(PathBuf);

impl AsRef<Path> for ProjectTarget {
    fn as_ref(&self) -> &Path {
        self.0.as_ref()
    }
}

impl Display for ProjectTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.display().fmt(f)
    }
}

impl From<PathBuf> for ProjectTarget {
    fn from(path: PathBuf) -> Self {
        Self(path)
    }
}

impl ProjectTarget {
    /// Resolve user input against `base_dir`, expanding `~/` and `$HOME/`.
    pub fn resolve(input: &str, base_dir: &Path) -> Result<Self> {
        let path = expand_home(Path::new(input))?;
        let path = if path.is_absolute() {
            path
        } else {
            base_dir.join(path)
        };
        Ok(Self(path))
    }

    pub fn path(&self) -> &Path {
        &self.0
    }
}

/// deals with `~/` and `$HOME/` prefixes
pub fn expand_home(p: &Path) -> Result<PathBuf> {
    let p = if p.starts_with("~/") || p == Path::new("~") {
        home()?.join(p.strip_prefix("~")?)
    } else if p.starts_with("$HOME/") {
        home()?.join(p.strip_prefix("$HOME/")?)
    } else {
        p.to_path_buf()
    };
    Ok(p)
}

/// home path wrapper
pub fn home() -> Result<PathBuf> {
    home::home_dir().context("$HOME was not set")
}
