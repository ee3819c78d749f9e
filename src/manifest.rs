//! The fixed list of provisioning steps and the files each one fetches.

use std::path::{Path, PathBuf};

pub const DEFAULT_BASE_URL: &str = "https://raw.githubusercontent.com/RocketCommunicationsInc/astro/main/packages/starter-kits/react-starter/";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepKind {
    Files,
    Install,
}

#[derive(Debug, PartialEq, Eq)]
pub struct ProvisioningStep {
    pub name: &'static str,
    pub kind: StepKind,
    /// Relative to the project root; `None` is the root itself.
    pub subdir: Option<&'static str>,
    pub files: &'static [&'static str],
}

pub const ROOT_FILES: &[&str] = &["package.json", "README.md", ".gitignore"];

pub const SRC_FILES: &[&str] = &[
    "App.css",
    "App.js",
    "App.test.js",
    "index.css",
    "index.js",
    "reportWebVitals.js",
    "setupTests.js",
];

pub const PUBLIC_FILES: &[&str] = &[
    "favicon.ico",
    "index.html",
    "logo512.png",
    "logo192.png",
    "manifest.json",
    "robots.txt",
];

/// Steps run in this order, always.
pub static STEPS: [ProvisioningStep; 4] = [
    ProvisioningStep {
        name: "root",
        kind: StepKind::Files,
        subdir: None,
        files: ROOT_FILES,
    },
    ProvisioningStep {
        name: "src",
        kind: StepKind::Files,
        subdir: Some("src"),
        files: SRC_FILES,
    },
    ProvisioningStep {
        name: "public",
        kind: StepKind::Files,
        subdir: Some("public"),
        files: PUBLIC_FILES,
    },
    ProvisioningStep {
        name: "install",
        kind: StepKind::Install,
        subdir: None,
        files: &[],
    },
];

impl ProvisioningStep {
    pub fn title(&self) -> String {
        match (self.kind, self.subdir) {
            (StepKind::Files, None) => "Writing root directory...".to_string(),
            (StepKind::Files, Some(subdir)) => format!("Writing {subdir} directory..."),
            (StepKind::Install, _) => "Installing dependencies...".to_string(),
        }
    }

    /// Directory the step writes into.
    pub fn dir(&self, project_root: &Path) -> PathBuf {
        match self.subdir {
            Some(subdir) => project_root.join(subdir),
            None => project_root.to_path_buf(),
        }
    }

    pub fn remote_id(&self, base_url: &str, file: &str) -> String {
        let base_url = base_url.trim_end_matches('/');
        match self.subdir {
            Some(subdir) => format!("{base_url}/{subdir}/{file}"),
            None => format!("{base_url}/{file}"),
        }
    }
}

/// Number of files a complete run writes.
pub fn file_count() -> usize {
    STEPS.iter().map(|step| step.files.len()).sum()
}
