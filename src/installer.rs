//! Running the package manager inside the new project.

use log::debug;
use std::fmt::Display;
use std::path::Path;
use std::process::{Command, Stdio};
use thiserror::Error;

use crate::config::ManagersConfig;

/// Lines of stderr kept when an install fails.
const STDERR_TAIL_LINES: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PackageManager {
    Npm,
    Yarn,
}

impl PackageManager {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Npm => "npm",
            Self::Yarn => "yarn",
        }
    }

    pub const fn install_args(self) -> &'static [&'static str] {
        &["install"]
    }
}

impl Display for PackageManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Error)]
pub enum InstallError {
    #[error("{manager} not installed (`{program}` was not found)")]
    NotFound {
        manager: PackageManager,
        program: String,
    },
    #[error("could not start `{program}`: {error}")]
    Spawn {
        manager: PackageManager,
        program: String,
        error: std::io::Error,
    },
    #[error("`{program} install` failed with {}{}", exit_code(.code), stderr_suffix(.stderr))]
    Exit {
        manager: PackageManager,
        program: String,
        code: Option<i32>,
        stderr: String,
    },
}

impl InstallError {
    pub const fn manager(&self) -> PackageManager {
        match self {
            Self::NotFound { manager, .. }
            | Self::Spawn { manager, .. }
            | Self::Exit { manager, .. } => *manager,
        }
    }
}

fn exit_code(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {code}"),
        None => "no exit code (terminated by signal)".to_string(),
    }
}

fn stderr_suffix(stderr: &str) -> String {
    if stderr.is_empty() {
        String::new()
    } else {
        format!(":\n{stderr}")
    }
}

fn tail(output: &[u8], lines: usize) -> String {
    let text = String::from_utf8_lossy(output);
    let all: Vec<&str> = text.trim_end().lines().collect();
    all[all.len().saturating_sub(lines)..].join("\n")
}

pub trait PackageInstaller {
    /// Install the dependencies of the project at `project_dir` with `manager`.
    fn install(&self, manager: PackageManager, project_dir: &Path) -> Result<(), InstallError>;
}

impl<T: PackageInstaller + ?Sized> PackageInstaller for &T {
    fn install(&self, manager: PackageManager, project_dir: &Path) -> Result<(), InstallError> {
        (**self).install(manager, project_dir)
    }
}

/// Runs `<program> install` as a child process with the project as working directory.
#[derive(Debug, Default, Clone)]
pub struct CommandInstaller {
    programs: ManagersConfig,
}

impl CommandInstaller {
    pub fn new(programs: ManagersConfig) -> Self {
        Self { programs }
    }
}

impl PackageInstaller for CommandInstaller {
    fn install(&self, manager: PackageManager, project_dir: &Path) -> Result<(), InstallError> {
        let program = self.programs.program(manager);
        let resolved = which::which(program).map_err(|_| InstallError::NotFound {
            manager,
            program: program.to_string(),
        })?;

        debug!(
            "running `{} {}` in {}",
            resolved.display(),
            manager.install_args().join(" "),
            project_dir.display()
        );
        let output = Command::new(&resolved)
            .args(manager.install_args())
            .current_dir(project_dir)
            .stdin(Stdio::null())
            .output()
            .map_err(|error| InstallError::Spawn {
                manager,
                program: program.to_string(),
                error,
            })?;

        if output.status.success() {
            Ok(())
        } else {
            Err(InstallError::Exit {
                manager,
                program: program.to_string(),
                code: output.status.code(),
                stderr: tail(&output.stderr, STDERR_TAIL_LINES),
            })
        }
    }
}
