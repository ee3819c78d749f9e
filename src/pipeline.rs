//! The ordered provisioning pipeline.
//!
//! Tasks run strictly one after another: the three file steps of the manifest, then the
//! dependency installation. The first failing task aborts the run; files already written
//! stay on disk. Every write uses a path joined from the [`ProjectTarget`], the process
//! working directory is never changed.

use console::style;
use log::{debug, warn};
use std::fs;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

use crate::fetcher::{FetchError, FileFetcher};
use crate::installer::{InstallError, PackageInstaller, PackageManager};
use crate::manifest::{ProvisioningStep, StepKind, STEPS};
use crate::progressbar::{self, StepProgress};
use crate::project_dir::ProjectTarget;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InstallPreference {
    #[default]
    Auto,
    ForceNpm,
    ForceYarn,
    SkipInstall,
}

impl InstallPreference {
    pub const fn primary(self) -> Option<PackageManager> {
        match self {
            Self::Auto | Self::ForceNpm => Some(PackageManager::Npm),
            Self::ForceYarn => Some(PackageManager::Yarn),
            Self::SkipInstall => None,
        }
    }

    /// Only `Auto` falls back; an explicit choice is never second-guessed.
    pub const fn fallback(self) -> Option<PackageManager> {
        match self {
            Self::Auto => Some(PackageManager::Yarn),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    Success,
    Skipped,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepResult {
    pub name: String,
    pub outcome: StepOutcome,
    pub detail: Option<String>,
}

#[derive(Debug, Error)]
pub enum StepError {
    #[error("cannot create directory {}: {error}", .path.display())]
    Directory { path: PathBuf, error: io::Error },
    #[error("an error occurred while writing the {step} directory: {error}")]
    Fetch {
        step: &'static str,
        file: &'static str,
        error: FetchError,
    },
    #[error("cannot write {}: {error}", .path.display())]
    Write { path: PathBuf, error: io::Error },
    #[error(transparent)]
    Install(#[from] InstallError),
}

/// What a run did, in execution order.
#[derive(Debug, Default)]
pub struct ProvisioningReport {
    results: Vec<StepResult>,
    manager: Option<PackageManager>,
    error: Option<StepError>,
}

impl ProvisioningReport {
    pub fn results(&self) -> &[StepResult] {
        &self.results
    }

    pub fn outcomes(&self) -> Vec<StepOutcome> {
        self.results.iter().map(|r| r.outcome).collect()
    }

    /// The package manager that installed the dependencies, if any did.
    pub const fn manager(&self) -> Option<PackageManager> {
        self.manager
    }

    /// The error that aborted the run.
    pub const fn error(&self) -> Option<&StepError> {
        self.error.as_ref()
    }

    pub const fn is_success(&self) -> bool {
        self.error.is_none()
    }

    fn record(&mut self, name: String, outcome: StepOutcome, detail: Option<String>) {
        debug!("{name}: {outcome:?}");
        self.results.push(StepResult {
            name,
            outcome,
            detail,
        });
    }
}

/// Flags set by earlier tasks and read by the enable predicates of later ones.
#[derive(Debug, Default)]
struct RunContext {
    fallback_requested: bool,
    manager: Option<PackageManager>,
}

#[derive(Debug, Clone, Copy)]
enum Task {
    Files(&'static ProvisioningStep),
    Install {
        manager: PackageManager,
        fallback: Option<PackageManager>,
    },
    Fallback(PackageManager),
    SkipInstall(&'static ProvisioningStep),
}

impl Task {
    fn name(&self) -> String {
        match self {
            Self::Files(step) | Self::SkipInstall(step) => step.name.to_string(),
            Self::Install { manager, .. } | Self::Fallback(manager) => format!("install ({manager})"),
        }
    }

    fn title(&self) -> String {
        match self {
            Self::Files(step) | Self::SkipInstall(step) => step.title(),
            Self::Install { manager, .. } | Self::Fallback(manager) => {
                format!("Installing dependencies with {manager}...")
            }
        }
    }

    fn enabled(&self, ctx: &RunContext) -> bool {
        match self {
            Self::Fallback(_) => ctx.fallback_requested,
            _ => true,
        }
    }
}

/// Expand the manifest into tasks, each paired with its 1-based step position.
fn tasks(preference: InstallPreference) -> Vec<(usize, Task)> {
    let mut tasks = Vec::with_capacity(STEPS.len() + 1);
    for (index, step) in STEPS.iter().enumerate() {
        let position = index + 1;
        match step.kind {
            StepKind::Files => tasks.push((position, Task::Files(step))),
            StepKind::Install => match preference.primary() {
                None => tasks.push((position, Task::SkipInstall(step))),
                Some(manager) => {
                    let fallback = preference.fallback();
                    tasks.push((position, Task::Install { manager, fallback }));
                    if let Some(fallback) = fallback {
                        tasks.push((position, Task::Fallback(fallback)));
                    }
                }
            },
        }
    }
    tasks
}

pub struct Pipeline<F, I> {
    fetcher: F,
    installer: I,
    base_url: String,
    progress: StepProgress,
}

impl<F: FileFetcher, I: PackageInstaller> Pipeline<F, I> {
    pub fn new(fetcher: F, installer: I, base_url: impl Into<String>) -> Self {
        Self {
            fetcher,
            installer,
            base_url: base_url.into(),
            progress: StepProgress::default(),
        }
    }

    pub fn with_progress(mut self, progress: StepProgress) -> Self {
        self.progress = progress;
        self
    }

    pub fn run(&self, target: &ProjectTarget, preference: InstallPreference) -> ProvisioningReport {
        let mut report = ProvisioningReport::default();
        let mut ctx = RunContext::default();
        let total = STEPS.len();

        for (position, task) in tasks(preference) {
            if !task.enabled(&ctx) {
                debug!("{}: not enabled", task.name());
                continue;
            }
            let title = task.title();
            let pb = self.progress.start(position, total, &title);
            match self.execute(task, target, &mut ctx) {
                Ok((outcome, detail)) => {
                    progressbar::finish(&pb, &title, outcome, detail.as_deref());
                    report.record(task.name(), outcome, detail);
                }
                Err(error) => {
                    progressbar::finish(&pb, &title, StepOutcome::Failed, None);
                    report.record(task.name(), StepOutcome::Failed, Some(error.to_string()));
                    report.error = Some(error);
                    break;
                }
            }
        }

        report.manager = ctx.manager;
        report
    }

    fn execute(
        &self,
        task: Task,
        target: &ProjectTarget,
        ctx: &mut RunContext,
    ) -> Result<(StepOutcome, Option<String>), StepError> {
        match task {
            Task::Files(step) => {
                self.write_files(step, target)?;
                Ok((StepOutcome::Success, None))
            }
            Task::SkipInstall(_) => Ok((
                StepOutcome::Skipped,
                Some("dependency installation disabled".to_string()),
            )),
            Task::Install { manager, fallback } => {
                match self.installer.install(manager, target.path()) {
                    Ok(()) => {
                        ctx.manager = Some(manager);
                        Ok((StepOutcome::Success, None))
                    }
                    Err(error) => match fallback {
                        Some(fallback) => {
                            self.progress.suspend(|| {
                                warn!(
                                    "{}",
                                    style(format!(
                                        "{manager} install failed, using a {fallback} install instead"
                                    ))
                                    .bold()
                                    .yellow()
                                )
                            });
                            debug!("{error}");
                            ctx.fallback_requested = true;
                            Ok((StepOutcome::Skipped, Some(error.to_string())))
                        }
                        None => Err(error.into()),
                    },
                }
            }
            Task::Fallback(manager) => {
                self.installer.install(manager, target.path())?;
                ctx.manager = Some(manager);
                Ok((StepOutcome::Success, None))
            }
        }
    }

    fn write_files(&self, step: &ProvisioningStep, target: &ProjectTarget) -> Result<(), StepError> {
        let dir = step.dir(target.path());
        fs::create_dir_all(&dir).map_err(|error| StepError::Directory {
            path: dir.clone(),
            error,
        })?;

        for &file in step.files {
            let remote_id = step.remote_id(&self.base_url, file);
            let contents = self
                .fetcher
                .fetch(&remote_id)
                .map_err(|error| StepError::Fetch {
                    step: step.name,
                    file,
                    error,
                })?;
            let path = dir.join(file);
            if let Err(error) = fs::write(&path, contents) {
                return Err(StepError::Write { path, error });
            }
            debug!("wrote {}", path.display());
        }
        Ok(())
    }
}
