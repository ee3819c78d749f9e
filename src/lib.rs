//! Bootstrap a new Astro UXDS React app from the published starter kit.

pub mod app_log;
pub mod args;
pub mod config;
pub mod fetcher;
pub mod installer;
mod interactive;
pub mod manifest;
pub mod pipeline;
pub mod progressbar;
pub mod project_dir;
mod user_parsed_input;

pub use args::{AppArgs, Cli};
pub use fetcher::{FetchError, FileFetcher, HttpFetcher};
pub use installer::{CommandInstaller, InstallError, PackageInstaller, PackageManager};
pub use pipeline::{
    InstallPreference, Pipeline, ProvisioningReport, StepError, StepOutcome, StepResult,
};
pub use project_dir::ProjectTarget;
pub use user_parsed_input::UserParsedInput;

use anyhow::{bail, Result};
use console::style;
use log::{debug, info};
use std::path::PathBuf;

/// Provision a new project as described by `args`, returning its directory.
pub fn generate(args: AppArgs) -> Result<PathBuf> {
    let user_parsed_input = UserParsedInput::try_from_args(&args)?;
    let config = user_parsed_input.config();
    let target = user_parsed_input.target();

    info!(
        "{} {}",
        style("Creating a new Astro UXDS React app in:").cyan(),
        style(target).bold()
    );
    debug!("Fetching starter kit from {}", config.source.base_url);

    let fetcher = HttpFetcher::new(config.source.timeout())?;
    let installer = CommandInstaller::new(config.managers.clone());
    let report = Pipeline::new(fetcher, installer, config.source.base_url.as_str())
        .run(target, user_parsed_input.preference());

    if user_parsed_input.is_verbose() {
        for result in report.results() {
            info!(
                "{:<16} {:?}{}",
                result.name,
                result.outcome,
                result
                    .detail
                    .as_deref()
                    .map(|d| format!(" ({d})"))
                    .unwrap_or_default()
            );
        }
    }

    if let Some(error) = report.error() {
        bail!("{} {}", style("[Error] -").bold().red(), error);
    }

    info!("✨ {}", style("Finished!").bold().green());
    next_steps(user_parsed_input.directory(), report.manager());

    Ok(target.path().to_path_buf())
}

fn next_steps(directory: &str, manager: Option<PackageManager>) {
    let mut lines = vec![
        "******* Next Steps *********".to_string(),
        format!("cd {directory}"),
    ];
    match manager {
        Some(manager) => lines.push(format!("{manager} start")),
        None => {
            lines.push("npm install".to_string());
            lines.push("npm start".to_string());
        }
    }
    lines.push("Thanks for using Astro UXDS!".to_string());
    lines.push("****************************".to_string());

    let width = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);
    for line in lines {
        info!("{}", style(format!("{line:<width$}")).black().on_color256(117));
    }
}
