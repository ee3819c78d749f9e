//! Input from user but after parse

use std::env;

use anyhow::{Context, Result};

use crate::args::AppArgs;
use crate::config::Config;
use crate::interactive;
use crate::pipeline::InstallPreference;
use crate::project_dir::ProjectTarget;

// Contains parsed information from user.
#[derive(Debug)]
pub struct UserParsedInput {
    // as typed, for the "next steps" hint
    directory: String,
    target: ProjectTarget,
    preference: InstallPreference,
    config: Config,
    verbose: bool,
}

impl UserParsedInput {
    /// Merge the CLI arguments with the configuration file, prompting for the directory when
    /// it was not given.
    pub fn try_from_args(args: &AppArgs) -> Result<Self> {
        let config = Config::from_path(&args.config)?;

        let directory = match &args.directory {
            Some(directory) => directory.clone(),
            None => interactive::directory()?,
        };
        let current_dir = env::current_dir().context("cannot read the current directory")?;
        let target = ProjectTarget::resolve(&directory, &current_dir)?;

        Ok(Self {
            directory,
            target,
            preference: args.install_preference(),
            config,
            verbose: args.verbose,
        })
    }

    pub fn directory(&self) -> &str {
        &self.directory
    }

    pub const fn target(&self) -> &ProjectTarget {
        &self.target
    }

    pub const fn preference(&self) -> InstallPreference {
        self.preference
    }

    pub const fn config(&self) -> &Config {
        &self.config
    }

    pub const fn is_verbose(&self) -> bool {
        self.verbose
    }
}
