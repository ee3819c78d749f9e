use std::path::PathBuf;

use clap::{Args, Parser};
use std::env;

use crate::pipeline::InstallPreference;

/// Styles from <https://github.com/rust-lang/cargo/blob/master/src/cargo/util/style.rs>
mod style {
    use anstyle::*;
    use clap::builder::Styles;

    const HEADER: Style = AnsiColor::Green.on_default().effects(Effects::BOLD);
    const USAGE: Style = AnsiColor::Green.on_default().effects(Effects::BOLD);
    const LITERAL: Style = AnsiColor::Cyan.on_default().effects(Effects::BOLD);
    const PLACEHOLDER: Style = AnsiColor::Cyan.on_default();
    const ERROR: Style = AnsiColor::Red.on_default().effects(Effects::BOLD);
    const VALID: Style = AnsiColor::Cyan.on_default().effects(Effects::BOLD);
    const INVALID: Style = AnsiColor::Yellow.on_default().effects(Effects::BOLD);

    pub const STYLES: Styles = {
        Styles::styled()
            .header(HEADER)
            .usage(USAGE)
            .literal(LITERAL)
            .placeholder(PLACEHOLDER)
            .error(ERROR)
            .valid(VALID)
            .invalid(INVALID)
    };
}

mod heading {
    pub const INSTALL_PARAMETERS: &str = "Install Parameters";
    pub const SOURCE_PARAMETERS: &str = "Source Parameters";
}

#[derive(Parser)]
#[command(
    name = "astro",
    bin_name = "astro",
    arg_required_else_help(true),
    version,
    about,
    next_line_help(false),
    styles(style::STYLES)
)]
pub enum Cli {
    /// Bootstrap a new React app using the @astrouxds/react wrapper.
    #[command(name = "react")]
    React(AppArgs),
}

#[derive(Clone, Debug, Default, Args)]
#[command(arg_required_else_help(false), version, about)]
pub struct AppArgs {
    /// The directory to hold the new React app. Asked for interactively when omitted.
    #[arg(value_name = "DIRECTORY")]
    pub directory: Option<String>,

    /// Do not install dependencies after writing the project files.
    #[arg(long, action, conflicts_with_all = ["yarn", "npm"], help_heading = heading::INSTALL_PARAMETERS)]
    pub noinstall: bool,

    /// Install dependencies with yarn only.
    #[arg(long, action, conflicts_with_all = ["noinstall", "npm"], help_heading = heading::INSTALL_PARAMETERS)]
    pub yarn: bool,

    /// Install dependencies with npm only, without falling back to yarn.
    #[arg(long, action, conflicts_with_all = ["noinstall", "yarn"], help_heading = heading::INSTALL_PARAMETERS)]
    pub npm: bool,

    /// Read the starter source and package manager settings from a TOML file.
    #[arg(long, short, value_parser, value_name = "FILE", help_heading = heading::SOURCE_PARAMETERS)]
    pub config: Option<PathBuf>,

    /// Enables more verbose output.
    #[arg(long, short, action)]
    pub verbose: bool,
}

impl AppArgs {
    /// The flags are mutually exclusive, so at most one of them is set.
    pub const fn install_preference(&self) -> InstallPreference {
        if self.noinstall {
            InstallPreference::SkipInstall
        } else if self.yarn {
            InstallPreference::ForceYarn
        } else if self.npm {
            InstallPreference::ForceNpm
        } else {
            InstallPreference::Auto
        }
    }
}

/// To get the arguments list from terminal
/// Return : work arguments
pub fn resolve_args() -> AppArgs {
    let args = env::args();
    let Cli::React(args) = Cli::parse_from(args);
    args
}
