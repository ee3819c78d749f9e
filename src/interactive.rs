use anyhow::Result;
use console::style;
use dialoguer::{theme::ColorfulTheme, Input};
use log::warn;
use regex::Regex;

pub const DIRECTORY_PATTERN: &str = r"^[a-zA-Z0-9._~/-]+$";

/// Ask for the project directory until a valid one is entered.
pub fn directory() -> Result<String> {
    let valid = Regex::new(DIRECTORY_PATTERN)?;
    loop {
        let entry = Input::<String>::with_theme(&ColorfulTheme::default())
            .with_prompt("🤷 Directory for the new React app")
            .interact_text()?;
        let entry = entry.trim().to_string();
        if valid.is_match(&entry) {
            break Ok(entry);
        }

        warn!(
            "{} \"{}\" {}",
            style("Sorry,").bold().red(),
            style(&entry).bold().yellow(),
            style("is not a valid directory name").bold().red()
        );
    }
}
