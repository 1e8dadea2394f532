//! Initialize command - writes a tour.toml with default lesson inputs.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tour_config::{Paths, TourConfig};

use crate::style::{print_code_example, print_hint, print_spacer, print_success};

pub fn run(path: &str) -> Result<()> {
    let project_dir = Path::new(path);

    if Paths::is_initialized(project_dir) {
        anyhow::bail!(
            "Project already initialized in {}. tour.toml already exists.",
            project_dir.display()
        );
    }

    fs::create_dir_all(project_dir).context("Failed to create project directory")?;

    let config_path = Paths::project_config_file(project_dir);
    let config_content = toml::to_string_pretty(&TourConfig::default())
        .context("Failed to serialize configuration")?;
    fs::write(&config_path, config_content).context("Failed to write tour.toml")?;

    print_success(&format!("Wrote {}", config_path.display()));
    print_spacer();
    print_hint("Edit the lesson inputs, then run:");
    print_code_example("tour all");
    print_hint("Put machine-specific overrides in tour.local.toml.");

    Ok(())
}
