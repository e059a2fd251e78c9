use std::path::Path;

use anyhow::Result;
use kolabcal_core::MapperConfig;
use owo_colors::OwoColorize;

pub fn run(config_path: &Path, init: bool) -> Result<()> {
    if init {
        if config_path.exists() {
            println!("Config already exists at {}", config_path.display());
        } else {
            MapperConfig::create_default_config(config_path)?;
            println!("Created {}", config_path.display());
        }
    }

    let config = MapperConfig::load(config_path)?;
    let source = if config_path.exists() { "" } else { " (not found, using defaults)" };

    println!("{}", "Paths".bold());
    println!("  Config:  {}{}", config_path.display(), source.dimmed());
    println!();
    println!("{}", "Custom properties".bold());
    println!("  Namespace prefix:    {}", config.namespace_prefix);
    println!("  Passthrough prefix:  {}", config.passthrough_prefix);
    println!();
    println!("{}", "Diagnostics".bold());
    println!("  Fail on:  {}", config.fail_on);

    Ok(())
}
