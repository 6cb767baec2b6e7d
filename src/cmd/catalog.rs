//! `reportcheck catalog`: show the effective field layout and rule tables.

use anyhow::{Context, Result};
use std::path::Path;

use reportcheck::config::Config;

pub fn cmd_catalog(config_path: Option<&Path>) -> Result<()> {
    let config = Config::load(config_path)?;
    let yaml = serde_yaml::to_string(&config.catalog).context("Failed to serialize catalog")?;
    print!("{}", yaml);
    Ok(())
}
