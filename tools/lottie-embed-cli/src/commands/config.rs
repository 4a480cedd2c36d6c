//! Show or initialize the configuration.

use std::path::PathBuf;
use std::process::ExitCode;

use lottie_embed_common::{config_file_path, AppConfig};

pub fn run(path: Option<PathBuf>, config: AppConfig, init: bool) -> anyhow::Result<ExitCode> {
    let path = path.unwrap_or_else(config_file_path);

    if init {
        let defaults = AppConfig::default();
        defaults
            .save_to(&path)
            .map_err(|e| anyhow::anyhow!("Failed to write config: {e}"))?;
        println!("Wrote default configuration to {}", path.display());
        return Ok(ExitCode::SUCCESS);
    }

    let state = if path.exists() { "" } else { " (not present, using defaults)" };
    println!("Config file: {}{state}", path.display());
    println!("{}", serde_json::to_string_pretty(&config)?);
    Ok(ExitCode::SUCCESS)
}
