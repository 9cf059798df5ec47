//! Config command implementation.
//!
//! Prints the effective configuration or writes it to a file.

use std::io::{self, Write};
use std::path::PathBuf;

use tracing::info;

use crate::config::Config;
use crate::error::Result;

/// Arguments for the config command.
#[derive(Debug, Clone, Default)]
pub struct ConfigArgs {
    /// Write the configuration here instead of printing it.
    pub write: Option<PathBuf>,
}

/// Print `config` as TOML to `out`, or save it to `args.write`.
pub fn run_config_with(args: &ConfigArgs, config: &Config, out: &mut impl Write) -> Result<()> {
    match &args.write {
        Some(path) => {
            config.save_to_path(path)?;
            info!(path = %path.display(), "wrote configuration");
        },
        None => {
            write!(out, "{}", config.to_toml()?)?;
            out.flush()?;
        },
    }
    Ok(())
}

/// Run the config command.
pub fn run_config(args: ConfigArgs, config: &Config) -> Result<()> {
    run_config_with(&args, config, &mut io::stdout())
}
