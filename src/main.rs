//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `ipinfo_lookup` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use ipinfo_lookup::config::Opt;
use ipinfo_lookup::initialization::init_logger_with;
use ipinfo_lookup::{run_lookup, Config};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load environment variables from .env file (if it exists), so IPINFO_TOKEN
    // can live there. Try the current directory first, then next to the executable.
    if dotenvy::dotenv().is_err() {
        if let Ok(exe_path) = std::env::current_exe() {
            if let Some(exe_dir) = exe_path.parent() {
                let env_path = exe_dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                }
            }
        }
    }

    let config = Config::from(Opt::parse());

    // `--no-color` and piped output are decided here, not by terminal detection
    colored::control::set_override(config.color);

    init_logger_with(
        config.effective_log_level(),
        config.log_format.clone(),
        config.color,
    )
    .context("Failed to initialize logger")?;

    // Failed lookups and save errors are reported by the run itself; only
    // configuration errors end up here.
    if let Err(e) = run_lookup(config).await {
        eprintln!("ipinfo_lookup error: {:#}", e);
        process::exit(1);
    }
    Ok(())
}
