//! ipinfo_lookup library: IP address lookups against the ipinfo.io API
//!
//! This library looks up one or more IP addresses, retrying failed requests
//! with exponential backoff, and saves the results as JSON or CSV.
//!
//! # Example
//!
//! ```no_run
//! use ipinfo_lookup::config::InputSource;
//! use ipinfo_lookup::{run_lookup, Config};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     input: InputSource::Single("8.8.8.8".to_string()),
//!     output: Some("results.json".into()),
//!     ..Default::default()
//! };
//!
//! let report = run_lookup(config).await?;
//! println!("Looked up {} IPs: {} succeeded, {} failed",
//!          report.total, report.succeeded, report.failed);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Lookups run one at a time, so a
//! `current_thread` runtime is enough.

#![warn(missing_docs)]

pub mod app;
pub mod config;
pub mod credentials;
pub mod error_handling;
pub mod export;
pub mod initialization;
pub mod lookup;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel, OutputFormat};
pub use lookup::{LookupClient, LookupResult, ResultSet, RetryPolicy};
pub use run::{run_lookup, run_lookup_with, LookupReport, SaveStatus};

// Internal run module (contains the lookup pipeline)
mod run {
    use std::io::{self, Write};
    use std::time::Instant;

    use anyhow::{Context, Result};
    use log::{debug, info, warn};

    use crate::app::{resolve_input, Console};
    use crate::config::Config;
    use crate::credentials::{default_providers, resolve_token, TokenProvider};
    use crate::export::{write_results, SaveOutcome};
    use crate::lookup::{LookupClient, ResultSet, RetryPolicy};

    /// What happened to the output file.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum SaveStatus {
        /// No output path was configured
        NotRequested,
        /// The writer finished (written, or nothing to save)
        Finished(SaveOutcome),
        /// Writing failed; the run itself still succeeded
        Failed(String),
    }

    /// Results of a lookup run.
    #[derive(Debug, Clone)]
    pub struct LookupReport {
        /// Number of addresses looked up
        pub total: usize,
        /// Lookups that returned an API payload
        pub succeeded: usize,
        /// Lookups that ended as error records
        pub failed: usize,
        /// Input lines skipped as invalid
        pub skipped: usize,
        /// Records in input order
        pub results: ResultSet,
        /// Outcome of saving the output file
        pub save: SaveStatus,
        /// Elapsed time in seconds
        pub elapsed_seconds: f64,
    }

    /// Runs the lookup pipeline, printing progress and records to stdout.
    ///
    /// The token comes from `--token`, `IPINFO_TOKEN` or `~/.ipinfo.cfg`, in
    /// that order.
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// - The single IP address is invalid
    /// - The input file cannot be read
    /// - The API URL or HTTP client cannot be set up
    ///
    /// Failed lookups and an unwritable output file are not errors.
    pub async fn run_lookup(config: Config) -> Result<LookupReport> {
        let providers = default_providers(config.token.clone());
        let mut console = Console::new(io::stdout(), config.color, config.quiet);
        run_lookup_with(config, &providers, &mut console).await
    }

    /// Runs the lookup pipeline with explicit token providers and console sink.
    ///
    /// `config.token` is ignored here; pass an `ExplicitToken` provider instead.
    pub async fn run_lookup_with<W: Write>(
        config: Config,
        providers: &[Box<dyn TokenProvider>],
        console: &mut Console<W>,
    ) -> Result<LookupReport> {
        let start_time = Instant::now();

        let token = resolve_token(providers).unwrap_or_default();
        if token.is_empty() {
            warn!(
                "No API token provided. You can set the IPINFO_TOKEN env var or a ~/.ipinfo.cfg file."
            );
        }

        let input = resolve_input(&config.input).await?;
        let client =
            LookupClient::new(&config.api_url).context("Failed to initialize lookup client")?;
        let policy = RetryPolicy::new(config.max_attempts, config.retry_delay_secs);

        let total = input.ips.len();
        info!("Looking up {} IP address{}", total, if total == 1 { "" } else { "es" });

        let mut results = ResultSet::with_capacity(total);
        for (idx, ip) in input.ips.iter().enumerate() {
            report_console(console.progress(idx + 1, total, ip));
            let result = client.lookup(ip, &token, &policy).await;
            report_console(console.record(&result));
            results.push(result);
        }

        let failed = results.iter().filter(|r| r.is_error()).count();
        let save = match &config.output {
            None => SaveStatus::NotRequested,
            Some(path) => match write_results(&results, path, config.format) {
                Ok(outcome) => {
                    report_console(console.saved(path, &outcome));
                    SaveStatus::Finished(outcome)
                }
                Err(e) => {
                    report_console(console.save_failed(&e));
                    SaveStatus::Failed(e.to_string())
                }
            },
        };

        let elapsed_seconds = start_time.elapsed().as_secs_f64();
        info!(
            "Looked up {} IP address{} ({} succeeded, {} failed) in {:.1}s",
            total,
            if total == 1 { "" } else { "es" },
            total - failed,
            failed,
            elapsed_seconds
        );

        Ok(LookupReport {
            total,
            succeeded: total - failed,
            failed,
            skipped: input.skipped.len(),
            results,
            save,
            elapsed_seconds,
        })
    }

    fn report_console(result: io::Result<()>) {
        if let Err(e) = result {
            debug!("Console write failed: {}", e);
        }
    }
}
