//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::path::PathBuf;

use clap::{ArgGroup, Parser, ValueEnum};

use crate::config::constants::{DEFAULT_API_URL, RETRY_BASE_DELAY_SECS, RETRY_MAX_ATTEMPTS};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Format of the saved results file.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Single pretty-printed JSON array
    Json,
    /// CSV with a header built from the union of all record keys
    Csv,
}

/// Where the IP addresses to look up come from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InputSource {
    /// A single address given on the command line
    Single(String),
    /// A file with one address per line (`-` reads stdin)
    File(PathBuf),
}

/// Command-line options.
///
/// Exactly one of `--ip` or `--file` must be given.
///
/// # Examples
///
/// ```bash
/// # Single address, printed to the console
/// ipinfo_lookup --ip 8.8.8.8
///
/// # Batch file saved as CSV
/// ipinfo_lookup --file ips.txt --output results.csv --format csv
/// ```
#[derive(Debug, Parser)]
#[command(
    name = "ipinfo_lookup",
    version,
    about = "IP information lookup tool using the ipinfo.io API"
)]
#[command(group(ArgGroup::new("input").required(true).args(["ip", "file"])))]
pub struct Opt {
    /// Single IP address to look up
    #[arg(short, long)]
    pub ip: Option<String>,

    /// File containing IP addresses, one per line (`-` for stdin)
    #[arg(short, long, value_parser)]
    pub file: Option<PathBuf>,

    /// Output file to save results
    #[arg(short, long, value_parser)]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Verbose output (per-attempt diagnostics)
    #[arg(short, long)]
    pub verbose: bool,

    /// Quiet mode (no per-IP output, errors are still reported)
    #[arg(short, long)]
    pub quiet: bool,

    /// Total attempts per IP address
    #[arg(long, default_value_t = RETRY_MAX_ATTEMPTS as u32, value_parser = clap::value_parser!(u32).range(1..))]
    pub retries: u32,

    /// Delay in seconds before the first retry (doubled on each further retry)
    #[arg(long, default_value_t = RETRY_BASE_DELAY_SECS, value_parser = parse_delay)]
    pub retry_delay: f64,

    /// API token (overrides IPINFO_TOKEN and ~/.ipinfo.cfg)
    #[arg(long)]
    pub token: Option<String>,

    /// API base URL
    #[arg(long, default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// Disable colored console output
    #[arg(long)]
    pub no_color: bool,
}

fn parse_delay(s: &str) -> Result<f64, String> {
    let delay: f64 = s
        .parse()
        .map_err(|_| format!("`{s}` is not a number of seconds"))?;
    if !delay.is_finite() || delay < 0.0 {
        return Err(format!("retry delay must be a non-negative number, got `{s}`"));
    }
    Ok(delay)
}

/// Library configuration (no CLI dependencies).
///
/// This is the core configuration struct used by the library. It can be
/// constructed programmatically without any CLI dependencies.
///
/// # Examples
///
/// ```no_run
/// use ipinfo_lookup::Config;
/// use ipinfo_lookup::config::InputSource;
///
/// let config = Config {
///     input: InputSource::Single("8.8.8.8".to_string()),
///     quiet: true,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Source of the IP addresses
    pub input: InputSource,

    /// File to save results to (nothing is saved if `None`)
    pub output: Option<PathBuf>,

    /// Format of the saved results
    pub format: OutputFormat,

    /// Log every attempt
    pub verbose: bool,

    /// Suppress per-IP progress and record output
    pub quiet: bool,

    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,

    /// Total attempts per IP (at least 1)
    pub max_attempts: u32,

    /// Delay in seconds before the first retry
    pub retry_delay_secs: f64,

    /// Explicit API token; when `None` the credential providers are consulted
    pub token: Option<String>,

    /// API base URL
    pub api_url: String,

    /// Colorize console output
    pub color: bool,
}

impl Config {
    /// Log level after applying `--verbose`, which raises it to at least debug.
    pub fn effective_log_level(&self) -> log::LevelFilter {
        let level = log::LevelFilter::from(self.log_level.clone());
        if self.verbose {
            level.max(log::LevelFilter::Debug)
        } else {
            level
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: InputSource::File(PathBuf::from("ips.txt")),
            output: None,
            format: OutputFormat::Json,
            verbose: false,
            quiet: false,
            log_level: LogLevel::Warn,
            log_format: LogFormat::Plain,
            max_attempts: RETRY_MAX_ATTEMPTS as u32,
            retry_delay_secs: RETRY_BASE_DELAY_SECS,
            token: None,
            api_url: DEFAULT_API_URL.to_string(),
            color: true,
        }
    }
}

impl From<Opt> for Config {
    fn from(opt: Opt) -> Self {
        // The argument group guarantees exactly one of the two is present.
        let input = match (opt.ip, opt.file) {
            (Some(ip), _) => InputSource::Single(ip),
            (None, Some(file)) => InputSource::File(file),
            (None, None) => InputSource::File(PathBuf::from("-")),
        };
        Self {
            input,
            output: opt.output,
            format: opt.format,
            verbose: opt.verbose,
            quiet: opt.quiet,
            log_level: opt.log_level,
            log_format: opt.log_format,
            max_attempts: opt.retries,
            retry_delay_secs: opt.retry_delay,
            token: opt.token,
            api_url: opt.api_url,
            color: !opt.no_color,
        }
    }
}
