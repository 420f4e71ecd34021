use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(
    name = "budget",
    about = "Record income and expenses and view a running summary"
)]
pub struct Config {
    /// Append logs to this file. Logging is off when omitted.
    #[arg(long)]
    pub log_file: Option<PathBuf>,
    /// Log filter, e.g. `info` or `budget=debug`. Falls back to RUST_LOG, then `info`.
    #[arg(long)]
    pub log_level: Option<String>,
}

pub fn load() -> Config {
    Config::parse()
}
