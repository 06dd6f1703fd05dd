use clap::Parser;
use std::path::PathBuf;

/// Assistant bot - an interactive contact book with birthday reminders
#[derive(Debug, Parser)]
#[command(name = "assistant-bot")]
#[command(about = "Interactive contact book with phone validation and birthday reminders", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Address book file (overrides storage.data_file from the config)
    #[arg(long = "data-file", value_name = "PATH")]
    pub data_file: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}
