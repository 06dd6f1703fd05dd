pub mod app;
pub mod cli;
pub mod command_processor;
pub mod config;
pub mod error;
pub mod model;
pub mod state;
pub mod view;

use anyhow::{Context, Result};
use env_logger::Env;
use log::{error, info, LevelFilter};
use std::path::PathBuf;

/// Level gate for the global logger, or `None` when `RUST_LOG` decides.
///
/// `--verbose` beats the configured level; an unparsable level means `warn`.
pub fn log_level_gate(rust_log_set: bool, verbose: bool, configured: Option<&str>) -> Option<LevelFilter> {
    if rust_log_set {
        return None;
    }
    if verbose {
        return Some(LevelFilter::Debug);
    }
    Some(configured.and_then(|level| level.parse().ok()).unwrap_or(LevelFilter::Warn))
}

/// Initialize logging before the config is read. The filter itself lets
/// everything through unless `RUST_LOG` is set; `gate` caps the level and can
/// be changed later with `log::set_max_level`.
pub fn init_logger(gate: Option<LevelFilter>) {
    env_logger::Builder::from_env(Env::default().default_filter_or("trace"))
        .format(|buf, record| {
            use chrono::Local;
            use std::io::Write;
            writeln!(
                buf,
                "{} [{}] {}",
                Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                record.args()
            )
        })
        .init();
    if let Some(level) = gate {
        log::set_max_level(level);
    }
}

/// Pick the address book file: explicit flag, then config, then the default.
pub fn resolve_data_file(flag: Option<PathBuf>, config: &Config) -> Result<PathBuf> {
    if let Some(path) = flag.or_else(|| config.storage.data_file.clone()) {
        return Ok(path);
    }
    Ok(StateManager::default_path()?)
}

/// Load the book, run one interactive session and save the book afterwards.
///
/// Load and save failures are returned so the process exits non-zero.
pub fn run(cli: cli::Cli, config: Config, view: &mut dyn view::UserView) -> Result<()> {
    let data_file = resolve_data_file(cli.data_file, &config)?;
    let state = StateManager::new(data_file);
    let mut book = state
        .load()
        .with_context(|| format!("Failed to load address book from {}", state.path().display()))?;

    let app = app::Application::new(config.birthdays.window_days);
    let session = app.run(&mut book, view);

    if let Err(e) = state.save(&book) {
        let err = anyhow::Error::new(e);
        error!("Failed to save address book: {:#}", err);
        view.show_error(&format!("Failed to save address book: {:#}", err));
        return Err(err.context("Address book was not saved"));
    }
    info!("Saved {} contact(s) to {}", book.len(), state.path().display());
    session
}


// Re-export commonly used types
pub use config::Config;
pub use model::{AddressBook, Birthday, Phone, Record, UpcomingBirthday};
pub use state::StateManager;
