use anyhow::Result;
use assistant_bot::cli::Cli;
use assistant_bot::view::ConsoleView;
use assistant_bot::{init_logger, log_level_gate, Config};
use clap::Parser;
use log::info;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let rust_log_set = std::env::var_os("RUST_LOG").is_some();
    init_logger(log_level_gate(rust_log_set, cli.verbose, None));
    info!("Starting assistant bot");

    let config = Config::load(cli.config.as_deref())?;
    if let Some(level) = log_level_gate(rust_log_set, cli.verbose, Some(&config.logging.level)) {
        log::set_max_level(level);
    }

    let mut view = ConsoleView::new()?;
    assistant_bot::run(cli, config, &mut view)
}
