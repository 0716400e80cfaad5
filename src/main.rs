use anyhow::Context;
use clap::Parser;

use buffet_tui::args::Cli;
use buffet_tui::config::Config;
use buffet_tui::logging::{default_log_path, init_tracing};
use buffet_tui::ui::app::App;
use buffet_tui::ui::runtime;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    cli.apply(&mut config);
    config.validate()?;

    let log_path = config.log_file.clone().unwrap_or_else(default_log_path);
    init_tracing(&log_path)
        .with_context(|| format!("cannot open log file {}", log_path.display()))?;
    tracing::info!(log = %log_path.display(), "configuration loaded");

    let app = App::from_config(&config)?;
    runtime::run(app).context("terminal session failed")?;
    Ok(())
}
