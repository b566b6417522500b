use anyhow::Context;
use clap::Parser;
use splitbill::config::Config;
use splitbill::logging::{default_log_path, init_tracing};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "splitbill", version, about = "Split bills with friends")]
struct Cli {
    /// Path to the config file
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Path to the log file (default: next to the config file)
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Start with an empty friend list instead of the configured friends
    #[arg(long)]
    no_seed: bool,

    /// Validate the config, print a summary and exit
    #[arg(long)]
    check_config: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config_path = cli.config.clone().unwrap_or_else(Config::config_path);

    let config = match Config::load_from(&config_path) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Error: {err}");
            std::process::exit(1);
        }
    };

    if cli.check_config {
        println!("Config OK: {}", config_path.display());
        println!("Friends: {}", config.friends.len());
        println!("Currency: {}", config.defaults.currency_symbol);
        return Ok(());
    }

    let log_path = cli
        .log_file
        .clone()
        .unwrap_or_else(|| default_log_path(&config_path));
    init_tracing(&log_path, &config.defaults.log_level)
        .with_context(|| format!("failed to open log file '{}'", log_path.display()))?;
    tracing::info!(config = %config_path.display(), "Starting splitbill");

    let friends = if cli.no_seed {
        Vec::new()
    } else {
        config.friends.clone()
    };
    splitbill::ui::run(&config, friends).context("terminal UI failed")?;
    Ok(())
}
