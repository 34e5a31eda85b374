use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use four_in_a_row::config::AppConfig;
use four_in_a_row::console::Console;

/// Play Four In A Row against a friend in the terminal.
#[derive(Parser)]
#[command(name = "four_in_a_row", about = "Two-player Four In A Row")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "four_in_a_row.toml")]
    config: PathBuf,

    /// Print the default configuration as TOML and exit
    #[arg(long)]
    print_config: bool,
}

fn main() -> Result<()> {
    // Logs go to stderr so they never interleave with the board on stdout.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    if cli.print_config {
        print!("{}", AppConfig::default_toml());
        return Ok(());
    }

    let config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout().lock(), &config);
    let outcome = console.run().context("game ended early")?;
    info!("game finished: {outcome:?}");

    Ok(())
}
