use anyhow::{Context, Result};
use catalog_console::{
    cli::{self, Cli},
    state::AppState,
};
use clap::Parser;
use colored::Colorize;
use dotenv::dotenv;
use shared::{config::Config, utils::init_logger};
use tracing::info;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    dotenv().ok();

    let cli = Cli::parse();

    if let Err(e) = start(cli).await {
        eprintln!("{} {}", "Error:".red().bold(), e);

        if let Some(source) = e.source() {
            eprintln!("\n{} {}", "Caused by:".yellow(), source);
        }

        std::process::exit(1);
    }
}

async fn start(cli: Cli) -> Result<()> {
    let config = Config::init().context("Failed to load configuration")?;

    let _guard = init_logger("catalog-console", config.dev_mode, config.enable_file_log);

    let state = AppState::new(config).context("Failed to create AppState")?;

    cli::run(cli, &state).await?;

    info!("Done");
    Ok(())
}
