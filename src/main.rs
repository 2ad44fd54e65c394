use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use taskpad::backend;
use taskpad::config::Config;
use taskpad::constants::DEFAULT_TITLE;
use taskpad::logger::Logger;
use taskpad::storage::LocalStorage;
use taskpad::ui;

#[derive(Parser, Debug)]
#[command(
    name = "taskpad",
    version,
    about = "A terminal to-do list for a REST task store.",
    after_help = "Examples:\n  taskpad\n  taskpad --offline\n  taskpad --config ./taskpad.toml\n  taskpad --generate-config"
)]
struct Cli {
    /// Configuration file to use instead of the default lookup
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Write a default configuration file (to --config or the default location) and exit
    #[arg(long)]
    generate_config: bool,

    /// Keep tasks in memory instead of talking to the remote store
    #[arg(long)]
    offline: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.generate_config {
        let path = match cli.config {
            Some(path) => path,
            None => Config::get_default_config_path()?,
        };
        return Config::generate_default_config(path);
    }

    let config = match &cli.config {
        Some(path) => Config::load_from_file(path)?,
        None => Config::load()?,
    };

    let logger = Logger::from_config(config.logging.enabled)?;
    let storage = LocalStorage::open(config.database_path()?).await?;

    // An unreadable store shows the default title rather than aborting
    let title = match storage.load_title().await {
        Ok(title) => title,
        Err(e) => {
            logger.log(format!("Title: Failed to load stored title: {:#}", e));
            DEFAULT_TITLE.to_string()
        }
    };

    let task_backend = backend::create_backend(&config.api, cli.offline)?;

    ui::run_app(&config, task_backend, storage.clone(), title, logger).await?;

    storage.close().await?;
    Ok(())
}
