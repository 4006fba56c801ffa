use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use codex_api::{ApiHandle, CommonApi, DirectorySaveTrigger, ReqwestTransport};
use codex_app::{logging, AppConfig, CommonStore, CONFIG_FILENAME};
use codex_logging::codex_warn;
use log::LevelFilter;

#[derive(Debug, Parser)]
#[command(name = "codex_app", version, about = "Codex version check and downloads")]
struct Cli {
    /// RON config file; missing means defaults.
    #[arg(long, default_value = CONFIG_FILENAME)]
    config: PathBuf,
    /// API root, e.g. http://localhost:9810/api/v3
    #[arg(long)]
    base_url: Option<String>,
    #[arg(long)]
    download_dir: Option<PathBuf>,
    /// How long to wait for the version lookup.
    #[arg(long, default_value_t = 30)]
    wait_secs: u64,
    #[arg(short, long)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Show installed and latest versions.
    Versions,
    /// Save a resource under the given file name.
    Download { url: String, file_name: String },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // The config picks the log destination, so its own errors are reported afterwards.
    let (mut config, config_error) = AppConfig::resolve(&cli.config);
    if let Some(base_url) = cli.base_url {
        config.base_url = base_url;
    }
    if let Some(download_dir) = cli.download_dir {
        config.download_dir = download_dir;
    }

    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    logging::initialize(config.log_destination, level);
    if let Some(err) = config_error {
        codex_warn!("{}; using defaults", err);
    }

    let transport = ReqwestTransport::new(config.transport_settings())
        .context("failed to build HTTP transport")?;
    let api = CommonApi::new(
        Arc::new(transport),
        Arc::new(DirectorySaveTrigger::new(config.download_dir.clone())),
    );
    let mut store = CommonStore::new(ApiHandle::new(api));

    match cli.command {
        Command::Versions => {
            store.load_versions();
            if !store.wait_for_event(Duration::from_secs(cli.wait_secs)) {
                codex_warn!("No version answer within {}s", cli.wait_secs);
            }
            let view = store.view();
            println!("installed: {}", view.installed.as_deref().unwrap_or("unknown"));
            println!("latest:    {}", view.latest.as_deref().unwrap_or("unknown"));
            if view.update_available() {
                println!("An update is available.");
            }
        }
        Command::Download { url, file_name } => {
            store.trigger_download(url, file_name);
        }
    }

    store.shutdown();
    Ok(())
}
