use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use spdlog::info;

use pitchside::config::read_config;
use pitchside::logger;
use pitchside::server::server_run;

const CFG_FILE_NAME: &str = "pitchside.toml";

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the configuration file. When omitted, looks next to the
    /// executable, then in the current directory, then in the user config
    /// directory.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn find_config() -> Option<PathBuf> {
    if let Ok(exe_path) = env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let candidate = exe_dir.join(CFG_FILE_NAME);
            if candidate.exists() {
                return Some(candidate);
            }
        }
    }

    if let Ok(cur_dir) = env::current_dir() {
        let candidate = cur_dir.join(CFG_FILE_NAME);
        if candidate.exists() {
            return Some(candidate);
        }
    }

    if let Some(cfg_dir) = dirs::config_dir() {
        let candidate = cfg_dir.join(CFG_FILE_NAME);
        if candidate.exists() {
            return Some(candidate);
        }
    }

    None
}

#[ntex::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let cfg_path = args.config.or_else(find_config).context(
        "Could not find pitchside.toml; pass --config or bootstrap a site with `pitchside-tool init`",
    )?;

    let config = read_config(&cfg_path)?;
    logger::init(&config)?;
    info!("Read configuration from {}", cfg_path.display());

    server_run(config).await?;
    Ok(())
}
