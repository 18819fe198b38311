//! Vanguard - a simulated device shell in the terminal
//!
//! This is the binary entry point. All logic lives in the library.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use vanguard_core::prelude::*;
use vanguard_core::{AppId, DeviceMode};
use vanguard_shell::LaunchOptions;

/// Vanguard - a simulated handheld/laptop device shell
#[derive(Parser, Debug)]
#[command(name = "vanguard")]
#[command(about = "A simulated handheld/laptop device shell", long_about = None)]
struct Args {
    /// Path to config.toml (defaults to the user config directory)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Pick the form factor automatically after the splash
    #[arg(long, value_enum)]
    mode: Option<ModeArg>,

    /// Skip the pre-boot splash
    #[arg(long)]
    no_splash: bool,

    /// Write a default config file and exit
    #[arg(long)]
    init_config: bool,

    /// Print the catalog entry for an app key (e.g. `ai_assistant`) and exit
    #[arg(long, value_name = "APP")]
    describe: Option<AppId>,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum ModeArg {
    Handheld,
    Laptop,
}

impl From<ModeArg> for DeviceMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Handheld => DeviceMode::Handheld,
            ModeArg::Laptop => DeviceMode::Laptop,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    if let Some(id) = args.describe {
        println!("{}", vanguard_shell::describe_app(id));
        return Ok(());
    }

    let config_path = args
        .config
        .unwrap_or_else(vanguard_app::config::default_config_path);

    if args.init_config {
        vanguard_app::config::init_config_file(&config_path)?;
        eprintln!("Config: {}", config_path.display());
        return Ok(());
    }

    vanguard_shell::run(LaunchOptions {
        config_path,
        mode: args.mode.map(DeviceMode::from),
        skip_splash: args.no_splash,
    })
    .await
}
