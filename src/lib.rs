//! Vanguard Shell Library
//!
//! Wires configuration, logging and the engine together and hands off to
//! the terminal UI.

use std::path::PathBuf;

use vanguard_app::{config, Engine};
use vanguard_core::prelude::*;
use vanguard_core::{descriptor, storage, AppId, DeviceMode};

/// Startup choices taken from the command line
#[derive(Debug, Clone)]
pub struct LaunchOptions {
    pub config_path: PathBuf,
    /// Form factor to select once the splash ends
    pub mode: Option<DeviceMode>,
    pub skip_splash: bool,
}

/// Main application entry point
pub async fn run(options: LaunchOptions) -> Result<()> {
    // Initialize error handling
    color_eyre::install().map_err(|e| Error::terminal(e.to_string()))?;

    // Initialize logging (to file, since TUI owns stdout)
    vanguard_core::logging::init()?;

    info!("═══════════════════════════════════════════════════════");
    info!("Vanguard shell starting");
    info!("Config: {}", options.config_path.display());
    info!("═══════════════════════════════════════════════════════");

    let engine = build_engine(&options);
    let result = vanguard_tui::run(engine).await;

    if let Err(ref e) = result {
        error!("Application error: {:?}", e);
    }

    info!("Vanguard shell exiting");
    result
}

/// Plain-text catalog card for one app, newest changes first
pub fn describe_app(id: AppId) -> String {
    let app = descriptor(id);
    let mut lines = vec![format!("{} ({})", app.name, id)];
    if let Some(version) = app.version {
        lines.push(format!("  Version  v{}", version));
    }
    match app.ram {
        Some(range) if range.min == range.max => lines.push(format!("  Memory   {} MB", range.min)),
        Some(range) => lines.push(format!("  Memory   {}-{} MB", range.min, range.max)),
        None => {}
    }
    if let Some(kb) = app.storage_kb {
        lines.push(format!("  Storage  {}", storage::format_kb(kb)));
    }
    for entry in app.changelog {
        lines.push(format!("  {}", entry.version));
        lines.extend(entry.notes.iter().map(|note| format!("    - {}", note)));
    }
    lines.join("\n")
}

fn build_engine(options: &LaunchOptions) -> Engine {
    let settings = config::load_settings(&options.config_path);
    let mut engine = Engine::new(settings);
    if let Some(mode) = options.mode {
        engine.preselect_mode(mode);
    }
    if options.skip_splash {
        engine.skip_splash();
    }
    engine
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_build_engine_applies_options() {
        let options = LaunchOptions {
            config_path: PathBuf::from("/nonexistent/vanguard/config.toml"),
            mode: Some(DeviceMode::Laptop),
            skip_splash: true,
        };
        let engine = build_engine(&options);
        assert_eq!(engine.state.preselected_mode, Some(DeviceMode::Laptop));
        assert!(!engine.state.session.splash_finished());
    }

    #[test]
    fn test_describe_app_by_key() {
        let id: AppId = "calculator".parse().unwrap();
        let card = describe_app(id);
        assert!(card.starts_with("Calculator (calculator)"));
        assert!(card.contains("Memory   2 MB"));
        assert!(card.contains("Initial release with full calculation functionality."));
    }

    #[test]
    fn test_describe_boot_has_no_memory_line() {
        let card = describe_app(AppId::BOOT);
        assert!(!card.contains("Memory"));
    }

    #[test]
    fn test_unknown_app_key_is_rejected() {
        let err = "photoshop".parse::<AppId>().unwrap_err();
        assert!(err.is_recoverable());
        assert_eq!(err.to_string(), "Unknown app identifier: photoshop");
    }
}
