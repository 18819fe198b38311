//! Settings loader for `config.toml`

use std::path::{Path, PathBuf};

use super::types::{default_pin, Settings};
use vanguard_core::prelude::*;

const CONFIG_FILENAME: &str = "config.toml";
const APP_DIR: &str = "vanguard-shell";

/// Upper bound for every configured delay or period (one hour)
pub const MAX_DURATION_MS: u64 = 3_600_000;

/// Default config location: `<config_dir>/vanguard-shell/config.toml`
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
        .join(CONFIG_FILENAME)
}

/// Load settings from `config_path`.
///
/// Returns defaults if the file doesn't exist or can't be parsed.
pub fn load_settings(config_path: &Path) -> Settings {
    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    let settings = match std::fs::read_to_string(config_path) {
        Ok(content) => match toml::from_str::<Settings>(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    };

    validate(settings)
}

/// Clamp out-of-range values, warning about each one
fn validate(mut settings: Settings) -> Settings {
    if settings.device.initial_battery > 100 {
        warn!(
            "initial_battery {} out of range, using 100",
            settings.device.initial_battery
        );
        settings.device.initial_battery = 100;
    }

    let pin = &settings.lock.pin;
    if pin.is_empty() || !pin.chars().all(|c| c.is_ascii_digit()) {
        warn!("Lock PIN must be one or more digits, using the default");
        settings.lock.pin = default_pin();
    }

    let sim = &mut settings.simulation;
    for (name, value) in [
        ("time_unit_ms", &mut sim.time_unit_ms),
        ("pre_boot_ms", &mut sim.pre_boot_ms),
        ("boot_ms", &mut sim.boot_ms),
        ("boot_message_ms", &mut sim.boot_message_ms),
        ("update_notice_delay_ms", &mut sim.update_notice_delay_ms),
        ("frame_interval_ms", &mut settings.ui.frame_interval_ms),
    ] {
        if *value > MAX_DURATION_MS {
            warn!("{} {} too large, using {}", name, value, MAX_DURATION_MS);
            *value = MAX_DURATION_MS;
        }
    }

    if sim.time_unit_ms == 0 {
        warn!("time_unit_ms must be positive, using 1");
        sim.time_unit_ms = 1;
    }
    if sim.boot_message_ms == 0 {
        warn!("boot_message_ms must be positive, using 1");
        sim.boot_message_ms = 1;
    }
    if sim.base_ram_mb > sim.total_ram_mb {
        warn!(
            "base_ram_mb {} exceeds total_ram_mb {}, clamping",
            sim.base_ram_mb, sim.total_ram_mb
        );
        sim.base_ram_mb = sim.total_ram_mb;
    }

    if settings.ui.frame_interval_ms == 0 {
        settings.ui.frame_interval_ms = 1;
    }

    settings
}

/// Write a commented default config file. Existing files are left alone.
pub fn init_config_file(config_path: &Path) -> Result<()> {
    if let Some(dir) = config_path.parent() {
        if !dir.exists() {
            std::fs::create_dir_all(dir)
                .map_err(|e| Error::config(format!("Failed to create config dir: {}", e)))?;
        }
    }

    if config_path.exists() {
        debug!("Config file {:?} already exists", config_path);
        return Ok(());
    }

    std::fs::write(config_path, generate_default_config())
        .map_err(|e| Error::config(format!("Failed to write config.toml: {}", e)))?;
    info!("Wrote default config to {:?}", config_path);
    Ok(())
}

fn generate_default_config() -> String {
    r#"# Vanguard Shell Configuration

[device]
theme = "light"            # light | dark
internet_mode = "wifi"     # wifi | network | vbluetooth | off
airplane_mode = false
power_saving = false
initial_battery = 100      # 0-100

[simulation]
time_unit_ms = 1000        # one battery time unit; drain every 7 units (9 in power saving)
total_ram_mb = 80
base_ram_mb = 50           # OS usage with no apps open
max_lag_iterations = 3000000
pre_boot_ms = 3500
boot_ms = 5000
boot_message_ms = 1000
update_notice_delay_ms = 6000

[lock]
pin = "1992"

[ui]
frame_interval_ms = 16
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::battery::tick_period;
    use std::time::Duration;
    use tempfile::tempdir;
    use vanguard_core::Theme;

    #[test]
    fn test_load_settings_missing_file() {
        let temp = tempdir().unwrap();
        let settings = load_settings(&temp.path().join("config.toml"));
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_load_settings_custom() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
[device]
theme = "dark"
power_saving = true

[lock]
pin = "0000"
"#,
        )
        .unwrap();

        let settings = load_settings(&path);
        assert_eq!(settings.device.settings.theme, Theme::Dark);
        assert!(settings.device.settings.power_saving);
        assert_eq!(settings.lock.pin, "0000");
    }

    #[test]
    fn test_load_settings_invalid_toml() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(&path, "not valid toml {{{{").unwrap();

        assert_eq!(load_settings(&path), Settings::default());
    }

    #[test]
    fn test_load_settings_clamps_values() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(
            &path,
            "[device]\ninitial_battery = 250\n[lock]\npin = \"abcd\"\n[simulation]\nbase_ram_mb = 120\n",
        )
        .unwrap();

        let settings = load_settings(&path);
        assert_eq!(settings.device.initial_battery, 100);
        assert_eq!(settings.lock.pin, "1992");
        assert_eq!(settings.simulation.base_ram_mb, 80);
    }

    #[test]
    fn test_load_settings_caps_durations() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(
            &path,
            "[simulation]\ntime_unit_ms = 9000000000000000000\nboot_ms = 86400000\n",
        )
        .unwrap();

        let settings = load_settings(&path);
        assert_eq!(settings.simulation.time_unit_ms, MAX_DURATION_MS);
        assert_eq!(settings.simulation.boot_ms, MAX_DURATION_MS);
        assert_eq!(settings.simulation.pre_boot_ms, 3500);

        // the slowest battery period must stay representable
        let period = tick_period(true, true, settings.simulation.time_unit());
        assert_eq!(period, Duration::from_secs(18 * 3600));
    }

    #[test]
    fn test_init_config_file() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("nested").join("config.toml");

        init_config_file(&path).unwrap();
        assert!(path.exists());

        let content = std::fs::read_to_string(&path).unwrap();
        let parsed: Settings =
            toml::from_str(&content).expect("Default config should be valid TOML");
        assert_eq!(parsed, Settings::default());
    }

    #[test]
    fn test_init_config_file_idempotent() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("config.toml");

        init_config_file(&path).unwrap();
        std::fs::write(&path, "[lock]\npin = \"4321\"\n").unwrap();
        init_config_file(&path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("4321"));
    }
}
