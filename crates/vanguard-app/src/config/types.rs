//! Configuration types for the Vanguard shell
//!
//! Defines:
//! - `Settings` - Top-level `config.toml` contents
//! - `DeviceConfig`, `SimulationSettings`, `LockSettings`, `UiSettings` - its sections

use std::time::Duration;

use serde::{Deserialize, Serialize};
use vanguard_core::DeviceSettings;

/// Global settings from `config.toml`
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub device: DeviceConfig,

    #[serde(default)]
    pub simulation: SimulationSettings,

    #[serde(default)]
    pub lock: LockSettings,

    #[serde(default)]
    pub ui: UiSettings,
}

/// Initial device state
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct DeviceConfig {
    #[serde(flatten)]
    pub settings: DeviceSettings,

    /// Battery level at startup (0-100)
    #[serde(default = "default_initial_battery")]
    pub initial_battery: u8,
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self {
            settings: DeviceSettings::default(),
            initial_battery: default_initial_battery(),
        }
    }
}

fn default_initial_battery() -> u8 {
    100
}

/// Timing and sizing of the simulators
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SimulationSettings {
    /// Length of one battery time unit in milliseconds
    #[serde(default = "default_time_unit_ms")]
    pub time_unit_ms: u64,

    #[serde(default = "default_total_ram_mb")]
    pub total_ram_mb: u32,

    /// RAM held by the OS with no apps open
    #[serde(default = "default_base_ram_mb")]
    pub base_ram_mb: u32,

    /// Busy-loop iterations per frame at 100% RAM
    #[serde(default = "default_max_lag_iterations")]
    pub max_lag_iterations: u64,

    #[serde(default = "default_pre_boot_ms")]
    pub pre_boot_ms: u64,

    #[serde(default = "default_boot_ms")]
    pub boot_ms: u64,

    #[serde(default = "default_boot_message_ms")]
    pub boot_message_ms: u64,

    /// Delay after mode selection before the update notification appears
    #[serde(default = "default_update_notice_delay_ms")]
    pub update_notice_delay_ms: u64,
}

impl Default for SimulationSettings {
    fn default() -> Self {
        Self {
            time_unit_ms: default_time_unit_ms(),
            total_ram_mb: default_total_ram_mb(),
            base_ram_mb: default_base_ram_mb(),
            max_lag_iterations: default_max_lag_iterations(),
            pre_boot_ms: default_pre_boot_ms(),
            boot_ms: default_boot_ms(),
            boot_message_ms: default_boot_message_ms(),
            update_notice_delay_ms: default_update_notice_delay_ms(),
        }
    }
}

impl SimulationSettings {
    pub fn time_unit(&self) -> Duration {
        Duration::from_millis(self.time_unit_ms)
    }

    pub fn pre_boot(&self) -> Duration {
        Duration::from_millis(self.pre_boot_ms)
    }

    pub fn boot(&self) -> Duration {
        Duration::from_millis(self.boot_ms)
    }

    pub fn boot_message(&self) -> Duration {
        Duration::from_millis(self.boot_message_ms)
    }

    pub fn update_notice_delay(&self) -> Duration {
        Duration::from_millis(self.update_notice_delay_ms)
    }
}

fn default_time_unit_ms() -> u64 {
    1000
}

fn default_total_ram_mb() -> u32 {
    80
}

fn default_base_ram_mb() -> u32 {
    50
}

fn default_max_lag_iterations() -> u64 {
    3_000_000
}

fn default_pre_boot_ms() -> u64 {
    3500
}

fn default_boot_ms() -> u64 {
    5000
}

fn default_boot_message_ms() -> u64 {
    1000
}

fn default_update_notice_delay_ms() -> u64 {
    6000
}

/// Lock screen settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct LockSettings {
    #[serde(default = "default_pin")]
    pub pin: String,
}

impl Default for LockSettings {
    fn default() -> Self {
        Self { pin: default_pin() }
    }
}

pub(crate) fn default_pin() -> String {
    "1992".to_string()
}

/// UI settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct UiSettings {
    /// Event poll timeout per rendered frame
    #[serde(default = "default_frame_interval_ms")]
    pub frame_interval_ms: u64,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            frame_interval_ms: default_frame_interval_ms(),
        }
    }
}

impl UiSettings {
    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_interval_ms)
    }
}

fn default_frame_interval_ms() -> u64 {
    16
}
