//! User-facing device settings

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// Which simulated radio carries the connection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InternetMode {
    #[default]
    Wifi,
    Network,
    VBluetooth,
    Off,
}

impl InternetMode {
    pub fn label(&self) -> &'static str {
        match self {
            InternetMode::Wifi => "Wi-Fi",
            InternetMode::Network => "Mobile Network",
            InternetMode::VBluetooth => "vBluetooth",
            InternetMode::Off => "Offline",
        }
    }
}

/// Physical form factor picked on first start
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceMode {
    #[default]
    Handheld,
    Laptop,
}

impl fmt::Display for DeviceMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeviceMode::Handheld => write!(f, "handheld"),
            DeviceMode::Laptop => write!(f, "laptop"),
        }
    }
}

/// Settings pages that can be deep-linked into
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SettingsView {
    #[default]
    Main,
    Wifi,
    Network,
    VBluetooth,
    Battery,
    Display,
}

impl SettingsView {
    pub const ALL: [SettingsView; 6] = [
        SettingsView::Main,
        SettingsView::Wifi,
        SettingsView::Network,
        SettingsView::VBluetooth,
        SettingsView::Battery,
        SettingsView::Display,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            SettingsView::Main => "Settings",
            SettingsView::Wifi => "Wi-Fi",
            SettingsView::Network => "Mobile Network",
            SettingsView::VBluetooth => "vBluetooth",
            SettingsView::Battery => "Battery",
            SettingsView::Display => "Display",
        }
    }

    fn index(&self) -> usize {
        Self::ALL.iter().position(|v| v == self).unwrap_or(0)
    }

    /// Next page, wrapping
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Previous page, wrapping
    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Runtime device settings, exposed to every view through the shell context.
///
/// The form factor is not part of this: it is chosen once per process and
/// owned by the session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeviceSettings {
    pub theme: Theme,
    pub internet_mode: InternetMode,
    pub airplane_mode: bool,
    pub power_saving: bool,
}

impl DeviceSettings {
    /// Connected when a radio is selected and airplane mode is off
    pub fn is_connected(&self) -> bool {
        !self.airplane_mode && self.internet_mode != InternetMode::Off
    }

    /// Control-center semantics: pressing the active mode turns it off,
    /// pressing another mode switches to it.
    pub fn toggle_internet_mode(&mut self, mode: InternetMode) {
        self.internet_mode = if self.internet_mode == mode {
            InternetMode::Off
        } else {
            mode
        };
    }
}
