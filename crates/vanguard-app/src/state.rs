//! Application state (Model in TEA pattern)

use chrono::{DateTime, Local};
use vanguard_core::{
    storage, AppId, DeviceMode, DeviceSettings, Notification, NotificationCenter, SettingsView,
};

use crate::battery::BatterySimulator;
use crate::boot::BootSequence;
use crate::config::Settings;
use crate::lock_screen::PinPad;
use crate::resources::ResourceMonitor;
use crate::session_manager::SessionManager;

/// Lifecycle of the shell process itself
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShellPhase {
    #[default]
    Running,
    Quitting,
}

/// Cursor positions for the keyboard-driven views
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// Selected entry in the mode picker (0 = handheld, 1 = laptop)
    pub mode_cursor: usize,
    /// Selected tile on the home grid
    pub home_cursor: usize,
    /// Selected card in the task switcher
    pub switcher_cursor: usize,
    /// Selected row in the notification shade
    pub shade_cursor: usize,
    /// Page shown by the Settings window
    pub settings_page: SettingsView,
}

/// Complete application state
#[derive(Debug)]
pub struct AppState {
    pub phase: ShellPhase,

    /// Window/session manager; the only writer of app, overlay and power state
    pub session: SessionManager,

    pub settings: DeviceSettings,
    pub battery: BatterySimulator,
    pub resources: ResourceMonitor,
    pub notifications: NotificationCenter,
    pub boot: BootSequence,
    pub pin_pad: PinPad,
    pub ui: UiState,

    /// Last wall clock reading
    pub now: DateTime<Local>,

    /// The one-shot update notice has been armed
    pub update_notice_armed: bool,

    /// Form factor to pick automatically once the splash ends
    pub preselected_mode: Option<DeviceMode>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::with_settings(&Settings::default())
    }

    pub fn with_settings(config: &Settings) -> Self {
        Self {
            phase: ShellPhase::Running,
            session: SessionManager::new(),
            settings: config.device.settings,
            battery: BatterySimulator::new(config.device.initial_battery),
            resources: ResourceMonitor::new(
                config.simulation.total_ram_mb,
                config.simulation.base_ram_mb,
            ),
            notifications: NotificationCenter::new(),
            boot: BootSequence::new(),
            pin_pad: PinPad::new(config.lock.pin.clone()),
            ui: UiState::default(),
            now: Local::now(),
            update_notice_armed: false,
            preselected_mode: None,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.phase == ShellPhase::Quitting
    }

    /// Read-only view handed to every view
    pub fn context(&self) -> ShellContext<'_> {
        ShellContext { state: self }
    }
}

/// Read-only shell context.
///
/// Views read shared state through this; they request changes by sending
/// `Message`s, never by writing state.
#[derive(Debug, Clone, Copy)]
pub struct ShellContext<'a> {
    state: &'a AppState,
}

impl<'a> ShellContext<'a> {
    pub fn settings(&self) -> &'a DeviceSettings {
        &self.state.settings
    }

    pub fn device_mode(&self) -> DeviceMode {
        self.state.session.device_mode().unwrap_or_default()
    }

    pub fn open_apps(&self) -> &'a [AppId] {
        self.state.session.open_apps()
    }

    pub fn active_app(&self) -> Option<AppId> {
        self.state.session.active_app()
    }

    pub fn is_connected(&self) -> bool {
        self.state.settings.is_connected()
    }

    pub fn battery_level(&self) -> u8 {
        self.state.battery.level()
    }

    pub fn is_charging(&self) -> bool {
        self.state.battery.is_charging()
    }

    pub fn has_unread_update(&self) -> bool {
        self.state.session.has_unread_update()
    }

    pub fn fps(&self) -> u32 {
        self.state.resources.fps()
    }

    pub fn used_ram_mb(&self) -> u32 {
        self.state.resources.used_ram_mb()
    }

    pub fn total_ram_mb(&self) -> u32 {
        self.state.resources.total_ram_mb()
    }

    pub fn ram_usage_percent(&self) -> f64 {
        self.state.resources.ram_usage_percent()
    }

    pub fn open_apps_ram_usage(&self) -> &'a [(AppId, u32)] {
        self.state.resources.per_app_ram_mb()
    }

    pub fn app_ram_mb(&self, id: AppId) -> Option<u32> {
        self.state.resources.app_ram_mb(id)
    }

    pub fn storage_usage_percent(&self) -> f64 {
        storage::usage().percentage()
    }

    pub fn notifications(&self) -> &'a [Notification] {
        self.state.notifications.items()
    }

    pub fn target_settings_view(&self) -> Option<SettingsView> {
        self.state.session.target_settings_view()
    }

    pub fn now(&self) -> DateTime<Local> {
        self.state.now
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;

    #[test]
    fn test_state_uses_config() {
        let mut config = Settings::default();
        config.device.initial_battery = 42;
        config.device.settings.power_saving = true;
        config.simulation.total_ram_mb = 64;

        let state = AppState::with_settings(&config);
        assert_eq!(state.battery.level(), 42);
        assert!(state.settings.power_saving);
        assert_eq!(state.resources.total_ram_mb(), 64);
        assert_eq!(state.phase, ShellPhase::Running);
    }

    #[test]
    fn test_context_reads_state() {
        let mut state = AppState::new();
        state.session.finish_splash();
        state.session.select_device_mode(DeviceMode::Laptop);

        let ctx = state.context();
        assert_eq!(ctx.open_apps(), &[AppId::BOOT]);
        assert_eq!(ctx.active_app(), Some(AppId::BOOT));
        assert_eq!(ctx.device_mode(), DeviceMode::Laptop);
        assert_eq!(ctx.battery_level(), 100);
        assert!(ctx.is_connected());
        assert!(ctx.has_unread_update());
        assert_eq!(ctx.used_ram_mb(), 50);
        assert!(ctx.storage_usage_percent() > 90.0);
    }
}
