//! Message types for the application (TEA pattern)
//!
//! Every state change goes through one of these. Views and timers never
//! touch `AppState` directly; they send a `Message` and `handler::update`
//! applies it.

use chrono::{DateTime, Local};
use vanguard_core::{AppId, DeviceMode, DeviceSettings, NewNotification, SettingsView};

use crate::input_key::InputKey;

#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from the terminal
    Key(InputKey),

    /// Quit the shell
    Quit,

    // ─────────────────────────────────────────────────────────
    // Timer Messages
    // ─────────────────────────────────────────────────────────
    /// Wall clock tick, once per second
    ClockTick(DateTime<Local>),
    /// Pre-boot splash finished
    SplashFinished,
    /// Battery interval elapsed
    BatteryTick,
    /// Show the next boot status line
    BootAdvance { epoch: u64 },
    /// Boot animation finished; closes the boot app
    BootFinished { epoch: u64 },
    /// Arm the one-shot "update available" notice
    ScheduleUpdateNotice,
    /// The scheduled update notice is due
    UpdateNoticeDue,

    // ─────────────────────────────────────────────────────────
    // Session Mutators
    // ─────────────────────────────────────────────────────────
    SelectDeviceMode(DeviceMode),
    OpenApp(AppId),
    CloseApp(AppId),
    SetActiveApp(Option<AppId>),
    GoHome,
    ToggleTaskSwitcher,
    ToggleControlCenter,
    ToggleShade,
    ShowAppInfo(AppId),
    HideAppInfo,
    ShowPowerMenu,
    ClosePowerMenu,
    Lock,
    /// PIN already verified by the lock screen
    Unlock,
    PowerOff,
    PowerOn,
    Reboot,
    SetTargetSettingsView(Option<SettingsView>),

    // ─────────────────────────────────────────────────────────
    // Device Mutators
    // ─────────────────────────────────────────────────────────
    SetSettings(DeviceSettings),
    SetCharging(bool),
    /// Open Settings on a specific page
    OpenSettingsAt(SettingsView),

    // ─────────────────────────────────────────────────────────
    // Notification Messages
    // ─────────────────────────────────────────────────────────
    PushNotification(NewNotification),
    DismissNotification(u64),
    ClearNotifications,
    /// Follow a notification's target and close the shade
    ActivateNotification(u64),
}
