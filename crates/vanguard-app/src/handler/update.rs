//! Main update function - handles state transitions (TEA pattern)

use chrono::Local;
use vanguard_core::prelude::*;
use vanguard_core::{AppId, NewNotification, SettingsView};

use crate::battery::BatteryTick;
use crate::message::Message;
use crate::state::{AppState, ShellPhase};

use super::{keys::handle_key, UpdateAction, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.phase = ShellPhase::Quitting;
            UpdateResult::none()
        }

        Message::Key(key) => match handle_key(state, key) {
            Some(msg) => UpdateResult::message(msg),
            None => UpdateResult::none(),
        },

        // ─────────────────────────────────────────────────────────
        // Timers
        // ─────────────────────────────────────────────────────────
        Message::ClockTick(now) => {
            state.now = now;
            UpdateResult::none()
        }

        Message::SplashFinished => {
            state.session.finish_splash();
            match state.preselected_mode.take() {
                Some(mode) => UpdateResult::message(Message::SelectDeviceMode(mode)),
                None => UpdateResult::none(),
            }
        }

        Message::BatteryTick => handle_battery_tick(state),

        Message::BootAdvance { epoch } => {
            if state.boot.is_current(epoch) && state.session.is_booting() {
                state.boot.advance();
            }
            UpdateResult::none()
        }

        Message::BootFinished { epoch } => {
            if state.boot.is_current(epoch) && state.session.is_open(AppId::BOOT) {
                UpdateResult::message(Message::CloseApp(AppId::BOOT))
            } else {
                debug!("Ignoring stale boot completion (epoch {})", epoch);
                UpdateResult::none()
            }
        }

        Message::ScheduleUpdateNotice => {
            if state.update_notice_armed {
                return UpdateResult::none();
            }
            state.update_notice_armed = true;
            UpdateResult::action(UpdateAction::ScheduleUpdateNotice)
        }

        Message::UpdateNoticeDue => {
            UpdateResult::message(Message::PushNotification(NewNotification::system_update()))
        }

        // ─────────────────────────────────────────────────────────
        // Session
        // ─────────────────────────────────────────────────────────
        Message::SelectDeviceMode(mode) => {
            if !state.session.select_device_mode(mode) {
                return UpdateResult::none();
            }
            let epoch = state.boot.begin();
            UpdateResult {
                message: Some(Message::ScheduleUpdateNotice),
                action: Some(UpdateAction::StartBoot { epoch }),
            }
        }

        Message::OpenApp(id) => {
            open_app(state, id);
            UpdateResult::none()
        }

        Message::CloseApp(id) => {
            state.session.close_app(id);
            if id.is_boot() {
                state.pin_pad.clear();
            }
            clamp_switcher_cursor(state);
            UpdateResult::none()
        }

        Message::SetActiveApp(id) => {
            if state.session.set_active_app(id) && id == Some(AppId::Settings) {
                apply_settings_deep_link(state, false);
            }
            UpdateResult::none()
        }

        Message::GoHome => {
            state.session.go_to_home_screen();
            UpdateResult::none()
        }

        Message::ToggleTaskSwitcher => {
            state.session.toggle_task_switcher();
            state.ui.switcher_cursor = 0;
            UpdateResult::none()
        }

        Message::ToggleControlCenter => {
            state.session.toggle_control_center();
            UpdateResult::none()
        }

        Message::ToggleShade => {
            state.session.toggle_shade();
            state.ui.shade_cursor = 0;
            UpdateResult::none()
        }

        Message::ShowAppInfo(id) => {
            state.session.show_app_info(id);
            UpdateResult::none()
        }

        Message::HideAppInfo => {
            state.session.hide_app_info();
            UpdateResult::none()
        }

        Message::ShowPowerMenu => {
            state.session.show_power_menu();
            UpdateResult::none()
        }

        Message::ClosePowerMenu => {
            state.session.close_power_menu();
            UpdateResult::none()
        }

        Message::Lock => {
            state.session.lock();
            state.pin_pad.clear();
            UpdateResult::none()
        }

        Message::Unlock => {
            state.session.unlock();
            UpdateResult::none()
        }

        Message::PowerOff => {
            state.session.power_off();
            state.battery.set_charging(false);
            state.boot.cancel();
            UpdateResult::action(UpdateAction::CancelBoot)
        }

        Message::PowerOn => {
            if !state.session.power_on() {
                return UpdateResult::none();
            }
            state.battery.revive();
            let epoch = state.boot.begin();
            UpdateResult::action(UpdateAction::StartBoot { epoch })
        }

        Message::Reboot => {
            state.session.reboot();
            state.pin_pad.clear();
            let epoch = state.boot.begin();
            UpdateResult::action(UpdateAction::StartBoot { epoch })
        }

        Message::SetTargetSettingsView(view) => {
            state.session.set_target_settings_view(view);
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Device
        // ─────────────────────────────────────────────────────────
        Message::SetSettings(settings) => {
            debug!("Settings updated: {:?}", settings);
            state.settings = settings;
            UpdateResult::none()
        }

        Message::SetCharging(charging) => {
            state.battery.set_charging(charging);
            debug!("Charging: {}", charging);
            UpdateResult::none()
        }

        Message::OpenSettingsAt(view) => {
            state.session.set_target_settings_view(Some(view));
            if state.session.control_center_open() {
                state.session.toggle_control_center();
            }
            UpdateResult::message(Message::OpenApp(AppId::Settings))
        }

        // ─────────────────────────────────────────────────────────
        // Notifications
        // ─────────────────────────────────────────────────────────
        Message::PushNotification(new) => {
            let id = state.notifications.push(new, Local::now());
            debug!("Notification {} posted", id);
            UpdateResult::none()
        }

        Message::DismissNotification(id) => {
            state.notifications.dismiss(id);
            clamp_shade_cursor(state);
            UpdateResult::none()
        }

        Message::ClearNotifications => {
            state.notifications.clear_all();
            state.ui.shade_cursor = 0;
            UpdateResult::none()
        }

        Message::ActivateNotification(id) => {
            let target = state
                .notifications
                .get(id)
                .map(|n| (n.target_app, n.target_view));
            if state.session.shade_open() {
                state.session.toggle_shade();
            }
            match target {
                Some((Some(app), view)) => {
                    if view.is_some() {
                        state.session.set_target_settings_view(view);
                    }
                    UpdateResult::message(Message::OpenApp(app))
                }
                _ => UpdateResult::none(),
            }
        }
    }
}

fn handle_battery_tick(state: &mut AppState) -> UpdateResult {
    if state.session.is_powered_off() || !state.session.mode_selected() {
        return UpdateResult::none();
    }

    match state.battery.tick() {
        BatteryTick::Depleted => {
            info!("Battery depleted, powering off");
            state.session.power_off();
            state.boot.cancel();
            UpdateResult::action(UpdateAction::CancelBoot)
        }
        tick => {
            trace!("Battery tick: {:?}", tick);
            UpdateResult::none()
        }
    }
}

fn open_app(state: &mut AppState, id: AppId) {
    let was_open = state.session.is_open(id);
    state.session.open_app(id);
    if id == AppId::Settings {
        apply_settings_deep_link(state, !was_open);
    }
}

/// Settings just came to the foreground. A pending deep link picks the page;
/// otherwise a fresh launch starts on the main page.
fn apply_settings_deep_link(state: &mut AppState, newly_opened: bool) {
    if let Some(view) = state.session.take_target_settings_view() {
        state.ui.settings_page = view;
    } else if newly_opened {
        state.ui.settings_page = SettingsView::Main;
    }
}

fn clamp_switcher_cursor(state: &mut AppState) {
    let count = state.session.switchable_apps().count();
    state.ui.switcher_cursor = state.ui.switcher_cursor.min(count.saturating_sub(1));
}

fn clamp_shade_cursor(state: &mut AppState) {
    let count = state.notifications.len();
    state.ui.shade_cursor = state.ui.shade_cursor.min(count.saturating_sub(1));
}
