//! Key event handlers per screen and overlay

use vanguard_core::{launchable, AppId, DeviceMode, InternetMode, SettingsView};

use crate::input_key::InputKey;
use crate::lock_screen::PinOutcome;
use crate::message::Message;
use crate::session_manager::{Overlay, Screen};
use crate::state::AppState;

/// Home grid width in tiles
pub const HOME_COLUMNS: usize = 4;

const DEVICE_MODES: [DeviceMode; 2] = [DeviceMode::Handheld, DeviceMode::Laptop];

/// Convert key events to messages based on the current screen.
///
/// Cursor movement is applied to UI state directly; anything touching the
/// session goes out as a message.
pub fn handle_key(state: &mut AppState, key: InputKey) -> Option<Message> {
    if key == InputKey::CharCtrl('c') {
        return Some(Message::Quit);
    }

    let screen = state.session.screen();
    if key == InputKey::Char('q') && screen != Screen::Locked {
        return Some(Message::Quit);
    }

    if matches!(screen, Screen::Locked | Screen::Home | Screen::App(_)) {
        if let Some(top) = state.session.overlays().last().copied() {
            return handle_overlay_key(state, top, key);
        }
    }

    match screen {
        Screen::Splash => match key {
            InputKey::Enter | InputKey::Char(' ') => Some(Message::SplashFinished),
            _ => None,
        },
        Screen::ModeSelection => handle_mode_selection_key(state, key),
        Screen::PoweredOff => match key {
            InputKey::Enter | InputKey::Char('p') => Some(Message::PowerOn),
            InputKey::Char('c') => Some(Message::SetCharging(!state.battery.is_charging())),
            _ => None,
        },
        Screen::Booting => None,
        Screen::Locked => handle_lock_key(state, key),
        Screen::Home => handle_home_key(state, key),
        Screen::App(id) => handle_app_key(state, id, key),
    }
}

fn handle_overlay_key(state: &mut AppState, overlay: Overlay, key: InputKey) -> Option<Message> {
    match overlay {
        Overlay::TaskSwitcher => handle_task_switcher_key(state, key),
        Overlay::Shade => handle_shade_key(state, key),
        Overlay::ControlCenter => handle_control_center_key(state, key),
        Overlay::AppInfo(_) => match key {
            InputKey::Esc | InputKey::Char('i') => Some(Message::HideAppInfo),
            _ => None,
        },
        Overlay::PowerMenu => match key {
            InputKey::Char('o') => Some(Message::PowerOff),
            InputKey::Char('r') => Some(Message::Reboot),
            InputKey::Esc => Some(Message::ClosePowerMenu),
            _ => None,
        },
    }
}

fn handle_mode_selection_key(state: &mut AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('1') | InputKey::Char('h') => {
            Some(Message::SelectDeviceMode(DeviceMode::Handheld))
        }
        InputKey::Char('2') | InputKey::Char('l') => {
            Some(Message::SelectDeviceMode(DeviceMode::Laptop))
        }
        InputKey::Left | InputKey::Up => {
            state.ui.mode_cursor = 0;
            None
        }
        InputKey::Right | InputKey::Down => {
            state.ui.mode_cursor = 1;
            None
        }
        InputKey::Enter => DEVICE_MODES
            .get(state.ui.mode_cursor)
            .map(|mode| Message::SelectDeviceMode(*mode)),
        _ => None,
    }
}

fn handle_lock_key(state: &mut AppState, key: InputKey) -> Option<Message> {
    if let Some(digit) = key.digit() {
        return match state.pin_pad.push_digit(digit) {
            PinOutcome::Accepted => Some(Message::Unlock),
            PinOutcome::Rejected | PinOutcome::Pending => None,
        };
    }
    match key {
        InputKey::Backspace => {
            state.pin_pad.backspace();
            None
        }
        InputKey::Char('P') => Some(Message::ShowPowerMenu),
        _ => None,
    }
}

/// Shortcuts shared by the home screen and app windows
fn handle_chrome_key(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('t') => Some(Message::ToggleTaskSwitcher),
        InputKey::Char('c') => Some(Message::ToggleControlCenter),
        InputKey::Char('n') => Some(Message::ToggleShade),
        InputKey::Char('L') => Some(Message::Lock),
        InputKey::Char('P') => Some(Message::ShowPowerMenu),
        _ => None,
    }
}

fn handle_home_key(state: &mut AppState, key: InputKey) -> Option<Message> {
    let count = launchable().count();
    let cursor = state.ui.home_cursor;
    match key {
        InputKey::Left => {
            state.ui.home_cursor = cursor.saturating_sub(1);
            None
        }
        InputKey::Right => {
            state.ui.home_cursor = (cursor + 1).min(count - 1);
            None
        }
        InputKey::Up => {
            state.ui.home_cursor = cursor.saturating_sub(HOME_COLUMNS);
            None
        }
        InputKey::Down => {
            if cursor + HOME_COLUMNS < count {
                state.ui.home_cursor = cursor + HOME_COLUMNS;
            }
            None
        }
        InputKey::Enter => selected_home_app(state).map(Message::OpenApp),
        InputKey::Char('i') => selected_home_app(state).map(Message::ShowAppInfo),
        _ => handle_chrome_key(key),
    }
}

pub(crate) fn selected_home_app(state: &AppState) -> Option<AppId> {
    launchable().nth(state.ui.home_cursor).map(|d| d.id)
}

fn handle_app_key(state: &mut AppState, id: AppId, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Esc | InputKey::Char('h') => Some(Message::GoHome),
        InputKey::Char('x') => Some(Message::CloseApp(id)),
        InputKey::Up if id == AppId::Settings => {
            state.ui.settings_page = state.ui.settings_page.prev();
            None
        }
        InputKey::Down if id == AppId::Settings => {
            state.ui.settings_page = state.ui.settings_page.next();
            None
        }
        _ => handle_chrome_key(key),
    }
}

fn handle_task_switcher_key(state: &mut AppState, key: InputKey) -> Option<Message> {
    let cards: Vec<AppId> = state.session.switchable_apps().collect();
    let selected = cards.get(state.ui.switcher_cursor).copied();
    match key {
        InputKey::Left => {
            state.ui.switcher_cursor = state.ui.switcher_cursor.saturating_sub(1);
            None
        }
        InputKey::Right => {
            if state.ui.switcher_cursor + 1 < cards.len() {
                state.ui.switcher_cursor += 1;
            }
            None
        }
        InputKey::Enter => selected.map(Message::OpenApp),
        InputKey::Char('x') | InputKey::Delete => selected.map(Message::CloseApp),
        InputKey::Esc | InputKey::Char('t') => Some(Message::ToggleTaskSwitcher),
        _ => None,
    }
}

fn handle_shade_key(state: &mut AppState, key: InputKey) -> Option<Message> {
    let count = state.notifications.len();
    let selected = state
        .notifications
        .items()
        .get(state.ui.shade_cursor)
        .map(|n| n.id);
    match key {
        InputKey::Up => {
            state.ui.shade_cursor = state.ui.shade_cursor.saturating_sub(1);
            None
        }
        InputKey::Down => {
            if state.ui.shade_cursor + 1 < count {
                state.ui.shade_cursor += 1;
            }
            None
        }
        InputKey::Enter => selected.map(Message::ActivateNotification),
        InputKey::Char('d') => selected.map(Message::DismissNotification),
        InputKey::Char('C') => Some(Message::ClearNotifications),
        InputKey::Esc | InputKey::Char('n') => Some(Message::ToggleShade),
        _ => None,
    }
}

fn handle_control_center_key(state: &mut AppState, key: InputKey) -> Option<Message> {
    let mut settings = state.settings;
    match key {
        InputKey::Char('w') => settings.toggle_internet_mode(InternetMode::Wifi),
        InputKey::Char('m') => settings.toggle_internet_mode(InternetMode::Network),
        InputKey::Char('b') => settings.toggle_internet_mode(InternetMode::VBluetooth),
        InputKey::Char('a') => settings.airplane_mode = !settings.airplane_mode,
        InputKey::Char('s') => settings.power_saving = !settings.power_saving,
        InputKey::Char('d') => settings.theme = settings.theme.toggled(),
        InputKey::Char('z') => return Some(Message::SetCharging(!state.battery.is_charging())),
        InputKey::Char('W') => return Some(Message::OpenSettingsAt(SettingsView::Wifi)),
        InputKey::Char('M') => return Some(Message::OpenSettingsAt(SettingsView::Network)),
        InputKey::Char('B') => return Some(Message::OpenSettingsAt(SettingsView::VBluetooth)),
        InputKey::Char('S') => return Some(Message::OpenSettingsAt(SettingsView::Battery)),
        InputKey::Char('D') => return Some(Message::OpenSettingsAt(SettingsView::Display)),
        InputKey::Esc | InputKey::Char('c') => return Some(Message::ToggleControlCenter),
        _ => return None,
    }
    Some(Message::SetSettings(settings))
}
