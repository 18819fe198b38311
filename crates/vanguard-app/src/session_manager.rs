//! Session/window manager - sole owner of open apps, focus, overlays,
//! lock and power state

use vanguard_core::prelude::*;
use vanguard_core::{AppId, DeviceMode, SettingsView};

/// Which full-screen layer is showing, bottom of the stack first
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Pre-boot splash animation
    Splash,
    /// Form factor picker shown once per process
    ModeSelection,
    PoweredOff,
    /// Boot animation (boot app open and active)
    Booting,
    Locked,
    Home,
    /// An app is foregrounded
    App(AppId),
}

/// Transient surfaces drawn over the current screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    TaskSwitcher,
    Shade,
    ControlCenter,
    AppInfo(AppId),
    PowerMenu,
}

/// Session state machine
///
/// Invariants upheld by every operation:
/// - `open_apps` never holds duplicates and keeps open order
/// - `active_app`, when set, is a member of `open_apps`
/// - while powered off nothing is open and every overlay is closed
/// - closing the boot app always leaves the session locked
#[derive(Debug, Clone)]
pub struct SessionManager {
    open_apps: Vec<AppId>,
    active_app: Option<AppId>,
    task_switcher_visible: bool,
    control_center_open: bool,
    shade_open: bool,
    power_menu_open: bool,
    viewing_app_info: Option<AppId>,
    is_locked: bool,
    powered_off: bool,
    splash_finished: bool,
    device_mode: Option<DeviceMode>,
    has_unread_update: bool,
    target_settings_view: Option<SettingsView>,
}

impl Default for SessionManager {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionManager {
    pub fn new() -> Self {
        Self {
            open_apps: Vec::new(),
            active_app: None,
            task_switcher_visible: false,
            control_center_open: false,
            shade_open: false,
            power_menu_open: false,
            viewing_app_info: None,
            is_locked: false,
            powered_off: false,
            splash_finished: false,
            device_mode: None,
            has_unread_update: true,
            target_settings_view: None,
        }
    }

    // ─────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────

    pub fn open_apps(&self) -> &[AppId] {
        &self.open_apps
    }

    pub fn is_open(&self, id: AppId) -> bool {
        self.open_apps.contains(&id)
    }

    pub fn active_app(&self) -> Option<AppId> {
        self.active_app
    }

    /// True while the boot app is both open and foregrounded
    pub fn is_booting(&self) -> bool {
        self.active_app == Some(AppId::BOOT) && self.is_open(AppId::BOOT)
    }

    pub fn task_switcher_visible(&self) -> bool {
        self.task_switcher_visible
    }

    pub fn control_center_open(&self) -> bool {
        self.control_center_open
    }

    pub fn shade_open(&self) -> bool {
        self.shade_open
    }

    pub fn power_menu_open(&self) -> bool {
        self.power_menu_open
    }

    pub fn viewing_app_info(&self) -> Option<AppId> {
        self.viewing_app_info
    }

    pub fn is_locked(&self) -> bool {
        self.is_locked
    }

    pub fn is_powered_off(&self) -> bool {
        self.powered_off
    }

    pub fn mode_selected(&self) -> bool {
        self.device_mode.is_some()
    }

    pub fn device_mode(&self) -> Option<DeviceMode> {
        self.device_mode
    }

    pub fn splash_finished(&self) -> bool {
        self.splash_finished
    }

    pub fn has_unread_update(&self) -> bool {
        self.has_unread_update
    }

    pub fn target_settings_view(&self) -> Option<SettingsView> {
        self.target_settings_view
    }

    /// Open apps a user can switch between (boot excluded)
    pub fn switchable_apps(&self) -> impl Iterator<Item = AppId> + '_ {
        self.open_apps.iter().copied().filter(|id| !id.is_boot())
    }

    /// Current full-screen layer
    pub fn screen(&self) -> Screen {
        if !self.splash_finished {
            Screen::Splash
        } else if !self.mode_selected() {
            Screen::ModeSelection
        } else if self.powered_off {
            Screen::PoweredOff
        } else if self.is_booting() {
            Screen::Booting
        } else if self.is_locked {
            Screen::Locked
        } else if let Some(id) = self.active_app {
            Screen::App(id)
        } else {
            Screen::Home
        }
    }

    /// Visible overlays, bottom-most first. The last entry receives input.
    pub fn overlays(&self) -> Vec<Overlay> {
        let mut overlays = Vec::new();
        if self.task_switcher_visible {
            overlays.push(Overlay::TaskSwitcher);
        }
        if self.shade_open {
            overlays.push(Overlay::Shade);
        }
        if self.control_center_open {
            overlays.push(Overlay::ControlCenter);
        }
        if let Some(id) = self.viewing_app_info {
            overlays.push(Overlay::AppInfo(id));
        }
        if self.power_menu_open {
            overlays.push(Overlay::PowerMenu);
        }
        overlays
    }

    // ─────────────────────────────────────────────────────────
    // App lifecycle
    // ─────────────────────────────────────────────────────────

    /// Open (or refocus) an app and hide the task switcher
    pub fn open_app(&mut self, id: AppId) {
        if id == AppId::AppUpdates {
            self.has_unread_update = false;
        }
        if !self.is_open(id) {
            self.open_apps.push(id);
        }
        self.active_app = Some(id);
        self.task_switcher_visible = false;
        debug!("Opened {} (open: {:?})", id, self.open_apps);
    }

    /// Close an app. Closing boot hands off to the lock screen.
    pub fn close_app(&mut self, id: AppId) {
        self.open_apps.retain(|open| *open != id);
        if self.active_app == Some(id) {
            self.active_app = None;
        }
        if self.switchable_apps().next().is_none() {
            self.task_switcher_visible = false;
        }
        if id.is_boot() {
            self.is_locked = true;
            info!("Boot sequence complete, device locked");
        }
        debug!("Closed {} (open: {:?})", id, self.open_apps);
    }

    /// Foreground an already-open app, or clear focus with `None`.
    ///
    /// Returns false (and changes nothing) for apps that are not open.
    pub fn set_active_app(&mut self, id: Option<AppId>) -> bool {
        match id {
            Some(id) if !self.is_open(id) => {
                debug!("Ignoring focus request for closed app {}", id);
                false
            }
            _ => {
                self.active_app = id;
                true
            }
        }
    }

    /// Background everything, keeping apps open
    pub fn go_to_home_screen(&mut self) {
        self.active_app = None;
        self.task_switcher_visible = false;
    }

    // ─────────────────────────────────────────────────────────
    // Overlays
    // ─────────────────────────────────────────────────────────

    pub fn toggle_task_switcher(&mut self) {
        if !self.task_switcher_visible {
            self.active_app = None;
        }
        self.task_switcher_visible = !self.task_switcher_visible;
    }

    pub fn toggle_control_center(&mut self) {
        self.control_center_open = !self.control_center_open;
    }

    pub fn toggle_shade(&mut self) {
        self.shade_open = !self.shade_open;
    }

    pub fn show_app_info(&mut self, id: AppId) {
        self.viewing_app_info = Some(id);
    }

    pub fn hide_app_info(&mut self) {
        self.viewing_app_info = None;
    }

    pub fn show_power_menu(&mut self) {
        self.power_menu_open = true;
    }

    pub fn close_power_menu(&mut self) {
        self.power_menu_open = false;
    }

    // ─────────────────────────────────────────────────────────
    // Lock
    // ─────────────────────────────────────────────────────────

    pub fn lock(&mut self) {
        self.is_locked = true;
        debug!("Device locked");
    }

    /// Callers are trusted to have verified the PIN
    pub fn unlock(&mut self) {
        self.is_locked = false;
        debug!("Device unlocked");
    }

    // ─────────────────────────────────────────────────────────
    // Deep link token
    // ─────────────────────────────────────────────────────────

    pub fn set_target_settings_view(&mut self, view: Option<SettingsView>) {
        self.target_settings_view = view;
    }

    /// Consume the pending deep link so it fires at most once
    pub fn take_target_settings_view(&mut self) -> Option<SettingsView> {
        self.target_settings_view.take()
    }

    // ─────────────────────────────────────────────────────────
    // Power
    // ─────────────────────────────────────────────────────────

    pub fn finish_splash(&mut self) {
        self.splash_finished = true;
    }

    /// Pick the form factor and start the first boot.
    ///
    /// Only the first call has any effect; returns whether it applied.
    pub fn select_device_mode(&mut self, mode: DeviceMode) -> bool {
        if self.mode_selected() {
            debug!("Device mode already selected, ignoring {}", mode);
            return false;
        }
        self.device_mode = Some(mode);
        self.begin_boot();
        info!("Device mode selected: {}", mode);
        true
    }

    pub fn power_off(&mut self) {
        self.reset_system_state();
        self.powered_off = true;
        info!("Device powered off");
    }

    /// Leave the powered-off state and boot. Returns false if already on.
    ///
    /// The minimum-charge rule lives with the battery simulator; the caller
    /// applies it alongside this.
    pub fn power_on(&mut self) -> bool {
        if !self.powered_off {
            return false;
        }
        self.powered_off = false;
        self.begin_boot();
        info!("Device powered on");
        true
    }

    /// Reset every app and overlay and go straight back into boot
    pub fn reboot(&mut self) {
        self.reset_system_state();
        self.powered_off = false;
        self.begin_boot();
        info!("Device rebooting");
    }

    fn begin_boot(&mut self) {
        self.open_apps = vec![AppId::BOOT];
        self.active_app = Some(AppId::BOOT);
    }

    fn reset_system_state(&mut self) {
        self.open_apps.clear();
        self.active_app = None;
        self.task_switcher_visible = false;
        self.control_center_open = false;
        self.shade_open = false;
        self.power_menu_open = false;
        self.viewing_app_info = None;
        self.is_locked = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn running() -> SessionManager {
        let mut s = SessionManager::new();
        s.finish_splash();
        s.select_device_mode(DeviceMode::Handheld);
        s.close_app(AppId::BOOT);
        s.unlock();
        s
    }

    fn assert_invariants(s: &SessionManager) {
        let mut seen = s.open_apps().to_vec();
        seen.sort();
        seen.dedup();
        assert_eq!(seen.len(), s.open_apps().len(), "duplicate open apps");
        if let Some(active) = s.active_app() {
            assert!(s.is_open(active), "active app {active} not open");
        }
        if s.is_powered_off() {
            assert!(s.open_apps().is_empty());
            assert!(s.active_app().is_none());
            assert!(s.overlays().is_empty());
        }
    }

    #[test]
    fn test_open_close_scenario() {
        let mut s = running();
        assert!(s.open_apps().is_empty());

        s.open_app(AppId::Calculator);
        assert_eq!(s.open_apps(), &[AppId::Calculator]);
        assert_eq!(s.active_app(), Some(AppId::Calculator));

        s.open_app(AppId::Gallery);
        assert_eq!(s.open_apps(), &[AppId::Calculator, AppId::Gallery]);
        assert_eq!(s.active_app(), Some(AppId::Gallery));

        s.close_app(AppId::Calculator);
        assert_eq!(s.open_apps(), &[AppId::Gallery]);
        assert_eq!(s.active_app(), Some(AppId::Gallery));
        assert_invariants(&s);
    }

    #[test]
    fn test_open_app_is_idempotent_and_refocuses() {
        let mut s = running();
        s.open_app(AppId::Clock);
        s.open_app(AppId::Notepad);
        s.open_app(AppId::Clock);
        assert_eq!(s.open_apps(), &[AppId::Clock, AppId::Notepad]);
        assert_eq!(s.active_app(), Some(AppId::Clock));
        assert_invariants(&s);
    }

    #[test]
    fn test_open_app_hides_task_switcher() {
        let mut s = running();
        s.open_app(AppId::Clock);
        s.toggle_task_switcher();
        assert!(s.task_switcher_visible());
        s.open_app(AppId::Clock);
        assert!(!s.task_switcher_visible());
    }

    #[test]
    fn test_opening_updates_clears_unread_flag() {
        let mut s = running();
        assert!(s.has_unread_update());
        s.open_app(AppId::Calendar);
        assert!(s.has_unread_update());
        s.open_app(AppId::AppUpdates);
        assert!(!s.has_unread_update());
    }

    #[test]
    fn test_close_active_clears_focus() {
        let mut s = running();
        s.open_app(AppId::Settings);
        s.close_app(AppId::Settings);
        assert_eq!(s.active_app(), None);
        assert_invariants(&s);
    }

    #[test]
    fn test_close_last_app_hides_task_switcher() {
        let mut s = running();
        s.open_app(AppId::Settings);
        s.toggle_task_switcher();
        s.close_app(AppId::Settings);
        assert!(!s.task_switcher_visible());
    }

    #[test]
    fn test_close_keeps_switcher_while_apps_remain() {
        let mut s = running();
        s.open_app(AppId::Settings);
        s.open_app(AppId::Clock);
        s.toggle_task_switcher();
        s.close_app(AppId::Settings);
        assert!(s.task_switcher_visible());
    }

    #[test]
    fn test_close_boot_always_locks() {
        let mut s = SessionManager::new();
        s.finish_splash();
        s.select_device_mode(DeviceMode::Laptop);
        assert!(s.is_booting());
        assert!(!s.is_locked());

        s.close_app(AppId::BOOT);
        assert!(s.open_apps().is_empty());
        assert_eq!(s.active_app(), None);
        assert!(s.is_locked());

        s.close_app(AppId::BOOT);
        assert!(s.is_locked());
    }

    #[test]
    fn test_closing_unopened_app_is_noop() {
        let mut s = running();
        s.open_app(AppId::Clock);
        s.close_app(AppId::Gallery);
        assert_eq!(s.open_apps(), &[AppId::Clock]);
        assert_eq!(s.active_app(), Some(AppId::Clock));
    }

    #[test]
    fn test_go_home_keeps_apps_open() {
        let mut s = running();
        s.open_app(AppId::Clock);
        s.go_to_home_screen();
        assert_eq!(s.open_apps(), &[AppId::Clock]);
        assert_eq!(s.active_app(), None);
        assert_eq!(s.screen(), Screen::Home);
    }

    #[test]
    fn test_toggle_task_switcher_clears_focus_when_opening() {
        let mut s = running();
        s.open_app(AppId::Clock);
        s.toggle_task_switcher();
        assert!(s.task_switcher_visible());
        assert_eq!(s.active_app(), None);

        s.set_active_app(Some(AppId::Clock));
        s.toggle_task_switcher();
        assert!(!s.task_switcher_visible());
        assert_eq!(s.active_app(), Some(AppId::Clock));
    }

    #[test]
    fn test_set_active_app_rejects_closed_apps() {
        let mut s = running();
        s.open_app(AppId::Clock);
        assert!(!s.set_active_app(Some(AppId::Gallery)));
        assert_eq!(s.active_app(), Some(AppId::Clock));
        assert!(s.set_active_app(None));
        assert_eq!(s.active_app(), None);
    }

    #[test]
    fn test_power_off_resets_everything() {
        let mut s = running();
        s.open_app(AppId::Clock);
        s.open_app(AppId::Notepad);
        s.toggle_shade();
        s.toggle_control_center();
        s.show_app_info(AppId::Clock);
        s.show_power_menu();
        s.toggle_task_switcher();

        s.power_off();
        assert!(s.is_powered_off());
        assert!(!s.is_locked());
        assert_eq!(s.screen(), Screen::PoweredOff);
        assert_invariants(&s);
    }

    #[test]
    fn test_power_on_enters_boot() {
        let mut s = running();
        s.power_off();
        assert!(s.power_on());
        assert!(!s.is_powered_off());
        assert_eq!(s.open_apps(), &[AppId::BOOT]);
        assert_eq!(s.active_app(), Some(AppId::BOOT));
        assert_eq!(s.screen(), Screen::Booting);
    }

    #[test]
    fn test_power_on_when_running_is_noop() {
        let mut s = running();
        s.open_app(AppId::Clock);
        assert!(!s.power_on());
        assert_eq!(s.open_apps(), &[AppId::Clock]);
    }

    #[test]
    fn test_reboot_goes_straight_to_boot() {
        let mut s = running();
        s.open_app(AppId::Clock);
        s.show_power_menu();
        s.reboot();
        assert!(!s.is_powered_off());
        assert!(!s.power_menu_open());
        assert_eq!(s.open_apps(), &[AppId::BOOT]);
        assert_eq!(s.screen(), Screen::Booting);
        assert_invariants(&s);
    }

    #[test]
    fn test_select_device_mode_only_once() {
        let mut s = SessionManager::new();
        s.finish_splash();
        assert_eq!(s.screen(), Screen::ModeSelection);
        assert!(s.select_device_mode(DeviceMode::Laptop));
        assert!(s.is_booting());
        assert!(!s.select_device_mode(DeviceMode::Handheld));
        assert_eq!(s.device_mode(), Some(DeviceMode::Laptop));
    }

    #[test]
    fn test_screen_stack_order() {
        let mut s = SessionManager::new();
        assert_eq!(s.screen(), Screen::Splash);
        s.finish_splash();
        assert_eq!(s.screen(), Screen::ModeSelection);
        s.select_device_mode(DeviceMode::Handheld);
        assert_eq!(s.screen(), Screen::Booting);
        s.close_app(AppId::BOOT);
        assert_eq!(s.screen(), Screen::Locked);
        s.unlock();
        assert_eq!(s.screen(), Screen::Home);
        s.open_app(AppId::Gallery);
        assert_eq!(s.screen(), Screen::App(AppId::Gallery));
        s.lock();
        assert_eq!(s.screen(), Screen::Locked);
    }

    #[test]
    fn test_overlays_order() {
        let mut s = running();
        s.toggle_shade();
        s.show_power_menu();
        s.toggle_task_switcher();
        assert_eq!(
            s.overlays(),
            vec![Overlay::TaskSwitcher, Overlay::Shade, Overlay::PowerMenu]
        );
    }

    #[test]
    fn test_target_settings_view_is_one_shot() {
        let mut s = running();
        s.set_target_settings_view(Some(SettingsView::Battery));
        assert_eq!(s.take_target_settings_view(), Some(SettingsView::Battery));
        assert_eq!(s.take_target_settings_view(), None);
    }

    #[test]
    fn test_random_sequences_hold_invariants() {
        use rand::rngs::StdRng;
        use rand::{Rng, SeedableRng};

        let mut rng = StdRng::seed_from_u64(7);
        let mut s = running();
        for _ in 0..500 {
            let id = AppId::ALL[rng.gen_range(0..AppId::ALL.len())];
            match rng.gen_range(0..6) {
                0 | 1 => s.open_app(id),
                2 => s.close_app(id),
                3 => s.toggle_task_switcher(),
                4 => {
                    s.set_active_app(Some(id));
                }
                _ => s.go_to_home_screen(),
            }
            assert_invariants(&s);
        }
    }
}
