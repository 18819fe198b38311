//! Custom widget components

mod app_info;
mod app_window;
mod boot;
mod control_center;
mod home_screen;
mod lock_screen;
pub mod modal_overlay;
mod mode_selection;
mod nav_bar;
mod power_menu;
mod powered_off;
mod shade;
mod splash;
mod status_bar;
mod task_switcher;

pub use app_info::AppInfo;
pub use app_window::AppWindow;
pub use boot::BootScreen;
pub use control_center::ControlCenter;
pub use home_screen::HomeScreen;
pub use lock_screen::LockScreen;
pub use mode_selection::ModeSelection;
pub use nav_bar::NavBar;
pub use power_menu::PowerMenu;
pub use powered_off::PoweredOff;
pub use shade::Shade;
pub use splash::{Splash, LOGO};
pub use status_bar::StatusBar;
pub use task_switcher::TaskSwitcher;
