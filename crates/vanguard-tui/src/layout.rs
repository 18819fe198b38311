//! Screen layout definitions for the TUI
//!
//! The device frame depends on the form factor: a handheld is a narrow
//! portrait column centered in the terminal, a laptop uses the full width.

use ratatui::layout::{Constraint, Layout, Rect};
use vanguard_core::DeviceMode;

/// Width of the handheld frame, border included
pub const HANDHELD_WIDTH: u16 = 48;

/// Areas of an unlocked device screen
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Time, connectivity, FPS/RAM and battery
    pub status_bar: Rect,

    /// Home grid or the active app window
    pub content: Rect,

    /// Key hints for the current screen
    pub nav_bar: Rect,
}

/// The rectangle the device occupies inside the terminal
pub fn device_frame(area: Rect, mode: DeviceMode) -> Rect {
    match mode {
        DeviceMode::Laptop => area,
        DeviceMode::Handheld => {
            let width = HANDHELD_WIDTH.min(area.width);
            let x = area.x + (area.width - width) / 2;
            Rect::new(x, area.y, width, area.height)
        }
    }
}

/// Split the device frame into status bar, content and nav bar
pub fn create(frame: Rect) -> ScreenAreas {
    let chunks = Layout::vertical([
        Constraint::Length(1), // Status bar
        Constraint::Min(3),    // Content
        Constraint::Length(1), // Nav bar
    ])
    .split(frame);

    ScreenAreas {
        status_bar: chunks[0],
        content: chunks[1],
        nav_bar: chunks[2],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_laptop_uses_full_area() {
        let area = Rect::new(0, 0, 120, 30);
        assert_eq!(device_frame(area, DeviceMode::Laptop), area);
    }

    #[test]
    fn test_handheld_is_centered_column() {
        let area = Rect::new(0, 0, 120, 30);
        let frame = device_frame(area, DeviceMode::Handheld);
        assert_eq!(frame, Rect::new(36, 0, 48, 30));
    }

    #[test]
    fn test_handheld_clamps_to_narrow_terminal() {
        let area = Rect::new(0, 0, 30, 20);
        assert_eq!(device_frame(area, DeviceMode::Handheld), area);
    }

    #[test]
    fn test_create_layout() {
        let areas = create(Rect::new(0, 0, 80, 24));
        assert_eq!(areas.status_bar.height, 1);
        assert_eq!(areas.content.height, 22);
        assert_eq!(areas.content.y, 1);
        assert_eq!(areas.nav_bar.y, 23);
    }
}
