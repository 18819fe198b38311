//! Color palette. The device theme (light/dark) only changes the screen
//! surface and its text; chrome colors are shared.

use ratatui::style::Color;

// --- Terminal backdrop around the device frame ---
pub const DEEPEST_BG: Color = Color::Black;

// --- Device surface ---
pub const DARK_SURFACE: Color = Color::Rgb(14, 17, 24);
pub const DARK_TEXT: Color = Color::Rgb(226, 232, 240);
pub const LIGHT_SURFACE: Color = Color::Rgb(226, 232, 240);
pub const LIGHT_TEXT: Color = Color::Rgb(15, 23, 42);

// --- Panels ---
pub const POPUP_BG: Color = Color::Rgb(28, 33, 43);
pub const CARD_BG: Color = Color::Rgb(22, 27, 34);

// --- Borders ---
pub const BORDER_DIM: Color = Color::DarkGray;
pub const BORDER_ACTIVE: Color = Color::Cyan;

// --- Accent ---
pub const ACCENT: Color = Color::Cyan;
pub const CONTRAST_FG: Color = Color::Black;

// --- Text ---
pub const TEXT_PRIMARY: Color = Color::White;
pub const TEXT_SECONDARY: Color = Color::Gray;
pub const TEXT_MUTED: Color = Color::DarkGray;

// --- Status ---
pub const STATUS_GREEN: Color = Color::Green;
pub const STATUS_RED: Color = Color::Red;
pub const STATUS_YELLOW: Color = Color::Yellow;

// --- Effects ---
pub const SHADOW: Color = Color::Black;
