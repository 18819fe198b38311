//! Semantic style builders

use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};
use vanguard_core::{NotificationTint, Theme};

use super::palette;

// --- Device surface ---
pub fn surface(theme: Theme) -> Style {
    match theme {
        Theme::Dark => Style::default()
            .fg(palette::DARK_TEXT)
            .bg(palette::DARK_SURFACE),
        Theme::Light => Style::default()
            .fg(palette::LIGHT_TEXT)
            .bg(palette::LIGHT_SURFACE),
    }
}

// --- Text styles ---
pub fn text_primary() -> Style {
    Style::default().fg(palette::TEXT_PRIMARY)
}

pub fn text_secondary() -> Style {
    Style::default().fg(palette::TEXT_SECONDARY)
}

pub fn text_muted() -> Style {
    Style::default().fg(palette::TEXT_MUTED)
}

// --- Accent styles ---
pub fn accent() -> Style {
    Style::default().fg(palette::ACCENT)
}

pub fn accent_bold() -> Style {
    accent().add_modifier(Modifier::BOLD)
}

// --- Status styles ---
pub fn status_green() -> Style {
    Style::default().fg(palette::STATUS_GREEN)
}

pub fn status_red() -> Style {
    Style::default().fg(palette::STATUS_RED)
}

pub fn status_yellow() -> Style {
    Style::default().fg(palette::STATUS_YELLOW)
}

/// Key hint in the nav bar and overlays
pub fn keybinding() -> Style {
    Style::default().fg(palette::STATUS_YELLOW)
}

/// "Black on Cyan" - used for the selected item in every list and grid
pub fn focused_selected() -> Style {
    Style::default()
        .fg(palette::CONTRAST_FG)
        .bg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

/// Enabled/disabled toggle in the control center
pub fn toggle(on: bool) -> Style {
    if on {
        focused_selected()
    } else {
        Style::default()
            .fg(palette::TEXT_SECONDARY)
            .bg(palette::CARD_BG)
    }
}

pub fn tint(tint: NotificationTint) -> Style {
    let color = match tint {
        NotificationTint::Cyan => palette::ACCENT,
        NotificationTint::Green => palette::STATUS_GREEN,
        NotificationTint::Yellow => palette::STATUS_YELLOW,
        NotificationTint::Red => palette::STATUS_RED,
    };
    Style::default().fg(color)
}

/// Battery level color: red at 20% and below, yellow to 50%
pub fn battery(level: u8, charging: bool) -> Style {
    if charging {
        status_green()
    } else if level <= 20 {
        status_red()
    } else if level <= 50 {
        status_yellow()
    } else {
        text_primary()
    }
}

/// RAM/FPS pressure color
pub fn pressure(percent: f64) -> Style {
    if percent >= 90.0 {
        status_red()
    } else if percent >= 75.0 {
        status_yellow()
    } else {
        status_green()
    }
}

// --- Block builders ---
pub fn glass_block(focused: bool) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if focused {
            Style::default().fg(palette::BORDER_ACTIVE)
        } else {
            Style::default().fg(palette::BORDER_DIM)
        })
}

pub fn modal_block(title: &str) -> Block<'static> {
    Block::default()
        .title(format!(" {} ", title))
        .title_style(accent_bold())
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette::BORDER_ACTIVE))
        .style(
            Style::default()
                .fg(palette::TEXT_PRIMARY)
                .bg(palette::POPUP_BG),
        )
}
