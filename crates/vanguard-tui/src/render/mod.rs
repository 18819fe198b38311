//! Main render/view function (View in TEA pattern)


use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;
use vanguard_app::{AppState, Overlay, Screen};

use super::{layout, widgets};
use crate::theme::{palette, styles};

/// Render the complete UI (View function in TEA)
///
/// Pure: reads state, never changes it.
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    // Fill entire terminal with deepest background color
    frame.render_widget(
        Block::default().style(Style::default().bg(palette::DEEPEST_BG)),
        area,
    );

    let screen = state.session.screen();
    match screen {
        Screen::Splash => {
            frame.render_widget(widgets::Splash, area);
            return;
        }
        Screen::ModeSelection => {
            frame.render_widget(widgets::ModeSelection::new(state.ui.mode_cursor), area);
            return;
        }
        _ => {}
    }

    let ctx = state.context();
    let device = layout::device_frame(area, ctx.device_mode());
    frame.render_widget(
        Block::default().style(styles::surface(state.settings.theme)),
        device,
    );

    match screen {
        Screen::PoweredOff => {
            frame.render_widget(
                widgets::PoweredOff::new(state.battery.level(), state.battery.is_charging()),
                device,
            );
            return;
        }
        Screen::Booting => {
            frame.render_widget(widgets::BootScreen::new(&state.boot), device);
            return;
        }
        _ => {}
    }

    let areas = layout::create(device);
    frame.render_widget(widgets::StatusBar::new(ctx), areas.status_bar);
    match screen {
        Screen::Locked => frame.render_widget(
            widgets::LockScreen::new(state.now, &state.pin_pad)
                .notification_count(state.notifications.len()),
            areas.content,
        ),
        Screen::App(id) => frame.render_widget(
            widgets::AppWindow::new(ctx, id).settings_page(state.ui.settings_page),
            areas.content,
        ),
        _ => frame.render_widget(
            widgets::HomeScreen::new(ctx, state.ui.home_cursor),
            areas.content,
        ),
    }
    frame.render_widget(widgets::NavBar::new(screen), areas.nav_bar);

    // Overlays stack bottom-up over the content area
    for overlay in state.session.overlays() {
        match overlay {
            Overlay::TaskSwitcher => frame.render_widget(
                widgets::TaskSwitcher::new(ctx, state.ui.switcher_cursor),
                areas.content,
            ),
            Overlay::Shade => frame.render_widget(
                widgets::Shade::new(ctx, state.ui.shade_cursor),
                areas.content,
            ),
            Overlay::ControlCenter => {
                frame.render_widget(widgets::ControlCenter::new(ctx), areas.content)
            }
            Overlay::AppInfo(id) => {
                frame.render_widget(widgets::AppInfo::new(ctx, id), areas.content)
            }
            Overlay::PowerMenu => frame.render_widget(widgets::PowerMenu, device),
        }
    }
}
