//! Window for the foregrounded app
//!
//! Leaf apps have no body of their own here; every window shows the app's
//! card (version, memory, storage, latest changes). Settings and App Updates
//! add a page of device state.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};
use vanguard_app::ShellContext;
use vanguard_core::{descriptor, storage, AppDescriptor, AppId, SettingsView, Theme};

use crate::theme::styles;

pub struct AppWindow<'a> {
    ctx: ShellContext<'a>,
    id: AppId,
    settings_page: SettingsView,
}

impl<'a> AppWindow<'a> {
    pub fn new(ctx: ShellContext<'a>, id: AppId) -> Self {
        Self {
            ctx,
            id,
            settings_page: SettingsView::Main,
        }
    }

    pub fn settings_page(mut self, page: SettingsView) -> Self {
        self.settings_page = page;
        self
    }

    fn card(&self, app: &AppDescriptor) -> Vec<Line<'static>> {
        let mut lines = Vec::new();
        if let Some(version) = app.version {
            lines.push(label_value("Version", format!("v{}", version)));
        }
        if let Some(mb) = self.ctx.app_ram_mb(self.id) {
            lines.push(label_value("Memory", format!("{} MB", mb)));
        }
        if let Some(kb) = app.storage_kb {
            lines.push(label_value("Storage", storage::format_kb(kb)));
        }
        if let Some(latest) = app.latest_changes() {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                format!("What's new in v{}", latest.version),
                styles::accent_bold(),
            )));
            for note in latest.notes {
                lines.push(Line::from(format!("• {}", note)));
            }
        }
        lines
    }

    fn settings_detail(&self) -> Vec<Line<'static>> {
        let settings = self.ctx.settings();
        let on_off = |on: bool| (if on { "On" } else { "Off" }).to_string();
        match self.settings_page {
            SettingsView::Main => {
                let usage = storage::usage();
                vec![
                    label_value("Connection", connection_label(&self.ctx)),
                    label_value("Battery", format!("{}%", self.ctx.battery_level())),
                    label_value(
                        "Storage",
                        format!(
                            "{} of {} ({:.0}%)",
                            storage::format_kb(usage.used_kb()),
                            storage::format_kb(usage.total_kb),
                            self.ctx.storage_usage_percent()
                        ),
                    ),
                    label_value(
                        "Memory",
                        format!(
                            "{} of {} MB",
                            self.ctx.used_ram_mb(),
                            self.ctx.total_ram_mb()
                        ),
                    ),
                ]
            }
            SettingsView::Wifi | SettingsView::Network | SettingsView::VBluetooth => {
                let mode = match self.settings_page {
                    SettingsView::Wifi => vanguard_core::InternetMode::Wifi,
                    SettingsView::Network => vanguard_core::InternetMode::Network,
                    _ => vanguard_core::InternetMode::VBluetooth,
                };
                vec![
                    label_value(mode.label(), on_off(settings.internet_mode == mode)),
                    label_value("Airplane mode", on_off(settings.airplane_mode)),
                    label_value("Connected", on_off(self.ctx.is_connected())),
                ]
            }
            SettingsView::Battery => vec![
                label_value("Level", format!("{}%", self.ctx.battery_level())),
                label_value("Charging", on_off(self.ctx.is_charging())),
                label_value("Power saving", on_off(settings.power_saving)),
            ],
            SettingsView::Display => vec![label_value(
                "Dark mode",
                on_off(settings.theme == Theme::Dark),
            )],
        }
    }

    fn render_settings(&self, area: Rect, buf: &mut Buffer) {
        let [menu, detail] =
            Layout::horizontal([Constraint::Length(18), Constraint::Min(0)]).areas(area);

        let items: Vec<Line> = SettingsView::ALL
            .iter()
            .map(|view| {
                let style = if *view == self.settings_page {
                    styles::focused_selected()
                } else {
                    styles::text_secondary()
                };
                Line::from(Span::styled(format!(" {:<16}", view.title()), style))
            })
            .collect();
        Paragraph::new(items).render(menu, buf);

        let mut lines = vec![
            Line::from(Span::styled(self.settings_page.title(), styles::accent_bold())),
            Line::from(""),
        ];
        lines.extend(self.settings_detail());
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .render(detail, buf);
    }

    fn render_updates(&self, app: &AppDescriptor, area: Rect, buf: &mut Buffer) {
        let mut lines = vec![
            Line::from(Span::styled("VanguardOS 9", styles::accent_bold())),
            Line::from(Span::styled("Installed releases", styles::text_muted())),
        ];
        for (release, mb) in storage::SYSTEM_UPDATE_SIZES_MB {
            lines.push(label_value(&format!("VanguardOS {}", release), format!("{} MB", mb)));
        }
        lines.push(Line::from(""));
        lines.extend(self.card(app));
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }
}

impl Widget for AppWindow<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let app = descriptor(self.id);
        let block = styles::glass_block(true).title(Line::from(vec![
            Span::styled(format!(" {} ", app.glyph), styles::accent()),
            Span::styled(format!("{} ", app.name), styles::accent_bold()),
        ]));
        let inner = block.inner(area);
        block.render(area, buf);

        match self.id {
            AppId::Settings => self.render_settings(inner, buf),
            AppId::AppUpdates => self.render_updates(app, inner, buf),
            _ => Paragraph::new(self.card(app))
                .wrap(Wrap { trim: false })
                .render(inner, buf),
        }
    }
}

fn label_value(label: &str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:<14}", label), styles::text_muted()),
        Span::raw(value),
    ])
}

fn connection_label(ctx: &ShellContext<'_>) -> String {
    let settings = ctx.settings();
    if settings.airplane_mode {
        "Airplane mode".to_string()
    } else {
        settings.internet_mode.label().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use vanguard_app::AppState;

    #[test]
    fn test_leaf_app_shows_card() {
        let mut state = AppState::new();
        state.session.open_app(AppId::Calculator);
        let app = descriptor(AppId::Calculator);

        let mut term = TestTerminal::with_size(80, 20);
        let area = term.area();
        term.render_widget(AppWindow::new(state.context(), AppId::Calculator), area);

        assert!(term.buffer_contains(app.name));
        if let Some(version) = app.version {
            assert!(term.buffer_contains(&format!("v{}", version)));
        }
    }

    #[test]
    fn test_settings_shows_selected_page() {
        let mut state = AppState::new();
        state.battery.set_charging(true);
        let mut term = TestTerminal::with_size(80, 20);
        term.render_widget(
            AppWindow::new(state.context(), AppId::Settings).settings_page(SettingsView::Battery),
            term.area(),
        );

        assert!(term.buffer_contains("Power saving"));
        assert!(term.buffer_contains("Charging"));
        assert!(term.buffer_contains("Display"));
    }

    #[test]
    fn test_updates_lists_releases() {
        let state = AppState::new();
        let mut term = TestTerminal::with_size(80, 30);
        let area = term.area();
        term.render_widget(AppWindow::new(state.context(), AppId::AppUpdates), area);
        assert!(term.buffer_contains("VanguardOS V"));
        assert!(term.buffer_contains("20 MB"));
    }
}
