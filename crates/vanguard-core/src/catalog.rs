//! Static app catalog
//!
//! Every [`AppId`] maps to exactly one [`AppDescriptor`]. The mapping is an
//! exhaustive match, so adding an identifier without a descriptor fails to
//! compile.

use crate::app_id::AppId;

/// Inclusive simulated RAM range in megabytes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RamRange {
    pub min: u32,
    pub max: u32,
}

impl RamRange {
    pub const fn fixed(mb: u32) -> Self {
        Self { min: mb, max: mb }
    }
}

/// One release note block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChangelogEntry {
    pub version: &'static str,
    pub notes: &'static [&'static str],
}

/// Read-only description of a virtual app
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppDescriptor {
    pub id: AppId,
    pub name: &'static str,
    /// Single glyph used on the home grid and dock
    pub glyph: &'static str,
    pub ram: Option<RamRange>,
    pub storage_kb: Option<u64>,
    pub version: Option<&'static str>,
    /// Newest first
    pub changelog: &'static [ChangelogEntry],
}

impl AppDescriptor {
    pub fn latest_changes(&self) -> Option<&'static ChangelogEntry> {
        self.changelog.first()
    }
}

/// Apps pinned to the dock, left to right
pub const DOCK_APPS: [AppId; 4] = [
    AppId::AiAssistant,
    AppId::Calculator,
    AppId::Notepad,
    AppId::Gallery,
];

const OS8_NOTES: &[&str] =
    &["Upgraded for VanguardOS 8 with performance and stability improvements."];
const OS9_NOTES: &[&str] =
    &["Upgraded for VanguardOS 9 with performance and stability improvements."];
const OS7_NOTES: &[&str] = &["Upgraded for VanguardOS 7 with performance improvements."];
const OS6_NOTES: &[&str] = &["Upgraded for VanguardOS 6 with UI and performance enhancements."];
const OVERHAUL_NOTES: &[&str] =
    &["Complete UI overhaul for a more modern and intuitive experience."];

const fn entry(version: &'static str, notes: &'static [&'static str]) -> ChangelogEntry {
    ChangelogEntry { version, notes }
}

static BOOT: AppDescriptor = AppDescriptor {
    id: AppId::Boot,
    name: "Boot",
    glyph: "*",
    ram: None,
    storage_kb: None,
    version: None,
    changelog: &[],
};

static SETTINGS: AppDescriptor = AppDescriptor {
    id: AppId::Settings,
    name: "Settings",
    glyph: "⚙",
    ram: Some(RamRange::fixed(3)),
    storage_kb: Some(3072),
    version: Some("9"),
    changelog: &[
        entry(
            "9",
            &[
                "Added Performance Stats section for real-time monitoring.",
                "UI optimizations for 60 FPS support.",
            ],
        ),
        entry(
            "8",
            &[
                "Full system integration with VanguardOS 8.",
                "Updated hardware information in About Phone.",
            ],
        ),
        entry(
            "7",
            &[
                "Added Power Saving mode to extend battery life.",
                "Enhanced status bar with new charging and power saving icons.",
            ],
        ),
        entry("6", OS6_NOTES),
        entry("V", OVERHAUL_NOTES),
        entry("4.0", &["Redesigned main interface for a cleaner look."]),
        entry(
            "1.0",
            &["Initial release with theme, wallpaper, and storage management."],
        ),
    ],
};

static GALLERY: AppDescriptor = AppDescriptor {
    id: AppId::Gallery,
    name: "AI Gallery",
    glyph: "▣",
    ram: Some(RamRange::fixed(8)),
    storage_kb: Some(5120),
    version: Some("9"),
    changelog: &[
        entry("9", OS9_NOTES),
        entry("8", OS8_NOTES),
        entry("7", OS7_NOTES),
        entry(
            "6",
            &["Enhanced with AI-powered features for smart search and organization."],
        ),
        entry("V", OVERHAUL_NOTES),
        entry(
            "4.0",
            &["Added a new collection of high-resolution photos."],
        ),
        entry("1.0", &["Initial release with grid view and image viewer."]),
    ],
};

static AI_ASSISTANT: AppDescriptor = AppDescriptor {
    id: AppId::AiAssistant,
    name: "Vanguard AI",
    glyph: "✦",
    ram: Some(RamRange::fixed(14)),
    storage_kb: Some(4096),
    version: Some("9"),
    changelog: &[
        entry("9", OS9_NOTES),
        entry("8", OS8_NOTES),
        entry("7", OS7_NOTES),
        entry("6", OS6_NOTES),
        entry("V", OVERHAUL_NOTES),
        entry(
            "4.0",
            &["Upgraded core AI model for smarter, more contextual responses."],
        ),
        entry("1.0", &["Initial release with Gemini-powered chat."]),
    ],
};

static NOTEPAD: AppDescriptor = AppDescriptor {
    id: AppId::Notepad,
    name: "AI Notes",
    glyph: "✎",
    ram: Some(RamRange::fixed(6)),
    storage_kb: Some(3072),
    version: Some("9"),
    changelog: &[
        entry("9", OS9_NOTES),
        entry("8", OS8_NOTES),
        entry("7", OS7_NOTES),
        entry(
            "6",
            &["Introducing AI summarization and idea generation capabilities."],
        ),
        entry("V", OVERHAUL_NOTES),
        entry(
            "1.0",
            &["Initial release with note-taking and to-do list functionality."],
        ),
    ],
};

static CALCULATOR: AppDescriptor = AppDescriptor {
    id: AppId::Calculator,
    name: "Calculator",
    glyph: "±",
    ram: Some(RamRange::fixed(2)),
    storage_kb: Some(2048),
    version: Some("9"),
    changelog: &[
        entry("9", OS9_NOTES),
        entry("8", OS8_NOTES),
        entry("7", OS7_NOTES),
        entry("6", OS6_NOTES),
        entry("V", OVERHAUL_NOTES),
        entry(
            "1.0",
            &["Initial release with full calculation functionality."],
        ),
    ],
};

static CALENDAR: AppDescriptor = AppDescriptor {
    id: AppId::Calendar,
    name: "Calendar",
    glyph: "▦",
    ram: Some(RamRange::fixed(2)),
    storage_kb: Some(2048),
    version: Some("9"),
    changelog: &[
        entry("9", OS9_NOTES),
        entry("8", OS8_NOTES),
        entry("7", OS7_NOTES),
        entry("6", OS6_NOTES),
        entry("V", OVERHAUL_NOTES),
        entry(
            "1.0",
            &["Initial release with interactive month navigation."],
        ),
    ],
};

static CLOCK: AppDescriptor = AppDescriptor {
    id: AppId::Clock,
    name: "Clock",
    glyph: "◷",
    ram: Some(RamRange::fixed(1)),
    storage_kb: Some(2048),
    version: Some("9"),
    changelog: &[
        entry("9", OS9_NOTES),
        entry("8", OS8_NOTES),
        entry("7", OS7_NOTES),
        entry("6", OS6_NOTES),
        entry("V", OVERHAUL_NOTES),
        entry("4.0", &["Added fully functional Alarm and Timer tabs."]),
        entry(
            "1.0",
            &["Initial release with 12-hour display and interactive tabs."],
        ),
    ],
};

static APP_UPDATES: AppDescriptor = AppDescriptor {
    id: AppId::AppUpdates,
    name: "App Updates",
    glyph: "⇩",
    ram: Some(RamRange::fixed(1)),
    storage_kb: Some(3072),
    version: Some("9"),
    changelog: &[
        entry(
            "9",
            &[
                "System updated to VanguardOS 9.",
                "Added support for 60 FPS display.",
                "New Performance Stats section in Settings for real-time monitoring.",
            ],
        ),
        entry(
            "8",
            &[
                "System updated to VanguardOS 8.",
                "Hardware upgrade: VNAAIG2 model with Snapdragon S2 chipset.",
                "Increased RAM to 80MB and ROM to 144MB.",
                "Battery capacity increased to 700mAh for improved longevity.",
            ],
        ),
        entry("7", &["System updated to VanguardOS 7."]),
        entry("6", OS6_NOTES),
        entry("V", OVERHAUL_NOTES),
        entry("1.0", &["Initial release."]),
    ],
};

/// Look up the descriptor for an identifier
pub fn descriptor(id: AppId) -> &'static AppDescriptor {
    match id {
        AppId::Boot => &BOOT,
        AppId::Settings => &SETTINGS,
        AppId::Gallery => &GALLERY,
        AppId::AiAssistant => &AI_ASSISTANT,
        AppId::Notepad => &NOTEPAD,
        AppId::Calculator => &CALCULATOR,
        AppId::Calendar => &CALENDAR,
        AppId::Clock => &CLOCK,
        AppId::AppUpdates => &APP_UPDATES,
    }
}

/// Descriptors shown on the home grid (everything but boot), in catalog order
pub fn launchable() -> impl Iterator<Item = &'static AppDescriptor> {
    AppId::ALL
        .into_iter()
        .filter(|id| !id.is_boot())
        .map(descriptor)
}
