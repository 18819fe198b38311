//! Closed set of virtual application identifiers

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Identifier of one virtual app.
///
/// `Boot` is reserved: it is only ever opened by the shell itself to run the
/// boot sequence and never appears on the home screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AppId {
    Boot,
    Settings,
    Gallery,
    AiAssistant,
    Notepad,
    Calculator,
    Calendar,
    Clock,
    AppUpdates,
}

impl AppId {
    /// The reserved boot identifier
    pub const BOOT: AppId = AppId::Boot;

    /// Every identifier, in catalog order
    pub const ALL: [AppId; 9] = [
        AppId::Boot,
        AppId::Settings,
        AppId::Gallery,
        AppId::AiAssistant,
        AppId::Notepad,
        AppId::Calculator,
        AppId::Calendar,
        AppId::Clock,
        AppId::AppUpdates,
    ];

    /// Stable string key, as used in config files and notifications
    pub fn as_str(&self) -> &'static str {
        match self {
            AppId::Boot => "boot",
            AppId::Settings => "settings",
            AppId::Gallery => "gallery",
            AppId::AiAssistant => "ai_assistant",
            AppId::Notepad => "notepad",
            AppId::Calculator => "calculator",
            AppId::Calendar => "calendar",
            AppId::Clock => "clock",
            AppId::AppUpdates => "app_updates",
        }
    }

    pub fn is_boot(&self) -> bool {
        *self == AppId::BOOT
    }
}

impl fmt::Display for AppId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AppId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AppId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| Error::unknown_app(s))
    }
}
