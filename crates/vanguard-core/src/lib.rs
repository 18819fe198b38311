//! # vanguard-core - Core Domain Types
//!
//! Foundation crate for the Vanguard device shell. Provides the app catalog,
//! device settings, notifications, clock formatting, storage accounting,
//! error handling and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, chrono, thiserror, toml, tracing).
//!
//! ## Public API
//!
//! ### Apps (`app_id`, `catalog`)
//! - [`AppId`] - Closed set of virtual app identifiers, including the reserved boot id
//! - [`AppDescriptor`] - Static catalog entry (name, RAM range, storage, changelog)
//! - [`descriptor()`], [`launchable()`] - Exhaustive catalog lookups
//!
//! ### Device (`settings`, `storage`)
//! - [`DeviceSettings`] - Theme, connectivity, power saving and form factor
//! - [`SettingsView`] - Deep-link targets inside the Settings app
//! - [`storage::usage()`] - Simulated storage breakdown
//!
//! ### Notifications (`notification`)
//! - [`NotificationCenter`] - Newest-first list with dismissal and clear-all
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! ```rust
//! use vanguard_core::prelude::*;
//! ```

pub mod app_id;
pub mod catalog;
pub mod clock;
pub mod error;
pub mod logging;
pub mod notification;
pub mod settings;
pub mod storage;

/// Prelude for common imports used throughout all Vanguard crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

pub use app_id::AppId;
pub use catalog::{descriptor, launchable, AppDescriptor, ChangelogEntry, RamRange, DOCK_APPS};
pub use error::{Error, Result, ResultExt};
pub use notification::{NewNotification, Notification, NotificationCenter, NotificationTint};
pub use settings::{DeviceMode, DeviceSettings, InternetMode, SettingsView, Theme};
pub use storage::StorageUsage;
