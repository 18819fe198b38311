//! Simulated storage accounting
//!
//! Storage never changes at runtime; it is derived from the catalog plus
//! fixed system and "other files" footprints.

use crate::catalog;

/// Device storage capacity
pub const TOTAL_STORAGE_KB: u64 = 144 * 1024;

/// Photos, downloads and similar user files
pub const OTHER_STORAGE_KB: u64 = 45 * 1024;

/// Size of each installed system release, oldest last
pub const SYSTEM_UPDATE_SIZES_MB: [(&str, u64); 9] = [
    ("9", 9),
    ("8", 4),
    ("7", 2),
    ("6", 3),
    ("V", 20),
    ("4.0", 2),
    ("3.0", 10),
    ("2.0", 8),
    ("1.0", 15),
];

/// Breakdown of used storage
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StorageUsage {
    pub apps_kb: u64,
    pub system_kb: u64,
    pub other_kb: u64,
    pub total_kb: u64,
}

impl StorageUsage {
    pub fn used_kb(&self) -> u64 {
        self.apps_kb + self.system_kb + self.other_kb
    }

    pub fn percentage(&self) -> f64 {
        self.used_kb() as f64 / self.total_kb as f64 * 100.0
    }
}

pub fn system_kb() -> u64 {
    SYSTEM_UPDATE_SIZES_MB.iter().map(|(_, mb)| mb).sum::<u64>() * 1024
}

pub fn apps_kb() -> u64 {
    crate::app_id::AppId::ALL
        .into_iter()
        .filter_map(|id| catalog::descriptor(id).storage_kb)
        .sum()
}

/// Current storage usage
pub fn usage() -> StorageUsage {
    StorageUsage {
        apps_kb: apps_kb(),
        system_kb: system_kb(),
        other_kb: OTHER_STORAGE_KB,
        total_kb: TOTAL_STORAGE_KB,
    }
}

/// Format a kilobyte count as `"N.N MB"`
pub fn format_kb(kb: u64) -> String {
    format!("{:.1} MB", kb as f64 / 1024.0)
}
