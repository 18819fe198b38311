//! Configuration file parsing for the Vanguard shell
//!
//! Supports a single `config.toml`, by default under the user's config
//! directory.

pub mod settings;
pub mod types;

pub use settings::{default_config_path, init_config_file, load_settings};
pub use types::*;
