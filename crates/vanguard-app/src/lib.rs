//! vanguard-app - Session manager, device simulators and orchestration
//!
//! This crate implements the TEA (The Elm Architecture) pattern for the
//! simulated device shell: the `SessionManager` state machine, the battery,
//! resource and boot simulators, configuration loading, and the `Engine`
//! that owns the message channel and every background timer.

pub mod actions;
pub mod battery;
pub mod boot;
pub mod config;
pub mod engine;
pub mod handler;
pub mod input_key;
pub mod lock_screen;
pub mod message;
pub mod process;
pub mod resources;
pub mod session_manager;
pub mod signals;
pub mod state;
pub mod timers;

// Re-export primary types
pub use battery::{BatterySimulator, BatteryTick};
pub use boot::BootSequence;
pub use config::Settings;
pub use engine::Engine;
pub use handler::{UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use lock_screen::{PinOutcome, PinPad};
pub use message::Message;
pub use resources::{BusyLoop, NoLoad, ResourceMonitor, SyntheticLoad};
pub use session_manager::{Overlay, Screen, SessionManager};
pub use state::{AppState, ShellContext, ShellPhase, UiState};
