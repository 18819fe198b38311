//! Action handlers: UpdateAction dispatch for timer lifecycles

use tokio::sync::mpsc;
use vanguard_core::prelude::*;

use crate::config::SimulationSettings;
use crate::handler::UpdateAction;
use crate::message::Message;
use crate::timers::{spawn_boot_timers, spawn_once, Timers};

/// Execute an action returned by the update function.
///
/// Runs synchronously before the next message is processed, so a boot
/// instance is always aborted before its replacement starts.
pub fn handle_action(
    action: UpdateAction,
    timers: &mut Timers,
    msg_tx: &mpsc::Sender<Message>,
    sim: &SimulationSettings,
) {
    match action {
        UpdateAction::StartBoot { epoch } => {
            timers.stop_boot();
            debug!("Starting boot sequence (epoch {})", epoch);
            timers.boot = Some(spawn_boot_timers(
                epoch,
                sim.boot_message(),
                sim.boot(),
                msg_tx.clone(),
            ));
        }

        UpdateAction::CancelBoot => {
            timers.stop_boot();
        }

        UpdateAction::ScheduleUpdateNotice => {
            if timers.update_notice.is_some() {
                return;
            }
            timers.update_notice = Some(spawn_once(
                "update_notice",
                sim.update_notice_delay(),
                msg_tx.clone(),
                Message::UpdateNoticeDue,
            ));
        }
    }
}
