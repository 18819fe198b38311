//! Message processing
//!
//! Runs a message and its follow-ups through `handler::update`, dispatches
//! the resulting actions, and re-samples simulated RAM whenever the set of
//! open apps changed.

use rand::Rng;
use tokio::sync::mpsc;

use crate::actions::handle_action;
use crate::config::SimulationSettings;
use crate::handler;
use crate::message::Message;
use crate::state::AppState;
use crate::timers::Timers;

/// Process a message through the TEA update function
pub fn process_message<R: Rng + ?Sized>(
    state: &mut AppState,
    message: Message,
    timers: &mut Timers,
    msg_tx: &mpsc::Sender<Message>,
    sim: &SimulationSettings,
    rng: &mut R,
) {
    let mut msg = Some(message);
    while let Some(m) = msg {
        let open_before = state.session.open_apps().to_vec();
        let result = handler::update(state, m);

        if state.session.open_apps() != open_before.as_slice() {
            state.resources.recompute(state.session.open_apps(), rng);
        }

        if let Some(action) = result.action {
            handle_action(action, timers, msg_tx, sim);
        }

        // Continue with follow-up message
        msg = result.message;
    }
}
