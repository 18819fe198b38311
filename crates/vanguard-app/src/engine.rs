//! Engine - composition root for the device shell
//!
//! The Engine owns the TEA state, the message channel, every simulator timer
//! and the synthetic load used by the frame sampler. Frontends drive it by
//! draining messages, rendering, and calling `on_frame` once per frame.
//!
//! Must be used from inside a tokio runtime; timers are tokio tasks.

use std::time::Instant;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tokio::sync::mpsc;
use vanguard_core::prelude::*;
use vanguard_core::DeviceMode;

use crate::config::Settings;
use crate::message::Message;
use crate::process;
use crate::resources::{BusyLoop, SyntheticLoad};
use crate::signals;
use crate::state::AppState;
use crate::timers::{self, BatteryTimerKey, Timers};

pub struct Engine {
    /// TEA application state (the Model)
    pub state: AppState,

    /// Sender half of the unified message channel.
    /// Clone this to give to input sources (signal handler, timers).
    pub msg_tx: mpsc::Sender<Message>,

    /// Receiver half of the unified message channel.
    /// The frontend event loop drains messages from here.
    pub msg_rx: mpsc::Receiver<Message>,

    /// Loaded settings (cached from config)
    pub settings: Settings,

    timers: Timers,
    rng: StdRng,
    load: Box<dyn SyntheticLoad>,
    skip_splash: bool,
    started: bool,
}

impl Engine {
    /// Create an Engine with the busy-loop load sized from settings.
    ///
    /// Nothing runs until `start()`.
    pub fn new(settings: Settings) -> Self {
        let load = BusyLoop {
            max_iterations: settings.simulation.max_lag_iterations,
        };
        Self::with_load(settings, Box::new(load))
    }

    pub fn with_load(settings: Settings, load: Box<dyn SyntheticLoad>) -> Self {
        let state = AppState::with_settings(&settings);
        let (msg_tx, msg_rx) = mpsc::channel::<Message>(256);

        Self {
            state,
            msg_tx,
            msg_rx,
            settings,
            timers: Timers::new(),
            rng: StdRng::from_entropy(),
            load,
            skip_splash: false,
            started: false,
        }
    }

    /// Pick `mode` automatically once the splash ends
    pub fn preselect_mode(&mut self, mode: DeviceMode) {
        self.state.preselected_mode = Some(mode);
    }

    /// Finish the splash immediately on `start()`
    pub fn skip_splash(&mut self) {
        self.skip_splash = true;
    }

    /// Replace the RAM sampler's random source
    pub fn seed_rng(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }

    /// Spawn the signal handler, the clock and the splash timer.
    pub fn start(&mut self) {
        if self.started {
            return;
        }
        self.started = true;
        info!("Vanguard shell starting");

        signals::spawn_signal_handler(self.msg_tx.clone());
        self.timers.clock = Some(timers::spawn_clock_ticker(self.msg_tx.clone()));

        if self.skip_splash {
            self.process_message(Message::SplashFinished);
        } else {
            self.timers.splash = Some(timers::spawn_once(
                "splash",
                self.settings.simulation.pre_boot(),
                self.msg_tx.clone(),
                Message::SplashFinished,
            ));
        }

        self.reconcile();
    }

    /// Process a single message through the TEA update cycle, then bring
    /// the battery timer and frame sampler in line with the new state.
    pub fn process_message(&mut self, msg: Message) {
        process::process_message(
            &mut self.state,
            msg,
            &mut self.timers,
            &self.msg_tx,
            &self.settings.simulation,
            &mut self.rng,
        );
        self.reconcile();
    }

    /// Drain and process all pending messages from the channel.
    ///
    /// Returns the number of messages processed.
    pub fn drain_pending_messages(&mut self) -> usize {
        let mut count = 0;
        while let Ok(msg) = self.msg_rx.try_recv() {
            self.process_message(msg);
            count += 1;
        }
        count
    }

    /// Count one rendered frame. Runs the synthetic load under memory
    /// pressure, on the caller's thread.
    pub fn on_frame(&mut self, now: Instant) {
        self.state.resources.on_frame(now, self.load.as_ref());
    }

    pub fn msg_sender(&self) -> mpsc::Sender<Message> {
        self.msg_tx.clone()
    }

    pub fn should_quit(&self) -> bool {
        self.state.should_quit()
    }

    pub fn timers(&self) -> &Timers {
        &self.timers
    }

    /// Stop every timer and the frame sampler.
    pub fn shutdown(&mut self) {
        self.timers.stop_all();
        self.state.resources.stop();
        info!("Vanguard shell stopped");
    }

    /// The battery ticks and frames are sampled only while the device is up
    fn reconcile(&mut self) {
        if !self.started {
            return;
        }

        let session = &self.state.session;
        let device_up = session.mode_selected() && !session.is_powered_off();

        let battery_key = device_up.then(|| BatteryTimerKey {
            charging: self.state.battery.is_charging(),
            power_saving: self.state.settings.power_saving,
        });
        self.timers.reconcile_battery(
            battery_key,
            self.settings.simulation.time_unit(),
            &self.msg_tx,
        );

        if device_up {
            self.state.resources.start(Instant::now());
        } else {
            self.state.resources.stop();
        }
    }
}

impl Drop for Engine {
    fn drop(&mut self) {
        self.timers.stop_all();
    }
}
