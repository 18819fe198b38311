//! Owned background timers
//!
//! Every simulator timer is a tokio task that only sends `Message`s into the
//! TEA loop. A `TimerTask` aborts its task on `stop()` and on drop, so a
//! timer never outlives the condition that started it.

use std::future::Future;
use std::time::Duration;

use chrono::Local;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};
use vanguard_core::prelude::*;

use crate::message::Message;

/// Handle to a running timer task
#[derive(Debug)]
pub struct TimerTask {
    name: &'static str,
    handle: Option<JoinHandle<()>>,
}

impl TimerTask {
    pub fn spawn<F>(name: &'static str, future: F) -> Self
    where
        F: Future<Output = ()> + Send + 'static,
    {
        trace!("Starting timer '{}'", name);
        Self {
            name,
            handle: Some(tokio::spawn(future)),
        }
    }

    pub fn is_running(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }

    /// Abort the task. Safe to call more than once.
    pub fn stop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
            trace!("Stopped timer '{}'", self.name);
        }
    }
}

impl Drop for TimerTask {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Send `make_message()` every `period`, first tick one period from now
pub fn spawn_interval<F>(
    name: &'static str,
    period: Duration,
    tx: mpsc::Sender<Message>,
    make_message: F,
) -> TimerTask
where
    F: Fn() -> Message + Send + 'static,
{
    TimerTask::spawn(name, async move {
        let mut ticker = time::interval_at(Instant::now() + period, period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        loop {
            ticker.tick().await;
            if tx.send(make_message()).await.is_err() {
                debug!("Timer '{}' channel closed", name);
                break;
            }
        }
    })
}

/// Send `message` once after `delay`
pub fn spawn_once(
    name: &'static str,
    delay: Duration,
    tx: mpsc::Sender<Message>,
    message: Message,
) -> TimerTask {
    TimerTask::spawn(name, async move {
        time::sleep(delay).await;
        let _ = tx.send(message).await;
    })
}

/// Wall clock, once per second
pub fn spawn_clock_ticker(tx: mpsc::Sender<Message>) -> TimerTask {
    spawn_interval("clock", Duration::from_secs(1), tx, || {
        Message::ClockTick(Local::now())
    })
}

pub fn spawn_battery_ticker(period: Duration, tx: mpsc::Sender<Message>) -> TimerTask {
    spawn_interval("battery", period, tx, || Message::BatteryTick)
}

/// Boot script: a status line every `message_period`, then completion after
/// `total`
pub fn spawn_boot_timers(
    epoch: u64,
    message_period: Duration,
    total: Duration,
    tx: mpsc::Sender<Message>,
) -> TimerTask {
    TimerTask::spawn("boot", async move {
        let finish = time::sleep(total);
        tokio::pin!(finish);
        let mut ticker = time::interval_at(Instant::now() + message_period, message_period);

        loop {
            tokio::select! {
                biased;
                _ = &mut finish => {
                    let _ = tx.send(Message::BootFinished { epoch }).await;
                    break;
                }
                _ = ticker.tick() => {
                    if tx.send(Message::BootAdvance { epoch }).await.is_err() {
                        break;
                    }
                }
            }
        }
    })
}

/// Battery timer configuration; a change means the timer must restart
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatteryTimerKey {
    pub charging: bool,
    pub power_saving: bool,
}

/// All timers owned by the engine
#[derive(Debug, Default)]
pub struct Timers {
    pub clock: Option<TimerTask>,
    pub splash: Option<TimerTask>,
    pub boot: Option<TimerTask>,
    pub update_notice: Option<TimerTask>,
    battery: Option<(BatteryTimerKey, TimerTask)>,
}

impl Timers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn battery_key(&self) -> Option<BatteryTimerKey> {
        self.battery.as_ref().map(|(key, _)| *key)
    }

    /// Make the battery timer match `desired`, restarting it on any change.
    /// `None` means the battery must not tick.
    pub fn reconcile_battery(
        &mut self,
        desired: Option<BatteryTimerKey>,
        time_unit: Duration,
        tx: &mpsc::Sender<Message>,
    ) {
        if self.battery_key() == desired {
            return;
        }

        if let Some((_, mut task)) = self.battery.take() {
            task.stop();
        }

        if let Some(key) = desired {
            let period = crate::battery::tick_period(key.charging, key.power_saving, time_unit);
            debug!("Battery timer every {:?} ({:?})", period, key);
            self.battery = Some((key, spawn_battery_ticker(period, tx.clone())));
        }
    }

    pub fn stop_boot(&mut self) {
        if let Some(mut task) = self.boot.take() {
            task.stop();
        }
    }

    pub fn stop_all(&mut self) {
        for mut task in [
            self.clock.take(),
            self.splash.take(),
            self.boot.take(),
            self.update_notice.take(),
            self.battery.take().map(|(_, task)| task),
        ]
        .into_iter()
        .flatten()
        {
            task.stop();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_spawn_once_fires_after_delay() {
        let (tx, mut rx) = mpsc::channel(8);
        let start = Instant::now();
        let delay = Duration::from_millis(3500);
        let _task = spawn_once("test", delay, tx, Message::SplashFinished);

        let msg = rx.recv().await.unwrap();
        assert!(matches!(msg, Message::SplashFinished));
        assert!(start.elapsed() >= Duration::from_millis(3500));
    }

    #[tokio::test(start_paused = true)]
    async fn test_interval_first_tick_after_one_period() {
        let (tx, mut rx) = mpsc::channel(8);
        let start = Instant::now();
        let _task = spawn_battery_ticker(Duration::from_secs(7), tx);

        rx.recv().await.unwrap();
        assert!(start.elapsed() >= Duration::from_secs(7));
        rx.recv().await.unwrap();
        assert!(start.elapsed() >= Duration::from_secs(14));
    }

    #[tokio::test(start_paused = true)]
    async fn test_stop_cancels_timer() {
        let (tx, mut rx) = mpsc::channel(8);
        let mut task = spawn_battery_ticker(Duration::from_secs(1), tx);
        task.stop();
        assert!(!task.is_running());

        time::sleep(Duration::from_secs(5)).await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_cancels_timer() {
        let (tx, mut rx) = mpsc::channel(8);
        drop(spawn_battery_ticker(Duration::from_secs(1), tx));

        time::sleep(Duration::from_secs(5)).await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_boot_timers_advance_then_finish() {
        let (tx, mut rx) = mpsc::channel(16);
        let _task = spawn_boot_timers(3, Duration::from_secs(1), Duration::from_secs(5), tx);

        let mut advances = 0;
        loop {
            match rx.recv().await.unwrap() {
                Message::BootAdvance { epoch } => {
                    assert_eq!(epoch, 3);
                    advances += 1;
                }
                Message::BootFinished { epoch } => {
                    assert_eq!(epoch, 3);
                    break;
                }
                other => panic!("unexpected message {:?}", other),
            }
        }
        assert!(advances >= 4);
    }

    #[tokio::test(start_paused = true)]
    async fn test_reconcile_battery_restarts_on_change() {
        let (tx, _rx) = mpsc::channel(8);
        let mut timers = Timers::new();
        let draining = BatteryTimerKey {
            charging: false,
            power_saving: false,
        };

        timers.reconcile_battery(Some(draining), Duration::from_secs(1), &tx);
        assert_eq!(timers.battery_key(), Some(draining));

        let charging = BatteryTimerKey {
            charging: true,
            ..draining
        };
        timers.reconcile_battery(Some(charging), Duration::from_secs(1), &tx);
        assert_eq!(timers.battery_key(), Some(charging));

        timers.reconcile_battery(None, Duration::from_secs(1), &tx);
        assert_eq!(timers.battery_key(), None);
    }
}
