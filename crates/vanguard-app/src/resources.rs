//! Simulated RAM and frame rate
//!
//! RAM is re-sampled every time the set of open apps changes. Frame rate is
//! measured from real render frames; once simulated RAM pressure crosses
//! 90% the frame callback performs synthetic CPU work first, so the measured
//! rate actually drops.

use std::time::{Duration, Instant};

use rand::Rng;
use vanguard_core::prelude::*;
use vanguard_core::{descriptor, AppId};

/// RAM usage ratio at which synthetic load begins
pub const LAG_THRESHOLD_PERCENT: f64 = 90.0;

const FPS_SAMPLE_WINDOW: Duration = Duration::from_millis(1000);

/// Deliberate CPU work used to degrade the frame rate.
///
/// `severity` runs from 0.0 (no extra work) to 1.0 (maximum work).
#[cfg_attr(test, mockall::automock)]
pub trait SyntheticLoad: Send {
    fn run(&self, severity: f64);
}

/// Busy loop whose iteration count scales with severity
#[derive(Debug, Clone, Copy)]
pub struct BusyLoop {
    pub max_iterations: u64,
}

impl SyntheticLoad for BusyLoop {
    fn run(&self, severity: f64) {
        let iterations = (severity.clamp(0.0, 1.0) * self.max_iterations as f64) as u64;
        let mut acc = 0u64;
        for i in 0..iterations {
            acc = std::hint::black_box(acc.wrapping_add(i));
        }
        std::hint::black_box(acc);
    }
}

/// Load that returns immediately
#[derive(Debug, Clone, Copy, Default)]
pub struct NoLoad;

impl SyntheticLoad for NoLoad {
    fn run(&self, _severity: f64) {}
}

#[derive(Debug, Clone)]
pub struct ResourceMonitor {
    total_ram_mb: u32,
    base_ram_mb: u32,
    /// Per-app draw, in open order; only apps declaring a RAM range
    per_app_ram_mb: Vec<(AppId, u32)>,
    used_ram_mb: u32,
    fps: u32,
    frame_count: u32,
    last_sample: Instant,
    running: bool,
}

impl ResourceMonitor {
    pub fn new(total_ram_mb: u32, base_ram_mb: u32) -> Self {
        Self {
            total_ram_mb,
            base_ram_mb,
            per_app_ram_mb: Vec::new(),
            used_ram_mb: base_ram_mb.min(total_ram_mb),
            fps: 0,
            frame_count: 0,
            last_sample: Instant::now(),
            running: false,
        }
    }

    pub fn total_ram_mb(&self) -> u32 {
        self.total_ram_mb
    }

    pub fn used_ram_mb(&self) -> u32 {
        self.used_ram_mb
    }

    pub fn per_app_ram_mb(&self) -> &[(AppId, u32)] {
        &self.per_app_ram_mb
    }

    pub fn app_ram_mb(&self, id: AppId) -> Option<u32> {
        self.per_app_ram_mb
            .iter()
            .find(|(app, _)| *app == id)
            .map(|(_, mb)| *mb)
    }

    pub fn fps(&self) -> u32 {
        self.fps
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn ram_usage_percent(&self) -> f64 {
        if self.total_ram_mb == 0 {
            return 0.0;
        }
        self.used_ram_mb as f64 / self.total_ram_mb as f64 * 100.0
    }

    /// Severity of synthetic load for the current RAM pressure, if any
    pub fn lag_severity(&self) -> Option<f64> {
        let percent = self.ram_usage_percent();
        (percent >= LAG_THRESHOLD_PERCENT)
            .then(|| ((percent - LAG_THRESHOLD_PERCENT) / (100.0 - LAG_THRESHOLD_PERCENT)).min(1.0))
    }

    /// Draw a fresh RAM figure for every open app that declares a range
    pub fn recompute<R: Rng + ?Sized>(&mut self, open_apps: &[AppId], rng: &mut R) {
        self.per_app_ram_mb = open_apps
            .iter()
            .filter_map(|id| {
                descriptor(*id)
                    .ram
                    .map(|range| (*id, rng.gen_range(range.min..=range.max)))
            })
            .collect();

        let apps: u32 = self.per_app_ram_mb.iter().map(|(_, mb)| mb).sum();
        self.used_ram_mb = (self.base_ram_mb + apps).min(self.total_ram_mb);
        debug!(
            "RAM recomputed: {}MB / {}MB ({} apps)",
            self.used_ram_mb,
            self.total_ram_mb,
            self.per_app_ram_mb.len()
        );
    }

    pub fn start(&mut self, now: Instant) {
        if self.running {
            return;
        }
        self.running = true;
        self.frame_count = 0;
        self.last_sample = now;
        debug!("Frame sampler started");
    }

    pub fn stop(&mut self) {
        if !self.running {
            return;
        }
        self.running = false;
        self.frame_count = 0;
        self.fps = 0;
        debug!("Frame sampler stopped");
    }

    /// Count one rendered frame. Runs the synthetic load first under
    /// memory pressure.
    pub fn on_frame(&mut self, now: Instant, load: &dyn SyntheticLoad) {
        if !self.running {
            return;
        }
        if let Some(severity) = self.lag_severity() {
            load.run(severity);
        }

        self.frame_count += 1;
        let elapsed = now.saturating_duration_since(self.last_sample);
        if elapsed >= FPS_SAMPLE_WINDOW {
            self.fps =
                (self.frame_count as f64 * 1000.0 / elapsed.as_millis() as f64).round() as u32;
            self.frame_count = 0;
            self.last_sample = now;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn monitor() -> ResourceMonitor {
        ResourceMonitor::new(80, 50)
    }

    #[test]
    fn test_idle_uses_baseline() {
        let m = monitor();
        assert_eq!(m.used_ram_mb(), 50);
        assert!(m.per_app_ram_mb().is_empty());
    }

    #[test]
    fn test_recompute_sums_open_apps() {
        let mut m = monitor();
        let mut rng = StdRng::seed_from_u64(1);
        m.recompute(&[AppId::Clock, AppId::Notepad], &mut rng);
        assert_eq!(m.used_ram_mb(), 57);
        assert_eq!(m.app_ram_mb(AppId::Notepad), Some(6));
    }

    #[test]
    fn test_boot_contributes_nothing() {
        let mut m = monitor();
        let mut rng = StdRng::seed_from_u64(1);
        m.recompute(&[AppId::BOOT, AppId::Clock], &mut rng);
        let keys: Vec<_> = m.per_app_ram_mb().iter().map(|(id, _)| *id).collect();
        assert_eq!(keys, vec![AppId::Clock]);
    }

    #[test]
    fn test_used_ram_is_clamped() {
        let mut m = monitor();
        let mut rng = StdRng::seed_from_u64(1);
        m.recompute(&AppId::ALL, &mut rng);
        assert_eq!(m.used_ram_mb(), 80);
        assert_eq!(m.ram_usage_percent(), 100.0);
    }

    #[test]
    fn test_lag_severity_thresholds() {
        let mut m = monitor();
        let mut rng = StdRng::seed_from_u64(1);
        m.recompute(&[AppId::Clock], &mut rng);
        assert_eq!(m.lag_severity(), None);

        // 50 + 14 + 8 = 72 = 90%
        m.recompute(&[AppId::AiAssistant, AppId::Gallery], &mut rng);
        assert_eq!(m.lag_severity(), Some(0.0));

        m.recompute(&AppId::ALL, &mut rng);
        assert_eq!(m.lag_severity(), Some(1.0));
    }

    #[test]
    fn test_fps_sampled_once_per_second() {
        let mut m = monitor();
        let start = Instant::now();
        m.start(start);
        for i in 1..=60u64 {
            m.on_frame(start + Duration::from_micros(16_667 * i), &NoLoad);
        }
        assert_eq!(m.fps(), 60);
    }

    #[test]
    fn test_stopped_monitor_ignores_frames() {
        let mut m = monitor();
        let start = Instant::now();
        m.on_frame(start + Duration::from_secs(2), &NoLoad);
        assert_eq!(m.fps(), 0);
        assert!(!m.is_running());
    }

    #[test]
    fn test_stop_resets_fps() {
        let mut m = monitor();
        let start = Instant::now();
        m.start(start);
        m.on_frame(start + Duration::from_secs(1), &NoLoad);
        assert_eq!(m.fps(), 1);
        m.stop();
        assert_eq!(m.fps(), 0);
    }

    #[test]
    fn test_load_runs_only_under_pressure() {
        let mut m = monitor();
        let mut rng = StdRng::seed_from_u64(1);
        let start = Instant::now();
        m.start(start);

        let mut idle = MockSyntheticLoad::new();
        idle.expect_run().never();
        m.on_frame(start, &idle);

        m.recompute(&AppId::ALL, &mut rng);
        let mut loaded = MockSyntheticLoad::new();
        loaded
            .expect_run()
            .withf(|severity| (*severity - 1.0).abs() < f64::EPSILON)
            .times(1)
            .return_const(());
        m.on_frame(start, &loaded);
    }

    #[test]
    fn test_busy_loop_zero_severity_returns() {
        BusyLoop { max_iterations: 10 }.run(0.0);
        BusyLoop { max_iterations: 10 }.run(1.0);
    }
}
