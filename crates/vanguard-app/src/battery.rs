//! Battery charge/drain simulator

use std::time::Duration;

/// Drain period in time units with power saving off
const DRAIN_UNITS: u32 = 7;
/// Drain period in time units with power saving on
const POWER_SAVING_DRAIN_UNITS: u32 = 9;
/// Charge level granted on power-on from an empty battery
pub const MIN_BOOT_LEVEL: u8 = 5;

/// Outcome of one battery tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatteryTick {
    /// Charging, level went up
    Charged(u8),
    /// Charging at 100
    Full,
    /// Draining, level went down
    Drained(u8),
    /// Drained to zero; the device must power off
    Depleted,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatterySimulator {
    level: u8,
    charging: bool,
}

impl BatterySimulator {
    pub fn new(level: u8) -> Self {
        Self {
            level: level.min(100),
            charging: false,
        }
    }

    pub fn level(&self) -> u8 {
        self.level
    }

    pub fn is_charging(&self) -> bool {
        self.charging
    }

    pub fn set_charging(&mut self, charging: bool) {
        self.charging = charging;
    }

    /// Interval between ticks for the current charging state
    pub fn tick_period(&self, power_saving: bool, time_unit: Duration) -> Duration {
        tick_period(self.charging, power_saving, time_unit)
    }

    pub fn tick(&mut self) -> BatteryTick {
        if self.charging {
            if self.level >= 100 {
                self.level = 100;
                return BatteryTick::Full;
            }
            self.level += 1;
            return BatteryTick::Charged(self.level);
        }

        if self.level <= 1 {
            self.level = 0;
            self.charging = false;
            return BatteryTick::Depleted;
        }
        self.level -= 1;
        BatteryTick::Drained(self.level)
    }

    /// Apply the minimum boot charge to an empty battery
    pub fn revive(&mut self) {
        if self.level == 0 {
            self.level = MIN_BOOT_LEVEL;
        }
    }
}

/// Tick interval: 7 units draining, 9 with power saving, doubled when charging
pub fn tick_period(charging: bool, power_saving: bool, time_unit: Duration) -> Duration {
    let units = if power_saving {
        POWER_SAVING_DRAIN_UNITS
    } else {
        DRAIN_UNITS
    };
    let units = if charging { units * 2 } else { units };
    time_unit * units
}

#[cfg(test)]
mod tests {
    use super::*;

    const UNIT: Duration = Duration::from_millis(1000);

    #[test]
    fn test_drain_period() {
        assert_eq!(tick_period(false, false, UNIT), Duration::from_secs(7));
        assert_eq!(tick_period(false, true, UNIT), Duration::from_secs(9));
    }

    #[test]
    fn test_charge_period_is_double() {
        assert_eq!(tick_period(true, false, UNIT), Duration::from_secs(14));
        assert_eq!(tick_period(true, true, UNIT), Duration::from_secs(18));
    }

    #[test]
    fn test_drain_decrements() {
        let mut b = BatterySimulator::new(50);
        assert_eq!(b.tick(), BatteryTick::Drained(49));
        assert_eq!(b.level(), 49);
    }

    #[test]
    fn test_last_percent_depletes() {
        let mut b = BatterySimulator::new(1);
        assert_eq!(b.tick(), BatteryTick::Depleted);
        assert_eq!(b.level(), 0);
        assert!(!b.is_charging());
    }

    #[test]
    fn test_charge_caps_at_100() {
        let mut b = BatterySimulator::new(99);
        b.set_charging(true);
        assert_eq!(b.tick(), BatteryTick::Charged(100));
        assert_eq!(b.tick(), BatteryTick::Full);
        assert_eq!(b.level(), 100);
    }

    #[test]
    fn test_new_clamps_level() {
        assert_eq!(BatterySimulator::new(250).level(), 100);
    }

    #[test]
    fn test_revive_only_from_empty() {
        let mut b = BatterySimulator::new(1);
        b.tick();
        b.revive();
        assert_eq!(b.level(), MIN_BOOT_LEVEL);

        let mut b = BatterySimulator::new(40);
        b.revive();
        assert_eq!(b.level(), 40);
    }

    #[test]
    fn test_level_stays_in_range_over_many_ticks() {
        let mut b = BatterySimulator::new(3);
        for i in 0..300 {
            b.set_charging(i % 7 < 3);
            b.tick();
            assert!(b.level() <= 100);
        }
    }
}
