//! Sweep constants
//!
//! The sweep has no runtime configuration. Period, dwell and the three
//! levels are constants, gathered in [`SweepConfig::DEFAULT`] and checked
//! at compile time.

use crate::level::AnalogLevel;

/// PWM period in milliseconds (50 Hz)
pub const PERIOD_MS: u16 = 20;

/// Hold time after each write in milliseconds
pub const DWELL_MS: u32 = 1000;

/// Level for the center position (≈1.5 ms pulse)
pub const CENTER_LEVEL: AnalogLevel = AnalogLevel::new_const(75);

/// Level for full travel in one direction (≈1.0 ms pulse)
pub const MIN_LEVEL: AnalogLevel = AnalogLevel::new_const(50);

/// Level for full travel in the other direction (≈2.0 ms pulse)
pub const MAX_LEVEL: AnalogLevel = AnalogLevel::new_const(100);

/// Shortest pulse a hobby servo accepts, in microseconds
pub const SERVO_PULSE_MIN_US: u32 = 900;

/// Longest pulse a hobby servo accepts, in microseconds
pub const SERVO_PULSE_MAX_US: u32 = 2100;

/// Configuration errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Period is zero
    ZeroPeriod,
    /// Dwell is zero
    ZeroDwell,
    /// Levels are not ordered min < center < max
    LevelOrder,
    /// A level's pulse width is outside the servo's accepted range
    PulseOutOfRange,
}

/// Complete sweep configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SweepConfig {
    /// PWM period (ms)
    pub period_ms: u16,
    /// Hold time after each write (ms)
    pub dwell_ms: u32,
    /// Center level
    pub center: AnalogLevel,
    /// Full travel, one direction
    pub min: AnalogLevel,
    /// Full travel, other direction
    pub max: AnalogLevel,
}

impl SweepConfig {
    /// The only configuration the firmware runs
    pub const DEFAULT: Self = Self {
        period_ms: PERIOD_MS,
        dwell_ms: DWELL_MS,
        center: CENTER_LEVEL,
        min: MIN_LEVEL,
        max: MAX_LEVEL,
    };

    /// PWM period in microseconds
    pub const fn period_us(&self) -> u32 {
        self.period_ms as u32 * 1000
    }

    /// Check the configuration drives a hobby servo sensibly
    pub const fn validate(&self) -> Result<(), ConfigError> {
        if self.period_ms == 0 {
            return Err(ConfigError::ZeroPeriod);
        }
        if self.dwell_ms == 0 {
            return Err(ConfigError::ZeroDwell);
        }
        if !(self.min.raw() < self.center.raw() && self.center.raw() < self.max.raw()) {
            return Err(ConfigError::LevelOrder);
        }

        let period_us = self.period_us();
        let shortest = self.min.pulse_width_us(period_us);
        let longest = self.max.pulse_width_us(period_us);
        if shortest < SERVO_PULSE_MIN_US || longest > SERVO_PULSE_MAX_US {
            return Err(ConfigError::PulseOutOfRange);
        }

        Ok(())
    }
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

// Editing the constants above into something a servo can't follow fails the build
const _: () = assert!(SweepConfig::DEFAULT.validate().is_ok());

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert_eq!(SweepConfig::default().validate(), Ok(()));
        assert_eq!(SweepConfig::DEFAULT.period_us(), 20_000);
    }

    #[test]
    fn test_rejects_zero_timing() {
        let config = SweepConfig {
            period_ms: 0,
            ..SweepConfig::DEFAULT
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroPeriod));

        let config = SweepConfig {
            dwell_ms: 0,
            ..SweepConfig::DEFAULT
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroDwell));
    }

    #[test]
    fn test_rejects_swapped_levels() {
        let config = SweepConfig {
            min: MAX_LEVEL,
            max: MIN_LEVEL,
            ..SweepConfig::DEFAULT
        };
        assert_eq!(config.validate(), Err(ConfigError::LevelOrder));
    }

    #[test]
    fn test_rejects_pulse_outside_servo_range() {
        // 200 / 1023 of 20 ms is ~3.9 ms
        let config = SweepConfig {
            max: AnalogLevel::new_const(200),
            ..SweepConfig::DEFAULT
        };
        assert_eq!(config.validate(), Err(ConfigError::PulseOutOfRange));

        // Same levels on a 10 ms period halve every pulse
        let config = SweepConfig {
            period_ms: 10,
            ..SweepConfig::DEFAULT
        };
        assert_eq!(config.validate(), Err(ConfigError::PulseOutOfRange));
    }
}
