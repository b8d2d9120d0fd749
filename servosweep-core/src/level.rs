//! Analog output levels
//!
//! Levels use the 10-bit "analog write" scale: 0 is a flat-low signal and
//! [`FULL_SCALE`] (1023) is a flat-high signal. A level is a fraction of the
//! configured PWM period, so at a 20 ms period:
//!
//! | Level | Pulse width |
//! |-------|-------------|
//! | 50    | ≈ 0.98 ms   |
//! | 75    | ≈ 1.47 ms   |
//! | 100   | ≈ 1.96 ms   |

/// Full-scale analog level (100% duty)
pub const FULL_SCALE: u16 = 1023;

/// Errors constructing an analog level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LevelError {
    /// Raw value above [`FULL_SCALE`]
    OutOfRange(u16),
}

/// A duty cycle on the 0..=1023 analog scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AnalogLevel(u16);

impl AnalogLevel {
    /// Flat-low output
    pub const ZERO: Self = Self(0);

    /// Flat-high output
    pub const FULL: Self = Self(FULL_SCALE);

    /// Create a level, rejecting values above [`FULL_SCALE`]
    pub const fn new(raw: u16) -> Result<Self, LevelError> {
        if raw > FULL_SCALE {
            Err(LevelError::OutOfRange(raw))
        } else {
            Ok(Self(raw))
        }
    }

    /// Create a level in a const context
    ///
    /// Out-of-range values fail compilation when used in a `const` item.
    pub const fn new_const(raw: u16) -> Self {
        match Self::new(raw) {
            Ok(level) => level,
            Err(_) => panic!("analog level above full scale"),
        }
    }

    /// Raw value on the 0..=1023 scale
    pub const fn raw(self) -> u16 {
        self.0
    }

    /// High time of one PWM cycle, in microseconds, for the given period
    pub const fn pulse_width_us(self, period_us: u32) -> u32 {
        (self.0 as u64 * period_us as u64 / FULL_SCALE as u64) as u32
    }

    /// Compare value for a PWM channel whose full-scale compare is `max_duty`
    pub const fn to_duty(self, max_duty: u16) -> u16 {
        (self.0 as u32 * max_duty as u32 / FULL_SCALE as u32) as u16
    }
}

impl TryFrom<u16> for AnalogLevel {
    type Error = LevelError;

    fn try_from(raw: u16) -> Result<Self, Self::Error> {
        Self::new(raw)
    }
}

impl From<AnalogLevel> for u16 {
    fn from(level: AnalogLevel) -> Self {
        level.0
    }
}
