//! Analog output pin
//!
//! The boundary the sweeper drives: one pin with a configurable PWM period
//! that accepts analog writes on the 0..=1023 scale.

use crate::level::AnalogLevel;

/// PWM-capable output pin with an analog-write interface
pub trait AnalogOutput {
    /// Error reported by the underlying hardware
    type Error;

    /// Set the PWM signal period in milliseconds
    fn set_analog_period_ms(&mut self, period_ms: u16) -> Result<(), Self::Error>;

    /// Drive the pin at the given level
    ///
    /// The level is a fraction of the configured period.
    fn write_analog(&mut self, level: AnalogLevel) -> Result<(), Self::Error>;
}
