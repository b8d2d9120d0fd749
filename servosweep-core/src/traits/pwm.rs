//! PWM channel trait
//!
//! A single PWM output whose period can be reprogrammed. Chip HALs
//! implement this; the drivers crate turns it into an [`AnalogOutput`].
//!
//! [`AnalogOutput`]: super::AnalogOutput

/// One PWM output channel
pub trait PwmChannel {
    /// Error reported by the channel
    type Error;

    /// Reprogram the PWM period in microseconds
    ///
    /// Implementations may change [`max_duty`](Self::max_duty) as a result.
    fn set_period_us(&mut self, period_us: u32) -> Result<(), Self::Error>;

    /// Compare value that gives 100% duty at the current period
    fn max_duty(&self) -> u16;

    /// Set the compare value (0..=`max_duty`)
    fn set_duty(&mut self, duty: u16) -> Result<(), Self::Error>;
}
