//! Analog-write pin over a PWM channel
//!
//! Presents a [`PwmChannel`] with the analog-write interface the sweeper
//! drives:
//! - the period is given in milliseconds and forwarded in microseconds
//! - levels on the 0..=1023 scale are scaled to the channel's compare range
//! - once a level has been written it is kept across period changes, so the
//!   duty fraction stays the same when the period (and the compare range)
//!   changes; before that, a period change leaves the compare untouched
//!
//! ```ignore
//! let mut pin = AnalogPin::new(channel);
//! pin.set_analog_period_ms(20)?;
//! pin.write_analog(AnalogLevel::new(75)?)?;
//! ```

use servosweep_core::level::AnalogLevel;
use servosweep_core::traits::{AnalogOutput, PwmChannel};

/// Analog output on one PWM channel
pub struct AnalogPin<C> {
    channel: C,
    /// Period last set, if any (µs)
    period_us: Option<u32>,
    /// Level last written, if any
    level: Option<AnalogLevel>,
    /// Channel compare value for 100% duty at the current period
    max_duty: u16,
}

impl<C: PwmChannel> AnalogPin<C> {
    /// Wrap a PWM channel
    ///
    /// The channel is not touched until the first period or level write.
    pub fn new(channel: C) -> Self {
        let max_duty = channel.max_duty();
        Self {
            channel,
            period_us: None,
            level: None,
            max_duty,
        }
    }

    /// Period last set (µs)
    pub fn period_us(&self) -> Option<u32> {
        self.period_us
    }

    /// Level last written
    pub fn level(&self) -> Option<AnalogLevel> {
        self.level
    }

    /// Borrow the underlying channel
    pub fn channel(&self) -> &C {
        &self.channel
    }

    /// Release the underlying channel
    pub fn into_inner(self) -> C {
        self.channel
    }
}

impl<C: PwmChannel> AnalogOutput for AnalogPin<C> {
    type Error = C::Error;

    fn set_analog_period_ms(&mut self, period_ms: u16) -> Result<(), Self::Error> {
        let period_us = period_ms as u32 * 1000;
        self.channel.set_period_us(period_us)?;
        self.period_us = Some(period_us);

        // Compare range follows the period; keep the same duty fraction
        self.max_duty = self.channel.max_duty();
        match self.level {
            Some(level) => self.channel.set_duty(level.to_duty(self.max_duty)),
            None => Ok(()),
        }
    }

    fn write_analog(&mut self, level: AnalogLevel) -> Result<(), Self::Error> {
        self.channel.set_duty(level.to_duty(self.max_duty))?;
        self.level = Some(level);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Call {
        Period(u32),
        Duty(u16),
    }

    /// Mock PWM channel with a compare range of 1 count per µs
    struct MockChannel {
        top: u16,
        calls: Vec<Call>,
        fail: bool,
    }

    impl MockChannel {
        fn new() -> Self {
            Self {
                top: 1000,
                calls: Vec::new(),
                fail: false,
            }
        }
    }

    impl PwmChannel for MockChannel {
        type Error = &'static str;

        fn set_period_us(&mut self, period_us: u32) -> Result<(), Self::Error> {
            if self.fail {
                return Err("period");
            }
            self.top = period_us.min(u16::MAX as u32) as u16;
            self.calls.push(Call::Period(period_us));
            Ok(())
        }

        fn max_duty(&self) -> u16 {
            self.top
        }

        fn set_duty(&mut self, duty: u16) -> Result<(), Self::Error> {
            if self.fail {
                return Err("duty");
            }
            self.calls.push(Call::Duty(duty));
            Ok(())
        }
    }

    #[test]
    fn test_untouched_until_used() {
        let pin = AnalogPin::new(MockChannel::new());

        assert!(pin.channel().calls.is_empty());
        assert_eq!(pin.period_us(), None);
        assert_eq!(pin.level(), None);
    }

    #[test]
    fn test_period_in_microseconds() {
        let mut pin = AnalogPin::new(MockChannel::new());

        pin.set_analog_period_ms(20).unwrap();

        assert_eq!(pin.period_us(), Some(20_000));
        // No compare write until a level is written
        assert_eq!(pin.channel().calls, [Call::Period(20_000)]);
    }

    #[test]
    fn test_servo_levels_become_pulse_widths() {
        let mut pin = AnalogPin::new(MockChannel::new());
        pin.set_analog_period_ms(20).unwrap();

        // One compare count per µs, so duty == pulse width
        for (raw, pulse_us) in [(75, 1466), (50, 977), (100, 1955)] {
            pin.write_analog(AnalogLevel::new(raw).unwrap()).unwrap();
            assert_eq!(pin.channel().calls.last(), Some(&Call::Duty(pulse_us)));
        }
        assert_eq!(pin.level(), Some(AnalogLevel::new_const(100)));
    }

    #[test]
    fn test_period_change_keeps_duty_fraction() {
        let mut pin = AnalogPin::new(MockChannel::new());
        pin.set_analog_period_ms(20).unwrap();
        pin.write_analog(AnalogLevel::FULL).unwrap();
        assert_eq!(pin.channel().calls.last(), Some(&Call::Duty(20_000)));

        pin.set_analog_period_ms(10).unwrap();
        assert_eq!(pin.channel().calls.last(), Some(&Call::Duty(10_000)));
    }

    #[test]
    fn test_period_change_before_first_write_keeps_compare() {
        let mut pin = AnalogPin::new(MockChannel::new());

        pin.set_analog_period_ms(20).unwrap();
        pin.set_analog_period_ms(10).unwrap();

        assert_eq!(
            pin.channel().calls,
            [Call::Period(20_000), Call::Period(10_000)]
        );
    }

    #[test]
    fn test_errors_propagate() {
        let mut channel = MockChannel::new();
        channel.fail = true;
        let mut pin = AnalogPin::new(channel);

        assert_eq!(pin.set_analog_period_ms(20), Err("period"));
        assert_eq!(pin.period_us(), None);

        assert_eq!(pin.write_analog(AnalogLevel::new_const(75)), Err("duty"));
        assert_eq!(pin.level(), None);
    }
}
