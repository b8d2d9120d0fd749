//! Fixed-period PWM channel
//!
//! Many HALs fix a timer's frequency when the timer is set up and only
//! expose a duty-cycle setter per channel (`embedded_hal::pwm::SetDutyCycle`).
//! This adapter makes such a channel usable as a [`PwmChannel`]: the only
//! period it accepts is the one the timer already runs at.

use embedded_hal::pwm::SetDutyCycle;
use servosweep_core::traits::PwmChannel;

/// Errors from a fixed-period channel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FixedPeriodError<E> {
    /// Requested period differs from the timer's
    PeriodMismatch {
        /// Period asked for (µs)
        requested: u32,
        /// Period the timer runs at (µs)
        fixed: u32,
    },
    /// Duty-cycle write failed
    Pwm(E),
}

/// [`PwmChannel`] over an embedded-hal duty-cycle channel
pub struct FixedPeriodPwm<P> {
    pwm: P,
    period_us: u32,
}

impl<P: SetDutyCycle> FixedPeriodPwm<P> {
    /// Wrap a channel whose timer runs with `period_us`
    pub fn new(pwm: P, period_us: u32) -> Self {
        Self { pwm, period_us }
    }

    /// Period the timer runs at (µs)
    pub fn period_us(&self) -> u32 {
        self.period_us
    }

    /// Release the underlying channel
    pub fn into_inner(self) -> P {
        self.pwm
    }
}

impl<P: SetDutyCycle> PwmChannel for FixedPeriodPwm<P> {
    type Error = FixedPeriodError<P::Error>;

    fn set_period_us(&mut self, period_us: u32) -> Result<(), Self::Error> {
        if period_us != self.period_us {
            return Err(FixedPeriodError::PeriodMismatch {
                requested: period_us,
                fixed: self.period_us,
            });
        }
        Ok(())
    }

    fn max_duty(&self) -> u16 {
        self.pwm.max_duty_cycle()
    }

    fn set_duty(&mut self, duty: u16) -> Result<(), Self::Error> {
        self.pwm.set_duty_cycle(duty).map_err(FixedPeriodError::Pwm)
    }
}
