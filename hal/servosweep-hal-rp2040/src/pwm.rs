//! PWM slice channel
//!
//! Drives output A of one RP2040 PWM slice. The slice counter runs from 0
//! to TOP and the output is high while the counter is below the compare
//! value, so a compare of TOP + 1 is 100% duty.
//!
//! Period changes recompute the fractional divider and TOP from `clk_sys`
//! (see [`PwmTiming`]).

use embassy_rp::clocks::clk_sys_freq;
use embassy_rp::pwm::{ChannelAPin, Config as PwmConfig, Pwm, Slice};
use embassy_rp::Peri;
use fixed::types::U12F4;

use servosweep_core::pwm::{PwmTiming, TimingError};
use servosweep_core::traits::PwmChannel;

/// PWM channel errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RpPwmError {
    /// Period cannot be produced from `clk_sys`
    Timing(TimingError),
    /// Compare value above the current maximum
    DutyOutOfRange(u16),
}

/// Output A of one PWM slice
pub struct RpPwmChannel<'d> {
    pwm: Pwm<'d>,
    config: PwmConfig,
    /// Slice input clock (Hz)
    clk_hz: u32,
}

impl<'d> RpPwmChannel<'d> {
    /// Take a slice and its A pin
    ///
    /// The output starts low with the default (free-running) period.
    pub fn new_output_a<T: Slice>(slice: Peri<'d, T>, pin: Peri<'d, impl ChannelAPin<T>>) -> Self {
        let mut config = PwmConfig::default();
        config.compare_a = 0;

        let pwm = Pwm::new_output_a(slice, pin, config.clone());

        Self {
            pwm,
            config,
            clk_hz: clk_sys_freq(),
        }
    }

    /// Slice input clock (Hz)
    pub fn clk_hz(&self) -> u32 {
        self.clk_hz
    }
}

impl PwmChannel for RpPwmChannel<'_> {
    type Error = RpPwmError;

    fn set_period_us(&mut self, period_us: u32) -> Result<(), Self::Error> {
        let timing = PwmTiming::for_period(self.clk_hz, period_us).map_err(RpPwmError::Timing)?;

        #[cfg(feature = "defmt")]
        defmt::debug!(
            "PWM period {}us: divider {}+{}/16, top {}",
            period_us,
            timing.divider_int(),
            timing.divider_frac(),
            timing.top
        );

        self.config.divider = U12F4::from_bits(timing.divider_16ths);
        self.config.top = timing.top;
        // Never leave a compare above the new range
        self.config.compare_a = self.config.compare_a.min(timing.top.saturating_add(1));
        self.pwm.set_config(&self.config);

        Ok(())
    }

    fn max_duty(&self) -> u16 {
        // TOP is at most 0xFFFE once a period is set; only the power-on
        // default of 0xFFFF saturates here
        self.config.top.saturating_add(1)
    }

    fn set_duty(&mut self, duty: u16) -> Result<(), Self::Error> {
        if duty > self.max_duty() {
            return Err(RpPwmError::DutyOutOfRange(duty));
        }

        self.config.compare_a = duty;
        self.pwm.set_config(&self.config);

        Ok(())
    }
}
