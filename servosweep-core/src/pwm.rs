//! PWM timing math
//!
//! Computes the clock divider and counter wrap (TOP) for a requested PWM
//! period on a 16-bit counter with an 8.4 fractional divider, as found on
//! the RP2040 PWM slices.
//!
//! The counter runs at `clk / divider` and wraps after `TOP + 1` counts, so
//! `period = (TOP + 1) * divider / clk`. The smallest divider that fits the
//! period into 16 bits is chosen, which maximises duty resolution.

/// Largest count per period
///
/// TOP stops at 0xFFFE so that the 100% duty compare (TOP + 1) still fits
/// in the 16-bit compare register.
pub const MAX_COUNT: u64 = 0xFFFF;

/// Smallest divider in 1/16 steps (1.0)
pub const DIVIDER_MIN_16THS: u16 = 16;

/// Largest divider in 1/16 steps (255 + 15/16)
pub const DIVIDER_MAX_16THS: u16 = 0x0FFF;

/// Timing calculation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TimingError {
    /// Period or clock is zero
    ZeroPeriod,
    /// Period is shorter than two counter ticks
    PeriodTooShort,
    /// Period does not fit even at the largest divider
    PeriodTooLong,
}

/// Divider and TOP for one PWM period
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PwmTiming {
    /// Clock divider in 1/16 steps (integer part in the upper 8 bits)
    pub divider_16ths: u16,
    /// Counter wrap value
    pub top: u16,
}

impl PwmTiming {
    /// Find the timing for `period_us` with a `clk_hz` input clock
    pub fn for_period(clk_hz: u32, period_us: u32) -> Result<Self, TimingError> {
        if clk_hz == 0 || period_us == 0 {
            return Err(TimingError::ZeroPeriod);
        }

        // Period length in sixteenths of an input clock tick
        let ticks_16ths = clk_hz as u64 * period_us as u64 * 16 / 1_000_000;
        if ticks_16ths < 2 * DIVIDER_MIN_16THS as u64 {
            return Err(TimingError::PeriodTooShort);
        }

        let divider = ticks_16ths
            .div_ceil(MAX_COUNT)
            .max(DIVIDER_MIN_16THS as u64);
        if divider > DIVIDER_MAX_16THS as u64 {
            return Err(TimingError::PeriodTooLong);
        }

        // Round to the nearest count
        let count = ((ticks_16ths + divider / 2) / divider).min(MAX_COUNT);

        Ok(Self {
            divider_16ths: divider as u16,
            top: (count - 1) as u16,
        })
    }

    /// Integer part of the divider
    pub fn divider_int(&self) -> u8 {
        (self.divider_16ths >> 4) as u8
    }

    /// Fractional part of the divider, in 1/16
    pub fn divider_frac(&self) -> u8 {
        (self.divider_16ths & 0x0F) as u8
    }

    /// Actual period produced by this timing, in microseconds (rounded down)
    pub fn period_us(&self, clk_hz: u32) -> u32 {
        let ticks_16ths = (self.top as u64 + 1) * self.divider_16ths as u64;
        (ticks_16ths * 1_000_000 / (16 * clk_hz as u64)) as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const RP2040_CLK_HZ: u32 = 125_000_000;

    #[test]
    fn test_servo_period_at_125mhz() {
        let timing = PwmTiming::for_period(RP2040_CLK_HZ, 20_000).unwrap();

        // 611/16 = 38.1875
        assert_eq!(timing.divider_16ths, 611);
        assert_eq!(timing.divider_int(), 38);
        assert_eq!(timing.divider_frac(), 3);
        assert_eq!(timing.top, 65_465);

        let actual = timing.period_us(RP2040_CLK_HZ);
        assert!((19_999..=20_000).contains(&actual));
    }

    #[test]
    fn test_slow_clock_uses_minimum_divider() {
        // 1 MHz: 20 ms is 20 000 ticks, fits without dividing
        let timing = PwmTiming::for_period(1_000_000, 20_000).unwrap();
        assert_eq!(timing.divider_16ths, DIVIDER_MIN_16THS);
        assert_eq!(timing.top, 19_999);
        assert_eq!(timing.period_us(1_000_000), 20_000);
    }

    #[test]
    fn test_full_duty_compare_fits() {
        // 65 536 ticks of 1 MHz would need TOP = 0xFFFF at divider 1.0
        let timing = PwmTiming::for_period(1_000_000, 65_536).unwrap();
        assert_eq!(timing.divider_16ths, 17);
        assert!(timing.top < u16::MAX);

        let timing = PwmTiming::for_period(1_000_000, 65_535).unwrap();
        assert_eq!(timing.divider_16ths, DIVIDER_MIN_16THS);
        assert_eq!(timing.top, 0xFFFE);
    }

    #[test]
    fn test_errors() {
        assert_eq!(
            PwmTiming::for_period(RP2040_CLK_HZ, 0),
            Err(TimingError::ZeroPeriod)
        );
        assert_eq!(PwmTiming::for_period(0, 20_000), Err(TimingError::ZeroPeriod));
        // 1 us at 1 MHz is a single tick
        assert_eq!(
            PwmTiming::for_period(1_000_000, 1),
            Err(TimingError::PeriodTooShort)
        );
        // Longest period at 125 MHz is ~134 ms
        assert_eq!(
            PwmTiming::for_period(RP2040_CLK_HZ, 1_000_000),
            Err(TimingError::PeriodTooLong)
        );
    }

    proptest! {
        #[test]
        fn timing_stays_in_hardware_limits(
            clk_hz in 1_000_000u32..=200_000_000,
            period_us in 1_000u32..=100_000,
        ) {
            if let Ok(timing) = PwmTiming::for_period(clk_hz, period_us) {
                prop_assert!(timing.divider_16ths >= DIVIDER_MIN_16THS);
                prop_assert!(timing.divider_16ths <= DIVIDER_MAX_16THS);
                prop_assert!(timing.top >= 1);
                prop_assert!(timing.top.checked_add(1).is_some());
            }
        }

        #[test]
        fn servo_period_is_accurate(clk_hz in 10_000_000u32..=200_000_000) {
            let timing = PwmTiming::for_period(clk_hz, 20_000).unwrap();
            let actual = timing.period_us(clk_hz) as i64;
            // Better than 0.1%
            prop_assert!((actual - 20_000).abs() <= 20);
        }
    }
}
