//! Sweep runners
//!
//! Set the period once, then write and hold forever. The only way out is
//! an error, which is returned to the caller unhandled.
//!
//! Two flavours share the same loop:
//! - [`run_blocking`] with an `embedded_hal::delay::DelayNs`
//! - [`run_async`] with an `embedded_hal_async::delay::DelayNs`, for
//!   executors such as embassy where the timer await is the only
//!   suspension point

use core::convert::Infallible;

use embedded_hal::delay::DelayNs;
use embedded_hal_async::delay::DelayNs as AsyncDelayNs;
use servosweep_core::sweep::{SweepError, Sweeper, Write};
use servosweep_core::traits::AnalogOutput;

#[cfg(feature = "defmt")]
fn log_write(write: &Write) {
    defmt::debug!(
        "write #{}: {:?} level={} pulse={}us",
        write.index,
        write.position,
        write.level.raw(),
        write.pulse_width_us()
    );
}

#[cfg(not(feature = "defmt"))]
fn log_write(_write: &Write) {}

/// Run the sweep with a blocking delay
///
/// Never returns `Ok`.
pub fn run_blocking<O, D>(
    sweeper: &mut Sweeper<O>,
    delay: &mut D,
) -> Result<Infallible, SweepError<O::Error>>
where
    O: AnalogOutput,
    D: DelayNs,
{
    sweeper.configure()?;

    loop {
        let write = sweeper.step()?;
        log_write(&write);
        delay.delay_ms(write.dwell_ms);
    }
}

/// Run the sweep with an async delay
///
/// Never returns `Ok`.
pub async fn run_async<O, D>(
    sweeper: &mut Sweeper<O>,
    delay: &mut D,
) -> Result<Infallible, SweepError<O::Error>>
where
    O: AnalogOutput,
    D: AsyncDelayNs,
{
    sweeper.configure()?;

    loop {
        let write = sweeper.step()?;
        log_write(&write);
        delay.delay_ms(write.dwell_ms).await;
    }
}
