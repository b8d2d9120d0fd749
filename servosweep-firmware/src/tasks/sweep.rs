//! Servo sweep task
//!
//! Sets the 20 ms period once, then writes center, min and max forever,
//! holding each for one second. Any PWM fault stops the firmware.

use defmt::*;
use embassy_time::Delay;

use servosweep_core::sweep::Sweeper;
use servosweep_drivers::{run_async, AnalogPin};
use servosweep_hal_rp2040::RpPwmChannel;

/// Servo output type for this board
pub type ServoPin = AnalogPin<RpPwmChannel<'static>>;

/// Sweep task for the servo on the board's PWM pin
#[embassy_executor::task]
pub async fn sweep_task(pin: ServoPin) {
    info!("Sweep task started");

    let mut sweeper = Sweeper::new(pin);
    let mut delay = Delay;

    let err = match run_async(&mut sweeper, &mut delay).await {
        Ok(never) => match never {},
        Err(e) => e,
    };

    // No recovery: stop with the pin in whatever state the fault left it
    error!("Sweep stopped after {} writes: {:?}", sweeper.writes(), err);
    defmt::panic!("servo output fault");
}
