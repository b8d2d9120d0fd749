//! Servosweep - Hobby Servo Sweep Firmware
//!
//! Main firmware binary for RP2040-based boards. Drives a hobby servo on
//! GPIO0 through center, full-left and full-right, one second each, on a
//! 20 ms PWM period, until power-off or reset.
//!
//! Wiring: servo signal to GPIO0, servo power from a separate 5 V supply
//! sharing ground with the board.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use {defmt_rtt as _, panic_probe as _};

use servosweep_core::config::SweepConfig;
use servosweep_drivers::AnalogPin;
use servosweep_hal_rp2040::RpPwmChannel;

mod tasks;

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Servosweep firmware starting...");

    // Initialize RP2040 peripherals
    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    // Servo signal on GPIO0 = PWM slice 0, output A
    let channel = RpPwmChannel::new_output_a(p.PWM_SLICE0, p.PIN_0);
    info!("PWM slice 0 on GPIO0, clk_sys={}Hz", channel.clk_hz());

    let config = SweepConfig::DEFAULT;
    info!(
        "Sweep: period={}ms dwell={}ms center={} min={} max={}",
        config.period_ms,
        config.dwell_ms,
        config.center.raw(),
        config.min.raw(),
        config.max.raw()
    );

    spawner.spawn(tasks::sweep_task(AnalogPin::new(channel))).unwrap();

    info!("Sweep task spawned, firmware running");
}
