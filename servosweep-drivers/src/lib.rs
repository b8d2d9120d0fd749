//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in servosweep-core, and the loops that run the sweep:
//!
//! - Servo outputs (analog pin over any PWM channel, fixed-period
//!   embedded-hal channels)
//! - Sweep runners (blocking and async delays)

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod runner;
pub mod servo;

pub use runner::{run_async, run_blocking};
pub use servo::{AnalogPin, FixedPeriodError, FixedPeriodPwm};
