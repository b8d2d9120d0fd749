//! RP2040-specific HAL for the servo sweep firmware
//!
//! This crate provides RP2040-specific implementations of the
//! `servosweep-core` hardware traits:
//!
//! - PWM slice output with a reprogrammable period ([`pwm::RpPwmChannel`])

#![no_std]

pub mod pwm;

pub use pwm::{RpPwmChannel, RpPwmError};
