//! Servo output implementations
//!
//! - [`AnalogPin`]: analog-write interface over any [`PwmChannel`]
//! - [`FixedPeriodPwm`]: [`PwmChannel`] over an embedded-hal duty-cycle
//!   channel whose period was fixed at board bring-up
//!
//! [`PwmChannel`]: servosweep_core::traits::PwmChannel

pub mod analog;
pub mod fixed;

pub use analog::AnalogPin;
pub use fixed::{FixedPeriodError, FixedPeriodPwm};
