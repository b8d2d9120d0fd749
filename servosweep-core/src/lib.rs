//! Board-agnostic core logic for the servo sweep firmware
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Analog level scale and pulse-width math
//! - Sweep positions and their state machine
//! - The sweeper itself and its timeline
//! - Compile-time sweep constants
//! - PWM divider/TOP calculation
//! - Hardware abstraction traits (analog output, PWM channel)

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod config;
pub mod level;
pub mod pwm;
pub mod state;
pub mod sweep;
pub mod traits;

pub use level::{AnalogLevel, LevelError};
pub use state::{Event, Position};
pub use sweep::{Schedule, SweepError, Sweeper, Write};
