//! Hardware abstraction traits
//!
//! These traits define the interface between the sweep logic
//! and hardware-specific implementations.

pub mod output;
pub mod pwm;

pub use output::AnalogOutput;
pub use pwm::PwmChannel;
