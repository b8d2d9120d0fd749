//! Sweep state machine
//!
//! The servo is always at one of three positions. Positions advance in a
//! fixed order, one step per elapsed dwell, with no terminal state.

pub mod events;
pub mod machine;

pub use events::Event;
pub use machine::Position;
