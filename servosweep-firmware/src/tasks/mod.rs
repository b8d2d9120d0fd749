//! Embassy async tasks
//!
//! The sweep task is the only task; it owns the servo pin for the whole
//! program lifetime.

pub mod sweep;

pub use sweep::sweep_task;
