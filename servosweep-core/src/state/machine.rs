//! Position state machine
//!
//! The sweep visits CENTER, MIN and MAX in that order and wraps back to
//! CENTER. CENTER is always first.

use super::events::Event;
use crate::config::{CENTER_LEVEL, MAX_LEVEL, MIN_LEVEL};
use crate::level::AnalogLevel;

/// Servo positions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Position {
    /// Mid travel (≈1.5 ms pulse)
    #[default]
    Center,
    /// Full travel one direction (≈1.0 ms pulse)
    Min,
    /// Full travel the other direction (≈2.0 ms pulse)
    Max,
}

impl Position {
    /// Positions in sweep order
    pub const SEQUENCE: [Position; 3] = [Position::Center, Position::Min, Position::Max];

    /// Analog level written for this position
    pub const fn level(self) -> AnalogLevel {
        match self {
            Position::Center => CENTER_LEVEL,
            Position::Min => MIN_LEVEL,
            Position::Max => MAX_LEVEL,
        }
    }

    /// Position following this one
    pub const fn next(self) -> Self {
        match self {
            Position::Center => Position::Min,
            Position::Min => Position::Max,
            Position::Max => Position::Center,
        }
    }

    /// Index of this position in [`Position::SEQUENCE`]
    pub const fn index(self) -> usize {
        match self {
            Position::Center => 0,
            Position::Min => 1,
            Position::Max => 2,
        }
    }

    /// Position written by the `n`th write (0-based) since power-on
    pub const fn nth(n: u64) -> Self {
        Self::SEQUENCE[(n % Self::SEQUENCE.len() as u64) as usize]
    }

    /// Process an event and return the next position
    pub fn transition(self, event: Event) -> Self {
        match event {
            Event::DwellElapsed => self.next(),
        }
    }
}
