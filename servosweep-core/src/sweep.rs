//! Servo sweeper
//!
//! Owns the single analog output and walks it through the position state
//! machine. The sweeper itself never waits: [`Sweeper::step`] issues one
//! write and reports how long to hold it, and the caller (a blocking or
//! async runner) does the waiting.
//!
//! ```ignore
//! let mut sweeper = Sweeper::new(pin);
//! sweeper.configure()?;
//! loop {
//!     let write = sweeper.step()?;
//!     delay.delay_ms(write.dwell_ms);
//! }
//! ```

use crate::config::{DWELL_MS, PERIOD_MS};
use crate::level::AnalogLevel;
use crate::state::{Event, Position};
use crate::traits::AnalogOutput;

/// Sweep errors
///
/// None of these are recoverable; callers are expected to stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SweepError<E> {
    /// A write was attempted before the period was set
    NotConfigured,
    /// The output reported a failure
    Hardware(E),
}

impl<E> From<E> for SweepError<E> {
    fn from(err: E) -> Self {
        SweepError::Hardware(err)
    }
}

/// One write of the sweep
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Write {
    /// 0-based write count since power-on
    pub index: u64,
    /// Position written
    pub position: Position,
    /// Level written
    pub level: AnalogLevel,
    /// Hold time before the next write (ms)
    pub dwell_ms: u32,
}

impl Write {
    /// Time of this write relative to the first one (ms)
    pub fn start_ms(&self) -> u64 {
        self.index * self.dwell_ms as u64
    }

    /// Pulse width produced by this write at the sweep period (µs)
    pub fn pulse_width_us(&self) -> u32 {
        self.level.pulse_width_us(PERIOD_MS as u32 * 1000)
    }
}

/// Drives one analog output through center, min and max
pub struct Sweeper<O> {
    output: O,
    /// Position the next write targets
    position: Position,
    /// Whether the period has been set
    configured: bool,
    /// Writes issued so far
    writes: u64,
}

impl<O: AnalogOutput> Sweeper<O> {
    /// Create a sweeper that owns `output`
    ///
    /// The output is not touched until [`configure`](Self::configure).
    pub fn new(output: O) -> Self {
        Self {
            output,
            position: Position::Center,
            configured: false,
            writes: 0,
        }
    }

    /// Set the PWM period
    ///
    /// Only the first call reaches the hardware.
    pub fn configure(&mut self) -> Result<(), SweepError<O::Error>> {
        if self.configured {
            return Ok(());
        }

        self.output.set_analog_period_ms(PERIOD_MS)?;
        self.configured = true;
        Ok(())
    }

    /// Write the current position and advance to the next one
    ///
    /// A failed write leaves the position unchanged.
    pub fn step(&mut self) -> Result<Write, SweepError<O::Error>> {
        if !self.configured {
            return Err(SweepError::NotConfigured);
        }

        let position = self.position;
        let level = position.level();
        self.output.write_analog(level)?;

        let write = Write {
            index: self.writes,
            position,
            level,
            dwell_ms: DWELL_MS,
        };

        // The next write only happens once the dwell has elapsed
        self.writes += 1;
        self.position = position.transition(Event::DwellElapsed);

        Ok(write)
    }

    /// Position the next write targets
    pub fn position(&self) -> Position {
        self.position
    }

    /// Number of successful writes
    pub fn writes(&self) -> u64 {
        self.writes
    }

    /// Check if the period has been set
    pub fn is_configured(&self) -> bool {
        self.configured
    }

    /// Borrow the output
    pub fn output(&self) -> &O {
        &self.output
    }

    /// Release the output
    pub fn into_inner(self) -> O {
        self.output
    }
}

/// The sweep as a function of time
///
/// Gives the write in effect at any moment after the first write, without
/// running the sweeper.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Schedule {
    dwell_ms: u32,
}

impl Default for Schedule {
    fn default() -> Self {
        Self::new()
    }
}

impl Schedule {
    /// Schedule for the fixed sweep timing
    pub const fn new() -> Self {
        Self { dwell_ms: DWELL_MS }
    }

    /// The `index`th write (0-based)
    pub fn nth(&self, index: u64) -> Write {
        let position = Position::nth(index);
        Write {
            index,
            position,
            level: position.level(),
            dwell_ms: self.dwell_ms,
        }
    }

    /// Write in effect `t_ms` after the first write
    pub fn write_at(&self, t_ms: u64) -> Write {
        self.nth(t_ms / self.dwell_ms as u64)
    }

    /// Every write, in order
    pub fn iter(&self) -> impl Iterator<Item = Write> + '_ {
        (0u64..).map(move |index| self.nth(index))
    }
}
