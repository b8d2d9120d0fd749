//! Events that trigger position transitions

/// Events that can trigger position transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    /// The hold time after a write has passed
    DwellElapsed,
}
