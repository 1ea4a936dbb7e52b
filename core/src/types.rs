//! Shared primitive types used across the entire simulation.

/// A policy meeting number. Meeting 1 is the first playable meeting;
/// meeting 0 appears only in the pre-game rate history entry.
pub type Meeting = u32;

/// Rate change in basis points. 100 bps = 1 percentage point.
pub type Bps = i32;
