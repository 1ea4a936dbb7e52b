//! Engine tunables.
//!
//! Everything here has a sensible default; a frontend can deserialize an
//! override from JSON without the engine knowing where it came from.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Number of scheduled policy meetings in a full game.
    pub total_meetings: u32,
    /// Inflation mandate target, percent.
    pub inflation_target: f64,
    /// Trend GDP growth the economy reverts toward, percent.
    pub gdp_target: f64,
    /// Longer-run neutral policy rate used by staff projections, percent.
    pub neutral_rate: f64,
    /// Per-meeting probability of a data revision (from meeting 3 on).
    pub revision_probability: f64,
    /// Maximum headlines surfaced per meeting transition.
    pub max_headlines: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            total_meetings: 8,
            inflation_target: 2.0,
            gdp_target: 2.0,
            neutral_rate: 3.0,
            revision_probability: 0.30,
            max_headlines: 5,
        }
    }
}
