//! Rate decisions and their lagged effect magnitudes.
//!
//! RULE: The effect table is keyed by the RateDecision enum, never by a
//! raw integer. Out-of-domain basis-point values are rejected at the
//! boundary by try_from_bps; nothing downstream ever sees one.

use crate::error::{SimError, SimResult};
use crate::types::Bps;
use serde::{Deserialize, Serialize};

/// The five legal policy moves, in basis points of the target band.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RateDecision {
    CutFifty,
    CutQuarter,
    Hold,
    HikeQuarter,
    HikeFifty,
}

impl RateDecision {
    pub const ALL: [RateDecision; 5] = [
        RateDecision::CutFifty,
        RateDecision::CutQuarter,
        RateDecision::Hold,
        RateDecision::HikeQuarter,
        RateDecision::HikeFifty,
    ];

    pub fn bps(self) -> Bps {
        match self {
            Self::CutFifty => -50,
            Self::CutQuarter => -25,
            Self::Hold => 0,
            Self::HikeQuarter => 25,
            Self::HikeFifty => 50,
        }
    }

    pub fn try_from_bps(bps: Bps) -> SimResult<Self> {
        match bps {
            -50 => Ok(Self::CutFifty),
            -25 => Ok(Self::CutQuarter),
            0 => Ok(Self::Hold),
            25 => Ok(Self::HikeQuarter),
            50 => Ok(Self::HikeFifty),
            _ => Err(SimError::InvalidDecision { bps }),
        }
    }

    /// Lagged macro effects of this decision, at full (100%) realization.
    ///
    /// Asymmetric on purpose: hikes hit growth and employment harder
    /// than equal-sized cuts help them.
    pub fn effects(self) -> IndicatorDeltas {
        match self {
            Self::HikeFifty => IndicatorDeltas {
                gdp_growth: -0.35,
                cpi_inflation: -0.15,
                pce_inflation: -0.12,
                unemployment_rate: 0.20,
            },
            Self::HikeQuarter => IndicatorDeltas {
                gdp_growth: -0.18,
                cpi_inflation: -0.08,
                pce_inflation: -0.06,
                unemployment_rate: 0.12,
            },
            Self::Hold => IndicatorDeltas::ZERO,
            Self::CutQuarter => IndicatorDeltas {
                gdp_growth: 0.15,
                cpi_inflation: 0.08,
                pce_inflation: 0.07,
                unemployment_rate: -0.08,
            },
            Self::CutFifty => IndicatorDeltas {
                gdp_growth: 0.28,
                cpi_inflation: 0.15,
                pce_inflation: 0.13,
                unemployment_rate: -0.15,
            },
        }
    }

    /// Hike / hold / cut, as a signed tone (+2 / 0 / -2). Used when
    /// comparing statement rhetoric against the actual move.
    pub fn action_tone(self) -> i32 {
        match self.bps().signum() {
            1 => 2,
            -1 => -2,
            _ => 0,
        }
    }
}

/// Additive deltas over the four rate-sensitive indicators.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct IndicatorDeltas {
    pub gdp_growth: f64,
    pub cpi_inflation: f64,
    pub pce_inflation: f64,
    pub unemployment_rate: f64,
}

impl IndicatorDeltas {
    pub const ZERO: IndicatorDeltas = IndicatorDeltas {
        gdp_growth: 0.0,
        cpi_inflation: 0.0,
        pce_inflation: 0.0,
        unemployment_rate: 0.0,
    };

    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            gdp_growth: self.gdp_growth * factor,
            cpi_inflation: self.cpi_inflation * factor,
            pce_inflation: self.pce_inflation * factor,
            unemployment_rate: self.unemployment_rate * factor,
        }
    }

    pub fn accumulate(&mut self, other: &IndicatorDeltas) {
        self.gdp_growth += other.gdp_growth;
        self.cpi_inflation += other.cpi_inflation;
        self.pce_inflation += other.pce_inflation;
        self.unemployment_rate += other.unemployment_rate;
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }
}
