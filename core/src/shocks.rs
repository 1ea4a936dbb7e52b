//! Economic shock catalog and the between-meeting shock roller.
//!
//! RULES:
//!   - Every shock type rolls independently each meeting, scaled by the
//!     difficulty curve. A type never activates twice concurrently.
//!   - Effects of simultaneously active shocks are additive.
//!   - A shock expires once its end meeting is no longer in the future.

use crate::decision::IndicatorDeltas;
use crate::rng::GameRng;
use crate::schedule::DifficultyProfile;
use crate::state::{ActiveShock, EconomyState, MarketState};
use crate::types::Meeting;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShockKind {
    OilSpike,
    BankingStress,
    TradeDisruption,
    LaborSurge,
    TechSelloff,
    InflationSurprise,
    GrowthScare,
    ConsumerStrength,
    HousingCooldown,
    SupplyDisruption,
    WagePriceSpiral,
    FiscalSurprise,
}

/// Sparse per-meeting deltas a shock applies while active.
/// sp500 is in percent (applied multiplicatively); the rest are additive.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ShockEffects {
    pub gdp_growth: f64,
    pub cpi_inflation: f64,
    pub pce_inflation: f64,
    pub core_inflation: f64,
    pub unemployment_rate: f64,
    pub payrolls_change: f64,
    pub sp500_pct: f64,
    pub vix: f64,
    pub treasury10y: f64,
    pub treasury2y: f64,
}

#[derive(Debug, Clone, Copy)]
pub struct ShockSpec {
    pub kind: ShockKind,
    pub name: &'static str,
    /// Base per-meeting activation probability, before difficulty scaling.
    pub probability: f64,
    /// Meetings the shock stays active.
    pub duration: Meeting,
    /// Earliest meeting the shock can roll. Dual-mandate tension shocks
    /// are held back until the mid game.
    pub min_meeting: Meeting,
    pub headline: &'static str,
    pub effects: ShockEffects,
}

const NONE: ShockEffects = ShockEffects {
    gdp_growth: 0.0,
    cpi_inflation: 0.0,
    pce_inflation: 0.0,
    core_inflation: 0.0,
    unemployment_rate: 0.0,
    payrolls_change: 0.0,
    sp500_pct: 0.0,
    vix: 0.0,
    treasury10y: 0.0,
    treasury2y: 0.0,
};

pub const SHOCK_CATALOG: [ShockSpec; 12] = [
    ShockSpec {
        kind: ShockKind::OilSpike,
        name: "Oil Price Spike",
        probability: 0.08,
        duration: 2,
        min_meeting: 1,
        headline: "Oil Prices Surge on Supply Disruption",
        effects: ShockEffects { cpi_inflation: 0.4, gdp_growth: -0.2, pce_inflation: 0.3, ..NONE },
    },
    ShockSpec {
        kind: ShockKind::BankingStress,
        name: "Banking Sector Stress",
        probability: 0.05,
        duration: 2,
        min_meeting: 1,
        headline: "Regional Banks Face Liquidity Pressures",
        effects: ShockEffects { gdp_growth: -0.3, vix: 5.0, treasury2y: -0.2, ..NONE },
    },
    ShockSpec {
        kind: ShockKind::TradeDisruption,
        name: "Trade Disruption",
        probability: 0.06,
        duration: 3,
        min_meeting: 1,
        headline: "New Tariffs Disrupt Supply Chains",
        effects: ShockEffects { cpi_inflation: 0.2, gdp_growth: -0.15, ..NONE },
    },
    ShockSpec {
        kind: ShockKind::LaborSurge,
        name: "Strong Labor Market",
        probability: 0.10,
        duration: 1,
        min_meeting: 1,
        headline: "Hiring Accelerates Across Sectors",
        effects: ShockEffects {
            payrolls_change: 80.0,
            unemployment_rate: -0.2,
            cpi_inflation: 0.1,
            ..NONE
        },
    },
    ShockSpec {
        kind: ShockKind::TechSelloff,
        name: "Tech Sector Correction",
        probability: 0.07,
        duration: 1,
        min_meeting: 1,
        headline: "Tech Stocks Slide on Valuation Concerns",
        effects: ShockEffects { sp500_pct: -3.0, vix: 4.0, ..NONE },
    },
    ShockSpec {
        kind: ShockKind::InflationSurprise,
        name: "Inflation Surprise",
        probability: 0.08,
        duration: 1,
        min_meeting: 1,
        headline: "Consumer Prices Rise More Than Expected",
        effects: ShockEffects {
            cpi_inflation: 0.3,
            pce_inflation: 0.25,
            core_inflation: 0.2,
            ..NONE
        },
    },
    ShockSpec {
        kind: ShockKind::GrowthScare,
        name: "Growth Scare",
        probability: 0.06,
        duration: 1,
        min_meeting: 1,
        headline: "Economic Data Signals Potential Slowdown",
        effects: ShockEffects { gdp_growth: -0.4, sp500_pct: -2.0, treasury10y: -0.15, ..NONE },
    },
    ShockSpec {
        kind: ShockKind::ConsumerStrength,
        name: "Consumer Spending Surge",
        probability: 0.08,
        duration: 1,
        min_meeting: 1,
        headline: "Retail Sales Beat Expectations",
        effects: ShockEffects { gdp_growth: 0.3, cpi_inflation: 0.15, sp500_pct: 1.5, ..NONE },
    },
    ShockSpec {
        kind: ShockKind::HousingCooldown,
        name: "Housing Market Cooling",
        probability: 0.07,
        duration: 2,
        min_meeting: 1,
        headline: "Home Sales Decline as Rates Bite",
        effects: ShockEffects { gdp_growth: -0.15, cpi_inflation: -0.1, ..NONE },
    },
    ShockSpec {
        kind: ShockKind::SupplyDisruption,
        name: "Supply Chain Crisis",
        probability: 0.06,
        duration: 2,
        min_meeting: 3,
        headline: "Global Supply Disruption Drives Prices Higher, Output Lower",
        effects: ShockEffects {
            cpi_inflation: 0.35,
            pce_inflation: 0.3,
            gdp_growth: -0.3,
            unemployment_rate: 0.15,
            ..NONE
        },
    },
    ShockSpec {
        kind: ShockKind::WagePriceSpiral,
        name: "Wage-Price Pressure",
        probability: 0.07,
        duration: 2,
        min_meeting: 3,
        headline: "Wages Surge as Workers Demand Inflation Protection",
        effects: ShockEffects {
            payrolls_change: 60.0,
            unemployment_rate: -0.15,
            cpi_inflation: 0.3,
            pce_inflation: 0.25,
            ..NONE
        },
    },
    ShockSpec {
        kind: ShockKind::FiscalSurprise,
        name: "Fiscal Stimulus Surprise",
        probability: 0.05,
        duration: 2,
        min_meeting: 4,
        headline: "Surprise Spending Bill Boosts Growth, Complicates Inflation Fight",
        effects: ShockEffects {
            gdp_growth: 0.35,
            cpi_inflation: 0.25,
            pce_inflation: 0.2,
            sp500_pct: 1.5,
            ..NONE
        },
    },
];

impl ShockKind {
    pub fn spec(self) -> &'static ShockSpec {
        SHOCK_CATALOG
            .iter()
            .find(|s| s.kind == self)
            .expect("every ShockKind has a catalog entry")
    }
}

/// Roll every inactive shock type against its scaled probability.
/// Returns newly activated shocks; the caller appends them to the
/// active set and logs the headlines.
pub fn roll_for_shocks(
    meeting: Meeting,
    active: &[ActiveShock],
    rng: &mut GameRng,
) -> Vec<ActiveShock> {
    let difficulty = DifficultyProfile::for_meeting(meeting);
    let mut new_shocks = Vec::new();

    for spec in &SHOCK_CATALOG {
        if active.iter().any(|s| s.kind == spec.kind) {
            continue;
        }
        if meeting < spec.min_meeting {
            continue;
        }
        let scaled = spec.probability * difficulty.shock_prob_multiplier;
        if rng.chance(scaled) {
            new_shocks.push(ActiveShock {
                kind: spec.kind,
                start_meeting: meeting,
                end_meeting: meeting + spec.duration,
            });
        }
    }

    new_shocks
}

/// Apply every active shock's deltas to the economy and markets.
pub fn apply_shock_effects(
    economy: &mut EconomyState,
    markets: &mut MarketState,
    active: &[ActiveShock],
) -> IndicatorDeltas {
    let mut applied = IndicatorDeltas::ZERO;
    for shock in active {
        let fx = shock.kind.spec().effects;
        economy.gdp_growth += fx.gdp_growth;
        economy.cpi_inflation += fx.cpi_inflation;
        economy.pce_inflation += fx.pce_inflation;
        economy.core_inflation += fx.core_inflation;
        economy.unemployment_rate += fx.unemployment_rate;
        economy.payrolls_change += fx.payrolls_change;
        markets.sp500 *= 1.0 + fx.sp500_pct / 100.0;
        markets.vix += fx.vix;
        markets.treasury10y += fx.treasury10y;
        markets.treasury2y += fx.treasury2y;
        applied.accumulate(&IndicatorDeltas {
            gdp_growth: fx.gdp_growth,
            cpi_inflation: fx.cpi_inflation,
            pce_inflation: fx.pce_inflation,
            unemployment_rate: fx.unemployment_rate,
        });
    }
    applied
}

/// Drop shocks whose window has closed.
pub fn expire_shocks(active: &mut Vec<ActiveShock>, meeting: Meeting) {
    active.retain(|s| s.end_meeting > meeting);
}
