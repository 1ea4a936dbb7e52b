//! Natural evolution of market levels between meetings.
//!
//! Each instrument reverts toward a fundamentals-derived baseline built
//! from growth, inflation, and the policy rate. Low credibility raises
//! both the noise on everything and the volatility baseline itself.

use crate::rng::GameRng;
use crate::state::{EconomyState, MarketState};
use serde::{Deserialize, Serialize};

pub const VIX_RANGE: (f64, f64) = (12.0, 45.0);
pub const TREASURY10Y_RANGE: (f64, f64) = (2.0, 6.0);
pub const TREASURY2Y_RANGE: (f64, f64) = (1.5, 5.5);
pub const DXY_RANGE: (f64, f64) = (85.0, 110.0);

/// Per-instrument changes from one evolution step, for delta reporting.
/// sp500 is in percent; the rest are level changes.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct MarketDrift {
    pub sp500_pct: f64,
    pub vix: f64,
    pub treasury10y: f64,
    pub treasury2y: f64,
    pub dxy: f64,
}

/// Evolve markets in place for one meeting transition.
pub fn evolve_markets(
    markets: &mut MarketState,
    economy: &EconomyState,
    current_rate: f64,
    credibility: f64,
    rng: &mut GameRng,
) -> MarketDrift {
    let cred_factor = credibility / 100.0;
    // Low credibility makes everything noisier.
    let noise_multiplier = 1.0 + 0.5 * (1.0 - cred_factor);

    // Equities: earnings from growth, drag from above-target inflation.
    let earnings_effect = economy.gdp_growth * 0.5;
    let inflation_drag = (economy.cpi_inflation - 2.0) * -0.3;
    let market_noise = rng.centered(1.5) * noise_multiplier;
    let sp500_pct = earnings_effect + inflation_drag + market_noise;
    markets.sp500 = (markets.sp500 * (1.0 + sp500_pct / 100.0)).round();

    // Volatility: stress from macro dispersion; low credibility raises
    // the resting level.
    let credibility_vix_penalty = (1.0 - cred_factor) * 4.0;
    let vix_base = 18.0
        + (economy.cpi_inflation - 2.0).abs() * 2.0
        + (economy.gdp_growth - 2.0).abs() * 1.5
        + credibility_vix_penalty;
    let vix_noise = rng.centered(3.0) * noise_multiplier;
    let vix_change = (vix_base - markets.vix) * 0.3 + vix_noise;
    markets.vix = (markets.vix + vix_change).clamp(VIX_RANGE.0, VIX_RANGE.1);

    // Long yields: inflation expectations plus growth.
    let yield10y_base = 2.5 + economy.cpi_inflation * 0.5 + economy.gdp_growth * 0.2;
    let yield10y_noise = rng.centered(0.1) * noise_multiplier;
    let treasury10y_change = (yield10y_base - markets.treasury10y) * 0.2 + yield10y_noise;
    markets.treasury10y =
        (markets.treasury10y + treasury10y_change).clamp(TREASURY10Y_RANGE.0, TREASURY10Y_RANGE.1);

    // Short yields: dominated by the policy rate path.
    let yield2y_base = current_rate * 0.9 + economy.cpi_inflation * 0.1;
    let yield2y_noise = rng.centered(0.08) * noise_multiplier;
    let treasury2y_change = (yield2y_base - markets.treasury2y) * 0.25 + yield2y_noise;
    markets.treasury2y =
        (markets.treasury2y + treasury2y_change).clamp(TREASURY2Y_RANGE.0, TREASURY2Y_RANGE.1);

    // Dollar: rate differential and growth.
    let dxy_base = 95.0 + (current_rate - 3.5) * 2.0 + economy.gdp_growth * 0.5;
    let dxy_noise = rng.centered(0.8) * noise_multiplier;
    let dxy_change = (dxy_base - markets.dxy) * 0.15 + dxy_noise;
    markets.dxy = (markets.dxy + dxy_change).clamp(DXY_RANGE.0, DXY_RANGE.1);

    MarketDrift {
        sp500_pct,
        vix: vix_change,
        treasury10y: treasury10y_change,
        treasury2y: treasury2y_change,
        dxy: dxy_change,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::{GameRng, StreamSlot};
    use crate::state::{GameState, StartingSnapshot};

    #[test]
    fn all_clamps_hold_under_extremes() {
        for seed in 0..300u64 {
            let base = GameState::create(&StartingSnapshot::default(), 8);
            let mut markets = base.markets;
            let mut economy = base.economy;
            economy.cpi_inflation = 8.0;
            economy.gdp_growth = -2.0;
            let mut rng = GameRng::new(seed, StreamSlot::Markets as u64);
            for _ in 0..8 {
                evolve_markets(&mut markets, &economy, 7.0, 5.0, &mut rng);
                assert!(markets.vix >= VIX_RANGE.0 && markets.vix <= VIX_RANGE.1);
                assert!(
                    markets.treasury10y >= TREASURY10Y_RANGE.0
                        && markets.treasury10y <= TREASURY10Y_RANGE.1
                );
                assert!(
                    markets.treasury2y >= TREASURY2Y_RANGE.0
                        && markets.treasury2y <= TREASURY2Y_RANGE.1
                );
                assert!(markets.dxy >= DXY_RANGE.0 && markets.dxy <= DXY_RANGE.1);
            }
        }
    }

    #[test]
    fn low_credibility_raises_volatility_baseline() {
        let mut high_sum = 0.0;
        let mut low_sum = 0.0;
        let n = 300;
        for seed in 0..n {
            let base = GameState::create(&StartingSnapshot::default(), 8);
            let economy = base.economy;
            let mut hi = base.markets;
            let mut lo = base.markets;
            let mut rng_hi = GameRng::new(seed, 21);
            let mut rng_lo = GameRng::new(seed, 21);
            evolve_markets(&mut hi, &economy, 3.625, 100.0, &mut rng_hi);
            evolve_markets(&mut lo, &economy, 3.625, 10.0, &mut rng_lo);
            high_sum += hi.vix;
            low_sum += lo.vix;
        }
        assert!(
            low_sum / n as f64 > high_sum / n as f64,
            "distrusted policymakers should face jumpier markets"
        );
    }
}
