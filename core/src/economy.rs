//! Natural evolution of the macro indicators between meetings.
//!
//! Each indicator reverts toward its long-run level with noise on top,
//! both scaled by the difficulty curve. Inflation additionally carries
//! a momentum term (unanchored expectations) and Phillips-curve
//! pressure from labor-market slack. Credibility feeds back into how
//! strongly inflation expectations stay anchored.
//!
//! Indicators update in a fixed order because later rules read earlier
//! results: GDP first, then CPI (reads unemployment), then PCE/core
//! (read updated CPI), then unemployment and payrolls (read updated
//! GDP).

use crate::decision::IndicatorDeltas;
use crate::rng::GameRng;
use crate::schedule::DifficultyProfile;
use crate::state::EconomyState;
use crate::types::Meeting;

pub const UNEMPLOYMENT_FLOOR: f64 = 3.5;
pub const PAYROLLS_RANGE: (f64, f64) = (-200.0, 400.0);

/// Evolve the economy in place for one meeting transition. Returns the
/// per-indicator changes for delta reporting.
pub fn evolve_economy(
    economy: &mut EconomyState,
    meeting: Meeting,
    credibility: f64,
    inflation_target: f64,
    gdp_target: f64,
    rng: &mut GameRng,
) -> IndicatorDeltas {
    let difficulty = DifficultyProfile::for_meeting(meeting);
    let cred_factor = credibility / 100.0;

    // GDP: mean reversion toward trend, weaker in the late game.
    let gdp_reversion =
        (gdp_target - economy.gdp_growth) * 0.1 * difficulty.mean_reversion_strength;
    let gdp_noise = rng.centered(0.2) * difficulty.noise_amplitude;
    let gdp_change = gdp_reversion + gdp_noise;
    economy.gdp_growth += gdp_change;

    // Phillips curve: tight labor markets push inflation up quickly,
    // slack pulls it down slowly.
    let phillips_pressure = if economy.unemployment_rate < 4.0 {
        (4.0 - economy.unemployment_rate) * 0.15
    } else if economy.unemployment_rate > 5.0 {
        (5.0 - economy.unemployment_rate) * 0.06
    } else {
        0.0
    };

    // CPI: sticky, momentum-carrying, anchored by credibility.
    // Low credibility weakens reversion and strengthens momentum.
    let cred_reversion_factor = 0.4 + 0.6 * cred_factor;
    let inflation_reversion = (inflation_target - economy.cpi_inflation)
        * 0.05
        * difficulty.mean_reversion_strength
        * cred_reversion_factor;
    let momentum_persistence = 0.7 + 0.2 * (1.0 - cred_factor);
    economy.inflation_momentum = economy.inflation_momentum
        * momentum_persistence
        * difficulty.inflation_stickiness
        + rng.centered(0.1) * difficulty.noise_amplitude;
    let inflation_noise = rng.centered(0.15) * difficulty.noise_amplitude + economy.inflation_momentum;
    let cpi_change = inflation_reversion + inflation_noise + phillips_pressure;
    economy.cpi_inflation += cpi_change;

    // PCE tracks CPI with a partial lag.
    let pce_change = (economy.cpi_inflation - economy.pce_inflation) * 0.3
        + rng.centered(0.1) * difficulty.noise_amplitude;
    economy.pce_inflation += pce_change;

    // Core is smoother still.
    let core_change = (economy.cpi_inflation - economy.core_inflation) * 0.2
        + rng.centered(0.08) * difficulty.noise_amplitude;
    economy.core_inflation += core_change;

    // Unemployment: inverse to growth, hard floor.
    let unemployment_from_gdp = -economy.gdp_growth * 0.15;
    let unemployment_noise = rng.centered(0.15) * difficulty.noise_amplitude;
    let unemployment_change = unemployment_from_gdp + unemployment_noise;
    economy.unemployment_rate =
        (economy.unemployment_rate + unemployment_change).max(UNEMPLOYMENT_FLOOR);

    // Payrolls: linear in growth, reverting toward zero, clamped.
    let payrolls_base = economy.gdp_growth * 50.0;
    let payrolls_noise = rng.centered(60.0) * difficulty.noise_amplitude;
    let payrolls_change = payrolls_base + payrolls_noise - economy.payrolls_change * 0.2;
    economy.payrolls_change = (economy.payrolls_change + payrolls_change)
        .clamp(PAYROLLS_RANGE.0, PAYROLLS_RANGE.1)
        .round();

    IndicatorDeltas {
        gdp_growth: gdp_change,
        cpi_inflation: cpi_change,
        pce_inflation: pce_change,
        unemployment_rate: unemployment_change,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::{GameRng, StreamSlot};
    use crate::state::{GameState, StartingSnapshot};

    fn run_once(credibility: f64, seed: u64) -> (EconomyState, IndicatorDeltas) {
        let mut economy = GameState::create(&StartingSnapshot::default(), 8).economy;
        let mut rng = GameRng::new(seed, StreamSlot::Economy as u64);
        let deltas = evolve_economy(&mut economy, 3, credibility, 2.0, 2.0, &mut rng);
        (economy, deltas)
    }

    #[test]
    fn unemployment_respects_floor() {
        for seed in 0..200u64 {
            let mut economy = GameState::create(&StartingSnapshot::default(), 8).economy;
            economy.unemployment_rate = 3.5;
            economy.gdp_growth = 4.0; // strong growth pushes unemployment down
            let mut rng = GameRng::new(seed, StreamSlot::Economy as u64);
            evolve_economy(&mut economy, 7, 80.0, 2.0, 2.0, &mut rng);
            assert!(economy.unemployment_rate >= UNEMPLOYMENT_FLOOR);
        }
    }

    #[test]
    fn payrolls_stay_clamped_and_rounded() {
        for seed in 0..200u64 {
            let mut economy = GameState::create(&StartingSnapshot::default(), 8).economy;
            economy.payrolls_change = 390.0;
            economy.gdp_growth = 3.8;
            let mut rng = GameRng::new(seed, StreamSlot::Economy as u64);
            evolve_economy(&mut economy, 8, 60.0, 2.0, 2.0, &mut rng);
            assert!(economy.payrolls_change >= PAYROLLS_RANGE.0);
            assert!(economy.payrolls_change <= PAYROLLS_RANGE.1);
            assert_eq!(economy.payrolls_change, economy.payrolls_change.round());
        }
    }

    #[test]
    fn low_credibility_weakens_inflation_anchoring() {
        // Average the reversion pull over many seeds: with inflation far
        // above target, high credibility should pull CPI back harder.
        let mut high_sum = 0.0;
        let mut low_sum = 0.0;
        let n = 300;
        for seed in 0..n {
            let mut hi = GameState::create(&StartingSnapshot::default(), 8).economy;
            hi.cpi_inflation = 5.0;
            let mut lo = hi;
            let mut rng_hi = GameRng::new(seed, 11);
            let mut rng_lo = GameRng::new(seed, 11);
            evolve_economy(&mut hi, 1, 100.0, 2.0, 2.0, &mut rng_hi);
            evolve_economy(&mut lo, 1, 0.0, 2.0, 2.0, &mut rng_lo);
            high_sum += hi.cpi_inflation;
            low_sum += lo.cpi_inflation;
        }
        assert!(
            high_sum / (n as f64) < low_sum / n as f64,
            "credible policy should anchor inflation faster"
        );
    }

    #[test]
    fn deterministic_given_seed() {
        let (a, _) = run_once(70.0, 99);
        let (b, _) = run_once(70.0, 99);
        assert_eq!(a, b);
    }
}
