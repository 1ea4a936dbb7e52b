//! Immediate market reaction to a policy decision.
//!
//! The sign of every instrument's move is fully determined by the
//! surprise (decision minus what the market priced); only magnitudes
//! are stochastic. Low credibility amplifies everything: at 100 the
//! multiplier is 1.0, at 0 every decision lands twice as hard.

use crate::decision::RateDecision;
use crate::rng::GameRng;
use crate::state::MarketState;
use crate::types::Bps;
use serde::{Deserialize, Serialize};

pub struct ReactionParams<'a> {
    pub decision: RateDecision,
    pub market_expected_bps: Bps,
    pub hawk_score: i32,
    pub markets: &'a MarketState,
    pub gdp_forecast: f64,
    pub unemployment_forecast: f64,
    pub inflation_forecast: f64,
    pub credibility: f64,
    pub statement_count: usize,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct InstrumentMove {
    /// New level after the reaction.
    pub value: f64,
    /// Move size: percent for equities and the dollar, level change for
    /// the VIX, basis points for yields.
    pub change: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SectorMoves {
    pub tech: f64,
    pub financials: f64,
    pub utilities: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ProjectionShifts {
    pub gdp: f64,
    pub unemployment: f64,
    pub inflation: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PressQuestion {
    pub outlet: String,
    pub question: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketReaction {
    pub sp500: InstrumentMove,
    pub vix: InstrumentMove,
    pub treasury10y: InstrumentMove,
    pub treasury2y: InstrumentMove,
    pub dxy: InstrumentMove,
    pub sectors: SectorMoves,
    pub credit_spread: f64,
    pub projections: ProjectionShifts,
    pub headline: String,
    pub surprise_bps: Bps,
    pub press_questions: Vec<PressQuestion>,
}

pub fn calculate_market_reaction(params: &ReactionParams, rng: &mut GameRng) -> MarketReaction {
    let decision_bps = params.decision.bps();
    let surprise = decision_bps - params.market_expected_bps;
    let surprise_abs = surprise.abs() as f64;

    let cred_multiplier = 1.0 + (100.0 - params.credibility) / 100.0;

    struct Moves {
        sp500_pct: f64,
        vix: f64,
        yield10y: f64,
        yield2y: f64,
        dxy: f64,
        tech: f64,
        financials: f64,
        utilities: f64,
        credit_spread: f64,
    }

    let mut moves = if surprise < 0 {
        // Dovish surprise: markets rally.
        let sp500_pct = (surprise_abs * 0.4 + rng.next_f64() * 0.3) * cred_multiplier;
        Moves {
            sp500_pct,
            vix: (-surprise_abs * 0.08 - rng.next_f64() * 0.5) * cred_multiplier,
            yield10y: (-surprise_abs * 0.03 - rng.next_f64() * 0.02) * cred_multiplier,
            yield2y: (-surprise_abs * 0.05 - rng.next_f64() * 0.02) * cred_multiplier,
            dxy: (-surprise_abs * 0.1 - rng.next_f64() * 0.1) * cred_multiplier,
            tech: sp500_pct * 1.3,
            financials: sp500_pct * 0.7,
            utilities: sp500_pct * 0.5,
            credit_spread: -surprise_abs * 0.5 * cred_multiplier,
        }
    } else if surprise > 0 {
        // Hawkish surprise: markets sell off.
        let sp500_pct = (-surprise_abs * 0.5 - rng.next_f64() * 0.4) * cred_multiplier;
        Moves {
            sp500_pct,
            vix: (surprise_abs * 0.15 + rng.next_f64() * 0.8) * cred_multiplier,
            yield10y: (surprise_abs * 0.04 + rng.next_f64() * 0.02) * cred_multiplier,
            yield2y: (surprise_abs * 0.06 + rng.next_f64() * 0.03) * cred_multiplier,
            dxy: (surprise_abs * 0.15 + rng.next_f64() * 0.1) * cred_multiplier,
            tech: sp500_pct * 1.4,
            financials: sp500_pct * 0.6,
            utilities: sp500_pct * 0.8,
            credit_spread: surprise_abs * 0.8 * cred_multiplier,
        }
    } else {
        // In line with expectations: trusted policymakers get calm tape.
        let calm_factor = 0.5 + 0.5 * (params.credibility / 100.0);
        let sp500_pct = rng.centered(0.3) * calm_factor;
        Moves {
            sp500_pct,
            vix: rng.centered(0.4) * calm_factor,
            yield10y: rng.centered(0.02) * calm_factor,
            yield2y: rng.centered(0.02) * calm_factor,
            dxy: rng.centered(0.1) * calm_factor,
            tech: sp500_pct * 1.1,
            financials: sp500_pct * 0.9,
            utilities: sp500_pct * 0.8,
            credit_spread: rng.centered(0.3) * calm_factor,
        }
    };

    // Statement tone pushes on top of the rate surprise.
    if params.statement_count > 0 {
        let tone_effect = params.hawk_score as f64 * 0.08;
        moves.sp500_pct -= tone_effect;
        moves.yield10y += tone_effect * 0.01;
        moves.tech -= tone_effect * 1.2;
    }

    // Shifts to the published economic projections.
    let (gdp_shift, unemployment_shift, inflation_shift) = if decision_bps < 0 {
        let mag = decision_bps.abs() as f64;
        (mag * 0.004, -mag * 0.002, mag * 0.003)
    } else if decision_bps > 0 {
        let mag = decision_bps as f64;
        (-mag * 0.006, mag * 0.003, -mag * 0.004)
    } else {
        (0.0, 0.0, 0.0)
    };

    let headline = if surprise < -25 {
        "Fed Surprises with Aggressive Cut"
    } else if surprise < 0 {
        "Fed Delivers Dovish Surprise"
    } else if surprise == 0 && decision_bps == 0 {
        "Fed Holds Steady as Expected"
    } else if surprise > 25 {
        "Fed Shocks with Aggressive Hike"
    } else if surprise > 0 {
        "Hawkish Fed Surprises Markets"
    } else {
        "Fed Decision in Line"
    };

    let press_questions = vec![
        PressQuestion {
            outlet: "WSJ".to_string(),
            question: "What drove today's decision?".to_string(),
        },
        PressQuestion {
            outlet: "CNBC".to_string(),
            question: "When do you expect the next move?".to_string(),
        },
        PressQuestion {
            outlet: "Reuters".to_string(),
            question: "How do tariffs factor in?".to_string(),
        },
    ];

    let markets = params.markets;
    MarketReaction {
        sp500: InstrumentMove {
            value: markets.sp500 + markets.sp500 * moves.sp500_pct / 100.0,
            change: moves.sp500_pct,
        },
        vix: InstrumentMove {
            value: markets.vix + moves.vix,
            change: moves.vix,
        },
        treasury10y: InstrumentMove {
            value: markets.treasury10y + moves.yield10y,
            change: moves.yield10y * 100.0,
        },
        treasury2y: InstrumentMove {
            value: markets.treasury2y + moves.yield2y,
            change: moves.yield2y * 100.0,
        },
        dxy: InstrumentMove {
            value: markets.dxy + moves.dxy,
            change: moves.dxy,
        },
        sectors: SectorMoves {
            tech: moves.tech,
            financials: moves.financials,
            utilities: moves.utilities,
        },
        credit_spread: moves.credit_spread,
        projections: ProjectionShifts {
            gdp: params.gdp_forecast + gdp_shift,
            unemployment: params.unemployment_forecast + unemployment_shift,
            inflation: params.inflation_forecast + inflation_shift,
        },
        headline: headline.to_string(),
        surprise_bps: surprise,
        press_questions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::{GameRng, StreamSlot};
    use crate::state::{GameState, StartingSnapshot};

    fn params(markets: &MarketState, decision: RateDecision, expected: Bps) -> ReactionParams {
        ReactionParams {
            decision,
            market_expected_bps: expected,
            hawk_score: 0,
            markets,
            gdp_forecast: 1.8,
            unemployment_forecast: 4.5,
            inflation_forecast: 2.5,
            credibility: 100.0,
            statement_count: 0,
        }
    }

    #[test]
    fn hawkish_surprise_sign_is_deterministic() {
        let state = GameState::create(&StartingSnapshot::default(), 8);
        for seed in 0..500u64 {
            let mut rng = GameRng::new(seed, StreamSlot::Reaction as u64);
            let reaction = calculate_market_reaction(
                &params(&state.markets, RateDecision::HikeFifty, 0),
                &mut rng,
            );
            assert!(reaction.sp500.change < 0.0, "equities must fall on a hawkish surprise");
            assert!(reaction.vix.change > 0.0, "volatility must rise on a hawkish surprise");
            assert_eq!(reaction.surprise_bps, 50);
        }
    }

    #[test]
    fn dovish_surprise_rallies_equities() {
        let state = GameState::create(&StartingSnapshot::default(), 8);
        for seed in 0..200u64 {
            let mut rng = GameRng::new(seed, StreamSlot::Reaction as u64);
            let reaction = calculate_market_reaction(
                &params(&state.markets, RateDecision::CutQuarter, 0),
                &mut rng,
            );
            assert!(reaction.sp500.change > 0.0);
            assert!(reaction.vix.change < 0.0);
        }
    }

    #[test]
    fn low_credibility_amplifies_the_move() {
        let state = GameState::create(&StartingSnapshot::default(), 8);
        let mut trusted_sum = 0.0;
        let mut distrusted_sum = 0.0;
        for seed in 0..200u64 {
            let mut rng_a = GameRng::new(seed, 5);
            let mut rng_b = GameRng::new(seed, 5);
            let mut p = params(&state.markets, RateDecision::HikeFifty, 0);
            p.credibility = 100.0;
            trusted_sum += calculate_market_reaction(&p, &mut rng_a).sp500.change.abs();
            p.credibility = 0.0;
            distrusted_sum += calculate_market_reaction(&p, &mut rng_b).sp500.change.abs();
        }
        assert!(distrusted_sum > trusted_sum * 1.5);
    }

    #[test]
    fn in_line_hold_generates_the_expected_headline() {
        let state = GameState::create(&StartingSnapshot::default(), 8);
        let mut rng = GameRng::new(3, StreamSlot::Reaction as u64);
        let reaction =
            calculate_market_reaction(&params(&state.markets, RateDecision::Hold, 0), &mut rng);
        assert_eq!(reaction.headline, "Fed Holds Steady as Expected");
        assert_eq!(reaction.surprise_bps, 0);
    }
}
