//! Meeting scoring: three axes, letter grades, and the hawk-o-meter.

use crate::decision::RateDecision;
use crate::phrases::phrase_by_id;
use crate::reaction::MarketReaction;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Grade {
    A,
    B,
    C,
    D,
    F,
}

impl Grade {
    pub fn for_score(score: f64) -> Self {
        if score >= 90.0 {
            Self::A
        } else if score >= 80.0 {
            Self::B
        } else if score >= 70.0 {
            Self::C
        } else if score >= 60.0 {
            Self::D
        } else {
            Self::F
        }
    }

    pub fn text(&self) -> &'static str {
        match self {
            Self::A => "Excellent",
            Self::B => "Good",
            Self::C => "Adequate",
            Self::D => "Poor",
            Self::F => "Failing",
        }
    }

    /// Color token for the UI theme; the engine attaches no meaning.
    pub fn color_token(&self) -> &'static str {
        match self {
            Self::A => "#22c55e",
            Self::B => "#84cc16",
            Self::C => "#eab308",
            Self::D => "#f97316",
            Self::F => "#ef4444",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AxisScore {
    pub score: f64,
    pub grade: Grade,
}

impl AxisScore {
    fn new(raw: f64) -> Self {
        Self {
            score: raw.max(0.0),
            grade: Grade::for_score(raw),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MeetingScore {
    pub market_stability: AxisScore,
    pub credibility: AxisScore,
    pub mandate_balance: AxisScore,
    pub overall: AxisScore,
}

/// Grade one meeting. Pure: no state, no randomness.
pub fn calculate_score(
    reaction: &MarketReaction,
    decision: RateDecision,
    hawk_score: i32,
) -> MeetingScore {
    let mut market_stability: f64 = 100.0;
    let mut credibility: f64 = 100.0;
    let mut mandate_balance: f64 = 100.0;

    // Market stability: penalize large equity moves.
    let abs_sp_change = reaction.sp500.change.abs();
    if abs_sp_change > 2.0 {
        market_stability -= 40.0;
    } else if abs_sp_change > 1.0 {
        market_stability -= 20.0;
    } else if abs_sp_change > 0.5 {
        market_stability -= 10.0;
    }

    // Credibility: penalize rhetoric that fights the action.
    let tone_mismatch = (hawk_score - decision.action_tone()).abs();
    if tone_mismatch > 4 {
        credibility -= 40.0;
    } else if tone_mismatch > 2 {
        credibility -= 20.0;
    }

    // Mandate balance: penalize extreme moves, asymmetrically.
    let decision_bps = decision.bps();
    if decision_bps < -25 {
        mandate_balance -= 20.0;
    }
    if decision_bps > 25 {
        mandate_balance -= 15.0;
    }

    let overall = ((market_stability + credibility + mandate_balance) / 3.0).round();

    MeetingScore {
        market_stability: AxisScore::new(market_stability),
        credibility: AxisScore::new(credibility),
        mandate_balance: AxisScore::new(mandate_balance),
        overall: AxisScore::new(overall),
    }
}

/// Sum of hawkishness weights over the selected statement ids.
/// Unknown ids contribute nothing.
pub fn calculate_hawk_score(selected: &[String]) -> i32 {
    selected
        .iter()
        .filter_map(|id| phrase_by_id(id))
        .map(|p| p.hawk_score)
        .sum()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HawkLabel {
    pub label: &'static str,
    pub color_token: &'static str,
}

/// Five-bucket classification of a statement's overall tone.
pub fn hawk_label(score: i32) -> HawkLabel {
    if score >= 4 {
        HawkLabel { label: "VERY HAWKISH", color_token: "#dc2626" }
    } else if score >= 2 {
        HawkLabel { label: "HAWKISH", color_token: "#f97316" }
    } else if score >= -1 {
        HawkLabel { label: "NEUTRAL", color_token: "#a3a3a3" }
    } else if score >= -3 {
        HawkLabel { label: "DOVISH", color_token: "#22c55e" }
    } else {
        HawkLabel { label: "VERY DOVISH", color_token: "#15803d" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::GameRng;
    use crate::reaction::{calculate_market_reaction, ReactionParams};
    use crate::state::{GameState, StartingSnapshot};

    fn reaction_with_sp_change(change: f64) -> MarketReaction {
        let state = GameState::create(&StartingSnapshot::default(), 8);
        let mut rng = GameRng::new(1, 5);
        let mut reaction = calculate_market_reaction(
            &ReactionParams {
                decision: RateDecision::Hold,
                market_expected_bps: 0,
                hawk_score: 0,
                markets: &state.markets,
                gdp_forecast: 1.8,
                unemployment_forecast: 4.5,
                inflation_forecast: 2.5,
                credibility: 100.0,
                statement_count: 0,
            },
            &mut rng,
        );
        reaction.sp500.change = change;
        reaction
    }

    #[test]
    fn calm_consistent_hold_scores_an_a() {
        let reaction = reaction_with_sp_change(0.1);
        let score = calculate_score(&reaction, RateDecision::Hold, 0);
        assert_eq!(score.overall.grade, Grade::A);
        assert_eq!(score.overall.score, 100.0);
    }

    #[test]
    fn violent_market_move_drags_stability() {
        let reaction = reaction_with_sp_change(-2.5);
        let score = calculate_score(&reaction, RateDecision::Hold, 0);
        assert_eq!(score.market_stability.score, 60.0);
        assert_eq!(score.market_stability.grade, Grade::D);
    }

    #[test]
    fn extreme_moves_cost_mandate_balance_asymmetrically() {
        let reaction = reaction_with_sp_change(0.1);
        let cut = calculate_score(&reaction, RateDecision::CutFifty, -4);
        let hike = calculate_score(&reaction, RateDecision::HikeFifty, 4);
        assert_eq!(cut.mandate_balance.score, 80.0);
        assert_eq!(hike.mandate_balance.score, 85.0);
    }

    #[test]
    fn hawk_score_sums_selected_weights() {
        // in1 (+2), in3 (-1), gd1 (+3) => 4
        let selected = vec!["in1".to_string(), "in3".to_string(), "gd1".to_string()];
        assert_eq!(calculate_hawk_score(&selected), 4);
        assert_eq!(hawk_label(4).label, "VERY HAWKISH");
    }

    #[test]
    fn hawk_label_buckets() {
        assert_eq!(hawk_label(5).label, "VERY HAWKISH");
        assert_eq!(hawk_label(2).label, "HAWKISH");
        assert_eq!(hawk_label(0).label, "NEUTRAL");
        assert_eq!(hawk_label(-2).label, "DOVISH");
        assert_eq!(hawk_label(-4).label, "VERY DOVISH");
    }

    #[test]
    fn unknown_statement_ids_are_ignored() {
        let selected = vec!["zz9".to_string(), "in2".to_string()];
        assert_eq!(calculate_hawk_score(&selected), 1);
    }
}
