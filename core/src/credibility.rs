//! Credibility: does the policymaker do what they signaled?
//!
//! Reputation is asymmetric. Gains are capped at +3 per meeting; losses
//! are uncapped and compound by 1.3x once the score is already below
//! 50. The dominant input is whether this meeting's action honors the
//! guidance published at the previous meeting.

use crate::decision::RateDecision;
use crate::state::{DotProjection, EconomyState};
use crate::types::Meeting;

pub const MAX_GAIN_PER_MEETING: f64 = 3.0;
const LOW_CREDIBILITY_PENALTY_FACTOR: f64 = 1.3;

pub struct CredibilityInputs<'a> {
    pub decision: RateDecision,
    pub hawk_score: i32,
    /// Equity move from the market reaction, percent.
    pub sp500_change_pct: f64,
    /// Guidance statement ids selected at the previous meeting.
    pub prior_guidance: &'a [String],
    pub economy: &'a EconomyState,
    pub dot_projections: &'a [DotProjection],
    pub meeting: Meeting,
    /// Policy rate after this meeting's decision.
    pub rate_after: f64,
    /// Credibility before this update.
    pub credibility: f64,
}

/// Compute this meeting's credibility change, already capped and
/// amplified. The caller clamps the running score to [0, 100].
pub fn credibility_delta(inputs: &CredibilityInputs) -> f64 {
    let mut change: f64 = 0.0;
    let decision_bps = inputs.decision.bps();
    let guided = |id: &str| inputs.prior_guidance.iter().any(|g| g == id);

    // Forward-guidance consistency: the biggest factor.
    if guided("gd4") {
        // Signaled "further easing may be appropriate".
        change += if decision_bps > 0 {
            -15.0 // severe reversal: guided easing, then hiked
        } else if decision_bps == 0 {
            -6.0 // mild reversal: guided easing, then held
        } else {
            2.0 // followed through
        };
    } else if guided("gd1") {
        // Signaled "further rate increases may be appropriate".
        change += if decision_bps < 0 {
            -12.0
        } else if decision_bps == 0 {
            -4.0
        } else {
            2.0
        };
    } else if guided("gd2") {
        // Data-dependent guidance: acting decisively reads as conviction.
        change += if decision_bps != 0 { 3.0 } else { 1.0 };
    } else if guided("gd3") {
        // Maximally flexible guidance is consistent with anything.
        change += 1.0;
    }

    // Action-rhetoric consistency this meeting.
    let tone_mismatch = (inputs.hawk_score - inputs.decision.action_tone()).abs();
    change += if tone_mismatch > 3 {
        -6.0
    } else if tone_mismatch > 1 {
        -2.0
    } else {
        1.0
    };

    // Market stability.
    if inputs.sp500_change_pct.abs() > 2.0 {
        change -= 4.0;
    } else if inputs.sp500_change_pct.abs() < 0.5 {
        change += 1.0;
    }

    // Appropriate response to conditions.
    let economy = inputs.economy;
    if economy.pce_inflation > 3.0 && decision_bps < 0 {
        change -= 5.0; // cutting with high inflation
    } else if economy.pce_inflation < 2.0 && decision_bps > 0 {
        change -= 3.0; // hiking with low inflation
    } else if economy.gdp_growth < 0.5 && decision_bps > 0 {
        change -= 4.0; // hiking into weakness
    }

    // Dot-plot delivery: reward hitting your own projection.
    let latest_dot = inputs
        .dot_projections
        .iter()
        .filter(|d| d.target_meeting == inputs.meeting)
        .next_back();
    if let Some(dot) = latest_dot {
        let deviation = (inputs.rate_after - dot.projected_rate).abs();
        change += if deviation < 0.01 {
            4.0
        } else if deviation <= 0.25 {
            1.0
        } else if deviation <= 0.50 {
            -5.0
        } else {
            -12.0
        };
    }

    // Asymmetric bounds: hard to build, easy to lose.
    change = change.min(MAX_GAIN_PER_MEETING);
    if change < 0.0 && inputs.credibility < 50.0 {
        change *= LOW_CREDIBILITY_PENALTY_FACTOR;
    }

    change
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{GameState, StartingSnapshot};

    fn base_inputs<'a>(
        economy: &'a EconomyState,
        prior_guidance: &'a [String],
        dots: &'a [DotProjection],
    ) -> CredibilityInputs<'a> {
        CredibilityInputs {
            decision: RateDecision::Hold,
            hawk_score: 0,
            sp500_change_pct: 0.1,
            prior_guidance,
            economy,
            dot_projections: dots,
            meeting: 3,
            rate_after: 3.625,
            credibility: 80.0,
        }
    }

    fn neutral_economy() -> EconomyState {
        let mut economy = GameState::create(&StartingSnapshot::default(), 8).economy;
        economy.pce_inflation = 2.5;
        economy.gdp_growth = 2.0;
        economy
    }

    #[test]
    fn gains_cap_at_three() {
        let economy = neutral_economy();
        let guidance = vec!["gd2".to_string()];
        let mut inputs = base_inputs(&economy, &guidance, &[]);
        inputs.decision = RateDecision::HikeQuarter;
        inputs.hawk_score = 2;
        // gd2 follow-through (+3), consistent tone (+1), calm market (+1)
        // would sum to +5 uncapped.
        let delta = credibility_delta(&inputs);
        assert_eq!(delta, MAX_GAIN_PER_MEETING);
    }

    #[test]
    fn easing_guidance_reversal_is_worst() {
        let economy = neutral_economy();
        let guidance = vec!["gd4".to_string()];
        let mut hiked = base_inputs(&economy, &guidance, &[]);
        hiked.decision = RateDecision::HikeQuarter;
        hiked.hawk_score = 2;
        let mut held = base_inputs(&economy, &guidance, &[]);
        held.decision = RateDecision::Hold;
        held.hawk_score = 0;
        let mut followed = base_inputs(&economy, &guidance, &[]);
        followed.decision = RateDecision::CutQuarter;
        followed.hawk_score = -2;

        let d_hiked = credibility_delta(&hiked);
        let d_held = credibility_delta(&held);
        let d_followed = credibility_delta(&followed);
        assert!(d_hiked < d_held, "reversal beats mild reversal in severity");
        assert!(d_held < d_followed, "follow-through is rewarded");
        assert!(d_followed > 0.0);
    }

    #[test]
    fn losses_amplify_below_fifty() {
        let economy = neutral_economy();
        let guidance = vec!["gd4".to_string()];
        let mut strong = base_inputs(&economy, &guidance, &[]);
        strong.decision = RateDecision::HikeQuarter;
        strong.hawk_score = 2;
        strong.credibility = 90.0;
        let mut weak = base_inputs(&economy, &guidance, &[]);
        weak.decision = RateDecision::HikeQuarter;
        weak.hawk_score = 2;
        weak.credibility = 40.0;

        let d_strong = credibility_delta(&strong);
        let d_weak = credibility_delta(&weak);
        assert!(d_weak < d_strong, "same mistake costs more when already weak");
        assert!((d_weak - d_strong * LOW_CREDIBILITY_PENALTY_FACTOR).abs() < 1e-9);
    }

    #[test]
    fn dot_delivery_rewards_precision() {
        let economy = neutral_economy();
        let dots = vec![DotProjection {
            target_meeting: 3,
            placed_at_meeting: 2,
            projected_rate: 3.625,
        }];
        let exact = base_inputs(&economy, &[], &dots);
        let d_exact = credibility_delta(&exact);

        let mut missed = base_inputs(&economy, &[], &dots);
        missed.rate_after = 4.375; // 75bp away from the projection
        let d_missed = credibility_delta(&missed);

        assert!(d_exact > 0.0);
        // -12 for the miss, +1 tone, +1 calm market.
        assert!((d_missed + 10.0).abs() < 1e-9, "a wide dot miss is heavily punished");
    }

    #[test]
    fn tone_mismatch_scales_with_gap() {
        let economy = neutral_economy();
        let mut consistent = base_inputs(&economy, &[], &[]);
        consistent.decision = RateDecision::HikeQuarter;
        consistent.hawk_score = 2;
        let mut mild = base_inputs(&economy, &[], &[]);
        mild.decision = RateDecision::HikeQuarter;
        mild.hawk_score = 0;
        let mut severe = base_inputs(&economy, &[], &[]);
        severe.decision = RateDecision::HikeQuarter;
        severe.hawk_score = -2;

        let d_consistent = credibility_delta(&consistent);
        let d_mild = credibility_delta(&mild);
        let d_severe = credibility_delta(&severe);
        assert!(d_consistent > d_mild);
        assert!(d_mild > d_severe);
    }
}
