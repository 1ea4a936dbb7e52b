//! What the market expects the next decision to be.
//!
//! A Taylor-rule-flavored base from inflation and real-side weakness,
//! overlaid with the previous meeting's guidance, the trailing
//! hawkishness of recent statements, and the player's own forward dot
//! when one targets this meeting. Snapped to the nearest 25bp.

use crate::state::GameState;
use crate::types::Bps;

pub fn calculate_market_expectations(state: &GameState) -> Bps {
    let economy = &state.economy;
    let mut expected: f64 = 0.0;

    // Inflation above target argues for hikes, below for cuts.
    if economy.pce_inflation > 3.0 {
        expected += 25.0;
    } else if economy.pce_inflation > 2.5 {
        expected += 12.5;
    } else if economy.pce_inflation < 1.5 {
        expected -= 25.0;
    }

    // Real-side weakness argues for cuts.
    if economy.gdp_growth < 1.0 {
        expected -= 25.0;
    } else if economy.unemployment_rate > 5.0 {
        expected -= 12.5;
    }

    // Explicit forward guidance creates strong expectations.
    let guided = |id: &str| state.last_guidance_ids.iter().any(|g| g == id);
    if guided("gd4") {
        expected -= 20.0;
    } else if guided("gd1") {
        expected += 20.0;
    } else if guided("gd3") {
        expected -= 5.0;
    }
    // gd2 (data-dependent) is neutral.

    // Last meeting's tone weighs heavily; older tone decays.
    expected += state.last_hawk_score as f64 * 3.0;

    let history = &state.rate_history;
    if history.len() >= 2 {
        let older = &history[history.len().saturating_sub(3)..history.len() - 1];
        if !older.is_empty() {
            let avg_older_hawk: f64 =
                older.iter().map(|r| r.hawk_score as f64).sum::<f64>() / older.len() as f64;
            expected += avg_older_hawk * 2.0;
        }
    }

    // A dot placed last meeting for this meeting anchors expectations.
    let next_meeting_dot = state.dot_projections.iter().find(|d| {
        d.target_meeting == state.meeting_number
            && d.placed_at_meeting + 1 == state.meeting_number
    });
    if let Some(dot) = next_meeting_dot {
        let implied_move = ((dot.projected_rate - state.current_rate) * 100.0).round();
        expected = expected * 0.4 + implied_move * 0.6;
    }

    (expected / 25.0).round() as Bps * 25
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{DotProjection, GameState, StartingSnapshot};

    fn neutral_state() -> GameState {
        let mut state = GameState::create(&StartingSnapshot::default(), 8);
        state.economy.pce_inflation = 2.0;
        state.economy.gdp_growth = 2.0;
        state.economy.unemployment_rate = 4.3;
        state
    }

    #[test]
    fn neutral_conditions_expect_a_hold() {
        assert_eq!(calculate_market_expectations(&neutral_state()), 0);
    }

    #[test]
    fn hot_inflation_prices_a_hike() {
        let mut state = neutral_state();
        state.economy.pce_inflation = 3.4;
        assert_eq!(calculate_market_expectations(&state), 25);
    }

    #[test]
    fn easing_guidance_pulls_expectations_down() {
        let mut state = neutral_state();
        state.last_guidance_ids = vec!["gd4".to_string()];
        state.last_hawk_score = -2;
        assert_eq!(calculate_market_expectations(&state), -25);
    }

    #[test]
    fn result_is_always_a_multiple_of_25() {
        let mut state = neutral_state();
        state.economy.pce_inflation = 2.7;
        state.last_hawk_score = 1;
        let expected = calculate_market_expectations(&state);
        assert_eq!(expected % 25, 0);
    }

    #[test]
    fn forward_dot_blends_into_expectations() {
        let mut state = neutral_state();
        state.meeting_number = 4;
        state.dot_projections.push(DotProjection {
            target_meeting: 4,
            placed_at_meeting: 3,
            projected_rate: state.current_rate + 0.50,
        });
        // 0 base blended with an implied +50: 0*0.4 + 50*0.6 = 30 -> 25.
        assert_eq!(calculate_market_expectations(&state), 25);
    }
}
