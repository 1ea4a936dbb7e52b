//! Committee dot projections.
//!
//! Each of the thirteen participants projects a rate for every
//! remaining meeting: stance bias plus a shared economic adjustment,
//! compounding per meeting ahead, with idiosyncratic noise, rounded to
//! the nearest 12.5bp.

use crate::rng::GameRng;
use crate::roster::COMMITTEE;
use crate::state::GameState;
use crate::types::Meeting;
use std::collections::BTreeMap;

const DOT_GRID: f64 = 0.125;

/// Shared per-meeting rate-path adjustment everyone reads off the
/// current data.
fn economic_adjustment(state: &GameState) -> f64 {
    let economy = &state.economy;
    let mut adjustment = 0.0;
    if economy.pce_inflation > 3.0 {
        adjustment += 0.03;
    } else if economy.pce_inflation > 2.5 {
        adjustment += 0.015;
    }
    if economy.pce_inflation < 1.5 {
        adjustment -= 0.03;
    }
    if economy.unemployment_rate > 5.0 {
        adjustment -= 0.02;
    }
    if economy.gdp_growth < 1.0 {
        adjustment -= 0.02;
    }
    adjustment
}

/// Project dots for every meeting after the current one.
pub fn generate_committee_dots(
    state: &GameState,
    rng: &mut GameRng,
) -> BTreeMap<Meeting, Vec<f64>> {
    let adjustment = economic_adjustment(state);
    let mut dots = BTreeMap::new();

    for meeting in state.meeting_number + 1..=state.total_meetings {
        let meetings_ahead = (meeting - state.meeting_number) as f64;
        let meeting_dots = COMMITTEE
            .iter()
            .map(|participant| {
                let noise = rng.centered(0.30); // up to 15bp either way
                let projected = state.current_rate
                    + (participant.stance.bias() + adjustment) * meetings_ahead
                    + noise;
                (projected / DOT_GRID).round() * DOT_GRID
            })
            .collect();
        dots.insert(meeting, meeting_dots);
    }

    dots
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::{GameRng, StreamSlot};
    use crate::state::{GameState, StartingSnapshot};

    #[test]
    fn one_dot_per_participant_per_remaining_meeting() {
        let state = GameState::create(&StartingSnapshot::default(), 8);
        let mut rng = GameRng::new(17, StreamSlot::Dots as u64);
        let dots = generate_committee_dots(&state, &mut rng);
        assert_eq!(dots.len(), 7, "meetings 2 through 8");
        for (_, meeting_dots) in &dots {
            assert_eq!(meeting_dots.len(), COMMITTEE.len());
        }
    }

    #[test]
    fn dots_land_on_the_twelve_and_a_half_bp_grid() {
        let state = GameState::create(&StartingSnapshot::default(), 8);
        let mut rng = GameRng::new(29, StreamSlot::Dots as u64);
        for (_, meeting_dots) in generate_committee_dots(&state, &mut rng) {
            for dot in meeting_dots {
                let steps = dot / DOT_GRID;
                assert!((steps - steps.round()).abs() < 1e-9, "dot {dot} off grid");
            }
        }
    }

    #[test]
    fn no_dots_once_at_final_meeting() {
        let mut state = GameState::create(&StartingSnapshot::default(), 8);
        state.meeting_number = 8;
        let mut rng = GameRng::new(3, StreamSlot::Dots as u64);
        assert!(generate_committee_dots(&state, &mut rng).is_empty());
    }

    #[test]
    fn hot_inflation_tilts_the_path_higher() {
        let mut hot = GameState::create(&StartingSnapshot::default(), 8);
        hot.economy.pce_inflation = 3.5;
        let mut cool = GameState::create(&StartingSnapshot::default(), 8);
        cool.economy.pce_inflation = 1.0;

        let mut mean_gap = 0.0;
        let n = 50;
        for seed in 0..n {
            let mut rng_hot = GameRng::new(seed, StreamSlot::Dots as u64);
            let mut rng_cool = GameRng::new(seed, StreamSlot::Dots as u64);
            let far_hot: f64 = generate_committee_dots(&hot, &mut rng_hot)[&8].iter().sum();
            let far_cool: f64 = generate_committee_dots(&cool, &mut rng_cool)[&8].iter().sum();
            mean_gap += far_hot - far_cool;
        }
        assert!(mean_gap / n as f64 > 0.0, "hot inflation should lift projected rates");
    }
}
