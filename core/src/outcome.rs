//! Win/lose evaluation.
//!
//! RULE: priority order is load-bearing. Immediate losses short-circuit
//! before any final-meeting check; among final checks, losses are
//! evaluated before the win, and the draw is the fallthrough.

use crate::state::{EndReason, EndResult, GameState};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameOutcome {
    pub result: EndResult,
    pub reason: EndReason,
    pub message: String,
}

impl GameOutcome {
    fn new(result: EndResult, reason: EndReason, message: &str) -> Self {
        Self {
            result,
            reason,
            message: message.to_string(),
        }
    }
}

/// Evaluate end conditions against the current state. Returns None
/// while the game should continue.
pub fn check_win_lose(state: &GameState) -> Option<GameOutcome> {
    let economy = &state.economy;

    // Immediate losses, any meeting.
    if state.credibility < 20.0 {
        return Some(GameOutcome::new(
            EndResult::Lose,
            EndReason::CredibilityCollapse,
            "Your credibility has collapsed. Markets no longer trust Fed guidance.",
        ));
    }

    if economy.gdp_growth < -0.5 && state.meeting_number > 2 {
        let previous_gdp = state
            .last_meeting_economy
            .map(|e| e.gdp_growth)
            .unwrap_or(economy.gdp_growth);
        if previous_gdp < 0.0 {
            return Some(GameOutcome::new(
                EndResult::Lose,
                EndReason::Recession,
                "The economy has entered a recession.",
            ));
        }
    }

    // Everything below only applies at the final scheduled meeting.
    if state.meeting_number < state.total_meetings {
        return None;
    }

    if economy.pce_inflation > 3.5 && economy.unemployment_rate > 5.5 {
        return Some(GameOutcome::new(
            EndResult::Lose,
            EndReason::Stagflation,
            "Stagflation: High inflation combined with high unemployment.",
        ));
    }

    if economy.pce_inflation > 4.0 {
        return Some(GameOutcome::new(
            EndResult::Lose,
            EndReason::RunawayInflation,
            "Inflation has spiraled out of control.",
        ));
    }

    let soft_landing = economy.pce_inflation >= 1.5
        && economy.pce_inflation <= 3.0
        && economy.gdp_growth > 0.0
        && economy.unemployment_rate < 6.0
        && state.credibility > 50.0;

    if soft_landing {
        return Some(GameOutcome::new(
            EndResult::Win,
            EndReason::SoftLanding,
            "Congratulations! You achieved a soft landing.",
        ));
    }

    Some(GameOutcome::new(
        EndResult::Draw,
        EndReason::MuddleThrough,
        "You avoided disaster, but the landing was bumpy.",
    ))
}
