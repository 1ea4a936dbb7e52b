//! The in-memory event log.
//!
//! Every notable state change during a game is appended here, in order.
//! The UI reads the log for its ticker and the aftermath recap; the
//! engine itself never reads it back. Variants are added as the game
//! grows, never removed or reordered.

use crate::shocks::ShockKind;
use crate::state::{EndReason, EndResult};
use crate::types::{Bps, Meeting};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GameEvent {
    DecisionRecorded {
        meeting: Meeting,
        decision_bps: Bps,
        hawk_score: i32,
        rate_after: f64,
    },
    ShockActivated {
        meeting: Meeting,
        kind: ShockKind,
        headline: String,
    },
    ShockExpired {
        meeting: Meeting,
        kind: ShockKind,
    },
    DataRevised {
        meeting: Meeting,
        revised_meeting: Meeting,
        series: String,
        original_value: f64,
        revised_value: f64,
    },
    CredibilityChanged {
        meeting: Meeting,
        from: f64,
        to: f64,
    },
    GameEnded {
        meeting: Meeting,
        result: EndResult,
        reason: EndReason,
    },
}
