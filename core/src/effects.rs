//! Lagged policy transmission.
//!
//! A nonzero decision at meeting M starts transmitting at M+2 (half
//! strength) and lands fully at M+3. Only the full application marks an
//! entry applied and removes it, so a decision contributes 150% of its
//! nominal table effect across the two meetings. That overshoot is the
//! established transmission behavior; downstream balancing assumes it.

use crate::decision::{IndicatorDeltas, RateDecision};
use crate::state::{EconomyState, PendingEffect};
use crate::types::Meeting;

const PARTIAL_LAG: Meeting = 2;
const FULL_LAG: Meeting = 3;
const PARTIAL_FRACTION: f64 = 0.5;

/// Queue a decision's future macro impact. A hold queues nothing.
pub fn queue_rate_effects(
    pending: &mut Vec<PendingEffect>,
    meeting: Meeting,
    decision: RateDecision,
    hawk_score: i32,
) {
    if decision == RateDecision::Hold {
        return;
    }
    pending.push(PendingEffect {
        origin_meeting: meeting,
        decision_bps: decision.bps(),
        hawk_score,
        partial_effect_meeting: meeting + PARTIAL_LAG,
        full_effect_meeting: meeting + FULL_LAG,
        applied: false,
    });
}

/// Apply every due lagged effect to the economy, then drop fully
/// applied entries. Returns the combined deltas that landed.
pub fn apply_due_effects(
    pending: &mut Vec<PendingEffect>,
    economy: &mut EconomyState,
    meeting: Meeting,
) -> IndicatorDeltas {
    let mut changes = IndicatorDeltas::ZERO;

    for effect in pending.iter_mut() {
        if effect.applied {
            continue;
        }
        // Entries only ever hold bps values that passed validation.
        let base = RateDecision::try_from_bps(effect.decision_bps)
            .map(RateDecision::effects)
            .unwrap_or(IndicatorDeltas::ZERO);

        if meeting >= effect.full_effect_meeting {
            changes.accumulate(&base);
            effect.applied = true;
        } else if meeting >= effect.partial_effect_meeting {
            changes.accumulate(&base.scaled(PARTIAL_FRACTION));
        }
    }

    economy.gdp_growth += changes.gdp_growth;
    economy.cpi_inflation += changes.cpi_inflation;
    economy.pce_inflation += changes.pce_inflation;
    economy.unemployment_rate += changes.unemployment_rate;

    pending.retain(|e| !e.applied);

    changes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{GameState, StartingSnapshot};

    fn economy() -> EconomyState {
        GameState::create(&StartingSnapshot::default(), 8).economy
    }

    #[test]
    fn hold_queues_nothing() {
        let mut pending = Vec::new();
        queue_rate_effects(&mut pending, 1, RateDecision::Hold, 0);
        assert!(pending.is_empty());
    }

    #[test]
    fn partial_then_full_application() {
        let mut pending = Vec::new();
        let mut econ = economy();
        let baseline = econ;
        queue_rate_effects(&mut pending, 1, RateDecision::HikeQuarter, 2);

        // Meeting 2: nothing due yet.
        let none = apply_due_effects(&mut pending, &mut econ, 2);
        assert!(none.is_zero());
        assert_eq!(pending.len(), 1);

        // Meeting 3: 50% partial, entry stays queued.
        let partial = apply_due_effects(&mut pending, &mut econ, 3);
        let full_table = RateDecision::HikeQuarter.effects();
        assert!((partial.gdp_growth - full_table.gdp_growth * 0.5).abs() < 1e-12);
        assert_eq!(pending.len(), 1, "partial application must not dequeue");

        // Meeting 4: 100% full, entry removed.
        let full = apply_due_effects(&mut pending, &mut econ, 4);
        assert!((full.gdp_growth - full_table.gdp_growth).abs() < 1e-12);
        assert!(pending.is_empty(), "full application dequeues");

        // Cumulative realization is 150% of the table value.
        let total = econ.gdp_growth - baseline.gdp_growth;
        assert!((total - full_table.gdp_growth * 1.5).abs() < 1e-12);
    }

    #[test]
    fn late_arrival_applies_full_only() {
        // If the queue is first drained after the full-effect meeting,
        // the entry contributes 100% once and disappears.
        let mut pending = Vec::new();
        let mut econ = economy();
        queue_rate_effects(&mut pending, 1, RateDecision::CutFifty, -3);

        let applied = apply_due_effects(&mut pending, &mut econ, 6);
        let table = RateDecision::CutFifty.effects();
        assert!((applied.gdp_growth - table.gdp_growth).abs() < 1e-12);
        assert!(pending.is_empty());
    }
}
