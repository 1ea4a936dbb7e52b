//! Policy transmission lag, observed through the public engine API.
//!
//! A hike at meeting 1 must sit in the pending queue through meetings
//! 2 and 3, contribute half its table effect entering meeting 3, land
//! in full entering meeting 4, and only then leave the queue.

use fedchair_core::{
    calculate_score,
    decision::RateDecision,
    engine::GameEngine,
    state::StartingSnapshot,
};

fn hold_statements() -> Vec<String> {
    vec!["ec2".to_string(), "gd2".to_string()]
}

fn advance(engine: &mut GameEngine, bps: i32, hawk: i32) -> fedchair_core::AdvanceOutcome {
    let statements = hold_statements();
    let reaction = engine
        .market_reaction(bps, hawk, statements.len())
        .expect("reaction");
    let score = calculate_score(&reaction, RateDecision::try_from_bps(bps).unwrap(), hawk);
    engine
        .advance_to_next_meeting(bps, hawk, &reaction, score.overall.score, &statements)
        .expect("advance")
}

#[test]
fn single_hike_transmits_across_meetings_two_and_three_later() {
    let mut engine = GameEngine::new(&StartingSnapshot::default(), 1234);

    // Meeting 1: hike 25.
    advance(&mut engine, 25, 2);
    let pending = &engine.state().pending_effects;
    assert_eq!(pending.len(), 1, "hike must enqueue exactly one effect");
    assert_eq!(pending[0].partial_effect_meeting, 3);
    assert_eq!(pending[0].full_effect_meeting, 4);
    assert!(!pending[0].applied);

    // Meeting 2: hold. Entering meeting 3 applies the 50% tranche but
    // keeps the entry queued.
    advance(&mut engine, 0, 0);
    assert_eq!(
        engine.state().pending_effects.len(),
        1,
        "partial application must not drain the queue"
    );

    // Meeting 3: hold. Entering meeting 4 applies the full tranche and
    // drains the queue.
    advance(&mut engine, 0, 0);
    assert!(
        engine.state().pending_effects.is_empty(),
        "queue must be empty from meeting 4 onward"
    );
    assert_eq!(engine.state().meeting_number, 4);
}

#[test]
fn holds_never_enqueue_effects() {
    let mut engine = GameEngine::new(&StartingSnapshot::default(), 7);
    for _ in 0..3 {
        advance(&mut engine, 0, 0);
        assert!(engine.state().pending_effects.is_empty());
    }
}

#[test]
fn each_nonzero_decision_enqueues_exactly_one_entry() {
    let mut engine = GameEngine::new(&StartingSnapshot::default(), 55);
    advance(&mut engine, 25, 2); // lands fully entering meeting 4
    advance(&mut engine, -25, -2); // lands fully entering meeting 5
    let pending = &engine.state().pending_effects;
    assert_eq!(pending.len(), 2);
    assert_eq!(pending[0].origin_meeting, 1);
    assert_eq!(pending[1].origin_meeting, 2);
}
