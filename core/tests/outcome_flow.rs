//! End-of-game behavior through the public API: terminal exclusivity,
//! validation errors, and full playthroughs.

use fedchair_core::{
    calculate_score,
    decision::RateDecision,
    engine::GameEngine,
    state::{EndReason, EndResult, GamePhase, StartingSnapshot},
    SimError,
};

fn advance(engine: &mut GameEngine, bps: i32, hawk: i32) -> fedchair_core::AdvanceOutcome {
    let statements = vec!["ec2".to_string(), "gd2".to_string()];
    let reaction = engine
        .market_reaction(bps, hawk, statements.len())
        .expect("reaction");
    let score = calculate_score(&reaction, RateDecision::try_from_bps(bps).unwrap(), hawk);
    engine
        .advance_to_next_meeting(bps, hawk, &reaction, score.overall.score, &statements)
        .expect("advance")
}

#[test]
fn every_game_ends_with_a_definite_result() {
    for seed in 0..40u64 {
        let mut engine = GameEngine::new(&StartingSnapshot::default(), seed);
        let mut outcome = None;
        for _ in 0..9 {
            let step = advance(&mut engine, 0, 0);
            if step.ended {
                outcome = Some(step);
                break;
            }
        }
        let outcome = outcome.expect("a game never outlives its schedule");

        let state = engine.state();
        assert_eq!(state.game_phase, GamePhase::Ended);
        let result = state.end_result.expect("result set");
        let reason = state.end_reason.expect("reason set");
        assert!(matches!(
            result,
            EndResult::Win | EndResult::Lose | EndResult::Draw
        ));
        assert!(matches!(
            reason,
            EndReason::CredibilityCollapse
                | EndReason::Recession
                | EndReason::Stagflation
                | EndReason::RunawayInflation
                | EndReason::SoftLanding
                | EndReason::MuddleThrough
        ));
        assert_eq!(outcome.end_result, Some(result));
        assert!(outcome.end_message.is_some());

        // Win and draw only resolve once the schedule is exhausted.
        if result != EndResult::Lose {
            assert_eq!(state.meeting_number, state.total_meetings + 1);
        }
    }
}

#[test]
fn invalid_decision_is_rejected_before_any_mutation() {
    let mut engine = GameEngine::new(&StartingSnapshot::default(), 5);
    let statements = vec!["ec2".to_string()];
    let reaction = engine.market_reaction(0, 0, 1).expect("reaction");
    let history_len = engine.state().rate_history.len();

    let err = engine
        .advance_to_next_meeting(30, 0, &reaction, 80.0, &statements)
        .unwrap_err();
    assert!(matches!(err, SimError::InvalidDecision { bps: 30 }));
    assert_eq!(engine.state().rate_history.len(), history_len);
    assert_eq!(engine.state().meeting_number, 1);
}

#[test]
fn market_reaction_also_validates_bps() {
    let mut engine = GameEngine::new(&StartingSnapshot::default(), 5);
    assert!(matches!(
        engine.market_reaction(-10, 0, 1),
        Err(SimError::InvalidDecision { bps: -10 })
    ));
}

#[test]
fn dot_projections_must_target_future_meetings() {
    let mut engine = GameEngine::new(&StartingSnapshot::default(), 5);
    assert!(engine.submit_dot_projection(1, 3.625).is_err());
    assert!(engine.submit_dot_projection(9, 3.625).is_err());
    assert!(engine.submit_dot_projection(3, 3.875).is_ok());
    assert_eq!(engine.state().dot_projections.len(), 1);
    assert_eq!(engine.state().dot_history.len(), 1);
}

#[test]
fn scores_accumulate_per_meeting() {
    let mut engine = GameEngine::new(&StartingSnapshot::default(), 77);
    let mut played = 0;
    for _ in 0..3 {
        let outcome = advance(&mut engine, 0, 0);
        played += 1;
        if outcome.ended {
            break;
        }
    }
    let state = engine.state();
    assert_eq!(state.meeting_scores.len(), played);
    let sum: f64 = state.meeting_scores.iter().sum();
    assert!((state.total_score - sum).abs() < 1e-9);
}

#[test]
fn committee_dots_cover_every_remaining_meeting() {
    let mut engine = GameEngine::new(&StartingSnapshot::default(), 13);
    advance(&mut engine, 0, 0);
    let state = engine.state();
    assert_eq!(state.meeting_number, 2);
    let meetings: Vec<u32> = state.committee_dots.keys().copied().collect();
    assert_eq!(meetings, vec![3, 4, 5, 6, 7, 8]);
    for dots in state.committee_dots.values() {
        assert_eq!(dots.len(), 13);
    }
}
