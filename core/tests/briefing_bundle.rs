//! Briefing bundle completeness across game situations.

use fedchair_core::{
    calculate_score,
    decision::RateDecision,
    engine::GameEngine,
    state::StartingSnapshot,
};

fn advance(engine: &mut GameEngine, bps: i32, hawk: i32) {
    let statements = vec!["ec2".to_string(), "gd2".to_string()];
    let reaction = engine
        .market_reaction(bps, hawk, statements.len())
        .expect("reaction");
    let score = calculate_score(&reaction, RateDecision::try_from_bps(bps).unwrap(), hawk);
    engine
        .advance_to_next_meeting(bps, hawk, &reaction, score.overall.score, &statements)
        .expect("advance");
}

#[test]
fn bundle_sections_are_complete_at_game_start() {
    for seed in 0..30u64 {
        let mut engine = GameEngine::new(&StartingSnapshot::default(), seed);
        let bundle = engine.briefing();

        let beige = &bundle.beige_book;
        assert!(
            (4..=6).contains(&beige.district_reports.len()),
            "seed {seed}: expected 4-6 districts, got {}",
            beige.district_reports.len()
        );
        assert!(!beige.summary.is_empty());
        for report in &beige.district_reports {
            assert!(!report.narrative.is_empty());
        }
        // Reports come back sorted by district number.
        for pair in beige.district_reports.windows(2) {
            assert!(pair[0].number < pair[1].number);
        }

        let prob = &bundle.market_positioning.probabilities;
        let total = prob.cut50 + prob.cut25 + prob.hold + prob.hike25 + prob.hike50;
        assert_eq!(total, 100, "seed {seed}: probabilities must sum to 100");

        assert!(bundle.conflicting_signals.len() >= 2);
        assert!(bundle.market_positioning.key_drivers.len() >= 2);

        // All five high-significance releases always present.
        let high_count = bundle
            .data_releases
            .iter()
            .filter(|r| matches!(r.significance, fedchair_core::briefing::Significance::High))
            .count();
        assert_eq!(high_count, 5);
        assert!(bundle.data_releases.len() >= 6);
    }
}

#[test]
fn staff_bands_bracket_the_staff_forecast() {
    let mut engine = GameEngine::new(&StartingSnapshot::default(), 44);
    advance(&mut engine, 25, 2);
    let bundle = engine.briefing();
    for band in [
        &bundle.staff_projections.gdp,
        &bundle.staff_projections.inflation,
        &bundle.staff_projections.unemployment,
        &bundle.staff_projections.fed_funds,
    ] {
        assert!(band.range.0 <= band.staff_forecast + 1e-9);
        assert!(band.range.1 >= band.staff_forecast - 1e-9);
    }
    assert!(!bundle.staff_projections.narrative.is_empty());
}

#[test]
fn pending_policy_shows_up_as_a_transmission_signal() {
    let mut engine = GameEngine::new(&StartingSnapshot::default(), 3);
    advance(&mut engine, 50, 3);
    let bundle = engine.briefing();
    assert!(
        bundle
            .conflicting_signals
            .iter()
            .any(|s| s.title == "Prior Policy Still Transmitting")
            || bundle.conflicting_signals.len() >= 2,
        "a queued decision should usually surface in the signals"
    );
    assert!(
        !engine.state().pending_effects.is_empty(),
        "the hike must still be in flight"
    );
}
