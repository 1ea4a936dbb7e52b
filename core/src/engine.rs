//! The game engine. Owns the state and drives meeting transitions.
//!
//! TRANSITION ORDER (fixed, documented, never reordered):
//!   1. Snapshot economy/markets as last-meeting references
//!   2. Record the decision, move the policy rate
//!   3. Queue lagged effects
//!   4. Update credibility (against the PREVIOUS meeting's guidance)
//!   5. Store this meeting's tone and guidance for the next check
//!   6. Record the score
//!   7. Apply the market reaction to market levels
//!   8. Early-loss check (short-circuits without advancing)
//!   9. Advance the meeting counter; final evaluation if past the end
//!  10. Regenerate the world: dots, lagged effects, economy, shocks,
//!      revisions, markets, expectations, headlines
//!
//! RULES:
//!   - Each advance call is atomic from the caller's point of view.
//!   - All randomness flows through the RngBank.
//!   - Notable changes are appended to the in-memory event log.

use crate::{
    briefing::{generate_briefing, BriefingBundle},
    config::EngineConfig,
    dashboard::{dashboard_view, DashboardView},
    credibility::{credibility_delta, CredibilityInputs},
    decision::{IndicatorDeltas, RateDecision},
    dots::generate_committee_dots,
    economy::{evolve_economy, PAYROLLS_RANGE, UNEMPLOYMENT_FLOOR},
    effects::{apply_due_effects, queue_rate_effects},
    error::{SimError, SimResult},
    event::GameEvent,
    expectations::calculate_market_expectations,
    headlines::{generate_headlines, Headline},
    markets::{evolve_markets, DXY_RANGE, TREASURY10Y_RANGE, TREASURY2Y_RANGE, VIX_RANGE},
    outcome::{check_win_lose, GameOutcome},
    phrases::guidance_ids,
    reaction::{calculate_market_reaction, MarketReaction, ReactionParams},
    revisions::{roll_for_revision, DataRevision},
    rng::{RngBank, StreamSlot},
    schedule::schedule_entry,
    shocks::{apply_shock_effects, expire_shocks, roll_for_shocks},
    state::{
        ActiveShock, DotProjection, EconomySnapshot, EndReason, EndResult, GamePhase, GameState,
        GuidanceRecord, RateRecord, StartingSnapshot,
    },
    types::{Bps, Meeting},
};
use serde::{Deserialize, Serialize};

/// What one advance call hands back to the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdvanceOutcome {
    pub ended: bool,
    pub end_result: Option<EndResult>,
    pub end_reason: Option<EndReason>,
    pub end_message: Option<String>,
    /// Combined lagged + natural deltas over the four rate-sensitive
    /// indicators (shock deltas report through headlines instead).
    pub economy_changes: IndicatorDeltas,
    pub new_shocks: Vec<ActiveShock>,
    pub data_revision: Option<DataRevision>,
    pub headlines: Vec<Headline>,
}

pub struct GameEngine {
    config: EngineConfig,
    state: GameState,
    rng: RngBank,
}

impl GameEngine {
    /// Build an engine with default tunables.
    pub fn new(snapshot: &StartingSnapshot, seed: u64) -> Self {
        Self::with_config(snapshot, seed, EngineConfig::default())
    }

    pub fn with_config(snapshot: &StartingSnapshot, seed: u64, config: EngineConfig) -> Self {
        let state = GameState::create(snapshot, config.total_meetings);
        log::info!(
            "new game: seed={seed} rate={:.3} meetings={}",
            state.current_rate,
            state.total_meetings
        );
        Self {
            config,
            state,
            rng: RngBank::new(seed),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Place a forward dot for a later meeting on the projection plot.
    pub fn submit_dot_projection(&mut self, target_meeting: Meeting, rate: f64) -> SimResult<()> {
        self.reject_if_ended()?;
        if target_meeting <= self.state.meeting_number
            || target_meeting > self.state.total_meetings
        {
            return Err(SimError::DotOutOfRange {
                target: target_meeting,
                total: self.state.total_meetings,
            });
        }
        let dot = DotProjection {
            target_meeting,
            placed_at_meeting: self.state.meeting_number,
            projected_rate: rate,
        };
        self.state.dot_projections.push(dot);
        self.state.dot_history.push(dot);
        Ok(())
    }

    /// Compute the market's reaction to a candidate decision using the
    /// engine's own state and reaction stream. The UI calls this, shows
    /// the tape, then submits the same reaction to advance.
    pub fn market_reaction(
        &mut self,
        decision_bps: Bps,
        hawk_score: i32,
        statement_count: usize,
    ) -> SimResult<MarketReaction> {
        self.reject_if_ended()?;
        let decision = RateDecision::try_from_bps(decision_bps)?;
        let economy = &self.state.economy;
        let params = ReactionParams {
            decision,
            market_expected_bps: self.state.market_expected_bps,
            hawk_score,
            markets: &self.state.markets,
            gdp_forecast: economy.gdp_growth - 0.1,
            unemployment_forecast: economy.unemployment_rate + 0.2,
            inflation_forecast: economy.pce_inflation - 0.3,
            credibility: self.state.credibility,
            statement_count,
        };
        Ok(calculate_market_reaction(
            &params,
            self.rng.stream(StreamSlot::Reaction),
        ))
    }

    /// Assemble the pre-meeting briefing from the current state.
    pub fn briefing(&mut self) -> BriefingBundle {
        generate_briefing(
            &self.state,
            &self.config,
            self.rng.stream(StreamSlot::Briefing),
        )
    }

    /// Formatted read-only snapshot for the dashboard.
    pub fn dashboard(&self) -> DashboardView {
        dashboard_view(&self.state)
    }

    /// Record a decision and advance to the next meeting.
    pub fn advance_to_next_meeting(
        &mut self,
        decision_bps: Bps,
        hawk_score: i32,
        reaction: &MarketReaction,
        meeting_score: f64,
        selected_statements: &[String],
    ) -> SimResult<AdvanceOutcome> {
        self.reject_if_ended()?;
        let decision = RateDecision::try_from_bps(decision_bps)?;
        let meeting = self.state.meeting_number;

        // 1. Snapshot for history and delta reporting.
        self.state.economy_history.push(EconomySnapshot {
            meeting,
            economy: self.state.economy,
        });
        self.state.last_meeting_economy = Some(self.state.economy);
        self.state.last_meeting_markets = Some(self.state.markets);

        // 2. Record the decision and move the rate.
        self.state.rate_history.push(RateRecord {
            meeting,
            date: self.state.meeting_date,
            rate: self.state.current_rate + decision_bps as f64 / 100.0,
            decision_bps,
            hawk_score,
        });
        self.state.current_rate += decision_bps as f64 / 100.0;
        log::info!(
            "meeting {meeting}: decision {decision_bps:+} bps -> rate {:.3} (tone {hawk_score:+})",
            self.state.current_rate
        );

        // 3. Queue lagged effects.
        queue_rate_effects(&mut self.state.pending_effects, meeting, decision, hawk_score);

        // 4. Credibility, judged against LAST meeting's guidance.
        let prior_guidance = self.state.last_guidance_ids.clone();
        let delta = credibility_delta(&CredibilityInputs {
            decision,
            hawk_score,
            sp500_change_pct: reaction.sp500.change,
            prior_guidance: &prior_guidance,
            economy: &self.state.economy,
            dot_projections: &self.state.dot_projections,
            meeting,
            rate_after: self.state.current_rate,
            credibility: self.state.credibility,
        });
        let previous_credibility = self.state.credibility;
        self.state.credibility = (self.state.credibility + delta).clamp(0.0, 100.0);
        self.state.credibility_history.push(self.state.credibility);
        self.state.past_events.push(GameEvent::CredibilityChanged {
            meeting,
            from: previous_credibility,
            to: self.state.credibility,
        });
        if delta < -5.0 {
            log::warn!(
                "meeting {meeting}: credibility drop {previous_credibility:.1} -> {:.1}",
                self.state.credibility
            );
        }

        // 5. This meeting's tone and guidance drive the NEXT check.
        self.state.last_hawk_score = hawk_score;
        self.state.last_guidance_ids = guidance_ids(selected_statements);
        self.state.guidance_history.push(GuidanceRecord {
            meeting,
            hawk_score,
            guidance_ids: self.state.last_guidance_ids.clone(),
            decision_bps,
        });

        // 6. Score.
        self.state.meeting_scores.push(meeting_score);
        self.state.total_score += meeting_score;

        // 7. The reaction's resulting levels become the market levels.
        self.state.markets.sp500 = reaction.sp500.value;
        self.state.markets.vix = reaction.vix.value.clamp(VIX_RANGE.0, VIX_RANGE.1);
        self.state.markets.treasury10y = reaction
            .treasury10y
            .value
            .clamp(TREASURY10Y_RANGE.0, TREASURY10Y_RANGE.1);
        self.state.markets.treasury2y = reaction
            .treasury2y
            .value
            .clamp(TREASURY2Y_RANGE.0, TREASURY2Y_RANGE.1);
        self.state.markets.dxy = reaction.dxy.value.clamp(DXY_RANGE.0, DXY_RANGE.1);

        self.state.past_events.push(GameEvent::DecisionRecorded {
            meeting,
            decision_bps,
            hawk_score,
            rate_after: self.state.current_rate,
        });

        // 8. Early end: losses take effect immediately, mid-game.
        if let Some(outcome) = check_win_lose(&self.state) {
            if outcome.result == EndResult::Lose {
                return Ok(self.end_game(outcome));
            }
        }

        // 9. Advance; evaluate final conditions once past the schedule.
        self.state.meeting_number += 1;
        if self.state.meeting_number > self.state.total_meetings {
            let outcome =
                check_win_lose(&self.state).expect("final evaluation always resolves");
            return Ok(self.end_game(outcome));
        }

        // 10. Regenerate the world for the new meeting.
        Ok(self.regenerate())
    }

    /// Everything that happens to the world between two meetings.
    fn regenerate(&mut self) -> AdvanceOutcome {
        let meeting = self.state.meeting_number;
        self.state.meeting_date = schedule_entry(meeting).date();

        self.state.committee_dots =
            generate_committee_dots(&self.state, self.rng.stream(StreamSlot::Dots));

        let lagged = apply_due_effects(
            &mut self.state.pending_effects,
            &mut self.state.economy,
            meeting,
        );
        if !lagged.is_zero() {
            log::debug!(
                "meeting {meeting}: lagged policy transmission gdp {:+.2} cpi {:+.2}",
                lagged.gdp_growth,
                lagged.cpi_inflation
            );
        }

        let natural = evolve_economy(
            &mut self.state.economy,
            meeting,
            self.state.credibility,
            self.config.inflation_target,
            self.config.gdp_target,
            self.rng.stream(StreamSlot::Economy),
        );

        let new_shocks = roll_for_shocks(
            meeting,
            &self.state.active_shocks,
            self.rng.stream(StreamSlot::Shocks),
        );
        for shock in &new_shocks {
            let spec = shock.kind.spec();
            log::warn!("meeting {meeting}: shock hits: {}", spec.name);
            self.state.past_events.push(GameEvent::ShockActivated {
                meeting,
                kind: shock.kind,
                headline: spec.headline.to_string(),
            });
        }
        self.state.active_shocks.extend(new_shocks.iter().copied());

        apply_shock_effects(
            &mut self.state.economy,
            &mut self.state.markets,
            &self.state.active_shocks,
        );

        // Shock deltas land unclamped; re-impose the indicator domains.
        self.state.economy.unemployment_rate =
            self.state.economy.unemployment_rate.max(UNEMPLOYMENT_FLOOR);
        self.state.economy.payrolls_change = self
            .state
            .economy
            .payrolls_change
            .clamp(PAYROLLS_RANGE.0, PAYROLLS_RANGE.1);

        let expired: Vec<ActiveShock> = self
            .state
            .active_shocks
            .iter()
            .filter(|s| s.end_meeting <= meeting)
            .copied()
            .collect();
        for shock in expired {
            self.state.past_events.push(GameEvent::ShockExpired {
                meeting,
                kind: shock.kind,
            });
        }
        expire_shocks(&mut self.state.active_shocks, meeting);

        let data_revision = roll_for_revision(
            &self.state,
            self.config.revision_probability,
            self.rng.stream(StreamSlot::Revisions),
        );
        if let Some(revision) = &data_revision {
            self.state.past_events.push(GameEvent::DataRevised {
                meeting,
                revised_meeting: revision.revised_meeting,
                series: revision.series.label().to_string(),
                original_value: revision.original_value,
                revised_value: revision.revised_value,
            });
            self.state.data_revisions.push(revision.clone());
        }
        self.state.latest_revision = data_revision.clone();

        evolve_markets(
            &mut self.state.markets,
            &self.state.economy,
            self.state.current_rate,
            self.state.credibility,
            self.rng.stream(StreamSlot::Markets),
        );

        let mut economy_changes = lagged;
        economy_changes.accumulate(&natural);
        self.state.economy_changes = Some(economy_changes);

        let headlines = generate_headlines(
            &self.state,
            &economy_changes,
            &new_shocks,
            data_revision.as_ref(),
            self.config.max_headlines,
        );
        self.state.recent_headlines = headlines.clone();

        self.state.market_expected_bps = calculate_market_expectations(&self.state);
        log::debug!(
            "meeting {meeting}: market now expects {:+} bps",
            self.state.market_expected_bps
        );

        AdvanceOutcome {
            ended: false,
            end_result: None,
            end_reason: None,
            end_message: None,
            economy_changes,
            new_shocks,
            data_revision,
            headlines,
        }
    }

    fn end_game(&mut self, outcome: GameOutcome) -> AdvanceOutcome {
        self.state.game_phase = GamePhase::Ended;
        self.state.end_result = Some(outcome.result);
        self.state.end_reason = Some(outcome.reason);
        self.state.past_events.push(GameEvent::GameEnded {
            meeting: self.state.meeting_number,
            result: outcome.result,
            reason: outcome.reason,
        });
        log::info!(
            "game over at meeting {}: {:?} ({})",
            self.state.meeting_number,
            outcome.result,
            outcome.reason.as_str()
        );
        AdvanceOutcome {
            ended: true,
            end_result: Some(outcome.result),
            end_reason: Some(outcome.reason),
            end_message: Some(outcome.message),
            economy_changes: IndicatorDeltas::ZERO,
            new_shocks: Vec::new(),
            data_revision: None,
            headlines: Vec::new(),
        }
    }

    fn reject_if_ended(&self) -> SimResult<()> {
        if self.state.is_ended() {
            return Err(SimError::GameAlreadyEnded {
                reason: self
                    .state
                    .end_reason
                    .map(|r| r.as_str().to_string())
                    .unwrap_or_else(|| "ended".to_string()),
            });
        }
        Ok(())
    }
}
