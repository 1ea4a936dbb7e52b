//! The game state aggregate.
//!
//! RULES:
//!   - GameState is owned exclusively by the engine. Collaborators get
//!     read snapshots (everything here serializes); all mutation goes
//!     through the engine's operations.
//!   - History vectors are append-only audit logs. Nothing prunes them.
//!   - `game_phase` flips to Ended exactly once and never back.

use crate::event::GameEvent;
use crate::headlines::Headline;
use crate::revisions::DataRevision;
use crate::schedule::{pre_game_meeting_date, schedule_entry, MEETING_SCHEDULE};
use crate::shocks::ShockKind;
use crate::types::{Bps, Meeting};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Macro indicators, all in percent except payrolls (thousands of jobs).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EconomyState {
    pub gdp_growth: f64,
    pub cpi_inflation: f64,
    pub pce_inflation: f64,
    pub core_inflation: f64,
    pub unemployment_rate: f64,
    pub payrolls_change: f64,
    /// Carry-over term for unanchored inflation expectations.
    pub inflation_momentum: f64,
}

/// Market levels. sp500 is an index level; vix a volatility level;
/// treasuries in percent yield; dxy a dollar index level.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarketState {
    pub sp500: f64,
    pub vix: f64,
    pub treasury10y: f64,
    pub treasury2y: f64,
    pub dxy: f64,
}

/// A rate decision whose macro impact has not fully landed yet.
/// Partial effect applies from `partial_effect_meeting`, full effect at
/// `full_effect_meeting`; only the full application flips `applied` and
/// removes the entry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PendingEffect {
    pub origin_meeting: Meeting,
    pub decision_bps: Bps,
    pub hawk_score: i32,
    pub partial_effect_meeting: Meeting,
    pub full_effect_meeting: Meeting,
    pub applied: bool,
}

/// A currently active shock. Effects live in the static catalog.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ActiveShock {
    pub kind: ShockKind,
    pub start_meeting: Meeting,
    pub end_meeting: Meeting,
}

/// One row of the append-only decision audit log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateRecord {
    pub meeting: Meeting,
    pub date: NaiveDate,
    pub rate: f64,
    pub decision_bps: Bps,
    pub hawk_score: i32,
}

/// What the player signaled at a past meeting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuidanceRecord {
    pub meeting: Meeting,
    pub hawk_score: i32,
    pub guidance_ids: Vec<String>,
    pub decision_bps: Bps,
}

/// A forward rate projection the player placed on the dot plot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DotProjection {
    pub target_meeting: Meeting,
    pub placed_at_meeting: Meeting,
    pub projected_rate: f64,
}

/// Economy as it stood when a meeting was decided. Data revisions
/// reinterpret these after the fact.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct EconomySnapshot {
    pub meeting: Meeting,
    pub economy: EconomyState,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GamePhase {
    Playing,
    Ended,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EndResult {
    Win,
    Lose,
    Draw,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EndReason {
    CredibilityCollapse,
    Recession,
    Stagflation,
    RunawayInflation,
    SoftLanding,
    MuddleThrough,
}

impl EndReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CredibilityCollapse => "credibility_collapse",
            Self::Recession => "recession",
            Self::Stagflation => "stagflation",
            Self::RunawayInflation => "runaway_inflation",
            Self::SoftLanding => "soft_landing",
            Self::MuddleThrough => "muddle_through",
        }
    }
}

/// Initial conditions handed to a new game. Every field has a
/// documented fallback so a frontend can supply a partial snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StartingSnapshot {
    pub current_rate: f64,
    pub gdp_growth: f64,
    pub cpi_inflation: f64,
    pub pce_inflation: f64,
    pub core_inflation: f64,
    pub unemployment_rate: f64,
    pub payrolls_change: f64,
    pub sp500: f64,
    pub vix: f64,
    pub treasury10y: f64,
    pub treasury2y: f64,
    pub dxy: f64,
    pub market_expected_bps: Bps,
}

impl Default for StartingSnapshot {
    fn default() -> Self {
        Self {
            current_rate: 3.625,
            gdp_growth: 1.9,
            cpi_inflation: 2.4,
            pce_inflation: 2.8,
            core_inflation: 2.5,
            unemployment_rate: 4.3,
            payrolls_change: 130.0,
            sp500: 6836.0,
            vix: 20.6,
            treasury10y: 4.07,
            treasury2y: 3.76,
            dxy: 96.88,
            market_expected_bps: 0,
        }
    }
}

/// The single mutable aggregate for one play session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    // Meeting info
    pub meeting_number: Meeting,
    pub total_meetings: Meeting,
    pub meeting_date: NaiveDate,

    // Rate tracking
    /// Midpoint of the 25bp target band, percent.
    pub current_rate: f64,
    pub rate_history: Vec<RateRecord>,

    // Pending lagged effects
    pub pending_effects: Vec<PendingEffect>,

    // Economy and markets
    pub economy: EconomyState,
    pub markets: MarketState,

    // Player performance
    pub credibility: f64,
    pub credibility_history: Vec<f64>,
    pub total_score: f64,
    pub meeting_scores: Vec<f64>,

    // Shocks and narrative logs
    pub active_shocks: Vec<ActiveShock>,
    pub past_events: Vec<GameEvent>,
    pub recent_headlines: Vec<Headline>,

    // Data revisions
    pub data_revisions: Vec<DataRevision>,
    pub latest_revision: Option<DataRevision>,
    pub economy_history: Vec<EconomySnapshot>,

    // Statement consequences
    pub last_hawk_score: i32,
    pub last_guidance_ids: Vec<String>,
    pub guidance_history: Vec<GuidanceRecord>,

    // Dot plot
    pub dot_projections: Vec<DotProjection>,
    pub dot_history: Vec<DotProjection>,
    pub committee_dots: BTreeMap<Meeting, Vec<f64>>,

    // Game status
    pub game_phase: GamePhase,
    pub end_result: Option<EndResult>,
    pub end_reason: Option<EndReason>,

    // What changed since last meeting
    pub last_meeting_economy: Option<EconomyState>,
    pub last_meeting_markets: Option<MarketState>,
    pub economy_changes: Option<crate::decision::IndicatorDeltas>,

    // What the market prices in for the upcoming decision
    pub market_expected_bps: Bps,
}

impl GameState {
    /// Build the initial state for a fresh game.
    pub fn create(snapshot: &StartingSnapshot, total_meetings: Meeting) -> Self {
        Self {
            meeting_number: 1,
            total_meetings,
            meeting_date: MEETING_SCHEDULE[0].date(),
            current_rate: snapshot.current_rate,
            rate_history: vec![RateRecord {
                meeting: 0,
                date: pre_game_meeting_date(),
                rate: snapshot.current_rate,
                decision_bps: 0,
                hawk_score: 0,
            }],
            pending_effects: Vec::new(),
            economy: EconomyState {
                gdp_growth: snapshot.gdp_growth,
                cpi_inflation: snapshot.cpi_inflation,
                pce_inflation: snapshot.pce_inflation,
                core_inflation: snapshot.core_inflation,
                unemployment_rate: snapshot.unemployment_rate,
                payrolls_change: snapshot.payrolls_change,
                inflation_momentum: 0.0,
            },
            markets: MarketState {
                sp500: snapshot.sp500,
                vix: snapshot.vix,
                treasury10y: snapshot.treasury10y,
                treasury2y: snapshot.treasury2y,
                dxy: snapshot.dxy,
            },
            credibility: 100.0,
            credibility_history: vec![100.0],
            total_score: 0.0,
            meeting_scores: Vec::new(),
            active_shocks: Vec::new(),
            past_events: Vec::new(),
            recent_headlines: Vec::new(),
            data_revisions: Vec::new(),
            latest_revision: None,
            economy_history: Vec::new(),
            last_hawk_score: 0,
            last_guidance_ids: Vec::new(),
            guidance_history: Vec::new(),
            dot_projections: Vec::new(),
            dot_history: Vec::new(),
            committee_dots: BTreeMap::new(),
            game_phase: GamePhase::Playing,
            end_result: None,
            end_reason: None,
            last_meeting_economy: None,
            last_meeting_markets: None,
            economy_changes: None,
            market_expected_bps: snapshot.market_expected_bps,
        }
    }

    pub fn meeting_display_date(&self) -> &'static str {
        schedule_entry(self.meeting_number).display
    }

    /// Target band around the midpoint, formatted for display.
    pub fn rate_range(&self) -> String {
        format!(
            "{:.2}% - {:.2}%",
            self.current_rate - 0.125,
            self.current_rate + 0.125
        )
    }

    pub fn is_ended(&self) -> bool {
        self.game_phase == GamePhase::Ended
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_uses_snapshot_defaults() {
        let state = GameState::create(&StartingSnapshot::default(), 8);
        assert_eq!(state.meeting_number, 1);
        assert_eq!(state.current_rate, 3.625);
        assert_eq!(state.economy.unemployment_rate, 4.3);
        assert_eq!(state.credibility, 100.0);
        assert_eq!(state.rate_history.len(), 1);
        assert_eq!(state.rate_history[0].meeting, 0);
    }

    #[test]
    fn rate_range_brackets_the_midpoint() {
        let state = GameState::create(&StartingSnapshot::default(), 8);
        assert_eq!(state.rate_range(), "3.50% - 3.75%");
    }

    #[test]
    fn partial_snapshot_falls_back_field_by_field() {
        let snapshot: StartingSnapshot =
            serde_json::from_str(r#"{ "current_rate": 5.125, "vix": 31.0 }"#).unwrap();
        assert_eq!(snapshot.current_rate, 5.125);
        assert_eq!(snapshot.vix, 31.0);
        assert_eq!(snapshot.gdp_growth, 1.9);
        assert_eq!(snapshot.dxy, 96.88);
    }
}
