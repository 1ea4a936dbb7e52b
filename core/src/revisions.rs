//! Data revisions: prior releases turn out to have been wrong.
//!
//! Purely narrative: the revised number rewrites history for the
//! briefing, not the live indicators. Rolls from meeting 3 on, once
//! there is history to reinterpret.

use crate::rng::GameRng;
use crate::state::{EconomySnapshot, GameState};
use crate::types::Meeting;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RevisionSeries {
    Payrolls,
    Gdp,
    Cpi,
}

impl RevisionSeries {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Payrolls => "Nonfarm Payrolls",
            Self::Gdp => "GDP Growth",
            Self::Cpi => "CPI Inflation",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataRevision {
    pub meeting: Meeting,
    pub revised_meeting: Meeting,
    pub series: RevisionSeries,
    pub original_value: f64,
    pub revised_value: f64,
    pub delta: f64,
    pub headline: String,
}

fn payrolls_headline(original: f64, revised: f64) -> String {
    let direction = if revised < original { "Down" } else { "Up" };
    format!(
        "Payrolls Revised {direction} from {}{:.0}K to {}{:.0}K",
        if original >= 0.0 { "+" } else { "" },
        original.round(),
        if revised >= 0.0 { "+" } else { "" },
        revised.round(),
    )
}

fn gdp_headline(original: f64, revised: f64) -> String {
    let direction = if revised < original { "Lower" } else { "Higher" };
    format!("GDP Revised {direction}: {original:.1}% Was Actually {revised:.1}%")
}

fn cpi_headline(original: f64, revised: f64) -> String {
    let direction = if revised > original { "Higher" } else { "Lower" };
    format!("CPI Revised {direction}: Inflation Was {revised:.1}%, Not {original:.1}%")
}

/// Roll for a revision of the most recent history entry.
pub fn roll_for_revision(
    state: &GameState,
    probability: f64,
    rng: &mut GameRng,
) -> Option<DataRevision> {
    // Not enough history to reinterpret in the first two meetings.
    if state.meeting_number <= 2 || state.economy_history.is_empty() {
        return None;
    }
    if !rng.chance(probability) {
        return None;
    }

    let prior: &EconomySnapshot = state
        .economy_history
        .last()
        .expect("history checked non-empty");

    let series = match rng.next_u64_below(3) {
        0 => RevisionSeries::Payrolls,
        1 => RevisionSeries::Gdp,
        _ => RevisionSeries::Cpi,
    };

    let (original_value, delta) = match series {
        RevisionSeries::Payrolls => (
            prior.economy.payrolls_change,
            (rng.sign() * (40.0 + rng.next_f64() * 50.0)).round(),
        ),
        RevisionSeries::Gdp => (
            prior.economy.gdp_growth,
            rng.sign() * (0.3 + rng.next_f64() * 0.4),
        ),
        RevisionSeries::Cpi => (
            prior.economy.cpi_inflation,
            rng.sign() * (0.2 + rng.next_f64() * 0.3),
        ),
    };
    let revised_value = original_value + delta;

    let headline = match series {
        RevisionSeries::Payrolls => payrolls_headline(original_value, revised_value),
        RevisionSeries::Gdp => gdp_headline(original_value, revised_value),
        RevisionSeries::Cpi => cpi_headline(original_value, revised_value),
    };

    Some(DataRevision {
        meeting: state.meeting_number,
        revised_meeting: prior.meeting,
        series,
        original_value,
        revised_value,
        delta,
        headline,
    })
}
