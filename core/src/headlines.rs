//! Headline generation for the between-meeting news ticker.
//!
//! Ordering is deliberate: revisions first (most surprising), then
//! shocks, then threshold-triggered data and market moves. Always at
//! least one headline, never more than the configured cap.

use crate::decision::IndicatorDeltas;
use crate::revisions::DataRevision;
use crate::state::{ActiveShock, GameState};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeadlineKind {
    Revision,
    Shock,
    Data,
    Market,
    General,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Headline {
    pub text: String,
    pub source: String,
    pub kind: HeadlineKind,
}

impl Headline {
    fn new(text: impl Into<String>, source: &str, kind: HeadlineKind) -> Self {
        Self {
            text: text.into(),
            source: source.to_string(),
            kind,
        }
    }
}

pub fn generate_headlines(
    state: &GameState,
    changes: &IndicatorDeltas,
    new_shocks: &[ActiveShock],
    revision: Option<&DataRevision>,
    max_headlines: usize,
) -> Vec<Headline> {
    let mut headlines = Vec::new();

    if let Some(revision) = revision {
        headlines.push(Headline::new(
            revision.headline.clone(),
            "BLS/BEA",
            HeadlineKind::Revision,
        ));
    }

    for shock in new_shocks {
        headlines.push(Headline::new(
            shock.kind.spec().headline,
            "Reuters",
            HeadlineKind::Shock,
        ));
    }

    let economy = &state.economy;

    if changes.cpi_inflation > 0.2 {
        headlines.push(Headline::new(
            format!("Inflation Ticks Up to {:.1}%", economy.cpi_inflation),
            "BLS",
            HeadlineKind::Data,
        ));
    } else if changes.cpi_inflation < -0.2 {
        headlines.push(Headline::new(
            format!("Inflation Cools to {:.1}%", economy.cpi_inflation),
            "BLS",
            HeadlineKind::Data,
        ));
    }

    if changes.gdp_growth > 0.2 {
        headlines.push(Headline::new(
            format!("GDP Growth Accelerates to {:.1}%", economy.gdp_growth),
            "BEA",
            HeadlineKind::Data,
        ));
    } else if changes.gdp_growth < -0.2 {
        headlines.push(Headline::new(
            format!("Economic Growth Slows to {:.1}%", economy.gdp_growth),
            "BEA",
            HeadlineKind::Data,
        ));
    }

    if economy.payrolls_change > 200.0 {
        headlines.push(Headline::new(
            format!(
                "Jobs Report Blows Past Expectations: +{:.0}K",
                economy.payrolls_change
            ),
            "BLS",
            HeadlineKind::Data,
        ));
    } else if economy.payrolls_change < 50.0 {
        headlines.push(Headline::new(
            format!("Hiring Slows: Only {:.0}K Jobs Added", economy.payrolls_change),
            "BLS",
            HeadlineKind::Data,
        ));
    }

    if changes.unemployment_rate > 0.2 {
        headlines.push(Headline::new(
            format!("Unemployment Rises to {:.1}%", economy.unemployment_rate),
            "BLS",
            HeadlineKind::Data,
        ));
    } else if changes.unemployment_rate < -0.2 {
        headlines.push(Headline::new(
            format!("Unemployment Falls to {:.1}%", economy.unemployment_rate),
            "BLS",
            HeadlineKind::Data,
        ));
    }

    // Big cumulative equity moves since last meeting make the ticker.
    if let Some(last_markets) = &state.last_meeting_markets {
        let move_pct = (state.markets.sp500 - last_markets.sp500) / last_markets.sp500;
        if move_pct.abs() > 0.03 {
            let direction = if move_pct > 0.0 { "Rallies" } else { "Slides" };
            headlines.push(Headline::new(
                format!("S&P 500 {direction} to {:.0}", state.markets.sp500),
                "CNBC",
                HeadlineKind::Market,
            ));
        }
    }

    if headlines.is_empty() {
        headlines.push(Headline::new(
            "Markets Await Fed Decision",
            "Bloomberg",
            HeadlineKind::General,
        ));
    }

    headlines.truncate(max_headlines);
    headlines
}
