//! Read-only dashboard snapshot for the view layer.
//!
//! Formats the live state into the shape the dashboard renders: target
//! band strings, trend arrows against last meeting, forecast pairs.
//! Nothing here feeds back into the simulation.

use crate::headlines::Headline;
use crate::state::GameState;
use crate::types::Bps;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    Up,
    Down,
    Stable,
}

fn trend(current: f64, previous: Option<f64>) -> Trend {
    match previous {
        None => Trend::Stable,
        Some(previous) => {
            let diff = current - previous;
            if diff.abs() < 0.1 {
                Trend::Stable
            } else if diff > 0.0 {
                Trend::Up
            } else {
                Trend::Down
            }
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndicatorView {
    pub label: String,
    pub value: String,
    pub trend: Trend,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketView {
    pub label: String,
    pub value: f64,
    pub display: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ForecastPair {
    pub current: f64,
    pub forecast: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardView {
    pub meeting_number: u32,
    pub total_meetings: u32,
    pub meeting_display_date: String,
    pub rate_target: String,
    pub rate_effective: String,
    pub rate_change: String,
    pub inflation: Vec<IndicatorView>,
    pub employment: Vec<IndicatorView>,
    pub markets: Vec<MarketView>,
    pub yield_spread_bps: f64,
    pub gdp: ForecastPair,
    pub unemployment: ForecastPair,
    pub inflation_forecast: ForecastPair,
    pub market_expected_bps: Bps,
    pub credibility: f64,
    pub recent_headlines: Vec<Headline>,
}

pub fn dashboard_view(state: &GameState) -> DashboardView {
    let economy = &state.economy;
    let markets = &state.markets;
    let previous = state.last_meeting_economy;

    let rate_change = state
        .rate_history
        .last()
        .filter(|r| r.meeting >= 1)
        .map(|r| {
            if r.decision_bps == 0 {
                "HOLD".to_string()
            } else {
                format!("{:+} bps", r.decision_bps)
            }
        })
        .unwrap_or_else(|| "HOLD".to_string());

    let pct = |v: f64| format!("{v:.1}%");

    DashboardView {
        meeting_number: state.meeting_number,
        total_meetings: state.total_meetings,
        meeting_display_date: state.meeting_display_date().to_string(),
        rate_target: state.rate_range(),
        rate_effective: format!("{:.2}%", state.current_rate - 0.01),
        rate_change,
        inflation: vec![
            IndicatorView {
                label: "CPI".to_string(),
                value: pct(economy.cpi_inflation),
                trend: trend(economy.cpi_inflation, previous.map(|p| p.cpi_inflation)),
            },
            IndicatorView {
                label: "Core CPI".to_string(),
                value: pct(economy.core_inflation),
                trend: trend(economy.core_inflation, previous.map(|p| p.core_inflation)),
            },
            IndicatorView {
                label: "PCE".to_string(),
                value: pct(economy.pce_inflation),
                trend: trend(economy.pce_inflation, previous.map(|p| p.pce_inflation)),
            },
        ],
        employment: vec![
            IndicatorView {
                label: "Unemployment".to_string(),
                value: pct(economy.unemployment_rate),
                trend: trend(
                    economy.unemployment_rate,
                    previous.map(|p| p.unemployment_rate),
                ),
            },
            IndicatorView {
                label: "U-6".to_string(),
                value: pct(economy.unemployment_rate * 1.8),
                trend: Trend::Stable,
            },
            IndicatorView {
                label: "Payrolls".to_string(),
                value: format!(
                    "{}{:.0}K",
                    if economy.payrolls_change >= 0.0 { "+" } else { "" },
                    economy.payrolls_change
                ),
                trend: trend(economy.payrolls_change, previous.map(|p| p.payrolls_change)),
            },
        ],
        markets: vec![
            MarketView {
                label: "S&P 500".to_string(),
                value: markets.sp500,
                display: format!("{:.0}", markets.sp500),
            },
            MarketView {
                label: "VIX".to_string(),
                value: markets.vix,
                display: format!("{:.2}", markets.vix),
            },
            MarketView {
                label: "10Y".to_string(),
                value: markets.treasury10y,
                display: format!("{:.2}%", markets.treasury10y),
            },
            MarketView {
                label: "2Y".to_string(),
                value: markets.treasury2y,
                display: format!("{:.2}%", markets.treasury2y),
            },
            MarketView {
                label: "DXY".to_string(),
                value: markets.dxy,
                display: format!("{:.2}", markets.dxy),
            },
        ],
        yield_spread_bps: ((markets.treasury10y - markets.treasury2y) * 100.0).round(),
        gdp: ForecastPair {
            current: economy.gdp_growth,
            forecast: economy.gdp_growth - 0.1,
        },
        unemployment: ForecastPair {
            current: economy.unemployment_rate,
            forecast: economy.unemployment_rate + 0.2,
        },
        inflation_forecast: ForecastPair {
            current: economy.pce_inflation,
            forecast: economy.pce_inflation - 0.3,
        },
        market_expected_bps: state.market_expected_bps,
        credibility: state.credibility,
        recent_headlines: state.recent_headlines.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{GameState, StartingSnapshot};

    #[test]
    fn fresh_game_formats_the_starting_band() {
        let state = GameState::create(&StartingSnapshot::default(), 8);
        let view = dashboard_view(&state);
        assert_eq!(view.rate_target, "3.50% - 3.75%");
        assert_eq!(view.rate_change, "HOLD");
        assert_eq!(view.meeting_display_date, "March 17-18, 2026");
    }

    #[test]
    fn trends_compare_against_last_meeting() {
        let mut state = GameState::create(&StartingSnapshot::default(), 8);
        let mut previous = state.economy;
        previous.cpi_inflation = state.economy.cpi_inflation - 0.4;
        state.last_meeting_economy = Some(previous);
        let view = dashboard_view(&state);
        assert_eq!(view.inflation[0].trend, Trend::Up);
    }
}
