//! Pre-meeting briefing materials, generated from live state.
//!
//! Five sections: regional anecdotes (beige book), staff vs market
//! forecast bands, key data releases with beat/miss classification, a
//! market positioning readout, and a pair-or-more of deliberately
//! conflicting signals. All prose is assembled from state; nothing in
//! here feeds back into the simulation.

use crate::config::EngineConfig;
use crate::rng::GameRng;
use crate::shocks::ShockKind;
use crate::state::GameState;
use crate::types::Bps;
use serde::{Deserialize, Serialize};

// ── District data ──────────────────────────────────────────────────

struct District {
    name: &'static str,
    number: u8,
    sectors: &'static [&'static str],
}

const DISTRICTS: [District; 12] = [
    District { name: "Boston", number: 1, sectors: &["tech", "education", "biotech"] },
    District { name: "New York", number: 2, sectors: &["finance", "real_estate", "media"] },
    District { name: "Philadelphia", number: 3, sectors: &["pharma", "manufacturing", "healthcare"] },
    District { name: "Cleveland", number: 4, sectors: &["manufacturing", "steel", "auto"] },
    District { name: "Richmond", number: 5, sectors: &["banking", "government", "agriculture"] },
    District { name: "Atlanta", number: 6, sectors: &["tourism", "logistics", "construction"] },
    District { name: "Chicago", number: 7, sectors: &["manufacturing", "agriculture", "commodities"] },
    District { name: "St. Louis", number: 8, sectors: &["agriculture", "transportation", "defense"] },
    District { name: "Minneapolis", number: 9, sectors: &["agriculture", "mining", "energy"] },
    District { name: "Kansas City", number: 10, sectors: &["agriculture", "energy", "aerospace"] },
    District { name: "Dallas", number: 11, sectors: &["energy", "tech", "real_estate"] },
    District { name: "San Francisco", number: 12, sectors: &["tech", "trade", "real_estate"] },
];

/// Industry noun phrase used to open a district narrative.
fn sector_subject(sector: &str) -> &'static str {
    match sector {
        "manufacturing" => "Manufacturing activity",
        "finance" => "Financial services firms",
        "banking" => "Community and regional banks",
        "tech" => "Technology firms",
        "energy" => "Energy sector activity",
        "agriculture" => "Agricultural conditions",
        "real_estate" => "Residential and commercial real estate",
        "tourism" => "Tourism and hospitality",
        "construction" => "Construction activity",
        "logistics" => "Freight and logistics activity",
        "education" => "Higher education institutions",
        "healthcare" => "Healthcare systems",
        "biotech" => "Biotechnology and life sciences firms",
        "pharma" => "Pharmaceutical manufacturers",
        "auto" => "Auto manufacturing",
        "steel" => "Steel production",
        "government" => "Government services and federal employment",
        "media" => "Media and entertainment firms",
        "commodities" => "Commodity markets",
        "mining" => "Mining operations",
        "transportation" => "Transportation and shipping",
        "defense" => "Defense and aerospace contractors",
        "aerospace" => "Aerospace manufacturers",
        "trade" => "Trade and port activity",
        _ => "Business activity",
    }
}

/// Which sectors a shock drags on in the regional reports.
fn shock_affected_sectors(kind: ShockKind) -> &'static [&'static str] {
    match kind {
        ShockKind::OilSpike => &["energy"],
        ShockKind::BankingStress => &["finance", "banking", "real_estate"],
        ShockKind::TradeDisruption => &["manufacturing", "trade", "logistics"],
        ShockKind::LaborSurge => &["construction", "tourism", "logistics"],
        ShockKind::TechSelloff => &["tech", "biotech", "media"],
        ShockKind::GrowthScare => &["manufacturing", "construction", "auto"],
        ShockKind::ConsumerStrength => &["tourism", "real_estate", "trade"],
        ShockKind::HousingCooldown => &["real_estate", "construction"],
        _ => &[],
    }
}

// ── Descriptor tables ──────────────────────────────────────────────

fn growth_descriptor(value: f64) -> &'static str {
    if value >= 3.0 {
        "expanded at a robust pace"
    } else if value >= 2.0 {
        "expanded at a moderate pace"
    } else if value >= 1.0 {
        "expanded at a modest pace"
    } else if value >= 0.0 {
        "was essentially flat"
    } else if value >= -0.5 {
        "contracted modestly"
    } else {
        "contracted sharply"
    }
}

fn hiring_descriptor(value: f64) -> &'static str {
    if value >= 200.0 {
        "reported strong hiring gains"
    } else if value >= 120.0 {
        "reported modest hiring gains"
    } else if value >= 50.0 {
        "reported flat employment levels"
    } else if value >= 0.0 {
        "reported minimal hiring activity"
    } else {
        "reported layoffs and reduced hours"
    }
}

fn prices_descriptor(value: f64) -> &'static str {
    if value >= 3.5 {
        "reported significant upward price pressures"
    } else if value >= 2.5 {
        "noted moderate price increases"
    } else if value >= 1.5 {
        "indicated subdued price pressures"
    } else if value >= 0.5 {
        "reported declining prices in several categories"
    } else {
        "reported broad-based price declines"
    }
}

const POSITIVE_DETAILS: [&str; 6] = [
    "robust consumer demand",
    "strong order backlogs",
    "improved supply chain conditions",
    "increased capital investment plans",
    "rising export demand",
    "a pickup in business confidence",
];

const NEGATIVE_DETAILS: [&str; 6] = [
    "weakening consumer sentiment",
    "elevated input costs",
    "tightening credit conditions",
    "reduced capital spending plans",
    "difficulty filling open positions",
    "margin compression from rising costs",
];

const NEUTRAL_DETAILS: [&str; 4] = [
    "mixed signals across subsectors",
    "uncertainty about the near-term outlook",
    "stable but uneven conditions",
    "cautious optimism among contacts",
];

fn overall_tone(gdp_growth: f64) -> &'static str {
    if gdp_growth >= 2.5 {
        "broadly optimistic"
    } else if gdp_growth >= 1.5 {
        "cautiously optimistic"
    } else if gdp_growth >= 0.5 {
        "mixed with modest growth"
    } else if gdp_growth >= -0.5 {
        "mixed with growing caution"
    } else {
        "broadly pessimistic"
    }
}

// ── Beige book ─────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sentiment {
    Positive,
    Negative,
    Mixed,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DistrictReport {
    pub district: String,
    pub number: u8,
    pub narrative: String,
    pub sentiment: Sentiment,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BeigeBook {
    pub summary: String,
    pub district_reports: Vec<DistrictReport>,
    pub overall_tone: String,
}

fn shock_bias(district: &District, state: &GameState) -> f64 {
    let mut bias = 0.0;
    for shock in &state.active_shocks {
        let affected = shock_affected_sectors(shock.kind);
        if district.sectors.iter().any(|s| affected.contains(s)) {
            bias -= 0.5;
        }
    }
    bias
}

fn generate_beige_book(state: &GameState, rng: &mut GameRng) -> BeigeBook {
    let economy = &state.economy;

    // 4-6 districts with geographic spread.
    let count = 4 + rng.next_u64_below(3) as usize;
    let order = rng.shuffled_indices(DISTRICTS.len());
    let mut selected: Vec<&District> =
        order.iter().take(count).map(|&i| &DISTRICTS[i]).collect();
    selected.sort_by_key(|d| d.number);

    let district_reports = selected
        .iter()
        .map(|district| {
            // Regional variation around the national numbers.
            let bias = shock_bias(district, state);
            let regional_gdp = economy.gdp_growth + rng.range(-0.4, 0.4) + bias;
            let regional_payrolls = economy.payrolls_change + rng.range(-30.0, 30.0) + bias * 40.0;
            let regional_inflation = economy.cpi_inflation + rng.range(-0.3, 0.3);

            let sector = rng.pick(district.sectors);
            let subject = sector_subject(sector);
            let activity = growth_descriptor(regional_gdp);
            let sentiment_score =
                if regional_gdp > 2.0 { 1.0 } else if regional_gdp < 0.5 { -1.0 } else { 0.0 };
            let detail = if sentiment_score + bias > 0.5 {
                rng.pick(&POSITIVE_DETAILS)
            } else if sentiment_score + bias < -0.5 {
                rng.pick(&NEGATIVE_DETAILS)
            } else {
                rng.pick(&NEUTRAL_DETAILS)
            };

            let mut narrative = match rng.next_u64_below(3) {
                0 => format!("{subject} in the {} district {activity}.", district.name),
                1 => format!(
                    "{subject} in the {} district {activity}, with contacts citing {detail}.",
                    district.name
                ),
                _ => format!(
                    "{subject} in {} {activity}. Contacts reported {detail}.",
                    district.name
                ),
            };

            // Hiring context about half the time, prices less often.
            if rng.chance(0.5) {
                narrative.push_str(&format!(" Contacts {}.", hiring_descriptor(regional_payrolls)));
            }
            if rng.chance(0.4) {
                narrative.push_str(&format!(" Firms {}.", prices_descriptor(regional_inflation)));
            }

            DistrictReport {
                district: district.name.to_string(),
                number: district.number,
                narrative,
                sentiment: if sentiment_score > 0.0 {
                    Sentiment::Positive
                } else if sentiment_score < 0.0 {
                    Sentiment::Negative
                } else {
                    Sentiment::Mixed
                },
            }
        })
        .collect();

    let tone = overall_tone(economy.gdp_growth);

    let highlight = if economy.cpi_inflation > 3.0 {
        "Price pressures remained a persistent concern, with many contacts reporting elevated input costs."
    } else if economy.cpi_inflation < 2.0 {
        "Price pressures continued to ease, though some sectors reported sticky cost pressures."
    } else if economy.payrolls_change > 180.0 {
        "Labor markets remained tight, with firms continuing to report difficulty attracting workers."
    } else if economy.payrolls_change < 60.0 {
        "Hiring slowed across most districts, with some firms announcing hiring freezes."
    } else if economy.gdp_growth > 2.5 {
        "Consumer spending was a bright spot, supporting activity in services and retail."
    } else if economy.gdp_growth < 1.0 {
        "Several districts noted softer consumer spending and increased caution among businesses."
    } else {
        "Conditions varied across sectors and regions, with no single theme dominating reports."
    };

    let summary = match rng.next_u64_below(2) {
        0 => format!(
            "Overall economic activity across the twelve Federal Reserve districts {tone} since the last reporting period. {highlight}"
        ),
        _ => format!(
            "Economic conditions were {tone} across most districts in the latest reporting period. {highlight}"
        ),
    };

    BeigeBook {
        summary,
        district_reports,
        overall_tone: tone.to_string(),
    }
}

// ── Staff projections ──────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ForecastBand {
    pub current: f64,
    pub staff_forecast: f64,
    pub market_forecast: f64,
    pub range: (f64, f64),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StaffProjections {
    pub gdp: ForecastBand,
    pub inflation: ForecastBand,
    pub unemployment: ForecastBand,
    pub fed_funds: ForecastBand,
    pub narrative: String,
}

fn r1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

fn generate_staff_projections(
    state: &GameState,
    config: &EngineConfig,
    rng: &mut GameRng,
) -> StaffProjections {
    let economy = &state.economy;
    let previous = state.last_meeting_economy;

    // Forecast uncertainty grows as the game wears on.
    let uncertainty = 1.0 + (state.meeting_number as f64 - 1.0) * 0.08;

    // Staff leans on mean reversion; the market extends recent trend.
    let gdp_staff = economy.gdp_growth
        + (config.gdp_target - economy.gdp_growth) * 0.3
        + rng.range(-0.2, 0.2);
    let gdp_trend = previous.map_or(0.0, |p| economy.gdp_growth - p.gdp_growth);
    let gdp_market = economy.gdp_growth + gdp_trend * 0.5 + rng.range(-0.15, 0.15);
    let gdp_range = 0.4 * uncertainty;

    let pce_staff = economy.pce_inflation
        + (config.inflation_target - economy.pce_inflation) * 0.25
        + rng.range(-0.2, 0.2);
    let pce_trend = previous.map_or(0.0, |p| economy.pce_inflation - p.pce_inflation);
    let pce_market = economy.pce_inflation + pce_trend * 0.6 + rng.range(-0.15, 0.15);
    let pce_range = 0.4 * uncertainty;

    let unemp_staff = economy.unemployment_rate
        + (4.5 - economy.unemployment_rate) * 0.2
        + rng.range(-0.15, 0.15);
    let unemp_trend = previous.map_or(0.0, |p| economy.unemployment_rate - p.unemployment_rate);
    let unemp_market = economy.unemployment_rate + unemp_trend * 0.5 + rng.range(-0.1, 0.1);
    let unemp_range = 0.3 * uncertainty;

    // Staff expects gradual normalization toward neutral; the market
    // extrapolates the recent decision run rate.
    let ff_staff = state.current_rate
        + (config.neutral_rate - state.current_rate) * 0.15
        + rng.range(-0.125, 0.125);
    let recent = &state.rate_history[state.rate_history.len().saturating_sub(3)..];
    let avg_decision: f64 = recent.iter().map(|r| r.decision_bps as f64).sum::<f64>()
        / recent.len().max(1) as f64;
    let ff_market = state.current_rate + avg_decision / 100.0 * 0.5 + rng.range(-0.125, 0.125);
    let ff_range = 0.375 * uncertainty;

    let mut narrative_parts: Vec<&'static str> = Vec::new();
    narrative_parts.push(if economy.pce_inflation > 2.5 {
        "Staff continues to expect inflation to moderate over the forecast horizon, though the path remains uncertain."
    } else if economy.pce_inflation > 1.8 {
        "Staff projects inflation to remain near current levels, with risks balanced around the forecast."
    } else {
        "Staff notes downside risks to inflation, with the possibility that price pressures could fall below target."
    });
    narrative_parts.push(if economy.gdp_growth > 2.0 {
        "The growth outlook is moderately positive, supported by resilient consumer spending."
    } else {
        "Growth is projected to remain below trend, reflecting the cumulative effects of tighter financial conditions."
    });
    if !state.pending_effects.is_empty() {
        narrative_parts.push(
            "Staff emphasizes that the full impact of prior policy actions has not yet been fully realized, and conditions are expected to evolve as these effects materialize.",
        );
    }
    if state.meeting_number >= 4 {
        narrative_parts.push(
            "The degree of uncertainty around the staff forecast is elevated, reflecting conflicting signals in the incoming data.",
        );
    }

    StaffProjections {
        gdp: ForecastBand {
            current: r1(economy.gdp_growth),
            staff_forecast: r1(gdp_staff),
            market_forecast: r1(gdp_market),
            range: (r1(gdp_staff - gdp_range), r1(gdp_staff + gdp_range)),
        },
        inflation: ForecastBand {
            current: r1(economy.pce_inflation),
            staff_forecast: r1(pce_staff),
            market_forecast: r1(pce_market),
            range: (r1(pce_staff - pce_range), r1(pce_staff + pce_range)),
        },
        unemployment: ForecastBand {
            current: r1(economy.unemployment_rate),
            staff_forecast: r1(unemp_staff),
            market_forecast: r1(unemp_market),
            range: (r1(unemp_staff - unemp_range), r1(unemp_staff + unemp_range)),
        },
        fed_funds: ForecastBand {
            current: r1(state.current_rate),
            staff_forecast: r1(ff_staff),
            market_forecast: r1(ff_market),
            range: (r1(ff_staff - ff_range), r1(ff_staff + ff_range)),
        },
        narrative: narrative_parts.join(" "),
    }
}

// ── Key data releases ──────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SurpriseKind {
    Beat,
    Miss,
    Inline,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Significance {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataRelease {
    pub id: String,
    pub name: String,
    pub source: String,
    pub actual: String,
    pub expected: String,
    pub previous: String,
    pub surprise: SurpriseKind,
    pub significance: Significance,
}

#[derive(Clone, Copy, PartialEq)]
enum ReleaseFormat {
    Jobs,
    Pct,
    Index,
    Claims,
}

struct ReleaseDef {
    id: &'static str,
    name: &'static str,
    source: &'static str,
    format: ReleaseFormat,
    significance: Significance,
    /// Lower actual counts as a beat (unemployment, claims).
    inverse: bool,
}

const RELEASE_DEFS: [ReleaseDef; 10] = [
    ReleaseDef { id: "nfp", name: "Nonfarm Payrolls", source: "Bureau of Labor Statistics", format: ReleaseFormat::Jobs, significance: Significance::High, inverse: false },
    ReleaseDef { id: "cpi", name: "Consumer Price Index (YoY)", source: "Bureau of Labor Statistics", format: ReleaseFormat::Pct, significance: Significance::High, inverse: false },
    ReleaseDef { id: "pce", name: "PCE Price Index (YoY)", source: "Bureau of Economic Analysis", format: ReleaseFormat::Pct, significance: Significance::High, inverse: false },
    ReleaseDef { id: "gdp", name: "GDP Growth (Q/Q Annualized)", source: "Bureau of Economic Analysis", format: ReleaseFormat::Pct, significance: Significance::High, inverse: false },
    ReleaseDef { id: "unemployment", name: "Unemployment Rate", source: "Bureau of Labor Statistics", format: ReleaseFormat::Pct, significance: Significance::High, inverse: true },
    ReleaseDef { id: "retail", name: "Retail Sales (MoM)", source: "Census Bureau", format: ReleaseFormat::Pct, significance: Significance::Medium, inverse: false },
    ReleaseDef { id: "ism", name: "ISM Manufacturing PMI", source: "Institute for Supply Management", format: ReleaseFormat::Index, significance: Significance::Medium, inverse: false },
    ReleaseDef { id: "housing", name: "Housing Starts (MoM)", source: "Census Bureau", format: ReleaseFormat::Pct, significance: Significance::Medium, inverse: false },
    ReleaseDef { id: "claims", name: "Initial Jobless Claims (Weekly Avg)", source: "Department of Labor", format: ReleaseFormat::Claims, significance: Significance::Low, inverse: true },
    ReleaseDef { id: "consumer_conf", name: "Consumer Confidence Index", source: "Conference Board", format: ReleaseFormat::Index, significance: Significance::Low, inverse: false },
];

fn format_release_value(value: Option<f64>, format: ReleaseFormat) -> String {
    match value {
        None => "—".to_string(),
        Some(v) => match format {
            ReleaseFormat::Jobs => {
                format!("{}{:.0}K", if v >= 0.0 { "+" } else { "" }, v.round())
            }
            ReleaseFormat::Pct => format!("{v:.1}%"),
            ReleaseFormat::Index => format!("{v:.1}"),
            ReleaseFormat::Claims => format!("{:.0}K", v.round()),
        },
    }
}

fn generate_data_releases(state: &GameState, rng: &mut GameRng) -> Vec<DataRelease> {
    let economy = &state.economy;
    let previous = state.last_meeting_economy;
    let mut releases = Vec::new();

    for def in &RELEASE_DEFS {
        let (actual, prior): (f64, Option<f64>) = match def.id {
            "nfp" => (economy.payrolls_change, previous.map(|p| p.payrolls_change)),
            "cpi" => (economy.cpi_inflation, previous.map(|p| p.cpi_inflation)),
            "pce" => (economy.pce_inflation, previous.map(|p| p.pce_inflation)),
            "gdp" => (economy.gdp_growth, previous.map(|p| p.gdp_growth)),
            "unemployment" => (
                economy.unemployment_rate,
                previous.map(|p| p.unemployment_rate),
            ),
            "retail" => {
                let actual = economy.gdp_growth * 0.25 + rng.range(-0.3, 0.3);
                let prior = previous.map(|p| p.gdp_growth * 0.25 + rng.range(-0.2, 0.2));
                (actual, prior)
            }
            "ism" => {
                let actual = 50.0 + economy.gdp_growth * 1.8 + rng.range(-1.5, 1.5);
                let prior = previous.map(|p| 50.0 + p.gdp_growth * 1.8 + rng.range(-1.0, 1.0));
                (actual, prior)
            }
            "housing" => {
                // Higher policy rates suppress starts.
                let actual = (3.5 - state.current_rate) * 0.8 + rng.range(-0.5, 0.5);
                (actual, previous.map(|_| actual + rng.range(-0.4, 0.4)))
            }
            "claims" => {
                let actual = 250.0 - economy.payrolls_change * 0.3 + rng.range(-15.0, 15.0);
                let prior =
                    previous.map(|p| 250.0 - p.payrolls_change * 0.3 + rng.range(-10.0, 10.0));
                (actual, prior)
            }
            _ => {
                // Consumer confidence: growth plus equity wealth effect.
                let actual = 100.0
                    + economy.gdp_growth * 5.0
                    + (state.markets.sp500 - 6500.0) * 0.005
                    + rng.range(-3.0, 3.0);
                (actual, previous.map(|_| actual + rng.range(-4.0, 4.0)))
            }
        };

        // Consensus sits near the print, with enough noise for beats
        // and misses to happen.
        let noise_scale = match def.format {
            ReleaseFormat::Jobs => 15.0,
            ReleaseFormat::Claims => 8.0,
            ReleaseFormat::Index => 1.5,
            ReleaseFormat::Pct => 0.15,
        };
        let expected = actual + rng.range(-noise_scale, noise_scale);

        let surprise_threshold = match def.format {
            ReleaseFormat::Jobs => 10.0,
            ReleaseFormat::Claims => 5.0,
            ReleaseFormat::Index => 1.0,
            ReleaseFormat::Pct => 0.1,
        };
        let diff = if def.inverse { expected - actual } else { actual - expected };
        let surprise = if diff > surprise_threshold {
            SurpriseKind::Beat
        } else if diff < -surprise_threshold {
            SurpriseKind::Miss
        } else {
            SurpriseKind::Inline
        };

        releases.push(DataRelease {
            id: def.id.to_string(),
            name: def.name.to_string(),
            source: def.source.to_string(),
            actual: format_release_value(Some(actual), def.format),
            expected: format_release_value(Some(expected), def.format),
            previous: format_release_value(prior, def.format),
            surprise,
            significance: def.significance,
        });
    }

    // Every high-significance release, plus one or two extras.
    let (high, others): (Vec<DataRelease>, Vec<DataRelease>) = releases
        .into_iter()
        .partition(|r| r.significance == Significance::High);
    let extra_count = 1 + rng.next_u64_below(2) as usize;
    let order = rng.shuffled_indices(others.len());
    let mut selected = high;
    selected.extend(order.into_iter().take(extra_count).map(|i| others[i].clone()));
    selected
}

// ── Market positioning ─────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RateProbabilities {
    pub cut50: u32,
    pub cut25: u32,
    pub hold: u32,
    pub hike25: u32,
    pub hike50: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketPositioning {
    pub expected_bps: Bps,
    pub probabilities: RateProbabilities,
    pub shift_since_last_meeting: String,
    pub key_drivers: Vec<String>,
    pub future_guidance: String,
}

fn generate_market_positioning(state: &GameState, rng: &mut GameRng) -> MarketPositioning {
    let expected = state.market_expected_bps;
    let credibility = state.credibility;

    let mut prob: [f64; 5] = if expected <= -50 {
        [
            60.0 + rng.range(-5.0, 5.0),
            25.0 + rng.range(-5.0, 5.0),
            10.0 + rng.range(-3.0, 3.0),
            3.0 + rng.range(-1.0, 2.0),
            2.0,
        ]
    } else if expected <= -25 {
        [
            5.0 + rng.range(-2.0, 3.0),
            65.0 + rng.range(-8.0, 8.0),
            22.0 + rng.range(-5.0, 5.0),
            5.0 + rng.range(-2.0, 3.0),
            1.0,
        ]
    } else if expected == 0 {
        [
            1.0,
            10.0 + rng.range(-3.0, 5.0),
            75.0 + rng.range(-8.0, 8.0),
            10.0 + rng.range(-3.0, 5.0),
            1.0,
        ]
    } else if expected >= 50 {
        [
            2.0,
            3.0 + rng.range(-1.0, 2.0),
            10.0 + rng.range(-3.0, 3.0),
            25.0 + rng.range(-5.0, 5.0),
            60.0 + rng.range(-5.0, 5.0),
        ]
    } else {
        // +25
        [
            1.0,
            5.0 + rng.range(-2.0, 3.0),
            22.0 + rng.range(-5.0, 5.0),
            65.0 + rng.range(-8.0, 8.0),
            5.0 + rng.range(-2.0, 3.0),
        ]
    };

    // Distrust widens the distribution away from the mode.
    if credibility < 50.0 {
        let spread = (50.0 - credibility) * 0.2;
        prob[2] -= spread;
        prob[1] += spread * 0.3;
        prob[3] += spread * 0.3;
        prob[0] += spread * 0.2;
        prob[4] += spread * 0.2;
    }

    // Normalize to integer percentages summing to exactly 100.
    let total: f64 = prob.iter().map(|p| p.max(0.0)).sum();
    let mut rounded: [i64; 5] = [0; 5];
    for (i, p) in prob.iter().enumerate() {
        rounded[i] = ((p.max(0.0) / total) * 100.0).round() as i64;
    }
    let sum_now: i64 = rounded.iter().sum();
    let max_idx = (0..5).max_by_key(|&i| rounded[i]).unwrap_or(2);
    rounded[max_idx] += 100 - sum_now;

    let probabilities = RateProbabilities {
        cut50: rounded[0].max(0) as u32,
        cut25: rounded[1].max(0) as u32,
        hold: rounded[2].max(0) as u32,
        hike25: rounded[3].max(0) as u32,
        hike50: rounded[4].max(0) as u32,
    };

    // Shift narrative from the last decision, then the data.
    let last_decision = state
        .rate_history
        .last()
        .filter(|r| r.meeting >= 1)
        .map(|r| r.decision_bps);
    let shift = match last_decision {
        Some(d) if d > 0 => "Shifted hawkish after last rate hike".to_string(),
        Some(d) if d < 0 => "Shifted dovish after last rate cut".to_string(),
        Some(_) => match &state.economy_changes {
            Some(changes) if changes.pce_inflation > 0.1 => {
                "Shifted hawkish on rising inflation data".to_string()
            }
            Some(changes) if changes.pce_inflation < -0.1 => {
                "Shifted dovish on falling inflation data".to_string()
            }
            _ => "Largely unchanged since last meeting".to_string(),
        },
        None => "Baseline positioning".to_string(),
    };

    let economy = &state.economy;
    let mut drivers = Vec::new();
    if economy.pce_inflation > 2.5 {
        drivers.push(
            "Persistent inflation readings above 2.5% support expectations for tighter policy."
                .to_string(),
        );
    } else if economy.pce_inflation < 2.0 {
        drivers.push(
            "Inflation trending below target supports expectations for accommodation.".to_string(),
        );
    }
    if economy.gdp_growth < 1.0 {
        drivers.push("Slowing growth data has shifted expectations toward policy easing.".to_string());
    } else if economy.gdp_growth > 2.5 {
        drivers.push("Above-trend growth reduces urgency for rate cuts.".to_string());
    }
    if credibility < 50.0 {
        drivers.push(
            "Reduced Fed credibility has widened the distribution of expected outcomes.".to_string(),
        );
    }
    if economy.unemployment_rate > 5.0 {
        drivers.push(
            "Rising unemployment is increasing pressure for accommodative policy.".to_string(),
        );
    } else if economy.payrolls_change > 200.0 {
        drivers.push("Strong payrolls growth argues against near-term easing.".to_string());
    }
    if drivers.len() < 2 {
        drivers.push(
            "Markets are broadly aligned with recent Fed communication and guidance.".to_string(),
        );
    }
    drivers.truncate(3);

    let future_guidance = if expected > 0 {
        "Forward rate expectations embed additional tightening over the next two meetings, with markets pricing a terminal rate modestly above current levels."
    } else if expected < 0 {
        "Futures markets continue to price in easing over the coming meetings, reflecting expectations that the rate cycle has peaked."
    } else {
        "Rate expectations beyond this meeting are relatively flat, suggesting markets expect a prolonged pause at current levels."
    };

    MarketPositioning {
        expected_bps: expected,
        probabilities,
        shift_since_last_meeting: shift,
        key_drivers: drivers,
        future_guidance: future_guidance.to_string(),
    }
}

// ── Conflicting signals ────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignalLean {
    Hawkish,
    Dovish,
    Ambiguous,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConflictingSignal {
    pub title: String,
    pub description: String,
    pub implication: SignalLean,
}

fn generate_conflicting_signals(state: &GameState, rng: &mut GameRng) -> Vec<ConflictingSignal> {
    let economy = &state.economy;
    let markets = &state.markets;
    let mut signals = Vec::new();

    if (economy.cpi_inflation - economy.pce_inflation).abs() > 0.25 {
        let cpi_lower = economy.cpi_inflation < economy.pce_inflation;
        signals.push(ConflictingSignal {
            title: "Inflation Measures Diverge".to_string(),
            description: format!(
                "CPI headline inflation at {:.1}% paints a {} picture than PCE at {:.1}%, the Fed's preferred gauge. The divergence complicates the assessment of underlying price pressures.",
                economy.cpi_inflation,
                if cpi_lower { "more benign" } else { "more concerning" },
                economy.pce_inflation,
            ),
            implication: if economy.pce_inflation > 2.5 {
                SignalLean::Hawkish
            } else {
                SignalLean::Ambiguous
            },
        });
    }

    if economy.payrolls_change > 120.0 && economy.gdp_growth < 1.5 {
        signals.push(ConflictingSignal {
            title: "Strong Hiring Despite Weak Growth".to_string(),
            description: format!(
                "Payrolls added {:.0}K jobs even as GDP growth slowed to {:.1}%. This disconnect raises questions about labor hoarding, productivity trends, and whether growth data will eventually catch up with employment.",
                economy.payrolls_change, economy.gdp_growth,
            ),
            implication: SignalLean::Ambiguous,
        });
    }

    if economy.payrolls_change < 80.0 && economy.gdp_growth > 1.8 {
        signals.push(ConflictingSignal {
            title: "Growth Resilient Despite Soft Hiring".to_string(),
            description: format!(
                "GDP continues to grow at {:.1}% while payrolls have moderated to {:.0}K. This may signal a productivity-led expansion or an impending growth slowdown.",
                economy.gdp_growth, economy.payrolls_change,
            ),
            implication: SignalLean::Ambiguous,
        });
    }

    if (markets.sp500 > 7000.0 && economy.gdp_growth < 1.5)
        || (markets.sp500 < 6200.0 && economy.gdp_growth > 2.5)
    {
        let elevated = markets.sp500 > 7000.0;
        signals.push(ConflictingSignal {
            title: "Markets Decouple from Fundamentals".to_string(),
            description: format!(
                "Equity markets appear {} relative to {} economic fundamentals. The S&P 500 at {:.0} may be pricing in expectations that diverge from the current data.",
                if elevated { "elevated" } else { "depressed" },
                if elevated { "softening" } else { "improving" },
                markets.sp500,
            ),
            implication: if elevated { SignalLean::Dovish } else { SignalLean::Hawkish },
        });
    }

    let spread = markets.treasury10y - markets.treasury2y;
    if spread < 0.0 {
        signals.push(ConflictingSignal {
            title: "Yield Curve Inverted".to_string(),
            description: format!(
                "The 2s/10s spread sits at {:.0}bps, an inversion historically associated with pending recession. Other indicators including labor market data still suggest the economy retains underlying momentum.",
                spread * 100.0,
            ),
            implication: SignalLean::Dovish,
        });
    }

    if state.pending_effects.iter().any(|e| !e.applied) {
        let unapplied: Vec<_> = state.pending_effects.iter().filter(|e| !e.applied).collect();
        let last = unapplied[unapplied.len() - 1];
        signals.push(ConflictingSignal {
            title: "Prior Policy Still Transmitting".to_string(),
            description: format!(
                "{} prior rate decision(s) have not yet fully transmitted into the real economy. Full effects expected by Meeting {}. Current economic readings may not yet reflect the impact of past actions.",
                unapplied.len(),
                last.full_effect_meeting,
            ),
            implication: SignalLean::Ambiguous,
        });
    }

    if markets.vix > 22.0 && economy.gdp_growth > 1.5 && economy.unemployment_rate < 5.0 {
        signals.push(ConflictingSignal {
            title: "Elevated Volatility Despite Stable Data".to_string(),
            description: format!(
                "The VIX at {:.1} signals heightened market anxiety, yet hard economic data remains relatively stable: GDP at {:.1}%, unemployment at {:.1}%. Markets may be pricing in risks not yet visible in the data.",
                markets.vix, economy.gdp_growth, economy.unemployment_rate,
            ),
            implication: SignalLean::Dovish,
        });
    }

    if markets.dxy > 100.0 && economy.gdp_growth < 1.5 {
        signals.push(ConflictingSignal {
            title: "Strong Dollar Headwind".to_string(),
            description: format!(
                "The dollar index at {:.1} is creating headwinds for exporters and multinationals, while growth has already slowed to {:.1}%. Tighter financial conditions via the dollar may be doing some of the Fed's work.",
                markets.dxy, economy.gdp_growth,
            ),
            implication: SignalLean::Dovish,
        });
    }

    if economy.gdp_growth > 1.5 && signals.len() < 3 {
        let confidence_up = rng.chance(0.5);
        signals.push(ConflictingSignal {
            title: "Consumer Sentiment vs. Spending Gap".to_string(),
            description: format!(
                "Consumer confidence surveys have {} recently, even as actual consumer spending shows {} momentum. The divergence between soft survey data and hard spending data muddies the demand outlook.",
                if confidence_up { "improved" } else { "deteriorated" },
                if confidence_up { "more cautious" } else { "surprisingly resilient" },
            ),
            implication: SignalLean::Ambiguous,
        });
    }

    // Floor of two signals, whatever the data says.
    if signals.len() < 2 {
        signals.push(ConflictingSignal {
            title: "Global Spillovers Uncertain".to_string(),
            description: "International economic conditions are sending mixed signals, with some trading partners showing resilience while others face headwinds. The net effect on the domestic outlook is uncertain.".to_string(),
            implication: SignalLean::Ambiguous,
        });
    }
    if signals.len() < 2 {
        signals.push(ConflictingSignal {
            title: "Sticky Services Inflation".to_string(),
            description: "While headline inflation has moderated, services prices remain stubbornly elevated, suggesting underlying price pressures may be more persistent than top-line numbers suggest.".to_string(),
            implication: SignalLean::Hawkish,
        });
    }

    // Keep three, and make sure both directions are represented.
    let mut selected: Vec<ConflictingSignal> = signals.into_iter().take(3).collect();
    if selected.len() >= 2 {
        let has_hawkish = selected.iter().any(|s| s.implication == SignalLean::Hawkish);
        let has_dovish = selected
            .iter()
            .any(|s| s.implication == SignalLean::Dovish || s.implication == SignalLean::Ambiguous);
        let last = selected.len() - 1;
        if !has_hawkish {
            selected[last] = ConflictingSignal {
                title: "Sticky Services Inflation".to_string(),
                description: "While headline inflation has moderated, services prices remain stubbornly elevated, suggesting underlying price pressures may be more persistent than top-line numbers suggest.".to_string(),
                implication: SignalLean::Hawkish,
            };
        }
        if !has_dovish {
            selected[last] = ConflictingSignal {
                title: "Credit Conditions Tightening".to_string(),
                description: "Bank lending surveys indicate tightening credit standards and weakening loan demand. Tighter financial conditions may act as a brake on economic activity even without further rate increases.".to_string(),
                implication: SignalLean::Dovish,
            };
        }
    }

    selected
}

// ── Bundle ─────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BriefingBundle {
    pub beige_book: BeigeBook,
    pub staff_projections: StaffProjections,
    pub data_releases: Vec<DataRelease>,
    pub market_positioning: MarketPositioning,
    pub conflicting_signals: Vec<ConflictingSignal>,
}

pub fn generate_briefing(
    state: &GameState,
    config: &EngineConfig,
    rng: &mut GameRng,
) -> BriefingBundle {
    BriefingBundle {
        beige_book: generate_beige_book(state, rng),
        staff_projections: generate_staff_projections(state, config, rng),
        data_releases: generate_data_releases(state, rng),
        market_positioning: generate_market_positioning(state, rng),
        conflicting_signals: generate_conflicting_signals(state, rng),
    }
}
