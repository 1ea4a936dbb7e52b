//! sim-runner: headless runner for the Fed chair simulation.
//!
//! Usage:
//!   sim-runner --seed 42 --games 100        # autoplay batch, outcome table
//!   sim-runner --seed 42 --ipc-mode         # line-delimited JSON loop for a UI

use anyhow::Result;
use fedchair_core::{
    calculate_hawk_score, calculate_score,
    decision::RateDecision,
    engine::GameEngine,
    state::{EndReason, EndResult, StartingSnapshot},
};
use std::collections::BTreeMap;
use std::env;
use std::io::{self, BufRead, Write};

#[derive(serde::Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum IpcCommand {
    GetState,
    Dashboard,
    Briefing,
    SubmitDot { target_meeting: u32, rate: f64 },
    Decide { bps: i32, statements: Vec<String> },
    Quit,
}

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let seed = parse_arg(&args, "--seed", 42u64);
    let games = parse_arg(&args, "--games", 1u64);
    let ipc_mode = args.iter().any(|a| a == "--ipc-mode");

    if ipc_mode {
        let mut engine = GameEngine::new(&StartingSnapshot::default(), seed);
        return run_ipc_loop(&mut engine);
    }

    println!("fed chair sim-runner");
    println!("  seed:   {seed}");
    println!("  games:  {games}");
    println!();

    let mut outcomes: BTreeMap<String, u64> = BTreeMap::new();
    let mut total_scores = 0.0;
    let mut meetings_played = 0u64;

    for game in 0..games {
        let game_seed = seed.wrapping_add(game);
        let (result, reason, score, meetings) = autoplay(game_seed)?;
        *outcomes
            .entry(format!("{result:?}/{}", reason.as_str()))
            .or_default() += 1;
        total_scores += score;
        meetings_played += meetings;
    }

    println!("outcomes over {games} game(s):");
    for (outcome, count) in &outcomes {
        println!("  {outcome:<28} {count:>5}  ({:.1}%)", *count as f64 / games as f64 * 100.0);
    }
    println!();
    println!("  avg total score:      {:.1}", total_scores / games as f64);
    println!("  avg meetings played:  {:.1}", meetings_played as f64 / games as f64);

    Ok(())
}

/// Play one full game with a simple mandate-following policy bot.
fn autoplay(seed: u64) -> Result<(EndResult, EndReason, f64, u64)> {
    let mut engine = GameEngine::new(&StartingSnapshot::default(), seed);
    let mut meetings = 0u64;

    loop {
        let (bps, statements) = policy_bot(&engine);
        let hawk_score = calculate_hawk_score(&statements);
        let reaction = engine.market_reaction(bps, hawk_score, statements.len())?;
        let score = calculate_score(&reaction, RateDecision::try_from_bps(bps)?, hawk_score);
        let outcome = engine.advance_to_next_meeting(
            bps,
            hawk_score,
            &reaction,
            score.overall.score,
            &statements,
        )?;
        meetings += 1;

        if outcome.ended {
            let state = engine.state();
            return Ok((
                state.end_result.expect("result set at end"),
                state.end_reason.expect("reason set at end"),
                state.total_score,
                meetings,
            ));
        }
    }
}

/// A deliberately plain bot: lean against inflation, ease into
/// weakness, and pick statements whose tone matches the move.
fn policy_bot(engine: &GameEngine) -> (i32, Vec<String>) {
    let economy = &engine.state().economy;

    let bps: i32 = if economy.pce_inflation > 3.2 {
        50
    } else if economy.pce_inflation > 2.8 {
        25
    } else if economy.gdp_growth < 0.5 || economy.unemployment_rate > 5.2 {
        -25
    } else if economy.pce_inflation < 1.5 {
        -25
    } else {
        0
    };

    let statements: Vec<String> = match bps.signum() {
        1 => vec!["ec1".into(), "in1".into(), "gd2".into()],
        -1 => vec!["ec3".into(), "in3".into(), "gd3".into()],
        _ => vec!["ec2".into(), "lb2".into(), "gd2".into()],
    };
    (bps, statements)
}

fn run_ipc_loop(engine: &mut GameEngine) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut buffer = String::new();
    let mut handle = stdin.lock();

    loop {
        buffer.clear();
        if handle.read_line(&mut buffer)? == 0 {
            break; // EOF
        }

        let command: IpcCommand = match serde_json::from_str(&buffer) {
            Ok(c) => c,
            Err(e) => {
                writeln!(stdout, "{}", serde_json::json!({ "error": e.to_string() }))?;
                stdout.flush()?;
                continue;
            }
        };

        let response = match command {
            IpcCommand::Quit => break,
            IpcCommand::GetState => serde_json::to_value(engine.state())?,
            IpcCommand::Dashboard => serde_json::to_value(engine.dashboard())?,
            IpcCommand::Briefing => serde_json::to_value(engine.briefing())?,
            IpcCommand::SubmitDot { target_meeting, rate } => {
                match engine.submit_dot_projection(target_meeting, rate) {
                    Ok(()) => serde_json::json!({ "ok": true }),
                    Err(e) => serde_json::json!({ "error": e.to_string() }),
                }
            }
            IpcCommand::Decide { bps, statements } => decide(engine, bps, &statements)?,
        };

        writeln!(stdout, "{response}")?;
        stdout.flush()?;
    }

    Ok(())
}

fn decide(engine: &mut GameEngine, bps: i32, statements: &[String]) -> Result<serde_json::Value> {
    let hawk_score = calculate_hawk_score(statements);
    let reaction = match engine.market_reaction(bps, hawk_score, statements.len()) {
        Ok(r) => r,
        Err(e) => return Ok(serde_json::json!({ "error": e.to_string() })),
    };
    let decision = RateDecision::try_from_bps(bps)?;
    let score = calculate_score(&reaction, decision, hawk_score);
    let outcome = match engine.advance_to_next_meeting(
        bps,
        hawk_score,
        &reaction,
        score.overall.score,
        statements,
    ) {
        Ok(o) => o,
        Err(e) => return Ok(serde_json::json!({ "error": e.to_string() })),
    };

    Ok(serde_json::json!({
        "reaction": reaction,
        "score": score,
        "outcome": outcome,
        "state": engine.state(),
    }))
}

fn parse_arg<T: std::str::FromStr>(args: &[String], name: &str, default: T) -> T {
    args.windows(2)
        .find(|w| w[0] == name)
        .and_then(|w| w[1].parse().ok())
        .unwrap_or(default)
}
