//! fedchair-core: the simulation engine for a turn-based central-bank
//! policy game.
//!
//! The player chairs a fixed sequence of policy meetings, choosing a
//! rate move and statement language at each one. Between meetings the
//! engine applies lagged policy transmission, evolves the economy and
//! markets, rolls shocks and data revisions, tracks credibility, and
//! decides whether the run ends in a soft landing, a muddle-through,
//! or one of the loss conditions.
//!
//! RULES:
//!   - GameState mutates only inside GameEngine operations.
//!   - All randomness flows through the seeded RngBank.
//!   - History vectors are append-only audit logs.

pub mod briefing;
pub mod config;
pub mod credibility;
pub mod dashboard;
pub mod decision;
pub mod dots;
pub mod economy;
pub mod effects;
pub mod engine;
pub mod error;
pub mod event;
pub mod expectations;
pub mod headlines;
pub mod markets;
pub mod outcome;
pub mod phrases;
pub mod reaction;
pub mod revisions;
pub mod rng;
pub mod roster;
pub mod schedule;
pub mod scoring;
pub mod shocks;
pub mod state;
pub mod types;

pub use config::EngineConfig;
pub use decision::RateDecision;
pub use engine::{AdvanceOutcome, GameEngine};
pub use error::{SimError, SimResult};
pub use reaction::MarketReaction;
pub use scoring::{calculate_hawk_score, calculate_score, hawk_label, MeetingScore};
pub use state::{EndReason, EndResult, GamePhase, GameState, StartingSnapshot};
