//! Deterministic random number generation.
//!
//! RULE: Nothing in the simulation may call any platform RNG.
//! All randomness flows through GameRng streams derived from the
//! single master seed supplied at engine construction.
//!
//! Each subsystem gets its own RNG stream, seeded deterministically
//! from (master_seed XOR stream_index). This means:
//!   - Adding a new stream never changes existing streams.
//!   - Each stream's roll sequence is fully reproducible in isolation.
//!
//! Unlike a per-tick derivation, streams are created once and advance
//! across meetings, so two meetings never see identical rolls.

use rand::SeedableRng;
use rand_pcg::Pcg64Mcg;

/// A named, deterministic RNG for a single engine subsystem.
pub struct GameRng {
    pub name: &'static str,
    inner: Pcg64Mcg,
}

impl GameRng {
    /// Create a stream RNG from the master seed and a stable stream
    /// index. The index must never change once assigned.
    pub fn new(master_seed: u64, stream_index: u64) -> Self {
        let derived_seed = master_seed ^ (stream_index.wrapping_mul(0x9e37_79b9_7f4a_7c15));
        Self {
            name: "unnamed",
            inner: Pcg64Mcg::seed_from_u64(derived_seed),
        }
    }

    pub fn with_name(mut self, name: &'static str) -> Self {
        self.name = name;
        self
    }

    /// Roll a float in [0.0, 1.0).
    pub fn next_f64(&mut self) -> f64 {
        use rand::RngCore;
        let bits = self.inner.next_u64();
        (bits >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
    }

    /// Roll a u64 in [0, n).
    pub fn next_u64_below(&mut self, n: u64) -> u64 {
        use rand::RngCore;
        assert!(n > 0, "n must be > 0");
        self.inner.next_u64() % n
    }

    /// Bernoulli trial: returns true with probability p.
    pub fn chance(&mut self, p: f64) -> bool {
        self.next_f64() < p
    }

    /// Zero-centered noise in [-scale/2, scale/2).
    pub fn centered(&mut self, scale: f64) -> f64 {
        (self.next_f64() - 0.5) * scale
    }

    /// Uniform draw in [lo, hi).
    pub fn range(&mut self, lo: f64, hi: f64) -> f64 {
        lo + self.next_f64() * (hi - lo)
    }

    /// Random sign: +1.0 or -1.0 with equal probability.
    pub fn sign(&mut self) -> f64 {
        if self.next_f64() < 0.5 {
            -1.0
        } else {
            1.0
        }
    }

    /// Pick a reference to a random element of a non-empty slice.
    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[self.next_u64_below(items.len() as u64) as usize]
    }

    /// Fisher-Yates shuffle of an index vector 0..n.
    pub fn shuffled_indices(&mut self, n: usize) -> Vec<usize> {
        let mut idx: Vec<usize> = (0..n).collect();
        for i in (1..n).rev() {
            let j = self.next_u64_below((i + 1) as u64) as usize;
            idx.swap(i, j);
        }
        idx
    }
}

/// All stream RNGs for a single game, indexed by stable slot.
pub struct RngBank {
    streams: Vec<GameRng>,
}

impl RngBank {
    pub fn new(master_seed: u64) -> Self {
        let streams = StreamSlot::ALL
            .iter()
            .map(|slot| GameRng::new(master_seed, *slot as u64).with_name(slot.name()))
            .collect();
        Self { streams }
    }

    pub fn stream(&mut self, slot: StreamSlot) -> &mut GameRng {
        &mut self.streams[slot as usize]
    }
}

/// Stable stream slot assignments.
/// NEVER reorder or remove entries, only append.
/// Reordering changes every stream's seed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u64)]
pub enum StreamSlot {
    Economy = 0,
    Markets = 1,
    Shocks = 2,
    Revisions = 3,
    Dots = 4,
    Reaction = 5,
    Briefing = 6,
    // Add new streams here, append only.
}

impl StreamSlot {
    pub const ALL: [StreamSlot; 7] = [
        StreamSlot::Economy,
        StreamSlot::Markets,
        StreamSlot::Shocks,
        StreamSlot::Revisions,
        StreamSlot::Dots,
        StreamSlot::Reaction,
        StreamSlot::Briefing,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Economy => "economy",
            Self::Markets => "markets",
            Self::Shocks => "shocks",
            Self::Revisions => "revisions",
            Self::Dots => "dots",
            Self::Reaction => "reaction",
            Self::Briefing => "briefing",
        }
    }
}
