use thiserror::Error;

#[derive(Error, Debug)]
pub enum SimError {
    #[error("Invalid rate decision: {bps} bps is not one of -50, -25, 0, 25, 50")]
    InvalidDecision { bps: i32 },

    #[error("Game already ended ({reason}); no further meetings can be advanced")]
    GameAlreadyEnded { reason: String },

    #[error("Dot projection targets meeting {target}, but the game has {total} meetings")]
    DotOutOfRange { target: u32, total: u32 },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type SimResult<T> = Result<T, SimError>;
