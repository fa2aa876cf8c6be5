use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StrategyError {
    #[error("awakeness duration {duration} must be within 1..={cycle} (cycle {cycle})")]
    InvalidAwakeness { cycle: u32, duration: u32 },

    #[error("unknown movement strategy {0:?}")]
    UnknownMovement(String),

    #[error("unknown awakeness strategy {0:?}")]
    UnknownAwakeness(String),
}

pub type StrategyResult<T> = Result<T, StrategyError>;
