use bleth_agent::AgentError;
use bleth_board::BoardError;
use bleth_strategy::StrategyError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error("{what} length {got} does not match configured count {expected}")]
    AgentCountMismatch {
        expected: usize,
        got:      usize,
        what:     &'static str,
    },

    #[error("strategy configuration error: {0}")]
    Strategy(#[from] StrategyError),

    #[error("agent error: {0}")]
    Agent(#[from] AgentError),

    #[error("board error: {0}")]
    Board(#[from] BoardError),
}

impl SimError {
    /// The underlying board error, whether it surfaced directly or through
    /// an agent.
    pub fn board_error(&self) -> Option<&BoardError> {
        match self {
            SimError::Board(e) | SimError::Agent(AgentError::Board(e)) => Some(e),
            _ => None,
        }
    }
}

pub type SimResult<T> = Result<T, SimError>;
