use bleth_board::BoardError;
use bleth_core::ObserverId;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AgentError {
    #[error("{0} observed a transmission while asleep")]
    ObserverAsleep(ObserverId),

    #[error(transparent)]
    Board(#[from] BoardError),
}

pub type AgentResult<T> = Result<T, AgentError>;
