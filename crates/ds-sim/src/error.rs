use ds_grid::GridError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error("floor layout error: {0}")]
    Layout(#[from] GridError),
}

pub type SimResult<T> = Result<T, SimError>;
