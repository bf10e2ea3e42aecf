use rail_core::CoreError;
use rail_dynamics::DynamicsError;
use rail_track::TrackError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("scenario configuration error: {0}")]
    Config(String),

    #[error("track error: {0}")]
    Track(#[from] TrackError),

    #[error("dynamics error: {0}")]
    Dynamics(#[from] DynamicsError),

    #[error(transparent)]
    Core(#[from] CoreError),
}

pub type SimResult<T> = Result<T, SimError>;
