use lectern_contracts::media::MediaError;
use lectern_model::error::ModelError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TrackerError {
    #[error("media error: {0}")]
    Media(#[from] MediaError),

    #[error("model error: {0}")]
    Model(#[from] ModelError),

    #[error("internal error: {0}")]
    Internal(String),
}

pub type Result<T> = std::result::Result<T, TrackerError>;
