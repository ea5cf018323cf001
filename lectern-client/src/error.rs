use lectern_contracts::notifier::NotifyError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected status: {0}")]
    UnexpectedStatus(reqwest::StatusCode),
}

impl From<ClientError> for NotifyError {
    fn from(err: ClientError) -> Self {
        NotifyError::new(err.to_string())
    }
}
