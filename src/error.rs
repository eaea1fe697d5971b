use crate::{http_client, payload::PayloadEncoding, payload::PayloadError};

#[derive(Debug, thiserror::Error)]
pub enum ProbeError {
    #[error(transparent)]
    Payload(#[from] PayloadError),

    #[error(transparent)]
    Transport(#[from] http_client::error::Error),

    #[error("{encoding} POST answered with status {status}")]
    UnexpectedStatus {
        encoding: PayloadEncoding,
        status: u16,
    },
}
