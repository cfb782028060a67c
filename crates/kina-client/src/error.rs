//! error types for the backend client

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ClientError>;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("transport error: {0}")]
    Transport(String),

    #[error("server returned {status}: {message}")]
    Server { status: u16, message: String },

    #[error("malformed response: {0}")]
    MalformedResponse(String),

    #[error("invalid endpoint: {0}")]
    InvalidEndpoint(String),

    #[error("transcription empty")]
    EmptyTranscription,

    #[error("http client error: {0}")]
    Http(String),
}

impl ClientError {
    /// true for errors raised before any response arrived
    pub fn is_transport(&self) -> bool {
        matches!(self, ClientError::Transport(_))
    }

    /// HTTP status for server-declared failures
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Server { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ClientError::MalformedResponse(err.to_string())
        } else if err.is_builder() {
            ClientError::Http(err.to_string())
        } else {
            ClientError::Transport(err.to_string())
        }
    }
}
