//! client configuration

use crate::constants::DEFAULT_FAILURE_MESSAGE;
use crate::endpoint::BackendEndpoint;

/// Settings a [`crate::CommandClient`] is built from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// where the backend lives
    pub endpoint: BackendEndpoint,
    /// text returned in the synthesized failure payload
    pub failure_message: String,
}

impl ClientConfig {
    pub fn new(endpoint: BackendEndpoint) -> Self {
        Self {
            endpoint,
            failure_message: DEFAULT_FAILURE_MESSAGE.to_string(),
        }
    }

    pub fn with_failure_message(mut self, message: impl Into<String>) -> Self {
        self.failure_message = message.into();
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(BackendEndpoint::default())
    }
}
