//! command client for the assistant backend

use reqwest::{Client, Response};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, error};

use crate::config::ClientConfig;
use crate::constants::PROCESS_COMMAND_PATH;
use crate::endpoint::BackendEndpoint;
use crate::error::{ClientError, Result};
use crate::payload::ResultPayload;

#[derive(Debug, Serialize)]
struct CommandRequest<'a> {
    command: &'a str,
}

/// Sends commands to the backend and normalizes whatever comes back.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Clone, Debug)]
pub struct CommandClient {
    pub(crate) http: Client,
    pub(crate) config: ClientConfig,
}

impl CommandClient {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let http = Client::builder()
            .build()
            .map_err(|e| ClientError::Http(e.to_string()))?;

        Ok(Self { http, config })
    }

    /// client with the default failure message
    pub fn with_endpoint(endpoint: BackendEndpoint) -> Result<Self> {
        Self::new(ClientConfig::new(endpoint))
    }

    pub fn endpoint(&self) -> &BackendEndpoint {
        &self.config.endpoint
    }

    pub fn failure_message(&self) -> &str {
        &self.config.failure_message
    }

    /// Send a command and always get an object back.
    ///
    /// Transport failures, non-2xx statuses and unparsable bodies are logged
    /// and replaced by `{"status": "error", "message": <failure message>}`.
    pub async fn send_command(&self, command: &str) -> ResultPayload {
        match self.try_send_command(command).await {
            Ok(payload) => payload,
            Err(e) => {
                error!(
                    error = %e,
                    endpoint = %self.config.endpoint,
                    "failed to communicate with backend"
                );
                ResultPayload::failure(self.config.failure_message.clone())
            }
        }
    }

    /// Send a command, keeping the reason when it fails.
    pub async fn try_send_command(&self, command: &str) -> Result<ResultPayload> {
        let url = self.config.endpoint.route(PROCESS_COMMAND_PATH);

        let response = self
            .http
            .post(&url)
            .json(&CommandRequest { command })
            .send()
            .await?;

        let body = check_status(response).await?.bytes().await?;
        let payload = ResultPayload::from_slice(&body)?;

        debug!(url = %url, status = ?payload.status(), "command processed");
        Ok(payload)
    }
}

/// Pass 2xx responses through, turn anything else into [`ClientError::Server`].
pub(crate) async fn check_status(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    // body is only read for the message, a failed read falls back to the status
    let body = response.bytes().await.unwrap_or_default();
    Err(ClientError::Server {
        status: status.as_u16(),
        message: server_message(status.as_u16(), &body),
    })
}

/// Error text from a failed response: `error`, then `detail`, then the status.
pub(crate) fn server_message(status: u16, body: &[u8]) -> String {
    serde_json::from_slice::<Value>(body)
        .ok()
        .and_then(|value| {
            ["error", "detail"]
                .iter()
                .find_map(|key| value.get(*key).and_then(Value::as_str).map(str::to_owned))
        })
        .unwrap_or_else(|| format!("HTTP error! status: {}", status))
}
