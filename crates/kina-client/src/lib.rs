//! # kina-client
//!
//! HTTP client for the kina desktop assistant backend.
//!
//! The backend is a local service (default `http://127.0.0.1:5000`). The
//! central call is [`CommandClient::send_command`], which posts
//! `{"command": ...}` to `/api/process-command` and always yields a JSON
//! object: the backend's reply, or `{"status": "error", "message": ...}`
//! when the backend can't be reached or answers with an error. The cause
//! of a failure is logged through `tracing`, never returned.
//!
//! [`CommandClient::try_send_command`] is the same exchange with the cause
//! kept as a [`ClientError`]. The voice pipeline routes (transcribe,
//! process text, synthesize) live in [`pipeline`].
//!
//! ## usage
//!
//! ```rust,ignore
//! use kina_client::{BackendEndpoint, ClientConfig, CommandClient};
//!
//! let config = ClientConfig::new(BackendEndpoint::new("127.0.0.1", 5000)?);
//! let client = CommandClient::new(config)?;
//!
//! let payload = client.send_command("buka browser").await;
//! if payload.is_error() {
//!     eprintln!("{}", payload.message().unwrap_or_default());
//! }
//! ```

pub mod client;
pub mod config;
pub mod constants;
pub mod endpoint;
pub mod error;
pub mod payload;
pub mod pipeline;

pub use client::CommandClient;
pub use config::ClientConfig;
pub use endpoint::BackendEndpoint;
pub use error::{ClientError, Result};
pub use payload::ResultPayload;
pub use pipeline::Conversation;
