//! backend base address

use std::fmt;
use std::str::FromStr;

use reqwest::Url;

use crate::constants::{DEFAULT_HOST, DEFAULT_PORT};
use crate::error::{ClientError, Result};

/// Base address of the assistant backend.
///
/// Immutable once built; routes are appended with [`BackendEndpoint::route`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BackendEndpoint {
    base: Url,
}

impl BackendEndpoint {
    /// plain-http endpoint for a host and port
    pub fn new(host: &str, port: u16) -> Result<Self> {
        Self::parse(&format!("http://{}:{}", host, port))
    }

    /// parse a base url such as `http://127.0.0.1:5000`
    pub fn parse(url: &str) -> Result<Self> {
        let base = Url::parse(url.trim())
            .map_err(|e| ClientError::InvalidEndpoint(format!("{}: {}", url, e)))?;

        if !matches!(base.scheme(), "http" | "https") {
            return Err(ClientError::InvalidEndpoint(format!(
                "unsupported scheme {}",
                base.scheme()
            )));
        }
        if base.host_str().is_none() || base.cannot_be_a_base() {
            return Err(ClientError::InvalidEndpoint(format!("{} has no host", url)));
        }
        if base.query().is_some() || base.fragment().is_some() {
            return Err(ClientError::InvalidEndpoint(format!(
                "{} must not carry a query or fragment",
                url
            )));
        }

        Ok(Self { base })
    }

    pub fn host(&self) -> &str {
        self.base.host_str().unwrap_or_default()
    }

    pub fn port(&self) -> Option<u16> {
        self.base.port_or_known_default()
    }

    /// full url for a backend route, keeping any path prefix on the base
    pub fn route(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base.as_str().trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

impl Default for BackendEndpoint {
    fn default() -> Self {
        let base = Url::parse(&format!("http://{}:{}", DEFAULT_HOST, DEFAULT_PORT))
            .expect("default backend url is valid");
        Self { base }
    }
}

impl FromStr for BackendEndpoint {
    type Err = ClientError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for BackendEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.base.as_str().trim_end_matches('/'))
    }
}
