// CRM Client Port (Interface)

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

/// Request parameters for a CRM read (empty for most lookups)
pub type Params = serde_json::Map<String, Value>;

/// Fault raised by a client adapter during a request
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Authentication rejected: {0}")]
    Auth(String),

    #[error("API returned HTTP {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Invalid response body: {0}")]
    Body(String),
}

/// Read-only CRM API client.
///
/// The client is constructed and owned by the caller; the core only
/// borrows it for the duration of a request. Adapters are expected to
/// be already authenticated and to handle their own timeouts.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CrmClient: Send + Sync {
    /// Issue a GET against `path` with the given query parameters
    async fn get(&self, path: &str, params: &Params) -> Result<Value, ClientError>;
}
