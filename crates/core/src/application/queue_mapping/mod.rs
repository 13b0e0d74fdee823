// Queue Mapping Service - fetch and normalize CRM queue definitions

pub mod fetch;

pub use fetch::QUEUE_ENDPOINT;

use crate::domain::QueueMapping;
use crate::error::FetchResult;
use crate::port::{CrmClient, TraceSink};
use std::sync::Arc;

/// Queue Mapping Service
///
/// Thin facade over [`fetch::execute`] holding the injected client and
/// trace sink. Stateless: every call re-fetches current server state.
pub struct QueueMappingService {
    client: Arc<dyn CrmClient>,
    trace: Arc<dyn TraceSink>,
}

impl QueueMappingService {
    pub fn new(client: Arc<dyn CrmClient>, trace: Arc<dyn TraceSink>) -> Self {
        Self { client, trace }
    }

    /// Fetch the queue mapping, preserving the failure reason
    pub async fn fetch(&self) -> FetchResult<QueueMapping> {
        fetch::execute(self.client.as_ref(), self.trace.as_ref()).await
    }

    /// Fetch the queue mapping, collapsing every fault to `None`.
    ///
    /// `None` means "unavailable"; the caller cannot tell a transport
    /// failure from a malformed response. UIs should render it as "no
    /// queues configured" rather than an error page.
    pub async fn fetch_or_unavailable(&self) -> Option<QueueMapping> {
        match self.fetch().await {
            Ok(mapping) => Some(mapping),
            Err(fault) => {
                tracing::warn!(error = %fault, "queue mapping unavailable");
                None
            }
        }
    }
}
