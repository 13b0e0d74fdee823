// Port Layer - Interfaces for external dependencies

pub mod crm_client;
pub mod trace_sink;

// Re-exports
pub use crm_client::{ClientError, CrmClient, Params};
pub use trace_sink::{NullTraceSink, TraceSink, TracingTraceSink};
