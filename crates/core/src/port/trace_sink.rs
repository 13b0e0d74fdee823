// Trace Sink Port (diagnostic logging as an injected capability)

/// Best-effort diagnostic trace sink.
///
/// Recording is infallible from the caller's point of view: a sink
/// must not block or fail the operation it is observing.
pub trait TraceSink: Send + Sync {
    /// Record one diagnostic message
    fn record(&self, message: &str);
}

/// Production sink forwarding to the `tracing` subscriber
pub struct TracingTraceSink;

impl TraceSink for TracingTraceSink {
    fn record(&self, message: &str) {
        tracing::debug!(target: "workbooks::trace", "{message}");
    }
}

/// Discards every message (for callers that want no diagnostics)
pub struct NullTraceSink;

impl TraceSink for NullTraceSink {
    fn record(&self, _message: &str) {}
}
