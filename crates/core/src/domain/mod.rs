// Domain Layer - Pure types, no I/O

pub mod queue;

// Re-exports
pub use queue::{QueueId, QueueMapping};
