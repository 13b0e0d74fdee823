// Application Layer - Use cases over the ports

pub mod queue_mapping;

// Re-exports
pub use queue_mapping::QueueMappingService;
