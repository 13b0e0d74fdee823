// Workbooks HTTP Adapter
// Implements the core's CrmClient port over reqwest

pub mod client;
pub mod config;

// Re-exports
pub use client::WorkbooksHttpClient;
pub use config::{ApiEnvironment, ConfigError, WorkbooksConfig};
