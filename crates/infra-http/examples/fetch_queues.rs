//! Fetch and print the queue mapping from a Workbooks instance.
//!
//! Requires `WORKBOOKS_API_KEY`; honours `WORKBOOKS_ENV` (test/live),
//! `WORKBOOKS_API_URL`, and `WORKBOOKS_TIMEOUT_SECS`.

use anyhow::Result;
use std::sync::Arc;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use workbooks_core::application::QueueMappingService;
use workbooks_core::port::TracingTraceSink;
use workbooks_infra_http::{WorkbooksConfig, WorkbooksHttpClient};

#[tokio::main]
async fn main() -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("workbooks=debug,workbooks_core=debug,workbooks_infra_http=debug"))
        .expect("Failed to create env filter");

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().pretty())
        .init();

    let config = WorkbooksConfig::from_env()?;
    let client = Arc::new(WorkbooksHttpClient::new(config)?);
    let service = QueueMappingService::new(client, Arc::new(TracingTraceSink));

    match service.fetch_or_unavailable().await {
        Some(mapping) if mapping.is_empty() => println!("No queues configured"),
        Some(mapping) => {
            for (id, name) in mapping.iter() {
                println!("{id}\t{name}");
            }
        }
        None => println!("Queue mapping unavailable"),
    }

    Ok(())
}
