// Queue Mapping Fetch Use Case

use crate::domain::{QueueId, QueueMapping};
use crate::error::{FetchError, FetchResult};
use crate::port::{CrmClient, Params, TraceSink};
use serde_json::Value;

/// Fixed resource path for event registration field mapping queues
pub const QUEUE_ENDPOINT: &str = "crm/event_registration_field_mapping_queues.api";

/// Execute the queue mapping fetch.
///
/// One round-trip through the injected client with an empty parameter
/// set; no retries, no caching. Faults never escape as panics:
/// transport errors and malformed shapes come back as tagged
/// [`FetchError`] variants.
///
/// # Arguments
///
/// * `client` - Authenticated CRM client (owned by the caller)
/// * `trace` - Diagnostic sink (best effort, never blocks the fetch)
pub async fn execute(client: &dyn CrmClient, trace: &dyn TraceSink) -> FetchResult<QueueMapping> {
    trace.record(&format!("requesting queue mapping from {QUEUE_ENDPOINT}"));

    let response = match client.get(QUEUE_ENDPOINT, &Params::new()).await {
        Ok(response) => response,
        Err(fault) => {
            trace.record(&format!("queue mapping request failed: {fault}"));
            return Err(FetchError::Transport(fault));
        }
    };

    trace.record(&format!("raw queue response: {response}"));

    let mapping = match parse_response(&response) {
        Ok(mapping) => mapping,
        Err(fault) => {
            trace.record(&format!("queue response rejected: {fault}"));
            return Err(fault);
        }
    };

    trace.record(&format!(
        "constructed queue mapping with {} entries",
        mapping.len()
    ));

    Ok(mapping)
}

/// Validate the response shape once at the boundary and build the mapping.
///
/// An empty `data` array yields an empty mapping, which is a valid
/// result; only a missing or non-array `data` field is a fault.
fn parse_response(response: &Value) -> FetchResult<QueueMapping> {
    let data = response.get("data").ok_or(FetchError::MissingData)?;
    let rows = data.as_array().ok_or(FetchError::MalformedData {
        found: json_type_name(data),
    })?;

    let mut mapping = QueueMapping::new();
    for row in rows {
        if let Some((id, name)) = extract_row(row) {
            mapping.insert(id, name);
        }
    }

    Ok(mapping)
}

/// A row qualifies only with both an integer-like `id` and a string
/// `name`; anything else is skipped, never fatal to the whole call.
fn extract_row(row: &Value) -> Option<(QueueId, &str)> {
    let id = match row.get("id")? {
        Value::Number(n) => n.as_i64()?,
        Value::String(s) => s.parse().ok()?,
        _ => return None,
    };
    let name = row.get("name")?.as_str()?;

    Some((id, name))
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
