// Queue Domain Model

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Queue identifier as assigned by the CRM (integer-like)
pub type QueueId = i64;

/// Mapping from queue identifier to display name.
///
/// Built fresh on every fetch; never cached or mutated after return.
/// Duplicate identifiers resolve last-occurrence-wins. Iteration order
/// is not semantically significant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QueueMapping {
    entries: HashMap<QueueId, String>,
}

impl QueueMapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a queue entry. A repeated id overwrites the earlier name.
    pub fn insert(&mut self, id: QueueId, name: impl Into<String>) {
        self.entries.insert(id, name.into());
    }

    /// Display name for a queue id, if present
    pub fn name_of(&self, id: QueueId) -> Option<&str> {
        self.entries.get(&id).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// An empty mapping is a valid result ("no queues configured"),
    /// distinct from the unavailable sentinel.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (QueueId, &str)> {
        self.entries.iter().map(|(id, name)| (*id, name.as_str()))
    }
}

impl IntoIterator for QueueMapping {
    type Item = (QueueId, String);
    type IntoIter = std::collections::hash_map::IntoIter<QueueId, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_lookup() {
        let mut mapping = QueueMapping::new();
        mapping.insert(1, "Registrations");
        mapping.insert(2, "Waitlist");

        assert_eq!(mapping.len(), 2);
        assert_eq!(mapping.name_of(1), Some("Registrations"));
        assert_eq!(mapping.name_of(2), Some("Waitlist"));
        assert_eq!(mapping.name_of(3), None);
    }

    #[test]
    fn test_duplicate_id_last_wins() {
        let mut mapping = QueueMapping::new();
        mapping.insert(7, "Old Name");
        mapping.insert(7, "New Name");

        assert_eq!(mapping.len(), 1);
        assert_eq!(mapping.name_of(7), Some("New Name"));
    }

    #[test]
    fn test_empty_mapping_is_valid() {
        let mapping = QueueMapping::new();
        assert!(mapping.is_empty());
        assert_eq!(mapping.len(), 0);
    }
}
