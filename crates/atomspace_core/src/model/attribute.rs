//! Resource attribute bag.
//!
//! # Invariants
//! - Keys keep first-insertion order; overwriting a key keeps its position.
//! - Reads and writes never fail.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Arbitrary scalar or structured attribute value.
pub type AttributeValue = Value;

/// Ordered key/value attributes owned by one resource atom.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttributeBag {
    entries: Map<String, AttributeValue>,
}

impl AttributeBag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates or overwrites one attribute.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<AttributeValue>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Returns the attribute value, or `None` when the key was never set.
    pub fn get(&self, key: &str) -> Option<&AttributeValue> {
        self.entries.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Attribute keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttributeValue)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::AttributeBag;
    use serde_json::json;

    #[test]
    fn overwrite_keeps_original_position() {
        let mut bag = AttributeBag::new();
        bag.set("ip", "10.0.0.1");
        bag.set("port", 8080);
        bag.set("ip", "10.0.0.2");

        assert_eq!(bag.keys().collect::<Vec<_>>(), vec!["ip", "port"]);
        assert_eq!(bag.get("ip"), Some(&json!("10.0.0.2")));
        assert_eq!(bag.len(), 2);
    }

    #[test]
    fn missing_key_reads_as_none() {
        let bag = AttributeBag::new();
        assert!(bag.is_empty());
        assert_eq!(bag.get("nonexistent"), None);
    }

    #[test]
    fn structured_values_are_kept_verbatim() {
        let mut bag = AttributeBag::new();
        bag.set("tags", json!(["prod", "edge"]));
        bag.set("limits", json!({ "cpu": 4, "memory_gb": 16 }));

        assert_eq!(bag.get("tags"), Some(&json!(["prod", "edge"])));
        assert_eq!(bag.get("limits").and_then(|v| v["cpu"].as_i64()), Some(4));
    }
}
