// logtriage - core/model.rs
//
// Core data model types. Pure data definitions with no I/O and no
// platform dependencies. These types are the shared vocabulary across
// all layers.

use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::HashMap;

// =============================================================================
// Frequency table
// =============================================================================

/// Insertion-ordered mapping from a matched value to its occurrence count.
///
/// Lookup is backed by a hash map; a parallel first-seen order list
/// preserves display parity with the order values appear in the source
/// blob. Keys are only ever inserted with a count of 1 and incremented
/// thereafter, so any present key has count >= 1.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: HashMap<String, u64>,
    order: Vec<String>,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one occurrence of `value`, creating the entry on first sight.
    pub fn increment(&mut self, value: &str) {
        match self.counts.get_mut(value) {
            Some(count) => *count += 1,
            None => {
                self.counts.insert(value.to_string(), 1);
                self.order.push(value.to_string());
            }
        }
    }

    /// Occurrence count for `value`; 0 if never seen.
    pub fn count(&self, value: &str) -> u64 {
        self.counts.get(value).copied().unwrap_or(0)
    }

    /// Number of distinct values seen.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Iterate `(value, count)` pairs in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.order
            .iter()
            .map(|value| (value.as_str(), self.counts[value]))
    }
}

/// Serialises as a JSON object with keys in first-seen order.
impl Serialize for FrequencyTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.order.len()))?;
        for (value, count) in self.iter() {
            map.serialize_entry(value, &count)?;
        }
        map.end()
    }
}

// =============================================================================
// Extraction report
// =============================================================================

/// Occurrence statistics for the three independently-matched field
/// classes, produced by one extraction pass over a blob.
#[derive(Debug, Clone, Default, serde::Serialize)]
pub struct ExtractReport {
    /// Dotted-quad network addresses (permissive: no octet range check).
    pub addresses: FrequencyTable,

    /// Request verbs found immediately after an opening double-quote.
    pub verbs: FrequencyTable,

    /// Whitespace-delimited 3-digit status tokens.
    pub statuses: FrequencyTable,
}

impl ExtractReport {
    /// True when no category matched anything (e.g. empty blob).
    pub fn is_empty(&self) -> bool {
        self.addresses.is_empty() && self.verbs.is_empty() && self.statuses.is_empty()
    }
}

// =============================================================================
// Severity
// =============================================================================

/// The two severity markers the classifier retains. Lines with any other
/// `level=` value (or none) are simply not of interest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Error,
    Warning,
}

impl Severity {
    /// Human-readable label for display.
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Error => "Error",
            Severity::Warning => "Warning",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Severity buckets
// =============================================================================

/// Output of one classification pass: failure-indicating lines bucketed
/// by severity, in source order. Built once per invocation; append-only
/// during the pass, immutable to callers thereafter.
#[derive(Debug, Clone, Default)]
pub struct SeverityBuckets {
    /// Trimmed original text of retained `level=error` lines.
    pub errors: Vec<String>,

    /// Trimmed original text of retained `level=warning` lines.
    pub warnings: Vec<String>,

    /// Non-blank lines examined, retained or not. Observable even when
    /// both buckets are empty.
    pub lines_processed: u64,
}

impl SeverityBuckets {
    /// Lines retained across both buckets.
    pub fn retained(&self) -> usize {
        self.errors.len() + self.warnings.len()
    }

    /// The bucket for `severity`.
    pub fn bucket(&self, severity: Severity) -> &[String] {
        match severity {
            Severity::Error => &self.errors,
            Severity::Warning => &self.warnings,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frequency_table_counts_and_order() {
        let mut table = FrequencyTable::new();
        table.increment("b");
        table.increment("a");
        table.increment("b");

        assert_eq!(table.count("b"), 2);
        assert_eq!(table.count("a"), 1);
        assert_eq!(table.count("missing"), 0);
        assert_eq!(table.len(), 2);

        // First-seen order, not alphabetical.
        let pairs: Vec<_> = table.iter().collect();
        assert_eq!(pairs, vec![("b", 2), ("a", 1)]);
    }

    #[test]
    fn test_frequency_table_serialises_in_first_seen_order() {
        let mut table = FrequencyTable::new();
        table.increment("zeta");
        table.increment("alpha");
        let json = serde_json::to_string(&table).unwrap();
        assert_eq!(json, r#"{"zeta":1,"alpha":1}"#);
    }

    #[test]
    fn test_empty_report_is_empty() {
        assert!(ExtractReport::default().is_empty());
    }

    #[test]
    fn test_bucket_accessor() {
        let buckets = SeverityBuckets {
            errors: vec!["e".to_string()],
            warnings: vec![],
            lines_processed: 1,
        };
        assert_eq!(buckets.bucket(Severity::Error).len(), 1);
        assert!(buckets.bucket(Severity::Warning).is_empty());
        assert_eq!(buckets.retained(), 1);
    }
}
