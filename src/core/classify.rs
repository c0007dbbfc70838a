// logtriage - core/classify.rs
//
// Severity classification: bucket failure-indicating lines by their
// `level=` marker. One logical record per line; the blob is the unit of
// invocation and nothing persists between calls.

use crate::core::model::{Severity, SeverityBuckets};
use regex::Regex;
use std::sync::OnceLock;

/// Composite failure-line pattern: a `level=` marker whose value is
/// literally `error` or `warning`, followed anywhere later in the same
/// line by a case-sensitive `failed` or `Failed` token. Arbitrary text
/// may intervene between the marker and the failure keyword; no tighter
/// adjacency is required.
///
/// `FAILED` (all caps) does not match — the keyword search is
/// case-sensitive on purpose.
fn failure_line_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"level=(?P<level>error|warning)\b.*[fF]ailed")
            .expect("failure line regex is valid")
    })
}

/// Split `blob` into lines and bucket the failure-indicating ones by
/// severity.
///
/// Blank lines (after trimming) are skipped entirely and do not count as
/// processed records. A non-blank line is retained only when it carries
/// both a recognised severity marker and a failure keyword after it;
/// everything else is silently excluded — normal behaviour, not an error.
/// In particular a `level=warning` line without a later `failed`/`Failed`
/// is dropped: not all warnings indicate failure, and capturing them all
/// would defeat the point of the bucket.
///
/// Pure function of the input text: identical blobs always produce
/// identical buckets, and no line ever lands in both.
pub fn classify(blob: &str) -> SeverityBuckets {
    let mut buckets = SeverityBuckets::default();

    for line in blob.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        buckets.lines_processed += 1;

        let Some(caps) = failure_line_re().captures(trimmed) else {
            continue;
        };

        // The named group always participates when the pattern matches,
        // and its value is one of the two literal alternatives.
        let severity = match caps.name("level").map(|m| m.as_str()) {
            Some("error") => Severity::Error,
            Some("warning") => Severity::Warning,
            _ => continue,
        };

        match severity {
            Severity::Error => buckets.errors.push(trimmed.to_string()),
            Severity::Warning => buckets.warnings.push(trimmed.to_string()),
        }
    }

    tracing::debug!(
        lines = buckets.lines_processed,
        errors = buckets.errors.len(),
        warnings = buckets.warnings.len(),
        "Classification complete"
    );

    buckets
}
