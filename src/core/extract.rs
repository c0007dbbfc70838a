// logtriage - core/extract.rs
//
// Pattern-driven field extraction. The source logs have no single fixed
// grammar, so each field class is found by an independent full-blob
// pattern search rather than a strict line schema. The three scans never
// exclude one another's matches.

use crate::core::model::ExtractReport;
use regex::Regex;
use std::sync::OnceLock;

/// Dotted-quad address: four dot-separated groups of 1-3 digits, bounded
/// by word boundaries. Deliberately permissive — no octet range check, so
/// `999.999.999.999` counts. Exploratory triage wants to see such tokens,
/// not reject them.
fn address_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"\b\d{1,3}\.\d{1,3}\.\d{1,3}\.\d{1,3}\b").expect("address regex is valid")
    })
}

/// Request verb: an opening double-quote immediately followed by one of
/// the fixed verb set. Only the verb token is captured; the quote is
/// consumed but not part of the value.
fn verb_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#""(GET|POST|PUT|DELETE)\b"#).expect("verb regex is valid"))
}

/// Status token: exactly three digits forming a whole whitespace-delimited
/// token. Applied per token (see `extract`), which is what makes the
/// whitespace delimiting exact — `\b\d{3}\b` over the raw blob would also
/// hit the octets of every dotted address.
fn status_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\d{3}$").expect("status regex is valid"))
}

/// Scan `blob` for the three field classes and aggregate occurrence
/// counts per class.
///
/// Three independent passes over the same text; matches may overlap in
/// source position across categories. Values are counted, not
/// position-deduplicated. An empty blob (or a category with no matches)
/// yields an empty table, never an error.
pub fn extract(blob: &str) -> ExtractReport {
    let mut report = ExtractReport::default();

    for m in address_re().find_iter(blob) {
        report.addresses.increment(m.as_str());
    }

    for caps in verb_re().captures_iter(blob) {
        // Group 1 always participates when the pattern matches.
        if let Some(verb) = caps.get(1) {
            report.verbs.increment(verb.as_str());
        }
    }

    // Token-at-a-time pass so "delimited by surrounding whitespace" is
    // exact: a 3-digit run inside a longer token never qualifies.
    for token in blob.split_whitespace() {
        if status_re().is_match(token) {
            report.statuses.increment(token);
        }
    }

    tracing::debug!(
        addresses = report.addresses.len(),
        verbs = report.verbs.len(),
        statuses = report.statuses.len(),
        "Extraction complete"
    );

    report
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_empty_blob_yields_empty_tables() {
        let report = extract("");
        assert!(report.is_empty());
    }

    #[test]
    fn test_extract_access_log_verbs_and_statuses() {
        let blob = "10.0.0.1 - - \"GET /a HTTP/1.1\" 200 512\n\
                    10.0.0.2 - - \"POST /b HTTP/1.1\" 404 0\n\
                    10.0.0.1 - - \"GET /c HTTP/1.1\" 200 98\n";
        let report = extract(blob);

        assert_eq!(report.verbs.count("GET"), 2);
        assert_eq!(report.verbs.count("POST"), 1);
        assert_eq!(report.verbs.count("PUT"), 0);

        assert_eq!(report.statuses.count("200"), 2);
        assert_eq!(report.statuses.count("404"), 1);
    }

    #[test]
    fn test_extract_address_duplicate_count() {
        let blob = "192.168.1.1 - - [18/Mar/2020:14:40:30] \"GET / HTTP/1.1\" 200\n\
                    192.168.1.1 - - [18/Mar/2020:14:40:31] \"GET / HTTP/1.1\" 200\n";
        let report = extract(blob);
        assert_eq!(report.addresses.count("192.168.1.1"), 2);
        assert_eq!(report.addresses.len(), 1);
    }

    #[test]
    fn test_extract_address_is_permissive_about_octet_range() {
        let report = extract("999.999.999.999 said hello");
        assert_eq!(report.addresses.count("999.999.999.999"), 1);
    }

    #[test]
    fn test_extract_address_rejects_four_digit_groups() {
        let report = extract("1234.1.1.1 is not a dotted quad");
        assert!(report.addresses.is_empty());
    }

    #[test]
    fn test_extract_verb_requires_opening_quote() {
        // Bare verbs without a preceding quote are not request verbs.
        let report = extract("GET lost; then \"PUT /x HTTP/1.1\" 201");
        assert_eq!(report.verbs.count("GET"), 0);
        assert_eq!(report.verbs.count("PUT"), 1);
    }

    #[test]
    fn test_extract_verb_outside_fixed_set_ignored() {
        let report = extract("\"PATCH /x HTTP/1.1\" 204");
        assert!(report.verbs.is_empty());
    }

    #[test]
    fn test_extract_status_must_be_whole_token() {
        // 4-digit token, 3-digit run embedded in a word, and a dotted
        // address octet must all be ignored.
        let report = extract("5120 abc123def 10.200.300.4 payload");
        assert!(report.statuses.is_empty());
    }

    #[test]
    fn test_extract_status_no_semantic_validation() {
        // 999 is not a registered HTTP status; it still counts.
        let report = extract("worker exited 999 restarting");
        assert_eq!(report.statuses.count("999"), 1);
    }

    #[test]
    fn test_extract_consecutive_status_tokens_all_counted() {
        let report = extract("200 404 200");
        assert_eq!(report.statuses.count("200"), 2);
        assert_eq!(report.statuses.count("404"), 1);
    }

    #[test]
    fn test_extract_first_seen_order_preserved() {
        let blob = "\"POST /a\" 1 \"GET /b\" 2 \"POST /c\" 3";
        let report = extract(blob);
        let verbs: Vec<_> = report.verbs.iter().collect();
        assert_eq!(verbs, vec![("POST", 2), ("GET", 1)]);
    }

    #[test]
    fn test_extract_is_idempotent() {
        let blob = "192.168.1.9 \"GET /\" 200\n";
        let first = extract(blob);
        let second = extract(blob);
        assert_eq!(first.addresses, second.addresses);
        assert_eq!(first.verbs, second.verbs);
        assert_eq!(first.statuses, second.statuses);
    }
}
