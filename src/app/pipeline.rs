// logtriage - app/pipeline.rs
//
// The triage pipeline: read a source log file, hand the blob to the
// core engine, deliver results. Output-file naming and the
// stale-output-removal policy live here, not in the core — the engine
// never decides storage medium or absence semantics.

use crate::app::sink::{FileSink, LineSink};
use crate::core::classify::classify;
use crate::core::extract::extract;
use crate::core::model::{ExtractReport, Severity, SeverityBuckets};
use crate::util::constants;
use crate::util::error::{PipelineError, Result, SinkError};
use std::path::{Path, PathBuf};

/// Outcome of a classification run, including where the buckets went.
#[derive(Debug)]
pub struct ClassifyOutcome {
    /// Non-blank lines the classifier examined.
    pub lines_processed: u64,

    /// Lines accepted by the error output.
    pub errors_written: usize,

    /// Lines accepted by the warning output.
    pub warnings_written: usize,

    /// Destination of the error bucket.
    pub error_path: PathBuf,

    /// Destination of the warning bucket.
    pub warning_path: PathBuf,
}

/// Read a source log file to an in-memory blob.
///
/// Invalid UTF-8 is converted lossily — triage wants to see what it can
/// rather than refuse the file. Missing or unreadable files are
/// collaborator errors; the core never sees them.
pub fn read_blob(path: &Path) -> std::result::Result<String, PipelineError> {
    if !path.is_file() {
        return Err(PipelineError::SourceNotFound {
            path: path.to_path_buf(),
        });
    }

    let bytes = std::fs::read(path).map_err(|e| PipelineError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    if bytes.len() as u64 > constants::LARGE_BLOB_WARN_BYTES {
        tracing::warn!(
            path = %path.display(),
            bytes = bytes.len(),
            "Large input file; the whole blob is scanned in memory"
        );
    }

    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Read `path` and extract field occurrence statistics.
pub fn run_extract(path: &Path) -> std::result::Result<ExtractReport, PipelineError> {
    let blob = read_blob(path)?;
    tracing::info!(path = %path.display(), bytes = blob.len(), "Extracting fields");
    Ok(extract(&blob))
}

/// Read `path` and classify its lines into buckets.
pub fn run_classify_to_buckets(path: &Path) -> std::result::Result<SeverityBuckets, PipelineError> {
    let blob = read_blob(path)?;
    tracing::info!(path = %path.display(), bytes = blob.len(), "Classifying lines");
    Ok(classify(&blob))
}

/// Read `path`, classify its lines, and persist the buckets as
/// `error_messages_from_<stem>.txt` / `warning_messages_from_<stem>.txt`
/// in `out_dir`.
///
/// Caller policy: an empty bucket writes nothing, and a stale output
/// file left by a previous run is removed so the directory always
/// reflects the latest run.
pub fn run_classify(path: &Path, out_dir: &Path) -> Result<ClassifyOutcome> {
    let buckets = run_classify_to_buckets(path)?;

    let error_path = bucket_output_path(path, out_dir, Severity::Error);
    let warning_path = bucket_output_path(path, out_dir, Severity::Warning);

    let errors_written = deliver_bucket(&buckets.errors, &error_path)?;
    let warnings_written = deliver_bucket(&buckets.warnings, &warning_path)?;

    tracing::info!(
        lines = buckets.lines_processed,
        errors = errors_written,
        warnings = warnings_written,
        "Classification run complete"
    );

    Ok(ClassifyOutcome {
        lines_processed: buckets.lines_processed,
        errors_written,
        warnings_written,
        error_path,
        warning_path,
    })
}

/// Conventional output path for one bucket:
/// `<out_dir>/<prefix><source-stem>.txt`.
pub fn bucket_output_path(source: &Path, out_dir: &Path, severity: Severity) -> PathBuf {
    let stem = source
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "log".to_string());

    let prefix = match severity {
        Severity::Error => constants::ERROR_OUTPUT_PREFIX,
        Severity::Warning => constants::WARNING_OUTPUT_PREFIX,
    };

    out_dir.join(format!("{prefix}{stem}.{}", constants::OUTPUT_EXTENSION))
}

/// Write a bucket to its file, or remove a stale file when the bucket is
/// empty. Returns the number of lines accepted by the sink.
fn deliver_bucket(lines: &[String], path: &Path) -> std::result::Result<usize, SinkError> {
    if lines.is_empty() {
        if path.is_file() {
            std::fs::remove_file(path).map_err(|e| SinkError::Io {
                path: path.to_path_buf(),
                source: e,
            })?;
            tracing::debug!(path = %path.display(), "Removed stale output file");
        }
        return Ok(0);
    }

    FileSink::new(path).accept(lines)
}
