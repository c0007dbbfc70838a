// logtriage - util/error.rs
//
// Typed error hierarchy with context-preserving error chains.
// No string-based error propagation; all errors preserve the causal
// chain for diagnostic logging.
//
// The core extraction and classification functions are pure and
// infallible; every variant here belongs to a collaborator (file
// reading, sinks, report rendering, epoch conversion).

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Top-level error type for all logtriage operations.
/// Errors are categorised by the subsystem that produced them.
#[derive(Debug)]
pub enum TriageError {
    /// Reading a source log file failed.
    Pipeline(PipelineError),

    /// Writing bucketed lines to a sink failed.
    Sink(SinkError),

    /// Rendering an extraction report failed.
    Report(ReportError),

    /// Epoch value conversion failed.
    Epoch(EpochError),
}

impl fmt::Display for TriageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pipeline(e) => write!(f, "Pipeline error: {e}"),
            Self::Sink(e) => write!(f, "Sink error: {e}"),
            Self::Report(e) => write!(f, "Report error: {e}"),
            Self::Epoch(e) => write!(f, "Epoch error: {e}"),
        }
    }
}

impl std::error::Error for TriageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Pipeline(e) => Some(e),
            Self::Sink(e) => Some(e),
            Self::Report(e) => Some(e),
            Self::Epoch(e) => Some(e),
        }
    }
}

// ---------------------------------------------------------------------------
// Pipeline errors
// ---------------------------------------------------------------------------

/// Errors related to reading source log files.
#[derive(Debug)]
pub enum PipelineError {
    /// The source file does not exist.
    SourceNotFound { path: PathBuf },

    /// I/O error reading the source file.
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for PipelineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SourceNotFound { path } => {
                write!(f, "Source file '{}' does not exist", path.display())
            }
            Self::Io { path, source } => {
                write!(f, "'{}': I/O error: {source}", path.display())
            }
        }
    }
}

impl std::error::Error for PipelineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<PipelineError> for TriageError {
    fn from(e: PipelineError) -> Self {
        Self::Pipeline(e)
    }
}

// ---------------------------------------------------------------------------
// Sink errors
// ---------------------------------------------------------------------------

/// Errors related to persisting or displaying bucketed lines.
#[derive(Debug)]
pub enum SinkError {
    /// I/O error writing to a file sink.
    Io { path: PathBuf, source: io::Error },

    /// I/O error writing to a console sink (no path context).
    Console { source: io::Error },
}

impl fmt::Display for SinkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "Cannot write '{}': {source}", path.display())
            }
            Self::Console { source } => write!(f, "Cannot write to console: {source}"),
        }
    }
}

impl std::error::Error for SinkError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Console { source } => Some(source),
        }
    }
}

impl From<SinkError> for TriageError {
    fn from(e: SinkError) -> Self {
        Self::Sink(e)
    }
}

// ---------------------------------------------------------------------------
// Report errors
// ---------------------------------------------------------------------------

/// Errors related to rendering extraction reports.
#[derive(Debug)]
pub enum ReportError {
    /// I/O error writing the rendered report.
    Io { source: io::Error },

    /// JSON serialisation error.
    Json { source: serde_json::Error },
}

impl fmt::Display for ReportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { source } => write!(f, "Report I/O error: {source}"),
            Self::Json { source } => write!(f, "Report JSON error: {source}"),
        }
    }
}

impl std::error::Error for ReportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source } => Some(source),
            Self::Json { source } => Some(source),
        }
    }
}

impl From<ReportError> for TriageError {
    fn from(e: ReportError) -> Self {
        Self::Report(e)
    }
}

// ---------------------------------------------------------------------------
// Epoch errors
// ---------------------------------------------------------------------------

/// Errors related to epoch timestamp conversion.
#[derive(Debug)]
pub enum EpochError {
    /// Input is not a decimal number.
    InvalidNumber { input: String },

    /// Input parsed but is outside the representable datetime range.
    OutOfRange { input: String },
}

impl fmt::Display for EpochError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidNumber { input } => {
                write!(f, "'{input}' is not a valid epoch number")
            }
            Self::OutOfRange { input } => {
                write!(f, "'{input}' is outside the representable datetime range")
            }
        }
    }
}

impl std::error::Error for EpochError {}

impl From<EpochError> for TriageError {
    fn from(e: EpochError) -> Self {
        Self::Epoch(e)
    }
}

/// Convenience type alias for logtriage results.
pub type Result<T> = std::result::Result<T, TriageError>;
