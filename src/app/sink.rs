// logtriage - app/sink.rs
//
// Output sinks for bucketed lines. The core only requires the
// capability "accept an ordered sequence of text lines, persist or
// display them, report how many were accepted" — storage medium and
// empty-sequence policy are caller decisions, made in the pipeline.

use crate::util::error::SinkError;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Accepts an ordered sequence of text lines and reports how many were
/// accepted.
pub trait LineSink {
    fn accept(&mut self, lines: &[String]) -> Result<usize, SinkError>;
}

// =============================================================================
// File sink
// =============================================================================

/// Writes lines to a file: one raw line per output line,
/// newline-terminated, UTF-8. The file is created (or truncated) on
/// `accept`, so each invocation fully replaces previous content.
pub struct FileSink {
    path: PathBuf,
}

impl FileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl LineSink for FileSink {
    fn accept(&mut self, lines: &[String]) -> Result<usize, SinkError> {
        let file = std::fs::File::create(&self.path).map_err(|e| SinkError::Io {
            path: self.path.clone(),
            source: e,
        })?;
        let mut writer = std::io::BufWriter::new(file);

        for line in lines {
            writeln!(writer, "{line}").map_err(|e| SinkError::Io {
                path: self.path.clone(),
                source: e,
            })?;
        }

        writer.flush().map_err(|e| SinkError::Io {
            path: self.path.clone(),
            source: e,
        })?;

        tracing::debug!(path = %self.path.display(), lines = lines.len(), "File sink wrote lines");
        Ok(lines.len())
    }
}

// =============================================================================
// Console sink
// =============================================================================

/// Writes lines to any `Write` destination (stdout in the binary).
pub struct ConsoleSink<W: Write> {
    writer: W,
}

impl<W: Write> ConsoleSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> LineSink for ConsoleSink<W> {
    fn accept(&mut self, lines: &[String]) -> Result<usize, SinkError> {
        for line in lines {
            writeln!(self.writer, "{line}").map_err(|e| SinkError::Console { source: e })?;
        }
        self.writer
            .flush()
            .map_err(|e| SinkError::Console { source: e })?;
        Ok(lines.len())
    }
}

// =============================================================================
// Memory sink
// =============================================================================

/// Collects accepted lines in memory. Used by tests.
#[derive(Debug, Default)]
pub struct MemorySink {
    pub lines: Vec<String>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl LineSink for MemorySink {
    fn accept(&mut self, lines: &[String]) -> Result<usize, SinkError> {
        self.lines.extend(lines.iter().cloned());
        Ok(lines.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_file_sink_writes_newline_terminated_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");

        let mut sink = FileSink::new(&path);
        let accepted = sink.accept(&lines(&["alpha", "beta"])).unwrap();
        assert_eq!(accepted, 2);

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "alpha\nbeta\n");
    }

    #[test]
    fn test_file_sink_truncates_previous_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        std::fs::write(&path, "stale content\nmore stale\n").unwrap();

        let mut sink = FileSink::new(&path);
        sink.accept(&lines(&["fresh"])).unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "fresh\n");
    }

    #[test]
    fn test_file_sink_unwritable_path_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing-subdir").join("out.txt");

        let mut sink = FileSink::new(&path);
        let result = sink.accept(&lines(&["x"]));
        assert!(matches!(result, Err(SinkError::Io { .. })));
    }

    #[test]
    fn test_console_sink_reports_count() {
        let mut buf = Vec::new();
        let accepted = ConsoleSink::new(&mut buf).accept(&lines(&["a", "b", "c"])).unwrap();
        assert_eq!(accepted, 3);
        assert_eq!(String::from_utf8(buf).unwrap(), "a\nb\nc\n");
    }

    #[test]
    fn test_memory_sink_collects_lines() {
        let mut sink = MemorySink::new();
        sink.accept(&lines(&["one"])).unwrap();
        sink.accept(&lines(&["two"])).unwrap();
        assert_eq!(sink.lines, lines(&["one", "two"]));
    }
}
