//! Error types for the demo driver
//!
//! The record itself never fails; only writing the report and installing
//! the log subscriber can.

use std::io;

/// Demo driver error type
#[derive(Debug, thiserror::Error)]
pub enum DemoError {
    /// Writing one report line failed
    #[error("failed to write report line {line}: {source}")]
    Write {
        line: usize,
        #[source]
        source: io::Error,
    },

    /// Flushing the output stream failed
    #[error("failed to flush report: {0}")]
    Flush(#[source] io::Error),

    /// A global log subscriber could not be installed
    #[error("logging setup failed: {0}")]
    Logging(String),
}

impl DemoError {
    /// Create write error for a 1-based report line
    #[inline]
    pub fn write(line: usize, source: io::Error) -> Self {
        Self::Write { line, source }
    }

    /// Check if the reader went away (closed pipe)
    #[inline]
    #[must_use]
    pub fn is_broken_pipe(&self) -> bool {
        match self {
            Self::Write { source, .. } | Self::Flush(source) => {
                source.kind() == io::ErrorKind::BrokenPipe
            }
            Self::Logging(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_error_names_line() {
        let err = DemoError::write(2, io::Error::other("disk full"));
        assert_eq!(err.to_string(), "failed to write report line 2: disk full");
        assert!(!err.is_broken_pipe());
    }

    #[test]
    fn broken_pipe_detected() {
        let err = DemoError::Flush(io::Error::from(io::ErrorKind::BrokenPipe));
        assert!(err.is_broken_pipe());
        assert!(!DemoError::Logging("already set".into()).is_broken_pipe());
    }
}
