//! Failure reporting port
//!
//! Interaction logging never fails its caller. When a write does not make it
//! to disk, the use case hands the failure to a [`FailureReporter`] and moves
//! on. Reporters decide where the diagnostic goes.

use super::interaction_store::StoreError;
use std::fmt;
use tracing::error;

/// A logging infrastructure failure: the interaction log was not written.
#[derive(Debug)]
pub struct LogFailure {
    pub error: StoreError,
}

impl LogFailure {
    pub fn new(error: StoreError) -> Self {
        Self { error }
    }
}

impl fmt::Display for LogFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Failed to log LLM interaction: {}", self.error)
    }
}

impl std::error::Error for LogFailure {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}

impl From<StoreError> for LogFailure {
    fn from(error: StoreError) -> Self {
        Self::new(error)
    }
}

/// Receives diagnostics for interaction logs that could not be written.
///
/// Must not panic; the caller of the logger has already moved on.
pub trait FailureReporter: Send + Sync {
    fn report(&self, failure: &LogFailure);
}

/// Default reporter: emits an `error` event through `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingFailureReporter;

impl FailureReporter for TracingFailureReporter {
    fn report(&self, failure: &LogFailure) {
        error!(path = %failure.error.path().display(), "{}", failure);
    }
}

/// No-op reporter for tests and when diagnostics are unwanted
#[derive(Debug, Clone, Copy, Default)]
pub struct NoFailureReporter;

impl FailureReporter for NoFailureReporter {
    fn report(&self, _failure: &LogFailure) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;
    use std::io;
    use std::path::PathBuf;
    use std::sync::{Arc, Mutex};
    use tracing_subscriber::fmt::MakeWriter;

    /// Collects formatted tracing output in memory
    #[derive(Clone, Default)]
    struct BufferWriter(Arc<Mutex<Vec<u8>>>);

    impl BufferWriter {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl io::Write for BufferWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for BufferWriter {
        type Writer = BufferWriter;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    fn write_failure() -> LogFailure {
        LogFailure::from(StoreError::Write {
            path: PathBuf::from("/tmp/logs/llm_interaction_7.log"),
            source: io::Error::other("disk full"),
        })
    }

    #[test]
    fn test_tracing_reporter_emits_error_event() {
        let buffer = BufferWriter::default();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(buffer.clone())
            .with_ansi(false)
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            TracingFailureReporter.report(&write_failure());
        });

        let output = buffer.contents();
        assert!(output.contains("ERROR"), "unexpected output: {output}");
        assert!(output.contains("Failed to log LLM interaction:"));
        assert!(output.contains("llm_interaction_7.log"));
    }

    #[test]
    fn test_no_reporter_emits_nothing() {
        let buffer = BufferWriter::default();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(buffer.clone())
            .with_ansi(false)
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            NoFailureReporter.report(&write_failure());
        });

        assert!(buffer.contents().is_empty());
    }

    #[test]
    fn test_log_failure_display() {
        let failure = LogFailure::from(StoreError::CreateDir {
            path: PathBuf::from("/proc/llm_logs"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        });
        assert_eq!(
            failure.to_string(),
            "Failed to log LLM interaction: Failed to create log directory /proc/llm_logs: denied"
        );
        assert!(failure.source().is_some());
    }
}
