//! Log interaction use case
//!
//! Records one LLM request/response pair to its own file under the configured
//! log directory. This is diagnostic output only: the operation is
//! best-effort and never reports failure to the caller.
//!
//! # Overview
//!
//! 1. **Ensure directory** - create the log directory and its parents
//! 2. **Name** - `llm_interaction_<micros>.log` from the injected clock
//! 3. **Render** - fixed request/response markers around the raw text
//! 4. **Write** - create or overwrite the file
//!
//! Failures in steps 1 and 4 go to the [`FailureReporter`] and are dropped.
//! Nothing is retried.
//!
//! # Usage
//!
//! ```ignore
//! use interlog_application::{LogInteractionUseCase, LoggerConfig};
//!
//! let logger = LogInteractionUseCase::new(store, clock, LoggerConfig::default());
//!
//! // Await only for sequencing
//! logger.execute(&request, &response).await;
//!
//! // Or don't wait at all
//! let _ = logger.spawn(request, response);
//! ```

use crate::config::LoggerConfig;
use crate::ports::clock::InteractionClock;
use crate::ports::failure_reporter::{FailureReporter, LogFailure, TracingFailureReporter};
use crate::ports::interaction_store::InteractionStore;
use interlog_domain::{Interaction, InteractionFileName};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tracing::{debug, trace, warn};

/// Best-effort writer of per-interaction log files.
pub struct LogInteractionUseCase<S: InteractionStore + 'static, C: InteractionClock + 'static> {
    store: Arc<S>,
    clock: Arc<C>,
    reporter: Arc<dyn FailureReporter>,
    config: LoggerConfig,
}

impl<S, C> Clone for LogInteractionUseCase<S, C>
where
    S: InteractionStore + 'static,
    C: InteractionClock + 'static,
{
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            clock: self.clock.clone(),
            reporter: self.reporter.clone(),
            config: self.config.clone(),
        }
    }
}

impl<S: InteractionStore + 'static, C: InteractionClock + 'static> LogInteractionUseCase<S, C> {
    /// Create a logger that reports failures through `tracing`.
    pub fn new(store: Arc<S>, clock: Arc<C>, config: LoggerConfig) -> Self {
        Self {
            store,
            clock,
            reporter: Arc::new(TracingFailureReporter),
            config,
        }
    }

    /// Replace the failure reporter
    pub fn with_reporter(mut self, reporter: Arc<dyn FailureReporter>) -> Self {
        self.reporter = reporter;
        self
    }

    /// Directory this logger writes to.
    pub fn log_dir(&self) -> &Path {
        &self.config.log_dir
    }

    pub fn is_enabled(&self) -> bool {
        self.config.enabled
    }

    /// Record one interaction.
    ///
    /// Completes once the write has succeeded or its failure has been
    /// reported. The caller cannot observe which of the two happened.
    pub async fn execute(&self, request: &str, response: &str) {
        if !self.config.enabled {
            trace!("Interaction logging disabled, dropping interaction");
            return;
        }

        if let Err(failure) = self.write_interaction(request, response).await {
            self.reporter.report(&failure);
        }
    }

    /// Record one interaction on a background task.
    ///
    /// The handle is only useful for sequencing; it resolves to `()` whether
    /// or not the file was written. Dropping it detaches the task.
    ///
    /// Returns `None` and drops the interaction when called outside a tokio
    /// runtime.
    pub fn spawn(&self, request: String, response: String) -> Option<JoinHandle<()>> {
        let Ok(runtime) = Handle::try_current() else {
            warn!("No tokio runtime available, dropping LLM interaction log");
            return None;
        };

        let logger = self.clone();
        Some(runtime.spawn(async move { logger.execute(&request, &response).await }))
    }

    async fn write_interaction(&self, request: &str, response: &str) -> Result<PathBuf, LogFailure> {
        self.store.ensure_dir(&self.config.log_dir).await?;

        let file_name = InteractionFileName::from_micros(self.clock.now_micros());
        let path = self.config.log_dir.join(file_name.to_string());
        let content = Interaction::new(request, response).render();

        self.store.write(&path, &content).await?;

        debug!(
            "Logged LLM interaction to {} ({} bytes)",
            path.display(),
            content.len()
        );
        Ok(path)
    }
}
