//! Best-effort HTTP probe backed by `curl`.

use std::process::Output;

use anyhow::{Context, Result};

use crate::application::ports::{CommandRunner, EdgeProbe};
use crate::infra::command_runner::TokioCommandRunner;

/// `curl -sSI` probe used by the MIME diagnostics. Failures are the caller's
/// to swallow — probes are informational only.
pub struct CurlProbe<R: CommandRunner> {
    runner: R,
}

impl<R: CommandRunner> CurlProbe<R> {
    /// Create a new probe with an explicit runner instance.
    pub fn new(runner: R) -> Self {
        Self { runner }
    }
}

impl Default for CurlProbe<TokioCommandRunner> {
    fn default() -> Self {
        Self::new(TokioCommandRunner)
    }
}

impl<R: CommandRunner> EdgeProbe for CurlProbe<R> {
    async fn head(&self, url: &str) -> Result<Output> {
        self.runner
            .run("curl", &["-sSI", url], None)
            .await
            .context("failed to run curl")
    }
}
