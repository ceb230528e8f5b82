//! Site generator adapter — runs the package runner's build script.

use std::path::PathBuf;
use std::process::ExitStatus;

use anyhow::{Context, Result};

use crate::application::ports::{CommandRunner, SiteBuilder};
use crate::domain::DeployConfig;
use crate::infra::command_runner::TokioCommandRunner;

/// Package-runner adapter. The build runs inside the site directory with
/// inherited stdio so generator warnings reach the operator.
pub struct NpmBuilder<R: CommandRunner> {
    runner: R,
    bin: String,
    dir: PathBuf,
}

impl<R: CommandRunner> NpmBuilder<R> {
    /// Create a new adapter with an explicit runner instance.
    pub fn new(runner: R, bin: impl Into<String>, dir: impl Into<PathBuf>) -> Self {
        Self {
            runner,
            bin: bin.into(),
            dir: dir.into(),
        }
    }
}

impl NpmBuilder<TokioCommandRunner> {
    /// Convenience constructor for production use.
    #[must_use]
    pub fn from_config(config: &DeployConfig) -> Self {
        Self::new(TokioCommandRunner, &config.npm_bin, &config.site_dir)
    }
}

impl<R: CommandRunner> SiteBuilder for NpmBuilder<R> {
    async fn build(&self) -> Result<ExitStatus> {
        self.runner
            .run_status(&self.bin, &["run", "build"], Some(&self.dir))
            .await
            .with_context(|| format!("failed to run {} run build", self.bin))
    }
}
