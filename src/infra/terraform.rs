//! Infrastructure adapter that routes all provisioning-tool calls through a
//! `CommandRunner`.
//!
//! Generic over `R: CommandRunner` so that tests can inject a mock runner
//! without spawning real processes.

use std::path::PathBuf;
use std::process::{ExitStatus, Output};

use anyhow::{Context, Result};

use crate::application::ports::{CommandRunner, InfraLifecycle, OutputsReader};
use crate::domain::DeployConfig;
use crate::infra::command_runner::TokioCommandRunner;

/// Provisioning-tool adapter. Every subcommand runs inside the configured
/// infrastructure directory.
pub struct TerraformCli<R: CommandRunner> {
    runner: R,
    bin: String,
    dir: PathBuf,
}

impl<R: CommandRunner> TerraformCli<R> {
    /// Create a new adapter with an explicit runner instance.
    pub fn new(runner: R, bin: impl Into<String>, dir: impl Into<PathBuf>) -> Self {
        Self {
            runner,
            bin: bin.into(),
            dir: dir.into(),
        }
    }

    async fn passthrough(&self, args: &[&str]) -> Result<ExitStatus> {
        self.runner
            .run_status(&self.bin, args, Some(&self.dir))
            .await
            .with_context(|| format!("failed to run {} {}", self.bin, args[0]))
    }
}

impl TerraformCli<TokioCommandRunner> {
    /// Convenience constructor for production use.
    #[must_use]
    pub fn from_config(config: &DeployConfig) -> Self {
        Self::new(TokioCommandRunner, &config.terraform_bin, &config.infra_dir)
    }
}

impl<R: CommandRunner> InfraLifecycle for TerraformCli<R> {
    async fn init(&self) -> Result<ExitStatus> {
        self.passthrough(&["init"]).await
    }

    async fn plan(&self) -> Result<ExitStatus> {
        self.passthrough(&["plan"]).await
    }

    async fn apply(&self) -> Result<ExitStatus> {
        self.passthrough(&["apply", "--auto-approve"]).await
    }

    async fn destroy(&self) -> Result<ExitStatus> {
        self.passthrough(&["destroy", "--auto-approve"]).await
    }
}

impl<R: CommandRunner> OutputsReader for TerraformCli<R> {
    async fn read_outputs(&self) -> Result<Output> {
        self.runner
            .run(&self.bin, &["output", "-json"], Some(&self.dir))
            .await
            .with_context(|| format!("failed to run {} output", self.bin))
    }
}
