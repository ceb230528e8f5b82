//! Production `CommandRunner` backed by tokio process execution.

use std::path::Path;
use std::process::{ExitStatus, Output, Stdio};

use anyhow::{Context, Result};
use tokio::io::AsyncReadExt;

use crate::application::ports::CommandRunner;

/// Production `CommandRunner` — uses tokio for async process execution.
///
/// Commands run to completion with no imposed timeout; every wrapped tool is
/// a long-running, operator-visible CLI and interrupting it is the
/// operator's call. `kill_on_drop(true)` is set as a safety net so an
/// aborted docship process does not leave children behind.
pub struct TokioCommandRunner;

impl CommandRunner for TokioCommandRunner {
    async fn run(&self, program: &str, args: &[&str], cwd: Option<&Path>) -> Result<Output> {
        let mut cmd = tokio::process::Command::new(program);
        cmd.args(args)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);
        if let Some(dir) = cwd {
            cmd.current_dir(dir);
        }
        let mut child = cmd
            .spawn()
            .with_context(|| format!("failed to spawn {program}"))?;

        let mut stdout_handle = child.stdout.take();
        let mut stderr_handle = child.stderr.take();

        // Read stdout/stderr CONCURRENTLY with wait() to avoid pipe deadlock.
        // If the child writes more than the OS pipe buffer, it blocks on
        // write; waiting first would never resolve.
        let (status, stdout, stderr) = tokio::join!(
            child.wait(),
            async {
                let mut buf = Vec::new();
                if let Some(ref mut h) = stdout_handle {
                    let _ = h.read_to_end(&mut buf).await;
                }
                buf
            },
            async {
                let mut buf = Vec::new();
                if let Some(ref mut h) = stderr_handle {
                    let _ = h.read_to_end(&mut buf).await;
                }
                buf
            },
        );
        Ok(Output {
            status: status.with_context(|| format!("waiting for {program}"))?,
            stdout,
            stderr,
        })
    }

    async fn run_status(
        &self,
        program: &str,
        args: &[&str],
        cwd: Option<&Path>,
    ) -> Result<ExitStatus> {
        let mut cmd = tokio::process::Command::new(program);
        cmd.args(args).kill_on_drop(true);
        if let Some(dir) = cwd {
            cmd.current_dir(dir);
        }
        let mut child = cmd
            .spawn()
            .with_context(|| format!("failed to spawn {program}"))?;

        child
            .wait()
            .await
            .with_context(|| format!("waiting for {program}"))
    }
}
