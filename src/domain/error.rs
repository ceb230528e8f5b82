//! Typed domain error enums.
//!
//! All error types implement `thiserror::Error` and convert to
//! `anyhow::Error` via the `?` operator. `CommandFailed` carries the child
//! process's exit code so `main` can propagate it as the process exit code.

use std::process::ExitStatus;

use thiserror::Error;

// ── External command errors ───────────────────────────────────────────────────

/// An external tool exited unsuccessfully.
#[derive(Debug, Error)]
#[error("{program} exited with {}", .code.map_or_else(|| "signal".to_owned(), |c| format!("status {c}")))]
pub struct CommandFailed {
    /// Human-readable command description, e.g. `"terraform apply"`.
    pub program: String,
    /// Exit code of the child, `None` when killed by a signal.
    pub code: Option<i32>,
}

/// Convert a non-success [`ExitStatus`] into a [`CommandFailed`] error.
///
/// # Errors
///
/// Returns [`CommandFailed`] when `status` is not success.
pub fn ensure_success(program: &str, status: ExitStatus) -> Result<(), CommandFailed> {
    if status.success() {
        return Ok(());
    }
    Err(CommandFailed {
        program: program.to_owned(),
        code: status.code(),
    })
}

// ── Infrastructure outputs errors ─────────────────────────────────────────────

/// Errors parsing the provisioning tool's JSON outputs.
#[derive(Debug, Error)]
pub enum OutputsError {
    #[error("missing key '{0}.value' in terraform outputs")]
    MissingKey(&'static str),

    #[error("terraform outputs are not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

// ── Invalidation errors ───────────────────────────────────────────────────────

/// Errors parsing the CDN CLI's invalidation-creation response.
#[derive(Debug, Error)]
pub enum InvalidationError {
    #[error("missing 'Invalidation.Id' in create-invalidation response")]
    MissingId,

    #[error("create-invalidation response is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
}
