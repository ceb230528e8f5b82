//! Port trait definitions for the Application layer.
//!
//! Ports are the interfaces (contracts) that infrastructure must fulfill.
//! This file imports only from `crate::domain` — never from `crate::infra`,
//! `crate::commands`, or `crate::output`.

use std::path::Path;
use std::process::{ExitStatus, Output};

use anyhow::Result;

use crate::domain::DeployConfig;

// ── Command Runner Port ───────────────────────────────────────────────────────

/// Abstracts process execution so infrastructure can be swapped or mocked.
///
/// The narrow interface is (program, args, working directory) → captured
/// result. No timeout is imposed: every command wrapped here is a
/// long-running, operator-visible tool, and the only deliberate block is the
/// CDN CLI's own `wait` subcommand.
#[allow(async_fn_in_trait)]
pub trait CommandRunner {
    /// Run a program to completion with captured stdout/stderr.
    async fn run(&self, program: &str, args: &[&str], cwd: Option<&Path>) -> Result<Output>;

    /// Run a program to completion with inherited stdio (pass-through).
    async fn run_status(
        &self,
        program: &str,
        args: &[&str],
        cwd: Option<&Path>,
    ) -> Result<ExitStatus>;
}

// ── Site Builder Port ─────────────────────────────────────────────────────────

/// Builds the static site with the generator's package runner.
#[allow(async_fn_in_trait)]
pub trait SiteBuilder {
    /// Run the site generator's build command in the site directory.
    async fn build(&self) -> Result<ExitStatus>;
}

// ── Infrastructure Ports ──────────────────────────────────────────────────────

/// Provisioning tool lifecycle: init, plan, apply, destroy.
///
/// All four run with inherited stdio — the provisioning tool's own progress
/// output goes straight to the operator's terminal.
#[allow(async_fn_in_trait)]
pub trait InfraLifecycle {
    /// Initialize the infrastructure working directory. Idempotent.
    async fn init(&self) -> Result<ExitStatus>;
    /// Show the pending infrastructure changes.
    async fn plan(&self) -> Result<ExitStatus>;
    /// Apply infrastructure changes without interactive approval.
    async fn apply(&self) -> Result<ExitStatus>;
    /// Destroy the managed infrastructure without interactive approval.
    async fn destroy(&self) -> Result<ExitStatus>;
}

/// Reads the provisioning tool's outputs as JSON.
#[allow(async_fn_in_trait)]
pub trait OutputsReader {
    /// Emit current infrastructure outputs as captured JSON text.
    async fn read_outputs(&self) -> Result<Output>;
}

// ── Object Store Port ─────────────────────────────────────────────────────────

/// Object storage synchronization and metadata updates.
#[allow(async_fn_in_trait)]
pub trait ObjectStore {
    /// Recursively synchronize `build_dir` into the bucket.
    async fn sync(
        &self,
        build_dir: &Path,
        bucket: &str,
        cache_control: &str,
        delete_removed: bool,
    ) -> Result<ExitStatus>;

    /// Rewrite content-type and cache-control metadata in place for every
    /// object under `prefix` (optionally restricted to an `include` glob).
    async fn rewrite_metadata(
        &self,
        bucket: &str,
        prefix: &str,
        include: Option<&str>,
        content_type: &str,
        cache_control: &str,
    ) -> Result<ExitStatus>;

    /// Remove every object from the bucket.
    async fn remove_all(&self, bucket: &str) -> Result<ExitStatus>;

    /// List objects under `prefix`, streaming the listing to the terminal.
    async fn list(&self, bucket: &str, prefix: &str) -> Result<ExitStatus>;

    /// Probe a single object's metadata, captured.
    async fn head_object(&self, bucket: &str, key: &str) -> Result<Output>;
}

// ── CDN Cache Port ────────────────────────────────────────────────────────────

/// CDN cache invalidation operations.
#[allow(async_fn_in_trait)]
pub trait CdnCache {
    /// Request a cache purge for the given path patterns; the response JSON
    /// (carrying the invalidation id) is captured.
    async fn create_invalidation(
        &self,
        distribution_id: &str,
        paths: &[String],
    ) -> Result<Output>;

    /// Block until the CDN reports the invalidation completed.
    async fn wait_invalidation(
        &self,
        distribution_id: &str,
        invalidation_id: &str,
    ) -> Result<ExitStatus>;
}

// ── Edge Probe Port ───────────────────────────────────────────────────────────

/// Best-effort HTTP HEAD probes against published URLs.
#[allow(async_fn_in_trait)]
pub trait EdgeProbe {
    /// Fetch response headers for `url`, captured.
    async fn head(&self, url: &str) -> Result<Output>;
}

// ── Progress Reporting Port ───────────────────────────────────────────────────

/// Abstracts progress reporting so services can emit events without
/// depending on the Presentation layer. Sync trait — no async needed.
pub trait ProgressReporter {
    /// Emit an in-progress step message.
    fn step(&self, message: &str);
    /// Emit a success message.
    fn success(&self, message: &str);
    /// Emit a warning message.
    fn warn(&self, message: &str);
}

// ── Config Port ───────────────────────────────────────────────────────────────

/// Abstracts configuration loading.
pub trait ConfigStore {
    /// Load the deployment configuration, falling back to defaults when no
    /// file exists.
    ///
    /// # Errors
    ///
    /// Returns an error if an existing file cannot be read or parsed.
    fn load(&self) -> Result<DeployConfig>;
}
