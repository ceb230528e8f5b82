//! Shared mock infrastructure for unit tests.
//!
//! Provides a recording [`CommandRunner`] for adapter tests and a recording
//! cloud backend implementing every port for service tests, so each test
//! file doesn't have to re-define the same boilerplate.

#![allow(dead_code)]
#![allow(clippy::expect_used)]

use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::process::{ExitStatus, Output};
use std::sync::{Arc, Mutex};

use anyhow::{Result, bail};

use docship::application::ports::{
    CdnCache, CommandRunner, EdgeProbe, InfraLifecycle, ObjectStore, OutputsReader,
    ProgressReporter, SiteBuilder,
};

use crate::helpers::{exit_status, ok_output};

// ── RecordingRunner ──────────────────────────────────────────────────────────

/// One recorded process invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall {
    pub program: String,
    pub args: Vec<String>,
    pub cwd: Option<PathBuf>,
}

/// A `CommandRunner` that records every `(program, args, cwd)` call and
/// returns a configurable canned result.
///
/// Thread-safe via `Arc<Mutex<…>>` so clones share the same call log.
#[derive(Clone)]
pub struct RecordingRunner {
    calls: Arc<Mutex<Vec<RecordedCall>>>,
    result: Arc<dyn Fn() -> Result<Output> + Send + Sync>,
}

impl RecordingRunner {
    /// Create a mock that always returns `Ok` with a zero exit status.
    pub fn new_ok() -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
            result: Arc::new(|| Ok(ok_output(b""))),
        }
    }

    /// Create a mock that always returns `Ok` with the given stdout.
    pub fn new_ok_with_stdout(stdout: &'static [u8]) -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
            result: Arc::new(move || Ok(ok_output(stdout))),
        }
    }

    /// Create a mock that always returns the given error message.
    pub fn new_err(msg: &'static str) -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
            result: Arc::new(move || bail!("{msg}")),
        }
    }

    /// Return a snapshot of all recorded calls.
    pub fn recorded_calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().expect("mutex poisoned").clone()
    }

    fn record(&self, program: &str, args: &[&str], cwd: Option<&Path>) {
        self.calls.lock().expect("mutex poisoned").push(RecordedCall {
            program: program.to_owned(),
            args: args.iter().map(ToString::to_string).collect(),
            cwd: cwd.map(Path::to_path_buf),
        });
    }
}

impl CommandRunner for RecordingRunner {
    async fn run(&self, program: &str, args: &[&str], cwd: Option<&Path>) -> Result<Output> {
        self.record(program, args, cwd);
        (self.result)()
    }

    async fn run_status(
        &self,
        program: &str,
        args: &[&str],
        cwd: Option<&Path>,
    ) -> Result<ExitStatus> {
        self.record(program, args, cwd);
        Ok((self.result)()?.status)
    }
}

// ── CloudRecorder ────────────────────────────────────────────────────────────

/// Canned outputs JSON with a primary bucket and a distribution only.
pub const OUTPUTS_PRIMARY_ONLY: &str = r#"{
    "website_bucket_name": {"value": "site-a"},
    "cloudfront_distribution_id": {"value": "EABC123"}
}"#;

/// Canned outputs JSON that also carries a failover bucket.
pub const OUTPUTS_WITH_FAILOVER: &str = r#"{
    "website_bucket_name": {"value": "site-a"},
    "website_failover_bucket_name": {"value": "site-b"},
    "cloudfront_distribution_id": {"value": "EABC123"}
}"#;

/// A port-level mock implementing every cloud-facing trait.
///
/// Each operation appends a human-readable label to `calls`; service tests
/// assert on label order. `fail_on` makes the first operation whose label
/// starts with the given prefix exit non-zero.
pub struct CloudRecorder {
    calls: RefCell<Vec<String>>,
    outputs_json: String,
    invalidation_json: String,
    fail_on: Option<&'static str>,
}

impl CloudRecorder {
    pub fn new(outputs_json: &str) -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
            outputs_json: outputs_json.to_owned(),
            invalidation_json: r#"{"Invalidation": {"Id": "I1234567890"}}"#.to_owned(),
            fail_on: None,
        }
    }

    /// Use a custom create-invalidation response body.
    #[must_use]
    pub fn with_invalidation_json(mut self, json: &str) -> Self {
        self.invalidation_json = json.to_owned();
        self
    }

    /// Make operations whose label starts with `prefix` exit non-zero.
    #[must_use]
    pub fn failing_at(mut self, prefix: &'static str) -> Self {
        self.fail_on = Some(prefix);
        self
    }

    /// Return a snapshot of all recorded labels, in call order.
    pub fn recorded(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    fn record(&self, label: String) -> ExitStatus {
        let failed = self.fail_on.is_some_and(|prefix| label.starts_with(prefix));
        self.calls.borrow_mut().push(label);
        exit_status(i32::from(failed))
    }
}

impl SiteBuilder for CloudRecorder {
    async fn build(&self) -> Result<ExitStatus> {
        Ok(self.record("build".to_owned()))
    }
}

impl InfraLifecycle for CloudRecorder {
    async fn init(&self) -> Result<ExitStatus> {
        Ok(self.record("init".to_owned()))
    }
    async fn plan(&self) -> Result<ExitStatus> {
        Ok(self.record("plan".to_owned()))
    }
    async fn apply(&self) -> Result<ExitStatus> {
        Ok(self.record("apply".to_owned()))
    }
    async fn destroy(&self) -> Result<ExitStatus> {
        Ok(self.record("destroy".to_owned()))
    }
}

impl OutputsReader for CloudRecorder {
    async fn read_outputs(&self) -> Result<Output> {
        let status = self.record("read-outputs".to_owned());
        Ok(Output {
            status,
            stdout: self.outputs_json.clone().into_bytes(),
            stderr: Vec::new(),
        })
    }
}

impl ObjectStore for CloudRecorder {
    async fn sync(
        &self,
        build_dir: &Path,
        bucket: &str,
        _cache_control: &str,
        _delete_removed: bool,
    ) -> Result<ExitStatus> {
        Ok(self.record(format!("sync {} s3://{bucket}", build_dir.display())))
    }

    async fn rewrite_metadata(
        &self,
        bucket: &str,
        prefix: &str,
        _include: Option<&str>,
        content_type: &str,
        _cache_control: &str,
    ) -> Result<ExitStatus> {
        Ok(self.record(format!("rewrite s3://{bucket}/{prefix} {content_type}")))
    }

    async fn remove_all(&self, bucket: &str) -> Result<ExitStatus> {
        Ok(self.record(format!("remove-all s3://{bucket}")))
    }

    async fn list(&self, bucket: &str, prefix: &str) -> Result<ExitStatus> {
        Ok(self.record(format!("list s3://{bucket}/{prefix}")))
    }

    async fn head_object(&self, bucket: &str, key: &str) -> Result<Output> {
        let status = self.record(format!("head {bucket}/{key}"));
        Ok(Output {
            status,
            stdout: b"{}".to_vec(),
            stderr: Vec::new(),
        })
    }
}

impl CdnCache for CloudRecorder {
    async fn create_invalidation(
        &self,
        distribution_id: &str,
        paths: &[String],
    ) -> Result<Output> {
        let status =
            self.record(format!("create-invalidation {distribution_id} {}", paths.join(" ")));
        Ok(Output {
            status,
            stdout: self.invalidation_json.clone().into_bytes(),
            stderr: Vec::new(),
        })
    }

    async fn wait_invalidation(
        &self,
        distribution_id: &str,
        invalidation_id: &str,
    ) -> Result<ExitStatus> {
        Ok(self.record(format!("wait {distribution_id} {invalidation_id}")))
    }
}

impl EdgeProbe for CloudRecorder {
    async fn head(&self, url: &str) -> Result<Output> {
        let status = self.record(format!("probe {url}"));
        Ok(Output {
            status,
            stdout: b"HTTP/1.1 200 OK\ncontent-type: text/html\n".to_vec(),
            stderr: Vec::new(),
        })
    }
}

// ── Reporters ────────────────────────────────────────────────────────────────

/// A `ProgressReporter` that swallows every event.
pub struct NullReporter;

impl ProgressReporter for NullReporter {
    fn step(&self, _message: &str) {}
    fn success(&self, _message: &str) {}
    fn warn(&self, _message: &str) {}
}

/// A `ProgressReporter` that records every event with its kind.
pub struct RecordingReporter {
    events: RefCell<Vec<String>>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self {
            events: RefCell::new(Vec::new()),
        }
    }

    pub fn recorded(&self) -> Vec<String> {
        self.events.borrow().clone()
    }
}

impl ProgressReporter for RecordingReporter {
    fn step(&self, message: &str) {
        self.events.borrow_mut().push(format!("step: {message}"));
    }
    fn success(&self, message: &str) {
        self.events.borrow_mut().push(format!("success: {message}"));
    }
    fn warn(&self, message: &str) {
        self.events.borrow_mut().push(format!("warn: {message}"));
    }
}
