//! Cloud CLI adapter — object storage synchronization and CDN invalidation.
//!
//! Generic over `R: CommandRunner`, same shape as [`TerraformCli`]: the
//! adapter builds argument lists, the runner executes them.
//!
//! [`TerraformCli`]: crate::infra::terraform::TerraformCli

use std::path::Path;
use std::process::{ExitStatus, Output};

use anyhow::{Context, Result};

use crate::application::ports::{CdnCache, CommandRunner, ObjectStore};
use crate::domain::DeployConfig;
use crate::infra::command_runner::TokioCommandRunner;

/// Form the storage URI for a bucket, `s3://<bucket>`.
#[must_use]
pub fn bucket_uri(bucket: &str) -> String {
    format!("s3://{bucket}")
}

/// Cloud CLI adapter for storage and CDN operations.
pub struct AwsCli<R: CommandRunner> {
    runner: R,
    bin: String,
}

impl<R: CommandRunner> AwsCli<R> {
    /// Create a new adapter with an explicit runner instance.
    pub fn new(runner: R, bin: impl Into<String>) -> Self {
        Self {
            runner,
            bin: bin.into(),
        }
    }

    async fn passthrough(&self, desc: &str, args: &[&str]) -> Result<ExitStatus> {
        self.runner
            .run_status(&self.bin, args, None)
            .await
            .with_context(|| format!("failed to run {} {desc}", self.bin))
    }
}

impl AwsCli<TokioCommandRunner> {
    /// Convenience constructor for production use.
    #[must_use]
    pub fn from_config(config: &DeployConfig) -> Self {
        Self::new(TokioCommandRunner, &config.aws_bin)
    }
}

impl<R: CommandRunner> ObjectStore for AwsCli<R> {
    async fn sync(
        &self,
        build_dir: &Path,
        bucket: &str,
        cache_control: &str,
        delete_removed: bool,
    ) -> Result<ExitStatus> {
        let source = build_dir.display().to_string();
        let dest = bucket_uri(bucket);
        let mut args = vec![
            "s3",
            "sync",
            source.as_str(),
            dest.as_str(),
            "--cache-control",
            cache_control,
        ];
        if delete_removed {
            args.push("--delete");
        }
        self.passthrough("s3 sync", &args).await
    }

    async fn rewrite_metadata(
        &self,
        bucket: &str,
        prefix: &str,
        include: Option<&str>,
        content_type: &str,
        cache_control: &str,
    ) -> Result<ExitStatus> {
        let uri = format!("{}/{prefix}", bucket_uri(bucket));
        let mut args = vec!["s3", "cp", uri.as_str(), uri.as_str(), "--recursive"];
        if let Some(glob) = include {
            args.extend_from_slice(&["--exclude", "*", "--include", glob]);
        }
        args.extend_from_slice(&[
            "--metadata-directive",
            "REPLACE",
            "--content-type",
            content_type,
            "--cache-control",
            cache_control,
        ]);
        self.passthrough("s3 cp", &args).await
    }

    async fn remove_all(&self, bucket: &str) -> Result<ExitStatus> {
        let uri = bucket_uri(bucket);
        self.passthrough("s3 rm", &["s3", "rm", uri.as_str(), "--recursive"])
            .await
    }

    async fn list(&self, bucket: &str, prefix: &str) -> Result<ExitStatus> {
        let uri = format!("{}/{prefix}", bucket_uri(bucket));
        self.passthrough("s3 ls", &["s3", "ls", uri.as_str(), "--recursive"])
            .await
    }

    async fn head_object(&self, bucket: &str, key: &str) -> Result<Output> {
        self.runner
            .run(
                &self.bin,
                &["s3api", "head-object", "--bucket", bucket, "--key", key],
                None,
            )
            .await
            .with_context(|| format!("failed to run {} s3api head-object", self.bin))
    }
}

impl<R: CommandRunner> CdnCache for AwsCli<R> {
    async fn create_invalidation(
        &self,
        distribution_id: &str,
        paths: &[String],
    ) -> Result<Output> {
        let mut args = vec![
            "cloudfront",
            "create-invalidation",
            "--distribution-id",
            distribution_id,
            "--paths",
        ];
        args.extend(paths.iter().map(String::as_str));
        self.runner
            .run(&self.bin, &args, None)
            .await
            .with_context(|| format!("failed to run {} cloudfront create-invalidation", self.bin))
    }

    async fn wait_invalidation(
        &self,
        distribution_id: &str,
        invalidation_id: &str,
    ) -> Result<ExitStatus> {
        self.passthrough(
            "cloudfront wait",
            &[
                "cloudfront",
                "wait",
                "invalidation-completed",
                "--distribution-id",
                distribution_id,
                "--id",
                invalidation_id,
            ],
        )
        .await
    }
}
