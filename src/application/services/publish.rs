//! Application service — publish the build output to storage buckets.

use anyhow::Result;

use crate::application::ports::{ObjectStore, ProgressReporter};
use crate::domain::{DeployConfig, InfraOutputs, ensure_success};

/// Content type applied during the HTML metadata rewrite pass.
pub const HTML_CONTENT_TYPE: &str = "text/html; charset=utf-8";

/// Publish the build directory into a single bucket.
///
/// Two passes: a recursive sync with the assets cache policy, then a
/// metadata-only rewrite of `*.html` objects to the shorter HTML policy so
/// entry points revalidate on every request.
///
/// # Errors
///
/// Returns an error when either pass exits non-zero. The bucket may be left
/// partially updated; there is no rollback.
pub async fn publish_bucket(
    store: &impl ObjectStore,
    reporter: &impl ProgressReporter,
    config: &DeployConfig,
    bucket: &str,
) -> Result<()> {
    reporter.step(&format!(
        "syncing {} to s3://{bucket}...",
        config.build_dir.display()
    ));
    let status = store
        .sync(
            &config.build_dir,
            bucket,
            &config.cache.assets,
            config.delete_removed,
        )
        .await?;
    ensure_success("s3 sync", status)?;

    reporter.step("rewriting HTML cache metadata...");
    let status = store
        .rewrite_metadata(bucket, "", Some("*.html"), HTML_CONTENT_TYPE, &config.cache.html)
        .await?;
    ensure_success("s3 cp", status)?;

    reporter.success(&format!("published to s3://{bucket}"));
    Ok(())
}

/// Publish to the primary bucket and then, when present, the failover.
///
/// Buckets are published strictly sequentially. A failure stops the run
/// without rolling back buckets already published; an absent failover bucket
/// is skipped without error.
///
/// # Errors
///
/// Returns the first publish error.
pub async fn publish_all(
    store: &impl ObjectStore,
    reporter: &impl ProgressReporter,
    config: &DeployConfig,
    outputs: &InfraOutputs,
) -> Result<()> {
    for bucket in outputs.buckets() {
        publish_bucket(store, reporter, config, bucket).await?;
    }
    Ok(())
}

/// Remove every object from a bucket.
///
/// # Errors
///
/// Returns an error when the removal exits non-zero.
pub async fn clear_bucket(
    store: &impl ObjectStore,
    reporter: &impl ProgressReporter,
    bucket: &str,
) -> Result<()> {
    reporter.step(&format!("clearing s3://{bucket}..."));
    let status = store.remove_all(bucket).await?;
    ensure_success("s3 rm", status)?;
    reporter.success("bucket cleared");
    Ok(())
}
