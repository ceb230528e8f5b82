//! Application service — MIME-type diagnostics and repair.
//!
//! Some generator releases upload JavaScript and CSS with a generic content
//! type, which the CDN then serves as `binary/octet-stream`. `debug` inspects
//! what is actually in the bucket and at the edge; `fix` rewrites the
//! metadata in place and purges the cache.

use anyhow::Result;

use crate::application::ports::{CdnCache, EdgeProbe, ObjectStore, ProgressReporter};
use crate::application::services::invalidate;
use crate::application::services::publish::HTML_CONTENT_TYPE;
use crate::domain::{DeployConfig, InfraOutputs, ensure_success};

/// Content type applied to JavaScript assets by the repair pass.
pub const JS_CONTENT_TYPE: &str = "application/javascript";
/// Content type applied to CSS assets by the repair pass.
pub const CSS_CONTENT_TYPE: &str = "text/css";

/// Inspect bucket contents and edge responses for MIME problems.
///
/// The object listing is required; the head-object and HTTP probes are
/// best-effort — their failures are reported and execution continues.
///
/// # Errors
///
/// Returns an error only when the object listing itself fails.
pub async fn debug(
    store: &impl ObjectStore,
    probe: &impl EdgeProbe,
    reporter: &impl ProgressReporter,
    config: &DeployConfig,
    outputs: &InfraOutputs,
) -> Result<()> {
    let bucket = &outputs.bucket_name;

    reporter.step(&format!("listing JavaScript assets in s3://{bucket}..."));
    ensure_success("s3 ls", store.list(bucket, "assets/js/").await?)?;

    if let Some(key) = &config.mime_probe_key {
        match store.head_object(bucket, key).await {
            Ok(out) if out.status.success() => {
                reporter.success(&format!("object exists: {key}"));
            }
            Ok(_) => reporter.warn(&format!("object not found: {key}")),
            Err(err) => reporter.warn(&format!("head-object probe failed: {err:#}")),
        }
        probe_url(probe, reporter, &format!("https://{bucket}.s3.amazonaws.com/{key}")).await;
        if let Some(site) = &config.site_url {
            probe_url(probe, reporter, &format!("{}/{key}", site.trim_end_matches('/'))).await;
        }
    } else if let Some(site) = &config.site_url {
        probe_url(probe, reporter, site).await;
    }

    Ok(())
}

/// HEAD a URL and report the status line and content type. Never fails.
async fn probe_url(probe: &impl EdgeProbe, reporter: &impl ProgressReporter, url: &str) {
    reporter.step(&format!("probing {url}..."));
    match probe.head(url).await {
        Ok(out) if out.status.success() => {
            for line in String::from_utf8_lossy(&out.stdout).lines() {
                let lower = line.to_ascii_lowercase();
                if lower.starts_with("http/") || lower.starts_with("content-type") {
                    reporter.success(line.trim());
                }
            }
        }
        Ok(_) => reporter.warn(&format!("probe failed: {url}")),
        Err(err) => reporter.warn(&format!("probe failed: {err:#}")),
    }
}

/// Rewrite JavaScript, CSS, and HTML object metadata, then purge the cache.
///
/// Returns the invalidation id.
///
/// # Errors
///
/// Returns an error when any rewrite pass or the invalidation fails.
pub async fn fix(
    store: &impl ObjectStore,
    cdn: &impl CdnCache,
    reporter: &impl ProgressReporter,
    config: &DeployConfig,
    outputs: &InfraOutputs,
) -> Result<String> {
    let bucket = &outputs.bucket_name;

    reporter.step("rewriting JavaScript content types...");
    let status = store
        .rewrite_metadata(bucket, "assets/js/", None, JS_CONTENT_TYPE, &config.cache.assets)
        .await?;
    ensure_success("s3 cp", status)?;

    reporter.step("rewriting CSS content types...");
    let status = store
        .rewrite_metadata(bucket, "assets/css/", None, CSS_CONTENT_TYPE, &config.cache.assets)
        .await?;
    ensure_success("s3 cp", status)?;

    reporter.step("rewriting HTML content types...");
    let status = store
        .rewrite_metadata(bucket, "", Some("*.html"), HTML_CONTENT_TYPE, &config.cache.html)
        .await?;
    ensure_success("s3 cp", status)?;

    reporter.success("content types rewritten");

    invalidate::run(cdn, reporter, config, &outputs.distribution_id).await
}
