//! Application service — CDN cache invalidation.

use anyhow::Result;

use crate::application::ports::{CdnCache, ProgressReporter};
use crate::domain::invalidation::parse_invalidation_id;
use crate::domain::{DeployConfig, ensure_success};

/// Request an invalidation and return its id, verbatim from the response.
///
/// # Errors
///
/// Returns an error if the request exits non-zero or the response carries no
/// invalidation id.
pub async fn create(
    cdn: &impl CdnCache,
    config: &DeployConfig,
    distribution_id: &str,
) -> Result<String> {
    let output = cdn
        .create_invalidation(distribution_id, &config.invalidation_paths)
        .await?;
    ensure_success("cloudfront create-invalidation", output.status)?;
    let text = String::from_utf8_lossy(&output.stdout);
    Ok(parse_invalidation_id(&text)?)
}

/// Block until the CDN reports the invalidation completed.
///
/// No timeout beyond the CDN CLI's own `wait` behavior.
///
/// # Errors
///
/// Returns an error when the wait exits non-zero.
pub async fn wait(
    cdn: &impl CdnCache,
    distribution_id: &str,
    invalidation_id: &str,
) -> Result<()> {
    let status = cdn.wait_invalidation(distribution_id, invalidation_id).await?;
    ensure_success("cloudfront wait", status)?;
    Ok(())
}

/// Create an invalidation and, when configured, wait for it to complete.
///
/// # Errors
///
/// Returns the first error from either phase.
pub async fn run(
    cdn: &impl CdnCache,
    reporter: &impl ProgressReporter,
    config: &DeployConfig,
    distribution_id: &str,
) -> Result<String> {
    reporter.step(&format!("invalidating distribution {distribution_id}..."));
    let id = create(cdn, config, distribution_id).await?;
    reporter.success(&format!("invalidation created: {id}"));

    if config.wait_for_completion {
        reporter.step("waiting for invalidation to complete...");
        wait(cdn, distribution_id, &id).await?;
        reporter.success("invalidation completed");
    }
    Ok(id)
}
