//! Application service — the full deployment pipeline.
//!
//! Fixed sequence: build → apply infrastructure → read outputs → publish →
//! invalidate. Entirely synchronous from the operator's point of view; each
//! step must fully succeed before the next starts.

use anyhow::Result;

use crate::application::ports::{
    CdnCache, InfraLifecycle, ObjectStore, OutputsReader, ProgressReporter, SiteBuilder,
};
use crate::application::services::{invalidate, outputs, publish};
use crate::domain::{DeployConfig, InfraOutputs, ensure_success};

/// What a completed deploy touched.
#[derive(Debug)]
pub struct DeploySummary {
    /// Infrastructure outputs the deploy ran against.
    pub outputs: InfraOutputs,
    /// Id of the invalidation issued after publishing.
    pub invalidation_id: String,
}

/// Build the static site.
///
/// # Errors
///
/// Returns an error when the build exits non-zero; nothing downstream runs.
pub async fn build_site(
    builder: &impl SiteBuilder,
    reporter: &impl ProgressReporter,
) -> Result<()> {
    reporter.step("building site...");
    ensure_success("npm run build", builder.build().await?)?;
    reporter.success("build complete");
    Ok(())
}

/// Apply infrastructure changes, running init first (idempotent).
///
/// # Errors
///
/// Returns an error when init or apply exits non-zero.
pub async fn apply_infra(
    infra: &impl InfraLifecycle,
    reporter: &impl ProgressReporter,
) -> Result<()> {
    reporter.step("initializing infrastructure...");
    ensure_success("terraform init", infra.init().await?)?;
    reporter.step("applying infrastructure changes...");
    ensure_success("terraform apply", infra.apply().await?)?;
    reporter.success("infrastructure up to date");
    Ok(())
}

/// Run the full deployment pipeline.
///
/// # Errors
///
/// Returns the first step's error; later steps are not attempted and nothing
/// is rolled back.
pub async fn deploy(
    builder: &impl SiteBuilder,
    infra: &(impl InfraLifecycle + OutputsReader),
    store: &impl ObjectStore,
    cdn: &impl CdnCache,
    reporter: &impl ProgressReporter,
    config: &DeployConfig,
) -> Result<DeploySummary> {
    build_site(builder, reporter).await?;
    apply_infra(infra, reporter).await?;

    reporter.step("fetching infrastructure outputs...");
    let outputs = outputs::read(infra).await?;

    publish::publish_all(store, reporter, config, &outputs).await?;

    let invalidation_id = invalidate::run(cdn, reporter, config, &outputs.distribution_id).await?;

    Ok(DeploySummary {
        outputs,
        invalidation_id,
    })
}
