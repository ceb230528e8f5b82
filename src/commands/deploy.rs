//! `docship deploy` — the full deployment pipeline.

use anyhow::Result;

use crate::app::AppContext;
use crate::application::services::deploy as service;

/// Run `docship deploy`.
///
/// # Errors
///
/// Returns the first pipeline error; later steps are not attempted.
pub async fn run(app: &AppContext) -> Result<()> {
    let summary = service::deploy(
        &app.npm,
        &app.terraform,
        &app.aws,
        &app.aws,
        &app.reporter(),
        &app.config,
    )
    .await?;

    if !app.output.quiet {
        println!();
        app.output.header("Deployed");
        app.output.kv("Bucket", &summary.outputs.bucket_name);
        if let Some(failover) = &summary.outputs.failover_bucket_name {
            app.output.kv("Failover", failover);
        }
        app.output.kv("Distribution", &summary.outputs.distribution_id);
        app.output.kv("Invalidation", &summary.invalidation_id);
    }
    Ok(())
}
