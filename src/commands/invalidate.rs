//! `docship invalidate` — purge the CDN cache.

use anyhow::Result;
use clap::Args;

use crate::app::AppContext;
use crate::application::ports::ProgressReporter as _;
use crate::application::services::{invalidate as service, outputs};
use crate::output::progress;

/// Arguments for the invalidate command.
#[derive(Args, Default)]
pub struct InvalidateArgs {
    /// Target distribution; read from the infrastructure outputs when omitted
    pub distribution_id: Option<String>,
}

/// Run `docship invalidate [DISTRIBUTION_ID]`.
///
/// # Errors
///
/// Returns an error if the outputs lookup (when needed), the invalidation
/// request, or the completion wait fails.
pub async fn run(app: &AppContext, args: InvalidateArgs) -> Result<()> {
    let reporter = app.reporter();
    let distribution_id = match args.distribution_id {
        Some(id) => id,
        None => outputs::read(&app.terraform).await?.distribution_id,
    };

    reporter.step(&format!("invalidating distribution {distribution_id}..."));
    let id = service::create(&app.aws, &app.config, &distribution_id).await?;
    reporter.success(&format!("invalidation created: {id}"));

    if !app.config.wait_for_completion {
        return Ok(());
    }

    if app.output.show_progress() {
        let pb = progress::spinner("waiting for invalidation to complete...");
        let result = service::wait(&app.aws, &distribution_id, &id).await;
        if result.is_ok() {
            progress::finish_ok(&pb, "invalidation completed");
        } else {
            pb.finish_and_clear();
        }
        result
    } else {
        reporter.step("waiting for invalidation to complete...");
        service::wait(&app.aws, &distribution_id, &id).await?;
        reporter.success("invalidation completed");
        Ok(())
    }
}
