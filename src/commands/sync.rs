//! `docship sync` / `docship sync-all` — publish the build output.

use anyhow::Result;
use clap::Args;

use crate::app::AppContext;
use crate::application::services::{outputs, publish};

/// Arguments for the sync command.
#[derive(Args, Default)]
pub struct SyncArgs {
    /// Target bucket; read from the infrastructure outputs when omitted
    pub bucket: Option<String>,
}

/// Run `docship sync [BUCKET]`.
///
/// # Errors
///
/// Returns an error if the outputs lookup (when needed) or either publish
/// pass fails.
pub async fn run(app: &AppContext, args: SyncArgs) -> Result<()> {
    let bucket = match args.bucket {
        Some(bucket) => bucket,
        None => outputs::read(&app.terraform).await?.bucket_name,
    };
    publish::publish_bucket(&app.aws, &app.reporter(), &app.config, &bucket).await
}

/// Run `docship sync-all` — primary bucket, then failover when configured.
///
/// # Errors
///
/// Returns the first publish error.
pub async fn run_all(app: &AppContext) -> Result<()> {
    let outputs = outputs::read(&app.terraform).await?;
    publish::publish_all(&app.aws, &app.reporter(), &app.config, &outputs).await
}
