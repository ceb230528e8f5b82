//! `docship outputs` — show current infrastructure outputs.

use anyhow::{Context, Result};
use clap::Args;

use crate::app::AppContext;
use crate::application::services::outputs as service;

/// Arguments for the outputs command.
#[derive(Args, Default)]
pub struct OutputsArgs {
    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

/// Run `docship outputs`.
///
/// # Errors
///
/// Returns an error if the provisioning query fails or a required output key
/// is missing.
pub async fn run(app: &AppContext, args: &OutputsArgs) -> Result<()> {
    let outputs = service::read(&app.terraform).await?;

    if args.json {
        let text = serde_json::to_string_pretty(&outputs).context("JSON serialization failed")?;
        println!("{text}");
        return Ok(());
    }

    app.output.kv("Bucket", &outputs.bucket_name);
    if let Some(failover) = &outputs.failover_bucket_name {
        app.output.kv("Failover", failover);
    }
    app.output.kv("Distribution", &outputs.distribution_id);
    Ok(())
}
