//! `docship clear [BUCKET]` — remove every object from a bucket.

use anyhow::Result;
use clap::Args;

use crate::app::AppContext;
use crate::application::services::{outputs, publish};

/// Arguments for the clear command.
#[derive(Args, Default)]
pub struct ClearArgs {
    /// Target bucket; read from the infrastructure outputs when omitted
    pub bucket: Option<String>,
}

/// Run `docship clear [BUCKET]`. Prompts for confirmation unless
/// non-interactive.
///
/// # Errors
///
/// Returns an error if the prompt, the outputs lookup (when needed), or the
/// removal fails.
pub async fn run(app: &AppContext, args: ClearArgs) -> Result<()> {
    let bucket = match args.bucket {
        Some(bucket) => bucket,
        None => outputs::read(&app.terraform).await?.bucket_name,
    };

    if !app.non_interactive
        && !app.confirm(&format!("Remove every object from s3://{bucket}?"), false)?
    {
        println!("Cancelled.");
        return Ok(());
    }

    publish::clear_bucket(&app.aws, &app.reporter(), &bucket).await
}
