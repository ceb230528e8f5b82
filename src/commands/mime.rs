//! `docship debug-mime-types` / `docship fix-mime-types`.

use anyhow::Result;

use crate::app::AppContext;
use crate::application::services::{mime as service, outputs};

/// Run `docship debug-mime-types`.
///
/// # Errors
///
/// Returns an error if the outputs lookup or the object listing fails;
/// probe failures are informational only.
pub async fn debug(app: &AppContext) -> Result<()> {
    let outputs = outputs::read(&app.terraform).await?;
    service::debug(
        &app.aws,
        &app.probe,
        &app.reporter(),
        &app.config,
        &outputs,
    )
    .await
}

/// Run `docship fix-mime-types`.
///
/// # Errors
///
/// Returns an error if the outputs lookup, any rewrite pass, or the
/// invalidation fails.
pub async fn fix(app: &AppContext) -> Result<()> {
    let outputs = outputs::read(&app.terraform).await?;
    let invalidation_id = service::fix(
        &app.aws,
        &app.aws,
        &app.reporter(),
        &app.config,
        &outputs,
    )
    .await?;
    app.output.kv("Invalidation", &invalidation_id);
    Ok(())
}
