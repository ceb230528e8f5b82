//! `docship build` — build the static site.

use anyhow::Result;

use crate::app::AppContext;
use crate::application::services::deploy as service;

/// Run `docship build`.
///
/// # Errors
///
/// Returns an error if the site generator exits non-zero.
pub async fn run(app: &AppContext) -> Result<()> {
    service::build_site(&app.npm, &app.reporter()).await
}
