//! Infrastructure lifecycle commands — thin pass-throughs to the
//! provisioning tool. `plan` and `apply` always run `init` first; it is
//! idempotent and cheap when the working directory is already initialized.

use anyhow::Result;

use crate::app::AppContext;
use crate::application::ports::InfraLifecycle;
use crate::application::services::deploy as service;
use crate::domain::ensure_success;

/// Run `docship init`.
///
/// # Errors
///
/// Returns an error if the provisioning tool exits non-zero.
pub async fn init(app: &AppContext) -> Result<()> {
    ensure_success("terraform init", app.terraform.init().await?)?;
    app.output.success("infrastructure initialized");
    Ok(())
}

/// Run `docship plan` (init first).
///
/// # Errors
///
/// Returns an error if init or plan exits non-zero.
pub async fn plan(app: &AppContext) -> Result<()> {
    ensure_success("terraform init", app.terraform.init().await?)?;
    ensure_success("terraform plan", app.terraform.plan().await?)?;
    Ok(())
}

/// Run `docship apply` (init first).
///
/// # Errors
///
/// Returns an error if init or apply exits non-zero.
pub async fn apply(app: &AppContext) -> Result<()> {
    service::apply_infra(&app.terraform, &app.reporter()).await
}

/// Run `docship destroy`. Prompts for confirmation unless non-interactive.
///
/// # Errors
///
/// Returns an error if the prompt fails or the provisioning tool exits
/// non-zero.
pub async fn destroy(app: &AppContext) -> Result<()> {
    if !app.output.quiet {
        println!();
        println!("This will destroy the website infrastructure, including the");
        println!("storage buckets and the CDN distribution.");
        println!();
    }

    if !app.non_interactive && !app.confirm("Continue?", false)? {
        println!("Cancelled.");
        return Ok(());
    }

    ensure_success("terraform destroy", app.terraform.destroy().await?)?;
    app.output.success("infrastructure destroyed");
    Ok(())
}
