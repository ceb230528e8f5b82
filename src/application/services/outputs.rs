//! Application service — read and parse infrastructure outputs.

use anyhow::Result;

use crate::application::ports::OutputsReader;
use crate::domain::{InfraOutputs, ensure_success};

/// Query the provisioning tool for its current outputs.
///
/// # Errors
///
/// Returns an error if the query exits non-zero or a required output key is
/// missing — there is no local recovery for either.
pub async fn read(reader: &impl OutputsReader) -> Result<InfraOutputs> {
    let output = reader.read_outputs().await?;
    ensure_success("terraform output", output.status)?;
    let text = String::from_utf8_lossy(&output.stdout);
    Ok(InfraOutputs::from_json(&text)?)
}
