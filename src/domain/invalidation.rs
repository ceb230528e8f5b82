//! Parsing of the CDN CLI's invalidation-creation response.

use serde_json::Value;

use crate::domain::error::InvalidationError;

/// Extract the invalidation id from a `create-invalidation` response.
///
/// The response carries the id at `Invalidation.Id`; it is returned verbatim.
///
/// # Errors
///
/// Returns [`InvalidationError::InvalidJson`] on malformed JSON and
/// [`InvalidationError::MissingId`] when the key path is absent.
pub fn parse_invalidation_id(text: &str) -> Result<String, InvalidationError> {
    let data: Value = serde_json::from_str(text)?;
    data.get("Invalidation")
        .and_then(|inv| inv.get("Id"))
        .and_then(Value::as_str)
        .map(str::to_owned)
        .ok_or(InvalidationError::MissingId)
}
