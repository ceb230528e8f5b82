//! Infrastructure outputs — the one transient data structure in the system.

use serde::Serialize;
use serde_json::Value;

use crate::domain::error::OutputsError;

/// Top-level output keys emitted by `terraform output -json`.
pub const KEY_BUCKET: &str = "website_bucket_name";
pub const KEY_FAILOVER_BUCKET: &str = "website_failover_bucket_name";
pub const KEY_DISTRIBUTION: &str = "cloudfront_distribution_id";

/// Parsed infrastructure outputs.
///
/// Produced once per run, consumed immediately, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InfraOutputs {
    /// Primary website bucket.
    pub bucket_name: String,
    /// Optional failover bucket kept in sync with the primary.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failover_bucket_name: Option<String>,
    /// CDN distribution serving the site.
    pub distribution_id: String,
}

impl InfraOutputs {
    /// Parse `terraform output -json` text.
    ///
    /// Each output is an object of the form `{"value": "..."}`. The failover
    /// bucket is optional; the other two keys are required.
    ///
    /// # Errors
    ///
    /// Returns [`OutputsError::InvalidJson`] on malformed JSON and
    /// [`OutputsError::MissingKey`] when a required key (or its `value`
    /// string) is absent.
    pub fn from_json(text: &str) -> Result<Self, OutputsError> {
        let data: Value = serde_json::from_str(text)?;
        Ok(Self {
            bucket_name: required_value(&data, KEY_BUCKET)?,
            failover_bucket_name: optional_value(&data, KEY_FAILOVER_BUCKET),
            distribution_id: required_value(&data, KEY_DISTRIBUTION)?,
        })
    }

    /// All buckets to publish, primary first.
    #[must_use]
    pub fn buckets(&self) -> Vec<&str> {
        let mut buckets = vec![self.bucket_name.as_str()];
        if let Some(failover) = &self.failover_bucket_name {
            buckets.push(failover.as_str());
        }
        buckets
    }
}

fn required_value(data: &Value, key: &'static str) -> Result<String, OutputsError> {
    optional_value(data, key).ok_or(OutputsError::MissingKey(key))
}

fn optional_value(data: &Value, key: &str) -> Option<String> {
    data.get(key)?.get("value")?.as_str().map(str::to_owned)
}
