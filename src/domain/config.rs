//! Deployment configuration.
//!
//! Everything here has a working default so a checkout with the conventional
//! layout (`app/` site, `terraform/` infrastructure) needs no config file at
//! all. A `docship.yaml` at the project root overrides individual fields.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Cache-control values applied during publishing.
///
/// Hashed assets are safe to cache forever; HTML entry points must
/// revalidate so a fresh deploy is picked up immediately.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CachePolicy {
    /// Cache-control for everything uploaded by the sync pass.
    pub assets: String,
    /// Cache-control for the metadata-only HTML rewrite pass.
    pub html: String,
}

impl Default for CachePolicy {
    fn default() -> Self {
        Self {
            assets: "public,max-age=31536000,immutable".to_owned(),
            html: "public,max-age=0,must-revalidate".to_owned(),
        }
    }
}

/// Full deployment configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DeployConfig {
    /// Directory where the site generator runs (`npm run build`).
    pub site_dir: PathBuf,
    /// Build output directory synced to the bucket.
    pub build_dir: PathBuf,
    /// Directory holding the infrastructure definition.
    pub infra_dir: PathBuf,
    /// Provisioning tool executable.
    pub terraform_bin: String,
    /// Cloud CLI executable (storage and CDN).
    pub aws_bin: String,
    /// Site generator package runner executable.
    pub npm_bin: String,
    /// Cache-control policy for published objects.
    pub cache: CachePolicy,
    /// Pass `--delete` to the sync so removed files disappear from the bucket.
    pub delete_removed: bool,
    /// Path patterns submitted with each invalidation.
    pub invalidation_paths: Vec<String>,
    /// Block until the CDN reports the invalidation completed.
    pub wait_for_completion: bool,
    /// Public site URL, probed by `debug-mime-types` when set.
    pub site_url: Option<String>,
    /// Object key probed by `debug-mime-types` when set, e.g. a main JS bundle.
    pub mime_probe_key: Option<String>,
}

impl Default for DeployConfig {
    fn default() -> Self {
        Self {
            site_dir: PathBuf::from("app"),
            build_dir: PathBuf::from("app/build"),
            infra_dir: PathBuf::from("terraform"),
            terraform_bin: "terraform".to_owned(),
            aws_bin: "aws".to_owned(),
            npm_bin: "npm".to_owned(),
            cache: CachePolicy::default(),
            delete_removed: true,
            invalidation_paths: vec!["/*".to_owned()],
            wait_for_completion: true,
            site_url: None,
            mime_probe_key: None,
        }
    }
}
