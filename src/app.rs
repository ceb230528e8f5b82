//! Application context — unified state passed to every command handler.
//!
//! `AppContext` is constructed once in `Cli::run()` and holds the output
//! context, the loaded configuration, and the production adapters. Adding a
//! new cross-cutting concern requires only one field change here — zero
//! command signatures change.

use std::path::PathBuf;

use anyhow::Result;

use crate::application::ports::ConfigStore;
use crate::domain::DeployConfig;
use crate::infra::{AwsCli, CurlProbe, NpmBuilder, TerraformCli, TokioCommandRunner, YamlConfigStore};
use crate::output::{OutputContext, TerminalReporter};

/// Flags passed from the top-level CLI to `AppContext::new`.
pub struct AppFlags {
    /// Disable ANSI color output.
    pub no_color: bool,
    /// Suppress non-error output.
    pub quiet: bool,
    /// Skip interactive prompts (also set by `CI` / `DOCSHIP_YES` env vars).
    pub yes: bool,
    /// Explicit config file path (`--config` / `DOCSHIP_CONFIG`).
    pub config: Option<PathBuf>,
}

/// Unified application context passed to every command handler.
pub struct AppContext {
    /// Terminal output context (colors, quiet mode).
    pub output: OutputContext,
    /// Loaded deployment configuration.
    pub config: DeployConfig,
    /// Provisioning tool adapter.
    pub terraform: TerraformCli<TokioCommandRunner>,
    /// Storage and CDN adapter.
    pub aws: AwsCli<TokioCommandRunner>,
    /// Site generator adapter.
    pub npm: NpmBuilder<TokioCommandRunner>,
    /// HTTP probe used by MIME diagnostics.
    pub probe: CurlProbe<TokioCommandRunner>,
    /// When `true`, skip interactive prompts and use defaults.
    pub non_interactive: bool,
}

impl AppContext {
    /// Construct an `AppContext` from top-level CLI flags.
    ///
    /// # Errors
    ///
    /// Returns an error if an existing config file cannot be read or parsed.
    pub fn new(flags: &AppFlags) -> Result<Self> {
        let ci_env = std::env::var("CI").is_ok() || std::env::var("DOCSHIP_YES").is_ok();
        let non_interactive = flags.yes || ci_env;

        let config = YamlConfigStore::new(flags.config.clone()).load()?;

        Ok(Self {
            output: OutputContext::new(flags.no_color, flags.quiet),
            terraform: TerraformCli::from_config(&config),
            aws: AwsCli::from_config(&config),
            npm: NpmBuilder::from_config(&config),
            probe: CurlProbe::default(),
            config,
            non_interactive,
        })
    }

    /// Returns a `ProgressReporter` backed by this context's terminal output.
    #[must_use]
    pub fn reporter(&self) -> TerminalReporter<'_> {
        TerminalReporter::new(&self.output)
    }

    /// Ask the user for confirmation.
    ///
    /// When `non_interactive` is `true` (CI, `--yes` flag, or `DOCSHIP_YES`
    /// env), returns `default` immediately without prompting.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal prompt fails (e.g. no TTY available).
    pub fn confirm(&self, prompt: &str, default: bool) -> Result<bool> {
        if self.non_interactive {
            return Ok(default);
        }
        let confirmed = dialoguer::Confirm::new()
            .with_prompt(prompt)
            .default(default)
            .interact()?;
        Ok(confirmed)
    }
}
