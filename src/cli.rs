//! CLI argument parsing with clap derive

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::app::{AppContext, AppFlags};
use crate::commands;

/// Build, publish, and invalidate a static documentation site
#[derive(Parser)]
#[command(
    name = "docship",
    version,
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true, env = "NO_COLOR")]
    pub no_color: bool,

    /// Skip confirmation prompts
    #[arg(short = 'y', long, global = true)]
    pub yes: bool,

    /// Config file path
    #[arg(long, global = true, env = "DOCSHIP_CONFIG", value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Build the static site
    Build,

    /// Initialize the infrastructure working directory
    Init,

    /// Show pending infrastructure changes
    Plan,

    /// Apply infrastructure changes
    Apply,

    /// Destroy the managed infrastructure
    Destroy,

    /// Show current infrastructure outputs
    #[command(visible_alias = "get-outputs")]
    Outputs(commands::outputs::OutputsArgs),

    /// Sync the build output to a storage bucket
    #[command(visible_alias = "sync-s3")]
    Sync(commands::sync::SyncArgs),

    /// Sync the build output to the primary and failover buckets
    #[command(visible_alias = "sync-both-buckets")]
    SyncAll,

    /// Invalidate the CDN cache
    Invalidate(commands::invalidate::InvalidateArgs),

    /// Remove every object from a storage bucket
    #[command(visible_alias = "clear-bucket")]
    Clear(commands::clear::ClearArgs),

    /// Full pipeline: build, apply, sync, invalidate
    Deploy,

    /// Inspect bucket contents and edge responses for MIME problems
    DebugMimeTypes,

    /// Rewrite object content types and purge the cache
    FixMimeTypes,

    /// Show version
    Version,
}

impl Cli {
    /// Execute the CLI command.
    ///
    /// # Errors
    ///
    /// Returns an error if the command fails.
    pub async fn run(self) -> Result<()> {
        let Cli {
            quiet,
            no_color,
            yes,
            config,
            command,
        } = self;

        if let Command::Version = command {
            commands::version::run();
            return Ok(());
        }

        let app = AppContext::new(&AppFlags {
            no_color,
            quiet,
            yes,
            config,
        })?;

        match command {
            Command::Build => commands::build::run(&app).await,
            Command::Init => commands::infra::init(&app).await,
            Command::Plan => commands::infra::plan(&app).await,
            Command::Apply => commands::infra::apply(&app).await,
            Command::Destroy => commands::infra::destroy(&app).await,
            Command::Outputs(args) => commands::outputs::run(&app, &args).await,
            Command::Sync(args) => commands::sync::run(&app, args).await,
            Command::SyncAll => commands::sync::run_all(&app).await,
            Command::Invalidate(args) => commands::invalidate::run(&app, args).await,
            Command::Clear(args) => commands::clear::run(&app, args).await,
            Command::Deploy => commands::deploy::run(&app).await,
            Command::DebugMimeTypes => commands::mime::debug(&app).await,
            Command::FixMimeTypes => commands::mime::fix(&app).await,
            Command::Version => unreachable!("handled above"),
        }
    }
}
