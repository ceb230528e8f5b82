//! Docship CLI - build, publish, and invalidate a static documentation site

use clap::Parser;

use docship::cli::Cli;
use docship::domain::CommandFailed;
use docship::output::OutputContext;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let output = OutputContext::new(cli.no_color, cli.quiet);
    if let Err(e) = cli.run().await {
        output.error(&format!("{e:#}"));
        // A failing external tool's exit code is the docship exit code.
        let code = e
            .downcast_ref::<CommandFailed>()
            .and_then(|failed| failed.code)
            .unwrap_or(1);
        std::process::exit(code);
    }
}
