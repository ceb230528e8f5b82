//! Infrastructure adapters — everything that touches processes or the
//! filesystem lives here, behind the port traits in `application::ports`.

pub mod aws;
pub mod command_runner;
pub mod config;
pub mod npm;
pub mod probe;
pub mod terraform;

pub use aws::AwsCli;
pub use command_runner::TokioCommandRunner;
pub use config::YamlConfigStore;
pub use npm::NpmBuilder;
pub use probe::CurlProbe;
pub use terraform::TerraformCli;
