//! Application services — pure orchestration over port traits.
//!
//! Services import only from `crate::domain` and `crate::application::ports`.
//! All I/O is routed through injected ports so every pipeline is testable
//! with recording mocks.

pub mod deploy;
pub mod invalidate;
pub mod mime;
pub mod outputs;
pub mod publish;
