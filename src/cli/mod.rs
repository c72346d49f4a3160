//! Command Line Interface (CLI) layer for whiteborder.
//!
//! This module defines argument parsing (`args`), error types (`errors`),
//! and the orchestration logic (`runner`) that turns flags into a
//! `BorderConfig` and runs one batch into a zip archive.
//!
//! If you are embedding whiteborder into another application, prefer using
//! the high-level `whiteborder::api` module instead of calling the CLI code.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
